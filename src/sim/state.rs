//! Game state and core simulation types

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::entity::{Enemy, Particle, Player, Projectile};
use crate::surface::SurfaceSize;
use crate::tuning::Tuning;

/// Current phase of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GamePhase {
    /// Waiting for the first start command
    #[default]
    Idle,
    /// Frames and spawns are live
    Running,
    /// Player was hit; waiting for a restart
    GameOver,
}

/// Something the host may want to react to, recorded during a frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameEvent {
    /// Score changed to the given value
    ScoreChanged { score: u64 },
    /// Enemy survived a hit and is shrinking toward `target_radius`
    EnemyShrunk { pos: Vec2, target_radius: f32 },
    /// Enemy destroyed by a projectile
    EnemyDestroyed { pos: Vec2, radius: f32 },
    /// An enemy reached the player
    GameOver { score: u64 },
}

/// Complete shooter state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Seed the RNG was created from
    pub seed: u64,
    /// Drives spawns and particle bursts
    pub rng: Pcg32,
    pub tuning: Tuning,
    /// Fixed for the session
    pub size: SurfaceSize,
    pub phase: GamePhase,
    pub score: u64,
    /// Frames stepped since the last start
    pub frame_count: u64,
    pub player: Player,
    pub projectiles: Vec<Projectile>,
    pub enemies: Vec<Enemy>,
    pub particles: Vec<Particle>,
    /// Events recorded since the last drain
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Create an idle state for a surface of the given size
    pub fn new(seed: u64, size: SurfaceSize, tuning: Tuning) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            player: Player::new(size.center(), tuning.player_radius),
            tuning,
            size,
            phase: GamePhase::Idle,
            score: 0,
            frame_count: 0,
            projectiles: Vec::new(),
            enemies: Vec::new(),
            particles: Vec::new(),
            events: Vec::new(),
        }
    }

    /// Reset to a fresh run and enter `Running`
    ///
    /// The player is replaced, every container emptied and the score zeroed.
    /// The RNG keeps its stream so successive runs differ.
    pub fn start(&mut self) {
        self.player = Player::new(self.size.center(), self.tuning.player_radius);
        self.projectiles.clear();
        self.enemies.clear();
        self.particles.clear();
        self.events.clear();
        self.score = 0;
        self.frame_count = 0;
        self.phase = GamePhase::Running;
        self.events.push(GameEvent::ScoreChanged { score: 0 });
    }

    pub fn is_running(&self) -> bool {
        self.phase == GamePhase::Running
    }

    /// Surface center, where the player sits and projectiles launch
    pub fn center(&self) -> Vec2 {
        self.size.center()
    }

    /// Add points and record the change
    pub fn award(&mut self, points: u64) {
        self.score += points;
        self.events.push(GameEvent::ScoreChanged { score: self.score });
    }

    /// Take all events recorded since the last drain
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}
