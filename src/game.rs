//! Shooter session facade
//!
//! Owns the `GameState` and translates simulation events into HUD updates.
//! Hosts call `start`, `click`, `spawn_tick` and `frame`; nothing else
//! mutates the state.

use crate::sim::{self, GameEvent, GamePhase, GameState};
use crate::surface::{Hud, Surface, SurfaceSize};
use crate::tuning::Tuning;

/// Per-run tallies built from simulation events
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RunStats {
    /// Hits that shrank an enemy
    pub hits: u32,
    /// Enemies destroyed
    pub kills: u32,
}

/// A shooter session bound to one surface size
#[derive(Debug, Clone)]
pub struct Game {
    state: GameState,
    stats: RunStats,
}

impl Game {
    pub fn new(seed: u64, size: SurfaceSize, tuning: Tuning) -> Self {
        Self {
            state: GameState::new(seed, size, tuning),
            stats: RunStats::default(),
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Direct access for hosts and tests that stage scenarios
    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    pub fn phase(&self) -> GamePhase {
        self.state.phase
    }

    pub fn score(&self) -> u64 {
        self.state.score
    }

    pub fn is_running(&self) -> bool {
        self.state.is_running()
    }

    pub fn stats(&self) -> RunStats {
        self.stats
    }

    /// Start (or restart) a run: reset state, zero both score displays and
    /// hide the game-over modal
    pub fn start<H: Hud>(&mut self, hud: &mut H) {
        self.state.start();
        self.stats = RunStats::default();
        self.apply_events(hud);
        hud.set_final_score_display(0);
        hud.hide_game_over_modal();
        log::info!("Game started (seed {})", self.state.seed);
    }

    /// Pointer click in surface coordinates
    pub fn click(&mut self, x: f32, y: f32) -> bool {
        sim::on_surface_click(&mut self.state, x, y)
    }

    /// One spawner period
    pub fn spawn_tick(&mut self) -> bool {
        sim::spawn_enemy_tick(&mut self.state)
    }

    /// Step and draw one frame, then push any score or game-over changes
    /// to the HUD. Returns whether the game is still running.
    pub fn frame<S: Surface, H: Hud>(&mut self, now_ms: f64, surface: &mut S, hud: &mut H) -> bool {
        sim::tick(&mut self.state, now_ms, surface);
        self.apply_events(hud);
        self.state.is_running()
    }

    fn apply_events<H: Hud>(&mut self, hud: &mut H) {
        for event in self.state.drain_events() {
            match event {
                GameEvent::ScoreChanged { score } => hud.set_score_display(score),
                GameEvent::GameOver { score } => {
                    hud.set_final_score_display(score);
                    hud.show_game_over_modal();
                }
                GameEvent::EnemyShrunk { .. } => self.stats.hits += 1,
                GameEvent::EnemyDestroyed { .. } => self.stats.kills += 1,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{Enemy, Projectile};
    use crate::surface::{Color, RecordingHud, RecordingSurface};
    use glam::Vec2;

    fn game() -> Game {
        Game::new(77, SurfaceSize::new(800.0, 600.0), Tuning::default())
    }

    #[test]
    fn test_start_resets_hud() {
        let mut game = game();
        let mut hud = RecordingHud {
            modal_visible: true,
            final_score: Some(900),
            ..Default::default()
        };
        game.start(&mut hud);

        assert!(game.is_running());
        assert_eq!(hud.score(), Some(0));
        assert_eq!(hud.final_score, Some(0));
        assert!(!hud.modal_visible);
    }

    #[test]
    fn test_inputs_ignored_before_start() {
        let mut game = game();
        assert!(!game.click(100.0, 100.0));
        assert!(!game.spawn_tick());
        assert_eq!(game.phase(), GamePhase::Idle);
    }

    #[test]
    fn test_game_over_shows_modal_with_final_score() {
        let mut game = game();
        let mut hud = RecordingHud::default();
        let mut surface = RecordingSurface::new(800.0, 600.0);
        game.start(&mut hud);

        game.state_mut().score = 350;
        game.state_mut().enemies.push(Enemy::new(
            Vec2::new(400.0, 300.0),
            8.0,
            Color::hue(0.0),
            Vec2::ZERO,
        ));

        assert!(!game.frame(0.0, &mut surface, &mut hud));
        assert_eq!(game.phase(), GamePhase::GameOver);
        assert!(hud.modal_visible);
        assert_eq!(hud.final_score, Some(350));

        // Spawner and clicks are inert after game over
        assert!(!game.spawn_tick());
        assert!(!game.click(0.0, 0.0));

        // Restart brings everything back
        game.start(&mut hud);
        assert!(game.is_running());
        assert!(!hud.modal_visible);
        assert_eq!(game.score(), 0);
        assert!(game.state().enemies.is_empty());
    }

    #[test]
    fn test_stats_count_hits_and_kills() {
        let mut game = game();
        let mut hud = RecordingHud::default();
        let mut surface = RecordingSurface::new(800.0, 600.0);
        game.start(&mut hud);

        for (x, radius) in [(100.0, 25.0), (300.0, 12.0)] {
            let pos = Vec2::new(x, 100.0);
            let state = game.state_mut();
            state
                .enemies
                .push(Enemy::new(pos, radius, Color::hue(120.0), Vec2::ZERO));
            state
                .projectiles
                .push(Projectile::new(pos, 5.0, Vec2::ZERO));
        }
        game.frame(0.0, &mut surface, &mut hud);

        // One projectile per enemy: 25 shrinks, 12 dies
        assert_eq!(game.stats(), RunStats { hits: 1, kills: 1 });
        assert_eq!(game.score(), 350);

        game.start(&mut hud);
        assert_eq!(game.stats(), RunStats::default());
    }
}
