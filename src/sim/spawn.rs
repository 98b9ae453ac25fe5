//! Enemy spawner
//!
//! Enemies appear just beyond a random surface edge and fly in a straight
//! line toward the center. They never re-aim after spawning.

use glam::Vec2;
use rand::Rng;

use super::entity::Enemy;
use super::state::GameState;
use crate::aim;
use crate::surface::{Color, SurfaceSize};
use crate::tuning::Tuning;

/// Which surface edge an enemy entered from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpawnEdge {
    Left,
    Right,
    Top,
    Bottom,
}

/// Build one enemy just outside the surface, aimed at its center
pub fn random_enemy<R: Rng>(rng: &mut R, size: SurfaceSize, tuning: &Tuning) -> (Enemy, SpawnEdge) {
    let radius = if tuning.enemy_max_spawn_radius > tuning.enemy_min_spawn_radius {
        rng.random_range(tuning.enemy_min_spawn_radius..tuning.enemy_max_spawn_radius)
    } else {
        tuning.enemy_min_spawn_radius
    };

    let (pos, edge) = if rng.random_bool(0.5) {
        let y = rng.random_range(0.0..size.height);
        if rng.random_bool(0.5) {
            (Vec2::new(-radius, y), SpawnEdge::Left)
        } else {
            (Vec2::new(size.width + radius, y), SpawnEdge::Right)
        }
    } else {
        let x = rng.random_range(0.0..size.width);
        if rng.random_bool(0.5) {
            (Vec2::new(x, -radius), SpawnEdge::Top)
        } else {
            (Vec2::new(x, size.height + radius), SpawnEdge::Bottom)
        }
    };

    let color = Color::hue(rng.random_range(0.0..360.0));
    let vel = aim(pos, size.center());

    (Enemy::new(pos, radius, color, vel), edge)
}

/// One spawner period: append a new enemy while the game is running
///
/// Returns whether an enemy was spawned.
pub fn spawn_enemy_tick(state: &mut GameState) -> bool {
    if !state.is_running() {
        return false;
    }

    let (enemy, edge) = random_enemy(&mut state.rng, state.size, &state.tuning);
    log::debug!(
        "Spawned enemy r={:.1} from {:?} at ({:.0}, {:.0})",
        enemy.body.radius,
        edge,
        enemy.body.pos.x,
        enemy.body.pos.y
    );
    state.enemies.push(enemy);
    true
}

/// Fixed-interval spawn timer for hosts that poll a clock
///
/// Browser hosts use a real interval timer instead; this drives headless
/// runs. A stopped clock never fires.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpawnClock {
    pub interval_ms: f64,
    next_ms: Option<f64>,
}

impl SpawnClock {
    pub fn new(interval_ms: f64) -> Self {
        Self {
            interval_ms,
            next_ms: None,
        }
    }

    /// (Re)arm so the first spawn lands one interval after `now_ms`
    pub fn start(&mut self, now_ms: f64) {
        self.next_ms = Some(now_ms + self.interval_ms);
    }

    pub fn stop(&mut self) {
        self.next_ms = None;
    }

    pub fn is_armed(&self) -> bool {
        self.next_ms.is_some()
    }

    /// Number of spawn periods elapsed since the last poll
    pub fn poll(&mut self, now_ms: f64) -> u32 {
        let Some(next) = self.next_ms else {
            return 0;
        };
        if !(self.interval_ms > 0.0 && self.interval_ms.is_finite()) || !(now_ms >= next) {
            return 0;
        }
        let periods = ((now_ms - next) / self.interval_ms).floor() + 1.0;
        self.next_ms = Some(next + periods * self.interval_ms);
        periods.min(u32::MAX as f64) as u32
    }
}
