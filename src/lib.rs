//! Canvas Arcade - small 2D arcade demos for a browser canvas
//!
//! Core modules:
//! - `sim`: Shooter simulation (entities, spawner, input, frame stepper)
//! - `game`: Session facade wiring the simulation to a surface and HUD
//! - `surface`: Drawing surface and HUD abstractions
//! - `pong`: Static Pong scene
//! - `tuning`: Data-driven game balance
//! - `platform`: Browser bindings (wasm32 only)

pub mod game;
pub mod platform;
pub mod pong;
pub mod sim;
pub mod surface;
pub mod tuning;

pub use game::{Game, RunStats};
pub use tuning::{Tuning, TuningError};

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Enemy spawn period (milliseconds)
    pub const SPAWN_INTERVAL_MS: f64 = 1000.0;

    /// Enemy radius range at spawn
    pub const ENEMY_MIN_SPAWN_RADIUS: f32 = 5.0;
    pub const ENEMY_MAX_SPAWN_RADIUS: f32 = 30.0;
    /// Radius lost per projectile hit
    pub const ENEMY_SHRINK_STEP: f32 = 10.0;
    /// An enemy whose shrunk radius would not exceed this is destroyed instead
    pub const ENEMY_MIN_RADIUS: f32 = 10.0;
    /// Shrink tween duration (milliseconds)
    pub const ENEMY_SHRINK_DURATION_MS: f64 = 500.0;

    /// Player defaults
    pub const PLAYER_RADIUS: f32 = 10.0;

    /// Projectile defaults (speed in pixels per frame)
    pub const PROJECTILE_RADIUS: f32 = 5.0;
    pub const PROJECTILE_SPEED: f32 = 5.0;

    /// Particle velocity damping per frame
    pub const PARTICLE_FRICTION: f32 = 0.99;
    /// Particle alpha lost per frame
    pub const PARTICLE_FADE: f32 = 0.01;
    pub const PARTICLE_MAX_RADIUS: f32 = 2.0;
    pub const PARTICLE_MAX_SPEED: f32 = 5.0;

    /// Score awards
    pub const HIT_SCORE: u64 = 100;
    pub const KILL_SCORE: u64 = 250;

    /// Opacity of the black fill painted each frame (motion trails)
    pub const TRAIL_ALPHA: f32 = 0.2;

    /// Two circles touch when the gap between their edges is below this
    pub const COLLISION_SLACK: f32 = 1.0;
}

/// Which demo the host runs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Demo {
    /// Full shooter: enemies, projectiles, score, game over
    #[default]
    Shooter,
    /// Player and projectiles only, no enemies
    FiringRange,
    /// Static Pong scene
    Pong,
}

impl Demo {
    pub fn as_str(&self) -> &'static str {
        match self {
            Demo::Shooter => "shooter",
            Demo::FiringRange => "range",
            Demo::Pong => "pong",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "shooter" | "shoot" => Some(Demo::Shooter),
            "range" | "firing-range" => Some(Demo::FiringRange),
            "pong" => Some(Demo::Pong),
            _ => None,
        }
    }

    /// Pick a demo from a URL query string like `?demo=pong&x=1`
    pub fn from_query(query: &str) -> Self {
        query
            .trim_start_matches('?')
            .split('&')
            .filter_map(|pair| pair.split_once('='))
            .find(|(key, _)| *key == "demo")
            .and_then(|(_, value)| Self::from_str(value))
            .unwrap_or_default()
    }

    /// Whether the spawner should be scheduled for this demo
    pub fn spawns_enemies(&self) -> bool {
        matches!(self, Demo::Shooter)
    }
}

/// Unit vector pointing from `from` toward `to`
///
/// Coincident points yield `(1, 0)`, matching `atan2(0, 0) == 0`.
#[inline]
pub fn aim(from: Vec2, to: Vec2) -> Vec2 {
    let delta = to - from;
    let angle = delta.y.atan2(delta.x);
    Vec2::new(angle.cos(), angle.sin())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_from_query() {
        assert_eq!(Demo::from_query(""), Demo::Shooter);
        assert_eq!(Demo::from_query("?demo=pong"), Demo::Pong);
        assert_eq!(Demo::from_query("?x=1&demo=range"), Demo::FiringRange);
        assert_eq!(Demo::from_query("?demo=tetris"), Demo::Shooter);
    }

    #[test]
    fn test_demo_round_trip_names() {
        for demo in [Demo::Shooter, Demo::FiringRange, Demo::Pong] {
            assert_eq!(Demo::from_str(demo.as_str()), Some(demo));
        }
        assert!(Demo::Shooter.spawns_enemies());
        assert!(!Demo::FiringRange.spawns_enemies());
    }

    #[test]
    fn test_aim_is_unit_length() {
        let dir = aim(Vec2::new(400.0, 300.0), Vec2::new(500.0, 300.0));
        assert!((dir - Vec2::X).length() < 1e-6);

        let dir = aim(Vec2::ZERO, Vec2::new(-3.0, 4.0));
        assert!((dir.length() - 1.0).abs() < 1e-6);
        assert!((dir - Vec2::new(-0.6, 0.8)).length() < 1e-6);

        assert_eq!(aim(Vec2::ONE, Vec2::ONE), Vec2::X);
    }
}
