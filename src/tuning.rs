//! Data-driven game balance
//!
//! Every gameplay constant the shooter uses, gathered in one serializable
//! struct. Hosts may override any subset from JSON; missing fields keep
//! their defaults.

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Errors raised while loading tuning overrides
#[derive(thiserror::Error, Debug)]
pub enum TuningError {
    /// JSON did not parse
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// A value parsed but is outside its allowed range
    #[error("Invalid value for `{field}`: {reason}")]
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}

/// Gameplay balance values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Spawner ===
    /// Milliseconds between enemy spawns
    pub spawn_interval_ms: f64,
    pub enemy_min_spawn_radius: f32,
    pub enemy_max_spawn_radius: f32,

    // === Enemy damage ===
    pub enemy_shrink_step: f32,
    pub enemy_min_radius: f32,
    pub enemy_shrink_duration_ms: f64,

    // === Player / projectiles ===
    pub player_radius: f32,
    pub projectile_radius: f32,
    /// Pixels per frame
    pub projectile_speed: f32,

    // === Particles ===
    pub particle_friction: f32,
    pub particle_fade: f32,
    pub particle_max_radius: f32,
    pub particle_max_speed: f32,

    // === Scoring ===
    pub hit_score: u64,
    pub kill_score: u64,

    // === Rendering / collision ===
    pub trail_alpha: f32,
    pub collision_slack: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            spawn_interval_ms: SPAWN_INTERVAL_MS,
            enemy_min_spawn_radius: ENEMY_MIN_SPAWN_RADIUS,
            enemy_max_spawn_radius: ENEMY_MAX_SPAWN_RADIUS,

            enemy_shrink_step: ENEMY_SHRINK_STEP,
            enemy_min_radius: ENEMY_MIN_RADIUS,
            enemy_shrink_duration_ms: ENEMY_SHRINK_DURATION_MS,

            player_radius: PLAYER_RADIUS,
            projectile_radius: PROJECTILE_RADIUS,
            projectile_speed: PROJECTILE_SPEED,

            particle_friction: PARTICLE_FRICTION,
            particle_fade: PARTICLE_FADE,
            particle_max_radius: PARTICLE_MAX_RADIUS,
            particle_max_speed: PARTICLE_MAX_SPEED,

            hit_score: HIT_SCORE,
            kill_score: KILL_SCORE,

            trail_alpha: TRAIL_ALPHA,
            collision_slack: COLLISION_SLACK,
        }
    }
}

impl Tuning {
    /// Parse overrides from JSON and validate the result
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Serialize to pretty JSON (useful as an override template)
    pub fn to_json(&self) -> Result<String, TuningError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reject values the simulation cannot run with
    pub fn validate(&self) -> Result<(), TuningError> {
        fn invalid(field: &'static str, reason: &'static str) -> Result<(), TuningError> {
            Err(TuningError::Invalid { field, reason })
        }

        let positive_f32 = [
            ("enemy_min_spawn_radius", self.enemy_min_spawn_radius),
            ("enemy_max_spawn_radius", self.enemy_max_spawn_radius),
            ("enemy_shrink_step", self.enemy_shrink_step),
            ("player_radius", self.player_radius),
            ("projectile_radius", self.projectile_radius),
            ("projectile_speed", self.projectile_speed),
            ("particle_fade", self.particle_fade),
            ("particle_max_radius", self.particle_max_radius),
            ("particle_max_speed", self.particle_max_speed),
        ];
        for (field, value) in positive_f32 {
            if !value.is_finite() || value <= 0.0 {
                return invalid(field, "must be a positive finite number");
            }
        }

        if !self.spawn_interval_ms.is_finite() || self.spawn_interval_ms <= 0.0 {
            return invalid("spawn_interval_ms", "must be a positive finite number");
        }
        if !self.enemy_shrink_duration_ms.is_finite() || self.enemy_shrink_duration_ms < 0.0 {
            return invalid("enemy_shrink_duration_ms", "must be zero or positive");
        }
        if self.enemy_min_spawn_radius > self.enemy_max_spawn_radius {
            return invalid("enemy_min_spawn_radius", "exceeds enemy_max_spawn_radius");
        }
        if !self.enemy_min_radius.is_finite() || self.enemy_min_radius < 0.0 {
            return invalid("enemy_min_radius", "must be zero or positive");
        }
        if !(self.particle_friction > 0.0 && self.particle_friction <= 1.0) {
            return invalid("particle_friction", "must be in (0, 1]");
        }
        if !(0.0..=1.0).contains(&self.trail_alpha) {
            return invalid("trail_alpha", "must be in [0, 1]");
        }
        if !self.collision_slack.is_finite() {
            return invalid("collision_slack", "must be finite");
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let tuning = Tuning::default();
        assert!(tuning.validate().is_ok());
        assert_eq!(tuning.spawn_interval_ms, 1000.0);
        assert_eq!(tuning.projectile_speed, 5.0);
        assert_eq!(tuning.hit_score, 100);
        assert_eq!(tuning.kill_score, 250);
    }

    #[test]
    fn test_partial_override_keeps_defaults() {
        let tuning = Tuning::from_json(r#"{ "projectile_speed": 8.0, "kill_score": 500 }"#)
            .expect("valid override");
        assert_eq!(tuning.projectile_speed, 8.0);
        assert_eq!(tuning.kill_score, 500);
        assert_eq!(tuning.player_radius, PLAYER_RADIUS);
        assert_eq!(tuning.particle_friction, PARTICLE_FRICTION);
    }

    #[test]
    fn test_empty_object_is_default() {
        assert_eq!(Tuning::from_json("{}").unwrap(), Tuning::default());
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        let err = Tuning::from_json("{ projectile_speed: ").unwrap_err();
        assert!(matches!(err, TuningError::Parse(_)));
    }

    #[test]
    fn test_out_of_range_values_rejected() {
        let err = Tuning::from_json(r#"{ "particle_friction": 1.5 }"#).unwrap_err();
        assert!(matches!(
            err,
            TuningError::Invalid {
                field: "particle_friction",
                ..
            }
        ));

        let err = Tuning::from_json(r#"{ "enemy_min_spawn_radius": 40.0 }"#).unwrap_err();
        assert!(matches!(
            err,
            TuningError::Invalid {
                field: "enemy_min_spawn_radius",
                ..
            }
        ));

        let err = Tuning::from_json(r#"{ "spawn_interval_ms": 0.0 }"#).unwrap_err();
        assert!(err.to_string().contains("spawn_interval_ms"));
    }

    #[test]
    fn test_json_template_round_trips() {
        let json = Tuning::default().to_json().unwrap();
        assert_eq!(Tuning::from_json(&json).unwrap(), Tuning::default());
    }
}
