//! Shooter entities
//!
//! Every entity is a filled circle (`Body`). Moving kinds add a per-frame
//! velocity; `step` integrates without drawing and `update` draws the
//! current frame first, then steps.

use glam::Vec2;

use super::tween::Tween;
use crate::surface::{Color, Surface};
use crate::tuning::Tuning;

/// Position, size and color shared by every entity
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Body {
    pub pos: Vec2,
    pub radius: f32,
    pub color: Color,
}

impl Body {
    pub fn new(pos: Vec2, radius: f32, color: Color) -> Self {
        Self { pos, radius, color }
    }

    pub fn draw<S: Surface>(&self, surface: &mut S) {
        surface.fill_circle(self.pos, self.radius, self.color);
    }
}

/// The stationary turret at the surface center
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub body: Body,
}

impl Player {
    pub fn new(pos: Vec2, radius: f32) -> Self {
        Self {
            body: Body::new(pos, radius, Color::WHITE),
        }
    }

    pub fn draw<S: Surface>(&self, surface: &mut S) {
        self.body.draw(surface);
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Projectile {
    pub body: Body,
    pub vel: Vec2,
}

impl Projectile {
    pub fn new(pos: Vec2, radius: f32, vel: Vec2) -> Self {
        Self {
            body: Body::new(pos, radius, Color::WHITE),
            vel,
        }
    }

    pub fn step(&mut self) {
        self.body.pos += self.vel;
    }

    pub fn update<S: Surface>(&mut self, surface: &mut S) {
        self.body.draw(surface);
        self.step();
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Enemy {
    pub body: Body,
    pub vel: Vec2,
    /// In-flight radius shrink, cleared once it lands
    pub shrink: Option<Tween>,
}

impl Enemy {
    pub fn new(pos: Vec2, radius: f32, color: Color, vel: Vec2) -> Self {
        Self {
            body: Body::new(pos, radius, color),
            vel,
            shrink: None,
        }
    }

    /// Start animating from the current radius toward `target`, replacing
    /// any shrink in flight
    pub fn start_shrink(&mut self, target: f32, now_ms: f64, duration_ms: f64) {
        self.shrink = Some(Tween::new(self.body.radius, target, now_ms, duration_ms));
    }

    /// Apply the shrink tween for this frame
    pub fn advance_shrink(&mut self, now_ms: f64) {
        if let Some(tween) = self.shrink {
            self.body.radius = tween.sample(now_ms);
            if tween.is_finished(now_ms) {
                self.shrink = None;
            }
        }
    }

    pub fn step(&mut self) {
        self.body.pos += self.vel;
    }

    pub fn update<S: Surface>(&mut self, surface: &mut S) {
        self.body.draw(surface);
        self.step();
    }
}

/// Fading explosion debris
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub body: Body,
    pub vel: Vec2,
    /// Opacity, 1 at birth; the particle is dead at 0
    pub alpha: f32,
}

impl Particle {
    pub fn new(pos: Vec2, radius: f32, color: Color, vel: Vec2) -> Self {
        Self {
            body: Body::new(pos, radius, color),
            vel,
            alpha: 1.0,
        }
    }

    pub fn is_faded(&self) -> bool {
        self.alpha <= 0.0
    }

    /// Friction, then move, then fade
    pub fn step(&mut self, tuning: &Tuning) {
        self.vel *= tuning.particle_friction;
        self.body.pos += self.vel;
        self.alpha = (self.alpha - tuning.particle_fade).max(0.0);
    }

    pub fn draw<S: Surface>(&self, surface: &mut S) {
        let body = self.body;
        surface.with_alpha(self.alpha, |s| body.draw(s));
    }

    pub fn update<S: Surface>(&mut self, surface: &mut S, tuning: &Tuning) {
        self.draw(surface);
        self.step(tuning);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::RecordingSurface;
    use proptest::prelude::*;

    #[test]
    fn test_update_draws_before_moving() {
        let mut surface = RecordingSurface::new(800.0, 600.0);
        let mut projectile = Projectile::new(Vec2::new(400.0, 300.0), 5.0, Vec2::new(5.0, 0.0));
        projectile.update(&mut surface);

        let drawn: Vec<Vec2> = surface.circles().map(|(c, _, _, _)| c).collect();
        assert_eq!(drawn, vec![Vec2::new(400.0, 300.0)]);
        assert_eq!(projectile.body.pos, Vec2::new(405.0, 300.0));
    }

    #[test]
    fn test_particle_draws_at_its_alpha() {
        let mut surface = RecordingSurface::new(800.0, 600.0);
        let mut particle = Particle::new(Vec2::ZERO, 1.0, Color::hue(30.0), Vec2::X);
        particle.alpha = 0.4;
        particle.update(&mut surface, &Tuning::default());

        let (_, _, color, alpha) = surface.circles().next().unwrap();
        assert_eq!(alpha, 0.4);
        assert_eq!(color, Color::hue(30.0));
    }

    #[test]
    fn test_particle_fades_out_after_one_hundred_steps() {
        let tuning = Tuning::default();
        let mut particle = Particle::new(Vec2::ZERO, 1.0, Color::WHITE, Vec2::ZERO);
        for _ in 0..99 {
            particle.step(&tuning);
        }
        assert!(!particle.is_faded());
        // Float drift may need one extra step to reach exactly zero
        particle.step(&tuning);
        particle.step(&tuning);
        assert!(particle.is_faded());
        assert_eq!(particle.alpha, 0.0);
    }

    #[test]
    fn test_enemy_shrink_lands_on_target() {
        let mut enemy = Enemy::new(Vec2::ZERO, 25.0, Color::hue(0.0), Vec2::X);
        enemy.start_shrink(15.0, 0.0, 500.0);
        assert_eq!(enemy.shrink.map(|t| t.target), Some(15.0));

        enemy.advance_shrink(250.0);
        assert!(enemy.body.radius < 25.0 && enemy.body.radius > 15.0);

        enemy.advance_shrink(600.0);
        assert_eq!(enemy.body.radius, 15.0);
        assert!(enemy.shrink.is_none());
    }

    #[test]
    fn test_restarted_shrink_begins_at_current_radius() {
        let mut enemy = Enemy::new(Vec2::ZERO, 25.0, Color::hue(0.0), Vec2::X);
        enemy.start_shrink(15.0, 0.0, 500.0);
        enemy.advance_shrink(100.0);
        let current = enemy.body.radius;

        enemy.start_shrink(current - 10.0, 100.0, 500.0);
        let tween = enemy.shrink.unwrap();
        assert_eq!(tween.start, current);
        assert_eq!(tween.target, current - 10.0);
    }

    proptest! {
        #[test]
        fn test_projectile_integrates_linearly(
            x in -1000.0f32..1000.0,
            y in -1000.0f32..1000.0,
            vx in -10.0f32..10.0,
            vy in -10.0f32..10.0,
            steps in 0u32..200,
        ) {
            let start = Vec2::new(x, y);
            let vel = Vec2::new(vx, vy);
            let mut projectile = Projectile::new(start, 5.0, vel);
            for _ in 0..steps {
                projectile.step();
            }
            let expected = start + vel * steps as f32;
            prop_assert!((projectile.body.pos - expected).length() < 0.1);
            prop_assert_eq!(projectile.vel, vel);
        }

        #[test]
        fn test_particle_decay_law(
            vx in -5.0f32..5.0,
            vy in -5.0f32..5.0,
            steps in 0u32..150,
        ) {
            let tuning = Tuning::default();
            let v0 = Vec2::new(vx, vy);
            let mut particle = Particle::new(Vec2::ZERO, 1.0, Color::WHITE, v0);
            for _ in 0..steps {
                particle.step(&tuning);
            }
            let expected_alpha = (1.0 - 0.01 * steps as f32).max(0.0);
            prop_assert!((particle.alpha - expected_alpha).abs() < 1e-4);
            prop_assert!(particle.alpha >= 0.0);

            let expected_vel = v0 * 0.99f32.powi(steps as i32);
            prop_assert!((particle.vel - expected_vel).length() < 1e-3);
        }
    }
}
