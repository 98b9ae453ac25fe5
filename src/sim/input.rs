//! Pointer input

use glam::Vec2;

use super::entity::Projectile;
use super::state::GameState;
use crate::aim;

/// Fire a projectile from the surface center toward a click
///
/// Ignored unless the game is running. Returns whether a projectile was fired.
pub fn on_surface_click(state: &mut GameState, x: f32, y: f32) -> bool {
    if !state.is_running() {
        return false;
    }

    let center = state.center();
    let vel = aim(center, Vec2::new(x, y)) * state.tuning.projectile_speed;
    state
        .projectiles
        .push(Projectile::new(center, state.tuning.projectile_radius, vel));
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::SurfaceSize;
    use crate::tuning::Tuning;

    fn state() -> GameState {
        GameState::new(1, SurfaceSize::new(800.0, 600.0), Tuning::default())
    }

    #[test]
    fn test_click_right_of_center_fires_right() {
        let mut state = state();
        state.start();
        assert!(on_surface_click(&mut state, 500.0, 300.0));

        let projectile = &state.projectiles[0];
        assert_eq!(projectile.body.pos, Vec2::new(400.0, 300.0));
        assert!((projectile.vel - Vec2::new(5.0, 0.0)).length() < 1e-5);
        assert_eq!(projectile.body.radius, 5.0);
    }

    #[test]
    fn test_projectile_speed_is_constant() {
        let mut state = state();
        state.start();
        for (x, y) in [(0.0, 0.0), (800.0, 600.0), (123.0, 456.0), (400.0, 0.0)] {
            on_surface_click(&mut state, x, y);
        }
        for projectile in &state.projectiles {
            assert!((projectile.vel.length() - 5.0).abs() < 1e-4);
        }
    }

    #[test]
    fn test_click_ignored_when_not_running() {
        let mut state = state();
        assert!(!on_surface_click(&mut state, 500.0, 300.0));
        assert!(state.projectiles.is_empty());
    }

    #[test]
    fn test_click_on_center_still_fires() {
        let mut state = state();
        state.start();
        on_surface_click(&mut state, 400.0, 300.0);
        assert!(state.projectiles[0].vel.is_finite());
    }
}
