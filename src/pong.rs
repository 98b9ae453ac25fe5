//! Static Pong scene
//!
//! Two paddles and a ball on a black field. Nothing moves; the scene is laid
//! out on a 1280x600 reference field and scaled to the surface.

use glam::Vec2;

use crate::surface::{Color, Surface, SurfaceSize};

/// Reference field the layout constants are expressed in
pub const REFERENCE_SIZE: Vec2 = Vec2::new(1280.0, 600.0);

pub const PADDLE_SIZE: Vec2 = Vec2::new(20.0, 120.0);
pub const LEFT_PADDLE_POS: Vec2 = Vec2::new(100.0, 250.0);
pub const RIGHT_PADDLE_POS: Vec2 = Vec2::new(1200.0, 250.0);
pub const BALL_POS: Vec2 = Vec2::new(600.0, 300.0);
pub const BALL_RADIUS: f32 = 10.0;

/// Axis-aligned paddle, anchored at its top-left corner
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Paddle {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Paddle {
    pub fn draw<S: Surface>(&self, surface: &mut S) {
        surface.fill_rect(self.pos.x, self.pos.y, self.size.x, self.size.y, Color::WHITE);
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ball {
    pub pos: Vec2,
    pub radius: f32,
}

impl Ball {
    pub fn draw<S: Surface>(&self, surface: &mut S) {
        surface.fill_circle(self.pos, self.radius, Color::WHITE);
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PongScene {
    pub size: SurfaceSize,
    pub left: Paddle,
    pub right: Paddle,
    pub ball: Ball,
}

impl PongScene {
    /// Lay out the scene for a surface
    pub fn new(size: SurfaceSize) -> Self {
        let scale = Vec2::new(size.width, size.height) / REFERENCE_SIZE;
        // Radius follows the smaller axis so the ball stays round and inside
        let radius_scale = scale.min_element();
        Self {
            size,
            left: Paddle {
                pos: LEFT_PADDLE_POS * scale,
                size: PADDLE_SIZE * scale,
            },
            right: Paddle {
                pos: RIGHT_PADDLE_POS * scale,
                size: PADDLE_SIZE * scale,
            },
            ball: Ball {
                pos: BALL_POS * scale,
                radius: BALL_RADIUS * radius_scale,
            },
        }
    }

    /// Paint one frame
    pub fn draw<S: Surface>(&self, surface: &mut S) {
        surface.clear();
        surface.fill_rect(0.0, 0.0, self.size.width, self.size.height, Color::BLACK);
        self.left.draw(surface);
        self.right.draw(surface);
        self.ball.draw(surface);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::{DrawCall, RecordingSurface};

    #[test]
    fn test_reference_layout_is_unscaled() {
        let scene = PongScene::new(SurfaceSize::new(1280.0, 600.0));
        assert_eq!(scene.left.pos, Vec2::new(100.0, 250.0));
        assert_eq!(scene.right.pos, Vec2::new(1200.0, 250.0));
        assert_eq!(scene.left.size, Vec2::new(20.0, 120.0));
        assert_eq!(scene.ball.pos, Vec2::new(600.0, 300.0));
        assert_eq!(scene.ball.radius, 10.0);
    }

    #[test]
    fn test_layout_scales_to_surface() {
        let scene = PongScene::new(SurfaceSize::new(640.0, 600.0));
        assert_eq!(scene.right.pos, Vec2::new(600.0, 250.0));
        assert_eq!(scene.right.size, Vec2::new(10.0, 120.0));
        assert_eq!(scene.ball.radius, 5.0);
    }

    #[test]
    fn test_draw_order() {
        let scene = PongScene::new(SurfaceSize::new(1280.0, 600.0));
        let mut surface = RecordingSurface::new(1280.0, 600.0);
        scene.draw(&mut surface);

        assert_eq!(surface.calls.len(), 5);
        assert_eq!(surface.calls[0], DrawCall::Clear);
        assert!(matches!(
            surface.calls[1],
            DrawCall::Rect { color, width, .. } if color == Color::BLACK && width == 1280.0
        ));
        assert!(matches!(surface.calls[2], DrawCall::Rect { x, .. } if x == 100.0));
        assert!(matches!(surface.calls[3], DrawCall::Rect { x, .. } if x == 1200.0));
        assert!(matches!(surface.calls[4], DrawCall::Circle { radius, .. } if radius == 10.0));
    }
}
