//! Drawing surface and HUD abstractions
//!
//! The simulation only ever talks to these traits. The browser host
//! implements them over a 2D canvas and DOM elements; tests and the native
//! binary use the recording implementations below.

use std::fmt;

use glam::Vec2;

/// A fill color, rendered as a CSS color string
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Color {
    Rgba { r: u8, g: u8, b: u8, a: f32 },
    /// Hue in degrees, saturation and lightness in percent
    Hsl {
        hue: f32,
        saturation: f32,
        lightness: f32,
    },
}

impl Color {
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const BLACK: Color = Color::rgb(0, 0, 0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color::Rgba { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: f32) -> Self {
        Color::Rgba { r, g, b, a }
    }

    /// Mid-saturation, mid-lightness color of the given hue
    pub fn hue(hue: f32) -> Self {
        Color::Hsl {
            hue,
            saturation: 50.0,
            lightness: 50.0,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Color::Rgba { r, g, b, a } if a >= 1.0 => write!(f, "rgb({r}, {g}, {b})"),
            Color::Rgba { r, g, b, a } => write!(f, "rgba({r}, {g}, {b}, {a})"),
            Color::Hsl {
                hue,
                saturation,
                lightness,
            } => write!(f, "hsl({hue}, {saturation}%, {lightness}%)"),
        }
    }
}

/// Smallest usable surface edge; degenerate sizes are clamped up to this
pub const MIN_SURFACE_EDGE: f32 = 1.0;

/// Surface dimensions in CSS pixels, fixed for a session
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceSize {
    pub width: f32,
    pub height: f32,
}

impl SurfaceSize {
    /// Zero, negative or non-finite edges clamp to `MIN_SURFACE_EDGE`
    pub fn new(width: f32, height: f32) -> Self {
        let clamp = |edge: f32| {
            if edge.is_finite() {
                edge.max(MIN_SURFACE_EDGE)
            } else {
                MIN_SURFACE_EDGE
            }
        };
        Self {
            width: clamp(width),
            height: clamp(height),
        }
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// True when a circle is entirely past any one edge
    pub fn is_circle_outside(&self, center: Vec2, radius: f32) -> bool {
        center.x + radius < 0.0
            || center.x - radius > self.width
            || center.y + radius < 0.0
            || center.y - radius > self.height
    }
}

/// Immediate-mode 2D drawing primitives
pub trait Surface {
    fn size(&self) -> SurfaceSize;

    /// Erase everything to transparent
    fn clear(&mut self);

    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Color);

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color);

    /// Run `draw` with global opacity set to `alpha`, restoring it afterward
    fn with_alpha<F>(&mut self, alpha: f32, draw: F)
    where
        F: FnOnce(&mut Self),
        Self: Sized;
}

/// Score and game-over presentation
pub trait Hud {
    fn set_score_display(&mut self, score: u64);
    fn set_final_score_display(&mut self, score: u64);
    fn show_game_over_modal(&mut self);
    fn hide_game_over_modal(&mut self);
}

/// A single recorded draw call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    Clear,
    Rect {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        color: Color,
        alpha: f32,
    },
    Circle {
        center: Vec2,
        radius: f32,
        color: Color,
        alpha: f32,
    },
}

/// Headless surface that records every draw call
#[derive(Debug, Clone)]
pub struct RecordingSurface {
    size: SurfaceSize,
    alpha: f32,
    pub calls: Vec<DrawCall>,
}

impl RecordingSurface {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            size: SurfaceSize::new(width, height),
            alpha: 1.0,
            calls: Vec::new(),
        }
    }

    /// Drop recorded calls (call between frames to bound memory)
    pub fn reset(&mut self) {
        self.calls.clear();
    }

    /// Recorded circles, in draw order
    pub fn circles(&self) -> impl Iterator<Item = (Vec2, f32, Color, f32)> + '_ {
        self.calls.iter().filter_map(|call| match *call {
            DrawCall::Circle {
                center,
                radius,
                color,
                alpha,
            } => Some((center, radius, color, alpha)),
            _ => None,
        })
    }
}

impl Surface for RecordingSurface {
    fn size(&self) -> SurfaceSize {
        self.size
    }

    fn clear(&mut self) {
        self.calls.push(DrawCall::Clear);
    }

    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Color) {
        self.calls.push(DrawCall::Rect {
            x,
            y,
            width,
            height,
            color,
            alpha: self.alpha,
        });
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        self.calls.push(DrawCall::Circle {
            center,
            radius,
            color,
            alpha: self.alpha,
        });
    }

    fn with_alpha<F>(&mut self, alpha: f32, draw: F)
    where
        F: FnOnce(&mut Self),
    {
        let saved = self.alpha;
        self.alpha = alpha;
        draw(self);
        self.alpha = saved;
    }
}

/// HUD that remembers what it was told to show
#[derive(Debug, Clone, Default)]
pub struct RecordingHud {
    /// Every value pushed to the live score display, oldest first
    pub score_updates: Vec<u64>,
    pub final_score: Option<u64>,
    pub modal_visible: bool,
}

impl RecordingHud {
    pub fn score(&self) -> Option<u64> {
        self.score_updates.last().copied()
    }
}

impl Hud for RecordingHud {
    fn set_score_display(&mut self, score: u64) {
        self.score_updates.push(score);
    }

    fn set_final_score_display(&mut self, score: u64) {
        self.final_score = Some(score);
    }

    fn show_game_over_modal(&mut self) {
        self.modal_visible = true;
    }

    fn hide_game_over_modal(&mut self) {
        self.modal_visible = false;
    }
}
