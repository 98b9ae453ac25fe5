//! Time-based interpolation of a single value
//!
//! Polled by the frame stepper rather than run on its own clock, so a tween
//! dies with whatever owns it.

/// Ease-out interpolation from `start` to `target`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween {
    pub start: f32,
    pub target: f32,
    pub start_ms: f64,
    pub duration_ms: f64,
}

impl Tween {
    pub fn new(start: f32, target: f32, start_ms: f64, duration_ms: f64) -> Self {
        Self {
            start,
            target,
            start_ms,
            duration_ms,
        }
    }

    /// Normalized progress in [0, 1]
    pub fn progress(&self, now_ms: f64) -> f32 {
        if self.duration_ms <= 0.0 {
            return 1.0;
        }
        (((now_ms - self.start_ms) / self.duration_ms) as f32).clamp(0.0, 1.0)
    }

    /// Interpolated value at `now_ms`
    pub fn sample(&self, now_ms: f64) -> f32 {
        let t = ease_out_quad(self.progress(now_ms));
        self.start + (self.target - self.start) * t
    }

    pub fn is_finished(&self, now_ms: f64) -> bool {
        self.progress(now_ms) >= 1.0
    }
}

/// Quadratic ease-out: fast start, gentle landing
#[inline]
pub fn ease_out_quad(t: f32) -> f32 {
    1.0 - (1.0 - t) * (1.0 - t)
}
