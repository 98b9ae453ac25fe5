//! Circle-circle contact test
//!
//! Every shooter collision (player/enemy, projectile/enemy) is two circles.

use super::entity::Body;

/// Distance between the edges of two circles (negative when overlapping)
#[inline]
pub fn edge_gap(a: &Body, b: &Body) -> f32 {
    a.pos.distance(b.pos) - (a.radius + b.radius)
}

/// Two circles touch when their edge gap is strictly below `slack`
#[inline]
pub fn circles_touch(a: &Body, b: &Body, slack: f32) -> bool {
    edge_gap(a, b) < slack
}
