//! Platform abstraction layer
//!
//! Browser bindings for the drawing surface, the HUD and tuning overrides.
//! Native builds have no platform layer; they run headless against the
//! recording surface.

#[cfg(target_arch = "wasm32")]
pub mod web;
