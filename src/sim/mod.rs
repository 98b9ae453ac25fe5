//! Shooter simulation
//!
//! All gameplay logic lives here. Rules:
//! - Seeded RNG only
//! - Input and spawner only append entities; `tick` is the only remover
//! - Drawing goes through the `Surface` trait, never a concrete backend

pub mod collision;
pub mod entity;
pub mod input;
pub mod spawn;
pub mod state;
pub mod tick;
pub mod tween;

pub use collision::{circles_touch, edge_gap};
pub use entity::{Body, Enemy, Particle, Player, Projectile};
pub use input::on_surface_click;
pub use spawn::{SpawnClock, SpawnEdge, random_enemy, spawn_enemy_tick};
pub use state::{GameEvent, GamePhase, GameState};
pub use tick::{spawn_burst, tick};
pub use tween::Tween;
