#![warn(missing_docs)]
//! 2D multi-agent shooter environment.
//!
//! Circular players move inside a walled arena, rotate and shoot
//! bullets; hitting an opponent scores a point, being hit costs one.
//! [`ShooterEnv`] implements [`Env`](skirmish_core::Env) so agents from
//! `skirmish-core` can be trained against each other in it.
mod bullet;
mod config;
mod env;
mod line;
mod player;
mod vec2;
pub use config::ShooterEnvConfig;
pub use env::{Action, ShooterEnv, DATA_PER_PLAYER};
pub use line::Line;
pub use vec2::Vec2;
