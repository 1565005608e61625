#![warn(missing_docs)]
//! Feed-forward action-value function without a tensor backend.
mod config;
mod mlp;
pub use config::MlpConfig;
pub use mlp::Mlp;
