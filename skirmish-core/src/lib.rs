#![warn(missing_docs)]
//! Core components for training Q-learning agents in the skirmish sandbox.
//!
//! The crate provides the online learning loop of the sandbox: replay
//! memories storing `(state, action, reward, next_state)` transitions,
//! epsilon-greedy action selection, an agent that performs one-step
//! Q-learning updates against an opaque value function, and a trainer that
//! coordinates simultaneous-move episodes over a multi-agent environment.
pub mod agent;
pub mod error;
pub mod memory;
pub mod record;

mod base;
pub use base::{Env, ValueFn};

mod mat;
pub use mat::Mat;

mod trainer;
pub use trainer::{EpisodeSummary, TrainReport, Trainer, TrainerConfig};
