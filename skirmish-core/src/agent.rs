//! Q-learning agent and its action-selection strategies.
mod base;
mod config;
mod explorer;
pub use base::QAgent;
pub use config::{MemoryConfig, QAgentConfig};
pub use explorer::{ActionSelection, Greedy, WeightedQ};
