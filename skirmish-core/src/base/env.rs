//! Environment.
use anyhow::Result;

/// A multi-agent environment sharing one observation vector.
///
/// All agents observe the same state vector of fixed dimensionality
/// [`state_dim`](Env::state_dim), fresh each tick. Actions are discrete
/// indices in `[0, num_actions)`. The trainer drives the environment with
/// the strict per-tick ordering described in [`Trainer`](crate::Trainer):
/// all actions are applied to the same state snapshot before the
/// environment advances by one tick.
pub trait Env {
    /// Configuration of the environment.
    type Config: Clone;

    /// Builds an environment with a given random seed.
    fn build(config: &Self::Config, seed: u64) -> Result<Self>
    where
        Self: Sized;

    /// Re-initializes the environment for a new episode and returns the
    /// initial state.
    ///
    /// The index is used in an arbitrary way, for example mixed into the
    /// spawn randomization so that episodes are reproducible given the
    /// build seed.
    fn reset_with_index(&mut self, ix: usize) -> Result<Vec<f32>>;

    /// Number of agents acting in the environment.
    fn num_agents(&self) -> usize;

    /// Dimensionality of the state vector.
    fn state_dim(&self) -> usize;

    /// Number of discrete actions.
    fn num_actions(&self) -> usize;

    /// The current state vector.
    fn state(&self) -> Vec<f32>;

    /// Applies an action for one agent.
    ///
    /// Side effects, such as spawning a projectile, are opaque to the
    /// learning core. Implementations snapshot the agent's score here so
    /// that [`score_delta`](Env::score_delta) reports the change since this
    /// action.
    fn apply_action(&mut self, agent_ix: usize, action: usize) -> Result<()>;

    /// Advances the simulation by one tick.
    fn advance(&mut self);

    /// Score change of the agent since its own last applied action.
    fn score_delta(&self, agent_ix: usize) -> f32;

    /// Absolute score of the agent, used for episode outcomes.
    fn score(&self, agent_ix: usize) -> f32;
}
