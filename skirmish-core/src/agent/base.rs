//! Epsilon-greedy Q-learning agent.
use super::{ActionSelection, MemoryConfig, QAgentConfig};
use crate::{
    memory::{ReplayMemory, SequenceMemory, Transition},
    Mat, ValueFn,
};
use anyhow::Result;
use std::path::Path;

enum Memory {
    Replay(ReplayMemory),
    Sequence(SequenceMemory),
}

/// Q-learning agent over a discrete action set.
///
/// The agent owns a value function approximator `V`, a replay memory and
/// an exploitation strategy. Exploration is epsilon-greedy: with
/// probability epsilon a uniform random action is taken without querying
/// the value function; otherwise the configured [`ActionSelection`] picks
/// an action from the predicted Q-values.
///
/// Agents backed by a [`SequenceMemory`] act on the most recent window of
/// observed states and are forced to explore until a full window of
/// history exists.
pub struct QAgent<V: ValueFn> {
    value_fn: V,
    memory: Memory,
    action_selection: ActionSelection,
    batch_size: usize,
    num_actions: usize,
    q: Vec<f32>,
}

impl<V: ValueFn> QAgent<V> {
    /// Builds the agent from a configuration and a value function.
    pub fn build(config: QAgentConfig, value_fn: V) -> Self {
        let memory = match &config.memory {
            MemoryConfig::Replay(c) => Memory::Replay(ReplayMemory::build(c)),
            MemoryConfig::Sequence(c) => Memory::Sequence(SequenceMemory::build(c)),
        };
        Self {
            value_fn,
            memory,
            action_selection: config.action_selection,
            batch_size: config.batch_size,
            num_actions: config.num_actions,
            q: vec![],
        }
    }

    /// Chooses an action for the current observation.
    ///
    /// Exploratory draws bypass the value function entirely. A
    /// sequence-backed agent without a full window of history always
    /// explores, whatever epsilon is.
    pub fn act(&mut self, obs: &[f32], epsilon: f64) -> Result<usize> {
        let must_explore = match &self.memory {
            Memory::Replay(_) => false,
            Memory::Sequence(m) => !m.has_window(),
        };
        if must_explore || fastrand::f64() < epsilon {
            return Ok(fastrand::usize(..self.num_actions));
        }
        let input = match &self.memory {
            Memory::Replay(_) => Mat::from_row(obs),
            Memory::Sequence(m) => {
                let w = m.window(0)?;
                Mat::from_row(w.data())
            }
        };
        let q = self.value_fn.predict(&input);
        self.q.clear();
        self.q.extend_from_slice(q.row(0));
        Ok(self.action_selection.action(&self.q))
    }

    /// Stores a transition and fits the value function on one batch.
    ///
    /// Returns the training loss. A sequence-backed agent that cannot yet
    /// build a batch only stores the transition and reports a loss of 0.
    pub fn learn(
        &mut self,
        state: Vec<f32>,
        action: usize,
        reward: f32,
        next_state: Vec<f32>,
    ) -> Result<f32> {
        let tr = Transition::new(state, action, reward, next_state);
        match &mut self.memory {
            Memory::Replay(m) => {
                m.remember(tr)?;
                let (inputs, targets) = m.sample_batch(&self.value_fn, self.batch_size)?;
                Ok(self.value_fn.train_on_batch(&inputs, &targets))
            }
            Memory::Sequence(m) => {
                m.remember(tr)?;
                if !m.ready() {
                    return Ok(0.0);
                }
                let (inputs, targets) = m.sample_batch(&self.value_fn, self.batch_size)?;
                Ok(self.value_fn.train_on_batch(&inputs, &targets))
            }
        }
    }

    /// Forgets all stored transitions, keeping the learned weights.
    pub fn clear(&mut self) {
        match &mut self.memory {
            Memory::Replay(m) => m.clear(),
            Memory::Sequence(m) => m.clear(),
        }
    }

    /// Q-values of the last exploiting [`act`](Self::act) call.
    pub fn q_values(&self) -> &[f32] {
        &self.q
    }

    /// Number of stored transitions.
    pub fn memory_len(&self) -> usize {
        match &self.memory {
            Memory::Replay(m) => m.len(),
            Memory::Sequence(m) => m.len(),
        }
    }

    /// The wrapped value function.
    pub fn value_fn(&self) -> &V {
        &self.value_fn
    }

    /// Saves the value function's weights.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        self.value_fn.save_weights(path.as_ref())
    }

    /// Loads the value function's weights.
    pub fn load(&mut self, path: impl AsRef<Path>) -> Result<()> {
        self.value_fn.load_weights(path.as_ref())
    }
}
