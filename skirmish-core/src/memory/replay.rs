//! Fixed-capacity replay memory with uniform sampling.
use super::{max_q, ReplayMemoryConfig, Transition};
use crate::{error::SkirmishError, Mat, ValueFn};
use anyhow::Result;
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::collections::VecDeque;

/// Ring buffer of transitions with one-step Q-learning batch construction.
///
/// Insertion evicts the oldest transition once at capacity; callers must
/// not assume retention. Sampling draws indices uniformly with
/// replacement, so a transition may appear several times in one batch.
pub struct ReplayMemory {
    max_memory: usize,
    discount: f32,
    memory: VecDeque<Transition>,
    env_dim: Option<usize>,
    rng: StdRng,
}

impl ReplayMemory {
    /// Builds the memory from a configuration.
    pub fn build(config: &ReplayMemoryConfig) -> Self {
        Self {
            max_memory: config.max_memory,
            discount: config.discount,
            memory: VecDeque::with_capacity(config.max_memory + 1),
            env_dim: None,
            rng: StdRng::seed_from_u64(config.seed),
        }
    }

    /// Number of stored transitions.
    pub fn len(&self) -> usize {
        self.memory.len()
    }

    /// True if no transition is stored.
    pub fn is_empty(&self) -> bool {
        self.memory.is_empty()
    }

    /// Discount factor of the one-step target.
    pub fn discount(&self) -> f32 {
        self.discount
    }

    /// Empties the memory.
    ///
    /// The state dimension stays fixed for the lifetime of the instance.
    pub fn clear(&mut self) {
        self.memory.clear();
    }

    /// Iterates over the stored transitions, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &Transition> {
        self.memory.iter()
    }

    /// Appends a transition, evicting the oldest once at capacity.
    pub fn remember(&mut self, tr: Transition) -> Result<()> {
        let dim = *self.env_dim.get_or_insert(tr.state.len());
        if tr.state.len() != dim {
            return Err(SkirmishError::StateDimMismatch {
                expected: dim,
                got: tr.state.len(),
            }
            .into());
        }
        if tr.next_state.len() != dim {
            return Err(SkirmishError::StateDimMismatch {
                expected: dim,
                got: tr.next_state.len(),
            }
            .into());
        }
        self.memory.push_back(tr);
        if self.memory.len() > self.max_memory {
            self.memory.pop_front();
        }
        Ok(())
    }

    /// Builds an `(inputs, targets)` training batch.
    ///
    /// `batch_size` is clamped to the number of stored transitions. For
    /// each sampled transition the target row copies the current Q-vector
    /// and only the taken action is overwritten with the one-step target
    /// `r + discount * max_a' Q(s', a')`; untaken actions are never
    /// corrected.
    pub fn sample_batch<V: ValueFn + ?Sized>(
        &mut self,
        value_fn: &V,
        batch_size: usize,
    ) -> Result<(Mat, Mat)> {
        if self.memory.is_empty() {
            return Err(SkirmishError::EmptyMemory.into());
        }
        let len = self.memory.len();
        let n = batch_size.min(len);
        let env_dim = self.memory[0].state.len();
        let num_actions = value_fn.num_actions();
        let mut inputs = Mat::zeros(n, env_dim);
        let mut targets = Mat::zeros(n, num_actions);
        for i in 0..n {
            let ix = self.rng.gen_range(0..len);
            let tr = &self.memory[ix];
            inputs.row_mut(i).copy_from_slice(&tr.state);
            let q = value_fn.predict(&Mat::from_row(&tr.state));
            targets.row_mut(i).copy_from_slice(q.row(0));
            let q_next = value_fn.predict(&Mat::from_row(&tr.next_state));
            targets.row_mut(i)[tr.action] = tr.reward + self.discount * max_q(q_next.row(0));
        }
        Ok((inputs, targets))
    }
}
