//! Time-windowed replay memory for sequence models.
use super::{max_q, SequenceMemoryConfig, Transition};
use crate::{error::SkirmishError, Mat, ValueFn};
use anyhow::Result;
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::collections::VecDeque;

/// Replay memory whose training examples are contiguous time windows.
///
/// Storage and eviction follow [`ReplayMemory`](super::ReplayMemory); in
/// addition, a contiguous run of `timesteps` stored states forms one
/// training input. Windowed reads are only valid once a full window
/// exists; batch sampling additionally needs the successor transition of a
/// window, i.e. more than `timesteps` stored transitions.
pub struct SequenceMemory {
    timesteps: usize,
    max_memory: usize,
    discount: f32,
    memory: VecDeque<Transition>,
    env_dim: Option<usize>,
    rng: StdRng,
}

impl SequenceMemory {
    /// Builds the memory from a configuration.
    pub fn build(config: &SequenceMemoryConfig) -> Self {
        Self {
            timesteps: config.timesteps,
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

    /// Window length.
    pub fn timesteps(&self) -> usize {
        self.timesteps
    }

    /// Empties the memory.
    pub fn clear(&mut self) {
        self.memory.clear();
    }

    /// True once a full window of history exists.
    ///
    /// Until then the agent must fall back to exploratory behavior.
    pub fn has_window(&self) -> bool {
        self.memory.len() >= self.timesteps
    }

    /// True once a batch can be built: a full window plus its successor
    /// transition.
    pub fn ready(&self) -> bool {
        self.memory.len() > self.timesteps
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

    /// The contiguous run of `timesteps` states beginning at `start` as a
    /// `(timesteps, env_dim)` matrix.
    ///
    /// `start == 0` is a sentinel resolving to the most recent window,
    /// `len - timesteps`.
    pub fn window(&self, start: usize) -> Result<Mat> {
        if !self.has_window() {
            return Err(SkirmishError::InsufficientHistory {
                len: self.memory.len(),
                timesteps: self.timesteps,
            }
            .into());
        }
        let start = if start == 0 {
            self.memory.len() - self.timesteps
        } else {
            start
        };
        if start + self.timesteps > self.memory.len() {
            return Err(SkirmishError::WindowOutOfRange {
                start,
                timesteps: self.timesteps,
                len: self.memory.len(),
            }
            .into());
        }
        let env_dim = self.memory[0].state.len();
        let mut w = Mat::zeros(self.timesteps, env_dim);
        for j in 0..self.timesteps {
            w.row_mut(j).copy_from_slice(&self.memory[start + j].state);
        }
        Ok(w)
    }

    /// Builds an `(inputs, targets)` training batch of `batch_size` rows.
    ///
    /// Each row is a flattened window starting at a uniformly drawn index;
    /// the action, reward and successor state come from the transition one
    /// past the window. The successor window drops the oldest row and
    /// appends that state. Target construction mirrors
    /// [`ReplayMemory::sample_batch`](super::ReplayMemory::sample_batch).
    pub fn sample_batch<V: ValueFn + ?Sized>(
        &mut self,
        value_fn: &V,
        batch_size: usize,
    ) -> Result<(Mat, Mat)> {
        if !self.ready() {
            return Err(SkirmishError::InsufficientHistory {
                len: self.memory.len(),
                timesteps: self.timesteps,
            }
            .into());
        }
        let len = self.memory.len();
        let env_dim = self.memory[0].state.len();
        let num_actions = value_fn.num_actions();
        let mut inputs = Mat::zeros(batch_size, self.timesteps * env_dim);
        let mut targets = Mat::zeros(batch_size, num_actions);
        for i in 0..batch_size {
            let ix = self.rng.gen_range(0..len - self.timesteps);
            let window = self.window(ix)?;
            let tr = &self.memory[ix + self.timesteps];
            inputs.row_mut(i).copy_from_slice(window.data());
            let q = value_fn.predict(&Mat::from_row(window.data()));
            targets.row_mut(i).copy_from_slice(q.row(0));
            // Roll the window: drop the oldest row, append the successor state.
            let mut next_window = Mat::zeros(self.timesteps, env_dim);
            for j in 1..self.timesteps {
                next_window.row_mut(j - 1).copy_from_slice(window.row(j));
            }
            next_window
                .row_mut(self.timesteps - 1)
                .copy_from_slice(&tr.next_state);
            let q_next = value_fn.predict(&Mat::from_row(next_window.data()));
            targets.row_mut(i)[tr.action] = tr.reward + self.discount * max_q(q_next.row(0));
        }
        Ok((inputs, targets))
    }
}
