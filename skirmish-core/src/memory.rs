//! Replay memories storing transitions for experience replay.
//!
//! Two variants exist: [`ReplayMemory`] samples single transitions
//! uniformly, [`SequenceMemory`] assembles contiguous time windows for
//! sequence models. Both are fixed-capacity FIFO buffers that build
//! one-step Q-learning batches against a [`ValueFn`](crate::ValueFn).
mod config;
mod replay;
mod sequence;
pub use config::{ReplayMemoryConfig, SequenceMemoryConfig};
pub use replay::ReplayMemory;
pub use sequence::SequenceMemory;

/// The atomic learning record.
///
/// Immutable once stored. `state` and `next_state` must have the
/// dimensionality fixed by the first transition stored in a memory.
#[derive(Clone, Debug, PartialEq)]
pub struct Transition {
    /// Observation at the time the action was taken.
    pub state: Vec<f32>,

    /// Index of the taken action.
    pub action: usize,

    /// Reward attributed to the action.
    pub reward: f32,

    /// Observation after all agents' actions and one simulation tick.
    pub next_state: Vec<f32>,
}

impl Transition {
    /// Constructs a transition.
    pub fn new(state: Vec<f32>, action: usize, reward: f32, next_state: Vec<f32>) -> Self {
        Self {
            state,
            action,
            reward,
            next_state,
        }
    }
}

/// Stable argmax: the first maximal element wins.
pub(crate) fn argmax(q: &[f32]) -> usize {
    let mut best = 0;
    for (i, &v) in q.iter().enumerate() {
        if v > q[best] {
            best = i;
        }
    }
    best
}

/// Maximum Q-value of a row.
pub(crate) fn max_q(q: &[f32]) -> f32 {
    q.iter().fold(f32::NEG_INFINITY, |m, &v| m.max(v))
}
