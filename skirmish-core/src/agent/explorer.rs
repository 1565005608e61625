//! Exploitation strategies of the Q-learning agent.
use crate::memory::argmax;
use serde::{Deserialize, Serialize};

/// How an agent turns a Q-value vector into an action when exploiting.
///
/// Exploration, the epsilon part, is drawn by the agent before the value
/// function is queried; these modes only govern the exploitation path.
#[derive(Debug, Deserialize, Serialize, PartialEq, Clone)]
pub enum ActionSelection {
    /// Stable argmax over Q-values; the first maximum wins.
    Greedy(Greedy),

    /// Samples an action with probability proportional to the Q-values
    /// shifted to be non-negative.
    WeightedQ(WeightedQ),
}

impl ActionSelection {
    /// Takes an action given the predicted Q-values.
    pub fn action(&mut self, q: &[f32]) -> usize {
        match self {
            ActionSelection::Greedy(s) => s.action(q),
            ActionSelection::WeightedQ(s) => s.action(q),
        }
    }
}

impl Default for ActionSelection {
    fn default() -> Self {
        ActionSelection::Greedy(Greedy::new())
    }
}

/// Greedy exploitation.
#[derive(Debug, Deserialize, Serialize, PartialEq, Clone)]
pub struct Greedy {}

#[allow(clippy::new_without_default)]
impl Greedy {
    /// Constructs greedy exploitation.
    pub fn new() -> Self {
        Self {}
    }

    /// The index of the first maximal Q-value.
    pub fn action(&mut self, q: &[f32]) -> usize {
        argmax(q)
    }
}

/// Probability-weighted exploitation over shifted Q-values.
///
/// Q-values are shifted by their minimum to non-negative mass and
/// normalized to a distribution from which the action is sampled. This
/// mode originates from an exploratory variant of the sandbox and is kept
/// selectable; [`Greedy`] is the default.
#[derive(Debug, Deserialize, Serialize, PartialEq, Clone)]
pub struct WeightedQ {}

#[allow(clippy::new_without_default)]
impl WeightedQ {
    /// Constructs weighted exploitation.
    pub fn new() -> Self {
        Self {}
    }

    /// Samples an action proportionally to `q - min(q)`.
    ///
    /// Degenerate mass, e.g. all Q-values equal, falls back to a uniform
    /// draw.
    pub fn action(&mut self, q: &[f32]) -> usize {
        let min = q.iter().fold(f32::INFINITY, |m, &v| m.min(v));
        let mass: Vec<f32> = q.iter().map(|&v| v - min).collect();
        let total: f32 = mass.iter().sum();
        if !(total > 0.0) || !total.is_finite() {
            return fastrand::usize(..q.len());
        }
        let r = fastrand::f32() * total;
        let mut acc = 0.0;
        for (i, &m) in mass.iter().enumerate() {
            acc += m;
            if r < acc {
                return i;
            }
        }
        q.len() - 1
    }
}
