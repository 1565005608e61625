//! Function approximator interface.
use crate::Mat;
use anyhow::Result;
use std::path::Path;

/// An opaque, trainable action-value function.
///
/// The learning core never inspects the internals of the approximator; it
/// only asks for Q-value predictions and single optimization steps. For
/// sequence agents the input rows are flattened time windows of
/// `timesteps * env_dim` elements.
pub trait ValueFn {
    /// Length of one input row.
    fn input_dim(&self) -> usize;

    /// Number of actions, i.e. length of one output row.
    fn num_actions(&self) -> usize;

    /// Predicts Q-values for a batch, mapping `(n, input_dim)` to
    /// `(n, num_actions)`.
    fn predict(&self, batch: &Mat) -> Mat;

    /// Performs exactly one optimization step towards `targets` and
    /// returns the loss.
    fn train_on_batch(&mut self, inputs: &Mat, targets: &Mat) -> f32;

    /// Persists the weights at the given path.
    fn save_weights(&self, path: &Path) -> Result<()>;

    /// Restores the weights from the given path.
    fn load_weights(&mut self, path: &Path) -> Result<()>;
}
