//! Errors of the learning core.
use thiserror::Error;

/// Errors raised by the learning core.
///
/// Shape and history violations are precondition failures: the training
/// loop stops the episode instead of computing on malformed batches.
#[derive(Debug, Error)]
pub enum SkirmishError {
    /// A batch was requested from a memory holding no transitions.
    #[error("Cannot sample a batch from an empty replay memory")]
    EmptyMemory,

    /// A transition whose state vectors disagree with the dimension fixed
    /// by the first stored transition.
    #[error("State dimension mismatch: expected {expected}, got {got}")]
    StateDimMismatch {
        /// Dimension fixed by the first stored transition.
        expected: usize,
        /// Dimension of the offending vector.
        got: usize,
    },

    /// A windowed read past the stored history.
    #[error("Window [{start}, {start} + {timesteps}) exceeds memory length {len}")]
    WindowOutOfRange {
        /// First index of the requested window.
        start: usize,
        /// Window length.
        timesteps: usize,
        /// Number of stored transitions.
        len: usize,
    },

    /// A sequence batch was requested before a full window plus its
    /// successor transition exists.
    #[error("Sequence memory holds {len} transitions, more than {timesteps} are needed")]
    InsufficientHistory {
        /// Number of stored transitions.
        len: usize,
        /// Window length of the memory.
        timesteps: usize,
    },

    /// Record access with an unknown key.
    #[error("Key {0} is not in the record")]
    RecordKeyError(String),

    /// Record access with a mismatched value type.
    #[error("Record value for the given key is not of type {0}")]
    RecordValueTypeError(String),
}
