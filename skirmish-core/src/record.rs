//! Records of training progress.
mod base;
mod recorder;
pub use base::{Record, RecordValue};
pub use recorder::{BufferedRecorder, NullRecorder, Recorder};
