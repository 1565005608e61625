//! Sinks of [`Record`]s.
use super::Record;

/// Writes a record of training progress somewhere.
pub trait Recorder {
    /// Writes a record.
    fn write(&mut self, record: Record);
}

/// Discards every record.
pub struct NullRecorder {}

#[allow(clippy::new_without_default)]
impl NullRecorder {
    /// Constructs the recorder.
    pub fn new() -> Self {
        Self {}
    }
}

impl Recorder for NullRecorder {
    fn write(&mut self, _record: Record) {}
}

/// Keeps every record in memory, mainly for tests and post-hoc export.
#[derive(Debug)]
pub struct BufferedRecorder(Vec<Record>);

#[allow(clippy::new_without_default)]
impl BufferedRecorder {
    /// Constructs the recorder.
    pub fn new() -> Self {
        Self(Vec::default())
    }

    /// Returns an iterator over the records.
    pub fn iter(&self) -> std::slice::Iter<Record> {
        self.0.iter()
    }

    /// Number of buffered records.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True if nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Recorder for BufferedRecorder {
    fn write(&mut self, record: Record) {
        self.0.push(record);
    }
}
