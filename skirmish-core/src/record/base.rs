//! Types of values and a key-value store of training progress.
use crate::error::SkirmishError;
use anyhow::Result;
use std::collections::{
    hash_map::{IntoIter, Iter, Keys},
    HashMap,
};

/// Value in a [`Record`].
#[derive(Debug, Clone, PartialEq)]
pub enum RecordValue {
    /// A single value.
    Scalar(f32),

    /// A vector of values.
    Array1(Vec<f32>),

    /// A string.
    String(String),
}

/// Key-value store of values obtained during training or evaluation.
#[derive(Debug, Clone)]
pub struct Record(HashMap<String, RecordValue>);

impl Record {
    /// Constructs an empty record.
    pub fn empty() -> Self {
        Self(HashMap::new())
    }

    /// Constructs a record with a single scalar entry.
    pub fn from_scalar(k: impl Into<String>, v: f32) -> Self {
        let mut record = Self::empty();
        record.insert(k, RecordValue::Scalar(v));
        record
    }

    /// Constructs a record from a slice of `(key, value)` pairs.
    pub fn from_slice<K: Into<String> + Clone>(s: &[(K, RecordValue)]) -> Self {
        Self(
            s.iter()
                .map(|(k, v)| (k.clone().into(), v.clone()))
                .collect(),
        )
    }

    /// Inserts a value.
    pub fn insert(&mut self, k: impl Into<String>, v: RecordValue) {
        self.0.insert(k.into(), v);
    }

    /// Returns keys.
    pub fn keys(&self) -> Keys<String, RecordValue> {
        self.0.keys()
    }

    /// Returns an iterator over key-value pairs.
    pub fn iter(&self) -> Iter<'_, String, RecordValue> {
        self.0.iter()
    }

    /// Returns an iterator consuming the record.
    pub fn into_iter_in_record(self) -> IntoIter<String, RecordValue> {
        self.0.into_iter()
    }

    /// Gets the value of the given key.
    pub fn get(&self, k: &str) -> Option<&RecordValue> {
        self.0.get(k)
    }

    /// True if the record has no entries.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Merges records, the entries of `record` taking precedence.
    pub fn merge(self, record: Record) -> Self {
        Record(self.0.into_iter().chain(record.0).collect())
    }

    /// Gets a scalar value.
    pub fn get_scalar(&self, k: &str) -> Result<f32> {
        if let Some(v) = self.0.get(k) {
            match v {
                RecordValue::Scalar(v) => Ok(*v),
                _ => Err(SkirmishError::RecordValueTypeError("Scalar".into()).into()),
            }
        } else {
            Err(SkirmishError::RecordKeyError(k.into()).into())
        }
    }

    /// Gets an Array1 value.
    pub fn get_array1(&self, k: &str) -> Result<Vec<f32>> {
        if let Some(v) = self.0.get(k) {
            match v {
                RecordValue::Array1(v) => Ok(v.clone()),
                _ => Err(SkirmishError::RecordValueTypeError("Array1".into()).into()),
            }
        } else {
            Err(SkirmishError::RecordKeyError(k.into()).into())
        }
    }

    /// Gets a String value.
    pub fn get_string(&self, k: &str) -> Result<String> {
        if let Some(v) = self.0.get(k) {
            match v {
                RecordValue::String(s) => Ok(s.clone()),
                _ => Err(SkirmishError::RecordValueTypeError("String".into()).into()),
            }
        } else {
            Err(SkirmishError::RecordKeyError(k.into()).into())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Record, RecordValue};

    #[test]
    fn merge_prefers_the_argument() {
        let a = Record::from_scalar("loss", 1.0);
        let mut b = Record::from_scalar("loss", 2.0);
        b.insert("epoch", RecordValue::Scalar(3.0));
        let merged = a.merge(b);
        assert_eq!(merged.get_scalar("loss").unwrap(), 2.0);
        assert_eq!(merged.get_scalar("epoch").unwrap(), 3.0);
    }

    #[test]
    fn typed_getters_reject_mismatches() {
        let mut record = Record::from_scalar("loss", 1.0);
        record.insert("outcome", RecordValue::String("draw".into()));
        assert_eq!(record.get_string("outcome").unwrap(), "draw");
        assert!(record.get_array1("loss").is_err());
        assert!(record.get_string("loss").is_err());
        assert!(record.get_scalar("missing").is_err());
    }
}
