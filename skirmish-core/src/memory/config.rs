//! Configurations of the replay memories.
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::{
    fs::File,
    io::{BufReader, Write},
    path::Path,
};

/// Configuration of [`ReplayMemory`](super::ReplayMemory).
#[derive(Debug, Deserialize, Serialize, PartialEq, Clone)]
pub struct ReplayMemoryConfig {
    /// Maximum number of stored transitions. Once full, insertion evicts
    /// the oldest record.
    pub max_memory: usize,

    /// Discount factor (gamma) used in the one-step target, in `[0, 1]`.
    pub discount: f32,

    /// Seed of the sampling RNG.
    pub seed: u64,
}

impl Default for ReplayMemoryConfig {
    fn default() -> Self {
        Self {
            max_memory: 100,
            discount: 0.99,
            seed: 42,
        }
    }
}

impl ReplayMemoryConfig {
    /// Sets the capacity.
    pub fn max_memory(mut self, v: usize) -> Self {
        self.max_memory = v;
        self
    }

    /// Sets the discount factor.
    pub fn discount(mut self, v: f32) -> Self {
        self.discount = v;
        self
    }

    /// Sets the seed of the sampling RNG.
    pub fn seed(mut self, v: u64) -> Self {
        self.seed = v;
        self
    }

    /// Constructs [`ReplayMemoryConfig`] from a YAML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path)?;
        let rdr = BufReader::new(file);
        let b = serde_yaml::from_reader(rdr)?;
        Ok(b)
    }

    /// Saves the configuration as YAML.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let mut file = File::create(path)?;
        file.write_all(serde_yaml::to_string(&self)?.as_bytes())?;
        Ok(())
    }
}

/// Configuration of [`SequenceMemory`](super::SequenceMemory).
#[derive(Debug, Deserialize, Serialize, PartialEq, Clone)]
pub struct SequenceMemoryConfig {
    /// Length of one time window.
    pub timesteps: usize,

    /// Maximum number of stored transitions. The default keeps three
    /// windows' worth of history.
    pub max_memory: usize,

    /// Discount factor (gamma) used in the one-step target, in `[0, 1]`.
    pub discount: f32,

    /// Seed of the sampling RNG.
    pub seed: u64,
}

impl Default for SequenceMemoryConfig {
    fn default() -> Self {
        Self {
            timesteps: 20,
            max_memory: 60,
            discount: 0.99,
            seed: 42,
        }
    }
}

impl SequenceMemoryConfig {
    /// Sets the window length.
    pub fn timesteps(mut self, v: usize) -> Self {
        self.timesteps = v;
        self
    }

    /// Sets the capacity.
    pub fn max_memory(mut self, v: usize) -> Self {
        self.max_memory = v;
        self
    }

    /// Sets the discount factor.
    pub fn discount(mut self, v: f32) -> Self {
        self.discount = v;
        self
    }

    /// Sets the seed of the sampling RNG.
    pub fn seed(mut self, v: u64) -> Self {
        self.seed = v;
        self
    }

    /// Constructs [`SequenceMemoryConfig`] from a YAML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path)?;
        let rdr = BufReader::new(file);
        let b = serde_yaml::from_reader(rdr)?;
        Ok(b)
    }

    /// Saves the configuration as YAML.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let mut file = File::create(path)?;
        file.write_all(serde_yaml::to_string(&self)?.as_bytes())?;
        Ok(())
    }
}
