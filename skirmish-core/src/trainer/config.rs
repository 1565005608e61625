//! Configuration of [`Trainer`](super::Trainer).
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::{
    fs::File,
    io::{BufReader, Write},
    path::Path,
};

/// Configuration of [`Trainer`](super::Trainer).
#[derive(Debug, Deserialize, Serialize, PartialEq, Clone)]
pub struct TrainerConfig {
    /// Number of episodes to run.
    pub epochs: usize,

    /// Number of environment ticks per episode.
    pub steps_per_epoch: usize,

    /// Exploration rate applied to every agent unless overridden.
    pub epsilon: f64,
}

impl Default for TrainerConfig {
    fn default() -> Self {
        Self {
            epochs: 5,
            steps_per_epoch: 500,
            epsilon: 0.1,
        }
    }
}

impl TrainerConfig {
    /// Sets the number of episodes.
    pub fn epochs(mut self, v: usize) -> Self {
        self.epochs = v;
        self
    }

    /// Sets the number of ticks per episode.
    pub fn steps_per_epoch(mut self, v: usize) -> Self {
        self.steps_per_epoch = v;
        self
    }

    /// Sets the exploration rate.
    pub fn epsilon(mut self, v: f64) -> Self {
        self.epsilon = v;
        self
    }

    /// Constructs [`TrainerConfig`] from a YAML file.
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
