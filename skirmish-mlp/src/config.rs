//! Configuration of [`Mlp`](crate::Mlp).
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::{
    fs::File,
    io::{BufReader, Write},
    path::Path,
};

/// Configuration of [`Mlp`](crate::Mlp).
#[derive(Debug, Deserialize, Serialize, PartialEq, Clone)]
pub struct MlpConfig {
    /// Length of one input row.
    pub input_dim: usize,

    /// Widths of the hidden sigmoid layers.
    pub hidden_sizes: Vec<usize>,

    /// Number of actions, i.e. width of the linear output layer.
    pub num_actions: usize,

    /// Gradient descent step size.
    pub learning_rate: f32,

    /// Seed of the weight initialization.
    pub seed: u64,
}

impl Default for MlpConfig {
    fn default() -> Self {
        Self {
            input_dim: 0,
            hidden_sizes: vec![150],
            num_actions: 0,
            learning_rate: 1e-3,
            seed: 42,
        }
    }
}

impl MlpConfig {
    /// Sets the input dimensionality.
    pub fn input_dim(mut self, v: usize) -> Self {
        self.input_dim = v;
        self
    }

    /// Sets the hidden layer widths.
    pub fn hidden_sizes(mut self, v: Vec<usize>) -> Self {
        self.hidden_sizes = v;
        self
    }

    /// Sets the number of actions.
    pub fn num_actions(mut self, v: usize) -> Self {
        self.num_actions = v;
        self
    }

    /// Sets the learning rate.
    pub fn learning_rate(mut self, v: f32) -> Self {
        self.learning_rate = v;
        self
    }

    /// Sets the initialization seed.
    pub fn seed(mut self, v: u64) -> Self {
        self.seed = v;
        self
    }

    /// Constructs [`MlpConfig`] from a YAML file.
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
