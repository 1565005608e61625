//! Configuration of [`QAgent`](super::QAgent).
use super::ActionSelection;
use crate::memory::{ReplayMemoryConfig, SequenceMemoryConfig};
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::{
    fs::File,
    io::{BufReader, Write},
    path::Path,
};

/// Which replay memory the agent trains from.
#[derive(Debug, Deserialize, Serialize, PartialEq, Clone)]
pub enum MemoryConfig {
    /// Single-transition replay, one state per training input.
    Replay(ReplayMemoryConfig),

    /// Time-windowed replay, a flattened window per training input.
    Sequence(SequenceMemoryConfig),
}

impl Default for MemoryConfig {
    fn default() -> Self {
        MemoryConfig::Replay(ReplayMemoryConfig::default())
    }
}

/// Configuration of [`QAgent`](super::QAgent).
#[derive(Debug, Deserialize, Serialize, PartialEq, Clone)]
pub struct QAgentConfig {
    /// Size of the agent's discrete action set.
    pub num_actions: usize,

    /// Number of rows per training batch.
    pub batch_size: usize,

    /// Exploitation strategy.
    pub action_selection: ActionSelection,

    /// Replay memory variant and its parameters.
    pub memory: MemoryConfig,
}

impl Default for QAgentConfig {
    fn default() -> Self {
        Self {
            num_actions: 0,
            batch_size: 50,
            action_selection: ActionSelection::default(),
            memory: MemoryConfig::default(),
        }
    }
}

impl QAgentConfig {
    /// Sets the number of actions.
    pub fn num_actions(mut self, v: usize) -> Self {
        self.num_actions = v;
        self
    }

    /// Sets the batch size.
    pub fn batch_size(mut self, v: usize) -> Self {
        self.batch_size = v;
        self
    }

    /// Sets the exploitation strategy.
    pub fn action_selection(mut self, v: ActionSelection) -> Self {
        self.action_selection = v;
        self
    }

    /// Sets the replay memory variant.
    pub fn memory(mut self, v: MemoryConfig) -> Self {
        self.memory = v;
        self
    }

    /// Constructs [`QAgentConfig`] from a YAML file.
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
