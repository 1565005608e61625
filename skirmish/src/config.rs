//! Top-level configuration of a training run.
use anyhow::Result;
use serde::{Deserialize, Serialize};
use skirmish_core::TrainerConfig;
use skirmish_env::ShooterEnvConfig;
use std::{
    fs::File,
    io::{BufReader, Write},
    path::Path,
};

/// Which kind of agent controls a player.
#[derive(Debug, Deserialize, Serialize, PartialEq, Clone)]
pub enum AgentKind {
    /// Acts on the current observation alone.
    FeedForward,

    /// Acts on a window of recent observations.
    Sequence,
}

/// Per-player agent configuration.
#[derive(Debug, Deserialize, Serialize, PartialEq, Clone)]
pub struct PlayerConfig {
    /// Kind of agent.
    pub kind: AgentKind,

    /// Forces fully random play, useful as a sparring partner.
    pub random: bool,

    /// Width of the value network's hidden layer.
    pub hidden_size: usize,

    /// Window length of a [`Sequence`](AgentKind::Sequence) agent.
    pub timesteps: usize,

    /// Training batch size; defaults to 50 for feed-forward agents and 1
    /// for sequence agents.
    pub batch_size: Option<usize>,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            kind: AgentKind::FeedForward,
            random: false,
            hidden_size: 50,
            timesteps: 20,
            batch_size: None,
        }
    }
}

/// Configuration of a full training run: arena, players and schedule.
#[derive(Debug, Deserialize, Serialize, PartialEq, Clone)]
pub struct WorldConfig {
    /// Arena configuration.
    pub env: ShooterEnvConfig,

    /// One entry per player; at least
    /// [`env.num_players`](ShooterEnvConfig::num_players) are needed.
    pub players: Vec<PlayerConfig>,

    /// Episode schedule and exploration rate.
    pub trainer: TrainerConfig,

    /// Master seed of the run.
    pub seed: u64,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            env: ShooterEnvConfig::default(),
            players: vec![PlayerConfig::default(); 2],
            trainer: TrainerConfig::default(),
            seed: 42,
        }
    }
}

impl WorldConfig {
    /// Sets the master seed.
    pub fn seed(mut self, v: u64) -> Self {
        self.seed = v;
        self
    }

    /// Constructs [`WorldConfig`] from a YAML file.
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
