#![warn(missing_docs)]
//! Q-learning sandbox for a 2D multi-agent shooter.
//!
//! Ties the learning core, the shooter arena and the perceptron value
//! function together into full training runs: building one agent per
//! player, persisting their weights between runs and exporting the win
//! history of a run as CSV.
pub mod config;

use anyhow::{bail, Result};
use config::{AgentKind, WorldConfig};
use skirmish_core::{
    agent::{MemoryConfig, QAgent, QAgentConfig},
    memory::{ReplayMemoryConfig, SequenceMemoryConfig},
    TrainReport,
};
use skirmish_env::Action;
use skirmish_mlp::{Mlp, MlpConfig};
use std::path::{Path, PathBuf};

/// Builds one agent per player of the arena.
///
/// Feed-forward agents see the raw observation; sequence agents see a
/// flattened window of the last `timesteps` observations. Memory and
/// weight seeds are derived from the master seed so runs are
/// reproducible end to end.
pub fn build_agents(world: &WorldConfig) -> Result<Vec<QAgent<Mlp>>> {
    let num_players = world.env.num_players;
    if world.players.len() < num_players {
        bail!(
            "not enough player configurations, {} players are needed",
            num_players
        );
    }
    let state_dim = world.env.state_dim();
    let mut agents = Vec::with_capacity(num_players);
    for (ix, player) in world.players.iter().take(num_players).enumerate() {
        let seed = world.seed.wrapping_add(ix as u64);
        let (memory, input_dim, default_batch) = match player.kind {
            AgentKind::FeedForward => (
                MemoryConfig::Replay(ReplayMemoryConfig::default().seed(seed)),
                state_dim,
                50,
            ),
            AgentKind::Sequence => (
                MemoryConfig::Sequence(
                    SequenceMemoryConfig::default()
                        .timesteps(player.timesteps)
                        .max_memory(3 * player.timesteps)
                        .seed(seed),
                ),
                player.timesteps * state_dim,
                1,
            ),
        };
        let mlp = Mlp::build(
            &MlpConfig::default()
                .input_dim(input_dim)
                .hidden_sizes(vec![player.hidden_size])
                .num_actions(Action::COUNT)
                .seed(world.seed.wrapping_add(100 + ix as u64)),
        )?;
        let config = QAgentConfig::default()
            .num_actions(Action::COUNT)
            .batch_size(player.batch_size.unwrap_or(default_batch))
            .memory(memory);
        agents.push(QAgent::build(config, mlp));
    }
    Ok(agents)
}

/// Weight file of one player's agent.
pub fn model_path(dir: impl AsRef<Path>, ix: usize) -> PathBuf {
    dir.as_ref().join(format!("model_player_{}.bin", ix))
}

/// First unused `game_resultsN.csv` name in the directory, counting
/// from 1.
pub fn results_path(dir: impl AsRef<Path>) -> PathBuf {
    let mut i = 1;
    loop {
        let path = dir.as_ref().join(format!("game_results{}.csv", i));
        if !path.is_file() {
            return path;
        }
        i += 1;
    }
}

/// Writes the cumulative win history as CSV, one row per epoch and one
/// column per player.
pub fn export_results(path: impl AsRef<Path>, report: &TrainReport) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;
    let header: Vec<String> = (0..report.win_history.len())
        .map(|i| format!("player_{}", i))
        .collect();
    wtr.write_record(&header)?;
    let epochs = report.win_history.first().map(|h| h.len()).unwrap_or(0);
    for epoch in 0..epochs {
        let row: Vec<String> = report
            .win_history
            .iter()
            .map(|h| h[epoch].to_string())
            .collect();
        wtr.write_record(&row)?;
    }
    wtr.flush()?;
    Ok(())
}
