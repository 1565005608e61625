//! Episode loop driving simultaneous-move self-play training.
mod config;
use crate::{
    agent::QAgent,
    record::{Record, RecordValue, Recorder},
    Env, ValueFn,
};
use anyhow::Result;
use log::info;
pub use config::TrainerConfig;

/// Outcome of one training episode.
pub struct EpisodeSummary {
    /// Index of the agent with the strictly highest score, if any.
    pub winner: Option<usize>,

    /// Final score per agent.
    pub scores: Vec<f32>,

    /// Mean training loss per agent over the episode.
    pub mean_loss: Vec<f32>,
}

/// Outcome of a full training run.
pub struct TrainReport {
    /// Number of episodes won per agent.
    pub wins: Vec<u32>,

    /// Cumulative win count per agent after each epoch,
    /// `win_history[agent][epoch]`.
    pub win_history: Vec<Vec<u32>>,
}

/// Index of the agent with the strictly highest score.
///
/// A tie for the top score means no winner.
fn best_agent(scores: &[f32]) -> Option<usize> {
    let mut best: Option<usize> = None;
    for (i, &s) in scores.iter().enumerate() {
        match best {
            None => best = Some(i),
            Some(b) => {
                if s > scores[b] {
                    best = Some(i);
                }
            }
        }
    }
    let b = best?;
    let top = scores[b];
    if scores.iter().filter(|&&s| s == top).count() > 1 {
        None
    } else {
        Some(b)
    }
}

#[cfg_attr(doc, aquamarine::aquamarine)]
/// Runs episodes of simultaneous-move self-play and trains the agents.
///
/// Every tick follows a strict ordering so that all agents decide from
/// the same pre-move state and each reward covers exactly the interval
/// since that agent's own previous decision:
///
/// ```mermaid
/// flowchart TB
///   A[Snapshot state]-->B[Every agent acts on the snapshot]
///   B-->C[Actions applied to the environment]
///   C-->D[Environment advances one tick]
///   D-->E[Per-agent reward = own score delta]
///   E-->F[Every agent learns from its transition]
///   F-->A
/// ```
pub struct Trainer {
    epochs: usize,
    steps_per_epoch: usize,
    epsilon: f64,
}

impl Trainer {
    /// Builds the trainer from a configuration.
    pub fn build(config: TrainerConfig) -> Self {
        Self {
            epochs: config.epochs,
            steps_per_epoch: config.steps_per_epoch,
            epsilon: config.epsilon,
        }
    }

    /// Runs one episode and trains every agent along the way.
    ///
    /// All agents forget their stored transitions at the start so that no
    /// episode trains on stale history.
    pub fn run_episode<E: Env, V: ValueFn>(
        &self,
        env: &mut E,
        agents: &mut [QAgent<V>],
        epsilons: &[f64],
        episode_ix: usize,
    ) -> Result<EpisodeSummary> {
        let n = agents.len();
        for agent in agents.iter_mut() {
            agent.clear();
        }
        let mut state = env.reset_with_index(episode_ix)?;
        let mut loss_sum = vec![0.0f32; n];
        let mut actions = vec![0usize; n];
        for _ in 0..self.steps_per_epoch {
            for (i, agent) in agents.iter_mut().enumerate() {
                let a = agent.act(&state, epsilons[i])?;
                env.apply_action(i, a)?;
                actions[i] = a;
            }
            env.advance();
            let next_state = env.state();
            for (i, agent) in agents.iter_mut().enumerate() {
                let reward = env.score_delta(i);
                loss_sum[i] +=
                    agent.learn(state.clone(), actions[i], reward, next_state.clone())?;
            }
            state = next_state;
        }
        let scores: Vec<f32> = (0..n).map(|i| env.score(i)).collect();
        let mean_loss: Vec<f32> = loss_sum
            .iter()
            .map(|&s| s / self.steps_per_epoch as f32)
            .collect();
        Ok(EpisodeSummary {
            winner: best_agent(&scores),
            scores,
            mean_loss,
        })
    }

    /// Trains with the configured exploration rate for every agent.
    pub fn train<E: Env, V: ValueFn>(
        &self,
        env: &mut E,
        agents: &mut [QAgent<V>],
        recorder: &mut impl Recorder,
    ) -> Result<TrainReport> {
        let epsilons = vec![self.epsilon; agents.len()];
        self.train_with_epsilons(env, agents, &epsilons, recorder)
    }

    /// Trains with a per-agent exploration rate.
    pub fn train_with_epsilons<E: Env, V: ValueFn>(
        &self,
        env: &mut E,
        agents: &mut [QAgent<V>],
        epsilons: &[f64],
        recorder: &mut impl Recorder,
    ) -> Result<TrainReport> {
        let n = agents.len();
        let mut wins = vec![0u32; n];
        let mut win_history = vec![vec![0u32; self.epochs]; n];
        for epoch in 0..self.epochs {
            info!("Running epoch {}...", epoch);
            let summary = self.run_episode(env, agents, epsilons, epoch)?;
            match summary.winner {
                Some(w) => {
                    wins[w] += 1;
                    info!("Epoch {} won by agent {}", epoch, w);
                }
                None => info!("Epoch {} ended in a draw", epoch),
            }
            for i in 0..n {
                win_history[i][epoch] = wins[i];
            }
            let mut record = Record::empty();
            record.insert("epoch", RecordValue::Scalar(epoch as f32));
            record.insert("scores", RecordValue::Array1(summary.scores.clone()));
            record.insert("mean_loss", RecordValue::Array1(summary.mean_loss.clone()));
            if let Some(w) = summary.winner {
                record.insert("winner", RecordValue::Scalar(w as f32));
            }
            recorder.write(record);
        }
        Ok(TrainReport { wins, win_history })
    }
}

#[cfg(test)]
mod tests {
    use super::best_agent;

    #[test]
    fn strict_maximum_wins() {
        assert_eq!(best_agent(&[1.0, 3.0, 2.0]), Some(1));
    }

    #[test]
    fn tie_for_top_is_a_draw() {
        assert_eq!(best_agent(&[3.0, 3.0, 1.0]), None);
    }

    #[test]
    fn empty_scores_have_no_winner() {
        assert_eq!(best_agent(&[]), None);
    }
}
