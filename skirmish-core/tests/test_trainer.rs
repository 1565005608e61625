mod common;
use anyhow::Result;
use common::StubValueFn;
use skirmish_core::{
    agent::{MemoryConfig, QAgent, QAgentConfig},
    memory::ReplayMemoryConfig,
    record::{BufferedRecorder, NullRecorder},
    Env, Trainer, TrainerConfig,
};

/// Two-agent environment where agent 0 scores one point every tick.
struct TestEnv {
    tick: f32,
    scores: [f32; 2],
    snapshots: [f32; 2],
}

impl Env for TestEnv {
    type Config = ();

    fn build(_config: &Self::Config, _seed: u64) -> Result<Self> {
        Ok(Self {
            tick: 0.0,
            scores: [0.0; 2],
            snapshots: [0.0; 2],
        })
    }

    fn reset_with_index(&mut self, _ix: usize) -> Result<Vec<f32>> {
        self.tick = 0.0;
        self.scores = [0.0; 2];
        self.snapshots = [0.0; 2];
        Ok(self.state())
    }

    fn num_agents(&self) -> usize {
        2
    }

    fn state_dim(&self) -> usize {
        2
    }

    fn num_actions(&self) -> usize {
        2
    }

    fn state(&self) -> Vec<f32> {
        vec![self.tick, self.tick]
    }

    fn apply_action(&mut self, agent_ix: usize, _action: usize) -> Result<()> {
        self.snapshots[agent_ix] = self.scores[agent_ix];
        Ok(())
    }

    fn advance(&mut self) {
        self.tick += 1.0;
        self.scores[0] += 1.0;
    }

    fn score_delta(&self, agent_ix: usize) -> f32 {
        self.scores[agent_ix] - self.snapshots[agent_ix]
    }

    fn score(&self, agent_ix: usize) -> f32 {
        self.scores[agent_ix]
    }
}

fn agents() -> Vec<QAgent<StubValueFn>> {
    let config = QAgentConfig::default()
        .num_actions(2)
        .batch_size(4)
        .memory(MemoryConfig::Replay(ReplayMemoryConfig::default()));
    (0..2)
        .map(|_| QAgent::build(config.clone(), StubValueFn::constant(2, vec![0.0, 1.0])))
        .collect()
}

#[test]
fn the_scoring_agent_wins_every_epoch() -> Result<()> {
    fastrand::seed(42);
    let mut env = TestEnv::build(&(), 0)?;
    let mut agents = agents();
    let trainer = Trainer::build(TrainerConfig::default().epochs(3).steps_per_epoch(5));
    let report = trainer.train(&mut env, &mut agents, &mut NullRecorder::new())?;
    assert_eq!(report.wins, vec![3, 0]);
    assert_eq!(report.win_history[0], vec![1, 2, 3]);
    assert_eq!(report.win_history[1], vec![0, 0, 0]);
    Ok(())
}

#[test]
fn every_tick_stores_one_transition_per_agent() -> Result<()> {
    fastrand::seed(42);
    let mut env = TestEnv::build(&(), 0)?;
    let mut agents = agents();
    let trainer = Trainer::build(TrainerConfig::default().epochs(2).steps_per_epoch(7));
    trainer.train(&mut env, &mut agents, &mut NullRecorder::new())?;
    // Memories are cleared at the start of each episode.
    assert_eq!(agents[0].memory_len(), 7);
    assert_eq!(agents[1].memory_len(), 7);
    Ok(())
}

#[test]
fn records_carry_scores_and_the_winner() -> Result<()> {
    fastrand::seed(42);
    let mut env = TestEnv::build(&(), 0)?;
    let mut agents = agents();
    let trainer = Trainer::build(TrainerConfig::default().epochs(1).steps_per_epoch(5));
    let mut recorder = BufferedRecorder::new();
    trainer.train(&mut env, &mut agents, &mut recorder)?;
    assert_eq!(recorder.len(), 1);
    let record = recorder.iter().next().unwrap();
    assert_eq!(record.get_scalar("winner")?, 0.0);
    assert_eq!(record.get_array1("scores")?, vec![5.0, 0.0]);
    assert_eq!(record.get_array1("mean_loss")?.len(), 2);
    Ok(())
}
