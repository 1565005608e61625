mod common;
use anyhow::Result;
use common::{assert_close, StubValueFn};
use skirmish_core::{
    agent::{MemoryConfig, QAgent, QAgentConfig},
    memory::{ReplayMemoryConfig, SequenceMemoryConfig},
};

fn replay_config() -> QAgentConfig {
    QAgentConfig::default()
        .num_actions(2)
        .batch_size(4)
        .memory(MemoryConfig::Replay(ReplayMemoryConfig::default()))
}

fn sequence_config(timesteps: usize) -> QAgentConfig {
    QAgentConfig::default()
        .num_actions(2)
        .batch_size(1)
        .memory(MemoryConfig::Sequence(
            SequenceMemoryConfig::default()
                .timesteps(timesteps)
                .max_memory(3 * timesteps),
        ))
}

#[test]
fn replay_agent_reports_the_training_loss() -> Result<()> {
    let value_fn = StubValueFn::constant(1, vec![0.0, 1.0]);
    let mut agent = QAgent::build(replay_config(), value_fn);
    let loss = agent.learn(vec![0.0], 1, 1.0, vec![1.0])?;
    assert_close(loss, 0.25);
    assert_eq!(agent.memory_len(), 1);
    Ok(())
}

#[test]
fn greedy_act_exposes_the_predicted_q_values() -> Result<()> {
    fastrand::seed(42);
    let value_fn = StubValueFn::constant(1, vec![0.5, 1.5]);
    let mut agent = QAgent::build(replay_config(), value_fn);
    let action = agent.act(&[0.0], 0.0)?;
    assert_eq!(action, 1);
    assert_eq!(agent.q_values(), &[0.5, 1.5]);
    Ok(())
}

#[test]
fn exploration_bypasses_the_value_function() -> Result<()> {
    fastrand::seed(42);
    let value_fn = StubValueFn::constant(1, vec![0.5, 1.5]);
    let mut agent = QAgent::build(replay_config(), value_fn);
    for _ in 0..20 {
        let action = agent.act(&[0.0], 1.0)?;
        assert!(action < 2);
    }
    assert_eq!(agent.value_fn().predict_calls.get(), 0);
    Ok(())
}

#[test]
fn epsilon_one_draws_actions_uniformly() -> Result<()> {
    fastrand::seed(42);
    let value_fn = StubValueFn::constant(1, vec![0.0, 0.0, 0.0, 1.0]);
    let config = QAgentConfig::default()
        .num_actions(4)
        .batch_size(4)
        .memory(MemoryConfig::Replay(ReplayMemoryConfig::default()));
    let mut agent = QAgent::build(config, value_fn);
    let mut counts = [0usize; 4];
    for _ in 0..8000 {
        counts[agent.act(&[0.0], 1.0)?] += 1;
    }
    // Expected 2000 per action; allow a generous statistical tolerance.
    for &c in &counts {
        assert!(c > 1800 && c < 2200, "exploration skewed: {:?}", counts);
    }
    assert_eq!(agent.value_fn().predict_calls.get(), 0);
    Ok(())
}

#[test]
fn sequence_agent_explores_until_a_window_exists() -> Result<()> {
    fastrand::seed(42);
    let timesteps = 3;
    let value_fn = StubValueFn::constant(timesteps, vec![0.5, 1.5]);
    let mut agent = QAgent::build(sequence_config(timesteps), value_fn);
    for step in 0..timesteps {
        // Epsilon zero, yet the agent must explore without history.
        let action = agent.act(&[step as f32], 0.0)?;
        assert!(action < 2);
        assert_eq!(agent.value_fn().predict_calls.get(), 0);
        agent.learn(vec![step as f32], action, 0.0, vec![step as f32 + 1.0])?;
    }
    let action = agent.act(&[3.0], 0.0)?;
    assert_eq!(action, 1);
    assert!(agent.value_fn().predict_calls.get() > 0);
    Ok(())
}

#[test]
fn sequence_agent_warms_up_with_zero_loss() -> Result<()> {
    let timesteps = 3;
    let value_fn = StubValueFn::constant(timesteps, vec![0.5, 1.5]);
    let mut agent = QAgent::build(sequence_config(timesteps), value_fn);
    for step in 0..timesteps {
        let loss = agent.learn(vec![step as f32], 0, 0.0, vec![step as f32 + 1.0])?;
        assert_close(loss, 0.0);
        assert_eq!(agent.value_fn().train_calls, 0);
    }
    let loss = agent.learn(vec![3.0], 0, 0.0, vec![4.0])?;
    assert_close(loss, 0.25);
    assert_eq!(agent.value_fn().train_calls, 1);
    Ok(())
}

#[test]
fn clear_forgets_history_but_keeps_the_value_function() -> Result<()> {
    let timesteps = 3;
    let value_fn = StubValueFn::constant(timesteps, vec![0.5, 1.5]);
    let mut agent = QAgent::build(sequence_config(timesteps), value_fn);
    for step in 0..5 {
        agent.learn(vec![step as f32], 0, 0.0, vec![step as f32 + 1.0])?;
    }
    assert_eq!(agent.memory_len(), 5);
    agent.clear();
    assert_eq!(agent.memory_len(), 0);
    // Back in the warm-up phase.
    let loss = agent.learn(vec![0.0], 0, 0.0, vec![1.0])?;
    assert_close(loss, 0.0);
    Ok(())
}
