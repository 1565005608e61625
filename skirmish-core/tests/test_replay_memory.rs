mod common;
use anyhow::Result;
use common::{assert_close, StubValueFn};
use skirmish_core::memory::{ReplayMemory, ReplayMemoryConfig, Transition};

fn tr(state: f32, action: usize, reward: f32, next_state: f32) -> Transition {
    Transition::new(vec![state], action, reward, vec![next_state])
}

#[test]
fn eviction_drops_the_oldest_transition() -> Result<()> {
    let config = ReplayMemoryConfig::default().max_memory(3);
    let mut memory = ReplayMemory::build(&config);
    for i in 1..=4 {
        memory.remember(tr(i as f32, 0, 0.0, i as f32 + 1.0))?;
    }
    assert_eq!(memory.len(), 3);
    let states: Vec<f32> = memory.iter().map(|t| t.state[0]).collect();
    assert_eq!(states, vec![2.0, 3.0, 4.0]);
    Ok(())
}

#[test]
fn target_overwrites_only_the_taken_action() -> Result<()> {
    let config = ReplayMemoryConfig::default().discount(0.9);
    let mut memory = ReplayMemory::build(&config);
    let stored = Transition::new(vec![0.0, 0.0], 1, 5.0, vec![1.0, 1.0]);
    memory.remember(stored)?;
    // Q(s) = [2, 2], Q(s') = [3, 4].
    let value_fn = StubValueFn::new(2, 2, |row| {
        if row[0] == 0.0 {
            vec![2.0, 2.0]
        } else {
            vec![3.0, 4.0]
        }
    });
    let (inputs, targets) = memory.sample_batch(&value_fn, 1)?;
    assert_eq!(inputs.nrows(), 1);
    assert_eq!(inputs.row(0), &[0.0, 0.0]);
    assert_close(targets.row(0)[0], 2.0);
    assert_close(targets.row(0)[1], 5.0 + 0.9 * 4.0);
    Ok(())
}

#[test]
fn batch_size_is_clamped_to_the_stored_count() -> Result<()> {
    let mut memory = ReplayMemory::build(&ReplayMemoryConfig::default());
    for i in 0..10 {
        memory.remember(tr(i as f32, 0, 0.0, i as f32))?;
    }
    let value_fn = StubValueFn::constant(1, vec![0.0, 0.0]);
    let (inputs, targets) = memory.sample_batch(&value_fn, 50)?;
    assert_eq!(inputs.nrows(), 10);
    assert_eq!(targets.nrows(), 10);
    Ok(())
}

#[test]
fn sampling_an_empty_memory_fails() {
    let mut memory = ReplayMemory::build(&ReplayMemoryConfig::default());
    let value_fn = StubValueFn::constant(1, vec![0.0]);
    assert!(memory.sample_batch(&value_fn, 1).is_err());
}

#[test]
fn state_dimension_is_fixed_by_the_first_transition() -> Result<()> {
    let mut memory = ReplayMemory::build(&ReplayMemoryConfig::default());
    memory.remember(tr(1.0, 0, 0.0, 1.0))?;
    let bad = Transition::new(vec![1.0, 2.0], 0, 0.0, vec![1.0, 2.0]);
    assert!(memory.remember(bad).is_err());
    // The dimension survives a clear.
    memory.clear();
    let bad = Transition::new(vec![1.0, 2.0], 0, 0.0, vec![1.0, 2.0]);
    assert!(memory.remember(bad).is_err());
    Ok(())
}
