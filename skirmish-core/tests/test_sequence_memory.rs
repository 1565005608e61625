mod common;
use anyhow::Result;
use common::{assert_close, StubValueFn};
use skirmish_core::memory::{SequenceMemory, SequenceMemoryConfig, Transition};

fn tr(state: f32, action: usize, reward: f32, next_state: f32) -> Transition {
    Transition::new(vec![state], action, reward, vec![next_state])
}

fn config() -> SequenceMemoryConfig {
    SequenceMemoryConfig::default().timesteps(3).max_memory(9)
}

#[test]
fn window_zero_resolves_to_the_most_recent_window() -> Result<()> {
    let mut memory = SequenceMemory::build(&config());
    for i in 0..5 {
        memory.remember(tr(i as f32, 0, 0.0, i as f32 + 1.0))?;
    }
    let w = memory.window(0)?;
    assert_eq!(w.nrows(), 3);
    assert_eq!(w.ncols(), 1);
    assert_eq!(w.data(), &[2.0, 3.0, 4.0]);
    let w = memory.window(1)?;
    assert_eq!(w.data(), &[1.0, 2.0, 3.0]);
    Ok(())
}

#[test]
fn window_bounds_are_checked() -> Result<()> {
    let mut memory = SequenceMemory::build(&config());
    memory.remember(tr(0.0, 0, 0.0, 1.0))?;
    memory.remember(tr(1.0, 0, 0.0, 2.0))?;
    // Not yet a full window of history.
    assert!(memory.window(0).is_err());
    for i in 2..5 {
        memory.remember(tr(i as f32, 0, 0.0, i as f32 + 1.0))?;
    }
    // A window starting at 3 would run past the end.
    assert!(memory.window(3).is_err());
    Ok(())
}

#[test]
fn readiness_needs_a_window_plus_its_successor() -> Result<()> {
    let mut memory = SequenceMemory::build(&config());
    for i in 0..3 {
        memory.remember(tr(i as f32, 0, 0.0, i as f32 + 1.0))?;
    }
    assert!(memory.has_window());
    assert!(!memory.ready());
    let value_fn = StubValueFn::constant(3, vec![0.0, 0.0]);
    assert!(memory.sample_batch(&value_fn, 1).is_err());
    memory.remember(tr(3.0, 0, 0.0, 4.0))?;
    assert!(memory.ready());
    assert!(memory.sample_batch(&value_fn, 1).is_ok());
    Ok(())
}

#[test]
fn batch_rows_are_flattened_windows_with_rolled_targets() -> Result<()> {
    let mut memory = SequenceMemory::build(&config().discount(0.5));
    memory.remember(tr(10.0, 1, 0.0, 20.0))?;
    memory.remember(tr(20.0, 1, 0.0, 30.0))?;
    memory.remember(tr(30.0, 1, 0.0, 40.0))?;
    memory.remember(tr(40.0, 0, 1.0, 50.0))?;
    let value_fn = StubValueFn::constant(3, vec![1.0, 2.0]);
    // Only one window start exists, which resolves through the
    // most-recent-window shorthand to [20, 30, 40]; the transition one
    // past it is the one stored at index 3.
    let (inputs, targets) = memory.sample_batch(&value_fn, 2)?;
    assert_eq!(inputs.nrows(), 2);
    assert_eq!(inputs.ncols(), 3);
    assert_eq!(targets.ncols(), 2);
    for i in 0..2 {
        assert_eq!(inputs.row(i), &[20.0, 30.0, 40.0]);
        assert_close(targets.row(i)[0], 1.0 + 0.5 * 2.0);
        assert_close(targets.row(i)[1], 2.0);
    }
    Ok(())
}

#[test]
fn eviction_shifts_the_windows() -> Result<()> {
    let mut memory = SequenceMemory::build(&config());
    for i in 0..12 {
        memory.remember(tr(i as f32, 0, 0.0, i as f32 + 1.0))?;
    }
    // Capacity 9 keeps states 3..=11.
    assert_eq!(memory.len(), 9);
    let w = memory.window(0)?;
    assert_eq!(w.data(), &[9.0, 10.0, 11.0]);
    Ok(())
}
