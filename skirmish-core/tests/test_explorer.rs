use skirmish_core::agent::{ActionSelection, Greedy, WeightedQ};

#[test]
fn greedy_takes_the_first_maximum() {
    let mut selection = ActionSelection::Greedy(Greedy::new());
    assert_eq!(selection.action(&[1.0, 3.0, 3.0, 2.0]), 1);
    assert_eq!(selection.action(&[-1.0, -2.0]), 0);
}

#[test]
fn weighted_q_with_all_mass_on_one_action_always_picks_it() {
    fastrand::seed(42);
    let mut selection = WeightedQ::new();
    for _ in 0..100 {
        assert_eq!(selection.action(&[0.0, 1.0]), 1);
    }
}

#[test]
fn weighted_q_falls_back_to_uniform_on_flat_values() {
    fastrand::seed(42);
    let mut selection = WeightedQ::new();
    let mut counts = [0usize; 3];
    for _ in 0..3000 {
        counts[selection.action(&[2.0, 2.0, 2.0])] += 1;
    }
    for &c in &counts {
        assert!(c > 500, "uniform fallback skewed: {:?}", counts);
    }
}

#[test]
fn weighted_q_prefers_larger_values() {
    fastrand::seed(7);
    let mut selection = WeightedQ::new();
    // Mass after shifting is [0, 1, 3]; action 0 is never drawn.
    let mut counts = [0usize; 3];
    for _ in 0..4000 {
        counts[selection.action(&[1.0, 2.0, 4.0])] += 1;
    }
    assert_eq!(counts[0], 0);
    assert!(counts[2] > counts[1]);
}
