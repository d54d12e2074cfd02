// tests/operator_tests.rs

// Operator-level algebra: the oracle and diffusion transforms are exposed as
// pure functions over an explicit buffer so their involution and
// normalization properties are testable independently of the simulator.

use groversim::{AmplitudeVector, MarkedSet, apply_diffusion, apply_oracle, check_normalization};

// Helper to assert two states are approximately equal component-wise
fn assert_state_approx_equal(actual: &AmplitudeVector, expected: &AmplitudeVector, tolerance: f64) {
    assert_eq!(actual.dim(), expected.dim(), "State dimension mismatch");
    for (i, (a, e)) in actual
        .vector()
        .iter()
        .zip(expected.vector().iter())
        .enumerate()
    {
        assert!(
            (a - e).abs() < tolerance,
            "State mismatch at index {} - Actual: {}, Expected: {}",
            i,
            a,
            e
        );
    }
}

#[test]
fn test_oracle_involution_is_exact() {
    // Sign flips are exact in floating point: applying the oracle twice
    // restores the original vector bit for bit.
    let mut state = AmplitudeVector::uniform(8);
    let original = state.clone();
    let oracle = MarkedSet::new([1, 6]);

    apply_oracle(&mut state, &oracle);
    assert_ne!(state, original, "One application must change the state");
    apply_oracle(&mut state, &oracle);
    assert_eq!(state, original, "Two applications must restore the state exactly");
}

#[test]
fn test_oracle_preserves_normalization_exactly() {
    // Squares of amplitudes are unaffected by sign.
    let mut state = AmplitudeVector::uniform(16);
    apply_oracle(&mut state, &MarkedSet::new([0, 3, 9, 15]));
    check_normalization(&state, None).expect("oracle must preserve the norm");

    let probabilities = state.probabilities();
    for p in probabilities {
        assert!((p - 1.0 / 16.0).abs() < 1e-12, "Probability changed by a sign flip");
    }
}

#[test]
fn test_diffusion_involution() {
    // Diffusion is a reflection about the mean, hence self-inverse. Start
    // from a non-trivial post-oracle state so the mean shift is exercised.
    let mut state = AmplitudeVector::uniform(8);
    apply_oracle(&mut state, &MarkedSet::single(3));
    let original = state.clone();

    apply_diffusion(&mut state);
    apply_diffusion(&mut state);
    assert_state_approx_equal(&state, &original, 1e-12);
}

#[test]
fn test_diffusion_on_uniform_is_identity() {
    // With every amplitude equal to the mean, the reflection maps each
    // entry to itself. For N = 16 the amplitude is exactly 0.25 and the
    // arithmetic is exact, so the state is unchanged bit for bit.
    let mut state = AmplitudeVector::uniform(16);
    let original = state.clone();
    apply_diffusion(&mut state);
    assert_eq!(state, original);
}

#[test]
fn test_diffusion_preserves_normalization() {
    let mut state = AmplitudeVector::uniform(32);
    let oracle = MarkedSet::new([7, 21]);
    for _ in 0..10 {
        apply_oracle(&mut state, &oracle);
        check_normalization(&state, None).expect("norm after oracle");
        apply_diffusion(&mut state);
        check_normalization(&state, None).expect("norm after diffusion");
    }
}

#[test]
fn test_oracle_diffusion_round_amplifies_marked() {
    // One full round from uniform must strictly raise the marked
    // probability above the uniform baseline and lower the others.
    let mut state = AmplitudeVector::uniform(8);
    let oracle = MarkedSet::single(5);

    apply_oracle(&mut state, &oracle);
    apply_diffusion(&mut state);

    let probabilities = state.probabilities();
    assert!(probabilities[5] > 0.125, "Marked probability not amplified");
    for (i, p) in probabilities.iter().enumerate() {
        if i != 5 {
            assert!(*p < 0.125, "Unmarked probability {} not suppressed", i);
        }
    }
}

#[test]
fn test_closure_oracle_matches_marked_set() {
    // The predicate and set forms of the same oracle produce identical
    // transforms.
    let mut by_set = AmplitudeVector::uniform(8);
    let mut by_closure = AmplitudeVector::uniform(8);

    apply_oracle(&mut by_set, &MarkedSet::new([1, 4]));
    apply_oracle(&mut by_closure, &|index: usize| index == 1 || index == 4);

    assert_eq!(by_set, by_closure);
}
