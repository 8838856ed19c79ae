use tumble::{BodyState, SimulationResult};

/// Assert that every state component is finite
#[track_caller]
pub fn assert_state_finite(state: &BodyState) {
    let x = state.to_vector();
    for (i, value) in x.iter().enumerate() {
        assert!(value.is_finite(), "State component {} is not finite", i);
    }
}

/// Assert that no sample of a run contains NaN or infinity
#[track_caller]
pub fn assert_result_finite(result: &SimulationResult) {
    assert_eq!(
        result.history.first_non_finite(),
        None,
        "Run '{}' produced a non-finite state",
        result.name
    );
}

#[track_caller]
pub fn assert_within_percent(actual: f64, expected: f64, percent: f64) {
    let error = 100.0 * (actual - expected).abs() / expected.abs();
    assert!(
        error <= percent,
        "{} differs from {} by {:.3}% (allowed {}%)",
        actual,
        expected,
        error,
        percent
    );
}
