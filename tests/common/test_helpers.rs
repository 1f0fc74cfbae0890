//! Helper functions for integration tests

/// Compute relative error: |actual - expected| / |expected|
pub fn relative_error(actual: f64, expected: f64) -> f64 {
    if expected.abs() < 1e-10 {
        (actual - expected).abs()
    } else {
        (actual - expected).abs() / expected.abs()
    }
}

/// Assert that a sampled curve never decreases
pub fn assert_non_decreasing(values: &[f64], message: &str) {
    for (i, pair) in values.windows(2).enumerate() {
        assert!(
            pair[1] >= pair[0],
            "{}: value {} ({}) is below value {} ({})",
            message, i + 1, pair[1], i, pair[0]
        );
    }
}
