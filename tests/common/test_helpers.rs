//! Helper functions for integration tests

use ode_rs::problem::RightHandSide;
use ode_rs::solver::{Scenario, Trajectory};

/// Assert that two trajectories share their grid and stay within tolerance
pub fn assert_trajectory_close(
    first: &Trajectory,
    second: &Trajectory,
    tolerance: f64,
    message: &str,
) {
    assert_eq!(first.len(), second.len(), "{}: Length mismatch", message);
    assert_eq!(first.times, second.times, "{}: Time grids differ", message);

    for (i, (&x1, &x2)) in first.states.iter().zip(second.states.iter()).enumerate() {
        let diff = (x1 - x2).abs();
        assert!(
            diff < tolerance,
            "{}: Element {} differs by {} (tolerance {})",
            message, i, diff, tolerance
        );
    }
}

/// Largest |x[i] - exact(t[i])| over the whole trajectory
pub fn max_abs_error<F: Fn(f64) -> f64>(trajectory: &Trajectory, exact: F) -> f64 {
    trajectory
        .iter()
        .map(|(t, x)| (x - exact(t)).abs())
        .fold(0.0, f64::max)
}

/// e_i / e_{i+1} for consecutive error levels
pub fn convergence_ratios(errors: &[f64]) -> Vec<f64> {
    errors.windows(2).map(|pair| pair[0] / pair[1]).collect()
}

/// Create a simple scenario for testing
pub fn create_simple_scenario<R: RightHandSide + 'static>(model: R, initial_value: f64) -> Scenario {
    Scenario::new(Box::new(model), initial_value)
}

/// Compute relative error: |actual - expected| / |expected|
pub fn relative_error(actual: f64, expected: f64) -> f64 {
    if expected.abs() < 1e-10 {
        (actual - expected).abs()
    } else {
        (actual - expected).abs() / expected.abs()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relative_error() {
        assert!((relative_error(1.0, 1.0) - 0.0).abs() < 1e-10);
        assert!((relative_error(1.1, 1.0) - 0.1).abs() < 1e-10);
        assert!((relative_error(0.9, 1.0) - 0.1).abs() < 1e-10);
    }

    #[test]
    fn test_convergence_ratios() {
        assert_eq!(convergence_ratios(&[8.0, 4.0, 1.0]), vec![2.0, 4.0]);
    }
}
