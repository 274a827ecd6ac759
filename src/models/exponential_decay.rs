//! Linear exponential decay
//!
//! ```text
//! dx/dt = -k·x        x(t) = x₀·exp(-k·(t - t₀))
//! ```

use crate::problem::RightHandSide;

/// Exponential decay model: `dx/dt = -k·x`
///
/// Useful for testing solver accuracy since the exact solution is known.
///
/// # Example
///
/// ```rust
/// use ode_rs::models::ExponentialDecay;
/// use ode_rs::problem::RightHandSide;
///
/// let model = ExponentialDecay::new(0.5);
/// assert_eq!(model.evaluate(2.0, 0.0), -1.0);
/// assert_eq!(model.analytical_solution(0.0, 0.0, 3.0), 3.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExponentialDecay {
    /// k in dx/dt = -k·x
    pub decay_rate: f64,
}

impl ExponentialDecay {
    pub fn new(decay_rate: f64) -> Self {
        Self { decay_rate }
    }

    /// Exact solution at time `t` for the initial value `x0` at `t0`
    pub fn analytical_solution(&self, t: f64, t0: f64, x0: f64) -> f64 {
        x0 * (-self.decay_rate * (t - t0)).exp()
    }
}

impl RightHandSide for ExponentialDecay {
    fn evaluate(&self, x: f64, _t: f64) -> f64 {
        -self.decay_rate * x
    }

    fn name(&self) -> &str {
        "Exponential Decay"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_exponential_decay_analytical() {
        let model = ExponentialDecay::new(0.5);

        // x(0) = 1.0
        assert_relative_eq!(model.analytical_solution(0.0, 0.0, 1.0), 1.0);

        // x(1) = exp(-0.5) ≈ 0.6065
        assert_relative_eq!(
            model.analytical_solution(1.0, 0.0, 1.0),
            0.6065306597,
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_analytical_solution_is_shift_invariant() {
        let model = ExponentialDecay::new(2.0);
        assert_relative_eq!(
            model.analytical_solution(3.5, 3.0, 1.0),
            model.analytical_solution(0.5, 0.0, 1.0),
            epsilon = 1e-15
        );
    }

    #[test]
    fn test_rate_ignores_time() {
        let model = ExponentialDecay::new(1.0);
        assert_eq!(model.evaluate(3.0, 0.0), model.evaluate(3.0, 100.0));
    }
}
