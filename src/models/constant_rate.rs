//! Constant rate of change
//!
//! ```text
//! dx/dt = c        x(t) = x₀ + c·(t - t₀)
//! ```

use crate::problem::RightHandSide;

/// Constant growth model: `dx/dt = c`
///
/// Euler, RK2 and RK4 are all exact for this problem (up to rounding).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConstantRate {
    pub rate: f64,
}

impl ConstantRate {
    pub fn new(rate: f64) -> Self {
        Self { rate }
    }

    /// Exact solution at time `t` for the initial value `x0` at `t0`
    pub fn analytical_solution(&self, t: f64, t0: f64, x0: f64) -> f64 {
        x0 + self.rate * (t - t0)
    }
}

impl RightHandSide for ConstantRate {
    fn evaluate(&self, _x: f64, _t: f64) -> f64 {
        self.rate
    }

    fn name(&self) -> &str {
        "Constant Rate"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constant_rate_analytical() {
        let model = ConstantRate::new(2.0);

        // x(0) = 0.0
        assert_eq!(model.analytical_solution(0.0, 0.0, 0.0), 0.0);

        // x(5) = 0 + 2*5 = 10.0
        assert_eq!(model.analytical_solution(5.0, 0.0, 0.0), 10.0);
    }

    #[test]
    fn test_rate_ignores_state_and_time() {
        let model = ConstantRate::new(-1.25);
        assert_eq!(model.evaluate(0.0, 0.0), -1.25);
        assert_eq!(model.evaluate(1e6, -3.0), -1.25);
    }
}
