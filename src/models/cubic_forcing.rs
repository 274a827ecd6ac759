//! Cubic damping with sinusoidal forcing
//!
//! ```text
//! dx/dt = -x³ + sin(t)
//! ```
//!
//! The cubic term pulls the state back towards zero, the forcing keeps it
//! oscillating. The solution stays bounded (|x| ≲ 1) for any reasonable
//! initial value, which makes it a convenient smoke test for all methods.

use crate::problem::RightHandSide;

/// Forced cubic damping: `dx/dt = -x³ + sin(t)`
///
/// # Example
///
/// ```rust
/// use ode_rs::models::CubicForcing;
/// use ode_rs::problem::RightHandSide;
///
/// let model = CubicForcing::new();
/// assert_eq!(model.evaluate(1.0, 0.0), -1.0);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct CubicForcing;

impl CubicForcing {
    pub fn new() -> Self {
        Self
    }
}

impl RightHandSide for CubicForcing {
    fn evaluate(&self, x: f64, t: f64) -> f64 {
        -(x * x * x) + t.sin()
    }

    fn name(&self) -> &str {
        "Cubic Forcing"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn test_zero_state_at_origin() {
        assert_eq!(CubicForcing::new().evaluate(0.0, 0.0), 0.0);
    }

    #[test]
    fn test_cubic_term_is_odd() {
        let model = CubicForcing::new();
        assert_eq!(model.evaluate(2.0, 0.0), -8.0);
        assert_eq!(model.evaluate(-2.0, 0.0), 8.0);
    }

    #[test]
    fn test_forcing_peak() {
        let model = CubicForcing::new();
        assert_relative_eq!(model.evaluate(0.0, FRAC_PI_2), 1.0, epsilon = 1e-15);
    }
}
