//! Runge-Kutta 4 (RK4) numerical solver
//!
//! # Mathematical Background
//!
//! The classical fourth-order Runge-Kutta method (RK4) is one of the most
//! widely used numerical integrators for ordinary differential equations:
//!
//! ```text
//! dx/dt = f(x, t)
//! ```
//!
//! The RK4 scheme uses a weighted average of four slope estimates, each
//! already scaled by the step size:
//!
//! ```text
//! k₁ = h·f(xᵢ, tᵢ)
//! k₂ = h·f(xᵢ + k₁/2, tᵢ + h/2)
//! k₃ = h·f(xᵢ + k₂/2, tᵢ + h/2)
//! k₄ = h·f(xᵢ + k₃, tᵢ + h)
//!
//! xᵢ₊₁ = xᵢ + (k₁ + 2k₂ + 2k₃ + k₄)/6
//! ```
//!
//! # Characteristics
//!
//! - **Order**: Fourth-order accurate (global error ~ O(h⁴))
//! - **Stability**: Larger stability region than Euler
//! - **Complexity**: 4 function evaluations per step
//!
//! # When NOT to Use
//!
//! - Very stiff problems → implicit methods
//! - Need error control → adaptive embedded pairs
//!
//! # Comparison with Euler
//!
//! | Method | Order | Evals/Step | Error |
//! |--------|-------|------------|-------|
//! | Euler  | 1     | 1          | O(h)  |
//! | RK4    | 4     | 4          | O(h⁴) |
//!
//! # Example
//!
//! ```rust
//! use ode_rs::solver::rk4;
//!
//! let trajectory = rk4(|x: f64, _t: f64| -x, 1.0, 0.0, 1.0, 1000)?;
//! assert!((trajectory.final_state() - (-1.0_f64).exp()).abs() < 1e-6);
//! # Ok::<(), ode_rs::solver::SolverError>(())
//! ```

use crate::problem::RightHandSide;
use crate::solver::{Solver, SolverConfiguration, SolverError, Trajectory};

// =================================================================================================
// RK4 Solver
// =================================================================================================

/// Classical fourth-order Runge-Kutta solver
///
/// # Algorithm
///
/// For each step i = 0, 1, ..., N-2:
///
/// - **Stage 1**: k₁ = h·f(xᵢ, tᵢ)
///   - Slope at beginning of interval
/// - **Stage 2**: k₂ = h·f(xᵢ + k₁/2, tᵢ + h/2)
///   - Slope at midpoint using Euler prediction with k₁
/// - **Stage 3**: k₃ = h·f(xᵢ + k₂/2, tᵢ + h/2)
///   - Slope at midpoint using Euler prediction with k₂
/// - **Stage 4**: k₄ = h·f(xᵢ + k₃, tᵢ + h)
///   - Slope at end of interval using Euler prediction with k₃
/// - **Update**: xᵢ₊₁ = xᵢ + (k₁ + 2k₂ + 2k₃ + k₄)/6
///   - Simpson's rule weights
///
/// # Stability
///
/// For linear problems dx/dt = λx, RK4 is stable when (z = λ·h):
///
/// ```text
/// |1 + z + z²/2 + z³/6 + z⁴/24| ≤ 1
/// ```
///
/// # Error Analysis
///
/// - **Local truncation error**: O(h⁵) per step
/// - **Global error**: O(h⁴)
///
/// **Practical implication**: Halving h reduces error by a factor of 16.
#[derive(Debug, Clone, Copy, Default)]
pub struct RK4Solver;

impl RK4Solver {
    /// Create a new RK4 solver
    ///
    /// # Example
    ///
    /// ```rust
    /// use ode_rs::solver::{RK4Solver, Solver};
    ///
    /// let solver = RK4Solver::new();
    /// assert_eq!(solver.name(), "Runge Kutta (RK4)");
    /// ```
    pub fn new() -> Self {
        Self
    }
}

impl Solver for RK4Solver {
    fn step(&self, rhs: &dyn RightHandSide, x: f64, t: f64, h: f64) -> f64 {
        let k1 = h * rhs.evaluate(x, t);
        let k2 = h * rhs.evaluate(x + k1 / 2.0, t + h / 2.0);
        let k3 = h * rhs.evaluate(x + k2 / 2.0, t + h / 2.0);
        let k4 = h * rhs.evaluate(x + k3, t + h);

        x + (k1 + 2.0 * k2 + 2.0 * k3 + k4) / 6.0
    }

    fn name(&self) -> &'static str {
        "Runge Kutta (RK4)"
    }

    fn order(&self) -> u32 {
        4
    }

    fn evaluations_per_step(&self) -> usize {
        4
    }
}

/// Integrate `dx/dt = f(x, t)` from `x(t0) = x0` to `tf` on `points` samples
/// with classical RK4
///
/// # Errors
///
/// Fails fast when `points < 2`, `tf <= t0`, or a bound is not finite.
pub fn rk4<F: RightHandSide>(
    f: F,
    x0: f64,
    t0: f64,
    tf: f64,
    points: usize,
) -> Result<Trajectory, SolverError> {
    RK4Solver.solve_with(&f, x0, &SolverConfiguration::time_evolution(t0, tf, points))
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ConstantRate, CubicForcing, ExponentialDecay};
    use crate::solver::Scenario;
    use approx::assert_relative_eq;

    // ====== Solver Creation Tests ======

    #[test]
    fn test_rk4_solver_creation() {
        let solver = RK4Solver::new();
        assert_eq!(solver.name(), "Runge Kutta (RK4)");
        assert_eq!(solver.order(), 4);
        assert_eq!(solver.evaluations_per_step(), 4);
    }

    #[test]
    fn test_rk4_solver_default() {
        let solver = RK4Solver::default();
        assert_eq!(solver.name(), "Runge Kutta (RK4)");
    }

    // ====== Update rule ======

    #[test]
    fn test_rk4_single_step_decay() {
        // f = -x, x = 1, h = 1:
        // k₁ = -1, k₂ = -0.5, k₃ = -0.75, k₄ = -0.25
        // x₁ = 1 + (-1 - 1 - 1.5 - 0.25)/6 = 0.375
        let trajectory = rk4(|x: f64, _t: f64| -x, 1.0, 0.0, 1.0, 2).unwrap();
        assert_eq!(trajectory.states.as_slice(), &[1.0, 0.375]);
    }

    #[test]
    fn test_rk4_integrates_cubic_in_time_exactly() {
        // dx/dt = 4t³ → x(t) = t⁴, Simpson's rule is exact up to cubics
        let trajectory = rk4(|_x: f64, t: f64| 4.0 * t * t * t, 0.0, 0.0, 2.0, 5).unwrap();

        for (t, x) in trajectory.iter() {
            assert_relative_eq!(x, t.powi(4), epsilon = 1e-12);
        }
    }

    // ====== Numerical Accuracy Tests ======

    #[test]
    fn test_rk4_constant_growth() {
        let model = ConstantRate::new(2.0);
        let trajectory = rk4(model, 0.0, 0.0, 10.0, 101).unwrap();

        assert_relative_eq!(trajectory.final_time(), 10.0);
        assert_relative_eq!(trajectory.final_state(), 20.0, epsilon = 1e-10);
    }

    #[test]
    fn test_rk4_exponential_decay() {
        // 1000 points on [0, 1]: error far below 1e-6
        let trajectory = rk4(ExponentialDecay::new(1.0), 1.0, 0.0, 1.0, 1000).unwrap();
        let expected = (-1.0_f64).exp();

        assert!(
            (trajectory.final_state() - expected).abs() < 1e-6,
            "RK4 final value {} too far from e^-1",
            trajectory.final_state()
        );
        assert_relative_eq!(trajectory.final_state(), 0.367879, epsilon = 1e-6);
    }

    #[test]
    fn test_rk4_convergence() {
        // error(h/2) ≈ error(h) / 16
        let model = ExponentialDecay::new(1.0);
        let exact = model.analytical_solution(1.0, 0.0, 1.0);
        let scenario = Scenario::new(Box::new(model), 1.0);
        let mut config = SolverConfiguration::time_evolution(0.0, 1.0, 11);

        let mut errors = Vec::new();
        for _ in 0..4 {
            let result = RK4Solver.solve(&scenario, &config).unwrap();
            errors.push((result.final_state() - exact).abs());
            config = config.refined();
        }

        for i in 0..errors.len() - 1 {
            let ratio = errors[i] / errors[i + 1];
            assert!(
                ratio > 12.0 && ratio < 20.0,
                "Convergence ratio {} not fourth order at level {}",
                ratio,
                i
            );
        }
    }

    #[test]
    fn test_rk4_matches_reference_values() {
        let trajectory = rk4(CubicForcing::new(), 0.0, 0.0, 10.0, 20).unwrap();

        assert_eq!(trajectory.states[0], 0.0);
        assert_relative_eq!(trajectory.states[1], 0.13505936779589972, epsilon = 1e-12);
        assert_relative_eq!(trajectory.states[2], 0.4848758588777763, epsilon = 1e-12);
        assert_relative_eq!(trajectory.states[3], 0.819796262360403, epsilon = 1e-12);
        assert_relative_eq!(trajectory.final_state(), 0.43014633895012166, epsilon = 1e-10);
    }

    #[test]
    fn test_rk4_vs_euler_accuracy() {
        use crate::solver::euler;

        let exact = (-1.0_f64).exp();
        let euler_error = (euler(|x: f64, _t: f64| -x, 1.0, 0.0, 1.0, 21).unwrap().final_state()
            - exact)
            .abs();
        let rk4_error = (rk4(|x: f64, _t: f64| -x, 1.0, 0.0, 1.0, 21).unwrap().final_state()
            - exact)
            .abs();

        assert!(rk4_error * 1e4 < euler_error);
    }

    // ====== Trajectory tests ======

    #[test]
    fn test_rk4_time_points() {
        let trajectory = rk4(ConstantRate::new(1.0), 0.0, 0.0, 20.0, 101).unwrap();
        let h = 20.0 / 100.0;

        assert_eq!(trajectory.times[0], 0.0);
        assert_eq!(trajectory.final_time(), 20.0);

        for i in 1..trajectory.len() {
            let spacing = trajectory.times[i] - trajectory.times[i - 1];
            assert!(
                (spacing - h).abs() <= 1e-12,
                "Time step {} differs from h {} by more than 1e-12",
                spacing,
                h
            );
        }
    }

    #[test]
    fn test_rk4_metadata() {
        let trajectory = rk4(ConstantRate::new(1.0), 0.0, 0.0, 10.0, 1001).unwrap();

        assert_eq!(
            trajectory.metadata.get("solver"),
            Some(&"Runge Kutta (RK4)".to_string())
        );
        assert_eq!(
            trajectory.metadata.get("function evaluations"),
            Some(&"4000".to_string())
        );
    }

    #[test]
    fn test_rk4_propagates_nan() {
        let trajectory = rk4(|x: f64, _t: f64| x.sqrt() - 2.0, 1.0, 0.0, 5.0, 11).unwrap();

        // sqrt of a negative state yields NaN, which then sticks
        let first = trajectory.first_non_finite().expect("trajectory should blow up");
        assert!(trajectory.states.iter().skip(first).all(|x| x.is_nan()));
        assert_eq!(trajectory.len(), 11);
    }
}
