//! Runge-Kutta 2 (explicit midpoint) numerical solver
//!
//! # Mathematical Background
//!
//! The explicit midpoint rule uses an Euler half-step to estimate the state
//! at the middle of the interval, then advances the whole step with the slope
//! sampled there:
//!
//! ```text
//! k₁ = h·f(xᵢ, tᵢ)
//! k₂ = h·f(xᵢ + k₁/2, tᵢ + h/2)
//!
//! xᵢ₊₁ = xᵢ + k₂
//! ```
//!
//! k₁ only serves to locate the midpoint; it does not enter the update. This
//! is the midpoint variant, not Heun's averaged form `xᵢ + (k₁ + k₂)/2`, and
//! the two produce different trajectories.
//!
//! # Characteristics
//!
//! - **Order**: Second-order accurate (global error ~ O(h²))
//! - **Complexity**: 2 function evaluations per step
//!
//! | Method | Order | Evals/Step | Error  |
//! |--------|-------|------------|--------|
//! | Euler  | 1     | 1          | O(h)   |
//! | RK2    | 2     | 2          | O(h²)  |
//! | RK4    | 4     | 4          | O(h⁴)  |

use crate::problem::RightHandSide;
use crate::solver::{Solver, SolverConfiguration, SolverError, Trajectory};

// =================================================================================================
// RK2 Solver
// =================================================================================================

/// Explicit midpoint (second-order Runge-Kutta) solver
///
/// # Error Analysis
///
/// - **Local truncation error**: O(h³) per step
/// - **Global error**: O(h²)
///
/// **Practical implication**: Halving h reduces error by a factor of 4.
///
/// # Example
///
/// ```rust
/// use ode_rs::solver::{RK2Solver, Scenario, Solver, SolverConfiguration};
///
/// let scenario = Scenario::from_fn(|x, _t| -x, 1.0);
/// let config = SolverConfiguration::time_evolution(0.0, 1.0, 2);
///
/// // One step of h = 1: k₁ = -1, k₂ = -(1 - 0.5) = -0.5
/// let result = RK2Solver::new().solve(&scenario, &config)?;
/// assert_eq!(result.final_state(), 0.5);
/// # Ok::<(), ode_rs::solver::SolverError>(())
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct RK2Solver;

impl RK2Solver {
    /// Create a new RK2 solver
    pub fn new() -> Self {
        Self
    }
}

impl Solver for RK2Solver {
    fn step(&self, rhs: &dyn RightHandSide, x: f64, t: f64, h: f64) -> f64 {
        // Trial slope, used only to reach the midpoint
        let k1 = h * rhs.evaluate(x, t);

        // Slope at the midpoint drives the full step
        let k2 = h * rhs.evaluate(x + k1 / 2.0, t + h / 2.0);

        x + k2
    }

    fn name(&self) -> &'static str {
        "Runge Kutta (RK2)"
    }

    fn order(&self) -> u32 {
        2
    }

    fn evaluations_per_step(&self) -> usize {
        2
    }
}

/// Integrate `dx/dt = f(x, t)` from `x(t0) = x0` to `tf` on `points` samples
/// with the explicit midpoint rule
///
/// # Errors
///
/// Fails fast when `points < 2`, `tf <= t0`, or a bound is not finite.
pub fn rk2<F: RightHandSide>(
    f: F,
    x0: f64,
    t0: f64,
    tf: f64,
    points: usize,
) -> Result<Trajectory, SolverError> {
    RK2Solver.solve_with(&f, x0, &SolverConfiguration::time_evolution(t0, tf, points))
}

// =================================================================================================
// Tests
// =================================================================================================
