//! Forward Euler numerical solver
//!
//! # Mathematical Background
//!
//! The Forward Euler method is the simplest explicit time-stepping scheme
//! for solving ordinary differential equations (ODEs):
//!
//! ```text
//! dx/dt = f(x, t)
//! ```
//!
//! The scheme approximates the solution at time t_{i+1} = t_i + h using:
//!
//! ```text
//! x_{i+1} = x_i + h * f(x_i, t_i)
//! ```
//!
//! # Characteristics
//!
//! - **Order**: First-order accurate (global error ~ O(h))
//! - **Stability**: Conditionally stable (requires small time steps)
//! - **Complexity**: 1 function evaluation per step
//!
//! # When to Use
//!
//! - Baseline for comparison against higher-order methods
//! - Educational demonstrations
//! - Quick exploratory runs with relaxed accuracy requirements
//!
//! # Example
//!
//! ```rust
//! use ode_rs::solver::euler;
//!
//! let trajectory = euler(|x: f64, t: f64| -x * x * x + t.sin(), 0.0, 0.0, 10.0, 20)?;
//!
//! assert_eq!(trajectory.len(), 20);
//! assert_eq!(trajectory.initial_state(), 0.0);
//! assert_eq!(trajectory.final_time(), 10.0);
//! # Ok::<(), ode_rs::solver::SolverError>(())
//! ```

use crate::problem::RightHandSide;
use crate::solver::{Solver, SolverConfiguration, SolverError, Trajectory};

// =================================================================================================
// Forward Euler Solver
// =================================================================================================

/// Forward Euler time-stepping solver
///
/// Implements the simplest explicit time integration scheme:
/// x_{i+1} = x_i + h * f(x_i, t_i)
///
/// # Stability
///
/// For linear problems dx/dt = λx, the method is stable when:
///
/// ```text
/// |1 + λ * h| ≤ 1
/// ```
///
/// # Error Analysis
///
/// - **Local truncation error**: O(h²) per step
/// - **Global error**: O(h) after (t_f - t₀)/h steps
/// - **Convergence**: halving h halves the error
#[derive(Debug, Clone, Copy, Default)]
pub struct EulerSolver;

impl EulerSolver {
    /// Create a new Forward Euler solver
    ///
    /// # Example
    ///
    /// ```rust
    /// use ode_rs::solver::{EulerSolver, Solver};
    ///
    /// let solver = EulerSolver::new();
    /// assert_eq!(solver.name(), "Forward Euler");
    /// ```
    pub fn new() -> Self {
        Self
    }
}

impl Solver for EulerSolver {
    fn step(&self, rhs: &dyn RightHandSide, x: f64, t: f64, h: f64) -> f64 {
        x + h * rhs.evaluate(x, t)
    }

    fn name(&self) -> &'static str {
        "Forward Euler"
    }

    fn order(&self) -> u32 {
        1
    }

    fn evaluations_per_step(&self) -> usize {
        1
    }
}

/// Integrate `dx/dt = f(x, t)` from `x(t0) = x0` to `tf` on `points` samples
/// with Forward Euler
///
/// # Errors
///
/// Fails fast when `points < 2`, `tf <= t0`, or a bound is not finite.
pub fn euler<F: RightHandSide>(
    f: F,
    x0: f64,
    t0: f64,
    tf: f64,
    points: usize,
) -> Result<Trajectory, SolverError> {
    EulerSolver.solve_with(&f, x0, &SolverConfiguration::time_evolution(t0, tf, points))
}

// =================================================================================================
// Tests
// =================================================================================================
