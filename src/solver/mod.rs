//! Numerical solvers
//!
//! This module provides the time grid, the stepping abstraction, and the
//! three fixed-step explicit methods for scalar ODEs `dx/dt = f(x, t)`.
//!
//! # Core Concepts
//!
//! ## The Architecture (WHAT vs HOW)
//!
//! 1. **Scenario** (`Scenario`) - WHAT to solve
//!    - Right-hand side f(x, t)
//!    - Initial value x₀
//!
//! 2. **Configuration** (`SolverConfiguration`) - HOW to sample
//!    - Interval [t₀, t_f]
//!    - Number of grid points N
//!
//! 3. **Solver** (`Solver` trait) - The numerical method
//!    - One-step update rule (Euler, RK2, RK4)
//!    - Shared left-to-right stepping loop
//!
//! This separation allows:
//! - Same solver for different equations
//! - Different solvers for the same scenario
//! - Easy convergence studies and method comparison
//!
//! # Module Organization
//!
//! - **`grid`**: `TimeGrid`, the evenly spaced sample times and step size
//! - **`traits`**: `Solver`, `Method`, `SolverConfiguration`, `Trajectory`
//! - **`scenario`**: `Scenario`, the initial-value problem
//! - **`methods`**: `EulerSolver`, `RK2Solver`, `RK4Solver` (+ free functions)
//! - **`batch`**: independent runs, method comparison, convergence studies
//! - **`error`**: `SolverError`
//!
//! # Workflow Diagram
//!
//! ```text
//! ┌──────────────────┐      ┌──────────────────────┐
//! │ Scenario         │      │ SolverConfiguration  │
//! │ (f, x₀)          │      │ (t₀, t_f, N)         │
//! └────────┬─────────┘      └──────────┬───────────┘
//!          │                           │ grid()
//!          │                  ┌────────▼────────┐
//!          │                  │ TimeGrid        │
//!          │                  │ (t[0..N], h)    │
//!          │                  └────────┬────────┘
//!          │      ┌────────────────────┘
//!          │      │
//!  ┌───────▼──────▼──┐
//!  │ Solver          │ ← step() applied N-1 times
//!  │ (Euler/RK2/RK4) │
//!  └───────┬─────────┘
//!          │
//!  ┌───────▼─────────────┐
//!  │ Trajectory          │
//!  │ (states, times, meta)│
//!  └─────────────────────┘
//! ```
//!
//! # Quick Start Example
//!
//! ```rust
//! use ode_rs::models::CubicForcing;
//! use ode_rs::solver::{RK4Solver, Scenario, Solver, SolverConfiguration};
//!
//! let scenario = Scenario::new(Box::new(CubicForcing::new()), 0.0);
//! let config = SolverConfiguration::time_evolution(0.0, 10.0, 1000);
//!
//! let result = RK4Solver::new().solve(&scenario, &config)?;
//!
//! assert_eq!(result.len(), 1000);
//! assert_eq!(result.initial_state(), 0.0);
//! # Ok::<(), ode_rs::solver::SolverError>(())
//! ```
//!
//! # Error Handling
//!
//! All fallible operations return `Result<T, SolverError>`. Only malformed
//! grid parameters are errors (N < 2, t_f ≤ t₀, non-finite bounds or span).
//!
//! A right-hand side that returns NaN or ±Inf is **not** an error: the value
//! propagates into the trajectory unchanged (a warning is logged). Stability
//! is the caller's responsibility, through the choice of N and method order.

// =================================================================================================
// Module Declarations
// =================================================================================================
mod batch;
mod error;
mod grid;
mod methods;
mod scenario;
mod traits;

// =================================================================================================
// Parallel Execution Threshold
// =================================================================================================
//
// A single run is inherently serial (x[i+1] needs x[i]). Independent runs
// (several methods, several resolutions) can be spread over the Rayon pool
// when the crate is compiled with the `parallel` feature. The threshold is
// the amount of work, counted in grid points over all runs, above which
// that dispatch happens.
//
// Stored in an AtomicUsize so it can be tuned at runtime (benchmarks, tests)
// without a lock. Relaxed ordering: it is a performance hint, not a
// synchronisation point.
// =================================================================================================

use std::sync::atomic::{AtomicUsize, Ordering};

/// Default amount of work (total grid points) above which independent runs
/// go to the Rayon pool.
const DEFAULT_PARALLEL_THRESHOLD: usize = 10_000;

static PARALLEL_THRESHOLD: AtomicUsize = AtomicUsize::new(DEFAULT_PARALLEL_THRESHOLD);

/// Return the current parallel-execution threshold.
///
/// Batch operations ([`solve_all`], [`ConvergenceStudy::run`]) run
/// sequentially when their combined work is at or below this value, and
/// switch to Rayon above it, but only when the crate is compiled with the
/// `parallel` feature.
///
/// # Example
///
/// ```rust
/// use ode_rs::solver::parallel_threshold;
///
/// assert!(parallel_threshold() > 0);
/// ```
pub fn parallel_threshold() -> usize {
    PARALLEL_THRESHOLD.load(Ordering::Relaxed)
}

/// Set the parallel-execution threshold to a new value.
///
/// # Panics
///
/// Panics when `threshold == 0`.
///
/// # Example
///
/// ```rust
/// use ode_rs::solver::{parallel_threshold, set_parallel_threshold};
///
/// let previous = parallel_threshold();
/// set_parallel_threshold(50_000);
/// assert_eq!(parallel_threshold(), 50_000);
///
/// // Restore so other tests are not affected.
/// set_parallel_threshold(previous);
/// ```
pub fn set_parallel_threshold(threshold: usize) {
    assert!(threshold > 0, "parallel threshold must be at least 1");
    PARALLEL_THRESHOLD.store(threshold, Ordering::Relaxed);
}

/// Serialises every test that changes the threshold.
#[cfg(test)]
static THRESHOLD_LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());

/// RAII guard that sets the threshold on construction and restores the
/// previous value on drop.
///
/// Holds `THRESHOLD_LOCK` for its whole lifetime, so concurrent tests never
/// observe or restore each other's values. The restore in `drop` runs before
/// the lock field is released.
#[cfg(test)]
pub(crate) struct ThresholdGuard {
    previous: usize,
    _lock: std::sync::MutexGuard<'static, ()>,
}

#[cfg(test)]
impl ThresholdGuard {
    pub(crate) fn save(new_value: usize) -> Self {
        // A test that panicked while holding the lock still restored the value
        let lock = THRESHOLD_LOCK
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        let previous = parallel_threshold();
        set_parallel_threshold(new_value);
        Self {
            previous,
            _lock: lock,
        }
    }
}

#[cfg(test)]
impl Drop for ThresholdGuard {
    fn drop(&mut self) {
        PARALLEL_THRESHOLD.store(self.previous, Ordering::Relaxed);
    }
}

// =================================================================================================
// Public Re-exports
// =================================================================================================

pub use batch::{solve_all, ConvergenceLevel, ConvergenceStudy};
pub use error::SolverError;
pub use grid::TimeGrid;
pub use methods::{euler, rk2, rk4, EulerSolver, RK2Solver, RK4Solver};
pub use scenario::Scenario;
pub use traits::{Method, Solver, SolverConfiguration, Trajectory};

// =================================================================================================
// Tests
// =================================================================================================
