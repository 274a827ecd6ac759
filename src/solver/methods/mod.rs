//! Numerical methods for scalar ODEs
//!
//! This module contains concrete implementations of the [`Solver`](crate::solver::Solver) trait.
//!
//! # Architecture
//!
//! Each method only supplies its one-step update rule. Grid construction and
//! the left-to-right stepping loop are shared through the `Solver` trait, so
//! adding a method never touches existing code.
//!
//! # Available Methods
//!
//! All methods are explicit and fixed-step, suitable for non-stiff equations.
//!
//! - **[`EulerSolver`]**: Forward Euler method
//!   - Order: First-order O(h)
//!   - Cost: 1 function evaluation per step
//!   - Use: Baseline, educational purposes, relaxed accuracy
//!
//! - **[`RK2Solver`]**: Explicit midpoint Runge-Kutta
//!   - Order: Second-order O(h²)
//!   - Cost: 2 function evaluations per step
//!
//! - **[`RK4Solver`]**: Classical fourth-order Runge-Kutta
//!   - Order: Fourth-order O(h⁴)
//!   - Cost: 4 function evaluations per step
//!   - Use: Reference method for accuracy comparisons
//!
//! Each method also has a free-function form taking `(f, x0, t0, tf, points)`:
//! [`euler`], [`rk2`], [`rk4`].
//!
//! # Example
//!
//! ```rust
//! use ode_rs::solver::{euler, rk2, rk4};
//!
//! let f = |x: f64, t: f64| -x * x * x + t.sin();
//!
//! let coarse = euler(f, 0.0, 0.0, 10.0, 20)?;
//! let middle = rk2(f, 0.0, 0.0, 10.0, 20)?;
//! let fine = rk4(f, 0.0, 0.0, 10.0, 20)?;
//!
//! // Same grid for every method
//! assert_eq!(coarse.times, fine.times);
//! assert_eq!(middle.len(), 20);
//! # Ok::<(), ode_rs::solver::SolverError>(())
//! ```
//!
//! # Design Philosophy
//!
//! Each solver is:
//! - **Self-contained**: No shared mutable state
//! - **Stateless**: Can be reused for any number of runs, from any thread

mod euler;
mod rk2;
mod rk4;

pub use euler::{euler, EulerSolver};
pub use rk2::{rk2, RK2Solver};
pub use rk4::{rk4, RK4Solver};
