//! ode-rs: Fixed-Step ODE Integrators
//!
//! Explicit one-step integrators for scalar initial-value problems
//! `dx/dt = f(x, t)`, `x(t₀) = x₀`, sampled on an evenly spaced time grid.
//!
//! # Architecture
//!
//! ode-rs is built on two core principles:
//!
//! 1. **Separation of Problem and Numerics**
//!    - Right-hand sides define equations (what to solve)
//!    - Numerical solvers provide methods (how to solve)
//!
//! 2. **Extensibility and Type Safety**
//!    - Trait-based design: any closure or struct can be a right-hand side,
//!      any update rule can be a solver
//!    - Typed errors for malformed grids
//!
//! # Quick Start
//!
//! ```rust
//! use ode_rs::solver::{euler, rk2, rk4};
//!
//! // dx/dt = -x³ + sin(t), x(0) = 0, 20 samples on [0, 10]
//! let f = |x: f64, t: f64| -x * x * x + t.sin();
//!
//! let coarse = euler(f, 0.0, 0.0, 10.0, 20)?;
//! let midpoint = rk2(f, 0.0, 0.0, 10.0, 20)?;
//! let accurate = rk4(f, 0.0, 0.0, 10.0, 20)?;
//!
//! assert_eq!(coarse.len(), 20);
//! assert_eq!(midpoint.times, accurate.times);
//!
//! let (states, times) = accurate.into_parts();
//! assert_eq!(states[0], 0.0);
//! assert_eq!(times[19], 10.0);
//! # Ok::<(), ode_rs::solver::SolverError>(())
//! ```
//!
//! # Modules
//!
//! - [`problem`]: Right-hand-side abstraction (equations)
//! - [`models`]: Ready-made right-hand sides with known solutions
//! - [`solver`]: Time grid, numerical methods, batch runs

// Core modules
pub mod problem;

pub mod models;
pub mod solver;

pub mod prelude {
    //! Convenient imports for common usage
    //!
    //! ```rust
    //! use ode_rs::prelude::*;
    //!
    //! let result = rk4(|x: f64, _t: f64| -x, 1.0, 0.0, 1.0, 11)?;
    //! assert_eq!(result.len(), 11);
    //! # Ok::<(), SolverError>(())
    //! ```
    pub use crate::problem::RightHandSide;
    pub use crate::solver::{
        euler, rk2, rk4, solve_all, ConvergenceStudy, EulerSolver, Method, RK2Solver, RK4Solver,
        Scenario, Solver, SolverConfiguration, SolverError, TimeGrid, Trajectory,
    };
}
