//! Problem definition
//!
//! This module provides the abstraction for the equation being integrated.
//! A right-hand side encapsulates `f` in the scalar ODE `dx/dt = f(x, t)`.
//!
//! # Architecture
//!
//! Equations are **separate from numerical solvers**:
//! - The right-hand side provides the **equation** (what is integrated)
//! - The solver provides the **method** used to integrate it
//!
//! This separation allows:
//! - Same equation with different solvers (Euler, RK2, RK4)
//! - Same solver with different equations
//!
//! # Example
//!
//! ```rust
//! use ode_rs::problem::RightHandSide;
//!
//! // Any pure closure works
//! let decay = |x: f64, _t: f64| -x;
//! assert_eq!(decay.evaluate(2.0, 0.0), -2.0);
//! ```
//!
//! For reusable equations with analytical solutions, see [`crate::models`].

pub mod traits;

pub use traits::RightHandSide;
