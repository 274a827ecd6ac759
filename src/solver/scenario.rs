//! Initial-value problem definition
//!
//! A scenario combines a right-hand side with the initial value x₀.

use std::fmt;

use crate::problem::RightHandSide;

/// Initial-value problem `dx/dt = f(x, t)`, `x(t₀) = x₀`
///
/// # Design
///
/// The same scenario can be solved with different methods and different
/// configurations. This is the "WHAT to solve" (not "HOW to solve"); the
/// interval and resolution live in
/// [`SolverConfiguration`](crate::solver::SolverConfiguration).
///
/// # Examples
///
/// ```rust
/// use ode_rs::models::ExponentialDecay;
/// use ode_rs::solver::{Method, Scenario, SolverConfiguration};
///
/// let scenario = Scenario::new(Box::new(ExponentialDecay::new(1.0)), 1.0);
/// let config = SolverConfiguration::time_evolution(0.0, 1.0, 101);
///
/// // Solve with different methods
/// let coarse = Method::Euler.solver().solve(&scenario, &config)?;
/// let fine = Method::RK4.solver().solve(&scenario, &config)?;
/// assert_eq!(coarse.len(), fine.len());
/// # Ok::<(), ode_rs::solver::SolverError>(())
/// ```
pub struct Scenario {
    /// Right-hand side f(x, t)
    pub rhs: Box<dyn RightHandSide>,

    /// State at the first grid time
    pub initial_value: f64,
}

impl Scenario {
    /// Create a scenario
    pub fn new(rhs: Box<dyn RightHandSide>, initial_value: f64) -> Self {
        Self { rhs, initial_value }
    }

    /// Create a scenario from a closure or function item
    pub fn from_fn<F>(f: F, initial_value: f64) -> Self
    where
        F: Fn(f64, f64) -> f64 + Send + Sync + 'static,
    {
        Self::new(Box::new(f), initial_value)
    }

    /// Name of the right-hand side
    pub fn model_name(&self) -> &str {
        self.rhs.name()
    }
}

impl fmt::Debug for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Scenario")
            .field("model", &self.model_name())
            .field("initial value", &self.initial_value)
            .finish()
    }
}

// ================================================================================================
// Tests
// ================================================================================================
