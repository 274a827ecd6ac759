//! Right-hand-side trait
//!
//! This module defines the single capability every integrated equation
//! provides: evaluating the derivative `dx/dt = f(x, t)` at a given state and
//! time.

// =================================================================================================
// Right-hand side
// =================================================================================================

/// Right-hand side `f(x, t)` of a scalar ODE `dx/dt = f(x, t)`
///
/// # Contract
///
/// Implementations must be **pure**: the returned value depends only on the
/// arguments, and calling [`evaluate`](RightHandSide::evaluate) has no side
/// effects. Multi-stage methods (RK2, RK4) call it several times per step with
/// perturbed arguments, and re-running a solver must reproduce bit-identical
/// trajectories.
///
/// Non-finite return values are allowed. They are not intercepted by the
/// solvers and propagate into the trajectory as-is.
///
/// # Closures
///
/// Every `Fn(f64, f64) -> f64 + Send + Sync` is a right-hand side, so plain
/// closures and function items can be passed directly:
///
/// ```rust
/// use ode_rs::problem::RightHandSide;
///
/// let f = |x: f64, t: f64| -x * x * x + t.sin();
/// assert_eq!(f.evaluate(0.0, 0.0), 0.0);
/// assert_eq!(f.name(), "anonymous");
/// ```
///
/// # Named models
///
/// ```rust
/// use ode_rs::problem::RightHandSide;
///
/// struct Logistic { rate: f64 }
///
/// impl RightHandSide for Logistic {
///     fn evaluate(&self, x: f64, _t: f64) -> f64 {
///         self.rate * x * (1.0 - x)
///     }
///
///     fn name(&self) -> &str {
///         "Logistic"
///     }
/// }
///
/// let model = Logistic { rate: 2.0 };
/// assert_eq!(model.evaluate(0.5, 0.0), 0.5);
/// ```
pub trait RightHandSide: Send + Sync {
    /// Derivative `dx/dt` at state `x` and time `t`
    fn evaluate(&self, x: f64, t: f64) -> f64;

    /// Name of the equation (used for display and logging)
    fn name(&self) -> &str {
        "anonymous"
    }
}

impl<F> RightHandSide for F
where
    F: Fn(f64, f64) -> f64 + Send + Sync,
{
    fn evaluate(&self, x: f64, t: f64) -> f64 {
        self(x, t)
    }
}

// =================================================================================================
// Tests
// =================================================================================================
