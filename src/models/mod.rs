//! Ready-made right-hand sides
//!
//! All models implement the [`RightHandSide`](crate::problem::RightHandSide)
//! trait. The solver calls `evaluate` one or more times per step; models are
//! responsible for the equation, the solver for the time integration.
//!
//! # Available Models
//!
//! ## [`CubicForcing`]: nonlinear, forced
//!
//! `dx/dt = -x³ + sin(t)`. A cubic restoring term driven by a periodic
//! forcing. No closed form; used as the demonstration problem.
//!
//! ## [`ExponentialDecay`]: linear
//!
//! `dx/dt = -k·x` with exact solution `x(t) = x₀·exp(-k·(t - t₀))`.
//! The reference problem for convergence-order checks.
//!
//! ## [`ConstantRate`]: trivial
//!
//! `dx/dt = c` with exact solution `x(t) = x₀ + c·(t - t₀)`.
//! Every method in this crate reproduces it up to rounding.

// =================================================================================================
// Module Declarations
// =================================================================================================

mod constant_rate;
mod cubic_forcing;
mod exponential_decay;

// =================================================================================================
// Public Re-exports
// =================================================================================================

pub use constant_rate::ConstantRate;
pub use cubic_forcing::CubicForcing;
pub use exponential_decay::ExponentialDecay;
