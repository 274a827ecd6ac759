//! Mock right-hand sides for testing
//!
//! These models have known analytical solutions, making them
//! ideal for validating numerical solver accuracy.

use ode_rs::problem::RightHandSide;

// =================================================================================================
// Cosine Forcing: dx/dt = cos(t)
// =================================================================================================

/// Pure time forcing: dx/dt = cos(t)
///
/// Analytical solution: x(t) = x₀ + sin(t) - sin(t₀)
///
/// The state never feeds back into f, so every method reduces to a
/// quadrature rule and its order shows up cleanly.
pub struct CosineForcing;

impl CosineForcing {
    pub fn analytical_solution(&self, t: f64, t0: f64, x0: f64) -> f64 {
        x0 + t.sin() - t0.sin()
    }
}

impl RightHandSide for CosineForcing {
    fn evaluate(&self, _x: f64, t: f64) -> f64 {
        t.cos()
    }

    fn name(&self) -> &str {
        "Cosine Forcing"
    }
}

// =================================================================================================
// Logistic Growth: dx/dt = r*x*(1 - x)
// =================================================================================================

/// Logistic growth: dx/dt = r*x*(1 - x)
///
/// Analytical solution: x(t) = 1 / (1 + (1/x₀ - 1) * exp(-r*(t - t₀)))
pub struct LogisticGrowth {
    pub rate: f64,
}

impl LogisticGrowth {
    pub fn new(rate: f64) -> Self {
        Self { rate }
    }

    pub fn analytical_solution(&self, t: f64, t0: f64, x0: f64) -> f64 {
        1.0 / (1.0 + (1.0 / x0 - 1.0) * (-self.rate * (t - t0)).exp())
    }
}

impl RightHandSide for LogisticGrowth {
    fn evaluate(&self, x: f64, _t: f64) -> f64 {
        self.rate * x * (1.0 - x)
    }

    fn name(&self) -> &str {
        "Logistic Growth"
    }
}

// =================================================================================================
// Stiff Decay: dx/dt = -k*x with large k
// =================================================================================================

/// Fast decay: dx/dt = -k*x
///
/// With a large k and a coarse grid, explicit methods leave their stability
/// region and the numerical solution grows instead of decaying.
pub struct StiffDecay {
    pub stiffness: f64,
}

impl StiffDecay {
    pub fn new(stiffness: f64) -> Self {
        Self { stiffness }
    }
}

impl RightHandSide for StiffDecay {
    fn evaluate(&self, x: f64, _t: f64) -> f64 {
        -self.stiffness * x
    }

    fn name(&self) -> &str {
        "Stiff Decay"
    }
}
