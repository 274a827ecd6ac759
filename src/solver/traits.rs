//! Numerical solver traits and types
//!
//! # Design Philosophy
//!
//! - `Solver` trait: one-step update rule + the shared explicit loop
//! - `Method` enum: configuration-level selector for the available solvers
//! - `SolverConfiguration`: the time interval and resolution (HOW to sample)
//! - `Trajectory`: the computed states, their sample times, and metadata

use nalgebra::DVector;
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use crate::problem::RightHandSide;
use crate::solver::{EulerSolver, RK2Solver, RK4Solver, Scenario, SolverError, TimeGrid};

// =================================================================================================
// Solver trait
// =================================================================================================

/// Fixed-step explicit integrator for `dx/dt = f(x, t)`
///
/// Implementors only provide the update rule [`step`](Solver::step); the
/// loop that walks the grid is shared by every method through
/// [`integrate`](Solver::integrate).
///
/// # State machine
///
/// ```text
/// x[0] = x₀
/// for i in 0 .. N-1:
///     x[i+1] = step(f, x[i], t[i], h)
/// ```
///
/// The loop always runs exactly `N - 1` times: no early termination, no
/// retry, no adaptive control. `x[i+1]` depends only on `x[i]` and `t[i]`.
///
/// # Implementing a new method
///
/// ```rust
/// use ode_rs::problem::RightHandSide;
/// use ode_rs::solver::{Solver, TimeGrid};
///
/// /// Heun's method (trapezoidal predictor-corrector)
/// struct Heun;
///
/// impl Solver for Heun {
///     fn step(&self, rhs: &dyn RightHandSide, x: f64, t: f64, h: f64) -> f64 {
///         let k1 = h * rhs.evaluate(x, t);
///         let k2 = h * rhs.evaluate(x + k1, t + h);
///         x + (k1 + k2) / 2.0
///     }
///
///     fn name(&self) -> &'static str { "Heun" }
///     fn order(&self) -> u32 { 2 }
///     fn evaluations_per_step(&self) -> usize { 2 }
/// }
///
/// let grid = TimeGrid::linspace(0.0, 1.0, 11)?;
/// let states = Heun.integrate(&|_x: f64, _t: f64| 1.0, 0.0, &grid);
/// assert!((states[10] - 1.0).abs() < 1e-12);
/// # Ok::<(), ode_rs::solver::SolverError>(())
/// ```
pub trait Solver: Send + Sync {
    /// Advance one step from `(x, t)` to `t + h`
    fn step(&self, rhs: &dyn RightHandSide, x: f64, t: f64, h: f64) -> f64;

    /// Human-readable method name
    fn name(&self) -> &'static str;

    /// Global order of accuracy
    fn order(&self) -> u32;

    /// Number of right-hand-side evaluations per step
    fn evaluations_per_step(&self) -> usize;

    /// Compute the state sequence over `grid`, starting from `x0`
    ///
    /// The returned vector has `grid.len()` entries and `states[0] == x0`.
    /// Non-finite values returned by `rhs` are propagated, not intercepted.
    fn integrate(&self, rhs: &dyn RightHandSide, x0: f64, grid: &TimeGrid) -> DVector<f64> {
        let h = grid.step();
        let times = grid.as_slice();

        let mut states = DVector::zeros(times.len());
        states[0] = x0;

        for i in 0..grid.intervals() {
            states[i + 1] = self.step(rhs, states[i], times[i], h);
        }

        states
    }

    /// Solve a scenario with the given configuration
    fn solve(
        &self,
        scenario: &Scenario,
        config: &SolverConfiguration,
    ) -> Result<Trajectory, SolverError> {
        self.solve_with(&*scenario.rhs, scenario.initial_value, config)
    }

    /// Solve `dx/dt = rhs(x, t)`, `x(t₀) = x0` with the given configuration
    ///
    /// Validates the configuration, builds the time grid, integrates, and
    /// wraps the result with diagnostic metadata.
    fn solve_with(
        &self,
        rhs: &dyn RightHandSide,
        x0: f64,
        config: &SolverConfiguration,
    ) -> Result<Trajectory, SolverError> {
        let grid = config.grid()?;

        log::debug!(
            "{}: solving '{}' on {}",
            self.name(),
            rhs.name(),
            grid
        );

        let states = self.integrate(rhs, x0, &grid);
        let step = grid.step();

        let mut result = Trajectory::new(states, grid.into_times());

        if let Some(index) = result.first_non_finite() {
            log::warn!(
                "{}: non-finite state at index {} (t = {}); consider more points or a higher-order method",
                self.name(),
                index,
                result.times[index]
            );
        }

        result.add_metadata("solver", self.name());
        result.add_metadata("model", rhs.name());
        result.add_metadata("points", &config.points.to_string());
        result.add_metadata("step size", &step.to_string());
        result.add_metadata("start time", &config.start_time.to_string());
        result.add_metadata("end time", &config.end_time.to_string());
        result.add_metadata(
            "function evaluations",
            &(self.evaluations_per_step() * (config.points - 1)).to_string(),
        );

        log::debug!(
            "{}: finished, final state x({}) = {}",
            self.name(),
            result.final_time(),
            result.final_state()
        );

        Ok(result)
    }
}

// =================================================================================================
// Method selector
// =================================================================================================

/// Available integration methods
///
/// # Example
///
/// ```rust
/// use ode_rs::solver::Method;
///
/// let method: Method = "rk4".parse()?;
/// assert_eq!(method, Method::RK4);
/// assert_eq!(method.solver().order(), 4);
/// # Ok::<(), ode_rs::solver::SolverError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    /// Forward Euler, first order
    Euler,

    /// Explicit midpoint Runge-Kutta, second order
    RK2,

    /// Classical Runge-Kutta, fourth order
    RK4,
}

impl Method {
    /// Every method, from lowest to highest order
    pub const ALL: [Method; 3] = [Method::Euler, Method::RK2, Method::RK4];

    /// Solver implementing this method
    pub fn solver(&self) -> &'static dyn Solver {
        match self {
            Method::Euler => &EulerSolver,
            Method::RK2 => &RK2Solver,
            Method::RK4 => &RK4Solver,
        }
    }

    /// Short identifier accepted by [`FromStr`]
    pub fn id(&self) -> &'static str {
        match self {
            Method::Euler => "euler",
            Method::RK2 => "rk2",
            Method::RK4 => "rk4",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Method {
    type Err = SolverError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "euler" => Ok(Method::Euler),
            "rk2" | "midpoint" => Ok(Method::RK2),
            "rk4" => Ok(Method::RK4),
            _ => Err(SolverError::UnknownMethod(s.to_string())),
        }
    }
}

// =================================================================================================
// Solver configuration
// =================================================================================================

/// Time interval and resolution of a run
///
/// # Examples
///
/// ```rust
/// use ode_rs::solver::SolverConfiguration;
///
/// let config = SolverConfiguration::time_evolution(0.0, 10.0, 20);
/// config.validate()?;
///
/// // Halve the step size: N → 2N - 1
/// assert_eq!(config.refined().points, 39);
/// # Ok::<(), ode_rs::solver::SolverError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverConfiguration {
    /// First grid time (t₀)
    pub start_time: f64,

    /// Last grid time (t_f)
    pub end_time: f64,

    /// Number of grid points (N), including both ends
    pub points: usize,
}

impl SolverConfiguration {
    /// Create a time evolution configuration over `[start_time, end_time]`
    pub fn time_evolution(start_time: f64, end_time: f64, points: usize) -> Self {
        Self {
            start_time,
            end_time,
            points,
        }
    }

    /// Same interval, different resolution
    pub fn with_points(&self, points: usize) -> Self {
        Self { points, ..*self }
    }

    /// Same interval with the step size halved (`2N - 1` points)
    ///
    /// Saturates near `usize::MAX` instead of overflowing.
    pub fn refined(&self) -> Self {
        self.with_points(self.points.max(1).saturating_mul(2) - 1)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), SolverError> {
        TimeGrid::validate(self.start_time, self.end_time, self.points)
    }

    /// Build the time grid described by this configuration
    pub fn grid(&self) -> Result<TimeGrid, SolverError> {
        TimeGrid::linspace(self.start_time, self.end_time, self.points)
    }
}

// =================================================================================================
// Trajectory
// =================================================================================================

/// Result of a run: states paired element-wise with sample times
#[derive(Debug, Clone, PartialEq)]
pub struct Trajectory {
    /// Computed states x[i]
    pub states: DVector<f64>,

    /// Sample times t[i]
    pub times: DVector<f64>,

    /// Diagnostic metadata (solver name, step size, ...)
    pub metadata: HashMap<String, String>,
}

impl Trajectory {
    /// Create a trajectory from index-aligned states and times
    ///
    /// # Panics
    ///
    /// Panics if the two vectors differ in length or are empty.
    pub fn new(states: DVector<f64>, times: DVector<f64>) -> Self {
        assert_eq!(
            states.len(),
            times.len(),
            "states and times must be index-aligned"
        );
        assert!(!states.is_empty(), "a trajectory holds at least one sample");

        Self {
            states,
            times,
            metadata: HashMap::new(),
        }
    }

    /// Number of samples
    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// x[0]
    pub fn initial_state(&self) -> f64 {
        self.states[0]
    }

    /// x[N-1]
    pub fn final_state(&self) -> f64 {
        self.states[self.states.len() - 1]
    }

    /// t[N-1]
    pub fn final_time(&self) -> f64 {
        self.times[self.times.len() - 1]
    }

    /// `(t, x)` pairs in grid order
    pub fn iter(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.times.iter().copied().zip(self.states.iter().copied())
    }

    /// Index of the first NaN or infinite state, if any
    pub fn first_non_finite(&self) -> Option<usize> {
        self.states.iter().position(|x| !x.is_finite())
    }

    pub fn add_metadata(&mut self, key: &str, value: &str) {
        self.metadata.insert(key.to_string(), value.to_string());
    }

    /// Split into `(states, times)`
    pub fn into_parts(self) -> (DVector<f64>, DVector<f64>) {
        (self.states, self.times)
    }
}

// =================================================================================================
// Tests
// =================================================================================================
