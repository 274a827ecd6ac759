//! Uniform time grid shared by every fixed-step method
//!
//! # Construction
//!
//! For an interval `[t₀, t_f]` sampled at `N` points:
//!
//! ```text
//! Δ      = (t_f - t₀) / (N - 1)
//! t_i    = t₀ + i·Δ            for i = 0 .. N-2
//! t_{N-1} = t_f                (pinned, no accumulated rounding)
//! h      = t₁ - t₀
//! ```
//!
//! Each sample is computed directly from its index rather than by repeated
//! addition, so rounding does not accumulate along the grid.

use nalgebra::DVector;
use std::fmt;

use crate::solver::SolverError;

// =================================================================================================
// Time Grid
// =================================================================================================

/// Immutable, evenly spaced sequence of sample times
///
/// # Invariants
///
/// - `len() >= 2`
/// - `times[0] == start`, `times[len - 1] == end` exactly
/// - consecutive differences equal `step()` up to floating-point rounding
///
/// # Example
///
/// ```rust
/// use ode_rs::solver::TimeGrid;
///
/// let grid = TimeGrid::linspace(0.0, 1.0, 5)?;
///
/// assert_eq!(grid.len(), 5);
/// assert_eq!(grid.as_slice(), &[0.0, 0.25, 0.5, 0.75, 1.0]);
/// assert_eq!(grid.step(), 0.25);
/// # Ok::<(), ode_rs::solver::SolverError>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct TimeGrid {
    times: DVector<f64>,
    step: f64,
}

impl TimeGrid {
    /// Build `points` evenly spaced samples from `start` to `end` inclusive
    ///
    /// # Errors
    ///
    /// - [`SolverError::TooFewPoints`] when `points < 2`
    /// - [`SolverError::NonFiniteBound`] when a bound is NaN or infinite
    /// - [`SolverError::EmptyInterval`] when `end <= start`
    /// - [`SolverError::SpanOverflow`] when `end - start` is not representable
    pub fn linspace(start: f64, end: f64, points: usize) -> Result<Self, SolverError> {
        Self::validate(start, end, points)?;

        let spacing = (end - start) / (points - 1) as f64;

        let mut times = DVector::from_fn(points, |i, _| i as f64 * spacing + start);
        times[points - 1] = end;

        let step = times[1] - times[0];

        Ok(Self { times, step })
    }

    /// Check grid parameters without building the grid
    pub fn validate(start: f64, end: f64, points: usize) -> Result<(), SolverError> {
        if points < 2 {
            return Err(SolverError::TooFewPoints { points });
        }

        if !start.is_finite() || !end.is_finite() {
            return Err(SolverError::NonFiniteBound { start, end });
        }

        if end <= start {
            return Err(SolverError::EmptyInterval { start, end });
        }

        if !(end - start).is_finite() {
            return Err(SolverError::SpanOverflow { start, end });
        }

        Ok(())
    }

    /// Number of samples
    pub fn len(&self) -> usize {
        self.times.len()
    }

    /// Always `false`: a valid grid holds at least two samples
    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    /// Constant step size `h = t₁ - t₀`
    pub fn step(&self) -> f64 {
        self.step
    }

    /// First sample (`t₀`)
    pub fn start(&self) -> f64 {
        self.times[0]
    }

    /// Last sample (`t_f`)
    pub fn end(&self) -> f64 {
        self.times[self.times.len() - 1]
    }

    /// Number of transitions between samples (`N - 1`)
    pub fn intervals(&self) -> usize {
        self.times.len() - 1
    }

    pub fn times(&self) -> &DVector<f64> {
        &self.times
    }

    pub fn as_slice(&self) -> &[f64] {
        self.times.as_slice()
    }

    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.times.iter().copied()
    }

    /// Consume the grid and return the sample vector
    pub fn into_times(self) -> DVector<f64> {
        self.times
    }
}

impl fmt::Display for TimeGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}, {}] with {} points (h = {})",
            self.start(),
            self.end(),
            self.len(),
            self.step
        )
    }
}

// =================================================================================================
// Tests
// =================================================================================================
