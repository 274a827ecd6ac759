//! Solver errors
//!
//! Only malformed inputs are errors. Numerical degeneracy in the right-hand
//! side (NaN, ±Inf) is not: it propagates into the trajectory untouched.

use thiserror::Error;

/// Errors returned by grid construction and the solvers
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SolverError {
    /// Fewer than two grid points: no step size can be defined
    #[error("time grid needs at least 2 points, got {points}")]
    TooFewPoints { points: usize },

    /// End time not strictly after start time
    #[error("end time {end} must be greater than start time {start}")]
    EmptyInterval { start: f64, end: f64 },

    /// Start or end time is NaN or infinite
    #[error("time bounds must be finite, got [{start}, {end}]")]
    NonFiniteBound { start: f64, end: f64 },

    /// Both bounds are finite but `end - start` overflows
    #[error("time span [{start}, {end}] is too wide to represent")]
    SpanOverflow { start: f64, end: f64 },

    /// Method name that does not match any available solver
    #[error("unknown integration method '{0}' (expected one of: euler, rk2, rk4)")]
    UnknownMethod(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let error = SolverError::TooFewPoints { points: 1 };
        assert_eq!(error.to_string(), "time grid needs at least 2 points, got 1");

        let error = SolverError::EmptyInterval { start: 1.0, end: 1.0 };
        assert!(error.to_string().contains("must be greater than"));

        let error = SolverError::SpanOverflow { start: -1e308, end: 1e308 };
        assert!(error.to_string().contains("too wide"));

        let error = SolverError::UnknownMethod("rk45".to_string());
        assert!(error.to_string().contains("'rk45'"));
    }
}
