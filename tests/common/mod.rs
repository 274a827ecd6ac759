//! Common utilities for integration tests
//!
//! Each test binary compiles this module and uses only part of it.

#![allow(dead_code, unused_imports)]

pub mod mock_models;
pub mod test_helpers;

// Re-export commonly used items
pub use mock_models::{CosineForcing, LogisticGrowth, StiffDecay};
pub use test_helpers::{
    assert_trajectory_close,
    convergence_ratios,
    create_simple_scenario,
    max_abs_error,
    relative_error,
};
