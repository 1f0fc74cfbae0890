//! Common utilities for integration tests
//!
//! Each test binary uses a different subset of these helpers.

#![allow(dead_code, unused_imports)]

pub mod fixtures;
pub mod test_helpers;

// Re-export commonly used items
pub use fixtures::{all_models, reference_bet, reference_freundlich, reference_langmuir, reference_temkin};
pub use test_helpers::{assert_non_decreasing, relative_error};
