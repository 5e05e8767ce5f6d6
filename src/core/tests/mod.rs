//! Core module tests
//!
//! Contains test suites for core functionality:
//! - Patch merge and weekday toggle tests
//! - Summary derivation tests

#[cfg(test)]
mod types_tests;
