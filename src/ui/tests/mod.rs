//! UI module tests
//!
//! The Controller holds no GTK4 widgets, so its tests run without a
//! display server.

#[cfg(test)]
mod controller_tests;
