//! Headless editor tests
//!
//! Tests for:
//! - Token lookup at a column
//! - Token classification
//! - Selection and markers

pub mod tests_headless;
