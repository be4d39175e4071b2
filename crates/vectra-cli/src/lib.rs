//! Shared utilities for vectra-cli
//!
//! This module provides reusable functions and utilities that can be
//! shared between the CLI and GUI applications.

pub mod parsers;
pub mod processing;

// Re-export commonly used items at the crate root for convenience
pub use parsers::{parse_color_mode, parse_curve_mode, parse_hierarchy_mode};
pub use processing::{expand_inputs, SUPPORTED_EXTENSIONS};
