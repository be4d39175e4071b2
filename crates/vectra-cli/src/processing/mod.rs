//! Input handling for CLI processing.

pub mod input;

pub use input::{expand_inputs, SUPPORTED_EXTENSIONS};
