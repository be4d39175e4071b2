//! Vectra Core Library
//!
//! Batch orchestration for the external VTracer raster-to-vector converter.
//! The actual vectorization happens in the `vtracer` executable; this crate
//! builds its command lines, runs it once per input file, and tallies the
//! results.

pub mod batch;
pub mod config;
pub mod models;
pub mod naming;
pub mod tool;

// Re-export commonly used types
pub use batch::{run_batch, run_batch_with};
pub use models::{
    BatchEvent, BatchResult, ColorMode, ConversionOutcome, ConversionRequest, CurveMode,
    HierarchyMode, ParameterSet,
};
pub use tool::{convert_image, is_tool_available};
