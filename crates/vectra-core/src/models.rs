//! Data model for conversion requests and batch results.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Color handling mode of the external converter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    Color,
    Binary,
}

impl ColorMode {
    /// Token expected by the external tool's `--colormode` flag.
    pub fn as_str(&self) -> &'static str {
        match self {
            ColorMode::Color => "color",
            ColorMode::Binary => "binary",
        }
    }
}

/// Shape stacking mode of the external converter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HierarchyMode {
    Stacked,
    Cutout,
}

impl HierarchyMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            HierarchyMode::Stacked => "stacked",
            HierarchyMode::Cutout => "cutout",
        }
    }
}

/// Curve fitting mode of the external converter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CurveMode {
    Spline,
    Polygon,
    Pixel,
}

impl CurveMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            CurveMode::Spline => "spline",
            CurveMode::Polygon => "polygon",
            CurveMode::Pixel => "pixel",
        }
    }
}

/// Tuning parameters forwarded to the external converter.
///
/// Values are passed through as-is: the external tool owns range validation
/// and rejects values it cannot handle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParameterSet {
    pub colormode: ColorMode,
    pub hierarchical: HierarchyMode,
    pub mode: CurveMode,
    pub filter_speckle: u32,
    pub color_precision: u32,
    pub gradient_step: u32,
    pub corner_threshold: u32,
    pub segment_length: f32,
    pub splice_threshold: u32,
}

impl Default for ParameterSet {
    fn default() -> Self {
        Self {
            colormode: ColorMode::Color,
            hierarchical: HierarchyMode::Stacked,
            mode: CurveMode::Spline,
            filter_speckle: 4,
            color_precision: 6,
            gradient_step: 55,
            corner_threshold: 105,
            segment_length: 7.5,
            splice_threshold: 0,
        }
    }
}

/// One input/output/parameter tuple submitted to the orchestrator.
/// Immutable once constructed.
#[derive(Debug, Clone)]
pub struct ConversionRequest {
    /// Input image path. Must exist at conversion time.
    pub input: PathBuf,
    /// Explicit output path. `None` means the orchestrator assigns the next
    /// auto-numbered name in the output directory.
    pub output: Option<PathBuf>,
    pub params: ParameterSet,
}

impl ConversionRequest {
    /// Request with an auto-numbered output.
    pub fn new(input: PathBuf, params: ParameterSet) -> Self {
        Self {
            input,
            output: None,
            params,
        }
    }
}

/// Tagged per-request result.
#[derive(Debug, Clone)]
pub enum ConversionOutcome {
    Success { input: PathBuf, output: PathBuf },
    Failure { input: PathBuf, reason: String },
}

impl ConversionOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, ConversionOutcome::Success { .. })
    }

    pub fn input(&self) -> &PathBuf {
        match self {
            ConversionOutcome::Success { input, .. } => input,
            ConversionOutcome::Failure { input, .. } => input,
        }
    }
}

/// Aggregate outcome counts for a batch of requests.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchResult {
    pub successful: usize,
    pub failed: usize,
    pub total: usize,
}

impl BatchResult {
    pub fn record(&mut self, outcome: &ConversionOutcome) {
        match outcome {
            ConversionOutcome::Success { .. } => self.successful += 1,
            ConversionOutcome::Failure { .. } => self.failed += 1,
        }
        self.total += 1;
    }

    pub fn all_succeeded(&self) -> bool {
        self.failed == 0
    }
}

/// Per-file progress event emitted while a batch runs.
///
/// `index` is 1-based for display purposes.
#[derive(Debug, Clone)]
pub enum BatchEvent {
    Started {
        index: usize,
        total: usize,
        input: PathBuf,
    },
    Completed {
        index: usize,
        total: usize,
        outcome: ConversionOutcome,
    },
}
