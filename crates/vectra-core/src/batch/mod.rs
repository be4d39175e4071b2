//! Batch vectorization orchestrator.
//!
//! Processes requests sequentially, one synchronous tool invocation per
//! input, and keeps going on per-file failures. Callers are expected to
//! check [`crate::tool::is_tool_available`] before running a batch; an
//! unavailable tool is a precondition failure, not a per-file error.

#[cfg(test)]
mod tests;

use crate::models::{BatchEvent, BatchResult, ConversionOutcome, ConversionRequest};
use crate::naming::next_output_path;
use crate::tool::convert_image;
use std::path::Path;

/// Run a batch of conversion requests in input order.
///
/// Equivalent to [`run_batch_with`] with a no-op event sink.
pub fn run_batch(tool: &Path, requests: &[ConversionRequest], output_dir: &Path) -> BatchResult {
    run_batch_with(tool, requests, output_dir, |_| {})
}

/// Run a batch of conversion requests, emitting a [`BatchEvent`] before and
/// after every file.
///
/// Every request produces exactly one outcome: a failed conversion is
/// recorded and processing continues with the next file. Output paths are
/// taken from the request when explicit, otherwise assigned by scanning
/// `output_dir` for the next free auto-numbered name.
pub fn run_batch_with<F>(
    tool: &Path,
    requests: &[ConversionRequest],
    output_dir: &Path,
    mut on_event: F,
) -> BatchResult
where
    F: FnMut(BatchEvent),
{
    let total = requests.len();
    let mut result = BatchResult::default();

    for (i, request) in requests.iter().enumerate() {
        let index = i + 1;
        on_event(BatchEvent::Started {
            index,
            total,
            input: request.input.clone(),
        });

        let outcome = process_request(tool, request, output_dir);
        result.record(&outcome);
        on_event(BatchEvent::Completed {
            index,
            total,
            outcome,
        });
    }

    result
}

/// Resolve the output path and invoke the tool for a single request.
fn process_request(
    tool: &Path,
    request: &ConversionRequest,
    output_dir: &Path,
) -> ConversionOutcome {
    // Deriving the output path scans the destination directory; a failure
    // there counts as a conversion failure like any other.
    let output = match &request.output {
        Some(path) => path.clone(),
        None => match next_output_path(output_dir) {
            Ok(path) => path,
            Err(reason) => {
                return ConversionOutcome::Failure {
                    input: request.input.clone(),
                    reason,
                }
            }
        },
    };

    match convert_image(tool, &request.input, &output, &request.params) {
        Ok(()) => ConversionOutcome::Success {
            input: request.input.clone(),
            output,
        },
        Err(reason) => ConversionOutcome::Failure {
            input: request.input.clone(),
            reason,
        },
    }
}
