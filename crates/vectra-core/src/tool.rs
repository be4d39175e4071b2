//! External converter invocation.
//!
//! Every conversion is one synchronous run of the external executable with
//! the full parameter set serialized as command-line flags. No retries, no
//! timeout.

use crate::models::ParameterSet;
use crate::verbose_println;
use std::ffi::OsString;
use std::path::Path;
use std::process::{Command, Stdio};

/// Serialize input, output, and the parameter set as external-tool arguments.
///
/// Flag spelling must match the external tool exactly (underscores, not
/// hyphens, for the tuning flags).
pub fn build_tool_args(input: &Path, output: &Path, params: &ParameterSet) -> Vec<OsString> {
    let mut args: Vec<OsString> = Vec::with_capacity(22);
    args.push("--input".into());
    args.push(input.as_os_str().to_os_string());
    args.push("--output".into());
    args.push(output.as_os_str().to_os_string());
    args.push("--colormode".into());
    args.push(params.colormode.as_str().into());
    args.push("--hierarchical".into());
    args.push(params.hierarchical.as_str().into());
    args.push("--mode".into());
    args.push(params.mode.as_str().into());
    args.push("--filter_speckle".into());
    args.push(params.filter_speckle.to_string().into());
    args.push("--color_precision".into());
    args.push(params.color_precision.to_string().into());
    args.push("--gradient_step".into());
    args.push(params.gradient_step.to_string().into());
    args.push("--corner_threshold".into());
    args.push(params.corner_threshold.to_string().into());
    args.push("--segment_length".into());
    args.push(params.segment_length.to_string().into());
    args.push("--splice_threshold".into());
    args.push(params.splice_threshold.to_string().into());
    args
}

/// Convert one image by running the external tool synchronously.
///
/// Fails without spawning the tool when the input file does not exist.
/// A non-zero exit is reported with the tool's stderr text.
pub fn convert_image(
    tool: &Path,
    input: &Path,
    output: &Path,
    params: &ParameterSet,
) -> Result<(), String> {
    if !input.exists() {
        return Err(format!("Input file not found: {}", input.display()));
    }

    let args = build_tool_args(input, output, params);
    verbose_println!(
        "[vectra] {} {}",
        tool.display(),
        args.iter()
            .map(|a| a.to_string_lossy().into_owned())
            .collect::<Vec<_>>()
            .join(" ")
    );

    let result = Command::new(tool)
        .args(&args)
        .output()
        .map_err(|e| format!("Failed to run {}: {}", tool.display(), e))?;

    if result.status.success() {
        Ok(())
    } else {
        let stderr = String::from_utf8_lossy(&result.stderr);
        let status = match result.status.code() {
            Some(code) => format!("exit code {}", code),
            None => "signal".to_string(),
        };
        Err(format!(
            "{} failed with {}: {}",
            tool.display(),
            status,
            stderr.trim()
        ))
    }
}

/// Check that the external tool can be executed at all.
///
/// Runs the tool with a harmless flag and discards its output. A spawn
/// failure (typically "not found") or a non-zero exit reports unavailable.
pub fn is_tool_available(tool: &Path) -> bool {
    Command::new(tool)
        .arg("--version")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .map(|status| status.success())
        .unwrap_or(false)
}
