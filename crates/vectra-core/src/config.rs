//! Runtime configuration: verbose flag and external tool location.
//!
//! Configuration is optional; with no config file present the tool name
//! defaults to `vtracer` on the PATH.

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Once, OnceLock};

// Global verbose flag for controlling debug output
static VERBOSE: AtomicBool = AtomicBool::new(false);

/// Set the global verbose flag. When true, debug messages will be printed.
pub fn set_verbose(verbose: bool) {
    VERBOSE.store(verbose, Ordering::SeqCst);
}

/// Check if verbose mode is enabled.
pub fn is_verbose() -> bool {
    VERBOSE.load(Ordering::SeqCst)
}

/// Print a message to stderr only if verbose mode is enabled.
#[macro_export]
macro_rules! verbose_println {
    ($($arg:tt)*) => {
        if $crate::config::is_verbose() {
            eprintln!($($arg)*);
        }
    };
}

/// Canonical list of candidate config file names we search for on disk.
const CONFIG_FILENAMES: &[&str] = &["vectra.yml", "vectra.yaml"];

/// Configuration for locating the external converter.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ToolConfig {
    /// Name or path of the external converter executable.
    pub tool: String,
}

impl Default for ToolConfig {
    fn default() -> Self {
        Self {
            tool: "vtracer".to_string(),
        }
    }
}

/// Public handle that stores the loaded configuration, its source path, and warnings.
pub struct ToolConfigHandle {
    pub config: ToolConfig,
    pub source: Option<PathBuf>,
    pub warnings: Vec<String>,
}

impl ToolConfigHandle {
    fn with_config(config: ToolConfig, source: Option<PathBuf>, warnings: Vec<String>) -> Self {
        Self {
            config,
            source,
            warnings,
        }
    }
}

/// Load configuration from disk, optionally forcing a specific path.
pub fn load_tool_config(custom_path: Option<&Path>) -> ToolConfigHandle {
    let mut warnings = Vec::new();
    let candidates = get_config_candidates(custom_path);

    for candidate in candidates {
        if !candidate.exists() || !candidate.is_file() {
            continue;
        }

        match fs::read_to_string(&candidate) {
            Ok(contents) => match serde_yaml::from_str::<ToolConfig>(&contents) {
                Ok(config) => {
                    let source = fs::canonicalize(&candidate).unwrap_or(candidate);
                    return ToolConfigHandle::with_config(config, Some(source), warnings);
                }
                Err(err) => warnings.push(format!(
                    "Failed to parse config {}: {}",
                    candidate.display(),
                    err
                )),
            },
            Err(err) => warnings.push(format!(
                "Failed to read config {}: {}",
                candidate.display(),
                err
            )),
        }
    }

    warnings.push("No vectra config found; using built-in defaults.".to_string());
    ToolConfigHandle::with_config(ToolConfig::default(), None, warnings)
}

/// Get list of config file candidates to try
fn get_config_candidates(custom_path: Option<&Path>) -> Vec<PathBuf> {
    let mut candidates = Vec::new();

    if let Some(path) = custom_path {
        candidates.push(path.to_path_buf());
    }

    if let Ok(env_path) = std::env::var("VECTRA_CONFIG") {
        candidates.push(PathBuf::from(env_path));
    }

    if let Ok(cwd) = std::env::current_dir() {
        for name in CONFIG_FILENAMES {
            candidates.push(cwd.join("config").join(name));
            candidates.push(cwd.join(name));
        }
    }

    if let Some(home_dir) = dirs::home_dir() {
        for name in CONFIG_FILENAMES {
            candidates.push(home_dir.join("vectra").join(name));
        }
    }

    candidates
}

static TOOL_CONFIG_HANDLE: OnceLock<ToolConfigHandle> = OnceLock::new();
static PRINT_CONFIG_ONCE: Once = Once::new();

/// Access the global tool configuration (loaded once per process).
pub fn tool_config_handle() -> &'static ToolConfigHandle {
    TOOL_CONFIG_HANDLE.get_or_init(|| load_tool_config(None))
}

/// Resolve the external converter executable.
///
/// Priority: `VECTRA_TOOL` environment variable, then the config file, then
/// the built-in default (`vtracer` on the PATH).
pub fn tool_path() -> PathBuf {
    if let Ok(tool) = std::env::var("VECTRA_TOOL") {
        if !tool.is_empty() {
            return PathBuf::from(tool);
        }
    }
    PathBuf::from(&tool_config_handle().config.tool)
}

/// Print config source and warnings the first time it is requested (only in verbose mode).
pub fn log_config_usage() {
    PRINT_CONFIG_ONCE.call_once(|| {
        if !is_verbose() {
            return;
        }
        let handle = tool_config_handle();
        if let Some(source) = &handle.source {
            eprintln!("[vectra] Loaded config from {}", source.display());
        } else {
            eprintln!("[vectra] Using built-in defaults");
        }

        for warning in &handle.warnings {
            eprintln!("[vectra] Config warning: {}", warning);
        }
    });
}
