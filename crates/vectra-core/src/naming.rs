//! Auto-numbered output naming.
//!
//! Output files are named `1.svg`, `2.svg`, ... inside the destination
//! directory. The next name is max(existing numeric stems) + 1. The scan is
//! not protected against concurrent batches writing to the same directory;
//! two simultaneous runs can collide on the same number.

use std::path::{Path, PathBuf};

/// Next auto-numbered SVG path in `dir`.
///
/// Non-SVG files and SVG files whose stem is not an integer are ignored.
pub fn next_output_path(dir: &Path) -> Result<PathBuf, String> {
    let entries = std::fs::read_dir(dir)
        .map_err(|e| format!("Failed to read output directory {}: {}", dir.display(), e))?;

    let mut max_number: u64 = 0;
    for entry in entries {
        let entry = entry.map_err(|e| format!("Error reading directory entry: {}", e))?;
        let path = entry.path();

        let is_svg = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.eq_ignore_ascii_case("svg"))
            .unwrap_or(false);
        if !is_svg {
            continue;
        }

        if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
            if let Ok(number) = stem.parse::<u64>() {
                max_number = max_number.max(number);
            }
        }
    }

    Ok(dir.join(format!("{}.svg", max_number + 1)))
}
