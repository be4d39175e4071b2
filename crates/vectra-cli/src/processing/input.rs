//! Input file handling and path utilities.

use std::path::{Path, PathBuf};

/// Supported raster image extensions for batch processing
pub const SUPPORTED_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "bmp", "tif", "tiff", "gif"];

/// Expand a list of inputs (files and directories) into a list of image files.
///
/// Directories are scanned for supported image files. If `recursive` is true,
/// subdirectories are also scanned. Plain file paths pass through untouched,
/// including paths that do not exist: existence is checked per file by the
/// orchestrator so a missing input is counted as one failed conversion
/// instead of aborting the whole batch.
pub fn expand_inputs(inputs: &[PathBuf], recursive: bool) -> Result<Vec<PathBuf>, String> {
    let mut files = Vec::new();

    for input in inputs {
        if input.is_dir() {
            let mut found = Vec::new();
            collect_images_from_dir(input, recursive, &mut found)?;
            // Sort for consistent ordering within each directory
            found.sort();
            files.extend(found);
        } else {
            files.push(input.clone());
        }
    }

    Ok(files)
}

/// Recursively collect image files from a directory.
fn collect_images_from_dir(
    dir: &Path,
    recursive: bool,
    files: &mut Vec<PathBuf>,
) -> Result<(), String> {
    let entries = std::fs::read_dir(dir)
        .map_err(|e| format!("Failed to read directory {}: {}", dir.display(), e))?;

    for entry in entries {
        let entry = entry.map_err(|e| format!("Error reading directory entry: {}", e))?;
        let path = entry.path();

        if path.is_dir() && recursive {
            collect_images_from_dir(&path, recursive, files)?;
        } else if path.is_file() {
            if let Some(ext) = path.extension().and_then(|e| e.to_str()) {
                if SUPPORTED_EXTENSIONS.contains(&ext.to_lowercase().as_str()) {
                    files.push(path);
                }
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::{self, File};
    use tempfile::TempDir;

    #[test]
    fn test_directory_expansion_keeps_supported_images() {
        let dir = TempDir::new().expect("temp dir");
        for name in ["a.png", "b.JPG", "notes.txt", "c.svg"] {
            File::create(dir.path().join(name)).expect("fixture");
        }

        let files = expand_inputs(&[dir.path().to_path_buf()], false).expect("expand");
        assert_eq!(files.len(), 2);
        assert!(files.iter().all(|f| {
            let ext = f.extension().unwrap().to_str().unwrap().to_lowercase();
            ext == "png" || ext == "jpg"
        }));
    }

    #[test]
    fn test_recursive_expansion() {
        let dir = TempDir::new().expect("temp dir");
        let nested = dir.path().join("scans");
        fs::create_dir(&nested).expect("nested dir");
        File::create(dir.path().join("a.png")).expect("fixture");
        File::create(nested.join("b.png")).expect("fixture");

        let flat = expand_inputs(&[dir.path().to_path_buf()], false).expect("expand");
        assert_eq!(flat.len(), 1);

        let deep = expand_inputs(&[dir.path().to_path_buf()], true).expect("expand");
        assert_eq!(deep.len(), 2);
    }

    #[test]
    fn test_missing_files_pass_through() {
        let missing = PathBuf::from("/no/such/image.png");
        let files = expand_inputs(&[missing.clone()], false).expect("expand");
        assert_eq!(files, vec![missing]);
    }
}
