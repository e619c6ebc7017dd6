use std::path::{Path, PathBuf};

use log::debug;
use walkdir::WalkDir;

use super::error::{MergeError, Result};

/// Extension filter that lets every file through.
pub const MATCH_ALL: &str = "*";

// Walks the tree under `root` and returns the paths of all files whose name
// ends with `extension_filter` (or every file, for `*`). With `skip_test_files`,
// any file with "test" in its name (ignoring case) is left out. Directories are
// descended into but never returned.
//
// Entries are visited depth-first, sorted by file name within each directory.
// The first error aborts the walk and nothing found so far is returned.
pub fn discover<P: AsRef<Path>>(
    root: P,
    extension_filter: &str,
    skip_test_files: bool,
) -> Result<Vec<PathBuf>> {
    let root = root.as_ref();
    let mut paths = Vec::new();

    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = entry.map_err(|source| MergeError::Walk {
            root: root.to_owned(),
            source,
        })?;
        if entry.file_type().is_dir() {
            continue;
        }

        let file_name = entry.file_name().to_string_lossy();
        if skip_test_files && is_test_file(&file_name) {
            debug!("skipping test file {}", entry.path().display());
            continue;
        }
        if matches_extension(&file_name, extension_filter) {
            paths.push(entry.path().to_path_buf());
        }
    }

    Ok(paths)
}

fn is_test_file(file_name: &str) -> bool {
    file_name.to_lowercase().contains("test")
}

fn matches_extension(file_name: &str, extension_filter: &str) -> bool {
    extension_filter == MATCH_ALL || file_name.ends_with(extension_filter)
}
