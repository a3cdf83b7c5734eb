use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Remove a file left over from a previous run. A missing file is not an error.
pub fn remove_if_exists(path: &Path) -> std::io::Result<bool> {
    match fs::remove_file(path) {
        Ok(()) => Ok(true),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
        Err(e) => Err(e),
    }
}

/// List the workbooks to process in `dir`, in directory-listing order.
///
/// Only regular files whose name ends with `extension` are returned, and the
/// file at `excluded` (the summary workbook) is always left out. Names that are
/// not valid UTF-8 are still listed.
pub fn list_candidate_files(
    dir: &Path,
    extension: &str,
    excluded: &Path,
) -> std::io::Result<Vec<PathBuf>> {
    let mut candidates = Vec::new();

    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }
        let file_name = entry.file_name();
        if !file_name.as_encoded_bytes().ends_with(extension.as_bytes()) {
            continue;
        }
        let path = entry.path();
        if path != excluded {
            candidates.push(path);
        }
    }

    return Ok(candidates);
}
