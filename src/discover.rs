use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::packager::has_project_extension;

/// How deep the chooser scans for project files.
const MAX_SCAN_DEPTH: usize = 5;

/// Project files under `dir`, in sorted traversal order, for the shell's
/// numbered chooser. Unreadable entries are skipped; the listing is a soft
/// filter and the packager re-validates the selected path.
pub fn find_project_files(dir: &Path) -> Vec<PathBuf> {
    WalkDir::new(dir)
        .max_depth(MAX_SCAN_DEPTH)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file() && has_project_extension(entry.path()))
        .map(|entry| entry.into_path())
        .collect()
}
