use std::fs;
use std::path::{Path, PathBuf};

use globset::Glob;

use crate::error::PackError;

/// Sibling files of `source`: regular files in the same directory matching
/// the glob `base.*`, where `base` is the source's file name without its
/// final extension, taken literally. The source file itself is a match when
/// it has an extension; a source without one matches nothing.
///
/// Results are sorted by file name so copies happen in a stable order.
pub fn sibling_files(source: &Path) -> Result<Vec<PathBuf>, PackError> {
    let dir = parent_dir(source);
    let Some(base) = source.file_stem().and_then(|stem| stem.to_str()) else {
        // No pattern can be built (non-UTF-8 name); the source alone will do.
        return Ok(vec![source.to_path_buf()]);
    };

    let pattern = format!("{}.*", globset::escape(base));
    let matcher = Glob::new(&pattern)
        .map_err(|source| PackError::SiblingPattern {
            pattern: pattern.clone(),
            source,
        })?
        .compile_matcher();

    let entries = fs::read_dir(dir).map_err(|source| PackError::FileRead {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut matches = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| PackError::FileRead {
            path: dir.to_path_buf(),
            source,
        })?;
        if !entry.path().is_file() {
            continue;
        }
        let name = entry.file_name();
        if matcher.is_match(Path::new(&name)) {
            matches.push(entry.path());
        }
    }
    matches.sort();
    Ok(matches)
}

/// `Path::parent` of a bare file name is the empty path; the scan wants the
/// working directory in that case.
fn parent_dir(source: &Path) -> &Path {
    match source.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    }
}
