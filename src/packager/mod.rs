pub mod descriptor;
pub mod report;
pub mod siblings;

pub use descriptor::{ProjectDescriptor, has_project_extension};
pub use report::PackReport;

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::PackError;

/// Knobs for a packaging run.
#[derive(Debug, Default)]
pub struct PackOptions {
    /// Package folder override; defaults to `<parent>/<stem>_package`.
    pub output_dir: Option<PathBuf>,
}

/// Packages the project at `path`: copies every resolvable data source's
/// sibling files, then the descriptor itself, into the package folder.
///
/// The folder is reused if it already exists and is never cleared, so files
/// from an earlier run stick around. Individual sibling copies are
/// best-effort; failures are logged and the run continues. No rollback.
pub fn pack(path: &Path, options: &PackOptions) -> Result<PackReport, PackError> {
    let descriptor = ProjectDescriptor::locate(path)?;

    let package_dir = options
        .output_dir
        .clone()
        .unwrap_or_else(|| descriptor.default_package_dir());
    fs::create_dir_all(&package_dir).map_err(|source| PackError::DirCreate {
        path: package_dir.clone(),
        source,
    })?;

    let references = descriptor.data_sources()?;
    tracing::debug!(count = references.len(), "data-source references found");

    let mut copied = Vec::new();
    let mut skipped = Vec::new();

    for reference in &references {
        let source = Path::new(reference);
        if source.is_file() {
            copy_layer(source, &package_dir);
            copied.push(layer_name(source));
        } else {
            skipped.push(reference.clone());
        }
    }

    // The descriptor goes in last, overwriting any stale copy. When the
    // package folder is the project's own directory the descriptor is
    // already in place and the copy would truncate it.
    let target = package_dir.join(descriptor.file_name());
    if !same_path(descriptor.path(), &target) {
        fs::copy(descriptor.path(), &target).map_err(|source| PackError::FileCopy {
            path: descriptor.path().to_path_buf(),
            source,
        })?;
    }

    Ok(PackReport {
        package_dir,
        project_file: descriptor.file_name(),
        copied,
        skipped,
    })
}

/// Copies `source` and its siblings into `package_dir`, overwriting
/// same-named files. A file that already sits in the package folder is
/// left in place. A failed sibling scan falls back to the source file
/// alone; a failed copy is logged and the rest are still attempted.
fn copy_layer(source: &Path, package_dir: &Path) {
    let files = match siblings::sibling_files(source) {
        Ok(files) => files,
        Err(error) => {
            tracing::warn!(
                source = %source.display(),
                %error,
                "sibling scan failed; copying the referenced file alone"
            );
            vec![source.to_path_buf()]
        }
    };

    for file in &files {
        let Some(name) = file.file_name() else {
            continue;
        };
        let target = package_dir.join(name);
        if same_path(file, &target) {
            tracing::warn!(
                file = %file.display(),
                "already in the package folder; not copied onto itself"
            );
            continue;
        }
        if let Err(error) = fs::copy(file, &target) {
            tracing::warn!(file = %file.display(), %error, "failed to copy layer file");
        } else {
            tracing::debug!(file = %file.display(), "copied");
        }
    }
}

/// Whether two paths name the same file once resolved. `fs::copy` onto the
/// source itself truncates it to zero bytes.
fn same_path(a: &Path, b: &Path) -> bool {
    descriptor::resolve_path(a) == descriptor::resolve_path(b)
}

fn layer_name(source: &Path) -> String {
    source
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| source.to_string_lossy().into_owned())
}
