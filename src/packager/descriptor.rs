use std::fs;
use std::path::{Path, PathBuf};

use crate::error::PackError;

/// Extension a project descriptor must carry, compared case-insensitively.
pub const PROJECT_EXTENSION: &str = "qgs";

/// Element whose text content holds a layer's backing path.
const DATASOURCE_TAG: &str = "datasource";

/// A validated project file path. Read-only input; never mutated.
pub struct ProjectDescriptor {
    path: PathBuf,
}

impl ProjectDescriptor {
    /// Resolves the supplied path, then checks the extension and that it
    /// is a regular file, in that order. Validation sees the resolved
    /// path, so a symlink is judged by its target and the default package
    /// folder lands next to the real project file.
    pub fn locate(path: &Path) -> Result<Self, PackError> {
        let path = resolve_path(path);
        if !has_project_extension(&path) {
            return Err(PackError::InvalidExtension { path });
        }
        if !path.is_file() {
            return Err(PackError::FileNotFound { path });
        }
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Descriptor file name, e.g. `proj.qgs`.
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    /// `<parent>/<stem>_package`
    pub fn default_package_dir(&self) -> PathBuf {
        let stem = self
            .path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default();
        self.path.with_file_name(format!("{stem}_package"))
    }

    /// Reads and parses the descriptor, returning every data-source
    /// reference in document order. Elements can sit at any depth; empty
    /// text is dropped and duplicates are kept.
    pub fn data_sources(&self) -> Result<Vec<String>, PackError> {
        let text = fs::read_to_string(&self.path).map_err(|source| PackError::FileRead {
            path: self.path.clone(),
            source,
        })?;

        // .qgs files open with a DOCTYPE declaration.
        let options = roxmltree::ParsingOptions {
            allow_dtd: true,
            ..Default::default()
        };
        let doc = roxmltree::Document::parse_with_options(&text, options).map_err(|source| {
            PackError::MalformedDescriptor {
                path: self.path.clone(),
                source,
            }
        })?;

        let sources = doc
            .descendants()
            .filter(|node| node.is_element() && node.tag_name().name() == DATASOURCE_TAG)
            .filter_map(|node| node.text())
            .filter(|text| !text.is_empty())
            .map(str::to_owned)
            .collect();
        Ok(sources)
    }
}

/// Best-effort resolution: symlinks followed when the path can be
/// canonicalized, lexical absolutization otherwise (a missing file cannot
/// be canonicalized but still needs checking).
pub fn resolve_path(path: &Path) -> PathBuf {
    path.canonicalize()
        .or_else(|_| std::path::absolute(path))
        .unwrap_or_else(|_| path.to_path_buf())
}

/// Shared with project discovery; the chooser's listing is a soft filter and
/// `locate` re-checks whatever path it is handed.
pub fn has_project_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case(PROJECT_EXTENSION))
}
