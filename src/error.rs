use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PackError {
    #[error("not a QGIS project file (expected .qgs): {path}")]
    InvalidExtension { path: PathBuf },

    #[error("project file does not exist: {path}")]
    FileNotFound { path: PathBuf },

    #[error("failed to read: {path}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed project XML: {path}")]
    MalformedDescriptor {
        path: PathBuf,
        #[source]
        source: roxmltree::Error,
    },

    #[error("failed to create package folder: {path}")]
    DirCreate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to copy file: {path}")]
    FileCopy {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid sibling pattern '{pattern}'")]
    SiblingPattern {
        pattern: String,
        #[source]
        source: globset::Error,
    },
}
