use std::fmt;
use std::path::PathBuf;

use serde::Serialize;

/// How many skipped references the text rendering lists before eliding.
const SKIPPED_PREVIEW: usize = 5;

/// Summary of one packaging run. Lists are in descriptor order; nothing is
/// deduplicated. The JSON form carries every skipped reference, without the
/// text rendering's preview cap.
#[derive(Debug, Serialize)]
pub struct PackReport {
    /// Folder the project was packaged into.
    pub package_dir: PathBuf,
    /// File name of the copied project descriptor.
    pub project_file: String,
    /// File names of the data sources that resolved to a file.
    pub copied: Vec<String>,
    /// Raw reference strings that did not resolve to a file.
    pub skipped: Vec<String>,
}

impl fmt::Display for PackReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Packaging complete.")?;
        writeln!(f, "  package folder: {}", self.package_dir.display())?;
        writeln!(f, "  project file: {}", self.project_file)?;
        write!(f, "  layers copied: {}", self.copied.len())?;
        if !self.skipped.is_empty() {
            write!(f, "\n  layers skipped ({}):", self.skipped.len())?;
            for reference in self.skipped.iter().take(SKIPPED_PREVIEW) {
                write!(f, "\n    {reference}")?;
            }
            if self.skipped.len() > SKIPPED_PREVIEW {
                write!(f, "\n    ...")?;
            }
        }
        Ok(())
    }
}
