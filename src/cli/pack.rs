use std::path::PathBuf;

use anyhow::Result;

use crate::packager::{self, PackOptions};

pub fn run(project: PathBuf, output: Option<PathBuf>, json: bool) -> Result<()> {
    let options = PackOptions { output_dir: output };
    let report = packager::pack(&project, &options)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{report}");
    }
    Ok(())
}
