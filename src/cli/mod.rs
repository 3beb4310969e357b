pub mod pack;
pub mod shell;

use std::path::PathBuf;

use clap::Parser;

#[derive(Debug, Parser)]
#[command(
    name = "qgispack",
    about = "Package a QGIS project and its layer files into a portable folder",
    version
)]
pub struct Cli {
    /// Path to the QGIS project file (.qgs); starts the interactive shell when omitted
    pub project: Option<PathBuf>,

    /// Create the package folder here instead of next to the project file
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}
