use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod discover;
mod error;
mod packager;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                if cli.verbose {
                    "qgispack=debug"
                } else {
                    "qgispack=info"
                }
                .parse()
                .unwrap()
            }),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.project {
        Some(project) => cli::pack::run(project, cli.output, cli.json),
        None => cli::shell::run(cli.output, cli.json),
    }
}
