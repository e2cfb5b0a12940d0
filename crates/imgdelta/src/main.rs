use clap::Parser;
use imgdelta::cli::Cli;
use imgdelta::commands;
use imgdelta::config::{CliOverrides, ResolvedRunConfig};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose {
        "imgdelta=debug"
    } else {
        "imgdelta=info"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let overrides = CliOverrides {
        config: cli.config.clone(),
        render: cli.render.clone(),
    };
    let config = ResolvedRunConfig::new(overrides)?;
    let code = commands::diff(&cli, &config)?;
    std::process::exit(code);
}
