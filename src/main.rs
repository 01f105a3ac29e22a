//! Vigil - content pipeline and page assembly for a static advocacy site.

use anyhow::{Context, Result, bail};
use clap::Parser;
use std::path::Path;
use vigil::build::build_site;
use vigil::cli::{Cli, Commands};
use vigil::config::SiteConfig;
use vigil::serve::serve_site;

fn main() -> Result<()> {
    let cli: &'static Cli = Box::leak(Box::new(Cli::parse()));
    let config: &'static SiteConfig = Box::leak(Box::new(load_config(cli)?));

    match &cli.command {
        Commands::Build { .. } => run_build(config),
        Commands::Serve { .. } => {
            run_build(config)?;
            serve_site(config)
        }
    }
}

/// Load and validate configuration from CLI arguments
fn load_config(cli: &'static Cli) -> Result<SiteConfig> {
    let root = cli.root.as_deref().unwrap_or(Path::new("./"));
    let config_path = root.join(&cli.config);

    let mut config = if config_path.exists() {
        SiteConfig::from_path(&config_path)?
    } else {
        bail!("Config file not found: {}", config_path.display());
    };
    config.update_with_cli(cli);
    config.validate()?;

    Ok(config)
}

/// Run the async build pipeline to completion.
fn run_build(config: &'static SiteConfig) -> Result<()> {
    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")?
        .block_on(build_site(config))
}
