//! Folio - a personal portfolio site: static build and live server.

mod build;
mod catalog;
mod cli;
mod config;
mod contact;
mod generator;
mod init;
mod logger;
mod route;
mod serve;
mod utils;
mod view;

use anyhow::{Context, Result};
use build::build_site;
use catalog::Catalog;
use clap::Parser;
use cli::{Cli, Commands};
use config::{SiteConfig, init_config};
use init::new_site;
use serve::serve_site;
use std::sync::Arc;

fn main() -> Result<()> {
    let cli: &'static Cli = Box::leak(Box::new(Cli::parse()));

    let config = SiteConfig::load(cli)?;
    config.validate()?;
    let config = init_config(config);

    match &cli.command {
        Commands::Init { name } => new_site(&config, name.is_some()),
        Commands::Build { .. } => {
            let catalog = load_catalog(&config)?;
            build_site(&config, &catalog).map(|_| ())
        }
        Commands::Serve { .. } => {
            let catalog = load_catalog(&config)?;
            serve_site(Arc::new(catalog))
        }
    }
}

fn load_catalog(config: &SiteConfig) -> Result<Catalog> {
    Catalog::from_path(&config.build.data)
        .with_context(|| format!("Failed to load catalog {}", config.build.data.display()))
}
