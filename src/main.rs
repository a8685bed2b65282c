use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use soupkitchen::{Config, Scenario, report};

/// soupkitchen - cook a soup and let the tasters judge it
#[derive(Parser)]
#[command(name = "soupkitchen")]
#[command(about = "Soup crafting and tasting engine", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List every ingredient in the catalog
    Catalog,
    /// Run a scripted cooking scenario and taste the result
    Cook {
        /// Scenario file (JSON)
        scenario: PathBuf,

        /// Write the tasting summary as JSON to this file
        #[arg(long)]
        output: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = Config::load(cli.config.clone())?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    soupkitchen::observability::init_logging(&config.logging)?;

    match cli.command {
        Commands::Catalog => catalog_command(&config),
        Commands::Cook { scenario, output } => cook_command(&config, scenario, output),
    }
}

fn catalog_command(config: &Config) -> Result<()> {
    let catalog = config.catalog.load()?;
    print!("{}", report::catalog_table(&catalog)?);
    Ok(())
}

#[tracing::instrument(skip(config))]
fn cook_command(config: &Config, scenario: PathBuf, output: Option<PathBuf>) -> Result<()> {
    let catalog = Arc::new(config.catalog.load()?);
    let scenario = Scenario::from_path(&scenario)?;
    let outcome = scenario.run(catalog, config)?;

    print!("{}", report::outcome_text(&outcome)?);

    if let Some(path) = output {
        let json = serde_json::to_string_pretty(&outcome.summary)?;
        std::fs::write(&path, json)
            .with_context(|| format!("Failed to write summary to {}", path.display()))?;
        tracing::info!(path = %path.display(), "Tasting summary written");
    }

    Ok(())
}
