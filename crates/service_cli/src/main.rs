//! Composer CLI - Command Line Operations for the Structured Product Composer
//!
//! This is the operational entry point for the product composer library.
//!
//! # Commands
//!
//! - `composer simulate --template <id> --scenario <id>` - Simulate a
//!   product graph under a market scenario
//! - `composer scenarios` - List the preset market scenarios
//! - `composer templates` - List (or export) the product templates
//! - `composer check --graph <file>` - Validate a serialized graph
//!
//! # Architecture
//!
//! As the service layer, this crate orchestrates the data-model and
//! engine crates behind a unified command-line interface.

use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;
mod error;

pub use config::CliConfig;
pub use error::{CliError, Result};

/// Structured Product Composer CLI
#[derive(Parser)]
#[command(name = "composer")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true, default_value = "composer.toml")]
    config: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Simulate a product graph under a market scenario
    Simulate {
        /// Built-in product template id (e.g. twin-win)
        #[arg(short, long, conflicts_with = "graph")]
        template: Option<String>,

        /// Path to a serialized graph file (JSON)
        #[arg(short, long)]
        graph: Option<String>,

        /// Preset scenario id (bull, bear, sideways, volatile) or "all"
        #[arg(short, long, default_value = "bull")]
        scenario: String,

        /// Simulation seed (overrides the config file)
        #[arg(long)]
        seed: Option<u64>,

        /// Output format (table, json)
        #[arg(short, long)]
        format: Option<String>,
    },

    /// List the preset market scenarios
    Scenarios,

    /// List the built-in product templates
    Templates {
        /// Export this template's graph as JSON instead of listing
        #[arg(short, long)]
        export: Option<String>,
    },

    /// Validate a serialized graph file
    Check {
        /// Path to a serialized graph file (JSON)
        #[arg(short, long)]
        graph: String,
    },
}

fn main() -> Result<()> {
    // Initialise tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let config = CliConfig::load(&cli.config)?;

    if cli.verbose {
        info!("Verbose mode enabled");
        info!("Config file: {}", cli.config);
    }

    match cli.command {
        Commands::Simulate {
            template,
            graph,
            scenario,
            seed,
            format,
        } => commands::simulate::run(
            &config,
            template.as_deref(),
            graph.as_deref(),
            &scenario,
            seed,
            format.as_deref(),
        ),
        Commands::Scenarios => commands::scenarios::run(),
        Commands::Templates { export } => commands::templates::run(export.as_deref()),
        Commands::Check { graph } => commands::check::run(&graph),
    }
}
