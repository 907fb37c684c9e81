mod cli;
mod selection;

use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};
use cli::handlers;
use freightline_core::models::{Configuration, LogLevel, MAX_HISTORY_LIMIT};
use freightline_core::services::logging;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "freightline")]
#[command(version)]
#[command(about = "Logistics CLI that delivers cargo by truck or ship")]
#[command(
    help_template = "{name} - {version}\n{about}\n\n{usage-heading}\n  {usage}\n\n{all-args}{options}\n"
)]
struct Cli {
    /// Path to configuration file (default: XDG config dir)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Logging level (error, warn, info, debug, trace); overrides the configuration
    #[arg(long, global = true)]
    log_level: Option<LogLevel>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Deliver cargo with a transport
    ///
    /// The transport is taken from KIND, then FREIGHTLINE_TRANSPORT, then the
    /// configured default_kind.
    ///
    /// Examples:
    ///   freightline deliver Truck
    ///   freightline deliver ship --count 3 --json
    Deliver {
        /// Transport kind (Truck or Ship)
        kind: Option<String>,

        /// Number of deliveries to make (1-1000)
        #[arg(
            short = 'n',
            long,
            default_value = "1",
            value_parser = clap::value_parser!(u32).range(1..=MAX_HISTORY_LIMIT as i64)
        )]
        count: u32,

        /// Output delivery records in JSON format
        #[arg(long)]
        json: bool,
    },

    /// List the available transport kinds
    Kinds {
        /// Output in JSON format
        #[arg(long)]
        json: bool,
    },

    /// Deliver with every transport once and summarize
    Demo {
        /// Output in JSON format
        #[arg(long)]
        json: bool,
    },

    /// Manage freightline settings
    Config {
        /// Write the default configuration file
        #[arg(long)]
        init: bool,

        /// Overwrite an existing configuration file
        #[arg(long)]
        force: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config_path = match cli.config {
        Some(path) => path,
        None => Configuration::default_config_path()
            .map_err(|e| anyhow!("Failed to determine configuration path: {}", e))?,
    };

    if let Commands::Config { init, force } = cli.command {
        if init {
            handlers::handle_config_init(&config_path, force)?;
        } else {
            println!("Config command requires --init flag");
            println!("Usage: freightline config --init [--force] [--config PATH]");
        }
        return Ok(());
    }

    let result = match cli.command {
        Commands::Deliver { kind, count, json } => {
            let config = load_and_init(&config_path, cli.log_level)?;
            handlers::handle_deliver(kind, count, json, &config)
        }
        Commands::Demo { json } => {
            let config = load_and_init(&config_path, cli.log_level)?;
            handlers::handle_demo(json, &config)
        }
        Commands::Kinds { json } => {
            init_logging(cli.log_level.unwrap_or_default());
            handlers::handle_kinds(json)
        }
        // Handled before configuration is loaded
        Commands::Config { .. } => Ok(()),
    };

    if let Err(e) = &result {
        logging::log_error(&format!("{:#}", e), Some("command failed"));
    }

    result
}

/// Load the configuration and start logging at its level unless overridden
fn load_and_init(config_path: &Path, log_level: Option<LogLevel>) -> Result<Configuration> {
    let config = handlers::load_configuration(config_path)?;
    let level = log_level.unwrap_or(config.log_level);
    init_logging(level);
    tracing::debug!(
        config = %config_path.display(),
        level = level.as_str(),
        "Configuration loaded"
    );
    Ok(config)
}

fn init_logging(level: LogLevel) {
    if let Err(e) = logging::init_logging(level) {
        eprintln!("Warning: Failed to initialize logging: {}", e);
    }
}
