//! Signpost CLI - compiles sidebar manifests into navigation JSON.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

mod commands;
mod manifest;

#[derive(Parser)]
#[command(name = "signpost")]
#[command(about = "Compile sidebar manifests into per-locale navigation trees")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to the sidebar manifest (.toml, .yaml or .yml)
    #[arg(short, long, default_value = "sidebar.toml", global = true)]
    config: PathBuf,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a starter manifest
    Init {
        /// Overwrite an existing manifest
        #[arg(short, long)]
        yes: bool,
    },

    /// Compile the sidebar of every locale
    Build {
        /// Directory for <locale>.json files (prints to stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Only build this locale
        #[arg(short, long)]
        locale: Option<String>,

        /// Write compact JSON
        #[arg(long)]
        compact: bool,
    },

    /// Validate the manifest without writing anything
    Check,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    // stdout carries the compiled JSON
    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    // Execute command
    match cli.command {
        Commands::Init { yes } => {
            commands::init::run(&cli.config, yes)?;
        }
        Commands::Build {
            output,
            locale,
            compact,
        } => {
            commands::build::run(&cli.config, output, locale, compact)?;
        }
        Commands::Check => {
            commands::check::run(&cli.config)?;
        }
    }

    Ok(())
}
