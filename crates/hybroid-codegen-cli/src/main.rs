//! hybroid-codegen CLI - Generates Hybroid sources from JSON descriptions
//!
//! Commands:
//! - `hybroid-codegen api` - Render walker registrations, docs and mappings
//! - `hybroid-codegen alerts` - Render alert types from a directory of batches
//! - `hybroid-codegen check` - Validate the generator configuration

use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod alerts;
mod api;
mod config;
mod logging;

#[derive(Parser)]
#[command(name = "hybroid-codegen")]
#[command(author, version, about = "Source generator for the Hybroid compiler", long_about = None)]
struct Cli {
    /// Log filter (e.g. `debug`, `hybroid_codegen=trace`); overrides RUST_LOG
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Path to the generator configuration (TOML or JSON)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the API of every library in a documentation document
    Api {
        /// Documentation document (JSON array of libraries)
        #[arg(short, long)]
        input: PathBuf,

        /// Output directory for `api_<slug>.gen.go`
        #[arg(short, long)]
        out_dir: PathBuf,

        /// Output directory for `<slug>.gen.md` (default: out-dir)
        #[arg(long)]
        docs_dir: Option<PathBuf>,

        /// Output directory for the `<slug>.gen.go` mapping (default: out-dir)
        #[arg(long)]
        mapping_dir: Option<PathBuf>,
    },

    /// Render one alert file per JSON batch in a directory
    Alerts {
        /// Directory containing `*.json` alert batches
        #[arg(short, long)]
        input_dir: PathBuf,

        /// Output directory for `<stem>.gen.go`
        #[arg(short, long)]
        out_dir: PathBuf,
    },

    /// Validate the generator configuration
    Check,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = config::load(cli.config.as_deref())?;
    logging::init(cli.log_level.as_deref(), &config.log_level)?;

    match cli.command {
        Commands::Api {
            input,
            out_dir,
            docs_dir,
            mapping_dir,
        } => {
            let dirs = api::OutputDirs::new(out_dir, docs_dir, mapping_dir);
            api::run(&input, &dirs, &config)?;
        }
        Commands::Alerts { input_dir, out_dir } => {
            alerts::run(&input_dir, &out_dir, &config)?;
        }
        Commands::Check => {
            config::check(cli.config.as_deref(), &config)?;
        }
    }

    Ok(())
}
