//! RS Metrics CLI
//!
//! Samples game-client snapshot bundles into time-series measurement
//! batches.

use anyhow::Result;
use clap::{Parser, Subcommand};
use env_logger::Env;
use std::path::PathBuf;

use rs_metrics::commands::{
    display_schema, display_version, execute_sample, validate_args, validate_batch_file,
    SampleArgs,
};

/// RS Metrics - time-series measurements from game-client state
#[derive(Parser, Debug)]
#[command(name = "rs-metrics")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Sample a snapshot bundle into measurements
    Sample {
        /// Snapshot bundle JSON
        #[arg(short, long, env = "RS_METRICS_SNAPSHOT")]
        snapshot: PathBuf,

        /// Output path for the measurement batch
        #[arg(short, long, default_value = "measurements.json")]
        output: PathBuf,

        /// Print text summary to stdout
        #[arg(long)]
        summary: bool,
    },

    /// Validate a measurement batch file
    Validate {
        /// Path to measurement batch JSON
        #[arg(short, long)]
        file: PathBuf,
    },

    /// Display schema information
    Schema {
        /// Show full schema details
        #[arg(long)]
        show: bool,
    },

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    match cli.command {
        Commands::Sample {
            snapshot,
            output,
            summary,
        } => {
            let args = SampleArgs {
                snapshot,
                output_json: output,
                print_summary: summary,
            };

            validate_args(&args)?;
            execute_sample(args)?;
        }

        Commands::Validate { file } => {
            validate_batch_file(&file)?;
        }

        Commands::Schema { show } => {
            display_schema(show);
        }

        Commands::Version => {
            display_version();
        }
    }

    Ok(())
}
