//! Seller Analytics CLI
//!
//! Ranks sellers by profit and writes per-seller revenue, profit,
//! top products and bonus to a JSON report.

use anyhow::Result;
use clap::{Parser, Subcommand};
use env_logger::Env;
use std::path::PathBuf;

use seller_analytics::commands::{
    display_schema, display_version, execute_analyze, validate_args, validate_report_file,
    AnalyzeArgs,
};

/// Seller Analytics - sales reports per seller
#[derive(Parser, Debug)]
#[command(name = "seller-report")]
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
    /// Analyze a sales dataset
    Analyze {
        /// Path to dataset JSON
        #[arg(short, long)]
        input: PathBuf,

        /// Output path for JSON report
        #[arg(short, long, default_value = "report.json")]
        output: PathBuf,

        /// Print text summary to stdout
        #[arg(long)]
        summary: bool,

        /// Number of sellers shown in the summary
        #[arg(long, default_value = "10")]
        top: usize,
    },

    /// Validate a report JSON file
    Validate {
        /// Path to report JSON file
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

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    match cli.command {
        Commands::Analyze {
            input,
            output,
            summary,
            top,
        } => {
            let args = AnalyzeArgs {
                input,
                output_json: output,
                print_summary: summary,
                summary_rows: top,
            };

            validate_args(&args)?;
            execute_analyze(args)?;
        }

        Commands::Validate { file } => {
            validate_report_file(&file)?;
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
