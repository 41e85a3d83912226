//! blockfeed CLI - records market classification blocks and memberships.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "blockfeed")]
#[command(about = "Record market classification blocks and their memberships", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Directory for the JSON record files
    #[arg(long, default_value = "data", global = true)]
    data_dir: PathBuf,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Discover and record classification blocks
    Blocks,

    /// Record block memberships for stored blocks
    Members {
        /// Restrict the run to these block codes
        #[arg(short, long, value_delimiter = ',')]
        codes: Option<Vec<String>>,

        /// Hard cap on pages fetched per block
        #[arg(long, default_value = "4")]
        max_pages: u32,

        /// Seconds to pause between page fetches
        #[arg(long, default_value = "5")]
        pace_secs: u64,
    },

    /// Run discovery followed by membership recording
    Run {
        /// Hard cap on pages fetched per block
        #[arg(long, default_value = "4")]
        max_pages: u32,

        /// Seconds to pause between page fetches
        #[arg(long, default_value = "5")]
        pace_secs: u64,
    },
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Blocks => commands::blocks::run(&cli.data_dir).await,
        Commands::Members {
            codes,
            max_pages,
            pace_secs,
        } => commands::members::run(&cli.data_dir, codes, max_pages, pace_secs).await,
        Commands::Run {
            max_pages,
            pace_secs,
        } => {
            commands::blocks::run(&cli.data_dir).await?;
            commands::members::run(&cli.data_dir, None, max_pages, pace_secs).await
        }
    }
}
