// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! # efiscodec CLI
//!
//! Command-line tool for converting aircraft checklists between formats.
//!
//! ## Usage
//!
//! ```sh
//! # Show the detected format
//! efiscodec detect c172.ace
//!
//! # Show groups, checklists and item counts
//! efiscodec inspect c172.ace
//!
//! # Convert, picking the target from the output extension
//! efiscodec convert c172.ace c172.fmd
//!
//! # Convert to GRT text with a custom dialect
//! efiscodec convert c172.ace c172.txt --to grt --text-config grt.toml
//! ```

mod cmd;
mod common;

use std::process;

use clap::{ArgAction, Parser, Subcommand};
use cmd::{ConvertCmd, DetectCmd, InspectCmd};
use common::Result;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// efiscodec - aircraft checklist converter
///
/// Reads Garmin ACE, Dynon/AFS, GRT, ForeFlight, Garmin Pilot and JSON
/// checklists and writes any of them, or a PDF.
#[derive(Parser, Clone)]
#[command(name = "efiscodec")]
#[command(about = "Aircraft checklist format converter", long_about = None)]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(author = "ArcheBase")]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

/// Available commands
#[derive(Subcommand, Clone)]
enum Commands {
    /// Print the detected format of a file
    Detect(DetectCmd),

    /// Show file name, metadata, groups and checklists
    Inspect(InspectCmd),

    /// Convert a checklist file to another format
    Convert(ConvertCmd),
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

async fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Detect(cmd) => cmd.run(),
        Commands::Inspect(cmd) => cmd.run().await,
        Commands::Convert(cmd) => cmd.run().await,
    }
}

#[tokio::main]
async fn main() {
    let result = run().await;

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
