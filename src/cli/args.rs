//! CLI argument definitions using clap
//!
//! Commands:
//! - bookstore serve [--config <path>]

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// bookstore - a minimal HTTP book service backed by a relational table
#[derive(Parser, Debug)]
#[command(name = "bookstore")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the HTTP server
    Serve {
        /// Path to configuration file; defaults apply when omitted
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
