//! Command-line interface definitions using clap
//!
//! This module defines the CLI structure for newsgauge using clap's derive macros.

use clap::{Parser, Subcommand};

/// Newsgauge - analytics reports over a news site's catalog and access log
#[derive(Parser)]
#[command(name = "newsgauge")]
#[command(version)]
#[command(
    about = "Reports top articles, top authors and high-error days from the newsdata database",
    long_about = None
)]
pub struct Cli {
    /// Database URL (postgres://, mysql://, sqlite://) or a bare database
    /// name expanded to postgres://localhost/{name}. If omitted, prompts
    /// on stdin with the configured default ("newsdata").
    #[arg(long, short = 'd', global = true)]
    pub database: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Generate the three reports (default command)
    Report {
        /// Number of top articles to list
        #[arg(long)]
        top: Option<usize>,

        /// Error-rate threshold as a plain ratio (0.01 = 1%)
        #[arg(long)]
        threshold: Option<f64>,

        /// Emit the report bundle as JSON instead of formatted text
        #[arg(long)]
        json: bool,
    },

    /// Create the newsdata tables in the target database
    Migrate,
}
