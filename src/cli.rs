//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The installer takes no positional arguments and no tuning flags: the
//! release version, URL, and destination are fixed, so only output-control
//! flags exist.

use clap::Parser;

/// Flutterup - non-interactive Flutter SDK install helper.
#[derive(Debug, Parser)]
#[command(name = "flutterup")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Minimal output
    #[arg(short, long)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}
