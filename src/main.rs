//! Flatten a Google Play Music Takeout export.
//!
//! The export stores one CSV file per track, grouped into the library and one
//! directory per playlist. This tool collapses each collection into a single
//! sorted CSV file under the destination directory.

use anyhow::{Context, Result};
use clap::Parser;

mod cli;
mod config;
mod error;
mod flatten;
mod library;
mod runtime;

use cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();
    runtime::run(&cli).with_context(|| format!("failed to flatten {}", cli.source.display()))
}
