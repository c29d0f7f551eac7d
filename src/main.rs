//! Tuneboard - song rankings, recommendations and metadata from the command line.
//!
//! Looks up display metadata for songs on MusicBrainz and the Cover Art
//! Archive, and talks to the ranking backend for rankings, comparisons,
//! recommendations, posts and friends.

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};
use tuneboard::cli;

fn main() -> anyhow::Result<()> {
    let args = cli::Cli::parse();

    // Initialize logging
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env().add_directive("tuneboard=info".parse()?))
        .init();

    cli::run_command(&args)
}
