//! Command-line interface for tuneboard.
//!
//! This module provides CLI commands for looking up song metadata and for
//! talking to the ranking backend (rankings, comparisons, recommendations,
//! posts, friends).

mod commands;

pub use commands::{Cli, Commands, run_command};
