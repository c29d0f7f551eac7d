//! Tuneboard - client library for a song-ranking social app.
//!
//! - [`enrichment`]: rate-limited MusicBrainz/Cover Art Archive lookups that
//!   turn raw song strings into display metadata
//! - [`api`]: typed wrappers over the ranking backend's concept endpoints
//! - [`stores`]: in-memory session, posts, ranking and recommendation state
//! - [`config`]: TOML configuration in the OS config directory

pub mod api;
pub mod cli;
pub mod config;
pub mod enrichment;
pub mod error;
pub mod stores;
#[cfg(test)]
pub mod test_utils;
