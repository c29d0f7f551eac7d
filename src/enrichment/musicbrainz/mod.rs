//! MusicBrainz API integration
//!
//! Resolves raw song strings to recordings, either by direct MBID lookup or by
//! a one-result search, and reduces them to display fields.
//!
//! API docs: https://musicbrainz.org/doc/MusicBrainz_API

pub mod dto;
pub mod extract;
mod client;

pub use client::MusicBrainzClient;
pub use dto::RecordingRecord;
