//! Cover Art Archive integration
//!
//! Lists album artwork for MusicBrainz releases and release groups and picks
//! the URL to display. No API key required.

pub mod dto;
mod client;

pub use client::{ArtworkScope, CoverArtClient};
pub use dto::CoverArtResponse;
