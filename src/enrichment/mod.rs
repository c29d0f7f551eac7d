//! Song metadata enrichment - turns raw song strings into title/artist/artwork.
//!
//! # Architecture
//!
//! This module follows a clean separation between:
//! - **Domain models** (`domain.rs`) - `SongMetadata`, `LookupKey`, errors
//! - **API DTOs** (`musicbrainz/dto.rs`, `coverart/dto.rs`) - Response shapes
//! - **Extractor** (`musicbrainz/extract.rs`) - Display fields from recordings
//! - **Clients** - HTTP clients for MusicBrainz and the Cover Art Archive
//! - **Rate limiter** - One shared throttle for both services
//! - **Service** - Orchestration of a single lookup and of batches
//! - **Cache** - Session-scoped, at-most-once-per-key memoization
//!
//! Enrichment is best-effort decoration: no function in the public surface
//! returns an error. A song that cannot be found is `None`; a song without
//! cover art has `artwork_url: None`.
//!
//! # Usage
//!
//! ```ignore
//! use std::sync::Arc;
//! use tuneboard::enrichment::{EnrichmentConfig, EnrichmentService, MetadataCache};
//!
//! let service = Arc::new(EnrichmentService::new(&EnrichmentConfig::default())?);
//! let cache = MetadataCache::new(service);
//!
//! if let Some(meta) = cache.get("Queen - Bohemian Rhapsody").await {
//!     println!("{} by {}", meta.title, meta.artist);
//! }
//! ```

pub mod cache;
pub mod coverart;
pub mod domain;
pub mod http;
pub(crate) mod lenient;
pub mod musicbrainz;
pub mod rate_limit;
pub mod service;
pub mod traits;

pub use cache::MetadataCache;
pub use coverart::{ArtworkScope, CoverArtClient};
pub use domain::{EnrichmentError, LookupKey, SongMetadata};
pub use musicbrainz::MusicBrainzClient;
pub use rate_limit::RateLimiter;
pub use service::{EnrichmentConfig, EnrichmentService};
pub use traits::MetadataLookup;
