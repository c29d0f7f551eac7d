//! Cover Art Archive API Data Transfer Objects
//!
//! The Cover Art Archive (https://coverartarchive.org) provides album artwork
//! for MusicBrainz releases and release groups. The listing shape is the same
//! for both endpoints.
//!
//! API Reference: https://wiki.musicbrainz.org/Cover_Art_Archive/API

use serde::{Deserialize, Serialize};

use crate::enrichment::lenient;

/// Cover art listing for a release or release group
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct CoverArtResponse {
    /// Array of images
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub images: Vec<Image>,
    /// URL of the release on MusicBrainz
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub release: Option<String>,
}

/// A single cover art image
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Image {
    /// Whether this is the front cover
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub front: bool,
    /// Whether this is the back cover
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub back: bool,
    /// Image types (Front, Back, Booklet, etc.)
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub types: Vec<String>,
    /// URL to full-size image
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub image: Option<String>,
    /// Thumbnail URLs
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub thumbnails: Thumbnails,
}

/// Available thumbnail sizes
///
/// The archive publishes both the legacy `small`/`large` names and the
/// numeric sizes.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Thumbnails {
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub small: Option<String>,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub large: Option<String>,
    #[serde(rename = "250", default, deserialize_with = "lenient::or_default")]
    pub size_250: Option<String>,
    #[serde(rename = "500", default, deserialize_with = "lenient::or_default")]
    pub size_500: Option<String>,
    #[serde(rename = "1200", default, deserialize_with = "lenient::or_default")]
    pub size_1200: Option<String>,
}

impl CoverArtResponse {
    /// The image to display: the one flagged front, else the first.
    pub fn display_image(&self) -> Option<&Image> {
        self.images
            .iter()
            .find(|img| img.front)
            .or_else(|| self.images.first())
    }

    /// URL of the display image: large thumbnail, then full image, then small thumbnail.
    pub fn display_url(&self) -> Option<String> {
        let image = self.display_image()?;
        non_empty(&image.thumbnails.large)
            .or_else(|| non_empty(&image.image))
            .or_else(|| non_empty(&image.thumbnails.small))
    }
}

fn non_empty(url: &Option<String>) -> Option<String> {
    url.as_ref().filter(|u| !u.is_empty()).cloned()
}
