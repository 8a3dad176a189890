//! Shared types for the YouTube API client.

use serde::{Deserialize, Serialize};

/// Paging details for lists of resources.
///
/// Includes the total number of items available and the number of resources
/// returned in a single page response.
///
/// See: <https://developers.google.com/youtube/v3/docs/pageInfo>
#[derive(Debug, Serialize, Deserialize)]
pub struct PageInfo {
    /// The total number of results in the result set.
    #[serde(rename = "totalResults")]
    pub total_results: u32,
    /// The number of results included in the API response.
    #[serde(rename = "resultsPerPage")]
    pub results_per_page: u32,
}

/// A single thumbnail image associated with a resource.
///
/// See: <https://developers.google.com/youtube/v3/docs/thumbnails>
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Thumbnail {
    /// The image's URL.
    pub url: String,
    /// The image's width, when reported by the API.
    pub width: Option<u32>,
    /// The image's height, when reported by the API.
    pub height: Option<u32>,
}

/// The map of thumbnail images associated with a resource.
///
/// Only the sizes this application actually renders are modeled; the API may
/// return additional keys (`standard`, `maxres`) which are ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Thumbnails {
    /// The default thumbnail image (120x90 for videos, 88x88 for channels).
    pub default: Option<Thumbnail>,
    /// A higher resolution version of the thumbnail image.
    pub medium: Option<Thumbnail>,
    /// A high resolution version of the thumbnail image.
    pub high: Option<Thumbnail>,
}

impl Thumbnails {
    /// Returns the default-size thumbnail URL, or an empty string if the API
    /// returned no usable image.
    ///
    /// Favorite rows persist a single image URL, so a missing thumbnail
    /// degrades to an empty string rather than an error.
    pub fn default_url(&self) -> String {
        self.default
            .as_ref()
            .or(self.medium.as_ref())
            .or(self.high.as_ref())
            .map(|t| t.url.clone())
            .unwrap_or_default()
    }

    /// Returns the highest resolution thumbnail URL available.
    ///
    /// Used by the shorts feed, which renders the `high` variant.
    pub fn best_url(&self) -> String {
        self.high
            .as_ref()
            .or(self.medium.as_ref())
            .or(self.default.as_ref())
            .map(|t| t.url.clone())
            .unwrap_or_default()
    }
}
