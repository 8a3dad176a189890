//! YouTube Data API v3 client.
//!
//! This module provides a typed client for the read-only slice of the YouTube
//! Data API v3 that the browsing surfaces need: trending videos for the home
//! page, keyword search, the short-form feed, and the video detail page
//! (video, channel, and comment threads).
//!
//! All requests are API-key authenticated single-page fetches; the client
//! holds no session state beyond the key and the shared HTTP client. The rows
//! persisted to the user's library reference these resources by ID and carry
//! a denormalized copy of the display fields (title, channel title, thumbnail
//! URL), so [`videos::Video`] and [`channels::Channel`] are what the library
//! store's save operations consume.

pub mod channels;
pub mod client;
pub mod comments;
pub mod search;
pub mod types;
pub mod videos;

// Re-export main types for convenience
pub use client::YouTubeClient;
pub use types::{PageInfo, Thumbnail, Thumbnails};

pub use channels::{Channel, ChannelSnippet, ChannelStatistics};
pub use comments::{Comment, CommentSnippet, CommentThread};
pub use search::{SearchResult, SearchSnippet};
pub use videos::{Video, VideoSnippet, VideoStatistics};

/// Formats a raw count string from the API for display (`1234567` → `1.2M`).
///
/// The API reports counts as decimal strings. Values of a million or more are
/// shown with an `M` suffix, a thousand or more with a `K` suffix, and
/// anything else (including non-numeric input) is returned verbatim.
pub fn format_count(count: &str) -> String {
    let Ok(num) = count.parse::<f64>() else {
        return count.to_string();
    };
    if num >= 1_000_000.0 {
        format!("{:.1}M", num / 1_000_000.0)
    } else if num >= 1_000.0 {
        format!("{:.1}K", num / 1_000.0)
    } else {
        count.to_string()
    }
}

/// Formats a timestamp for display as a US-style short date (`Jan 2, 2026`).
pub fn format_date(timestamp: jiff::Timestamp) -> String {
    let zoned = timestamp.to_zoned(jiff::tz::TimeZone::UTC);
    format!("{} {}, {}", zoned.strftime("%b"), zoned.day(), zoned.year())
}
