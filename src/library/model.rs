//! Favorite row model and the stored-title convention adapter.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

/// Prefix that marks a stored favorite row as a channel favorite.
///
/// The favorites table has no discriminant column; historically the row kind
/// was smuggled through the `title` text, with channel rows titled
/// `Channel: <name>`. The rest of the crate works with the explicit
/// [`FavoriteKind`] and only this module knows about the prefix, keeping new
/// rows wire-compatible with rows written by older clients.
pub const CHANNEL_TITLE_PREFIX: &str = "Channel: ";

/// Matching is case-insensitive on the `Channel:` part only.
const CHANNEL_TITLE_MARKER: &str = "Channel:";

/// Which of the two entities a favorite row represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FavoriteKind {
    /// A saved video; `video_id` holds the video's ID.
    Video,
    /// A favorited channel; `video_id` holds the channel's ID.
    Channel,
}

fn is_channel_title(title: &str) -> bool {
    title
        .get(..CHANNEL_TITLE_MARKER.len())
        .is_some_and(|prefix| prefix.eq_ignore_ascii_case(CHANNEL_TITLE_MARKER))
}

/// A persisted favorite row, as stored in the remote `favorites` table.
///
/// `id` and `created_at` are assigned by the remote table on insert. The
/// `video_id` column is overloaded: it holds a video ID for video rows and a
/// channel ID for channel rows (see [`FavoriteRow::kind`]).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FavoriteRow {
    /// Opaque unique row identifier, assigned by the remote table.
    pub id: String,
    /// The owning user, if any. Rows written by current clients always carry
    /// a user; null only occurs in rows left behind by older clients.
    pub user_id: Option<String>,
    /// The favorited video's ID, or the favorited channel's ID for channel rows.
    pub video_id: String,
    /// The video's display title, or `Channel: <name>` for channel rows.
    pub title: String,
    /// Display name of the associated channel (populated for both kinds).
    pub channel_title: String,
    /// Image URL for display.
    #[serde(default)]
    pub thumbnail_url: String,
    /// Creation timestamp; lists are ordered by this, newest first.
    pub created_at: Timestamp,
}

impl FavoriteRow {
    /// Classifies this row by the stored title convention.
    pub fn kind(&self) -> FavoriteKind {
        if is_channel_title(&self.title) {
            FavoriteKind::Channel
        } else {
            FavoriteKind::Video
        }
    }

    /// The name to render for this row.
    ///
    /// For channel rows the `title` remainder is not reliably the channel
    /// name, so the duplicated `channel_title` column is authoritative.
    pub fn display_title(&self) -> &str {
        match self.kind() {
            FavoriteKind::Video => &self.title,
            FavoriteKind::Channel => &self.channel_title,
        }
    }
}

/// Display metadata for a video about to be saved to the library.
#[derive(Debug, Clone)]
pub struct VideoMetadata {
    pub video_id: String,
    pub title: String,
    pub channel_title: String,
    pub thumbnail_url: String,
}

impl From<&crate::youtube_api::Video> for VideoMetadata {
    fn from(video: &crate::youtube_api::Video) -> Self {
        Self {
            video_id: video.id.clone(),
            title: video.snippet.title.clone(),
            channel_title: video.snippet.channel_title.clone(),
            thumbnail_url: video.snippet.thumbnails.default_url(),
        }
    }
}

/// Display metadata for a channel about to be favorited.
#[derive(Debug, Clone)]
pub struct ChannelMetadata {
    pub channel_id: String,
    pub title: String,
    pub thumbnail_url: String,
}

impl From<&crate::youtube_api::Channel> for ChannelMetadata {
    fn from(channel: &crate::youtube_api::Channel) -> Self {
        Self {
            channel_id: channel.id.clone(),
            title: channel.snippet.title.clone(),
            thumbnail_url: channel.snippet.thumbnails.default_url(),
        }
    }
}

/// A favorite row ready for insertion; the remote table assigns `id` and
/// `created_at`.
#[derive(Debug, Clone, Serialize)]
pub struct NewFavorite {
    pub user_id: String,
    pub video_id: String,
    pub title: String,
    pub channel_title: String,
    pub thumbnail_url: String,
}

impl NewFavorite {
    /// Builds a video row for the given user.
    pub fn video(user_id: &str, video: &VideoMetadata) -> Self {
        Self {
            user_id: user_id.to_string(),
            video_id: video.video_id.clone(),
            title: video.title.clone(),
            channel_title: video.channel_title.clone(),
            thumbnail_url: video.thumbnail_url.clone(),
        }
    }

    /// Builds a channel row for the given user, applying the stored-title
    /// convention (`Channel: <name>`) and duplicating the display name into
    /// `channel_title`.
    pub fn channel(user_id: &str, channel: &ChannelMetadata) -> Self {
        Self {
            user_id: user_id.to_string(),
            video_id: channel.channel_id.clone(),
            title: format!("{CHANNEL_TITLE_PREFIX}{}", channel.title),
            channel_title: channel.title.clone(),
            thumbnail_url: channel.thumbnail_url.clone(),
        }
    }

    /// Classifies this row by the stored title convention.
    pub fn kind(&self) -> FavoriteKind {
        if is_channel_title(&self.title) {
            FavoriteKind::Channel
        } else {
            FavoriteKind::Video
        }
    }
}
