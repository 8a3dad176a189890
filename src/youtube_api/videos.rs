//! YouTube Videos API types.

use crate::youtube_api::types::{PageInfo, Thumbnails};
use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Response structure for the `videos.list` API call.
///
/// Contains a list of [`Video`] resources that match the request criteria,
/// along with pagination information in [`PageInfo`].
///
/// See: <https://developers.google.com/youtube/v3/docs/videos/list>
#[derive(Debug, Serialize, Deserialize)]
pub struct VideoListResponse {
    /// Identifies the API resource's type.
    ///
    /// The value will be `youtube#videoListResponse`.
    pub kind: String,
    /// A list of videos that match the request criteria.
    pub items: VecDeque<Video>,
    #[serde(rename = "pageInfo")]
    pub page_info: PageInfo,
}

/// A `video` resource represents a YouTube video.
///
/// See: <https://developers.google.com/youtube/v3/docs/videos#resource>
#[derive(Debug, Serialize, Deserialize)]
pub struct Video {
    /// The ID that YouTube uses to uniquely identify the video.
    pub id: String,
    /// Contains basic details about the video such as its title and channel.
    pub snippet: VideoSnippet,
    /// Contains statistics about the video.
    ///
    /// Only present when the request asked for the `statistics` part.
    pub statistics: Option<VideoStatistics>,
}

/// The snippet object contains basic details about the video.
///
/// See: <https://developers.google.com/youtube/v3/docs/videos#snippet>
#[derive(Debug, Serialize, Deserialize)]
pub struct VideoSnippet {
    /// The video's title.
    pub title: String,
    /// The video's description.
    #[serde(default)]
    pub description: String,
    /// The ID of the channel that the video was uploaded to.
    #[serde(rename = "channelId")]
    pub channel_id: String,
    /// Channel title for the channel that the video belongs to.
    #[serde(rename = "channelTitle")]
    pub channel_title: String,
    /// The date and time that the video was published.
    #[serde(rename = "publishedAt")]
    pub published_at: Timestamp,
    /// Thumbnail images associated with the video.
    pub thumbnails: Thumbnails,
}

/// Statistics about the video.
///
/// See: <https://developers.google.com/youtube/v3/docs/videos#statistics>
#[derive(Debug, Serialize, Deserialize)]
pub struct VideoStatistics {
    /// The number of times the video has been viewed.
    #[serde(rename = "viewCount")]
    pub view_count: Option<String>,
    /// The number of users who have indicated that they liked the video.
    #[serde(rename = "likeCount")]
    pub like_count: Option<String>,
    /// The number of comments for the video.
    #[serde(rename = "commentCount")]
    pub comment_count: Option<String>,
}
