//! YouTube Search API types.

use crate::youtube_api::types::{PageInfo, Thumbnails};
use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Response structure for the `search.list` API call.
///
/// See: <https://developers.google.com/youtube/v3/docs/search/list>
#[derive(Debug, Serialize, Deserialize)]
pub struct SearchListResponse {
    /// Identifies the API resource's type.
    ///
    /// The value will be `youtube#searchListResponse`.
    pub kind: String,
    /// A list of results that match the search criteria.
    #[serde(default)]
    pub items: VecDeque<SearchResult>,
    #[serde(rename = "pageInfo")]
    pub page_info: PageInfo,
}

/// A search result describing a video that matches the query.
///
/// Search results are not full `video` resources: the ID is nested inside an
/// `id` object, and no statistics are included. Use
/// [`crate::youtube_api::YouTubeClient::get_video`] to resolve the full
/// resource when needed.
///
/// See: <https://developers.google.com/youtube/v3/docs/search#resource>
#[derive(Debug, Serialize, Deserialize)]
pub struct SearchResult {
    /// The object identifying the matched resource.
    pub id: SearchResultId,
    /// Basic details about the matched video.
    pub snippet: SearchSnippet,
}

/// The `id` object of a search result.
///
/// Since all searches issued by this application request `type=video`, only
/// the video variant is modeled.
#[derive(Debug, Serialize, Deserialize)]
pub struct SearchResultId {
    /// The ID that YouTube uses to uniquely identify the matched video.
    #[serde(rename = "videoId")]
    pub video_id: String,
}

/// Basic details about a search result.
///
/// See: <https://developers.google.com/youtube/v3/docs/search#snippet>
#[derive(Debug, Serialize, Deserialize)]
pub struct SearchSnippet {
    /// The title of the matched video.
    pub title: String,
    /// A description of the matched video.
    #[serde(default)]
    pub description: String,
    /// The ID of the channel that published the video.
    #[serde(rename = "channelId")]
    pub channel_id: String,
    /// The title of the channel that published the video.
    #[serde(rename = "channelTitle")]
    pub channel_title: String,
    /// The date and time that the video was published.
    #[serde(rename = "publishedAt")]
    pub published_at: Timestamp,
    /// Thumbnail images associated with the video.
    pub thumbnails: Thumbnails,
}
