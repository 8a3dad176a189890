//! YouTube Channels API types.

use crate::youtube_api::types::{PageInfo, Thumbnails};
use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Response structure for the `channels.list` API call.
///
/// Contains a list of [`Channel`] resources that match the request criteria,
/// along with pagination information in [`PageInfo`].
///
/// See: <https://developers.google.com/youtube/v3/docs/channels/list>
#[derive(Debug, Serialize, Deserialize)]
pub struct ChannelListResponse {
    /// Identifies the API resource's type.
    ///
    /// The value will be `youtube#channelListResponse`.
    pub kind: String,
    /// A list of channels that match the request criteria.
    #[serde(default)]
    pub items: VecDeque<Channel>,
    #[serde(rename = "pageInfo")]
    pub page_info: PageInfo,
}

/// A `channel` resource contains information about a YouTube channel.
///
/// See: <https://developers.google.com/youtube/v3/docs/channels#resource>
#[derive(Debug, Serialize, Deserialize)]
pub struct Channel {
    /// The ID that YouTube uses to uniquely identify the channel.
    pub id: String,
    /// Contains basic details about the channel.
    pub snippet: ChannelSnippet,
    /// Contains statistics about the channel.
    ///
    /// Only present when the request asked for the `statistics` part.
    pub statistics: Option<ChannelStatistics>,
}

/// The snippet object contains basic details about the channel.
///
/// See: <https://developers.google.com/youtube/v3/docs/channels#snippet>
#[derive(Debug, Serialize, Deserialize)]
pub struct ChannelSnippet {
    /// The channel's title.
    pub title: String,
    /// The channel's description.
    #[serde(default)]
    pub description: String,
    /// The date and time that the channel was created.
    #[serde(rename = "publishedAt")]
    pub published_at: Timestamp,
    /// Thumbnail images associated with the channel.
    pub thumbnails: Thumbnails,
}

/// Statistics about the channel.
///
/// See: <https://developers.google.com/youtube/v3/docs/channels#statistics>
#[derive(Debug, Serialize, Deserialize)]
pub struct ChannelStatistics {
    /// The number of subscribers that the channel has.
    ///
    /// Hidden for channels that opted out of showing subscriber counts.
    #[serde(rename = "subscriberCount")]
    pub subscriber_count: Option<String>,
    /// The number of public videos uploaded to the channel.
    #[serde(rename = "videoCount")]
    pub video_count: Option<String>,
}
