//! YouTube CommentThreads API types.

use crate::youtube_api::types::PageInfo;
use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Response structure for the `commentThreads.list` API call.
///
/// See: <https://developers.google.com/youtube/v3/docs/commentThreads/list>
#[derive(Debug, Serialize, Deserialize)]
pub struct CommentThreadListResponse {
    /// Identifies the API resource's type.
    ///
    /// The value will be `youtube#commentThreadListResponse`.
    pub kind: String,
    /// A list of comment threads that match the request criteria.
    #[serde(default)]
    pub items: VecDeque<CommentThread>,
    #[serde(rename = "pageInfo")]
    pub page_info: PageInfo,
}

/// A comment thread: a top-level comment plus reply metadata.
///
/// See: <https://developers.google.com/youtube/v3/docs/commentThreads#resource>
#[derive(Debug, Serialize, Deserialize)]
pub struct CommentThread {
    /// The ID that YouTube uses to uniquely identify the comment thread.
    pub id: String,
    /// Basic details about the comment thread.
    pub snippet: CommentThreadSnippet,
}

/// The snippet object of a comment thread.
#[derive(Debug, Serialize, Deserialize)]
pub struct CommentThreadSnippet {
    /// The thread's top-level comment.
    #[serde(rename = "topLevelComment")]
    pub top_level_comment: Comment,
    /// The total number of replies to the top-level comment.
    #[serde(rename = "totalReplyCount", default)]
    pub total_reply_count: u32,
}

/// A single comment resource.
///
/// See: <https://developers.google.com/youtube/v3/docs/comments#resource>
#[derive(Debug, Serialize, Deserialize)]
pub struct Comment {
    /// The ID that YouTube uses to uniquely identify the comment.
    pub id: String,
    /// Basic details about the comment.
    pub snippet: CommentSnippet,
}

/// The snippet object of a comment.
#[derive(Debug, Serialize, Deserialize)]
pub struct CommentSnippet {
    /// The display name of the user who posted the comment.
    #[serde(rename = "authorDisplayName")]
    pub author_display_name: String,
    /// The avatar URL of the user who posted the comment.
    #[serde(rename = "authorProfileImageUrl")]
    pub author_profile_image_url: Option<String>,
    /// The comment's text, with basic HTML formatting.
    #[serde(rename = "textDisplay")]
    pub text_display: String,
    /// The number of likes the comment has received.
    #[serde(rename = "likeCount", default)]
    pub like_count: u32,
    /// The date and time the comment was originally published.
    #[serde(rename = "publishedAt")]
    pub published_at: Timestamp,
}
