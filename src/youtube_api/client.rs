//! Core YouTube API client functionality.

use crate::youtube_api::{
    channels::{Channel, ChannelListResponse},
    comments::{CommentThread, CommentThreadListResponse},
    search::{SearchListResponse, SearchResult},
    videos::{Video, VideoListResponse},
};
use eyre::Context;
use http::Method;
use tracing::instrument;

const API_BASE: &str = "https://www.googleapis.com/youtube/v3";

/// Client for interacting with the YouTube Data API v3.
///
/// All requests are authenticated with an API key (the browsing surface only
/// reads public data, so no OAuth flow is involved). The key is normally
/// obtained from the backend's `get-youtube-key` function at startup; see
/// [`crate::backend::BackendClient::invoke_get_youtube_key`].
#[derive(Debug, Clone)]
pub struct YouTubeClient {
    /// API key appended to every request.
    api_key: String,
    /// HTTP client for API requests.
    client: reqwest::Client,
}

impl YouTubeClient {
    /// Creates a new YouTube API client with the provided API key and HTTP client.
    pub fn new(api_key: String, client: reqwest::Client) -> Self {
        Self { api_key, client }
    }

    /// Makes a request to the YouTube API with common error handling.
    ///
    /// This method consolidates the shared logic across all YouTube API
    /// requests:
    /// - API key query parameter
    /// - Request building and query parameters
    /// - Status code validation and error handling
    ///
    /// # Returns
    ///
    /// The raw [`reqwest::Response`] for method-specific JSON parsing.
    #[instrument(skip(self), ret, level = tracing::Level::TRACE)]
    async fn make_request(
        &self,
        method: Method,
        url: &str,
        query_params: &[(&str, &str)],
    ) -> eyre::Result<reqwest::Response> {
        let response = self
            .client
            .request(method.clone(), url)
            .query(query_params)
            .query(&[("key", self.api_key.as_str())])
            .send()
            .await
            .with_context(|| format!("send {} request to YouTube API: {}", method, url))?;

        let status_code = response.status();
        if !status_code.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(eyre::eyre!(
                "YouTube API {} request failed with status {}: {}",
                method,
                status_code,
                error_text
            ));
        }

        Ok(response)
    }

    /// Searches for videos matching the given query.
    ///
    /// Uses the `search.list` API with `type=video`. Returns a single page of
    /// up to `max_results` results; search results carry only snippet data,
    /// not statistics.
    ///
    /// # API Reference
    ///
    /// <https://developers.google.com/youtube/v3/docs/search/list>
    #[instrument(skip(self))]
    pub async fn search_videos(
        &self,
        query: &str,
        max_results: u32,
    ) -> eyre::Result<Vec<SearchResult>> {
        let url = format!("{API_BASE}/search");
        let max_results_string = max_results.to_string();
        let query_params = [
            ("part", "snippet"),
            ("q", query),
            ("type", "video"),
            ("maxResults", max_results_string.as_str()),
        ];

        let response = self
            .make_request(Method::GET, &url, &query_params)
            .await?;

        let results: SearchListResponse = response
            .json()
            .await
            .context("parse YouTube search API response as JSON")?;

        tracing::debug!(
            query,
            returned_items = results.items.len(),
            "fetched search results"
        );

        Ok(results.items.into())
    }

    /// Fetches a page of short-form videos for the shorts feed.
    ///
    /// Uses the `search.list` API with `videoDuration=short` and a fixed
    /// `shorts` query, mirroring what the shorts browsing surface shows.
    ///
    /// # API Reference
    ///
    /// <https://developers.google.com/youtube/v3/docs/search/list>
    #[instrument(skip(self))]
    pub async fn search_shorts(&self, max_results: u32) -> eyre::Result<Vec<SearchResult>> {
        let url = format!("{API_BASE}/search");
        let max_results_string = max_results.to_string();
        let query_params = [
            ("part", "snippet"),
            ("q", "shorts"),
            ("type", "video"),
            ("videoDuration", "short"),
            ("regionCode", "US"),
            ("maxResults", max_results_string.as_str()),
        ];

        let response = self
            .make_request(Method::GET, &url, &query_params)
            .await?;

        let results: SearchListResponse = response
            .json()
            .await
            .context("parse YouTube shorts search response as JSON")?;

        tracing::debug!(
            returned_items = results.items.len(),
            "fetched shorts feed"
        );

        Ok(results.items.into())
    }

    /// Fetches the current most-popular videos for the home/trending page.
    ///
    /// Uses the `videos.list` API with `chart=mostPopular`, which returns full
    /// `video` resources including statistics.
    ///
    /// # API Reference
    ///
    /// <https://developers.google.com/youtube/v3/docs/videos/list>
    #[instrument(skip(self))]
    pub async fn trending_videos(&self, max_results: u32) -> eyre::Result<Vec<Video>> {
        let url = format!("{API_BASE}/videos");
        let max_results_string = max_results.to_string();
        let query_params = [
            ("part", "snippet,statistics"),
            ("chart", "mostPopular"),
            ("regionCode", "US"),
            ("maxResults", max_results_string.as_str()),
        ];

        let response = self
            .make_request(Method::GET, &url, &query_params)
            .await?;

        let videos: VideoListResponse = response
            .json()
            .await
            .context("parse YouTube videos API response as JSON")?;

        tracing::debug!(
            returned_items = videos.items.len(),
            "fetched trending videos"
        );

        Ok(videos.items.into())
    }

    /// Gets snippet and statistics for a single YouTube video by its ID.
    ///
    /// Uses the `videos.list` API with a specific video ID. Errors if the
    /// video does not exist or is not accessible.
    ///
    /// # API Reference
    ///
    /// <https://developers.google.com/youtube/v3/docs/videos/list>
    #[instrument(skip(self), ret)]
    pub async fn get_video(&self, video_id: &str) -> eyre::Result<Video> {
        let url = format!("{API_BASE}/videos");
        let query_params = [("part", "snippet,statistics"), ("id", video_id)];

        let response = self
            .make_request(Method::GET, &url, &query_params)
            .await?;

        let videos: VideoListResponse = response
            .json()
            .await
            .context("parse YouTube videos API response as JSON")?;

        tracing::debug!(
            video_id,
            returned_items = videos.items.len(),
            "fetched video details"
        );

        videos
            .items
            .into_iter()
            .next()
            .ok_or_else(|| eyre::eyre!("video not found: {}", video_id))
    }

    /// Gets snippet and statistics for a single YouTube channel by its ID.
    ///
    /// Uses the `channels.list` API with a specific channel ID. Errors if the
    /// channel does not exist.
    ///
    /// # API Reference
    ///
    /// <https://developers.google.com/youtube/v3/docs/channels/list>
    #[instrument(skip(self), ret)]
    pub async fn get_channel(&self, channel_id: &str) -> eyre::Result<Channel> {
        let url = format!("{API_BASE}/channels");
        let query_params = [("part", "snippet,statistics"), ("id", channel_id)];

        let response = self
            .make_request(Method::GET, &url, &query_params)
            .await?;

        let channels: ChannelListResponse = response
            .json()
            .await
            .context("parse YouTube channels API response as JSON")?;

        tracing::debug!(
            channel_id,
            returned_items = channels.items.len(),
            "fetched channel details"
        );

        channels
            .items
            .into_iter()
            .next()
            .ok_or_else(|| eyre::eyre!("channel not found: {}", channel_id))
    }

    /// Lists top-level comment threads for a video.
    ///
    /// Uses the `commentThreads.list` API. Callers on the player page treat a
    /// failure here as non-fatal (the video simply renders without comments),
    /// so this method only reports the error, it does not retry.
    ///
    /// # API Reference
    ///
    /// <https://developers.google.com/youtube/v3/docs/commentThreads/list>
    #[instrument(skip(self))]
    pub async fn list_comments(
        &self,
        video_id: &str,
        max_results: u32,
    ) -> eyre::Result<Vec<CommentThread>> {
        let url = format!("{API_BASE}/commentThreads");
        let max_results_string = max_results.to_string();
        let query_params = [
            ("part", "snippet"),
            ("videoId", video_id),
            ("maxResults", max_results_string.as_str()),
        ];

        let response = self
            .make_request(Method::GET, &url, &query_params)
            .await?;

        let threads: CommentThreadListResponse = response
            .json()
            .await
            .context("parse YouTube commentThreads API response as JSON")?;

        tracing::debug!(
            video_id,
            returned_items = threads.items.len(),
            "fetched comment threads"
        );

        Ok(threads.items.into())
    }
}
