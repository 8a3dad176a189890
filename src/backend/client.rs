//! Core hosted-backend client functionality.

use eyre::Context;
use http::Method;
use serde::Deserialize;
use serde::Serialize;
use tracing::instrument;

/// Client for the hosted backend: the REST interface over the favorites table
/// and the edge functions.
///
/// Authenticated with the project's publishable (anon) key; per-row
/// authorization is enforced server-side by the table's row-level access
/// policy, not by this client.
#[derive(Debug, Clone)]
pub struct BackendClient {
    /// Project base URL, without a trailing slash.
    base_url: String,
    /// Publishable API key, sent as both `apikey` and bearer token.
    anon_key: String,
    /// HTTP client for API requests.
    client: reqwest::Client,
}

/// Extra request behavior understood by the REST interface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Prefer {
    /// No `Prefer` header.
    None,
    /// `Prefer: return=representation` — have writes echo the affected rows.
    Representation,
}

impl BackendClient {
    /// Creates a new backend client for the given project URL and key.
    pub fn new(base_url: impl Into<String>, anon_key: impl Into<String>, client: reqwest::Client) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            base_url,
            anon_key: anon_key.into(),
            client,
        }
    }

    /// Makes an authenticated request to the backend with common error handling.
    ///
    /// This method consolidates the shared logic across all backend requests:
    /// - `apikey` and `Authorization` header setup
    /// - Query parameters and optional JSON body
    /// - Status code validation and error handling
    ///
    /// # Returns
    ///
    /// The raw [`reqwest::Response`] for endpoint-specific JSON parsing.
    #[instrument(skip(self, json_body), ret, level = tracing::Level::TRACE)]
    pub(crate) async fn make_request(
        &self,
        method: Method,
        path: &str,
        query_params: &[(&str, String)],
        json_body: Option<&impl Serialize>,
        prefer: Prefer,
    ) -> eyre::Result<reqwest::Response> {
        let url = format!("{}{}", self.base_url, path);

        let mut request = self
            .client
            .request(method.clone(), &url)
            .header("apikey", &self.anon_key)
            .header("Authorization", format!("Bearer {}", self.anon_key))
            .query(query_params);

        if let Some(body) = json_body {
            request = request
                .header("Content-Type", "application/json")
                .json(body);
        }

        if prefer == Prefer::Representation {
            request = request.header("Prefer", "return=representation");
        }

        let response = request
            .send()
            .await
            .with_context(|| format!("send {} request to backend: {}", method, url))?;

        let status_code = response.status();
        if !status_code.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(eyre::eyre!(
                "backend {} request failed with status {}: {}",
                method,
                status_code,
                error_text
            ));
        }

        Ok(response)
    }

    /// Fetches the YouTube API key from the `get-youtube-key` edge function.
    ///
    /// The key lives server-side so it never ships with the client; every
    /// session obtains it through this call before talking to the video
    /// platform.
    #[instrument(skip(self))]
    pub async fn invoke_get_youtube_key(&self) -> eyre::Result<String> {
        #[derive(Debug, Deserialize)]
        struct GetYoutubeKeyResponse {
            #[serde(rename = "YOUTUBE_API_KEY")]
            youtube_api_key: String,
        }

        let response = self
            .make_request(
                Method::POST,
                "/functions/v1/get-youtube-key",
                &[],
                Some(&serde_json::json!({})),
                Prefer::None,
            )
            .await?;

        let body: GetYoutubeKeyResponse = response
            .json()
            .await
            .context("parse get-youtube-key response as JSON")?;

        tracing::debug!("fetched YouTube API key from backend");

        Ok(body.youtube_api_key)
    }
}
