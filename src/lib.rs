//! tubedeck: a terminal client for browsing YouTube with a hosted backend
//! for the user's library.
//!
//! The crate splits into three layers:
//! - [`youtube_api`]: typed, API-key-authenticated client for the public
//!   video metadata endpoints (trending, search, shorts, video/channel
//!   detail, comments);
//! - [`backend`]: the hosted backend — the REST favorites table, the edge
//!   function that hands out the YouTube API key, and the session context
//!   from the external identity provider;
//! - [`library`]: the library store, the stateful heart of the application,
//!   plus [`player`] and [`shorts`] for the two composite browsing surfaces.

use crate::backend::{BackendClient, Session, UserId};
use crate::youtube_api::YouTubeClient;
use eyre::Context;

pub mod backend;
pub mod library;
pub mod notify;
pub mod player;
pub mod shorts;
pub mod youtube_api;

/// Runtime configuration for the terminal front end.
///
/// The backend project URL and publishable key are required; the YouTube API
/// key is normally fetched from the backend's `get-youtube-key` function and
/// the environment variable only overrides it for local development. The user
/// ID stands in for the external identity provider's session.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub backend_url: String,
    pub backend_key: String,
    pub youtube_api_key: Option<String>,
    pub user: Option<String>,
}

impl AppConfig {
    /// Reads the configuration from `TUBEDECK_*` environment variables.
    pub fn from_env() -> eyre::Result<Self> {
        Ok(Self {
            backend_url: std::env::var("TUBEDECK_BACKEND_URL")
                .context("TUBEDECK_BACKEND_URL must be set")?,
            backend_key: std::env::var("TUBEDECK_BACKEND_KEY")
                .context("TUBEDECK_BACKEND_KEY must be set")?,
            youtube_api_key: std::env::var("TUBEDECK_YOUTUBE_API_KEY").ok(),
            user: std::env::var("TUBEDECK_USER").ok(),
        })
    }

    /// Where the YouTube API key comes from, for the settings display.
    pub fn youtube_key_source(&self) -> &'static str {
        if self.youtube_api_key.is_some() {
            "environment override"
        } else {
            "backend get-youtube-key function"
        }
    }

    /// The session this configuration describes.
    pub fn session(&self) -> Session {
        match &self.user {
            Some(user) => Session::authenticated(UserId::new(user.clone())),
            None => Session::anonymous(),
        }
    }
}

/// Builds the two remote clients from the configuration.
///
/// The YouTube API key is resolved first: from the environment override if
/// present, otherwise by invoking the backend's `get-youtube-key` function,
/// the same way every page of the browsing surface bootstraps itself.
pub async fn setup_clients(config: &AppConfig) -> eyre::Result<(YouTubeClient, BackendClient)> {
    let http = reqwest::Client::new();
    let backend = BackendClient::new(&config.backend_url, &config.backend_key, http.clone());

    let api_key = match &config.youtube_api_key {
        Some(key) => {
            tracing::debug!("using YouTube API key from environment override");
            key.clone()
        }
        None => backend
            .invoke_get_youtube_key()
            .await
            .context("fetch YouTube API key from backend")?,
    };

    Ok((YouTubeClient::new(api_key, http), backend))
}
