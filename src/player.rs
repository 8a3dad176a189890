//! Video detail page aggregation.
//!
//! Gathers everything the player view renders in one pass: the video, its
//! channel, top-level comments, and whether the viewer already has the video
//! saved or the channel favorited. Only the video fetch itself is fatal;
//! everything else degrades (missing channel panel, empty comments, flags
//! defaulting to off) so the page can still render.

use crate::backend::Session;
use crate::library::model::{ChannelMetadata, FavoriteKind, NewFavorite, VideoMetadata};
use crate::library::store::LibraryError;
use crate::library::table::FavoritesTable;
use crate::notify::Notifier;
use crate::youtube_api::{Channel, CommentThread, Video, YouTubeClient};
use eyre::Context;

/// How many comment threads the player view shows.
const COMMENTS_SHOWN: u32 = 20;

/// Everything the video detail page renders, plus the two favorite flags the
/// save/favorite buttons reflect.
#[derive(Debug)]
pub struct PlayerPage {
    pub video: Video,
    /// The uploading channel; `None` when the channel lookup failed.
    pub channel: Option<Channel>,
    pub comments: Vec<CommentThread>,
    /// Whether the viewer already has this video in their library.
    pub video_saved: bool,
    /// Whether the viewer already has the uploading channel favorited.
    pub favorite_channel: bool,
}

impl PlayerPage {
    /// Loads the page for one video.
    ///
    /// Errors only if the video itself cannot be fetched. Channel, comments,
    /// and favorite probes are tolerated failures: they are logged and the
    /// page renders without them.
    pub async fn load<T: FavoritesTable>(
        yt: &YouTubeClient,
        table: &T,
        video_id: &str,
    ) -> eyre::Result<Self> {
        let video = yt
            .get_video(video_id)
            .await
            .context("fetch video details")?;

        let channel = match yt.get_channel(&video.snippet.channel_id).await {
            Ok(channel) => Some(channel),
            Err(e) => {
                tracing::warn!(error = %e, channel_id = video.snippet.channel_id, "channel lookup failed");
                None
            }
        };

        let comments = match yt.list_comments(video_id, COMMENTS_SHOWN).await {
            Ok(comments) => comments,
            Err(e) => {
                // Comments are disabled on plenty of videos; render without.
                tracing::warn!(error = %e, video_id, "comments unavailable");
                Vec::new()
            }
        };

        let video_saved = match table.find(video_id, FavoriteKind::Video).await {
            Ok(row) => row.is_some(),
            Err(e) => {
                tracing::warn!(error = %e, "saved-video probe failed");
                false
            }
        };

        let favorite_channel = match table
            .find(&video.snippet.channel_id, FavoriteKind::Channel)
            .await
        {
            Ok(row) => row.is_some(),
            Err(e) => {
                tracing::warn!(error = %e, "favorite-channel probe failed");
                false
            }
        };

        Ok(Self {
            video,
            channel,
            comments,
            video_saved,
            favorite_channel,
        })
    }

    /// Flips the saved state of the page's video.
    ///
    /// When already saved, deletes by video ID (the page does not know the
    /// row ID); otherwise inserts a fresh row for the session's user. The
    /// flag only changes once the remote call succeeded.
    pub async fn toggle_save_video<T: FavoritesTable, N: Notifier>(
        &mut self,
        table: &T,
        notify: &N,
        session: &Session,
    ) -> Result<(), LibraryError> {
        let Some(user) = session.current_user() else {
            notify.error("You need to be signed in to update your library");
            return Err(LibraryError::Unauthenticated);
        };

        if self.video_saved {
            match table.delete_by_video(&self.video.id, FavoriteKind::Video).await {
                Ok(()) => {
                    notify.success("Video removed from library");
                    self.video_saved = false;
                    Ok(())
                }
                Err(e) => {
                    tracing::error!(error = %e, video_id = self.video.id, "failed to unsave video");
                    notify.error("Failed to update library");
                    Err(LibraryError::MutationFailed(e))
                }
            }
        } else {
            let row = NewFavorite::video(user.as_str(), &VideoMetadata::from(&self.video));
            match table.insert(row).await {
                Ok(_) => {
                    notify.success("Video added to library");
                    self.video_saved = true;
                    Ok(())
                }
                Err(e) => {
                    tracing::error!(error = %e, video_id = self.video.id, "failed to save video");
                    notify.error("Failed to update library");
                    Err(LibraryError::MutationFailed(e))
                }
            }
        }
    }

    /// Flips the favorited state of the page's channel.
    ///
    /// A no-op when the channel panel did not load (there is nothing to act
    /// on), matching the button being absent from the page.
    pub async fn toggle_favorite_channel<T: FavoritesTable, N: Notifier>(
        &mut self,
        table: &T,
        notify: &N,
        session: &Session,
    ) -> Result<(), LibraryError> {
        let Some(channel) = &self.channel else {
            return Ok(());
        };

        let Some(user) = session.current_user() else {
            notify.error("You need to be signed in to update your favorites");
            return Err(LibraryError::Unauthenticated);
        };

        if self.favorite_channel {
            match table.delete_by_video(&channel.id, FavoriteKind::Channel).await {
                Ok(()) => {
                    notify.success("Channel removed from favorites");
                    self.favorite_channel = false;
                    Ok(())
                }
                Err(e) => {
                    tracing::error!(error = %e, channel_id = channel.id, "failed to unfavorite channel");
                    notify.error("Failed to update favorites");
                    Err(LibraryError::MutationFailed(e))
                }
            }
        } else {
            let row = NewFavorite::channel(user.as_str(), &ChannelMetadata::from(channel));
            match table.insert(row).await {
                Ok(_) => {
                    notify.success("Channel added to favorites");
                    self.favorite_channel = true;
                    Ok(())
                }
                Err(e) => {
                    tracing::error!(error = %e, channel_id = channel.id, "failed to favorite channel");
                    notify.error("Failed to update favorites");
                    Err(LibraryError::MutationFailed(e))
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::UserId;
    use crate::library::model::FavoriteRow;
    use crate::youtube_api::types::Thumbnails;
    use crate::youtube_api::{ChannelSnippet, VideoSnippet};
    use jiff::Timestamp;
    use std::sync::Arc;
    use std::sync::Mutex;

    /// Minimal table fake covering the calls the toggles make.
    #[derive(Clone, Default)]
    struct FakeTable(Arc<Mutex<Vec<FavoriteRow>>>);

    impl FavoritesTable for FakeTable {
        async fn list(
            &self,
            _user: &UserId,
            _kind: FavoriteKind,
        ) -> eyre::Result<Vec<FavoriteRow>> {
            unimplemented!("toggles never list");
        }

        async fn find(
            &self,
            video_id: &str,
            kind: FavoriteKind,
        ) -> eyre::Result<Option<FavoriteRow>> {
            Ok(self
                .0
                .lock()
                .unwrap()
                .iter()
                .find(|r| r.video_id == video_id && r.kind() == kind)
                .cloned())
        }

        async fn insert(&self, row: NewFavorite) -> eyre::Result<FavoriteRow> {
            let inserted = FavoriteRow {
                id: "row1".to_string(),
                user_id: Some(row.user_id),
                video_id: row.video_id,
                title: row.title,
                channel_title: row.channel_title,
                thumbnail_url: row.thumbnail_url,
                created_at: Timestamp::from_second(1).unwrap(),
            };
            self.0.lock().unwrap().push(inserted.clone());
            Ok(inserted)
        }

        async fn delete(&self, _row_id: &str) -> eyre::Result<()> {
            unimplemented!("toggles delete by video id");
        }

        async fn delete_by_video(&self, video_id: &str, kind: FavoriteKind) -> eyre::Result<()> {
            self.0
                .lock()
                .unwrap()
                .retain(|r| !(r.video_id == video_id && r.kind() == kind));
            Ok(())
        }
    }

    struct QuietNotifier;

    impl Notifier for QuietNotifier {
        fn success(&self, _message: &str) {}
        fn error(&self, _message: &str) {}
    }

    fn no_thumbnails() -> Thumbnails {
        serde_json::from_str("{}").unwrap()
    }

    fn page() -> PlayerPage {
        PlayerPage {
            video: Video {
                id: "v1".to_string(),
                snippet: VideoSnippet {
                    title: "Song A".to_string(),
                    description: String::new(),
                    channel_id: "c1".to_string(),
                    channel_title: "Acme".to_string(),
                    published_at: Timestamp::from_second(0).unwrap(),
                    thumbnails: no_thumbnails(),
                },
                statistics: None,
            },
            channel: Some(Channel {
                id: "c1".to_string(),
                snippet: ChannelSnippet {
                    title: "Acme".to_string(),
                    description: String::new(),
                    published_at: Timestamp::from_second(0).unwrap(),
                    thumbnails: no_thumbnails(),
                },
                statistics: None,
            }),
            comments: Vec::new(),
            video_saved: false,
            favorite_channel: false,
        }
    }

    fn u1() -> Session {
        Session::authenticated(UserId::new("u1"))
    }

    #[tokio::test]
    async fn toggling_save_inserts_then_deletes() {
        let table = FakeTable::default();
        let mut page = page();

        page.toggle_save_video(&table, &QuietNotifier, &u1())
            .await
            .unwrap();
        assert!(page.video_saved);
        assert_eq!(table.0.lock().unwrap().len(), 1);

        page.toggle_save_video(&table, &QuietNotifier, &u1())
            .await
            .unwrap();
        assert!(!page.video_saved);
        assert!(table.0.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn toggling_favorite_applies_channel_convention() {
        let table = FakeTable::default();
        let mut page = page();

        page.toggle_favorite_channel(&table, &QuietNotifier, &u1())
            .await
            .unwrap();
        assert!(page.favorite_channel);

        let rows = table.0.lock().unwrap();
        assert_eq!(rows[0].title, "Channel: Acme");
        assert_eq!(rows[0].video_id, "c1");
        assert_eq!(rows[0].kind(), FavoriteKind::Channel);
    }

    #[tokio::test]
    async fn toggles_require_identity() {
        let table = FakeTable::default();
        let mut page = page();

        let err = page
            .toggle_save_video(&table, &QuietNotifier, &Session::anonymous())
            .await
            .unwrap_err();
        assert!(matches!(err, LibraryError::Unauthenticated));
        assert!(!page.video_saved);
        assert!(table.0.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn favorite_toggle_without_channel_is_a_noop() {
        let table = FakeTable::default();
        let mut page = page();
        page.channel = None;

        page.toggle_favorite_channel(&table, &QuietNotifier, &Session::anonymous())
            .await
            .unwrap();
        assert!(!page.favorite_channel);
    }
}
