//! The library store: the user's saved videos and favorited channels.

use crate::backend::Session;
use crate::library::model::{ChannelMetadata, FavoriteKind, FavoriteRow, NewFavorite, VideoMetadata};
use crate::library::table::FavoritesTable;
use crate::notify::Notifier;
use thiserror::Error;

/// How a library operation failed.
///
/// Every variant has already been logged and surfaced as a notification by
/// the time the caller sees it; none are fatal, and the store's lists retain
/// their last-known-good contents.
#[derive(Debug, Error)]
pub enum LibraryError {
    /// A remote read failed while loading the library.
    #[error("failed to load library: {0}")]
    FetchFailed(eyre::Report),
    /// A remote insert or delete failed.
    #[error("failed to update library: {0}")]
    MutationFailed(eyre::Report),
    /// A mutation was attempted with no signed-in user.
    ///
    /// This is a client-side guard only; real authorization is enforced by
    /// the remote table's row-level access policy.
    #[error("not signed in")]
    Unauthenticated,
}

/// In-memory view of the current user's library, synchronized with the remote
/// favorites table.
///
/// The store owns two ordered lists (saved videos and favorited channels,
/// both newest first) plus a `loading` flag that is `true` exactly while a
/// fetch is in flight. All operations take the [`Session`] explicitly; an
/// absent identity clears the lists on fetch and refuses mutations.
///
/// Operations take `&mut self`, so overlapping calls on one store are
/// serialized by the exclusive borrow and a later fetch can never be
/// overwritten by an earlier one's late response.
#[derive(Debug)]
pub struct LibraryStore<T, N> {
    table: T,
    notify: N,
    videos: Vec<FavoriteRow>,
    channels: Vec<FavoriteRow>,
    loading: bool,
}

impl<T: FavoritesTable, N: Notifier> LibraryStore<T, N> {
    /// Creates an empty store. `loading` starts out `true`: the store is
    /// considered stale until the first [`LibraryStore::fetch_library`]
    /// completes.
    pub fn new(table: T, notify: N) -> Self {
        Self {
            table,
            notify,
            videos: Vec::new(),
            channels: Vec::new(),
            loading: true,
        }
    }

    /// The user's saved videos, newest first.
    pub fn videos(&self) -> &[FavoriteRow] {
        &self.videos
    }

    /// The user's favorited channels, newest first.
    pub fn channels(&self) -> &[FavoriteRow] {
        &self.channels
    }

    /// Whether a fetch is currently in flight.
    pub fn loading(&self) -> bool {
        self.loading
    }

    /// Synchronizes the lists with the remote table.
    ///
    /// With no signed-in user this clears both lists without a remote call.
    /// Otherwise the video list is fetched and replaced first, then the
    /// channel list; a failure leaves whatever was not yet replaced at its
    /// prior contents (partial success is possible and is not rolled back),
    /// raises one failure notification, and returns
    /// [`LibraryError::FetchFailed`].
    pub async fn fetch_library(&mut self, session: &Session) -> Result<(), LibraryError> {
        self.loading = true;
        let result = self.fetch_inner(session).await;
        self.loading = false;

        result.map_err(|e| {
            tracing::error!(error = %e, "failed to fetch library");
            self.notify.error("Failed to load library");
            LibraryError::FetchFailed(e)
        })
    }

    async fn fetch_inner(&mut self, session: &Session) -> eyre::Result<()> {
        let Some(user) = session.current_user() else {
            self.videos.clear();
            self.channels.clear();
            return Ok(());
        };

        let videos = self.table.list(user, FavoriteKind::Video).await?;
        tracing::debug!(user = %user, count = videos.len(), "fetched saved videos");
        self.videos = videos;

        let channels = self.table.list(user, FavoriteKind::Channel).await?;
        tracing::debug!(user = %user, count = channels.len(), "fetched favorited channels");
        self.channels = channels;

        Ok(())
    }

    /// Removes a saved video by its row ID, then re-syncs the lists.
    pub async fn remove_video(
        &mut self,
        session: &Session,
        row_id: &str,
    ) -> Result<(), LibraryError> {
        self.remove_row(
            session,
            row_id,
            "Video removed from library",
            "Failed to remove video from library",
        )
        .await
    }

    /// Removes a favorited channel by its row ID, then re-syncs the lists.
    pub async fn remove_channel(
        &mut self,
        session: &Session,
        row_id: &str,
    ) -> Result<(), LibraryError> {
        self.remove_row(
            session,
            row_id,
            "Channel removed from favorites",
            "Failed to remove channel from favorites",
        )
        .await
    }

    /// Saves a video to the library.
    ///
    /// Skips the insert (with an informational notification) when a row for
    /// the same video already exists. The existence check is best-effort, not
    /// atomic with the insert; two racing saves can still both pass it.
    pub async fn save_video(
        &mut self,
        session: &Session,
        video: &VideoMetadata,
    ) -> Result<(), LibraryError> {
        let user = self.require_user(session, "You need to be signed in to save videos")?;
        let row = NewFavorite::video(&user, video);
        self.insert_unless_present(
            row,
            FavoriteKind::Video,
            "Video is already in your library",
            "Video added to library",
            "Failed to update library",
        )
        .await
    }

    /// Adds a channel to the user's favorites.
    ///
    /// Same duplicate-handling caveats as [`LibraryStore::save_video`].
    pub async fn favorite_channel(
        &mut self,
        session: &Session,
        channel: &ChannelMetadata,
    ) -> Result<(), LibraryError> {
        let user = self.require_user(session, "You need to be signed in to favorite channels")?;
        let row = NewFavorite::channel(&user, channel);
        self.insert_unless_present(
            row,
            FavoriteKind::Channel,
            "Channel is already in your favorites",
            "Channel added to favorites",
            "Failed to update favorites",
        )
        .await
    }

    fn require_user(&self, session: &Session, message: &str) -> Result<String, LibraryError> {
        match session.current_user() {
            Some(user) => Ok(user.as_str().to_string()),
            None => {
                self.notify.error(message);
                Err(LibraryError::Unauthenticated)
            }
        }
    }

    async fn remove_row(
        &mut self,
        session: &Session,
        row_id: &str,
        removed: &str,
        failed: &str,
    ) -> Result<(), LibraryError> {
        // The delete itself is keyed by row ID alone; requiring a signed-in
        // user here is a client-side guard, not authorization.
        let _user = self.require_user(
            session,
            "You need to be signed in to remove items from your library",
        )?;

        if let Err(e) = self.table.delete(row_id).await {
            tracing::error!(error = %e, row_id, "failed to delete favorite row");
            self.notify.error(failed);
            return Err(LibraryError::MutationFailed(e));
        }

        self.notify.success(removed);

        // Re-sync instead of local list surgery. Costs two extra reads per
        // removal, which is fine at this scale.
        self.fetch_library(session).await
    }

    async fn insert_unless_present(
        &mut self,
        row: NewFavorite,
        kind: FavoriteKind,
        already: &str,
        added: &str,
        failed: &str,
    ) -> Result<(), LibraryError> {
        match self.table.find(&row.video_id, kind).await {
            Ok(Some(existing)) => {
                tracing::debug!(row_id = existing.id, "favorite already exists, skipping insert");
                self.notify.success(already);
                return Ok(());
            }
            Ok(None) => {}
            Err(e) => {
                // The pre-check is best-effort; a failed probe should not
                // block the save, it just loses duplicate protection.
                tracing::warn!(error = %e, "duplicate pre-check failed, inserting anyway");
            }
        }

        match self.table.insert(row).await {
            Ok(inserted) => {
                tracing::debug!(row_id = inserted.id, ?kind, "inserted favorite");
                self.notify.success(added);
                Ok(())
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to insert favorite row");
                self.notify.error(failed);
                Err(LibraryError::MutationFailed(e))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::UserId;
    use jiff::Timestamp;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicBool, AtomicI64, Ordering};
    use std::sync::Arc;

    #[derive(Default)]
    struct MockState {
        rows: Mutex<Vec<FavoriteRow>>,
        next_id: AtomicI64,
        fail_video_list: AtomicBool,
        fail_channel_list: AtomicBool,
        fail_delete: AtomicBool,
        fail_insert: AtomicBool,
        list_calls: AtomicI64,
        delete_calls: AtomicI64,
        insert_calls: AtomicI64,
    }

    #[derive(Clone, Default)]
    struct MockTable(Arc<MockState>);

    impl MockTable {
        /// Inserts a row directly, bypassing call counters. `at` is the
        /// creation time in seconds; higher means newer.
        fn seed(&self, user: &str, video_id: &str, title: &str, channel_title: &str, at: i64) -> String {
            let id = format!("row{}", self.0.next_id.fetch_add(1, Ordering::SeqCst));
            self.0.rows.lock().unwrap().push(FavoriteRow {
                id: id.clone(),
                user_id: Some(user.to_string()),
                video_id: video_id.to_string(),
                title: title.to_string(),
                channel_title: channel_title.to_string(),
                thumbnail_url: String::new(),
                created_at: Timestamp::from_second(at).unwrap(),
            });
            id
        }

        fn list_calls(&self) -> i64 {
            self.0.list_calls.load(Ordering::SeqCst)
        }

        fn delete_calls(&self) -> i64 {
            self.0.delete_calls.load(Ordering::SeqCst)
        }

        fn insert_calls(&self) -> i64 {
            self.0.insert_calls.load(Ordering::SeqCst)
        }
    }

    impl FavoritesTable for MockTable {
        async fn list(&self, user: &UserId, kind: FavoriteKind) -> eyre::Result<Vec<FavoriteRow>> {
            self.0.list_calls.fetch_add(1, Ordering::SeqCst);
            let failing = match kind {
                FavoriteKind::Video => &self.0.fail_video_list,
                FavoriteKind::Channel => &self.0.fail_channel_list,
            };
            if failing.load(Ordering::SeqCst) {
                eyre::bail!("remote table unavailable");
            }

            let mut rows: Vec<FavoriteRow> = self
                .0
                .rows
                .lock()
                .unwrap()
                .iter()
                .filter(|r| r.user_id.as_deref() == Some(user.as_str()) && r.kind() == kind)
                .cloned()
                .collect();
            rows.sort_by(|a, b| b.created_at.cmp(&a.created_at));
            Ok(rows)
        }

        async fn find(&self, video_id: &str, kind: FavoriteKind) -> eyre::Result<Option<FavoriteRow>> {
            Ok(self
                .0
                .rows
                .lock()
                .unwrap()
                .iter()
                .find(|r| r.video_id == video_id && r.kind() == kind)
                .cloned())
        }

        async fn insert(&self, row: NewFavorite) -> eyre::Result<FavoriteRow> {
            self.0.insert_calls.fetch_add(1, Ordering::SeqCst);
            if self.0.fail_insert.load(Ordering::SeqCst) {
                eyre::bail!("insert rejected");
            }

            let seq = self.0.next_id.fetch_add(1, Ordering::SeqCst);
            let inserted = FavoriteRow {
                id: format!("row{seq}"),
                user_id: Some(row.user_id),
                video_id: row.video_id,
                title: row.title,
                channel_title: row.channel_title,
                thumbnail_url: row.thumbnail_url,
                // Later inserts get later timestamps.
                created_at: Timestamp::from_second(1_000_000 + seq).unwrap(),
            };
            self.0.rows.lock().unwrap().push(inserted.clone());
            Ok(inserted)
        }

        async fn delete(&self, row_id: &str) -> eyre::Result<()> {
            self.0.delete_calls.fetch_add(1, Ordering::SeqCst);
            if self.0.fail_delete.load(Ordering::SeqCst) {
                eyre::bail!("delete rejected");
            }
            self.0.rows.lock().unwrap().retain(|r| r.id != row_id);
            Ok(())
        }

        async fn delete_by_video(&self, video_id: &str, kind: FavoriteKind) -> eyre::Result<()> {
            self.0.delete_calls.fetch_add(1, Ordering::SeqCst);
            self.0
                .rows
                .lock()
                .unwrap()
                .retain(|r| !(r.video_id == video_id && r.kind() == kind));
            Ok(())
        }
    }

    #[derive(Debug, Clone, PartialEq, Eq)]
    enum Toast {
        Success(String),
        Error(String),
    }

    #[derive(Clone, Default)]
    struct RecordingNotifier(Arc<Mutex<Vec<Toast>>>);

    impl RecordingNotifier {
        fn toasts(&self) -> Vec<Toast> {
            self.0.lock().unwrap().clone()
        }

        fn errors(&self) -> Vec<String> {
            self.toasts()
                .into_iter()
                .filter_map(|t| match t {
                    Toast::Error(m) => Some(m),
                    Toast::Success(_) => None,
                })
                .collect()
        }
    }

    impl Notifier for RecordingNotifier {
        fn success(&self, message: &str) {
            self.0.lock().unwrap().push(Toast::Success(message.to_string()));
        }

        fn error(&self, message: &str) {
            self.0.lock().unwrap().push(Toast::Error(message.to_string()));
        }
    }

    fn store() -> (
        LibraryStore<MockTable, RecordingNotifier>,
        MockTable,
        RecordingNotifier,
    ) {
        let table = MockTable::default();
        let notify = RecordingNotifier::default();
        (
            LibraryStore::new(table.clone(), notify.clone()),
            table,
            notify,
        )
    }

    fn u1() -> Session {
        Session::authenticated(UserId::new("u1"))
    }

    fn song_a() -> VideoMetadata {
        VideoMetadata {
            video_id: "v1".to_string(),
            title: "Song A".to_string(),
            channel_title: "Acme".to_string(),
            thumbnail_url: String::new(),
        }
    }

    #[test]
    fn loading_starts_true() {
        let (store, _, _) = store();
        assert!(store.loading());
    }

    #[tokio::test]
    async fn fetch_without_identity_clears_lists_and_skips_remote() {
        let (mut store, table, notify) = store();
        table.seed("u1", "v1", "Song A", "Acme", 1);

        store.fetch_library(&u1()).await.unwrap();
        assert_eq!(store.videos().len(), 1);
        let calls_after_first = table.list_calls();

        store.fetch_library(&Session::anonymous()).await.unwrap();
        assert!(store.videos().is_empty());
        assert!(store.channels().is_empty());
        assert!(!store.loading());
        assert_eq!(table.list_calls(), calls_after_first);
        assert!(notify.errors().is_empty());
    }

    #[tokio::test]
    async fn partition_by_title_prefix_is_total_and_disjoint() {
        let (mut store, table, _) = store();
        table.seed("u1", "c1", "Channel: Acme", "Acme", 2);
        table.seed("u1", "v1", "Song A", "Acme", 1);

        store.fetch_library(&u1()).await.unwrap();

        assert_eq!(store.videos().len(), 1);
        assert_eq!(store.videos()[0].video_id, "v1");
        assert_eq!(store.videos()[0].title, "Song A");

        assert_eq!(store.channels().len(), 1);
        assert_eq!(store.channels()[0].video_id, "c1");
        assert_eq!(store.channels()[0].channel_title, "Acme");
    }

    #[tokio::test]
    async fn lists_are_ordered_newest_first() {
        let (mut store, table, _) = store();
        table.seed("u1", "v1", "oldest", "Acme", 1);
        table.seed("u1", "v3", "newest", "Acme", 3);
        table.seed("u1", "v2", "middle", "Acme", 2);

        store.fetch_library(&u1()).await.unwrap();
        let order: Vec<&str> = store.videos().iter().map(|r| r.video_id.as_str()).collect();
        assert_eq!(order, ["v3", "v2", "v1"]);

        // A newly saved row lands first on the next fetch.
        store
            .save_video(&u1(), &VideoMetadata {
                video_id: "v4".to_string(),
                title: "brand new".to_string(),
                channel_title: "Acme".to_string(),
                thumbnail_url: String::new(),
            })
            .await
            .unwrap();
        store.fetch_library(&u1()).await.unwrap();
        assert_eq!(store.videos()[0].video_id, "v4");
    }

    #[tokio::test]
    async fn fetch_ignores_other_users_rows() {
        let (mut store, table, _) = store();
        table.seed("u1", "v1", "mine", "Acme", 1);
        table.seed("u2", "v2", "theirs", "Acme", 2);

        store.fetch_library(&u1()).await.unwrap();
        assert_eq!(store.videos().len(), 1);
        assert_eq!(store.videos()[0].video_id, "v1");
    }

    #[tokio::test]
    async fn remove_video_resyncs_and_row_is_gone() {
        let (mut store, table, notify) = store();
        let row_id = table.seed("u1", "v1", "Song A", "Acme", 1);
        table.seed("u1", "c1", "Channel: Acme", "Acme", 2);

        store.fetch_library(&u1()).await.unwrap();
        store.remove_video(&u1(), &row_id).await.unwrap();

        assert!(store.videos().iter().all(|r| r.id != row_id));
        assert!(store.channels().iter().all(|r| r.id != row_id));
        assert_eq!(store.channels().len(), 1);
        assert!(
            notify
                .toasts()
                .contains(&Toast::Success("Video removed from library".to_string()))
        );
    }

    #[tokio::test]
    async fn remove_without_identity_is_guarded_client_side() {
        let (mut store, table, notify) = store();
        let row_id = table.seed("u1", "v1", "Song A", "Acme", 1);
        store.fetch_library(&u1()).await.unwrap();

        let err = store
            .remove_video(&Session::anonymous(), &row_id)
            .await
            .unwrap_err();
        assert!(matches!(err, LibraryError::Unauthenticated));

        // State unchanged, one failure notification, no remote call issued.
        assert_eq!(store.videos().len(), 1);
        assert_eq!(table.delete_calls(), 0);
        assert_eq!(notify.errors().len(), 1);
    }

    #[tokio::test]
    async fn remove_failure_keeps_lists_and_notifies() {
        let (mut store, table, notify) = store();
        let row_id = table.seed("u1", "c1", "Channel: Acme", "Acme", 1);
        store.fetch_library(&u1()).await.unwrap();

        table.0.fail_delete.store(true, Ordering::SeqCst);
        let err = store.remove_channel(&u1(), &row_id).await.unwrap_err();
        assert!(matches!(err, LibraryError::MutationFailed(_)));
        assert_eq!(store.channels().len(), 1);
        assert_eq!(
            notify.errors(),
            ["Failed to remove channel from favorites"]
        );
    }

    #[tokio::test]
    async fn fetch_failure_preserves_lists_and_notifies_once() {
        let (mut store, table, notify) = store();
        table.seed("u1", "v1", "Song A", "Acme", 1);
        store.fetch_library(&u1()).await.unwrap();

        table.0.fail_video_list.store(true, Ordering::SeqCst);
        let err = store.fetch_library(&u1()).await.unwrap_err();
        assert!(matches!(err, LibraryError::FetchFailed(_)));
        assert!(!store.loading());
        assert_eq!(store.videos().len(), 1);
        assert_eq!(notify.errors(), ["Failed to load library"]);
    }

    #[tokio::test]
    async fn channel_query_failure_still_updates_videos() {
        let (mut store, table, _) = store();
        table.seed("u1", "v1", "Song A", "Acme", 1);
        table.seed("u1", "c1", "Channel: Acme", "Acme", 1);
        store.fetch_library(&u1()).await.unwrap();

        table.seed("u1", "v2", "Song B", "Acme", 2);
        table.0.fail_channel_list.store(true, Ordering::SeqCst);

        // Partial success: the video list was already replaced when the
        // channel query failed, and is not rolled back.
        store.fetch_library(&u1()).await.unwrap_err();
        assert_eq!(store.videos().len(), 2);
        assert_eq!(store.channels().len(), 1);
    }

    #[tokio::test]
    async fn fetch_is_idempotent_against_a_stable_table() {
        let (mut store, table, _) = store();
        table.seed("u1", "v1", "Song A", "Acme", 1);
        table.seed("u1", "c1", "Channel: Acme", "Acme", 2);

        store.fetch_library(&u1()).await.unwrap();
        let first: Vec<String> = store.videos().iter().map(|r| r.id.clone()).collect();
        let first_channels: Vec<String> = store.channels().iter().map(|r| r.id.clone()).collect();

        store.fetch_library(&u1()).await.unwrap();
        let second: Vec<String> = store.videos().iter().map(|r| r.id.clone()).collect();
        let second_channels: Vec<String> = store.channels().iter().map(|r| r.id.clone()).collect();

        assert_eq!(first, second);
        assert_eq!(first_channels, second_channels);
    }

    #[tokio::test]
    async fn duplicate_save_skips_the_insert() {
        let (mut store, table, notify) = store();

        store.save_video(&u1(), &song_a()).await.unwrap();
        store.save_video(&u1(), &song_a()).await.unwrap();

        assert_eq!(table.insert_calls(), 1);
        assert!(
            notify
                .toasts()
                .contains(&Toast::Success("Video is already in your library".to_string()))
        );
    }

    #[tokio::test]
    async fn save_without_identity_is_rejected() {
        let (mut store, table, notify) = store();

        let err = store
            .save_video(&Session::anonymous(), &song_a())
            .await
            .unwrap_err();
        assert!(matches!(err, LibraryError::Unauthenticated));
        assert_eq!(table.insert_calls(), 0);
        assert_eq!(notify.errors().len(), 1);
    }

    #[tokio::test]
    async fn save_records_the_session_user() {
        let (mut store, table, notify) = store();

        store.save_video(&u1(), &song_a()).await.unwrap();

        let rows = table.0.rows.lock().unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].user_id.as_deref(), Some("u1"));
        drop(rows);
        assert!(
            notify
                .toasts()
                .contains(&Toast::Success("Video added to library".to_string()))
        );
    }

    #[tokio::test]
    async fn failed_insert_surfaces_mutation_error() {
        let (mut store, table, notify) = store();
        table.0.fail_insert.store(true, Ordering::SeqCst);

        let err = store
            .favorite_channel(
                &u1(),
                &ChannelMetadata {
                    channel_id: "c1".to_string(),
                    title: "Acme".to_string(),
                    thumbnail_url: String::new(),
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(err, LibraryError::MutationFailed(_)));
        assert_eq!(notify.errors(), ["Failed to update favorites"]);
    }

    #[tokio::test]
    async fn favorited_channel_lands_in_the_channel_list() {
        let (mut store, _, _) = store();

        store
            .favorite_channel(
                &u1(),
                &ChannelMetadata {
                    channel_id: "c1".to_string(),
                    title: "Acme".to_string(),
                    thumbnail_url: String::new(),
                },
            )
            .await
            .unwrap();
        store.fetch_library(&u1()).await.unwrap();

        assert!(store.videos().is_empty());
        assert_eq!(store.channels().len(), 1);
        assert_eq!(store.channels()[0].video_id, "c1");
        assert_eq!(store.channels()[0].display_title(), "Acme");
    }
}
