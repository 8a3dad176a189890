//! The remote favorites-table contract consumed by the library store.

use crate::backend::UserId;
use crate::library::model::{FavoriteKind, FavoriteRow, NewFavorite};

/// The slice of the remote table's capabilities the library needs: filtered
/// selects, inserts (the table assigns `id` and `created_at`), and deletes.
///
/// Implemented by [`crate::backend::RestFavoritesTable`] against the hosted
/// backend, and by an in-memory fake in the store's tests. Authorization is
/// the remote table's job (row-level access policy); implementations must not
/// be treated as a security boundary.
pub trait FavoritesTable {
    /// Lists the user's favorite rows of one kind, newest first.
    fn list(
        &self,
        user: &UserId,
        kind: FavoriteKind,
    ) -> impl Future<Output = eyre::Result<Vec<FavoriteRow>>> + Send;

    /// Looks up a row by the favorited resource's ID and kind.
    ///
    /// Used as the best-effort duplicate pre-check before inserts and by the
    /// player page to derive its saved/favorited flags.
    fn find(
        &self,
        video_id: &str,
        kind: FavoriteKind,
    ) -> impl Future<Output = eyre::Result<Option<FavoriteRow>>> + Send;

    /// Inserts a new favorite row, returning it with the assigned `id` and
    /// `created_at`.
    fn insert(&self, row: NewFavorite) -> impl Future<Output = eyre::Result<FavoriteRow>> + Send;

    /// Deletes a row by its opaque ID. Deleting an absent row is not an error.
    fn delete(&self, row_id: &str) -> impl Future<Output = eyre::Result<()>> + Send;

    /// Deletes rows matching the favorited resource's ID and kind.
    ///
    /// Used by the player page toggles, which know the video/channel ID but
    /// not the row ID.
    fn delete_by_video(
        &self,
        video_id: &str,
        kind: FavoriteKind,
    ) -> impl Future<Output = eyre::Result<()>> + Send;
}
