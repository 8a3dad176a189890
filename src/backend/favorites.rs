//! REST implementation of the favorites-table contract.

use crate::backend::client::{BackendClient, Prefer};
use crate::backend::session::UserId;
use crate::library::model::{FavoriteKind, FavoriteRow, NewFavorite};
use crate::library::table::FavoritesTable;
use eyre::Context;
use http::Method;
use tracing::instrument;

const FAVORITES_PATH: &str = "/rest/v1/favorites";

/// Wildcard pattern matching the stored channel-row title convention.
///
/// The REST interface uses `*` as the pattern wildcard and `ilike` for
/// case-insensitive matching, so this is how the kind discriminant is
/// expressed against the legacy schema (there is no kind column to filter on).
const CHANNEL_TITLE_PATTERN: &str = "Channel:*";

/// An equality filter expression (`eq.<value>`).
fn eq_filter(value: &str) -> String {
    format!("eq.{value}")
}

/// The filter expression selecting rows of one kind via the title convention.
fn kind_filter(kind: FavoriteKind) -> (&'static str, String) {
    match kind {
        FavoriteKind::Channel => ("title", format!("ilike.{CHANNEL_TITLE_PATTERN}")),
        FavoriteKind::Video => ("title", format!("not.ilike.{CHANNEL_TITLE_PATTERN}")),
    }
}

/// The favorites table, reached through the hosted backend's REST interface.
///
/// Row filtering, ordering, and row-level authorization all happen
/// server-side; this type only builds the filter expressions and decodes the
/// row JSON.
#[derive(Debug, Clone)]
pub struct RestFavoritesTable {
    backend: BackendClient,
}

impl RestFavoritesTable {
    pub fn new(backend: BackendClient) -> Self {
        Self { backend }
    }
}

impl FavoritesTable for RestFavoritesTable {
    #[instrument(skip(self))]
    async fn list(&self, user: &UserId, kind: FavoriteKind) -> eyre::Result<Vec<FavoriteRow>> {
        let (kind_column, kind_expr) = kind_filter(kind);
        let query_params = [
            ("select", "*".to_string()),
            ("user_id", eq_filter(user.as_str())),
            (kind_column, kind_expr),
            ("order", "created_at.desc".to_string()),
        ];

        let response = self
            .backend
            .make_request(
                Method::GET,
                FAVORITES_PATH,
                &query_params,
                None::<&()>,
                Prefer::None,
            )
            .await?;

        let rows: Vec<FavoriteRow> = response
            .json()
            .await
            .context("parse favorites rows as JSON")?;

        tracing::debug!(user = %user, ?kind, returned_rows = rows.len(), "listed favorites");

        Ok(rows)
    }

    #[instrument(skip(self))]
    async fn find(&self, video_id: &str, kind: FavoriteKind) -> eyre::Result<Option<FavoriteRow>> {
        let (kind_column, kind_expr) = kind_filter(kind);
        let query_params = [
            ("select", "*".to_string()),
            ("video_id", eq_filter(video_id)),
            (kind_column, kind_expr),
            ("limit", "1".to_string()),
        ];

        let response = self
            .backend
            .make_request(
                Method::GET,
                FAVORITES_PATH,
                &query_params,
                None::<&()>,
                Prefer::None,
            )
            .await?;

        let rows: Vec<FavoriteRow> = response
            .json()
            .await
            .context("parse favorites rows as JSON")?;

        Ok(rows.into_iter().next())
    }

    #[instrument(skip(self, row))]
    async fn insert(&self, row: NewFavorite) -> eyre::Result<FavoriteRow> {
        let response = self
            .backend
            .make_request(
                Method::POST,
                FAVORITES_PATH,
                &[],
                Some(&row),
                Prefer::Representation,
            )
            .await?;

        // With return=representation the insert echoes the affected rows.
        let mut rows: Vec<FavoriteRow> = response
            .json()
            .await
            .context("parse inserted favorite row as JSON")?;

        let inserted = rows
            .pop()
            .ok_or_else(|| eyre::eyre!("insert returned no rows"))?;

        tracing::debug!(row_id = inserted.id, "inserted favorite row");

        Ok(inserted)
    }

    #[instrument(skip(self))]
    async fn delete(&self, row_id: &str) -> eyre::Result<()> {
        let query_params = [("id", eq_filter(row_id))];

        self.backend
            .make_request(
                Method::DELETE,
                FAVORITES_PATH,
                &query_params,
                None::<&()>,
                Prefer::None,
            )
            .await?;

        tracing::debug!(row_id, "deleted favorite row");

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete_by_video(&self, video_id: &str, kind: FavoriteKind) -> eyre::Result<()> {
        let (kind_column, kind_expr) = kind_filter(kind);
        let query_params = [("video_id", eq_filter(video_id)), (kind_column, kind_expr)];

        self.backend
            .make_request(
                Method::DELETE,
                FAVORITES_PATH,
                &query_params,
                None::<&()>,
                Prefer::None,
            )
            .await?;

        tracing::debug!(video_id, ?kind, "deleted matching favorite rows");

        Ok(())
    }
}
