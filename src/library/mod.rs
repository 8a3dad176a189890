//! The user's library: saved videos and favorited channels.
//!
//! Both entities share one physical representation, a single remote
//! `favorites` table; the row kind is an explicit [`model::FavoriteKind`] in
//! this crate, mapped to and from the legacy stored-title convention by
//! [`model`]. [`store::LibraryStore`] holds the in-memory session copy and is
//! the only writer; the remote table (behind [`table::FavoritesTable`]) owns
//! the rows.

pub mod model;
pub mod store;
pub mod table;

pub use model::{
    CHANNEL_TITLE_PREFIX, ChannelMetadata, FavoriteKind, FavoriteRow, NewFavorite, VideoMetadata,
};
pub use store::{LibraryError, LibraryStore};
pub use table::FavoritesTable;
