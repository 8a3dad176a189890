//! Hosted backend client: REST access to the favorites table, edge function
//! invocation, and the session context fed by the external identity provider.

pub mod client;
pub mod favorites;
pub mod session;

pub use client::BackendClient;
pub use favorites::RestFavoritesTable;
pub use session::{Session, UserId};
