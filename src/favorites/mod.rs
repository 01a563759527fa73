//! Session favorites.
//!
//! This module provides [`FavoritesStore`], the in-memory collection of
//! recipes the user has marked as favorite, with a synchronous
//! subscribe/notify contract for screens that render membership.
//!
//! Favorites are session state: there is no persistence step, and
//! toggling completes before the call returns.

pub mod store;

pub use store::{ChangeKind, FavoritesChange, FavoritesStore, ListenerId};
