//! The user's personal recipe notebook.
//!
//! User-authored recipes are persisted as a single JSON blob under a
//! fixed storage key and rewritten in full on every mutation. The
//! [`NotebookStore`] serializes each load-modify-persist cycle so
//! mutations apply in the order they were invoked.

pub mod recipe;
pub mod store;

pub use recipe::CustomRecipe;
pub use store::{NotebookStore, STORAGE_KEY};
