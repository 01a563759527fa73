//! Ladle - recipe browsing and a personal recipe notebook.
//!
//! Ladle is a terminal tool for browsing a remote recipe catalog,
//! marking session favorites, and keeping a locally persisted notebook
//! of your own recipes.
//!
//! # Modules
//!
//! - [`catalog`] - Remote catalog client, wire normalization, response cache
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Configuration loading and defaults
//! - [`error`] - Error types and result aliases
//! - [`favorites`] - In-memory favorites with subscribe/notify
//! - [`notebook`] - Persisted user-authored recipes
//! - [`recipe`] - Canonical recipe data model
//! - [`storage`] - Key-value storage backends
//! - [`ui`] - Prompts, spinners, tables, and terminal output
//!
//! # Example
//!
//! ```
//! use ladle::favorites::FavoritesStore;
//! use ladle::recipe::{Recipe, RecipeId};
//!
//! let mut favorites = FavoritesStore::new();
//! favorites.toggle(Recipe::new("52772", "Teriyaki Chicken"));
//! assert!(favorites.is_favorite(&RecipeId::new("52772")));
//! ```

pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod favorites;
pub mod notebook;
pub mod recipe;
pub mod storage;
pub mod ui;

pub use error::{LadleError, Result};
