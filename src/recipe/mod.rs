//! Canonical recipe data model.
//!
//! Every record entering the application from the catalog is normalized to
//! the types in this module before any store or screen sees it. There is
//! exactly one identity field, [`RecipeId`]; membership checks anywhere in
//! the crate compare nothing else.

pub mod model;

pub use model::{Category, Ingredient, Recipe, RecipeId};
