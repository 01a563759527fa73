//! Recipe, category, and ingredient types.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable identity of a catalog recipe.
///
/// Two [`Recipe`] values refer to the same recipe exactly when their ids
/// are equal. The id is assigned by the catalog boundary during
/// normalization; nothing downstream invents or rewrites one.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecipeId(String);

impl RecipeId {
    /// Create an id from a raw catalog identifier.
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// The raw identifier string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecipeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RecipeId {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

/// A single ingredient line on a recipe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ingredient {
    pub name: String,

    /// Free-text quantity ("2 cups", "a pinch").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub measure: Option<String>,
}

/// A catalog recipe, normalized to the canonical shape.
///
/// All fields other than `id` and `name` are optional; catalog records are
/// uneven and screens render placeholders for what is missing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    pub id: RecipeId,
    pub name: String,

    /// Image URL, if the catalog provides one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,

    /// Free-text preparation instructions.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instructions: Option<String>,

    /// Category name (display only; never used as an identity).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cooking_time_minutes: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub servings: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calories: Option<u32>,

    /// Difficulty label ("Easy", "Medium", ...).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ingredients: Vec<Ingredient>,
}

impl Recipe {
    /// Create a minimal recipe with just an id and a name.
    pub fn new(id: impl Into<RecipeId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            image: None,
            instructions: None,
            category: None,
            cooking_time_minutes: None,
            servings: None,
            calories: None,
            difficulty: None,
            ingredients: Vec::new(),
        }
    }
}

impl From<String> for RecipeId {
    fn from(raw: String) -> Self {
        Self::new(raw)
    }
}

/// A catalog category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recipe_id_equality_is_by_raw_string() {
        assert_eq!(RecipeId::new("52772"), RecipeId::from("52772"));
        assert_ne!(RecipeId::new("52772"), RecipeId::new("52773"));
    }

    #[test]
    fn recipe_id_displays_raw_string() {
        assert_eq!(RecipeId::new("52772").to_string(), "52772");
    }

    #[test]
    fn recipe_new_has_no_optional_fields() {
        let recipe = Recipe::new("1", "Teriyaki Chicken");
        assert_eq!(recipe.name, "Teriyaki Chicken");
        assert!(recipe.image.is_none());
        assert!(recipe.ingredients.is_empty());
    }

    #[test]
    fn recipe_round_trips_through_json() {
        let mut recipe = Recipe::new("7", "Shakshuka");
        recipe.category = Some("Vegetarian".into());
        recipe.ingredients.push(Ingredient {
            name: "Eggs".into(),
            measure: Some("4".into()),
        });

        let json = serde_json::to_string(&recipe).unwrap();
        let back: Recipe = serde_json::from_str(&json).unwrap();
        assert_eq!(back, recipe);
    }

    #[test]
    fn recipe_deserializes_without_optional_fields() {
        let recipe: Recipe = serde_json::from_str(r#"{"id":"9","name":"Toast"}"#).unwrap();
        assert_eq!(recipe.id, RecipeId::new("9"));
        assert!(recipe.instructions.is_none());
    }
}
