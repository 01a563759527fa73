//! Wire formats for catalog responses.
//!
//! Catalog deployments disagree on key names: recipe ids arrive as `id`,
//! `idFood`, or `idMeal`; names as `recipeName` or `strMeal`; categories
//! carry their own `idCategory` space. Serde aliases absorb the
//! spellings and [`WireRecipe::normalize`] picks the one canonical
//! identity — the recipe's own id. Category ids never become recipe
//! identities.

use serde::Deserialize;

use crate::recipe::{Category, Ingredient, Recipe, RecipeId};

/// Envelope for category listings.
#[derive(Debug, Deserialize)]
pub struct CategoriesResponse {
    #[serde(default)]
    pub categories: Vec<WireCategory>,
}

/// Envelope for recipe listings and lookups.
#[derive(Debug, Deserialize)]
pub struct RecipesResponse {
    #[serde(default, alias = "meals")]
    pub recipes: Vec<WireRecipe>,
}

/// A recipe record as it appears on the wire.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct WireRecipe {
    #[serde(alias = "idFood", alias = "idMeal")]
    pub id: Option<String>,

    #[serde(alias = "recipeName", alias = "strMeal")]
    pub name: Option<String>,

    #[serde(alias = "recipeImage", alias = "strMealThumb")]
    pub image: Option<String>,

    #[serde(alias = "recipeInstructions", alias = "strInstructions")]
    pub instructions: Option<String>,

    #[serde(alias = "strCategory")]
    pub category: Option<String>,

    #[serde(alias = "cookingTime")]
    pub cooking_time_minutes: Option<u32>,

    pub servings: Option<u32>,

    pub calories: Option<u32>,

    #[serde(alias = "type")]
    pub difficulty: Option<String>,

    pub ingredients: Vec<WireIngredient>,
}

/// An ingredient line as it appears on the wire.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct WireIngredient {
    #[serde(alias = "ingredientName")]
    pub name: Option<String>,

    pub measure: Option<String>,
}

/// A category record as it appears on the wire.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct WireCategory {
    #[serde(alias = "idCategory")]
    pub id: Option<String>,

    #[serde(alias = "strCategory", alias = "categoryName")]
    pub name: Option<String>,

    #[serde(alias = "strCategoryThumb", alias = "categoryImage")]
    pub image: Option<String>,

    #[serde(alias = "strCategoryDescription", alias = "categoryDescription")]
    pub description: Option<String>,
}

impl WireRecipe {
    /// Normalize to the canonical model.
    ///
    /// Returns `None` when the record carries no usable id; such records
    /// cannot participate in favorites and are dropped at this boundary.
    pub fn normalize(self) -> Option<Recipe> {
        let id = self.id.filter(|id| !id.trim().is_empty())?;

        let ingredients = self
            .ingredients
            .into_iter()
            .filter_map(|i| {
                i.name.map(|name| Ingredient {
                    name,
                    measure: i.measure,
                })
            })
            .collect();

        Some(Recipe {
            id: RecipeId::new(id),
            name: self.name.unwrap_or_else(|| "Untitled recipe".to_string()),
            image: self.image,
            instructions: self.instructions,
            category: self.category,
            cooking_time_minutes: self.cooking_time_minutes,
            servings: self.servings,
            calories: self.calories,
            difficulty: self.difficulty,
            ingredients,
        })
    }
}

impl WireCategory {
    /// Normalize to the canonical model.
    ///
    /// Returns `None` when neither an id nor a name is present.
    pub fn normalize(self) -> Option<Category> {
        let name = self.name.filter(|n| !n.trim().is_empty())?;
        let id = self.id.unwrap_or_else(|| name.clone());

        Some(Category {
            id,
            name,
            image: self.image,
            description: self.description,
        })
    }
}

/// Normalize a batch of wire recipes, dropping records with no id.
pub fn normalize_recipes(wire: Vec<WireRecipe>) -> Vec<Recipe> {
    let total = wire.len();
    let recipes: Vec<Recipe> = wire.into_iter().filter_map(WireRecipe::normalize).collect();

    if recipes.len() < total {
        tracing::warn!(
            dropped = total - recipes.len(),
            "dropped catalog records with no usable id"
        );
    }

    recipes
}
