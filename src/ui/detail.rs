//! Recipe detail cards.

use crate::notebook::CustomRecipe;
use crate::recipe::Recipe;

use super::theme::LadleTheme;

/// Render a catalog recipe as a multi-line detail card.
pub fn render_recipe_detail(recipe: &Recipe, is_favorite: bool, theme: &LadleTheme) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "{} {}\n",
        theme.header.apply_to(&recipe.name),
        theme.favorite_marker(is_favorite),
    ));

    if let Some(category) = &recipe.category {
        out.push_str(&format!("{}\n", theme.dim.apply_to(category)));
    }

    let mut facts = Vec::new();
    if let Some(mins) = recipe.cooking_time_minutes {
        facts.push(format!("{} mins", mins));
    }
    if let Some(servings) = recipe.servings {
        facts.push(format!("{} servings", servings));
    }
    if let Some(calories) = recipe.calories {
        facts.push(format!("{} kcal", calories));
    }
    if let Some(difficulty) = &recipe.difficulty {
        facts.push(difficulty.clone());
    }
    if !facts.is_empty() {
        out.push_str(&facts.join(" · "));
        out.push('\n');
    }

    if let Some(image) = &recipe.image {
        out.push_str(&format!("{} {}\n", theme.key.apply_to("Image:"), image));
    }

    if !recipe.ingredients.is_empty() {
        out.push('\n');
        out.push_str(&format!("{}\n", theme.key.apply_to("Ingredients")));
        for ingredient in &recipe.ingredients {
            match &ingredient.measure {
                Some(measure) => {
                    out.push_str(&format!("  - {} ({})\n", ingredient.name, measure))
                }
                None => out.push_str(&format!("  - {}\n", ingredient.name)),
            }
        }
    }

    if let Some(instructions) = &recipe.instructions {
        out.push('\n');
        out.push_str(&format!("{}\n", theme.key.apply_to("Instructions")));
        out.push_str(instructions);
        out.push('\n');
    }

    out
}

/// Render a notebook recipe as a multi-line detail card.
pub fn render_custom_recipe(recipe: &CustomRecipe, theme: &LadleTheme) -> String {
    let mut out = String::new();

    out.push_str(&format!("{}\n", theme.header.apply_to(&recipe.title)));

    if let Some(image) = &recipe.image {
        out.push_str(&format!("{} {}\n", theme.key.apply_to("Image:"), image));
    }

    if let Some(description) = &recipe.description {
        out.push('\n');
        out.push_str(description);
        out.push('\n');
    }

    if let Some(created) = recipe.created_at {
        out.push_str(&format!(
            "{}\n",
            theme
                .dim
                .apply_to(format!("Added {}", created.format("%Y-%m-%d"))),
        ));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recipe::Ingredient;

    #[test]
    fn detail_card_contains_name_and_facts() {
        let mut recipe = Recipe::new("1", "Shakshuka");
        recipe.category = Some("Vegetarian".into());
        recipe.cooking_time_minutes = Some(35);
        recipe.servings = Some(3);
        recipe.ingredients.push(Ingredient {
            name: "Eggs".into(),
            measure: Some("4".into()),
        });

        let card = render_recipe_detail(&recipe, false, &LadleTheme::new());
        assert!(card.contains("Shakshuka"));
        assert!(card.contains("35 mins"));
        assert!(card.contains("3 servings"));
        assert!(card.contains("Eggs (4)"));
    }

    #[test]
    fn detail_card_marks_favorites() {
        let recipe = Recipe::new("1", "Shakshuka");
        let card = render_recipe_detail(&recipe, true, &LadleTheme::new());
        assert!(card.contains('\u{2665}'));
    }

    #[test]
    fn custom_card_handles_missing_description() {
        let card = render_custom_recipe(&CustomRecipe::new("Flatbread"), &LadleTheme::new());
        assert!(card.contains("Flatbread"));
    }
}
