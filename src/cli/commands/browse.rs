//! Browse command implementation.
//!
//! The `ladle browse` command runs an interactive session: pick a
//! category, pick a recipe, view it, toggle favorites. Favorites are
//! session state and live exactly as long as the process.

use std::sync::{Arc, Mutex};

use crate::catalog::CatalogClient;
use crate::cli::args::BrowseArgs;
use crate::cli::context::AppContext;
use crate::error::Result;
use crate::favorites::{ChangeKind, FavoritesChange, FavoritesStore};
use crate::recipe::Recipe;
use crate::ui::theme::LadleTheme;
use crate::ui::{render_custom_recipe, render_recipe_detail, UserInterface};

use super::dispatcher::{Command, CommandResult};

/// The browse command implementation.
pub struct BrowseCommand {
    context: AppContext,
    args: BrowseArgs,
}

/// The last favorites change, written by the store's notify and read
/// back by the session loop to report what a toggle did.
type ChangeSlot = Arc<Mutex<Option<FavoritesChange>>>;

impl BrowseCommand {
    /// Create a new browse command.
    pub fn new(context: &AppContext, args: BrowseArgs) -> Self {
        Self {
            context: context.clone(),
            args,
        }
    }

    fn browse_catalog(
        &self,
        ui: &mut dyn UserInterface,
        client: &CatalogClient,
        favorites: &mut FavoritesStore,
        changes: &ChangeSlot,
    ) -> Result<()> {
        let mut preselected = self.args.category.clone();

        loop {
            let category = match preselected.take() {
                Some(category) => category,
                None => {
                    let mut spinner = ui.start_spinner("Fetching categories...");
                    let categories = client.categories();
                    spinner.finish_clear();

                    let categories = match categories {
                        Ok(categories) => categories,
                        Err(e) => {
                            ui.error(&e.to_string());
                            return Ok(());
                        }
                    };

                    if categories.is_empty() {
                        ui.message("The catalog has no categories.");
                        return Ok(());
                    }

                    let names: Vec<String> =
                        categories.iter().map(|c| c.name.clone()).collect();
                    match ui.select("Pick a category", &names)? {
                        Some(index) => names[index].clone(),
                        None => return Ok(()),
                    }
                }
            };

            self.browse_category(ui, client, favorites, changes, &category)?;
        }
    }

    fn browse_category(
        &self,
        ui: &mut dyn UserInterface,
        client: &CatalogClient,
        favorites: &mut FavoritesStore,
        changes: &ChangeSlot,
        category: &str,
    ) -> Result<()> {
        let mut spinner = ui.start_spinner(&format!("Fetching {} recipes...", category));
        let recipes = client.recipes_in_category(category);
        spinner.finish_clear();

        let recipes = match recipes {
            Ok(recipes) => recipes,
            Err(e) => {
                ui.error(&e.to_string());
                return Ok(());
            }
        };

        if recipes.is_empty() {
            ui.message(&format!("No recipes in '{}'.", category));
            return Ok(());
        }

        let theme = LadleTheme::new();
        loop {
            let labels: Vec<String> = recipes
                .iter()
                .map(|r| format!("{} {}", theme.favorite_marker(favorites.is_favorite(&r.id)), r.name))
                .collect();

            match ui.select(category, &labels)? {
                Some(index) => self.recipe_detail(ui, favorites, changes, &recipes[index])?,
                None => return Ok(()),
            }
        }
    }

    fn recipe_detail(
        &self,
        ui: &mut dyn UserInterface,
        favorites: &mut FavoritesStore,
        changes: &ChangeSlot,
        recipe: &Recipe,
    ) -> Result<()> {
        let theme = LadleTheme::new();

        loop {
            ui.message(&render_recipe_detail(
                recipe,
                favorites.is_favorite(&recipe.id),
                &theme,
            ));

            let toggle_label = if favorites.is_favorite(&recipe.id) {
                "Remove from favorites".to_string()
            } else {
                "Add to favorites".to_string()
            };

            match ui.select(&recipe.name, &[toggle_label, "Back".to_string()])? {
                Some(0) => {
                    favorites.toggle(recipe.clone());
                    self.report_change(ui, changes);
                }
                _ => return Ok(()),
            }
        }
    }

    fn view_favorites(
        &self,
        ui: &mut dyn UserInterface,
        favorites: &mut FavoritesStore,
        changes: &ChangeSlot,
    ) -> Result<()> {
        loop {
            if favorites.is_empty() {
                ui.message("No favorite recipes yet!");
                return Ok(());
            }

            let names: Vec<String> =
                favorites.recipes().iter().map(|r| r.name.clone()).collect();
            let Some(index) = ui.select("My favorite recipes", &names)? else {
                return Ok(());
            };

            // Clone out: the detail view needs to mutate the store.
            let recipe = favorites.recipes()[index].clone();
            self.recipe_detail(ui, favorites, changes, &recipe)?;
        }
    }

    fn view_notebook(&self, ui: &mut dyn UserInterface) -> Result<()> {
        let notebook = self.context.notebook();
        let theme = LadleTheme::new();

        loop {
            // Re-read on every pass; any mutation makes a snapshot stale.
            let recipes = notebook.load();

            if recipes.is_empty() {
                ui.message("No recipes added yet. Use 'ladle my add' to create one.");
                return Ok(());
            }

            let titles: Vec<String> = recipes.iter().map(|r| r.title.clone()).collect();
            match ui.select("My recipes", &titles)? {
                Some(index) => ui.message(&render_custom_recipe(&recipes[index], &theme)),
                None => return Ok(()),
            }
        }
    }

    fn report_change(&self, ui: &mut dyn UserInterface, changes: &ChangeSlot) {
        let change = changes.lock().expect("change slot poisoned").take();

        if let Some(change) = change {
            match change.kind {
                ChangeKind::Added => ui.success(&format!(
                    "Added to favorites ({} total).",
                    change.total
                )),
                ChangeKind::Removed => ui.message(&format!(
                    "Removed from favorites ({} left).",
                    change.total
                )),
            }
        }
    }
}

impl Command for BrowseCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        if !ui.is_interactive() {
            ui.error("'ladle browse' needs an interactive terminal. Try 'ladle categories'.");
            return Ok(CommandResult::failure(2));
        }

        let client = self.context.catalog();
        let mut favorites = FavoritesStore::new();

        let changes: ChangeSlot = Arc::new(Mutex::new(None));
        let sink = Arc::clone(&changes);
        favorites.subscribe(move |change| {
            *sink.lock().expect("change slot poisoned") = Some(change.clone());
        });

        loop {
            let menu = vec![
                "Browse categories".to_string(),
                format!("Favorites ({})", favorites.len()),
                "My recipes".to_string(),
                "Quit".to_string(),
            ];

            match ui.select("ladle", &menu)? {
                Some(0) => self.browse_catalog(ui, &client, &mut favorites, &changes)?,
                Some(1) => self.view_favorites(ui, &mut favorites, &changes)?,
                Some(2) => self.view_notebook(ui)?,
                _ => break,
            }
        }

        Ok(CommandResult::success())
    }
}
