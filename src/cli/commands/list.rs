//! List command implementation.
//!
//! The `ladle list <category>` command lists the recipes in a category.

use crate::cli::args::ListArgs;
use crate::cli::context::AppContext;
use crate::error::Result;
use crate::ui::{Table, UserInterface};

use super::dispatcher::{Command, CommandResult};

/// The list command implementation.
pub struct ListCommand {
    context: AppContext,
    args: ListArgs,
}

impl ListCommand {
    /// Create a new list command.
    pub fn new(context: &AppContext, args: ListArgs) -> Self {
        Self {
            context: context.clone(),
            args,
        }
    }
}

impl Command for ListCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let client = self.context.catalog();

        let mut spinner = ui.start_spinner(&format!("Fetching {} recipes...", self.args.category));
        let recipes = match client.recipes_in_category(&self.args.category) {
            Ok(recipes) => {
                spinner.finish_clear();
                recipes
            }
            Err(e) => {
                spinner.finish_clear();
                ui.error(&e.to_string());
                return Ok(CommandResult::failure(1));
            }
        };

        if recipes.is_empty() {
            ui.message(&format!("No recipes in '{}'.", self.args.category));
            return Ok(CommandResult::success());
        }

        let mut table = Table::new(vec!["Id", "Name", "Time", "Difficulty"]);
        for recipe in &recipes {
            let time = recipe
                .cooking_time_minutes
                .map(|m| format!("{} mins", m))
                .unwrap_or_default();
            table.add_row(vec![
                recipe.id.as_str(),
                &recipe.name,
                &time,
                recipe.difficulty.as_deref().unwrap_or(""),
            ]);
        }

        ui.message(&table.render());
        ui.message(&format!("{} recipes. Use 'ladle show <id>' for details.", recipes.len()));
        Ok(CommandResult::success())
    }
}
