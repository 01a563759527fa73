//! Show command implementation.
//!
//! The `ladle show <id>` command prints a catalog recipe's detail card.

use crate::cli::args::ShowArgs;
use crate::cli::context::AppContext;
use crate::error::{LadleError, Result};
use crate::recipe::RecipeId;
use crate::ui::theme::LadleTheme;
use crate::ui::{render_recipe_detail, UserInterface};

use super::dispatcher::{Command, CommandResult};

/// The show command implementation.
pub struct ShowCommand {
    context: AppContext,
    args: ShowArgs,
}

impl ShowCommand {
    /// Create a new show command.
    pub fn new(context: &AppContext, args: ShowArgs) -> Self {
        Self {
            context: context.clone(),
            args,
        }
    }
}

impl Command for ShowCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let client = self.context.catalog();
        let id = RecipeId::new(self.args.id.clone());

        let mut spinner = ui.start_spinner("Fetching recipe...");
        let recipe = match client.recipe(&id) {
            Ok(recipe) => {
                spinner.finish_clear();
                recipe
            }
            Err(LadleError::UnknownRecipe { id }) => {
                spinner.finish_clear();
                ui.error(&format!("No recipe with id '{}'.", id));
                return Ok(CommandResult::failure(2));
            }
            Err(e) => {
                spinner.finish_clear();
                ui.error(&e.to_string());
                return Ok(CommandResult::failure(1));
            }
        };

        // A fresh process has no session favorites; the marker is shown
        // unfilled here and live in `ladle browse`.
        let theme = LadleTheme::new();
        ui.message(&render_recipe_detail(&recipe, false, &theme));
        Ok(CommandResult::success())
    }
}
