//! Categories command implementation.
//!
//! The `ladle categories` command lists catalog categories.

use crate::cli::args::CategoriesArgs;
use crate::cli::context::AppContext;
use crate::error::Result;
use crate::ui::{Table, UserInterface};

use super::dispatcher::{Command, CommandResult};

/// The categories command implementation.
pub struct CategoriesCommand {
    context: AppContext,
    args: CategoriesArgs,
}

impl CategoriesCommand {
    /// Create a new categories command.
    pub fn new(context: &AppContext, args: CategoriesArgs) -> Self {
        Self {
            context: context.clone(),
            args,
        }
    }
}

impl Command for CategoriesCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let client = self.context.catalog();

        let mut spinner = ui.start_spinner("Fetching categories...");
        let categories = match client.categories() {
            Ok(categories) => {
                spinner.finish_clear();
                categories
            }
            Err(e) => {
                spinner.finish_clear();
                ui.error(&e.to_string());
                return Ok(CommandResult::failure(1));
            }
        };

        if categories.is_empty() {
            ui.message("The catalog has no categories.");
            return Ok(CommandResult::success());
        }

        let mut table = if self.args.wide {
            Table::new(vec!["Name", "Description"]).max_cell_width(72)
        } else {
            Table::new(vec!["Name"])
        };

        for category in &categories {
            if self.args.wide {
                table.add_row(vec![
                    &category.name,
                    category.description.as_deref().unwrap_or(""),
                ]);
            } else {
                table.add_row(vec![&category.name]);
            }
        }

        ui.message(&table.render());
        Ok(CommandResult::success())
    }
}
