//! Notebook command implementations.
//!
//! The `ladle my ...` commands manage the user's own recipes. Numbers
//! printed and accepted here are 1-based; they are validated against the
//! freshly loaded sequence before any store call, so the store's
//! out-of-range panic stays a programming-error signal.

use crate::cli::args::{MyAddArgs, MyArgs, MyCommands, MyEditArgs, MyRemoveArgs, MyShowArgs};
use crate::cli::context::AppContext;
use crate::error::Result;
use crate::notebook::{CustomRecipe, NotebookStore};
use crate::storage::FsStorage;
use crate::ui::theme::LadleTheme;
use crate::ui::{render_custom_recipe, Table, UserInterface};

use super::dispatcher::{Command, CommandResult};

/// The my command group implementation.
pub struct MyCommand {
    context: AppContext,
    args: MyArgs,
}

impl MyCommand {
    /// Create a new my command.
    pub fn new(context: &AppContext, args: MyArgs) -> Self {
        Self {
            context: context.clone(),
            args,
        }
    }

    fn list(&self, notebook: &NotebookStore<FsStorage>, ui: &mut dyn UserInterface) {
        let recipes = notebook.load();

        if recipes.is_empty() {
            ui.message("No recipes added yet. Use 'ladle my add' to create one.");
            return;
        }

        let mut table = Table::new(vec!["#", "Title", "Description"]);
        for (i, recipe) in recipes.iter().enumerate() {
            let number = (i + 1).to_string();
            table.add_row(vec![
                &number,
                &recipe.title,
                recipe.description.as_deref().unwrap_or(""),
            ]);
        }

        ui.message(&table.render());
    }

    fn show(
        &self,
        notebook: &NotebookStore<FsStorage>,
        ui: &mut dyn UserInterface,
        args: &MyShowArgs,
    ) -> CommandResult {
        let recipes = notebook.load();

        let Some(index) = checked_index(args.number, recipes.len()) else {
            ui.error(&out_of_range(args.number, recipes.len()));
            return CommandResult::failure(2);
        };

        ui.message(&render_custom_recipe(&recipes[index], &LadleTheme::new()));
        CommandResult::success()
    }

    fn add(
        &self,
        notebook: &NotebookStore<FsStorage>,
        ui: &mut dyn UserInterface,
        args: &MyAddArgs,
    ) -> Result<CommandResult> {
        let title = match &args.title {
            Some(title) => title.clone(),
            None => ui.input("Title", None)?,
        };

        if title.trim().is_empty() {
            ui.error("A recipe needs a title.");
            return Ok(CommandResult::failure(2));
        }

        let mut recipe = CustomRecipe::new(title.trim());
        recipe.description = args.description.clone();
        recipe.image = args.image.clone();

        let recipes = notebook.add(recipe)?;
        ui.success(&format!(
            "Added '{}' as recipe #{}.",
            recipes[recipes.len() - 1].title,
            recipes.len()
        ));
        Ok(CommandResult::success())
    }

    fn edit(
        &self,
        notebook: &NotebookStore<FsStorage>,
        ui: &mut dyn UserInterface,
        args: &MyEditArgs,
    ) -> Result<CommandResult> {
        let recipes = notebook.load();

        let Some(index) = checked_index(args.number, recipes.len()) else {
            ui.error(&out_of_range(args.number, recipes.len()));
            return Ok(CommandResult::failure(2));
        };

        let current = &recipes[index];
        let mut updated = current.clone();

        if args.title.is_none() && args.description.is_none() && args.image.is_none() {
            // No flags: edit interactively, pre-filled with current values.
            updated.title = ui.input("Title", Some(&current.title))?;
            let description = ui.input("Description", current.description.as_deref())?;
            updated.description = if description.trim().is_empty() {
                None
            } else {
                Some(description)
            };
        } else {
            if let Some(title) = &args.title {
                updated.title = title.clone();
            }
            if let Some(description) = &args.description {
                updated.description = Some(description.clone());
            }
            if let Some(image) = &args.image {
                updated.image = Some(image.clone());
            }
        }

        if updated.title.trim().is_empty() {
            ui.error("A recipe needs a title.");
            return Ok(CommandResult::failure(2));
        }

        notebook.update(index, updated)?;
        ui.success(&format!("Updated recipe #{}.", args.number));
        Ok(CommandResult::success())
    }

    fn remove(
        &self,
        notebook: &NotebookStore<FsStorage>,
        ui: &mut dyn UserInterface,
        args: &MyRemoveArgs,
    ) -> Result<CommandResult> {
        let recipes = notebook.load();

        let Some(index) = checked_index(args.number, recipes.len()) else {
            ui.error(&out_of_range(args.number, recipes.len()));
            return Ok(CommandResult::failure(2));
        };

        let title = recipes[index].title.clone();

        if !args.yes && !ui.confirm(&format!("Remove '{}'?", title), false)? {
            ui.message("Nothing removed.");
            return Ok(CommandResult::success());
        }

        notebook.remove(index)?;
        ui.success(&format!("Removed '{}'.", title));
        Ok(CommandResult::success())
    }
}

impl Command for MyCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let notebook = self.context.notebook();

        match &self.args.command {
            MyCommands::List => {
                self.list(&notebook, ui);
                Ok(CommandResult::success())
            }
            MyCommands::Show(args) => Ok(self.show(&notebook, ui, args)),
            MyCommands::Add(args) => self.add(&notebook, ui, args),
            MyCommands::Edit(args) => self.edit(&notebook, ui, args),
            MyCommands::Remove(args) => self.remove(&notebook, ui, args),
        }
    }
}

/// Convert a 1-based display number to an index into a sequence of
/// `len` elements.
fn checked_index(number: usize, len: usize) -> Option<usize> {
    let index = number.checked_sub(1)?;
    (index < len).then_some(index)
}

fn out_of_range(number: usize, len: usize) -> String {
    if len == 0 {
        format!("No recipe #{}; the notebook is empty.", number)
    } else {
        format!("No recipe #{}; the notebook has {} (1-{}).", number, len, len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::args::Cli;
    use crate::ui::MockUI;
    use clap::Parser;
    use tempfile::TempDir;

    fn command_for(temp: &TempDir, argv: &[&str]) -> MyCommand {
        let mut full = vec!["ladle", "--data-dir", temp.path().to_str().unwrap()];
        full.extend_from_slice(argv);
        let cli = Cli::parse_from(full);

        let context = AppContext::from_cli(&cli).unwrap();
        match cli.command {
            Some(crate::cli::args::Commands::My(args)) => MyCommand::new(&context, args),
            _ => panic!("expected my command"),
        }
    }

    #[test]
    fn add_then_list_shows_recipe() {
        let temp = TempDir::new().unwrap();

        let mut ui = MockUI::new();
        let cmd = command_for(&temp, &["my", "add", "--title", "Flatbread"]);
        let result = cmd.execute(&mut ui).unwrap();
        assert!(result.success);

        let mut ui = MockUI::new();
        let cmd = command_for(&temp, &["my", "list"]);
        cmd.execute(&mut ui).unwrap();
        assert!(ui.all_output().contains("Flatbread"));
    }

    #[test]
    fn add_prompts_for_missing_title() {
        let temp = TempDir::new().unwrap();

        let mut ui = MockUI::new().answer_input("Prompted Pie");
        let cmd = command_for(&temp, &["my", "add"]);
        let result = cmd.execute(&mut ui).unwrap();

        assert!(result.success);
        assert!(ui.all_output().contains("Prompted Pie"));
    }

    #[test]
    fn add_rejects_blank_title() {
        let temp = TempDir::new().unwrap();

        let mut ui = MockUI::new().answer_input("   ");
        let cmd = command_for(&temp, &["my", "add"]);
        let result = cmd.execute(&mut ui).unwrap();

        assert!(!result.success);
    }

    #[test]
    fn edit_with_flags_updates_in_place() {
        let temp = TempDir::new().unwrap();

        let mut ui = MockUI::new();
        command_for(&temp, &["my", "add", "--title", "Flatbread"])
            .execute(&mut ui)
            .unwrap();

        let mut ui = MockUI::new();
        let result = command_for(&temp, &["my", "edit", "1", "--title", "Naan"])
            .execute(&mut ui)
            .unwrap();
        assert!(result.success);

        let mut ui = MockUI::new();
        command_for(&temp, &["my", "list"]).execute(&mut ui).unwrap();
        let output = ui.all_output();
        assert!(output.contains("Naan"));
        assert!(!output.contains("Flatbread"));
    }

    #[test]
    fn remove_asks_for_confirmation() {
        let temp = TempDir::new().unwrap();

        let mut ui = MockUI::new();
        command_for(&temp, &["my", "add", "--title", "Flatbread"])
            .execute(&mut ui)
            .unwrap();

        // Declined: recipe stays.
        let mut ui = MockUI::new().answer_confirm(false);
        command_for(&temp, &["my", "remove", "1"])
            .execute(&mut ui)
            .unwrap();

        let mut ui = MockUI::new();
        command_for(&temp, &["my", "list"]).execute(&mut ui).unwrap();
        assert!(ui.all_output().contains("Flatbread"));

        // Accepted: recipe goes.
        let mut ui = MockUI::new().answer_confirm(true);
        command_for(&temp, &["my", "remove", "1"])
            .execute(&mut ui)
            .unwrap();

        let mut ui = MockUI::new();
        command_for(&temp, &["my", "list"]).execute(&mut ui).unwrap();
        assert!(ui.all_output().contains("No recipes added yet"));
    }

    #[test]
    fn out_of_range_number_fails_politely() {
        let temp = TempDir::new().unwrap();

        let mut ui = MockUI::new();
        let result = command_for(&temp, &["my", "remove", "3", "--yes"])
            .execute(&mut ui)
            .unwrap();

        assert!(!result.success);
        assert!(ui.all_output().contains("empty"));
    }

    #[test]
    fn checked_index_is_one_based() {
        assert_eq!(checked_index(1, 3), Some(0));
        assert_eq!(checked_index(3, 3), Some(2));
        assert_eq!(checked_index(0, 3), None);
        assert_eq!(checked_index(4, 3), None);
    }
}
