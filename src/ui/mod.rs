//! Terminal user interface components.
//!
//! This module provides:
//! - [`UserInterface`] trait for UI abstraction
//! - [`TerminalUI`] for interactive terminal usage
//! - [`NonInteractiveUI`] for CI/headless environments
//! - [`MockUI`] for scripting prompts in tests
//! - Spinners, tables, and the recipe detail card

pub mod detail;
pub mod mock;
pub mod non_interactive;
pub mod spinner;
pub mod table;
pub mod terminal;
pub mod theme;

pub use detail::{render_custom_recipe, render_recipe_detail};
pub use mock::MockUI;
pub use non_interactive::NonInteractiveUI;
pub use spinner::ProgressSpinner;
pub use table::Table;
pub use terminal::TerminalUI;
pub use theme::LadleTheme;

use crate::error::Result;

/// How much output to produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Normal,
    Quiet,
    Verbose,
}

/// Trait for user interface interactions.
///
/// Commands talk to the terminal only through this trait, so tests can
/// script prompts and capture output with [`MockUI`].
pub trait UserInterface {
    /// Get the current output mode.
    fn output_mode(&self) -> OutputMode;

    /// Display a message to the user.
    fn message(&mut self, msg: &str);

    /// Display a success message.
    fn success(&mut self, msg: &str);

    /// Display a warning message.
    fn warning(&mut self, msg: &str);

    /// Display an error message.
    fn error(&mut self, msg: &str);

    /// Ask a yes/no question.
    fn confirm(&mut self, question: &str, default: bool) -> Result<bool>;

    /// Ask for a line of text. `initial` pre-fills the answer when the
    /// backend supports editing.
    fn input(&mut self, prompt: &str, initial: Option<&str>) -> Result<String>;

    /// Pick one of `items`. Returns `None` when the user backs out.
    fn select(&mut self, prompt: &str, items: &[String]) -> Result<Option<usize>>;

    /// Start a spinner for an operation.
    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle>;

    /// Check if running in interactive mode.
    fn is_interactive(&self) -> bool;
}

/// Handle for controlling a spinner.
pub trait SpinnerHandle {
    /// Update the spinner message.
    fn set_message(&mut self, msg: &str);

    /// Mark the operation as successful.
    fn finish_success(&mut self, msg: &str);

    /// Mark the operation as failed.
    fn finish_error(&mut self, msg: &str);

    /// Stop and erase the spinner line.
    fn finish_clear(&mut self);
}

/// Create the appropriate UI for the session.
pub fn create_ui(interactive: bool, mode: OutputMode) -> Box<dyn UserInterface> {
    if interactive {
        Box::new(TerminalUI::new(mode))
    } else {
        Box::new(NonInteractiveUI::new(mode))
    }
}
