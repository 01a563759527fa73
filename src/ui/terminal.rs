//! Interactive terminal UI.

use dialoguer::{Confirm, Input, Select};

use crate::error::{LadleError, Result};

use super::spinner::ProgressSpinner;
use super::theme::LadleTheme;
use super::{OutputMode, SpinnerHandle, UserInterface};

/// UI for interactive terminal sessions.
pub struct TerminalUI {
    mode: OutputMode,
    theme: LadleTheme,
}

impl TerminalUI {
    pub fn new(mode: OutputMode) -> Self {
        Self {
            mode,
            theme: LadleTheme::new(),
        }
    }

    pub fn theme(&self) -> &LadleTheme {
        &self.theme
    }
}

impl UserInterface for TerminalUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        if self.mode != OutputMode::Quiet {
            println!("{}", msg);
        }
    }

    fn success(&mut self, msg: &str) {
        if self.mode != OutputMode::Quiet {
            println!("{} {}", self.theme.success.apply_to("✓"), msg);
        }
    }

    fn warning(&mut self, msg: &str) {
        println!("{} {}", self.theme.warning.apply_to("!"), msg);
    }

    fn error(&mut self, msg: &str) {
        eprintln!("{} {}", self.theme.error.apply_to("✗"), msg);
    }

    fn confirm(&mut self, question: &str, default: bool) -> Result<bool> {
        Confirm::new()
            .with_prompt(question)
            .default(default)
            .interact()
            .map_err(|e| LadleError::Other(e.into()))
    }

    fn input(&mut self, prompt: &str, initial: Option<&str>) -> Result<String> {
        let mut input = Input::<String>::new().with_prompt(prompt).allow_empty(true);

        if let Some(initial) = initial {
            input = input.with_initial_text(initial);
        }

        input
            .interact_text()
            .map_err(|e| LadleError::Other(e.into()))
    }

    fn select(&mut self, prompt: &str, items: &[String]) -> Result<Option<usize>> {
        Select::new()
            .with_prompt(prompt)
            .items(items)
            .default(0)
            .interact_opt()
            .map_err(|e| LadleError::Other(e.into()))
    }

    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle> {
        if self.mode == OutputMode::Quiet {
            Box::new(ProgressSpinner::hidden())
        } else {
            Box::new(ProgressSpinner::new(message))
        }
    }

    fn is_interactive(&self) -> bool {
        true
    }
}
