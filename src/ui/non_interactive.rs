//! Plain-output UI for pipes, scripts, and CI.

use crate::error::{LadleError, Result};

use super::spinner::ProgressSpinner;
use super::{OutputMode, SpinnerHandle, UserInterface};

/// UI that never prompts and prints without decoration.
///
/// Confirmations resolve to their defaults; anything that genuinely
/// needs an answer fails with [`LadleError::NotInteractive`].
pub struct NonInteractiveUI {
    mode: OutputMode,
}

impl NonInteractiveUI {
    pub fn new(mode: OutputMode) -> Self {
        Self { mode }
    }
}

impl UserInterface for NonInteractiveUI {
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
            println!("{}", msg);
        }
    }

    fn warning(&mut self, msg: &str) {
        println!("warning: {}", msg);
    }

    fn error(&mut self, msg: &str) {
        eprintln!("error: {}", msg);
    }

    fn confirm(&mut self, _question: &str, default: bool) -> Result<bool> {
        Ok(default)
    }

    fn input(&mut self, prompt: &str, initial: Option<&str>) -> Result<String> {
        match initial {
            Some(initial) => Ok(initial.to_string()),
            None => Err(LadleError::NotInteractive {
                prompt: prompt.to_string(),
            }),
        }
    }

    fn select(&mut self, prompt: &str, _items: &[String]) -> Result<Option<usize>> {
        Err(LadleError::NotInteractive {
            prompt: prompt.to_string(),
        })
    }

    fn start_spinner(&mut self, _message: &str) -> Box<dyn SpinnerHandle> {
        Box::new(ProgressSpinner::hidden())
    }

    fn is_interactive(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn confirm_returns_default() {
        let mut ui = NonInteractiveUI::new(OutputMode::Quiet);
        assert!(ui.confirm("delete?", true).unwrap());
        assert!(!ui.confirm("delete?", false).unwrap());
    }

    #[test]
    fn input_needs_an_initial_value() {
        let mut ui = NonInteractiveUI::new(OutputMode::Quiet);
        assert_eq!(ui.input("title", Some("Flatbread")).unwrap(), "Flatbread");
        assert!(ui.input("title", None).is_err());
    }

    #[test]
    fn select_fails() {
        let mut ui = NonInteractiveUI::new(OutputMode::Quiet);
        assert!(ui.select("pick", &["a".to_string()]).is_err());
    }
}
