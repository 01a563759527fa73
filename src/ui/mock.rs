//! Mock UI for testing commands.

use std::collections::VecDeque;

use crate::error::{LadleError, Result};

use super::{OutputMode, SpinnerHandle, UserInterface};

/// Scriptable UI that records everything shown to the user.
#[derive(Default)]
pub struct MockUI {
    /// Queued answers for `confirm`.
    pub confirm_answers: VecDeque<bool>,
    /// Queued answers for `input`.
    pub input_answers: VecDeque<String>,
    /// Queued answers for `select`.
    pub select_answers: VecDeque<Option<usize>>,

    /// Captured output lines, in order.
    pub messages: Vec<String>,
    pub successes: Vec<String>,
    pub warnings: Vec<String>,
    pub errors: Vec<String>,
}

impl MockUI {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue an answer for the next `confirm` call.
    pub fn answer_confirm(mut self, answer: bool) -> Self {
        self.confirm_answers.push_back(answer);
        self
    }

    /// Queue an answer for the next `input` call.
    pub fn answer_input(mut self, answer: impl Into<String>) -> Self {
        self.input_answers.push_back(answer.into());
        self
    }

    /// Queue an answer for the next `select` call.
    pub fn answer_select(mut self, answer: Option<usize>) -> Self {
        self.select_answers.push_back(answer);
        self
    }

    /// Everything captured, flattened for assertions.
    pub fn all_output(&self) -> String {
        let mut lines = Vec::new();
        lines.extend(self.messages.iter().cloned());
        lines.extend(self.successes.iter().cloned());
        lines.extend(self.warnings.iter().cloned());
        lines.extend(self.errors.iter().cloned());
        lines.join("\n")
    }
}

struct MockSpinner;

impl SpinnerHandle for MockSpinner {
    fn set_message(&mut self, _msg: &str) {}
    fn finish_success(&mut self, _msg: &str) {}
    fn finish_error(&mut self, _msg: &str) {}
    fn finish_clear(&mut self) {}
}

impl UserInterface for MockUI {
    fn output_mode(&self) -> OutputMode {
        OutputMode::Normal
    }

    fn message(&mut self, msg: &str) {
        self.messages.push(msg.to_string());
    }

    fn success(&mut self, msg: &str) {
        self.successes.push(msg.to_string());
    }

    fn warning(&mut self, msg: &str) {
        self.warnings.push(msg.to_string());
    }

    fn error(&mut self, msg: &str) {
        self.errors.push(msg.to_string());
    }

    fn confirm(&mut self, question: &str, _default: bool) -> Result<bool> {
        self.confirm_answers
            .pop_front()
            .ok_or_else(|| LadleError::NotInteractive {
                prompt: question.to_string(),
            })
    }

    fn input(&mut self, prompt: &str, _initial: Option<&str>) -> Result<String> {
        self.input_answers
            .pop_front()
            .ok_or_else(|| LadleError::NotInteractive {
                prompt: prompt.to_string(),
            })
    }

    fn select(&mut self, prompt: &str, _items: &[String]) -> Result<Option<usize>> {
        self.select_answers
            .pop_front()
            .ok_or_else(|| LadleError::NotInteractive {
                prompt: prompt.to_string(),
            })
    }

    fn start_spinner(&mut self, _message: &str) -> Box<dyn SpinnerHandle> {
        Box::new(MockSpinner)
    }

    fn is_interactive(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scripted_answers_are_consumed_in_order() {
        let mut ui = MockUI::new()
            .answer_confirm(true)
            .answer_input("Flatbread")
            .answer_select(Some(2));

        assert!(ui.confirm("sure?", false).unwrap());
        assert_eq!(ui.input("title", None).unwrap(), "Flatbread");
        assert_eq!(ui.select("pick", &[]).unwrap(), Some(2));

        // Exhausted queues fail like a closed terminal.
        assert!(ui.confirm("again?", false).is_err());
    }

    #[test]
    fn output_is_captured_by_level() {
        let mut ui = MockUI::new();
        ui.message("plain");
        ui.success("done");
        ui.warning("careful");
        ui.error("broken");

        assert_eq!(ui.messages, ["plain"]);
        assert_eq!(ui.successes, ["done"]);
        assert!(ui.all_output().contains("careful"));
        assert!(ui.all_output().contains("broken"));
    }
}
