//! Progress spinners.

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

use super::theme::LadleTheme;
use super::SpinnerHandle;

/// A progress spinner for catalog fetches and other waits.
pub struct ProgressSpinner {
    bar: ProgressBar,
    theme: LadleTheme,
}

impl ProgressSpinner {
    /// Create a new spinner with a message.
    pub fn new(message: &str) -> Self {
        let bar = ProgressBar::new_spinner();
        bar.set_style(
            ProgressStyle::default_spinner()
                .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏")
                .template("{spinner:.cyan} {msg}")
                .unwrap(),
        );
        bar.set_message(message.to_string());
        bar.enable_steady_tick(Duration::from_millis(80));

        Self {
            bar,
            theme: LadleTheme::new(),
        }
    }

    /// Create a spinner that doesn't show (for quiet mode).
    pub fn hidden() -> Self {
        Self {
            bar: ProgressBar::hidden(),
            theme: LadleTheme::new(),
        }
    }
}

impl SpinnerHandle for ProgressSpinner {
    fn set_message(&mut self, msg: &str) {
        self.bar.set_message(msg.to_string());
    }

    fn finish_success(&mut self, msg: &str) {
        self.bar.finish_and_clear();
        println!("{} {}", self.theme.success.apply_to("✓"), msg);
    }

    fn finish_error(&mut self, msg: &str) {
        self.bar.finish_and_clear();
        eprintln!("{} {}", self.theme.error.apply_to("✗"), msg);
    }

    fn finish_clear(&mut self) {
        self.bar.finish_and_clear();
    }
}
