//! Typing indicator shown while a reply is pending

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Spinner standing in for the tutor "typing"
///
/// Cleared when stopped or dropped, so an early return never leaves it on
/// screen.
pub struct TypingIndicator {
    bar: Option<ProgressBar>,
}

impl TypingIndicator {
    /// Start the spinner, or a no-op indicator when `enabled` is false
    pub fn start(enabled: bool) -> Self {
        if !enabled {
            return Self { bar: None };
        }

        let bar = ProgressBar::new_spinner();
        bar.set_style(Self::style());
        bar.set_message("Tutor is typing...");
        bar.enable_steady_tick(Duration::from_millis(120));
        Self { bar: Some(bar) }
    }

    pub fn is_active(&self) -> bool {
        self.bar.is_some()
    }

    pub fn stop(mut self) {
        self.clear();
    }

    fn style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
            .tick_chars("⠁⠂⠄⡀⢀⠠⠐⠈ ")
    }

    fn clear(&mut self) {
        if let Some(bar) = self.bar.take() {
            bar.finish_and_clear();
        }
    }
}

impl Drop for TypingIndicator {
    fn drop(&mut self) {
        self.clear();
    }
}
