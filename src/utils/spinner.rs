use crate::utils::logger::{LogLevel, Logger};
use indicatif::{ProgressBar, ProgressStyle};
use std::cell::Cell;
use std::time::Duration;

pub struct Spinner {
    bar: ProgressBar,
    active: Cell<bool>,
}

impl Spinner {
    pub fn new(message: impl Into<String>) -> Self {
        let bar = ProgressBar::new_spinner();
        let style = ProgressStyle::with_template("{spinner} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
            .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"]);
        bar.set_style(style);
        bar.set_message(message.into());
        bar.enable_steady_tick(Duration::from_millis(80));

        Spinner {
            bar,
            active: Cell::new(true),
        }
    }

    pub fn succeed(&self, message: impl Into<String>) {
        if self.active.get() {
            // Clear spinner then emit a structured success log via Logger
            self.bar.finish_and_clear();
            Logger::new().log_message(LogLevel::Success, &message.into());
            self.active.set(false);
        }
    }

    pub fn fail(&self, message: impl Into<String>) {
        if self.active.get() {
            self.bar.finish_and_clear();
            Logger::new().log_message(LogLevel::Error, &message.into());
            self.active.set(false);
        }
    }

    pub fn finish_and_clear(&self) {
        if self.active.get() {
            self.bar.finish_and_clear();
            self.active.set(false);
        }
    }
}

impl Drop for Spinner {
    fn drop(&mut self) {
        if self.active.get() {
            self.bar.abandon();
            self.active.set(false);
        }
    }
}

pub fn with_spinner(message: &str) -> Spinner {
    Spinner::new(message)
}
