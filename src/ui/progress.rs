//! Progress reporting for blocking operations
//!
//! All progress reporting goes through the ProgressReporter trait, so tests
//! and non-interactive callers can swap in the silent implementation.

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

/// Progress reporter trait for long-running operations
pub trait ProgressReporter {
    /// Start reporting with a message
    fn start(&mut self, message: &str);

    /// Finish successfully and clear the indicator
    fn finish(&mut self);

    /// Abandon on error
    fn abandon(&mut self);
}

/// Spinner reporter drawn on stderr
///
/// indicatif hides the spinner automatically when stderr is not a terminal.
#[derive(Default)]
pub struct SpinnerProgressReporter {
    spinner: Option<ProgressBar>,
}

impl SpinnerProgressReporter {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ProgressReporter for SpinnerProgressReporter {
    fn start(&mut self, message: &str) {
        let spinner = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.cyan} {msg}") {
            spinner.set_style(style);
        }
        spinner.set_message(message.to_string());
        spinner.enable_steady_tick(Duration::from_millis(100));
        self.spinner = Some(spinner);
    }

    fn finish(&mut self) {
        if let Some(spinner) = self.spinner.take() {
            spinner.finish_and_clear();
        }
    }

    fn abandon(&mut self) {
        if let Some(spinner) = self.spinner.take() {
            spinner.abandon();
        }
    }
}

/// Silent progress reporter
///
/// No-op implementation that does not display anything.
#[derive(Default)]
pub struct SilentProgressReporter;

impl ProgressReporter for SilentProgressReporter {
    fn start(&mut self, _message: &str) {
        // No-op for silent mode
    }

    fn finish(&mut self) {
        // No-op for silent mode
    }

    fn abandon(&mut self) {
        // No-op for silent mode
    }
}
