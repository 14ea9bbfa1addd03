// Confirm/alert dialogs behind a trait, so the dashboard logic can
// be driven by the terminal in the binary and by a script in tests.

use crate::error::{DashboardError, Result};
use crossterm::style::{style, Stylize};
use dialoguer::Confirm;
use indicatif::{ProgressBar, ProgressStyle};
use std::cell::RefCell;
use std::time::Duration;

pub trait Prompter {
    /// Blocking yes/no question. `Ok(false)` means the user declined.
    fn confirm(&self, message: &str) -> Result<bool>;

    /// Failure notice shown once. Returns without waiting for the user; the
    /// operation that raised it has already given up.
    fn alert(&self, message: &str);

    /// Called right before a request goes out.
    fn request_started(&self, _label: &str) {}

    /// Called when the request finished, whatever its outcome.
    fn request_finished(&self) {}
}

/// Terminal dialogs: `dialoguer` for questions, a red line above the next
/// menu for alerts, an `indicatif` spinner while a request is in flight.
#[derive(Default)]
pub struct TerminalPrompter {
    spinner: RefCell<Option<ProgressBar>>,
}

impl TerminalPrompter {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Prompter for TerminalPrompter {
    fn confirm(&self, message: &str) -> Result<bool> {
        Confirm::new()
            .with_prompt(message)
            .default(false)
            .interact()
            .map_err(|e| DashboardError::Prompt(e.to_string()))
    }

    fn alert(&self, message: &str) {
        self.request_finished();
        println!("{}", style(message).red().bold());
    }

    fn request_started(&self, label: &str) {
        let spinner = ProgressBar::new_spinner();
        if let Ok(template) = ProgressStyle::with_template("{spinner} {msg}") {
            spinner.set_style(template);
        }
        spinner.set_message(label.to_string());
        spinner.enable_steady_tick(Duration::from_millis(100));
        *self.spinner.borrow_mut() = Some(spinner);
    }

    fn request_finished(&self) {
        if let Some(spinner) = self.spinner.borrow_mut().take() {
            spinner.finish_and_clear();
        }
    }
}
