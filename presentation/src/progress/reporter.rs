//! Progress reporting while the model is working

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use reasoner_application::ports::progress::ProgressNotifier;
use reasoner_domain::{Model, ReasoningApproach};
use std::sync::Mutex;
use std::time::Duration;

/// Spinner text shown while a request is outstanding
pub const SPINNER_MESSAGE: &str = "Analyzing...";

/// Reports progress with an animated spinner
pub struct ProgressReporter {
    spinner: Mutex<Option<ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            spinner: Mutex::new(None),
        }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::with_template("{spinner:.green} {msg} {elapsed:.dim}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressNotifier for ProgressReporter {
    fn on_request_start(&self, _model: &Model, _approach: ReasoningApproach) {
        let pb = ProgressBar::new_spinner();
        pb.set_style(Self::spinner_style());
        pb.set_message(SPINNER_MESSAGE);
        pb.enable_steady_tick(Duration::from_millis(100));

        if let Ok(mut slot) = self.spinner.lock() {
            *slot = Some(pb);
        }
    }

    fn on_request_complete(&self, _model: &Model, _success: bool) {
        if let Ok(mut slot) = self.spinner.lock()
            && let Some(pb) = slot.take()
        {
            pb.finish_and_clear();
        }
    }
}

/// Simple text-based progress (no fancy UI)
pub struct SimpleProgress;

impl ProgressNotifier for SimpleProgress {
    fn on_request_start(&self, model: &Model, approach: ReasoningApproach) {
        println!(
            "{} {} ({}, {})",
            "->".cyan(),
            SPINNER_MESSAGE.bold(),
            model,
            approach
        );
    }

    fn on_request_complete(&self, model: &Model, success: bool) {
        if !success {
            println!("  {} {} (failed)", "x".red(), model);
        }
    }
}
