//! Progress reporting while waiting for the model

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use smartconv_application::AskProgressNotifier;
use smartconv_domain::ModelId;
use std::sync::Mutex;
use std::time::Duration;

/// Spinner shown on stderr during an AI request
pub struct SpinnerProgress {
    bar: Mutex<Option<ProgressBar>>,
}

impl SpinnerProgress {
    pub fn new() -> Self {
        Self {
            bar: Mutex::new(None),
        }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg} {elapsed:.dim}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }

    fn slot(&self) -> std::sync::MutexGuard<'_, Option<ProgressBar>> {
        self.bar.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl Default for SpinnerProgress {
    fn default() -> Self {
        Self::new()
    }
}

impl AskProgressNotifier for SpinnerProgress {
    fn on_request_start(&self, model: &ModelId) {
        let pb = ProgressBar::new_spinner();
        pb.set_style(Self::spinner_style());
        pb.set_message(format!("Thinking ({})...", model));
        pb.enable_steady_tick(Duration::from_millis(100));

        *self.slot() = Some(pb);
    }

    fn on_request_end(&self, success: bool) {
        if let Some(pb) = self.slot().take() {
            if success {
                pb.finish_and_clear();
            } else {
                pb.abandon_with_message(format!("{}", "request failed".red()));
            }
        }
    }
}

/// Simple text-based progress (no animation), for non-interactive output
pub struct SimpleProgress;

impl AskProgressNotifier for SimpleProgress {
    fn on_request_start(&self, model: &ModelId) {
        eprintln!("{} Asking {}...", "->".cyan(), model.to_string().bold());
    }

    fn on_request_end(&self, success: bool) {
        if !success {
            eprintln!("  {} request failed", "x".red());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spinner_lifecycle() {
        let progress = SpinnerProgress::new();
        progress.on_request_start(&ModelId::Gemini15Flash);
        assert!(progress.slot().is_some());
        progress.on_request_end(true);
        assert!(progress.slot().is_none());
    }

    #[test]
    fn test_end_without_start_is_noop() {
        let progress = SpinnerProgress::new();
        progress.on_request_end(false);
        assert!(progress.slot().is_none());
    }
}
