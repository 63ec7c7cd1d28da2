//! Progress reporting for description generation

use colored::Colorize;
use estate_application::GenerationProgress;
use estate_domain::RequestPhase;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::Mutex;
use std::time::Duration;

/// Spinner on stderr while the backend is working
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
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {prefix:.bold} {msg} ({elapsed})")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }

    fn phase_message(phase: RequestPhase) -> &'static str {
        match phase {
            RequestPhase::Received => "Request received",
            RequestPhase::Validating => "Checking input",
            RequestPhase::Invalid => "Input rejected",
            RequestPhase::Dispatching => "Writing description...",
            RequestPhase::Generated => "Description ready",
            RequestPhase::ServiceFailed => "Generation failed",
        }
    }

    fn finish(&self, phase: RequestPhase) {
        let Ok(mut guard) = self.spinner.lock() else {
            return;
        };
        if let Some(pb) = guard.take() {
            let message = match phase {
                RequestPhase::Generated => Self::phase_message(phase).green().to_string(),
                _ => Self::phase_message(phase).red().to_string(),
            };
            pb.finish_with_message(message);
        }
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl GenerationProgress for ProgressReporter {
    fn on_phase(&self, phase: RequestPhase) {
        if phase.is_terminal() {
            self.finish(phase);
            return;
        }
        if let Ok(guard) = self.spinner.lock()
            && let Some(pb) = guard.as_ref()
        {
            pb.set_message(Self::phase_message(phase));
        }
    }

    fn on_dispatch(&self, backend: &str) {
        let pb = ProgressBar::new_spinner();
        pb.set_style(Self::spinner_style());
        pb.set_prefix(backend.to_string());
        pb.set_message(Self::phase_message(RequestPhase::Dispatching));
        pb.enable_steady_tick(Duration::from_millis(100));

        if let Ok(mut guard) = self.spinner.lock() {
            *guard = Some(pb);
        }
    }
}

/// Plain line-per-phase progress for non-interactive terminals
pub struct SimpleProgress;

impl GenerationProgress for SimpleProgress {
    fn on_phase(&self, phase: RequestPhase) {
        eprintln!("{} {}", "->".cyan(), ProgressReporter::phase_message(phase));
    }
}
