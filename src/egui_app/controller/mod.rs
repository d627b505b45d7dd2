//! Controller bridging form state, validation and the prediction client
//! to the egui renderer.

mod background_jobs;
mod jobs;

use crate::config;
use crate::egui_app::state::UiState;
use crate::egui_app::ui::style::{self, StatusTone};
use crate::prediction;

use jobs::{ControllerJobs, PredictionJob};

/// Maintains app state and bridges the prediction client to the egui UI.
pub struct EguiController {
    /// Render-facing state.
    pub ui: UiState,
    api_base_url: String,
    jobs: ControllerJobs,
}

impl EguiController {
    /// Create a controller submitting to the given base URL.
    pub fn new(api_base_url: impl Into<String>) -> Self {
        Self {
            ui: UiState::default(),
            api_base_url: api_base_url.into(),
            jobs: ControllerJobs::new(),
        }
    }

    /// Create a controller from the persisted configuration.
    pub fn from_config() -> Result<Self, config::ConfigError> {
        let cfg = config::load_or_default()?;
        Ok(Self::new(cfg.effective_api_base_url()))
    }

    /// Base URL the prediction client submits to.
    pub fn api_base_url(&self) -> &str {
        &self.api_base_url
    }

    /// Update the footer status message and badge.
    pub fn set_status(&mut self, text: impl Into<String>, tone: StatusTone) {
        self.ui.status.text = text.into();
        self.ui.status.badge_label = tone.label().to_string();
        self.ui.status.badge_color = style::status_badge_color(tone);
    }

    /// Validate the form and dispatch the prediction request.
    ///
    /// On a range violation the submission is aborted before any network
    /// activity and the violation is surfaced as a warning status. A second
    /// submission while one is in flight is ignored.
    pub fn submit_prediction(&mut self) {
        if self.ui.prediction.submitting {
            return;
        }
        let input = self.ui.form.input;
        if let Err(violation) = prediction::validate(&input) {
            self.set_status(violation.to_string(), StatusTone::Warning);
            return;
        }

        self.ui.prediction.submitting = true;
        self.ui.prediction.last_error = None;
        self.set_status("Memproses prediksi…", StatusTone::Info);
        tracing::info!("Submitting prediction request");
        self.jobs.begin_prediction(PredictionJob {
            base_url: self.api_base_url.clone(),
            input,
        });
    }
}
