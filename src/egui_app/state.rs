//! Shared state types for the egui UI.

use egui::Color32;

use crate::egui_app::ui::style;
use crate::prediction::{PredictionInput, PredictionResult};

/// Top-level UI model consumed by the egui renderer.
#[derive(Clone, Debug, Default)]
pub struct UiState {
    /// Footer status badge and message.
    pub status: StatusBarState,
    /// The editable form inputs.
    pub form: PredictionFormState,
    /// Submission lifecycle and the last outcome.
    pub prediction: PredictionUiState,
}

/// Status badge + text shown in the footer.
#[derive(Clone, Debug, PartialEq)]
pub struct StatusBarState {
    /// Main status message text.
    pub text: String,
    /// Badge label shown next to the status.
    pub badge_label: String,
    /// Badge color.
    pub badge_color: Color32,
}

impl Default for StatusBarState {
    fn default() -> Self {
        Self::idle()
    }
}

impl StatusBarState {
    /// Default status shown before any submission.
    pub fn idle() -> Self {
        Self {
            text: "Masukkan data aktivitas dan tekan Prediksi Kalori".into(),
            badge_label: "Idle".into(),
            badge_color: style::status_badge_color(style::StatusTone::Idle),
        }
    }
}

/// Current values of the seven form fields.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PredictionFormState {
    /// The input record as it will be submitted.
    pub input: PredictionInput,
}

/// UI state for the prediction round trip.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PredictionUiState {
    /// True between dispatching the request and consuming its outcome.
    pub submitting: bool,
    /// Last failure message; cleared when a new attempt starts.
    pub last_error: Option<String>,
    /// Last successful result. Never cleared, only hidden behind a
    /// newer error in the renderer.
    pub result: Option<PredictionResult>,
}
