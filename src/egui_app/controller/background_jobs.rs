//! Per-frame draining of background job outcomes.

use super::EguiController;
use super::jobs::{JobMessage, PredictionJobResult};
use crate::egui_app::ui::style::StatusTone;

impl EguiController {
    /// Drain and apply all pending job messages. Called once per frame.
    pub fn poll_background_jobs(&mut self) {
        loop {
            let message = match self.jobs.try_recv_message() {
                Ok(message) => message,
                Err(
                    std::sync::mpsc::TryRecvError::Empty
                    | std::sync::mpsc::TryRecvError::Disconnected,
                ) => return,
            };
            match message {
                JobMessage::PredictionFinished(message) => {
                    self.handle_prediction_finished(message);
                }
            }
        }
    }

    fn handle_prediction_finished(&mut self, message: PredictionJobResult) {
        self.jobs.clear_prediction();
        self.ui.prediction.submitting = false;
        match message.result {
            Ok(result) => {
                self.ui.prediction.last_error = None;
                self.ui.prediction.result = Some(result);
                self.set_status(
                    format!("Prediksi selesai: {:.1} kalori", result.predicted_calories),
                    StatusTone::Info,
                );
                tracing::info!(
                    calories = result.predicted_calories,
                    "Prediction request finished"
                );
            }
            Err(err) => {
                self.ui.prediction.last_error = Some(err.to_string());
                self.set_status("Prediksi gagal", StatusTone::Error);
                tracing::warn!("Prediction request failed: {err}");
            }
        }
    }
}
