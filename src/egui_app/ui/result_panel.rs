//! Rendering of the prediction outcome.

use eframe::egui::{self, RichText, Ui};

use super::EguiApp;
use super::style;

impl EguiApp {
    /// Render the spinner, error panel or result panel.
    ///
    /// A newer error hides an older result; the result itself is never
    /// cleared and reappears once a later attempt succeeds.
    pub(super) fn render_result_panel(&mut self, ui: &mut Ui) {
        let palette = style::palette();
        let prediction = &self.controller.ui.prediction;

        if prediction.submitting {
            ui.horizontal(|ui| {
                ui.add(egui::Spinner::new().size(18.0));
                ui.label(RichText::new("Memproses…").color(palette.text_muted));
            });
            return;
        }

        if let Some(error) = prediction.last_error.as_ref() {
            ui.group(|ui| {
                ui.label(
                    RichText::new(error)
                        .color(style::status_badge_color(style::StatusTone::Error)),
                );
            });
            return;
        }

        if let Some(result) = prediction.result.as_ref() {
            ui.group(|ui| {
                ui.vertical_centered(|ui| {
                    ui.label(
                        RichText::new("Prediksi Kalori")
                            .heading()
                            .color(palette.text_primary),
                    );
                    ui.add_space(4.0);
                    ui.label(
                        RichText::new(format!("{:.1}", result.predicted_calories))
                            .size(42.0)
                            .strong()
                            .color(palette.accent_green),
                    );
                    ui.label(RichText::new("kalori akan terbakar").color(palette.text_muted));
                });
            });
        }
    }
}
