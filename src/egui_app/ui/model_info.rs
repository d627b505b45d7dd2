//! Static description of the backing model.

use eframe::egui::{RichText, Ui};

use super::EguiApp;
use super::style;

struct Metric {
    value: &'static str,
    name: &'static str,
    note: &'static str,
}

const METRICS: [Metric; 3] = [
    Metric {
        value: "99.79%",
        name: "R² Score",
        note: "Proporsi variansi yang dijelaskan model",
    },
    Metric {
        value: "8.46",
        name: "MSE",
        note: "Mean Squared Error yang sangat rendah",
    },
    Metric {
        value: "1.82",
        name: "MAE",
        note: "Mean Absolute Error minimal",
    },
];

impl EguiApp {
    /// Render the informational section about the remote model.
    pub(super) fn render_model_info(&mut self, ui: &mut Ui) {
        let palette = style::palette();
        ui.group(|ui| {
            ui.label(
                RichText::new("Random Forest Regression")
                    .heading()
                    .color(palette.text_primary),
            );
            ui.label(
                RichText::new(
                    "Algoritma ensemble berbasis banyak decision tree untuk prediksi \
                     pembakaran kalori berdasarkan aktivitas fisik Anda.",
                )
                .color(palette.text_muted),
            );
            ui.add_space(8.0);
            ui.columns(METRICS.len(), |columns| {
                for (column, metric) in columns.iter_mut().zip(METRICS.iter()) {
                    column.vertical_centered(|ui| {
                        ui.label(
                            RichText::new(metric.value)
                                .size(26.0)
                                .strong()
                                .color(palette.accent_emerald),
                        );
                        ui.label(RichText::new(metric.name).color(palette.text_primary));
                        ui.label(
                            RichText::new(metric.note)
                                .small()
                                .color(palette.text_muted),
                        );
                    });
                }
            });
        });
    }
}
