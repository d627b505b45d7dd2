//! The prediction input form.

use eframe::egui::{self, RichText, Ui};

use super::EguiApp;
use super::style;
use crate::prediction::InputField;

impl EguiApp {
    /// Render the seven input fields and the submit button.
    pub(super) fn render_form_panel(&mut self, ui: &mut Ui) {
        let palette = style::palette();
        let submitting = self.controller.ui.prediction.submitting;

        ui.group(|ui| {
            ui.label(
                RichText::new("Prediksi Kalori Anda")
                    .heading()
                    .color(palette.text_primary),
            );
            ui.label(
                RichText::new("Masukkan data aktivitas fisik Anda untuk mendapatkan prediksi")
                    .color(palette.text_muted),
            );
            ui.add_space(8.0);

            ui.label(RichText::new("Informasi Pribadi").color(palette.accent_green));
            ui.add_space(4.0);
            egui::Grid::new("form_personal")
                .num_columns(2)
                .spacing([16.0, 8.0])
                .show(ui, |ui| {
                    self.render_gender_row(ui, submitting);
                    ui.end_row();
                    self.render_numeric_row(ui, InputField::Age, 1.0, submitting);
                    ui.end_row();
                    self.render_numeric_row(ui, InputField::Height, 1.0, submitting);
                    ui.end_row();
                    self.render_numeric_row(ui, InputField::Weight, 1.0, submitting);
                    ui.end_row();
                });

            ui.add_space(8.0);
            ui.label(RichText::new("Informasi Aktivitas").color(palette.accent_emerald));
            ui.add_space(4.0);
            egui::Grid::new("form_activity")
                .num_columns(2)
                .spacing([16.0, 8.0])
                .show(ui, |ui| {
                    self.render_numeric_row(ui, InputField::Duration, 1.0, submitting);
                    ui.end_row();
                    self.render_numeric_row(ui, InputField::HeartRate, 1.0, submitting);
                    ui.end_row();
                    self.render_numeric_row(ui, InputField::BodyTemp, 0.1, submitting);
                    ui.end_row();
                });

            ui.add_space(12.0);
            let mut submit_clicked = false;
            ui.horizontal(|ui| {
                if ui
                    .add_enabled(!submitting, egui::Button::new("Prediksi Kalori"))
                    .clicked()
                {
                    submit_clicked = true;
                }
                if submitting {
                    ui.add_space(8.0);
                    ui.add(egui::Spinner::new().size(16.0));
                    ui.label(RichText::new("Memproses…").color(palette.text_muted));
                }
            });
            if submit_clicked {
                self.controller.submit_prediction();
            }
        });
    }

    fn render_gender_row(&mut self, ui: &mut Ui, submitting: bool) {
        let palette = style::palette();
        ui.label(RichText::new(InputField::Gender.label()).color(palette.text_primary));
        let input = &mut self.controller.ui.form.input;
        let mut is_male = input.gender >= 0.5;
        ui.add_enabled_ui(!submitting, |ui| {
            egui::ComboBox::from_id_salt("gender_combo")
                .selected_text(if is_male { "Laki-laki" } else { "Perempuan" })
                .show_ui(ui, |ui| {
                    ui.selectable_value(&mut is_male, true, "Laki-laki");
                    ui.selectable_value(&mut is_male, false, "Perempuan");
                });
        });
        input.gender = if is_male { 1.0 } else { 0.0 };
    }

    fn render_numeric_row(&mut self, ui: &mut Ui, field: InputField, speed: f64, submitting: bool) {
        let palette = style::palette();
        let label = match field.unit() {
            Some(unit) => format!("{} ({unit})", field.label()),
            None => field.label().to_string(),
        };
        ui.label(RichText::new(label).color(palette.text_primary));
        let value = self.field_value_mut(field);
        ui.add_enabled(
            !submitting,
            egui::DragValue::new(value)
                .range(field.widget_range())
                .speed(speed),
        );
    }

    fn field_value_mut(&mut self, field: InputField) -> &mut f64 {
        let input = &mut self.controller.ui.form.input;
        match field {
            InputField::Age => &mut input.age,
            InputField::Height => &mut input.height,
            InputField::Weight => &mut input.weight,
            InputField::Duration => &mut input.duration,
            InputField::HeartRate => &mut input.heart_rate,
            InputField::BodyTemp => &mut input.body_temp,
            InputField::Gender => &mut input.gender,
        }
    }
}
