//! egui renderer for the application UI.

mod form_panel;
mod model_info;
mod result_panel;
pub mod style;

use eframe::egui::{self, Color32, RichText, Vec2};

use crate::egui_app::controller::EguiController;

/// Smallest viewport the layout still renders sensibly in.
pub const MIN_VIEWPORT_SIZE: Vec2 = Vec2::new(520.0, 640.0);

/// Renders the egui UI using the shared controller state.
pub struct EguiApp {
    controller: EguiController,
    visuals_set: bool,
}

impl EguiApp {
    /// Create a new egui app, loading persisted configuration.
    pub fn new() -> Result<Self, String> {
        let controller = EguiController::from_config()
            .map_err(|err| format!("Failed to load config: {err}"))?;
        tracing::info!("Prediction service at {}", controller.api_base_url());
        Ok(Self::with_controller(controller))
    }

    /// Create the app around an existing controller.
    pub fn with_controller(controller: EguiController) -> Self {
        Self {
            controller,
            visuals_set: false,
        }
    }

    fn apply_visuals(&mut self, ctx: &egui::Context) {
        if self.visuals_set {
            return;
        }
        let mut visuals = egui::Visuals::dark();
        style::apply_visuals(&mut visuals);
        ctx.set_visuals(visuals);
        self.visuals_set = true;
    }

    fn render_top_bar(&mut self, ctx: &egui::Context) {
        let palette = style::palette();
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(
                    RichText::new("CaloriePred")
                        .heading()
                        .color(palette.accent_green),
                );
                ui.add_space(8.0);
                ui.label(
                    RichText::new("Random Forest Calorie Prediction").color(palette.text_muted),
                );
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("Close").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });
            });
        });
    }

    fn render_status(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            let status = &self.controller.ui.status;
            ui.horizontal(|ui| {
                ui.add_space(8.0);
                ui.painter().circle_filled(
                    ui.cursor().min + egui::vec2(9.0, 11.0),
                    9.0,
                    status.badge_color,
                );
                ui.add_space(8.0);
                ui.label(RichText::new(&status.badge_label).color(Color32::WHITE));
                ui.separator();
                ui.label(RichText::new(&status.text).color(Color32::WHITE));
            });
        });
    }
}

impl eframe::App for EguiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.apply_visuals(ctx);
        self.controller.poll_background_jobs();

        self.render_top_bar(ctx);
        self.render_status(ctx);
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .id_salt("main_scroll")
                .show(ui, |ui| {
                    self.render_model_info(ui);
                    ui.add_space(12.0);
                    self.render_form_panel(ui);
                    ui.add_space(12.0);
                    self.render_result_panel(ui);
                });
        });

        // Keep the frame loop alive while a request is in flight so the
        // job channel is drained promptly.
        if self.controller.ui.prediction.submitting {
            ctx.request_repaint_after(std::time::Duration::from_millis(100));
        }
    }
}
