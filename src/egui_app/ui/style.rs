//! Palette and shared visual tuning for the UI.

use egui::{Color32, Stroke, Visuals};

/// Tone of the footer status badge.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusTone {
    Idle,
    Info,
    Warning,
    Error,
}

impl StatusTone {
    /// Badge label for this tone.
    pub fn label(self) -> &'static str {
        match self {
            Self::Idle => "Idle",
            Self::Info => "Info",
            Self::Warning => "Warning",
            Self::Error => "Error",
        }
    }
}

/// Badge color for a status tone.
pub fn status_badge_color(tone: StatusTone) -> Color32 {
    match tone {
        StatusTone::Idle => Color32::from_rgb(42, 42, 42),
        StatusTone::Info => Color32::from_rgb(64, 140, 112),
        StatusTone::Warning => Color32::from_rgb(192, 138, 43),
        StatusTone::Error => Color32::from_rgb(192, 57, 43),
    }
}

#[derive(Clone, Copy)]
pub struct Palette {
    pub bg_primary: Color32,
    pub bg_secondary: Color32,
    pub panel_outline: Color32,
    pub text_primary: Color32,
    pub text_muted: Color32,
    pub accent_green: Color32,
    pub accent_emerald: Color32,
    pub warning: Color32,
}

/// Green/emerald palette matching the CaloriePred branding.
pub fn palette() -> Palette {
    Palette {
        bg_primary: Color32::from_rgb(12, 16, 14),
        bg_secondary: Color32::from_rgb(20, 26, 22),
        panel_outline: Color32::from_rgb(38, 48, 42),
        text_primary: Color32::from_rgb(190, 198, 192),
        text_muted: Color32::from_rgb(136, 146, 140),
        accent_green: Color32::from_rgb(74, 192, 128),
        accent_emerald: Color32::from_rgb(52, 168, 130),
        warning: Color32::from_rgb(200, 128, 96),
    }
}

/// Apply the palette to egui's dark visuals.
pub fn apply_visuals(visuals: &mut Visuals) {
    let palette = palette();
    visuals.window_fill = palette.bg_primary;
    visuals.panel_fill = palette.bg_secondary;
    visuals.override_text_color = Some(palette.text_primary);
    visuals.hyperlink_color = palette.accent_green;
    visuals.extreme_bg_color = palette.bg_primary;
    visuals.faint_bg_color = palette.bg_secondary;
    visuals.error_fg_color = palette.warning;
    visuals.warn_fg_color = palette.warning;
    visuals.selection.bg_fill = palette.panel_outline;
    visuals.selection.stroke = Stroke::new(1.0, palette.accent_green);
    visuals.widgets.noninteractive.fg_stroke = Stroke::new(1.0, palette.text_primary);
}
