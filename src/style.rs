// Layout constants and theming for Markpad

use eframe::egui;

// --- Sizing ---
pub const ROW_HEIGHT: f32 = 24.0;
pub const ICON_COL_WIDTH: f32 = 26.0;

// --- Panel constraints ---
pub const EXPLORER_MIN: f32 = 120.0;
pub const EXPLORER_MAX: f32 = 420.0;
pub const PREVIEW_MIN: f32 = 180.0;
pub const PREVIEW_MAX: f32 = 900.0;

// --- Timing ---
pub const NOTICE_TIMEOUT_SECS: u64 = 5;

// --- Modals ---
pub const MODAL_MIN_WIDTH: f32 = 300.0;
pub const MODAL_MAX_WIDTH: f32 = 500.0;
pub const MODAL_WIDTH_RATIO: f32 = 0.6;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn from_mode(mode: &str) -> Self {
        match mode {
            "light" => Theme::Light,
            _ => Theme::Dark,
        }
    }

    pub fn mode_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggle(&self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn visuals(&self) -> egui::Visuals {
        match self {
            Theme::Light => egui::Visuals::light(),
            Theme::Dark => egui::Visuals::dark(),
        }
    }
}

// --- Helper functions ---

pub fn modal_width(ctx: &egui::Context) -> f32 {
    let width = ctx.input(|i| {
        i.viewport()
            .inner_rect
            .map(|r| r.width())
            .unwrap_or(800.0)
    });
    (width * MODAL_WIDTH_RATIO).clamp(MODAL_MIN_WIDTH, MODAL_MAX_WIDTH)
}

pub fn truncated_label(ui: &mut egui::Ui, text: impl Into<egui::WidgetText>) -> egui::Response {
    ui.add(egui::Label::new(text).truncate())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_mode_round_trip() {
        assert_eq!(Theme::from_mode("light"), Theme::Light);
        assert_eq!(Theme::from_mode("dark"), Theme::Dark);
        assert_eq!(Theme::from_mode("nonsense"), Theme::Dark);
        assert_eq!(Theme::from_mode(Theme::Light.mode_str()), Theme::Light);
    }

    #[test]
    fn test_theme_toggle() {
        assert_eq!(Theme::Dark.toggle(), Theme::Light);
        assert_eq!(Theme::Light.toggle(), Theme::Dark);
    }
}
