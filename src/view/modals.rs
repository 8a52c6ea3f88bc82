// Modal rendering for Markpad

use eframe::egui;

use crate::app::Markpad;
use crate::style;

impl Markpad {
    /// Blocking error dialog. The failed operation has already been rolled
    /// back; dismissing just clears the message.
    pub(crate) fn render_error_modal(&mut self, ctx: &egui::Context) {
        if self.error.is_none() {
            return;
        }

        let mut dismissed = false;
        egui::Window::new("Error")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .default_width(style::modal_width(ctx))
            .show(ctx, |ui| {
                if let Some(message) = &self.error {
                    ui.label(message);
                }
                ui.add_space(10.0);
                ui.vertical_centered(|ui| {
                    if ui.button("OK").clicked() {
                        dismissed = true;
                    }
                });
            });

        if dismissed || ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            self.error = None;
        }
    }
}
