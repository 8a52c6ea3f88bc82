// Pane rendering for Markpad
// Explorer | editor | preview, plus menu and status bars

use std::cell::RefCell;

use eframe::egui;

use crate::app::{Markpad, OPEN_SHORTCUT, SAVE_AS_SHORTCUT, SAVE_SHORTCUT};
use crate::style;
use crate::view::preview::render_markdown;

/// Explorer clicks are applied after all panes have rendered.
pub(crate) enum ExplorerAction {
    Up,
    Activate(String),
}

impl Markpad {
    pub(crate) fn render_menu_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::MenuBar::new().ui(ui, |ui| {
                ui.menu_button("File", |ui| {
                    if ui
                        .add(
                            egui::Button::new("Open…")
                                .shortcut_text(ctx.format_shortcut(&OPEN_SHORTCUT)),
                        )
                        .clicked()
                    {
                        self.open_dialog();
                        ui.close();
                    }

                    // Disabled until a file is loaded or first saved
                    if ui
                        .add_enabled(
                            self.document.has_backing_file(),
                            egui::Button::new("Save")
                                .shortcut_text(ctx.format_shortcut(&SAVE_SHORTCUT)),
                        )
                        .clicked()
                    {
                        self.save();
                        ui.close();
                    }

                    if ui
                        .add(
                            egui::Button::new("Save As…")
                                .shortcut_text(ctx.format_shortcut(&SAVE_AS_SHORTCUT)),
                        )
                        .clicked()
                    {
                        self.save_as_dialog();
                        ui.close();
                    }

                    ui.separator();

                    if ui.button("Quit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });

                ui.menu_button("View", |ui| {
                    let mut show_hidden = self.show_hidden;
                    if ui.checkbox(&mut show_hidden, "Show hidden files").clicked() {
                        self.toggle_hidden();
                        ui.close();
                    }

                    let theme_label = match self.theme {
                        style::Theme::Dark => "Light theme",
                        style::Theme::Light => "Dark theme",
                    };
                    if ui.button(theme_label).clicked() {
                        self.toggle_theme(ctx);
                        ui.close();
                    }
                });
            });
        });
    }

    pub(crate) fn render_explorer_pane(
        &self,
        ctx: &egui::Context,
        action: &RefCell<Option<ExplorerAction>>,
    ) {
        egui::SidePanel::left("explorer_panel")
            .resizable(true)
            .default_width(self.config.panel.explorer_width)
            .width_range(style::EXPLORER_MIN..=style::EXPLORER_MAX)
            .show(ctx, |ui| {
                ui.add_space(4.0);
                ui.horizontal(|ui| {
                    if ui.button("⬆").on_hover_text("Parent directory").clicked() {
                        *action.borrow_mut() = Some(ExplorerAction::Up);
                    }
                    let dir_name = self
                        .navigation
                        .current_dir()
                        .file_name()
                        .map(|n| n.to_string_lossy().to_string())
                        .unwrap_or_else(|| self.navigation.current_dir().display().to_string());
                    style::truncated_label(ui, egui::RichText::new(dir_name).strong())
                        .on_hover_text(self.navigation.current_dir().display().to_string());
                });
                ui.separator();

                egui::ScrollArea::vertical()
                    .id_salt("explorer_scroll")
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        ui.set_max_width(ui.available_width());
                        use egui_extras::{Column, TableBuilder};
                        TableBuilder::new(ui)
                            .striped(true)
                            .resizable(false)
                            .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
                            .column(Column::auto().at_least(style::ICON_COL_WIDTH))
                            .column(Column::remainder().clip(true))
                            .body(|body| {
                                body.rows(
                                    style::ROW_HEIGHT,
                                    self.navigation.entries().len(),
                                    |mut row| {
                                        let entry = &self.navigation.entries()[row.index()];
                                        let is_open = self.document.current_file()
                                            == Some(entry.path.as_path());

                                        row.col(|ui| {
                                            ui.label(entry.icon());
                                        });
                                        row.col(|ui| {
                                            let response = ui
                                                .selectable_label(is_open, &entry.name)
                                                .on_hover_text(entry.detail());
                                            if response.clicked() {
                                                *action.borrow_mut() = Some(
                                                    ExplorerAction::Activate(entry.name.clone()),
                                                );
                                            }
                                        });
                                    },
                                );
                            });
                    });
            });
    }

    pub(crate) fn render_preview_pane(&self, ctx: &egui::Context) {
        egui::SidePanel::right("preview_panel")
            .resizable(true)
            .default_width(self.config.panel.preview_width)
            .width_range(style::PREVIEW_MIN..=style::PREVIEW_MAX)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical()
                    .id_salt("preview_scroll")
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        ui.set_max_width(ui.available_width());
                        render_markdown(ui, &self.document.buffer);
                    });
            });
    }

    pub(crate) fn render_editor_pane(&mut self, ctx: &egui::Context) {
        let font = egui::FontId::monospace(self.config.editor.font_size);
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .id_salt("editor_scroll")
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    let editor = egui::TextEdit::multiline(&mut self.document.buffer)
                        .font(font)
                        .frame(false)
                        .hint_text("# Start typing markdown…")
                        .desired_width(f32::INFINITY)
                        .desired_rows(30);
                    if ui.add(editor).changed() {
                        self.document.mark_dirty();
                    }
                });
        });
    }

    pub(crate) fn render_status_bar(&self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                style::truncated_label(
                    ui,
                    format!(
                        "{} — {} items",
                        self.navigation.current_dir().display(),
                        self.navigation.entries().len()
                    ),
                );
                if self.document.is_dirty() {
                    ui.label(" | ");
                    ui.label("Modified");
                }
                if let Some((notice, _)) = &self.notice {
                    ui.label(" | ");
                    let warn = ui.visuals().warn_fg_color;
                    ui.colored_label(warn, notice);
                }
            });
        });
    }
}
