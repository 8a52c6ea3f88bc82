use std::cell::RefCell;
use std::path::PathBuf;
use std::time::Instant;

use eframe::egui;

use crate::config::Config;
use crate::state::{is_markdown_name, Activation, DocumentSession, NavigationState};
use crate::style::{self, Theme};
use crate::view::panels::ExplorerAction;

pub const APP_NAME: &str = "Markpad";

pub(crate) const OPEN_SHORTCUT: egui::KeyboardShortcut =
    egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::O);
pub(crate) const SAVE_SHORTCUT: egui::KeyboardShortcut =
    egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::S);
pub(crate) const SAVE_AS_SHORTCUT: egui::KeyboardShortcut = egui::KeyboardShortcut::new(
    egui::Modifiers::COMMAND.plus(egui::Modifiers::SHIFT),
    egui::Key::S,
);

/// The editor shell: explorer navigation, the document session and the
/// transient UI state, owned together and passed by reference into the
/// view code. No globals.
pub struct Markpad {
    pub(crate) navigation: NavigationState,
    pub(crate) document: DocumentSession,
    pub(crate) config: Config,
    pub(crate) theme: Theme,
    pub(crate) show_hidden: bool,
    /// Blocking error modal text; operations keep last-known-good state.
    pub(crate) error: Option<String>,
    /// Non-blocking status notice with its display timestamp.
    pub(crate) notice: Option<(String, Instant)>,
}

impl Markpad {
    pub fn new(config: Config, start_dir: PathBuf) -> Self {
        let theme = Theme::from_mode(&config.theme.mode);
        let show_hidden = config.explorer.show_hidden;

        let mut app = Self {
            navigation: NavigationState::new(start_dir),
            document: DocumentSession::new(),
            config,
            theme,
            show_hidden,
            error: None,
            notice: None,
        };
        if let Err(e) = app.navigation.refresh(app.show_hidden) {
            app.error = Some(e.to_string());
        }
        app
    }

    /// Recomputed from scratch every time, never appended to.
    pub(crate) fn window_title(&self) -> String {
        let name = self
            .document
            .file_name()
            .unwrap_or_else(|| "untitled".to_string());
        format!("{APP_NAME} — {name}")
    }

    pub(crate) fn set_error(&mut self, message: String) {
        self.error = Some(message);
    }

    pub(crate) fn set_notice(&mut self, message: String) {
        self.notice = Some((message, Instant::now()));
    }

    fn clear_expired_notice(&mut self) {
        if let Some((_, shown_at)) = &self.notice {
            if shown_at.elapsed().as_secs() >= style::NOTICE_TIMEOUT_SECS {
                self.notice = None;
            }
        }
    }

    // --- Explorer actions ---

    pub(crate) fn activate_entry(&mut self, name: &str) {
        match self.navigation.activate(name, self.show_hidden) {
            Ok(Activation::Descended) => {}
            Ok(Activation::File(path)) => self.open_from_explorer(path),
            Err(e) => self.set_error(e.to_string()),
        }
    }

    pub(crate) fn navigate_up(&mut self) {
        if let Err(e) = self.navigation.navigate_up(self.show_hidden) {
            self.set_error(e.to_string());
        }
    }

    /// Markdown files load into the edit buffer; anything else is handed
    /// to the system default opener.
    fn open_from_explorer(&mut self, path: PathBuf) {
        let markdown = path
            .extension()
            .map(|e| e.to_string_lossy().to_lowercase())
            .is_some_and(|e| matches!(e.as_str(), "md" | "markdown"));
        if markdown {
            if let Err(e) = self.document.open(path) {
                self.set_error(e.to_string());
            }
        } else if let Err(e) = open::that(&path) {
            self.set_error(format!("could not open {}: {e}", path.display()));
        }
    }

    pub(crate) fn refresh_explorer(&mut self) {
        if let Err(e) = self.navigation.refresh(self.show_hidden) {
            self.set_error(e.to_string());
        }
    }

    pub(crate) fn toggle_hidden(&mut self) {
        self.show_hidden = !self.show_hidden;
        self.config.explorer.show_hidden = self.show_hidden;
        self.persist_config();
        self.refresh_explorer();
    }

    pub(crate) fn toggle_theme(&mut self, ctx: &egui::Context) {
        self.theme = self.theme.toggle();
        ctx.set_visuals(self.theme.visuals());
        self.config.theme.mode = self.theme.mode_str().to_string();
        self.persist_config();
    }

    fn persist_config(&self) {
        if let Err(e) = self.config.save() {
            log::warn!("failed to save config: {e}");
        }
    }

    // --- File menu actions ---

    pub(crate) fn open_dialog(&mut self) {
        let picked = rfd::FileDialog::new()
            .add_filter("Markdown", &["md", "MD"])
            .set_directory(self.navigation.current_dir())
            .set_title("Open Markdown File")
            .pick_file();
        // None means the picker was cancelled
        let Some(path) = picked else { return };
        if let Err(e) = self.document.open(path) {
            self.set_error(e.to_string());
        }
    }

    pub(crate) fn save(&mut self) {
        if let Err(e) = self.document.save() {
            self.set_error(e.to_string());
        }
    }

    pub(crate) fn save_as_dialog(&mut self) {
        let picked = rfd::FileDialog::new()
            .add_filter("Markdown", &["md", "MD"])
            .set_directory(self.navigation.current_dir())
            .set_file_name("untitled.md")
            .set_title("Save Markdown File")
            .save_file();
        let Some(path) = picked else { return };

        let chosen = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();
        match self.document.save_as(path) {
            Ok(()) => {
                if !is_markdown_name(&chosen) {
                    self.set_notice(format!("'{chosen}' does not have a .md extension"));
                }
                // The new file may live in the browsed directory
                self.refresh_explorer();
            }
            Err(e) => self.set_error(e.to_string()),
        }
    }

    fn handle_shortcuts(&mut self, ctx: &egui::Context) {
        if ctx.input_mut(|i| i.consume_shortcut(&SAVE_AS_SHORTCUT)) {
            self.save_as_dialog();
        }
        if ctx.input_mut(|i| i.consume_shortcut(&SAVE_SHORTCUT)) && self.document.has_backing_file()
        {
            self.save();
        }
        if ctx.input_mut(|i| i.consume_shortcut(&OPEN_SHORTCUT)) {
            self.open_dialog();
        }
    }

}

impl eframe::App for Markpad {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.clear_expired_notice();
        self.handle_shortcuts(ctx);

        // Keep the native title in sync with the current document
        ctx.send_viewport_cmd(egui::ViewportCommand::Title(self.window_title()));

        self.render_menu_bar(ctx);
        self.render_status_bar(ctx);

        // Deferred: explorer clicks resolve after the panes are drawn
        let explorer_action = RefCell::new(None::<ExplorerAction>);
        self.render_explorer_pane(ctx, &explorer_action);
        self.render_preview_pane(ctx);
        self.render_editor_pane(ctx);

        match explorer_action.into_inner() {
            Some(ExplorerAction::Up) => self.navigate_up(),
            Some(ExplorerAction::Activate(name)) => self.activate_entry(&name),
            None => {}
        }

        self.render_error_modal(ctx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_app() -> (Markpad, tempfile::TempDir) {
        let dir = tempfile::tempdir().unwrap();
        let app = Markpad::new(Config::default(), dir.path().to_path_buf());
        (app, dir)
    }

    #[test]
    fn test_title_for_new_document() {
        let (app, _dir) = test_app();
        assert_eq!(app.window_title(), "Markpad — untitled");
    }

    #[test]
    fn test_title_does_not_accumulate() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = Markpad::new(Config::default(), dir.path().to_path_buf());
        app.document.save_as(dir.path().join("notes.md")).unwrap();

        let first = app.window_title();
        let second = app.window_title();
        assert_eq!(first, "Markpad — notes.md");
        assert_eq!(first, second);
    }

    #[test]
    fn test_activate_error_keeps_directory() {
        let (mut app, _dir) = test_app();
        assert!(app.error.is_none());
        let before = app.navigation.current_dir().to_path_buf();
        app.activate_entry("does-not-exist");
        assert!(app.error.is_some());
        assert_eq!(app.navigation.current_dir(), before);
    }
}
