use eframe::egui;

mod app;
mod config;
mod entry;
mod error;
mod io;
mod state;
mod style;
mod view;

use app::Markpad;
use config::Config;
use style::Theme;

fn main() -> eframe::Result<()> {
    env_logger::init();

    let config = Config::load();

    // No usable starting directory means no session: bail out before
    // any window is shown.
    let start_dir = match io::home_directory() {
        Ok(dir) => dir,
        Err(e) => {
            log::error!("{e}");
            std::process::exit(1);
        }
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1024.0, 768.0])
            .with_title(app::APP_NAME),
        ..Default::default()
    };

    eframe::run_native(
        "markpad",
        options,
        Box::new(move |cc| {
            cc.egui_ctx
                .set_visuals(Theme::from_mode(&config.theme.mode).visuals());
            Ok(Box::new(Markpad::new(config, start_dir)))
        }),
    )
}
