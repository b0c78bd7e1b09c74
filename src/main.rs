#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod color;
mod config;
mod document;
mod error;
mod input;
mod loader;
mod macros;
mod prelude;
mod settings;
mod ui;
mod window;

use crate::prelude::*;

fn main() {
    env_logger::Builder::from_default_env()
        .format_timestamp_secs()
        .init();

    log::info!("Initialising...");

    let store = SettingsStore::default();
    let (settings, load_error) = store.load_or_default();

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(NAME)
            .with_inner_size(settings.size())
            .with_decorations(false)
            .with_transparent(true),
        ..Default::default()
    };

    if let Err(e) = eframe::run_native(
        NAME,
        native_options,
        Box::new(move |cc| {
            Ok(Box::new(ViewerApp::new(
                cc, store, settings, load_error,
            )))
        }),
    ) {
        log::error!("{}", e);
    }
}
