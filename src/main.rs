#![warn(clippy::all, rust_2018_idioms)]
// hide console window on Windows in release
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use freehand_paint::{CanvasConfig, PaintApp};

// When compiling natively:
#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result {
    env_logger::init(); // Log to stderr (if you run with `RUST_LOG=debug`).

    // An optional JSON config file sets the canvas size, background and initial tool
    let config = match std::env::args().nth(1) {
        Some(path) => CanvasConfig::load(&path).unwrap_or_else(|err| {
            log::error!("Could not load config from {path}: {err}, using defaults");
            CanvasConfig::default()
        }),
        None => CanvasConfig::default(),
    };

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.width as f32 + 240.0, config.height as f32 + 40.0])
            .with_min_inner_size([400.0, 300.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Freehand Paint",
        native_options,
        Box::new(move |cc| Ok(Box::new(PaintApp::new(cc, config)?))),
    )
}

#[cfg(target_arch = "wasm32")]
fn main() {}
