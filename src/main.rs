#![warn(clippy::all, rust_2018_idioms)]

use std::path::PathBuf;

use pixel_art_maker::{EditorConfig, PaintApp};

const DEFAULT_CONFIG_PATH: &str = "pixel-art-maker.json";

fn main() -> eframe::Result<()> {
    env_logger::init(); // Log to stderr (if you run with `RUST_LOG=debug`).

    let config_path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH));

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([960.0, 720.0])
            .with_min_inner_size([480.0, 360.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Pixel Art Maker",
        native_options,
        Box::new(move |cc| -> Result<Box<dyn eframe::App>, Box<dyn std::error::Error + Send + Sync>> {
            let config = EditorConfig::load_or_default(&config_path)?;
            Ok(Box::new(PaintApp::new(cc, config)?))
        }),
    )
}
