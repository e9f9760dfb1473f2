// src/main.rs
use anyhow::Result;
use eframe::egui;
use tracing_subscriber::EnvFilter;

mod app;
mod client;
mod config;
mod state;
mod ui;

use app::LexViewApp;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let settings = config::Settings::from_env();
    tracing::info!("analysis endpoint: {}", settings.endpoint);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 720.0])
            .with_title("LexView"),
        ..Default::default()
    };

    eframe::run_native(
        "LexView",
        options,
        Box::new(move |_cc| {
            // Customize egui here with _cc.egui_ctx if needed
            Box::new(LexViewApp::new(settings))
        }),
    )
    .map_err(|e| anyhow::anyhow!("Failed to run application: {}", e))
}
