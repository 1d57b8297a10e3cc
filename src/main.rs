mod app;
mod color;
mod data;
mod figure;
mod pipeline;
mod render;
mod settings;
mod state;
mod ui;

use anyhow::Result;
use app::BenchmarkViewerApp;
use eframe::egui;
use settings::FigureSettings;
use state::ViewerState;

fn main() -> Result<()> {
    env_logger::init();

    let settings = FigureSettings::default();
    let export = pipeline::export_figure(&settings)?;

    if !display_available() {
        log::warn!("No display available, skipping interactive view");
        return Ok(());
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 1000.0])
            .with_min_inner_size([600.0, 500.0]),
        ..Default::default()
    };

    let state = ViewerState::new(export);
    let shown = eframe::run_native(
        "Order Book Benchmark",
        options,
        Box::new(move |cc| {
            // Install image loaders so egui can decode the saved PNG.
            egui_extras::install_image_loaders(&cc.egui_ctx);
            Ok(Box::new(BenchmarkViewerApp::new(state)))
        }),
    );
    if let Err(e) = shown {
        log::warn!("Could not open interactive view: {e}");
    }
    Ok(())
}

#[cfg(all(unix, not(target_os = "macos")))]
fn display_available() -> bool {
    ["DISPLAY", "WAYLAND_DISPLAY"]
        .iter()
        .any(|var| std::env::var_os(var).is_some_and(|v| !v.is_empty()))
}

#[cfg(not(all(unix, not(target_os = "macos"))))]
fn display_available() -> bool {
    true
}
