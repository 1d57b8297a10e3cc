use eframe::egui;

use crate::state::{View, ViewerState};
use crate::ui::{charts, panels};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct BenchmarkViewerApp {
    pub state: ViewerState,
}

impl BenchmarkViewerApp {
    pub fn new(state: ViewerState) -> Self {
        Self { state }
    }
}

impl eframe::App for BenchmarkViewerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: view toggle and status ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Central panel: charts or the saved image ----
        egui::CentralPanel::default().show(ctx, |ui| match self.state.view {
            View::Charts => charts::chart_grid(ui, &self.state.figure),
            View::Image => panels::saved_image(ui, &self.state),
        });
    }
}
