use eframe::egui::{self, RichText, Ui};

use crate::state::{View, ViewerState};

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the view toggle and a short status line.
pub fn top_bar(ui: &mut Ui, state: &mut ViewerState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.selectable_value(&mut state.view, View::Charts, "Charts");
        ui.selectable_value(&mut state.view, View::Image, "Saved image");

        ui.separator();
        ui.label(format!("{} implementations", state.bar_count()));

        ui.separator();
        ui.label(RichText::new(format!("Saved to {}", state.output_path.display())).weak());
    });
}

// ---------------------------------------------------------------------------
// Saved image view
// ---------------------------------------------------------------------------

/// Show the PNG exactly as it was written to disk.
pub fn saved_image(ui: &mut Ui, state: &ViewerState) {
    egui::ScrollArea::both()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            ui.add(
                egui::Image::from_bytes(state.image_uri(), state.png.clone())
                    .shrink_to_fit(),
            );
        });
}
