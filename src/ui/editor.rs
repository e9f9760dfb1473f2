// src/ui/editor.rs
use eframe::egui;

use crate::state::AppState;

pub fn show_editor(ui: &mut egui::Ui, state: &mut AppState) {
    ui.group(|ui| {
        // The widget edits the input text in place; no validation, no
        // transformation before submission.
        ui.add_sized(
            [ui.available_width(), 220.0],
            egui::TextEdit::multiline(&mut state.code)
                .font(egui::TextStyle::Monospace)
                .hint_text("Paste your C code here..."),
        );

        ui.add_space(8.0);

        ui.vertical_centered(|ui| {
            if ui.button("Analyze").clicked() {
                state.trigger_analysis(ui.ctx());
            }
        });
    });
}
