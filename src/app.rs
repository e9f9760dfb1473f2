// src/app.rs
use eframe::egui;

use crate::client::AnalysisClient;
use crate::config::Settings;
use crate::state::AppState;
use crate::ui;

pub struct LexViewApp {
    state: AppState,
}

impl LexViewApp {
    pub fn new(settings: Settings) -> Self {
        Self {
            state: AppState::new(AnalysisClient::new(settings.endpoint)),
        }
    }
}

impl eframe::App for LexViewApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Pick up any reports that finished since the last frame.
        self.state.poll_responses();

        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.heading("Lexical Analyzer");
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui::editor::show_editor(ui, &mut self.state);
                ui.add_space(16.0);
                ui::results::show_results(ui, &self.state);
            });
        });
    }
}
