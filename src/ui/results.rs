// src/ui/results.rs
use eframe::egui;

use crate::client::AnalysisReport;
use crate::state::AppState;

/// Fixed titles, in display order, each paired with the report field it
/// shows.
fn sections(report: &AnalysisReport) -> [(&'static str, &str); 4] {
    [
        ("Symbol Table", report.symbol_table.as_str()),
        ("Constants Table", report.constant_table.as_str()),
        ("Parsed Table", report.parsed_table.as_str()),
        ("Comments", report.comments.as_str()),
    ]
}

pub fn show_results(ui: &mut egui::Ui, state: &AppState) {
    // Nothing is drawn until the first successful analysis.
    if let Some(report) = &state.result {
        for (title, content) in sections(report) {
            show_section(ui, title, content);
            ui.add_space(8.0);
        }
    }
}

fn show_section(ui: &mut egui::Ui, title: &str, content: &str) {
    ui.group(|ui| {
        ui.heading(title);
        ui.add_space(4.0);
        egui::ScrollArea::horizontal()
            .id_source(title)
            .show(ui, |ui| {
                // No wrapping, so the service's formatting comes through
                // untouched.
                ui.add(egui::Label::new(egui::RichText::new(content).monospace()).wrap(false));
            });
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sections_are_order_fixed() {
        let report = AnalysisReport {
            symbol_table: "x:int".to_string(),
            constant_table: "5:int".to_string(),
            parsed_table: "DECL(x,5)".to_string(),
            comments: "// none".to_string(),
        };

        let sections = sections(&report);
        assert_eq!(
            sections,
            [
                ("Symbol Table", "x:int"),
                ("Constants Table", "5:int"),
                ("Parsed Table", "DECL(x,5)"),
                ("Comments", "// none"),
            ]
        );
    }
}
