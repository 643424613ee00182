//! Header bar with controls and load status

use eframe::egui;

use crate::load_state::LoadState;
use crate::theme::colors;

use super::BallApp;

impl BallApp {
    pub(crate) fn render_header(&mut self, ui: &mut egui::Ui) {
        let load_state = self.get_load_state();
        let counts = self.load_counts();

        ui.horizontal(|ui| {
            // LEFT: Control buttons
            if ui.button(egui::RichText::new("Reload")).clicked() {
                let ctx = ui.ctx().clone();
                self.reload(&ctx);
            }

            ui.add_space(10.0);

            let details_text = if self.show_details { "Details <<<" } else { "Details >>>" };
            if ui.button(egui::RichText::new(details_text)).clicked() {
                self.show_details = !self.show_details;
            }

            // RIGHT: Status and stats (right-to-left order)
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(
                    egui::RichText::new("RG / DIFF")
                        .color(colors::TEXT_PRIMARY)
                        .size(12.0),
                );

                ui.add_space(10.0);

                if let Some((balls, skipped, icons)) = counts {
                    ui.label(
                        egui::RichText::new(format!("{icons}/{balls} icons"))
                            .color(colors::TEXT_MUTED),
                    );
                    ui.label(egui::RichText::new("/").color(colors::TEXT_MUTED));

                    if skipped > 0 {
                        ui.label(
                            egui::RichText::new(format!("{skipped} rows dropped"))
                                .color(colors::STATUS_BUSY),
                        );
                        ui.label(egui::RichText::new("/").color(colors::TEXT_MUTED));
                    }

                    ui.label(
                        egui::RichText::new(format!("{balls} balls")).color(colors::TEXT_MUTED),
                    );

                    ui.add_space(10.0);
                }

                let (status_color, status_text) = match &load_state {
                    LoadState::Loaded => (colors::STATUS_OK, "Loaded"),
                    LoadState::Loading => (colors::STATUS_BUSY, "Loading..."),
                    LoadState::Error(_) => (colors::STATUS_ERR, "Error"),
                };
                ui.colored_label(status_color, egui::RichText::new(status_text));
            });
        });
    }
}
