//! Ball details sidebar
//!
//! Ball selector plus the spec readout for the selected ball: core
//! numbers, quadrant classification and the ideal-conditions blurb.

use eframe::egui;

use crate::core::BallRecord;
use crate::theme::colors;

use super::BallApp;

impl BallApp {
    pub(crate) fn render_details(&mut self, ctx: &egui::Context) {
        let records: Vec<BallRecord> = {
            let data = self.data.borrow();
            match data.as_ref() {
                Some(loaded) => loaded.outcome.records.clone(),
                None => return,
            }
        };

        let panel_width = ctx.screen_rect().width() * 0.2;
        egui::SidePanel::right("details")
            .default_width(panel_width)
            .min_width(220.0)
            .resizable(true)
            .frame(egui::Frame::new().fill(colors::BG_PRIMARY).inner_margin(8.0))
            .show(ctx, |ui| {
                ui.label(egui::RichText::new("Ball:").color(colors::TEXT_MUTED));

                let selected_text = self
                    .selected
                    .and_then(|i| records.get(i))
                    .map(|r| r.name.clone())
                    .unwrap_or_else(|| "Select a ball".to_string());

                egui::ComboBox::from_id_salt("ball_select")
                    .width(ui.available_width())
                    .selected_text(selected_text)
                    .show_ui(ui, |ui| {
                        for (index, record) in records.iter().enumerate() {
                            ui.selectable_value(&mut self.selected, Some(index), &record.name);
                        }
                    });

                ui.add_space(8.0);

                let Some(record) = self.selected.and_then(|i| records.get(i)) else {
                    ui.label(
                        egui::RichText::new("Pick a ball from the list or click its marker.")
                            .color(colors::TEXT_MUTED),
                    );
                    return;
                };

                let group_frame = egui::Frame::new()
                    .stroke(egui::Stroke::new(1.0, colors::TEXT_MUTED.gamma_multiply(0.6)))
                    .corner_radius(4.0)
                    .inner_margin(6.0);

                group_frame.show(ui, |ui| {
                    ui.set_min_width(ui.available_width());

                    if let Some(texture) = self.selected.and_then(|i| self.textures.get(&i)) {
                        ui.vertical_centered(|ui| {
                            ui.add(egui::Image::new(egui::load::SizedTexture::new(
                                texture.id(),
                                egui::vec2(72.0, 72.0),
                            )));
                        });
                        ui.add_space(4.0);
                    }

                    ui.label(
                        egui::RichText::new(&record.name)
                            .color(colors::TEXT_PRIMARY)
                            .size(14.0),
                    );
                    ui.add_space(4.0);

                    spec_line(ui, "RG", &format!("{:.3}", record.rg));
                    spec_line(ui, "Diff", &format!("{:.4}", record.differential));
                    let int_diff = match record.mass_bias_differential {
                        Some(v) => format!("{v:.4}"),
                        None => "Symmetrical Ball".to_string(),
                    };
                    spec_line(ui, "Int Diff", &int_diff);

                    let quadrant = record.quadrant();
                    spec_line(ui, "Quadrant", quadrant.label());
                    spec_line(ui, "Motion", &format!("{} / {}", quadrant.roll(), quadrant.oil()));
                });

                ui.add_space(8.0);

                group_frame.show(ui, |ui| {
                    ui.set_min_width(ui.available_width());
                    ui.label(egui::RichText::new("Ideal conditions:").color(colors::TEXT_MUTED));
                    ui.label(
                        egui::RichText::new(record.quadrant().ideal_conditions())
                            .color(colors::TEXT_SECONDARY),
                    );
                });
            });
    }
}

fn spec_line(ui: &mut egui::Ui, term: &str, value: &str) {
    ui.horizontal(|ui| {
        ui.label(
            egui::RichText::new(format!("{term}:"))
                .color(colors::TEXT_MUTED)
                .monospace()
                .size(12.0),
        );
        ui.label(
            egui::RichText::new(value)
                .color(colors::TEXT_SECONDARY)
                .monospace()
                .size(12.0),
        );
    });
}
