//! RG vs Differential chart with icon markers
//!
//! Draws the chart model bottom-up: quadrant shading, mass-bias halos,
//! icon markers (default icon until the real one resolves), name labels
//! and the highlight ring for the selected ball.

use eframe::egui;
use egui_plot::{Plot, PlotImage, PlotPoint, PlotPoints, Points, Polygon, Text};

use crate::core::chart::{ellipse_points, ChartModel, Marker};
use crate::theme::{colors, quadrant_fill};

use super::BallApp;

/// Halo and highlight ring radii, as multiples of the icon radius.
const HALO_SCALE: f64 = 1.35;
const HIGHLIGHT_SCALE: f64 = 1.1;

/// Segments per drawn ellipse.
const RING_SEGMENTS: usize = 48;

impl BallApp {
    pub(crate) fn render_chart(&mut self, ui: &mut egui::Ui) {
        // Rebuilt from the current record sequence on every frame.
        let model = {
            let data = self.data.borrow();
            match data.as_ref() {
                Some(loaded) => ChartModel::build(&loaded.outcome.records),
                None => return,
            }
        };

        if model.markers.is_empty() {
            // A header-only sheet is a valid, empty chart.
            ui.label(
                egui::RichText::new("No plottable balls in the spec sheet")
                    .color(colors::TEXT_MUTED),
            );
        }

        let selected = self.selected;
        let icon_radius = [model.icon_size.0 / 2.0, model.icon_size.1 / 2.0];

        let response = Plot::new("ball_chart")
            .x_axis_label("RG")
            .y_axis_label("Differential")
            .show_grid(true)
            .include_x(model.bounds.x.0)
            .include_x(model.bounds.x.1)
            .include_y(model.bounds.y.0)
            .include_y(model.bounds.y.1)
            .label_formatter(|name, value| {
                if name.is_empty() {
                    format!("rg={:.3} diff={:.4}", value.x, value.y)
                } else {
                    format!("{name}\nrg={:.3} diff={:.4}", value.x, value.y)
                }
            })
            .show(ui, |plot_ui| {
                // Quadrant shading with corner labels
                for rect in &model.quadrants {
                    let corners = vec![
                        [rect.min[0], rect.min[1]],
                        [rect.max[0], rect.min[1]],
                        [rect.max[0], rect.max[1]],
                        [rect.min[0], rect.max[1]],
                    ];
                    plot_ui.polygon(
                        Polygon::new(PlotPoints::from(corners))
                            .fill_color(quadrant_fill(rect.quadrant))
                            .stroke(egui::Stroke::NONE),
                    );
                }
                for (position, anchor, caption) in quadrant_labels(&model) {
                    plot_ui.text(
                        Text::new(
                            position,
                            egui::RichText::new(caption).color(colors::QUADRANT_LABEL).size(10.0),
                        )
                        .anchor(anchor),
                    );
                }

                // Mass-bias halos sit beneath the icons
                for marker in &model.markers {
                    if let Some([r, g, b, a]) = marker.halo {
                        let ring = ellipse_points(
                            [marker.x, marker.y],
                            [icon_radius[0] * HALO_SCALE, icon_radius[1] * HALO_SCALE],
                            RING_SEGMENTS,
                        );
                        plot_ui.polygon(
                            Polygon::new(PlotPoints::from(ring))
                                .fill_color(egui::Color32::from_rgba_unmultiplied(r, g, b, a))
                                .stroke(egui::Stroke::NONE),
                        );
                    }
                }

                // Icon markers with name labels
                for marker in &model.markers {
                    if let Some(texture) = self.textures.get(&marker.index) {
                        plot_ui.image(
                            PlotImage::new(
                                texture.id(),
                                PlotPoint::new(marker.x, marker.y),
                                egui::vec2(model.icon_size.0 as f32, model.icon_size.1 as f32),
                            )
                            .name(marker.label.clone()),
                        );
                    } else {
                        // Icon still in flight: a plain dot keeps the point visible.
                        plot_ui.points(
                            Points::new(vec![[marker.x, marker.y]])
                                .color(colors::FALLBACK_MARKER)
                                .radius(5.0)
                                .filled(true)
                                .name(marker.label.clone()),
                        );
                    }

                    plot_ui.text(
                        Text::new(
                            PlotPoint::new(marker.x + icon_radius[0] * 1.2, marker.y),
                            egui::RichText::new(marker.label.as_str())
                                .color(colors::TEXT_SECONDARY)
                                .size(11.0),
                        )
                        .anchor(egui::Align2::LEFT_CENTER),
                    );
                }

                // Highlight ring around the selected ball
                if let Some(marker) = selected.and_then(|i| model.markers.get(i)) {
                    let ring = ellipse_points(
                        [marker.x, marker.y],
                        [icon_radius[0] * HIGHLIGHT_SCALE, icon_radius[1] * HIGHLIGHT_SCALE],
                        RING_SEGMENTS,
                    );
                    plot_ui.polygon(
                        Polygon::new(PlotPoints::from(ring))
                            .fill_color(egui::Color32::TRANSPARENT)
                            .stroke(egui::Stroke::new(2.0, colors::HIGHLIGHT_RING)),
                    );
                }
            });

        // Click-to-select: nearest marker within one icon radius.
        if response.response.clicked() {
            if let Some(pointer) = response.response.hover_pos() {
                let position = response.transform.value_from_position(pointer);
                if let Some(index) = nearest_marker(&model.markers, position, icon_radius) {
                    self.selected = Some(index);
                }
            }
        }
    }
}

/// Nearest marker to a plot position, in axis-scaled units, within one
/// icon radius. `None` when the click lands on empty chart.
fn nearest_marker(markers: &[Marker], position: PlotPoint, icon_radius: [f64; 2]) -> Option<usize> {
    markers
        .iter()
        .map(|marker| {
            let dx = (marker.x - position.x) / icon_radius[0];
            let dy = (marker.y - position.y) / icon_radius[1];
            (marker.index, dx * dx + dy * dy)
        })
        .filter(|(_, d2)| *d2 <= 1.0)
        .min_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(index, _)| index)
}

/// Static quadrant captions, anchored at the outer corner of each quadrant.
fn quadrant_labels(model: &ChartModel) -> Vec<(PlotPoint, egui::Align2, String)> {
    let inset_x = model.bounds.x_span() * 0.01;
    let inset_y = model.bounds.y_span() * 0.02;

    model
        .quadrants
        .iter()
        .map(|rect| {
            // Outer corner: the one shared with the chart bounds.
            let left = rect.min[0] == model.bounds.x.0;
            let bottom = rect.min[1] == model.bounds.y.0;
            let x = if left { rect.min[0] + inset_x } else { rect.max[0] - inset_x };
            let y = if bottom { rect.min[1] + inset_y } else { rect.max[1] - inset_y };
            let anchor = match (left, bottom) {
                (true, true) => egui::Align2::LEFT_BOTTOM,
                (true, false) => egui::Align2::LEFT_TOP,
                (false, true) => egui::Align2::RIGHT_BOTTOM,
                (false, false) => egui::Align2::RIGHT_TOP,
            };

            let caption = format!(
                "{}\n{} / {}",
                rect.quadrant.label(),
                rect.quadrant.roll(),
                rect.quadrant.oil()
            );
            (PlotPoint::new(x, y), anchor, caption)
        })
        .collect()
}
