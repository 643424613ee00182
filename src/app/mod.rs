//! Ball chart app
//!
//! The egui application behind the served page: header bar, the RG vs
//! Differential chart, a details side panel and a static legend. All
//! state is rebuilt from the fetched spec sheet; rendering is a pure
//! function of the current record sequence.

mod chart;
mod details;
mod header;

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use eframe::egui;
use tracing::info;

use crate::core::ICON_DIM;
use crate::fetch_wasm::{self, SharedData, SharedState};
use crate::load_state::LoadState;
use crate::theme::{colors, minimal_visuals};

/// Static legend text: what the axes and the halo channel mean.
const LEGEND_ENTRIES: &[(&str, &str)] = &[
    ("RG", "radius of gyration; higher revs up later (horizontal axis)"),
    ("Diff", "RGmax - RGmin; flare and hook potential (vertical axis)"),
    ("Int Diff", "RGint - RGmin; halo color, asymmetric cores only"),
];

/// Bowling ball chart app
pub struct BallApp {
    /// Loaded records + icons, written by the fetch pipeline
    data: SharedData,
    /// Load session state
    load_state: SharedState,
    /// Uploaded icon textures, index-aligned with the record sequence
    pub(crate) textures: HashMap<usize, egui::TextureHandle>,
    /// Selected ball (index into the record sequence)
    pub(crate) selected: Option<usize>,
    /// Toggle details side panel visibility
    pub(crate) show_details: bool,
}

impl BallApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        cc.egui_ctx.set_visuals(minimal_visuals());

        let data: SharedData = Rc::new(RefCell::new(None));
        let load_state: SharedState = Rc::new(RefCell::new(LoadState::Loading));
        fetch_wasm::start_load(data.clone(), load_state.clone(), cc.egui_ctx.clone());

        Self {
            data,
            load_state,
            textures: HashMap::new(),
            selected: None,
            show_details: true,
        }
    }

    /// Drop everything and fetch the spec sheet again. Each session gets
    /// fresh shared slots, so a still-running older fetch writes into
    /// orphaned ones.
    pub(crate) fn reload(&mut self, ctx: &egui::Context) {
        info!("reloading spec sheet");
        self.textures.clear();
        self.selected = None;
        self.data = Rc::new(RefCell::new(None));
        self.load_state = Rc::new(RefCell::new(LoadState::Loading));
        fetch_wasm::start_load(self.data.clone(), self.load_state.clone(), ctx.clone());
    }

    pub(crate) fn get_load_state(&self) -> LoadState {
        self.load_state.borrow().clone()
    }

    /// Counts for the header: (records, skipped rows, resolved icons).
    pub(crate) fn load_counts(&self) -> Option<(usize, usize, usize)> {
        let data = self.data.borrow();
        data.as_ref().map(|loaded| {
            (
                loaded.outcome.records.len(),
                loaded.outcome.skipped,
                loaded.icons.iter().filter(|icon| icon.is_some()).count(),
            )
        })
    }

    /// Upload any newly resolved icons as egui textures.
    fn sync_textures(&mut self, ctx: &egui::Context) {
        let data = self.data.borrow();
        let Some(loaded) = data.as_ref() else { return };
        for (index, pixels) in loaded.icons.iter().enumerate() {
            let Some(pixels) = pixels else { continue };
            if self.textures.contains_key(&index) {
                continue;
            }
            let image = egui::ColorImage::from_rgba_unmultiplied(
                [ICON_DIM as usize, ICON_DIM as usize],
                &pixels.rgba,
            );
            let handle =
                ctx.load_texture(format!("ball_icon_{index}"), image, egui::TextureOptions::LINEAR);
            self.textures.insert(index, handle);
        }
    }

    /// Draw the static glossary legend as a collapsible window anchored
    /// bottom-left, over the chart.
    fn draw_legend(&self, ctx: &egui::Context) {
        egui::Area::new(egui::Id::new("legend_area"))
            .anchor(egui::Align2::LEFT_BOTTOM, egui::vec2(8.0, -8.0))
            .show(ctx, |ui| {
                egui::Frame::new()
                    .fill(egui::Color32::from_rgba_unmultiplied(20, 20, 20, 200))
                    .corner_radius(4.0)
                    .inner_margin(8.0)
                    .show(ui, |ui| {
                        let header = egui::CollapsingHeader::new(
                            egui::RichText::new("Legend").color(colors::TEXT_MUTED),
                        )
                        .default_open(true);

                        header.show(ui, |ui| {
                            for (term, meaning) in LEGEND_ENTRIES {
                                ui.horizontal(|ui| {
                                    ui.label(
                                        egui::RichText::new(*term)
                                            .color(colors::TEXT_PRIMARY)
                                            .monospace()
                                            .size(11.0),
                                    );
                                    ui.label(
                                        egui::RichText::new(*meaning)
                                            .color(colors::TEXT_SECONDARY)
                                            .size(11.0),
                                    );
                                });
                            }
                        });
                    });
            });
    }

    fn render_loading(ui: &mut egui::Ui) {
        ui.centered_and_justified(|ui| {
            ui.label(
                egui::RichText::new("Loading spec sheet...")
                    .color(colors::TEXT_SECONDARY)
                    .size(16.0),
            );
        });
    }

    /// Whole-file failures replace the chart with the failure message.
    fn render_load_error(ui: &mut egui::Ui, message: &str) {
        ui.centered_and_justified(|ui| {
            ui.colored_label(colors::STATUS_ERR, egui::RichText::new(message).size(16.0));
        });
    }
}

impl eframe::App for BallApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // No continuous repaint: the data is static between loads, and the
        // fetch pipeline repaints as results land.
        self.sync_textures(ctx);

        egui::TopBottomPanel::top("header")
            .frame(egui::Frame::new().fill(colors::BG_PRIMARY).inner_margin(4.0))
            .show(ctx, |ui| {
                self.render_header(ui);
            });

        // Details sidebar (must be shown before CentralPanel)
        if self.show_details {
            self.render_details(ctx);
        }

        self.draw_legend(ctx);

        egui::CentralPanel::default()
            .frame(egui::Frame::new().fill(colors::BG_PRIMARY))
            .show(ctx, |ui| match self.get_load_state() {
                LoadState::Loading => Self::render_loading(ui),
                LoadState::Error(message) => Self::render_load_error(ui, &message),
                LoadState::Loaded => self.render_chart(ui),
            });
    }
}
