//! Bowling ball RG/Differential chart
//!
//! Loads a CSV spec sheet and draws each ball's icon at its
//! (RG, Differential) position on an interactive chart, with quadrant
//! shading and a mass-bias halo for asymmetric cores.
//!
//! The chart runs in the browser (`trunk serve`, feature `wasm`); the
//! `ball-cli` binary (feature `cli`) runs the same load pipeline against
//! the filesystem.

pub mod core;

#[cfg(all(target_arch = "wasm32", feature = "wasm"))]
mod app;
#[cfg(all(target_arch = "wasm32", feature = "wasm"))]
mod fetch_wasm;
#[cfg(all(target_arch = "wasm32", feature = "wasm"))]
mod load_state;
#[cfg(all(target_arch = "wasm32", feature = "wasm"))]
mod theme;

#[cfg(all(target_arch = "wasm32", feature = "wasm"))]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn main() {
    use wasm_bindgen::JsCast;

    console_error_panic_hook::set_once();

    // Initialize tracing for browser console
    tracing_wasm::set_as_global_default();

    let web_options = eframe::WebOptions::default();

    wasm_bindgen_futures::spawn_local(async {
        let canvas = web_sys::window()
            .expect("no window")
            .document()
            .expect("no document")
            .get_element_by_id("canvas")
            .expect("no canvas element")
            .dyn_into::<web_sys::HtmlCanvasElement>()
            .expect("not a canvas element");

        eframe::WebRunner::new()
            .start(
                canvas,
                web_options,
                Box::new(|cc| Ok(Box::new(app::BallApp::new(cc)))),
            )
            .await
            .expect("Failed to start eframe");
    });
}
