//! WASM resource loading over HTTP fetch
//!
//! The served directory is the data source: `bowling_balls.csv` plus the
//! icon files it references. Results land in shared `Rc<RefCell<..>>`
//! slots that the app reads each frame; every arrival requests a repaint,
//! so the chart appears as soon as the records parse and icons pop in as
//! they resolve.

use std::cell::RefCell;
use std::rc::Rc;

use tracing::{info, warn};
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;
use web_sys::Response;

use crate::core::{default_icon, parse_records, resolve_icon, IconPixels, LoadOutcome};
use crate::load_state::LoadState;

/// Spec sheet path, fetched relative to the served directory.
pub const SPEC_SHEET_URL: &str = "bowling_balls.csv";

/// Parse outcome plus resolved icons, index-aligned with the record
/// sequence. An icon slot stays `None` until its fetch lands.
pub struct LoadedData {
    pub outcome: LoadOutcome,
    pub icons: Vec<Option<IconPixels>>,
}

pub type SharedData = Rc<RefCell<Option<LoadedData>>>;
pub type SharedState = Rc<RefCell<LoadState>>;

/// Start a fresh load session: fetch the spec sheet, parse it, then fetch
/// and resolve each referenced icon in record order.
pub fn start_load(data: SharedData, state: SharedState, egui_ctx: egui::Context) {
    *state.borrow_mut() = LoadState::Loading;
    *data.borrow_mut() = None;

    wasm_bindgen_futures::spawn_local(async move {
        let text = match fetch_text(SPEC_SHEET_URL).await {
            Ok(text) => text,
            Err(e) => {
                warn!(url = SPEC_SHEET_URL, error = %e, "spec sheet fetch failed");
                *state.borrow_mut() =
                    LoadState::Error(format!("could not load {SPEC_SHEET_URL}: {e}"));
                egui_ctx.request_repaint();
                return;
            }
        };

        let outcome = match parse_records(&text) {
            Ok(outcome) => outcome,
            Err(e) => {
                warn!(error = %e, "spec sheet rejected");
                *state.borrow_mut() = LoadState::Error(e.to_string());
                egui_ctx.request_repaint();
                return;
            }
        };

        info!(
            records = outcome.records.len(),
            skipped = outcome.skipped,
            "spec sheet loaded"
        );

        let icon_refs: Vec<Option<String>> =
            outcome.records.iter().map(|r| r.icon_path.clone()).collect();

        let count = outcome.records.len();
        *data.borrow_mut() = Some(LoadedData {
            outcome,
            icons: vec![None; count],
        });
        *state.borrow_mut() = LoadState::Loaded;
        egui_ctx.request_repaint();

        // Icons resolve after the chart is already up.
        for (index, reference) in icon_refs.into_iter().enumerate() {
            let pixels = match &reference {
                Some(url) => match fetch_bytes(url).await {
                    Ok(bytes) => resolve_icon(url, &bytes),
                    Err(e) => {
                        warn!(icon = %url, error = %e, "icon fetch failed, using default");
                        default_icon().clone()
                    }
                },
                None => default_icon().clone(),
            };
            if let Some(loaded) = data.borrow_mut().as_mut() {
                if let Some(slot) = loaded.icons.get_mut(index) {
                    *slot = Some(pixels);
                }
            }
            egui_ctx.request_repaint();
        }
    });
}

fn js_err(value: JsValue) -> String {
    format!("{value:?}")
}

async fn fetch_response(url: &str) -> Result<Response, String> {
    let window = web_sys::window().ok_or_else(|| "no window".to_string())?;
    let resp = JsFuture::from(window.fetch_with_str(url)).await.map_err(js_err)?;
    let resp: Response = resp.dyn_into().map_err(js_err)?;
    if !resp.ok() {
        return Err(format!("HTTP {}", resp.status()));
    }
    Ok(resp)
}

async fn fetch_text(url: &str) -> Result<String, String> {
    let resp = fetch_response(url).await?;
    let text = JsFuture::from(resp.text().map_err(js_err)?).await.map_err(js_err)?;
    text.as_string().ok_or_else(|| "response is not text".to_string())
}

async fn fetch_bytes(url: &str) -> Result<Vec<u8>, String> {
    let resp = fetch_response(url).await?;
    let buf = JsFuture::from(resp.array_buffer().map_err(js_err)?)
        .await
        .map_err(js_err)?;
    Ok(js_sys::Uint8Array::new(&buf).to_vec())
}
