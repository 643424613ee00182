//! Shared load-session state
//!
//! Written by the fetch pipeline, rendered in the header and the chart area.

/// State of the current load-and-render session
#[derive(Clone, Debug)]
pub enum LoadState {
    Loading,
    Loaded,
    Error(String),
}

impl LoadState {
    #[allow(dead_code)]
    pub fn is_loaded(&self) -> bool {
        matches!(self, LoadState::Loaded)
    }
}
