//! Platform-agnostic core module - shared between the WASM chart page and the CLI

pub mod chart;
pub mod icons;
pub mod parser;
pub mod records;

pub use chart::{ChartModel, Marker};
pub use icons::{decode_icon, default_icon, resolve_icon, IconError, IconPixels, ICON_DIM};
pub use parser::{parse_records, LoadError, LoadOutcome};
pub use records::{BallRecord, Quadrant};
