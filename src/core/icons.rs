//! Icon decoding and default-icon substitution
//!
//! Ball icons are fixed 200x200 images. Anything that fails to decode or
//! has the wrong dimensions falls back to the default icon embedded in
//! the binary, so every record always has a drawable marker.

use std::sync::OnceLock;

use tracing::warn;

/// Required icon edge length in pixels.
pub const ICON_DIM: u32 = 200;

/// Fallback icon shipped with the binary.
const DEFAULT_ICON_BYTES: &[u8] = include_bytes!("../../assets/default.png");

/// Decoded RGBA pixels of one icon, always `ICON_DIM` x `ICON_DIM`.
#[derive(Clone, PartialEq, Eq)]
pub struct IconPixels {
    pub rgba: Vec<u8>,
}

impl std::fmt::Debug for IconPixels {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IconPixels").field("bytes", &self.rgba.len()).finish()
    }
}

/// Why an icon reference could not be used as-is.
#[derive(Debug)]
pub enum IconError {
    Decode(image::ImageError),
    WrongSize { width: u32, height: u32 },
}

impl std::fmt::Display for IconError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IconError::Decode(e) => write!(f, "not a decodable image: {e}"),
            IconError::WrongSize { width, height } => {
                write!(f, "expected {ICON_DIM}x{ICON_DIM} pixels, got {width}x{height}")
            }
        }
    }
}

impl std::error::Error for IconError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            IconError::Decode(e) => Some(e),
            IconError::WrongSize { .. } => None,
        }
    }
}

/// Decode icon bytes, enforcing the fixed 200x200 dimension.
pub fn decode_icon(bytes: &[u8]) -> Result<IconPixels, IconError> {
    let rgba = image::load_from_memory(bytes)
        .map_err(IconError::Decode)?
        .to_rgba8();
    let (width, height) = rgba.dimensions();
    if width != ICON_DIM || height != ICON_DIM {
        return Err(IconError::WrongSize { width, height });
    }
    Ok(IconPixels {
        rgba: rgba.into_raw(),
    })
}

/// Process-wide default icon, decoded once at first use.
pub fn default_icon() -> &'static IconPixels {
    static DEFAULT: OnceLock<IconPixels> = OnceLock::new();
    DEFAULT.get_or_init(|| {
        decode_icon(DEFAULT_ICON_BYTES).expect("embedded default icon must be a 200x200 image")
    })
}

/// Decode fetched icon bytes, substituting the default icon when they are
/// unusable. `reference` is the path from the spec sheet, for logging.
pub fn resolve_icon(reference: &str, bytes: &[u8]) -> IconPixels {
    match decode_icon(bytes) {
        Ok(pixels) => pixels,
        Err(e) => {
            warn!(icon = reference, error = %e, "icon unusable, using default");
            default_icon().clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    /// Encode a blank RGBA PNG of the given size.
    fn png_bytes(width: u32, height: u32) -> Vec<u8> {
        let img = image::RgbaImage::new(width, height);
        let mut bytes = Vec::new();
        img.write_to(&mut Cursor::new(&mut bytes), image::ImageFormat::Png)
            .unwrap();
        bytes
    }

    #[test]
    fn default_icon_is_a_valid_200x200_image() {
        let icon = default_icon();
        assert_eq!(icon.rgba.len(), (ICON_DIM * ICON_DIM * 4) as usize);
    }

    #[test]
    fn decode_accepts_exactly_200x200() {
        let pixels = decode_icon(&png_bytes(ICON_DIM, ICON_DIM)).unwrap();
        assert_eq!(pixels.rgba.len(), (ICON_DIM * ICON_DIM * 4) as usize);
    }

    #[test]
    fn decode_rejects_other_dimensions() {
        match decode_icon(&png_bytes(64, 64)) {
            Err(IconError::WrongSize { width: 64, height: 64 }) => {}
            other => panic!("expected WrongSize, got {other:?}"),
        }
    }

    #[test]
    fn decode_rejects_garbage_bytes() {
        assert!(matches!(decode_icon(b"not an image"), Err(IconError::Decode(_))));
    }

    #[test]
    fn substitution_is_idempotent() {
        // Every unusable reference maps to the same default pixels.
        let a = resolve_icon("missing.png", b"junk");
        let b = resolve_icon("small.png", &png_bytes(10, 10));
        assert_eq!(a, b);
        assert_eq!(&a, default_icon());
    }

    #[test]
    fn valid_icons_are_not_substituted() {
        let pixels = resolve_icon("ok.png", &png_bytes(ICON_DIM, ICON_DIM));
        assert_ne!(&pixels, default_icon());
    }
}
