//! QR bitmap generation backed by the `qrcode` crate.
//!
//! The generated grid has no quiet zone; both renderers add their own
//! light border.

use log::debug;
use qrcode::{Color, EcLevel, QrCode};

use crate::config::ErrorCorrection;
use crate::grid::BitGrid;
use crate::{Error, Result};

impl From<ErrorCorrection> for EcLevel {
    fn from(level: ErrorCorrection) -> Self {
        match level {
            ErrorCorrection::Low => EcLevel::L,
            ErrorCorrection::Medium => EcLevel::M,
            ErrorCorrection::Quartile => EcLevel::Q,
            ErrorCorrection::High => EcLevel::H,
        }
    }
}

/// Encode `data` as a QR symbol and return its modules.
///
/// Empty input is handed to the generator as-is.
pub fn encode(data: &[u8], level: ErrorCorrection) -> Result<BitGrid> {
    let code = QrCode::with_error_correction_level(data, level.into())
        .map_err(|e| Error::Encode(e.to_string()))?;

    let width = code.width();
    let colors = code.to_colors();
    debug!(
        "encoded {} bytes as {:?} symbol ({}x{}, ec {:?})",
        data.len(),
        code.version(),
        width,
        width,
        level
    );

    Ok(BitGrid::from_fn(width, width, |x, y| {
        colors[y * width + x] == Color::Dark
    }))
}
