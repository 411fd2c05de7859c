//! termqr
//!
//! Renders a two-color bitmap, typically a QR code, for display in a
//! terminal: either as doubled-width block glyphs or as an inline sixel
//! image with a two-entry palette.
//!
//! # Features
//!
//! - **qrencode** (default): builds grids from raw bytes with the `qrcode` crate
//! - **Text output**: any glyphs for dark and light modules
//! - **Sixel output**: run-length encoded bands, configurable scale and border
//!
//! # Example
//!
//! ```
//! use termqr::{BitGrid, RenderConfig, RenderMode};
//!
//! # fn main() -> termqr::Result<()> {
//! let grid = BitGrid::from_rows(&["#.", ".#"]).expect("rectangular rows");
//! let config = RenderConfig::new(RenderMode::Text).with_dark(Some("#"));
//!
//! let mut out = Vec::new();
//! termqr::render(&mut out, &grid, &config)?;
//! assert_eq!(out, b"##  \n  ##\n\n");
//! # Ok(())
//! # }
//! ```

pub mod error;
pub use error::{Error, Result};

pub mod config;
pub use config::{ErrorCorrection, RenderConfig, RenderMode, SixelOptions};

pub mod grid;
pub use grid::{BitGrid, Grid};

pub mod input;
pub use input::{read_bounded, MAX_INPUT_BYTES};

// Grid generation from raw bytes
#[cfg(feature = "qrencode")]
pub mod qr;

pub mod rendering;
pub use rendering::{render, render_to_string};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = RenderConfig::new(RenderMode::Text);
        assert_eq!(config.mode, RenderMode::Text);
        assert_eq!(config.sixel, SixelOptions::default());
    }

    #[test]
    fn test_default_limit() {
        assert_eq!(MAX_INPUT_BYTES, 8192);
    }
}
