//! Render configuration: output mode, dark/light marks, and sixel geometry.

use std::fmt;
use std::str::FromStr;

use crate::{Error, Result};

/// Default dark glyph for text output (full block)
pub const TEXT_DARK: &str = "\u{2588}";
/// Default light glyph for text output
pub const TEXT_LIGHT: &str = " ";
/// Default dark color for sixel output, as an `R;G;B` triple
pub const SIXEL_DARK: &str = "0;0;0";
/// Default light color for sixel output, as an `R;G;B` triple
pub const SIXEL_LIGHT: &str = "255;255;255";

/// Output format selector
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderMode {
    /// Doubled-width block glyphs
    Text,
    /// Inline sixel graphics
    Sixel,
}

impl RenderMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            RenderMode::Text => "text",
            RenderMode::Sixel => "sixel",
        }
    }

    /// Default `(dark, light)` marks for this mode.
    pub fn default_marks(&self) -> (&'static str, &'static str) {
        match self {
            RenderMode::Text => (TEXT_DARK, TEXT_LIGHT),
            RenderMode::Sixel => (SIXEL_DARK, SIXEL_LIGHT),
        }
    }
}

impl FromStr for RenderMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "text" => Ok(RenderMode::Text),
            "sixel" => Ok(RenderMode::Sixel),
            other => Err(Error::UnsupportedRenderMode(other.to_string())),
        }
    }
}

impl fmt::Display for RenderMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Geometry of the sixel output.
///
/// `scale` multiplies both axes so one module covers `6 * scale` pixel
/// columns and `scale` band-rows. `padding` is the light border width in
/// modules on every side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SixelOptions {
    pub scale: usize,
    pub padding: usize,
}

impl SixelOptions {
    pub fn new(scale: usize, padding: usize) -> Result<Self> {
        if scale == 0 {
            return Err(Error::Config("sixel scale must be at least 1".into()));
        }
        Ok(Self { scale, padding })
    }

    /// Pixel columns (and pixel rows) covered by one module.
    pub fn unit(&self) -> usize {
        6 * self.scale
    }
}

impl Default for SixelOptions {
    fn default() -> Self {
        Self { scale: 2, padding: 1 }
    }
}

/// Error-correction strength handed to the bitmap generator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorCorrection {
    /// Recovers about 7% of the symbol
    #[default]
    Low,
    /// Recovers about 15%
    Medium,
    /// Recovers about 25%
    Quartile,
    /// Recovers about 30%
    High,
}

impl FromStr for ErrorCorrection {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "l" | "low" => Ok(ErrorCorrection::Low),
            "m" | "medium" => Ok(ErrorCorrection::Medium),
            "q" | "quartile" => Ok(ErrorCorrection::Quartile),
            "h" | "high" => Ok(ErrorCorrection::High),
            other => Err(Error::Config(format!("unknown error-correction level '{}'", other))),
        }
    }
}

/// Configuration for a single render pass
///
/// Built once from the command line (or by a library caller) and never
/// mutated afterwards. `dark` and `light` are passed to the renderer
/// verbatim: glyph text in text mode, an `R;G;B` triple in sixel mode.
///
/// # Examples
///
/// ```
/// use termqr::{RenderConfig, RenderMode};
///
/// let cfg = RenderConfig::new(RenderMode::Sixel).with_dark(Some("100;0;0"));
/// assert_eq!(cfg.dark, "100;0;0");
/// assert_eq!(cfg.light, "255;255;255");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderConfig {
    pub mode: RenderMode,
    pub dark: String,
    pub light: String,
    pub sixel: SixelOptions,
}

impl RenderConfig {
    /// Configuration with the default marks for `mode`.
    pub fn new(mode: RenderMode) -> Self {
        let (dark, light) = mode.default_marks();
        Self {
            mode,
            dark: dark.to_string(),
            light: light.to_string(),
            sixel: SixelOptions::default(),
        }
    }

    /// Override the dark mark. `None` or an empty string keeps the default.
    pub fn with_dark(mut self, dark: Option<&str>) -> Self {
        if let Some(d) = dark.filter(|d| !d.is_empty()) {
            self.dark = d.to_string();
        }
        self
    }

    /// Override the light mark. `None` or an empty string keeps the default.
    pub fn with_light(mut self, light: Option<&str>) -> Self {
        if let Some(l) = light.filter(|l| !l.is_empty()) {
            self.light = l.to_string();
        }
        self
    }

    pub fn with_sixel_options(mut self, opts: SixelOptions) -> Self {
        self.sixel = opts;
        self
    }
}
