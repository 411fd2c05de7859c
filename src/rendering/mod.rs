//! Rendering module: text glyphs and sixel graphics

pub mod sixel;
pub mod text;

use std::io::Write;

use crate::config::{RenderConfig, RenderMode};
use crate::grid::Grid;
use crate::Result;

pub use sixel::render_sixel;
pub use text::render_text;

/// Render `grid` to `out` with the renderer selected by `config.mode`.
pub fn render<W, G>(out: &mut W, grid: &G, config: &RenderConfig) -> Result<()>
where
    W: Write + ?Sized,
    G: Grid + ?Sized,
{
    log::debug!(
        "rendering {}x{} grid as {}",
        grid.width(),
        grid.height(),
        config.mode
    );
    match config.mode {
        RenderMode::Text => render_text(out, grid, &config.dark, &config.light),
        RenderMode::Sixel => render_sixel(out, grid, &config.dark, &config.light, &config.sixel),
    }
}

/// Render into an in-memory buffer and return it as a string.
pub fn render_to_string<G: Grid + ?Sized>(grid: &G, config: &RenderConfig) -> Result<String> {
    let mut buf = Vec::new();
    render(&mut buf, grid, config)?;
    // Marks are `&str`, so the output is always valid UTF-8
    Ok(String::from_utf8_lossy(&buf).into_owned())
}
