//! Block-glyph text renderer

use std::io::Write;

use crate::grid::Grid;
use crate::Result;

/// Render `grid` as text, two marks per module, one line per row, followed
/// by a blank line.
///
/// Marks are written verbatim; doubling them keeps modules roughly square
/// in a terminal whose cells are taller than they are wide.
pub fn render_text<W, G>(out: &mut W, grid: &G, dark: &str, light: &str) -> Result<()>
where
    W: Write + ?Sized,
    G: Grid + ?Sized,
{
    let dark = dark.repeat(2);
    let light = light.repeat(2);

    for y in 0..grid.height() {
        for x in 0..grid.width() {
            let mark = if grid.is_dark(x, y) { &dark } else { &light };
            out.write_all(mark.as_bytes())?;
        }
        out.write_all(b"\n")?;
    }
    out.write_all(b"\n")?;
    Ok(())
}
