//! Sixel graphics renderer
//!
//! Sixel data is a DCS string (`ESC P q ... ESC \`). Pixels are encoded in
//! horizontal bands six pixels tall; within a band, `#N` selects a palette
//! register, `!K` repeats the next sixel character `K` times, `~` is a sixel
//! with all six pixels set, and `-` moves to the start of the next band.
//!
//! Every module becomes a `6 * scale` pixel square, so each grid row is
//! emitted as `scale` identical bands and each column as a single run of
//! `6 * scale` full sixels.

use std::io::{self, Write};

use log::debug;

use crate::config::SixelOptions;
use crate::grid::Grid;
use crate::Result;

/// Device control string that enters sixel mode
const SIXEL_ENTER: &[u8] = b"\x1bPq";
/// String terminator that leaves sixel mode
const SIXEL_EXIT: &[u8] = b"\x1b\\";
/// Graphics newline: advance to the next band
const NEXT_BAND: u8 = b'-';

/// Palette register holding the dark color
pub const DARK_REGISTER: u8 = 0;
/// Palette register holding the light color
pub const LIGHT_REGISTER: u8 = 1;

/// Append a run of `count` full sixels in `register`. Empty runs are skipped.
fn push_run(buf: &mut Vec<u8>, register: u8, count: usize) -> io::Result<()> {
    if count == 0 {
        return Ok(());
    }
    write!(buf, "#{}!{}~", register, count)
}

/// Render `grid` as a sixel image.
///
/// `dark` and `light` are `R;G;B` triples for the RGB color model and are
/// assigned to registers 0 and 1 respectively. The output ends with a line
/// break after the string terminator.
pub fn render_sixel<W, G>(
    out: &mut W,
    grid: &G,
    dark: &str,
    light: &str,
    opts: &SixelOptions,
) -> Result<()>
where
    W: Write + ?Sized,
    G: Grid + ?Sized,
{
    let width = grid.width();
    let height = grid.height();
    let unit = opts.unit();
    let border = unit * opts.padding;
    let size = unit * (width + 2 * opts.padding);
    debug!(
        "sixel: {}x{} modules, scale {}, padding {}, {} px wide",
        width, height, opts.scale, opts.padding, size
    );

    out.write_all(SIXEL_ENTER)?;
    write!(out, "#{};2;{}", DARK_REGISTER, dark)?;
    write!(out, "#{};2;{}", LIGHT_REGISTER, light)?;

    let mut blank = Vec::new();
    push_run(&mut blank, LIGHT_REGISTER, size)?;
    blank.push(NEXT_BAND);

    let border_bands = opts.padding * opts.scale;
    for _ in 0..border_bands {
        out.write_all(&blank)?;
    }

    // One band's worth of runs, replayed `scale` times per grid row.
    let mut line = Vec::with_capacity((width + 2) * 8);
    for y in 0..height {
        line.clear();
        push_run(&mut line, LIGHT_REGISTER, border)?;
        for x in 0..width {
            let register = if grid.is_dark(x, y) {
                DARK_REGISTER
            } else {
                LIGHT_REGISTER
            };
            push_run(&mut line, register, unit)?;
        }
        push_run(&mut line, LIGHT_REGISTER, border)?;
        line.push(NEXT_BAND);

        for _ in 0..opts.scale {
            out.write_all(&line)?;
        }
    }

    for _ in 0..border_bands {
        out.write_all(&blank)?;
    }

    out.write_all(SIXEL_EXIT)?;
    out.write_all(b"\n")?;
    Ok(())
}
