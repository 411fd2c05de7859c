#![cfg(feature = "qrencode")]

use termqr::{qr, read_bounded, render_to_string, ErrorCorrection, Grid, RenderConfig, RenderMode};

#[test]
fn stdin_like_bytes_to_text() {
    let data = read_bounded(&b"https://example.com"[..], termqr::MAX_INPUT_BYTES).unwrap();
    let grid = qr::encode(&data, ErrorCorrection::Low).unwrap();
    let w = grid.width();
    assert_eq!(w, grid.height());

    let out = render_to_string(&grid, &RenderConfig::new(RenderMode::Text)).unwrap();
    let lines: Vec<&str> = out.split('\n').collect();
    // height rows, one blank line, then the empty tail after the final break
    assert_eq!(lines.len(), w + 2);
    assert!(lines[..w].iter().all(|l| l.chars().count() == 2 * w));
    assert_eq!(lines[w], "");
}

#[test]
fn higher_error_correction_never_shrinks_symbol() {
    let data = b"The quick brown fox jumps over the lazy dog";
    let low = qr::encode(data, ErrorCorrection::Low).unwrap();
    let high = qr::encode(data, ErrorCorrection::High).unwrap();
    assert!(high.width() >= low.width());
}

#[test]
fn sixel_band_count_matches_symbol() {
    let grid = qr::encode(b"termqr", ErrorCorrection::Low).unwrap();
    let out = render_to_string(&grid, &RenderConfig::new(RenderMode::Sixel)).unwrap();
    // (width + 2 * padding) * scale bands, each ending in '-'
    let bands = out.matches('-').count();
    assert_eq!(bands, (grid.height() + 2) * 2);
}
