use criterion::{black_box, criterion_group, criterion_main, Criterion};

use termqr::{render, BitGrid, RenderConfig, RenderMode};

// Run with:
//    cargo bench

/// A version-40-sized grid with a mixed pattern
fn large_grid() -> BitGrid {
    BitGrid::from_fn(177, 177, |x, y| (x * 31 + y * 17) % 7 < 3)
}

fn bench_render_text(c: &mut Criterion) {
    let grid = large_grid();
    let cfg = RenderConfig::new(RenderMode::Text);
    let mut out = Vec::with_capacity(1 << 20);

    c.bench_function("render_text_177", |b| {
        b.iter(|| {
            out.clear();
            render(&mut out, black_box(&grid), &cfg).unwrap();
        })
    });
}

fn bench_render_sixel(c: &mut Criterion) {
    let grid = large_grid();
    let cfg = RenderConfig::new(RenderMode::Sixel);
    let mut out = Vec::with_capacity(1 << 20);

    c.bench_function("render_sixel_177", |b| {
        b.iter(|| {
            out.clear();
            render(&mut out, black_box(&grid), &cfg).unwrap();
        })
    });
}

#[cfg(feature = "qrencode")]
fn bench_encode(c: &mut Criterion) {
    use termqr::{qr, ErrorCorrection};

    let data = vec![b'x'; 1024];
    c.bench_function("encode_1k", |b| {
        b.iter(|| qr::encode(black_box(&data), ErrorCorrection::Low).unwrap())
    });
}

#[cfg(not(feature = "qrencode"))]
fn bench_encode(_c: &mut Criterion) {}

criterion_group!(benches, bench_render_text, bench_render_sixel, bench_encode);
criterion_main!(benches);
