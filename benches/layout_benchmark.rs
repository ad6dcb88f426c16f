//! Layout benchmark: Measure a full frame of nested groups and lookups.
//!
//! Target: < 50ns per placed element

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use cursor_layout::{ElementId, LayoutManager, LayoutType, Placement, Size};

const ROWS: u32 = 32;
const COLS: u32 = 8;

fn frame(lm: &mut LayoutManager) {
    let cell = Placement::new().gravity(0.5, 0.5);
    lm.begin_frame();
    lm.push_layout(LayoutType::Vertical, ElementId(0));
    for row in 0..ROWS {
        let base = 1 + row * (COLS + 1);
        lm.push_layout(LayoutType::Horizontal, ElementId(base));
        for col in 0..COLS {
            lm.place_with(ElementId(base + 1 + col), Size::new(24.0, 12.0), &cell);
        }
        lm.end_layout();
    }
    lm.end_layout();
    let _ = lm.end_frame();
}

fn layout_frame(c: &mut Criterion) {
    let mut lm = LayoutManager::new();
    frame(&mut lm);

    c.bench_function("layout_frame_32x8", |b| {
        b.iter(|| {
            frame(black_box(&mut lm));
        })
    });
}

fn lookup_fast_path(c: &mut Criterion) {
    let mut lm = LayoutManager::new();
    frame(&mut lm);

    c.bench_function("lookup_dense_id", |b| {
        b.iter(|| lm.lookup(black_box(ElementId(100))))
    });
}

fn lookup_scan(c: &mut Criterion) {
    let mut lm = LayoutManager::new();
    for id in (0..256).rev() {
        lm.new_element(ElementId(id));
    }

    c.bench_function("lookup_linear_scan", |b| {
        b.iter(|| lm.lookup(black_box(ElementId(3))))
    });
}

criterion_group!(benches, layout_frame, lookup_fast_path, lookup_scan);
criterion_main!(benches);
