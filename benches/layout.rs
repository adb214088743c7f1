use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use widget_grid::presets::default_widgets;
use widget_grid::{Grid, Rect, Widget, compute_board_size, normalize_layout, resolve_placement};

/// A board where every widget starts stacked on the same spot.
fn piled_widgets(count: usize) -> Vec<Widget> {
    (0..count)
        .map(|i| Widget::new(format!("w{i}"), Rect::new(0, 0, 224 + (i as i32 % 3) * 256, 160)))
        .collect()
}

fn normalize_presets(c: &mut Criterion) {
    let grid = Grid::default();
    let widgets = default_widgets();
    c.bench_function("normalize_presets", |b| {
        b.iter(|| normalize_layout(&grid, black_box(&widgets)));
    });
}

fn normalize_pile(c: &mut Criterion) {
    let grid = Grid::default();
    let widgets = piled_widgets(60);
    c.bench_function("normalize_pile_60", |b| {
        b.iter(|| normalize_layout(&grid, black_box(&widgets)));
    });
}

fn drag_frame(c: &mut Criterion) {
    let grid = Grid::default();
    let widgets = normalize_layout(&grid, &piled_widgets(60));
    c.bench_function("resolve_drag_frame", |b| {
        b.iter(|| {
            resolve_placement(
                &grid,
                black_box(&widgets),
                "w0",
                black_box(Rect::new(300, 40, 300, 200)),
            )
        });
    });
}

fn board_size(c: &mut Criterion) {
    let grid = Grid::default();
    let widgets = normalize_layout(&grid, &piled_widgets(60));
    c.bench_function("compute_board_size", |b| {
        b.iter(|| compute_board_size(&grid, black_box(&widgets)));
    });
}

criterion_group!(benches, normalize_presets, normalize_pile, drag_frame, board_size);
criterion_main!(benches);
