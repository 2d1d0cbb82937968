//! Frame rendering benchmarks.
//!
//! Drives the TUI against a `TestBackend` to measure a full draw (recompute,
//! canvas, status bar) and a drag step followed by a redraw.
//!
//! Run with: cargo bench --bench render --features bench-internals

#![allow(missing_docs)] // criterion macros generate undocumented items

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use hexbubble::model::BubbleOptions;
use hexbubble::state::BubbleField;
use hexbubble::view::TuiApp;
use ratatui::backend::TestBackend;
use ratatui::Terminal;

fn create_app(items: usize) -> TuiApp<TestBackend> {
    let terminal = Terminal::new(TestBackend::new(200, 60)).expect("test backend");
    let labels = (1..=items).map(|n| n.to_string()).collect();
    let options = BubbleOptions {
        show_guides: Some(true),
        ..BubbleOptions::default()
    };
    let field = BubbleField::new(labels, options).expect("default options are valid");
    TuiApp::new_for_bench(terminal, field)
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render");
    for items in [40, 400, 4_000] {
        let mut app = create_app(items);
        group.bench_with_input(BenchmarkId::new("redraw", items), &items, |b, _| {
            b.iter(|| app.render_bench().expect("render"));
        });

        let mut app = create_app(items);
        let mut down = true;
        group.bench_with_input(BenchmarkId::new("scroll_and_redraw", items), &items, |b, _| {
            b.iter(|| {
                // Alternate so the position stays near the centre
                let code = if down { KeyCode::Down } else { KeyCode::Up };
                down = !down;
                app.handle_key_bench(black_box(KeyEvent::new(code, KeyModifiers::NONE)));
                app.render_bench().expect("render")
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_render);
criterion_main!(benches);
