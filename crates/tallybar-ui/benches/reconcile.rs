//! Benchmarks for bar reconciliation and layout

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use tallybar_geometry::{AxisRange, Diagram, DiagramConfig};
use tallybar_ui::{BarDefaults, BarsSource, BarsState, PartialBar, layout_bars, reconcile};

fn list_source(size: usize, offset: f64) -> BarsSource {
    (0..size)
        .map(|i| PartialBar::new().key(format!("bar-{i}")).value(i as f64 + offset))
        .collect::<Vec<_>>()
        .into()
}

fn bench_reconcile_count(c: &mut Criterion) {
    let mut group = c.benchmark_group("reconcile_count");
    let defaults = BarDefaults::default();

    for size in [10, 100, 1000, 10000] {
        group.throughput(Throughput::Elements(size as u64));

        let state = BarsState::new(&BarsSource::Count(size), &defaults);
        group.bench_with_input(BenchmarkId::new("grow", size), &size, |b, &size| {
            b.iter(|| reconcile(black_box(&state), &BarsSource::Count(size * 2), &defaults));
        });

        group.bench_with_input(BenchmarkId::new("shrink", size), &size, |b, &size| {
            b.iter(|| reconcile(black_box(&state), &BarsSource::Count(size / 2), &defaults));
        });
    }

    group.finish();
}

fn bench_reconcile_list(c: &mut Criterion) {
    let mut group = c.benchmark_group("reconcile_list");
    let defaults = BarDefaults::default();

    for size in [10, 100, 1000, 10000] {
        group.throughput(Throughput::Elements(size as u64));

        let state = BarsState::new(&list_source(size, 0.0), &defaults);
        let unchanged = list_source(size, 0.0);
        let changed = list_source(size, 1.0);

        group.bench_with_input(BenchmarkId::new("unchanged", size), &size, |b, _| {
            b.iter(|| reconcile(black_box(&state), &unchanged, &defaults));
        });

        group.bench_with_input(BenchmarkId::new("all_changed", size), &size, |b, _| {
            b.iter(|| reconcile(black_box(&state), &changed, &defaults));
        });
    }

    group.finish();
}

fn bench_layout(c: &mut Criterion) {
    let mut group = c.benchmark_group("layout_bars");
    let diagram = Diagram::new(DiagramConfig {
        width_px: 1920.0,
        height_px: 1080.0,
        x: AxisRange::new(100.0, 1.0),
        y: AxisRange::new(1000.0, 10.0),
        x_offset_px: 8.0,
        y_offset_px: 32.0,
    });

    for size in [10, 100, 1000] {
        group.throughput(Throughput::Elements(size as u64));

        let state = BarsState::new(&list_source(size, 0.0), &BarDefaults::default());
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| layout_bars(&diagram, black_box(state.bars()), 0.2, 12.0));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_reconcile_count, bench_reconcile_list, bench_layout);
criterion_main!(benches);
