// -------------------------------------------------------------------------
// SCPN Helio-Thermal -- Power Chain Benchmark
// Single report evaluation and a 1000-point lens-area sweep.
// -------------------------------------------------------------------------

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use helio_engineering::calculator::PanelCalculator;
use helio_engineering::sweep::{run_sweep, SweepParameter};
use helio_types::config::PanelConfig;
use std::hint::black_box;

fn bench_report(c: &mut Criterion) {
    let calc = PanelCalculator::new(PanelConfig::default()).expect("valid default config");
    c.bench_function("panel_report", |b| b.iter(|| black_box(&calc).report()));
}

fn bench_sweep(c: &mut Criterion) {
    let base = PanelConfig::default();
    let mut group = c.benchmark_group("lens_area_sweep");
    for steps in [100usize, 1000] {
        group.bench_with_input(BenchmarkId::from_parameter(steps), &steps, |b, &n| {
            b.iter(|| {
                run_sweep(black_box(&base), SweepParameter::LensArea, 0.1, 10.0, n)
                    .expect("sweep over valid lens areas")
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_report, bench_sweep);
criterion_main!(benches);
