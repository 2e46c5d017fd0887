// File: crates/chart-core/benches/recompute_bench.rs
// Purpose: Cost of the synchronous frame rebuild under live ticks and pointer sweeps.

use chart_core::{ChartConfig, ChartController, Sample};
use criterion::{black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};

fn gen_ticks(n: usize) -> Vec<Sample> {
    let mut v = Vec::with_capacity(n);
    let mut price = 100.0f64;
    for i in 0..n {
        // simple waveform with drift
        price += (i as f64 * 0.3).sin() * 0.8 + 0.01;
        v.push(Sample::new(i as i64 * 1_000, price));
    }
    v
}

fn bench_live_append(c: &mut Criterion) {
    let mut group = c.benchmark_group("live_append");
    for &cap in &[30usize, 300usize, 3_000usize] {
        let ticks = gen_ticks(cap * 2);
        group.bench_with_input(BenchmarkId::from_parameter(format!("cap{cap}")), &cap, |b, &cap| {
            b.iter_batched(
                || {
                    let mut ctl = ChartController::new(ChartConfig::portfolio().with_capacity(cap))
                        .expect("valid config");
                    ctl.replace(ticks[..cap].iter().copied());
                    ctl
                },
                |mut ctl| {
                    for s in &ticks[cap..] {
                        black_box(ctl.append(*s));
                    }
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

fn bench_pointer_move(c: &mut Criterion) {
    let mut ctl = ChartController::new(ChartConfig::price()).expect("valid config");
    ctl.replace(gen_ticks(30));
    c.bench_function("pointer_sweep", |b| {
        b.iter(|| {
            for x in 0..400 {
                black_box(ctl.on_pointer_move(x as f64));
            }
        });
    });
}

criterion_group!(benches, bench_live_append, bench_pointer_move);
criterion_main!(benches);
