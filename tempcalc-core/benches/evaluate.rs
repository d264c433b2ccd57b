//! Throughput of the runtime path against the float reference

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use tempcalc_core::{evaluate_fixed, evaluate_reference, evaluate_rounded, CalibrationConfig};

fn runtime_path(c: &mut Criterion) {
    c.bench_function("evaluate_fixed", |b| {
        b.iter(|| evaluate_fixed(black_box(2000)))
    });

    c.bench_function("evaluate_rounded", |b| {
        b.iter(|| evaluate_rounded(black_box(2000)))
    });

    c.bench_function("evaluate_rounded_saturated", |b| {
        b.iter(|| evaluate_rounded(black_box(5000)))
    });

    c.bench_function("evaluate_reference", |b| {
        b.iter(|| evaluate_reference(black_box(2000.0)))
    });
}

fn generation(c: &mut Criterion) {
    let config = CalibrationConfig::default();
    c.bench_function("calibration_build", |b| {
        b.iter(|| black_box(&config).build())
    });
}

criterion_group!(benches, runtime_path, generation);
criterion_main!(benches);
