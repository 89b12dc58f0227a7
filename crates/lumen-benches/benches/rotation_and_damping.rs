#![allow(missing_docs)]
use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use lumen_math::scalar::{smooth_damp, smooth_damp_angle};
use lumen_math::{Quat, Vec3};

fn bench_quat_rotate(c: &mut Criterion) {
    let q = Quat::from_axis_angle(Vec3::new(1.0, 2.0, 3.0), 0.7);
    let mut group = c.benchmark_group("quat_rotate");
    for &n in &[16usize, 256, 4_096] {
        let vectors: Vec<Vec3> = (0..n)
            .map(|i| {
                let f = i as f32;
                Vec3::new(f.sin(), f.cos(), f * 0.01)
            })
            .collect();
        group.throughput(Throughput::Elements(n as u64));
        group.bench_with_input(BenchmarkId::new("expanded", n), &vectors, |b, vectors| {
            b.iter(|| {
                let mut acc = Vec3::ZERO;
                for &v in vectors {
                    acc += q * v;
                }
                black_box(acc)
            });
        });
        // Same rotation through the cross-product form on Vec3.
        group.bench_with_input(BenchmarkId::new("cross_form", n), &vectors, |b, vectors| {
            b.iter(|| {
                let mut acc = Vec3::ZERO;
                for &v in vectors {
                    acc += v.rotate(&q);
                }
                black_box(acc)
            });
        });
    }
    group.finish();
}

fn bench_smooth_damp(c: &mut Criterion) {
    let mut group = c.benchmark_group("smooth_damp");
    // One simulated second at 60 Hz per iteration.
    group.throughput(Throughput::Elements(60));
    group.bench_function("linear", |b| {
        b.iter(|| {
            let mut velocity = 0.0;
            let mut x = 0.0;
            for _ in 0..60 {
                x = smooth_damp(x, black_box(10.0), &mut velocity, 0.3, f32::INFINITY, 1.0 / 60.0);
            }
            black_box(x)
        });
    });
    group.bench_function("angle", |b| {
        b.iter(|| {
            let mut velocity = 0.0;
            let mut a = 350.0;
            for _ in 0..60 {
                a = smooth_damp_angle(a, black_box(10.0), &mut velocity, 0.3, 720.0, 1.0 / 60.0);
            }
            black_box(a)
        });
    });
    group.finish();
}

criterion_group! {
    name = benches;
    config = Criterion::default()
        .warm_up_time(Duration::from_secs(1))
        .measurement_time(Duration::from_secs(3))
        .sample_size(50);
    targets = bench_quat_rotate, bench_smooth_damp
}
criterion_main!(benches);
