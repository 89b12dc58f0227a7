#![allow(missing_docs)]
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use lumen_math::{Mat4, Vec3};

fn sample_transform() -> Mat4 {
    Mat4::scale(1.5, 0.75, 2.0)
        * Mat4::rotation_axis_angle(Vec3::new(0.3, 1.0, -0.2), 0.9)
        * Mat4::translation(10.0, -4.0, 2.5)
}

fn bench_multiply_and_inverse(c: &mut Criterion) {
    let a = sample_transform();
    let b = Mat4::rotation_y(0.4) * Mat4::translation(-1.0, 2.0, 3.0);
    let singular = Mat4::from([
        1.0, 2.0, 3.0, 4.0, //
        2.0, 4.0, 6.0, 8.0, //
        0.0, 1.0, 0.0, 0.0, //
        1.0, 1.0, 1.0, 1.0, //
    ]);

    let mut group = c.benchmark_group("mat4");
    group.bench_function("multiply", |bench| {
        bench.iter(|| black_box(black_box(a) * black_box(b)));
    });
    group.bench_function("inverse", |bench| {
        bench.iter(|| black_box(black_box(a).inverse()));
    });
    // Early-out path: the determinant check rejects before the adjugate.
    group.bench_function("inverse_singular", |bench| {
        bench.iter(|| black_box(black_box(singular).inverse()));
    });
    group.bench_function("determinant", |bench| {
        bench.iter(|| black_box(black_box(a).determinant()));
    });
    group.finish();
}

fn bench_transform_points(c: &mut Criterion) {
    let m = sample_transform();
    let mut group = c.benchmark_group("mat4_transform_points");
    for &n in &[16usize, 256, 4_096] {
        let points: Vec<Vec3> = (0..n)
            .map(|i| {
                let f = i as f32;
                Vec3::new(f, -f * 0.5, f * 0.25)
            })
            .collect();
        group.throughput(Throughput::Elements(n as u64));
        group.bench_with_input(BenchmarkId::from_parameter(n), &points, |bench, points| {
            bench.iter(|| {
                let mut acc = Vec3::ZERO;
                for p in points {
                    acc += m.transform_point(p);
                }
                black_box(acc)
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_multiply_and_inverse, bench_transform_points);
criterion_main!(benches);
