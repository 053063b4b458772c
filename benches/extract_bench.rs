//! Benchmarks for isosurface extraction
//!
//! Author: Moroya Sakamoto

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use topocubes::MarchingCubes;

fn sphere_extractor(n: usize) -> MarchingCubes {
    let mut mc = MarchingCubes::new(n, n, n);
    mc.fill_with(|i, j, k| {
        let f = |v: usize| 2.0 * v as f32 / (n - 1) as f32 - 1.0;
        let (x, y, z) = (f(i), f(j), f(k));
        x * x + y * y + z * z
    });
    mc
}

fn bench_resolution(c: &mut Criterion) {
    let mut group = c.benchmark_group("sphere_extraction");
    for n in [16usize, 32, 64] {
        let cells = ((n - 1) * (n - 1) * (n - 1)) as u64;
        group.throughput(Throughput::Elements(cells));
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            let mut mc = sphere_extractor(n);
            b.iter(|| {
                mc.run(black_box(0.49));
                black_box(mc.ntrigs())
            })
        });
    }
    group.finish();
}

fn bench_methods(c: &mut Criterion) {
    let mut group = c.benchmark_group("methods");

    group.bench_function("topological_32", |b| {
        let mut mc = sphere_extractor(32);
        b.iter(|| {
            mc.run(black_box(0.49));
            black_box(mc.ntrigs())
        })
    });

    group.bench_function("classical_32", |b| {
        let mut mc = sphere_extractor(32);
        mc.set_method(true);
        b.iter(|| {
            mc.run(black_box(0.49));
            black_box(mc.ntrigs())
        })
    });

    group.finish();
}

criterion_group!(benches, bench_resolution, bench_methods);
criterion_main!(benches);
