//! Criterion micro-benchmarks for push, append, and traversal.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tristore_bench::{sphere_storage, sphere_vertices};
use tristore_buffer::{Vec3DStorage, Vec3FStorage};
use tristore_test_utils::random_elements;

/// Benchmark: push 100K f32 elements into a fresh buffer (7 doublings).
fn bench_push_100k(c: &mut Criterion) {
    let vertices = sphere_vertices::<f32>(100_000);
    c.bench_function("push_100k", |b| {
        b.iter(|| {
            let mut s = Vec3FStorage::new();
            for &v in &vertices {
                s.push(v);
            }
            black_box(s.size());
        });
    });
}

/// Benchmark: push 100K elements after reserving capacity once.
fn bench_push_reserved_100k(c: &mut Criterion) {
    let vertices = sphere_vertices::<f32>(100_000);
    c.bench_function("push_reserved_100k", |b| {
        b.iter(|| {
            let mut s = Vec3FStorage::new();
            s.store_at_least(vertices.len());
            for &v in &vertices {
                s.push(v);
            }
            black_box(s.size());
        });
    });
}

/// Benchmark: append a 100K f32 buffer onto an f64 buffer (converting).
fn bench_append_cross_kind_100k(c: &mut Criterion) {
    let source = sphere_storage::<f32>(100_000);
    c.bench_function("append_cross_kind_100k", |b| {
        b.iter(|| {
            let mut dest = Vec3DStorage::new();
            dest.append(&source);
            black_box(dest.size());
        });
    });
}

/// Benchmark: sum components of 100K elements through `each`.
fn bench_each_100k(c: &mut Criterion) {
    let s = sphere_storage::<f32>(100_000);
    c.bench_function("each_100k", |b| {
        b.iter(|| {
            let mut sum = 0.0f32;
            s.each(|x, y, z, _| sum += x + y + z);
            black_box(sum);
        });
    });
}

/// Benchmark: translate 100K elements in place through `mutate_each`.
fn bench_mutate_each_100k(c: &mut Criterion) {
    let mut s = Vec3FStorage::new();
    s.extend(random_elements::<f32>(100_000, 42));
    c.bench_function("mutate_each_100k", |b| {
        b.iter(|| {
            s.mutate_each(|storage, x, y, z| {
                storage[x] += 1.0;
                storage[y] -= 1.0;
                storage[z] *= 1.0001;
            });
            black_box(s.storage()[0]);
        });
    });
}

criterion_group!(
    benches,
    bench_push_100k,
    bench_push_reserved_100k,
    bench_append_cross_kind_100k,
    bench_each_100k,
    bench_mutate_each_100k
);
criterion_main!(benches);
