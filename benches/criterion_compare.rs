// Comparative benchmarks for the timing demo's workloads: cheap arithmetic
// against string building, and two ways to build the same string.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

fn sum_additions(n: u64) -> u64 {
    let mut total = 0;
    for i in 0..n {
        total += black_box(i) + 1;
    }
    total
}

fn sum_multiplications(n: u64) -> u64 {
    let mut total = 0;
    for i in 0..n {
        total += black_box(i).wrapping_mul(2);
    }
    total
}

fn benchmark_arithmetic(c: &mut Criterion) {
    let mut group = c.benchmark_group("arithmetic");
    let n = 10_000u64;

    group.bench_with_input(BenchmarkId::new("addition", n), &n, |b, &n| {
        b.iter(|| sum_additions(n))
    });
    group.bench_with_input(BenchmarkId::new("multiplication", n), &n, |b, &n| {
        b.iter(|| sum_multiplications(n))
    });

    group.finish();
}

fn build_by_push(n: usize) -> String {
    let mut s = String::new();
    for i in 0..n {
        s.push_str(&i.to_string());
    }
    s
}

fn build_by_collect(n: usize) -> String {
    (0..n).map(|i| i.to_string()).collect()
}

fn build_by_repeat(n: usize) -> String {
    "string".repeat(n)
}

fn benchmark_string_building(c: &mut Criterion) {
    let mut group = c.benchmark_group("string_building");
    let n = 1000usize;

    group.bench_with_input(BenchmarkId::new("push_str", n), &n, |b, &n| {
        b.iter(|| build_by_push(black_box(n)))
    });
    group.bench_with_input(BenchmarkId::new("collect", n), &n, |b, &n| {
        b.iter(|| build_by_collect(black_box(n)))
    });
    group.bench_with_input(BenchmarkId::new("repeat", n), &n, |b, &n| {
        b.iter(|| build_by_repeat(black_box(n)))
    });

    group.finish();
}

criterion_group!(benches, benchmark_arithmetic, benchmark_string_building);
criterion_main!(benches);
