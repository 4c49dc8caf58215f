use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

use lucas_core::{advance, LucasSequence, TermPair};

fn bench_sequential_access(c: &mut Criterion) {
    let mut group = c.benchmark_group("sequential");
    for stride in [10u64, 100, 1000] {
        group.bench_with_input(BenchmarkId::new("stride", stride), &stride, |b, &stride| {
            b.iter(|| {
                let mut seq = LucasSequence::fibonacci(Some(stride));
                for i in 1..2_000u64 {
                    black_box(seq.nth(i).unwrap());
                }
            })
        });
    }
    group.finish();
}

fn bench_warm_vs_cold(c: &mut Criterion) {
    c.bench_function("lookup/cold", |b| {
        b.iter(|| {
            let mut seq = LucasSequence::brady(None);
            black_box(seq.nth(black_box(20_000)).unwrap());
        })
    });

    c.bench_function("lookup/warm", |b| {
        let mut seq = LucasSequence::brady(None);
        seq.nth(20_000).unwrap(); // warm
        b.iter(|| black_box(seq.nth(black_box(20_000)).unwrap()))
    });

    c.bench_function("advance/brute_force", |b| {
        let seeds = TermPair::new(2308, 4261);
        b.iter(|| black_box(advance(&seeds, black_box(20_000))))
    });
}

criterion_group!(benches, bench_sequential_access, bench_warm_vs_cold);
criterion_main!(benches);
