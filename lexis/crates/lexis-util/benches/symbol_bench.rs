//! Symbol interning benchmarks.
//!
//! Run with: `cargo bench --package lexis-util`

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use lexis_util::symbol::{Symbol, SYM_IDENTIFIER};

fn bench_intern(c: &mut Criterion) {
    let mut group = c.benchmark_group("intern");
    group.throughput(Throughput::Elements(1));

    group.bench_function("intern_new_string", |b| {
        let mut counter = 0u64;
        b.iter(|| {
            counter += 1;
            Symbol::intern(&format!("fresh_{}", counter))
        })
    });

    group.bench_function("intern_existing_string", |b| {
        let _ = Symbol::intern("processor");
        b.iter(|| black_box(Symbol::intern("processor")))
    });

    group.bench_function("intern_reserved", |b| {
        b.iter(|| black_box(Symbol::intern("$identifier")))
    });

    group.finish();
}

fn bench_comparison(c: &mut Criterion) {
    let mut group = c.benchmark_group("comparison");

    let keyword = Symbol::intern("namespace");
    let other = Symbol::intern("namespace");

    group.bench_function("symbol_eq_symbol", |b| {
        b.iter(|| black_box(keyword == other) && black_box(keyword != SYM_IDENTIFIER))
    });

    group.bench_function("symbol_eq_str", |b| {
        b.iter(|| black_box(keyword.eq_str("namespace")))
    });

    group.finish();
}

fn bench_resolve(c: &mut Criterion) {
    let mut group = c.benchmark_group("resolve");

    for count in [10usize, 1_000, 10_000] {
        let symbols: Vec<_> = (0..count)
            .map(|i| Symbol::intern(&format!("resolve_{}_{}", count, i)))
            .collect();
        group.bench_with_input(BenchmarkId::from_parameter(count), &symbols, |b, symbols| {
            b.iter(|| {
                for sym in symbols {
                    black_box(sym.as_str());
                }
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_intern, bench_comparison, bench_resolve);
criterion_main!(benches);
