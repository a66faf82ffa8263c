use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use pgquery::prelude::*;

/// SELECT col0, ... FROM t WHERE col0 = $1 AND col1 = $2 ...
fn build_select(n: usize) -> Query {
    let cols: Vec<String> = (0..n).map(|i| format!("col{i}")).collect();
    let mut opts = vec![columns(cols.clone()), from("t")];
    opts.extend(cols.into_iter().enumerate().map(|(i, c)| where_eq(c, i as i64)));
    select(opts)
}

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("pgquery/build");

    for n in [1, 5, 10, 50, 100] {
        let q = build_select(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &q, |b, q| {
            b.iter(|| black_box(q.build()));
        });
    }

    group.finish();
}

fn bench_compose_and_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("pgquery/compose_and_build");

    for n in [1, 5, 10, 50, 100] {
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            b.iter(|| black_box(build_select(n).build()));
        });
    }

    group.finish();
}

fn bench_nested(c: &mut Criterion) {
    let mut group = c.benchmark_group("pgquery/nested");

    for depth in [1, 4, 16] {
        let mut q = select([columns(["id"]), from("t0"), where_eq("k", 0i64)]);
        for d in 1..=depth {
            q = select([
                columns(["id"]),
                from(format!("t{d}")),
                where_eq("k", d as i64),
                where_query("id", "IN", q),
            ]);
        }
        group.bench_with_input(BenchmarkId::from_parameter(depth), &q, |b, q| {
            b.iter(|| black_box(q.build()));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_build, bench_compose_and_build, bench_nested);
criterion_main!(benches);
