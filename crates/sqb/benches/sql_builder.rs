use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use sqb::{Builder, Expr, columns, eq, in_list, or, table};

/// Build a builder with `n` columns and `n` AND-ed conditions:
/// SELECT col0, col1, ... FROM t WHERE col0 = ? AND col1 = ? ...
fn build_select(n: usize) -> Builder {
    let cols: Vec<String> = (0..n).map(|i| format!("col{i}")).collect();
    let filter = sqb::fold_and((0..n).map(|i| eq(format!("col{i}"), i as i64)))
        .unwrap_or_else(|| sqb::string("TRUE"));
    sqb::new("SELECT ? FROM ? WHERE ?")
        .bind(columns(cols))
        .bind(table("t"))
        .bind(filter)
}

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("sql_builder/build");

    for n in [1, 5, 10, 50, 100] {
        let builder = build_select(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &builder, |b, builder| {
            b.iter(|| black_box(builder.build()));
        });
    }

    group.finish();
}

fn bench_bind_and_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("sql_builder/bind_and_build");

    for n in [1, 5, 10, 50, 100] {
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            b.iter(|| black_box(build_select(n).build()));
        });
    }

    group.finish();
}

fn bench_in_list(c: &mut Criterion) {
    let mut group = c.benchmark_group("sql_builder/in_list");

    for n in [5, 20, 100, 500] {
        let values: Vec<i64> = (0..n).collect();
        group.bench_with_input(BenchmarkId::from_parameter(n), &values, |b, values| {
            b.iter(|| {
                let q = sqb::new("SELECT * FROM t WHERE ?")
                    .bind(in_list("id", values.iter().copied()))
                    .build();
                black_box(q)
            });
        });
    }

    group.finish();
}

fn bench_or_chain(c: &mut Criterion) {
    let mut group = c.benchmark_group("sql_builder/or_chain");

    for n in [1, 5, 10, 50] {
        let chain: Expr = (1..n).fold(Expr::from(eq("col0", 0i64)), |acc, i| {
            or(acc, eq(format!("col{i}"), i as i64))
        });
        let builder = sqb::new("SELECT * FROM t WHERE ?").bind(chain);

        group.bench_with_input(BenchmarkId::from_parameter(n), &builder, |b, builder| {
            b.iter(|| black_box(builder.build()));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_build,
    bench_bind_and_build,
    bench_in_list,
    bench_or_chain
);
criterion_main!(benches);
