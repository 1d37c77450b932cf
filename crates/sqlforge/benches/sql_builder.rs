use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use sqlforge::{select, Builder};

/// Build a SELECT draft with `n` result fields and `n` AND conditions:
/// SELECT col0,col1,... FROM t WHERE col0=$1 AND col1=$2 ...
fn build_select_draft(n: usize) -> Builder {
    let mut draft = select().from("t");
    for i in 0..n {
        draft = draft
            .select(format!("col{i}"))
            .where_and(format!("col{i} = ${}", i + 1));
    }
    draft
}

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("sql_builder/build");

    for n in [1, 5, 10, 50, 100] {
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            b.iter(|| {
                let draft = build_select_draft(n);
                black_box(draft.build().unwrap());
            });
        });
    }

    group.finish();
}

fn bench_insert_entries(c: &mut Criterion) {
    let mut group = c.benchmark_group("sql_builder/insert_entries");

    for n in [1, 10, 100] {
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            b.iter(|| {
                let mut draft = sqlforge::insert("a,b,c,d").into_table("t");
                for _ in 0..n {
                    draft = draft.entry();
                }
                black_box(draft.build().unwrap());
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_build, bench_insert_entries);
criterion_main!(benches);
