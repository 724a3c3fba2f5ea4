use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use sqlstitch::{Statement, Value};

/// Build a statement with `n` projected columns and `n` equality predicates:
/// select col0,col1,... from t where col0=? and col1=? ...
fn build_filtered_select(n: usize) -> Statement {
    let columns: Vec<String> = (0..n).map(|i| format!("col{i}")).collect();
    let column_refs: Vec<&str> = columns.iter().map(String::as_str).collect();

    let mut where_clause = Statement::new()
        .select(&column_refs)
        .from(&["t"])
        .where_clause();
    for (i, col) in columns.iter().enumerate() {
        if i > 0 {
            where_clause = where_clause.and();
        }
        where_clause = where_clause.eq(col.as_str(), i as i64);
    }
    where_clause.end()
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("statement/render");

    for n in [1, 5, 10, 50, 100] {
        let stmt = build_filtered_select(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &stmt, |b, stmt| {
            b.iter(|| black_box(stmt.render()));
        });
    }

    group.finish();
}

fn bench_build_and_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("statement/build_and_render");

    for n in [1, 5, 10, 50, 100] {
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            b.iter(|| {
                let stmt = build_filtered_select(n);
                black_box(stmt.render());
            });
        });
    }

    group.finish();
}

fn bench_in_values(c: &mut Criterion) {
    let mut group = c.benchmark_group("statement/in_values");

    for n in [5, 20, 100, 500] {
        let values: Vec<i64> = (0..n).collect();
        group.bench_with_input(BenchmarkId::from_parameter(n), &values, |b, values| {
            b.iter(|| {
                let stmt = Statement::new()
                    .select(&["*"])
                    .from(&["t"])
                    .where_clause()
                    .in_values("id", values.iter().copied())
                    .end();
                black_box(stmt.render());
            });
        });
    }

    group.finish();
}

fn bench_retraction(c: &mut Criterion) {
    c.bench_function("statement/retraction", |b| {
        b.iter(|| {
            let stmt = Statement::new()
                .select(&["*"])
                .from(&["t"])
                .where_clause()
                .eq("a", 1)
                .and()
                .all_eq(Vec::<(&str, Value)>::new())
                .end();
            black_box(stmt.render());
        });
    });
}

criterion_group!(
    benches,
    bench_render,
    bench_build_and_render,
    bench_in_values,
    bench_retraction
);
criterion_main!(benches);
