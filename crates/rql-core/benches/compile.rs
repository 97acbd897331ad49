//! Compile throughput as queries grow in clause count.

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use rql_core::compile;

fn make_query(clauses: usize) -> String {
    let mut parts = vec!["there are 2 alphanumeric groups separated by slash".to_string()];
    for i in 1..clauses {
        if i % 2 == 0 {
            parts.push("and 3 numeric group joined using dot".to_string());
        } else {
            parts.push("and not dot".to_string());
        }
    }
    parts.join(" ")
}

fn bench_compile(c: &mut Criterion) {
    let mut group = c.benchmark_group("compile");

    for &n in &[1_usize, 10, 100, 1_000] {
        let query = make_query(n);
        group.throughput(Throughput::Bytes(query.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(n), &query, |b, query| {
            b.iter(|| compile(black_box(query)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_compile);
criterion_main!(benches);
