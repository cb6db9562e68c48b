use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use gql_tag::{Interpolate, Template, gql};

/// Build `n + 1` segments around `n` integer values:
/// query { f0: field(id: 0) f1: field(id: 1) ... }
fn build_parts(n: usize) -> (Vec<String>, Vec<i64>) {
    let mut segments = Vec::with_capacity(n + 1);
    segments.push("query { f0: field(id: ".to_string());
    for i in 1..n {
        segments.push(format!(") f{i}: field(id: "));
    }
    segments.push(") }".to_string());
    let values = (0..n as i64).collect();
    (segments, values)
}

fn bench_gql(c: &mut Criterion) {
    let mut group = c.benchmark_group("tag/gql");

    for n in [1, 5, 10, 50, 100] {
        let (segments, values) = build_parts(n);
        let segments: Vec<&str> = segments.iter().map(String::as_str).collect();
        let values: Vec<&dyn Interpolate> = values.iter().map(|v| v as &dyn Interpolate).collect();
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, _| {
            b.iter(|| black_box(gql(&segments, &values)));
        });
    }

    group.finish();
}

fn bench_template(c: &mut Criterion) {
    let mut group = c.benchmark_group("template/build_and_render");

    for n in [1, 5, 10, 50, 100] {
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            b.iter(|| {
                let mut q = Template::new("query {");
                for i in 0..n {
                    q.push(" f").push_value(i).push(": field(id: ").push_value(i).push(")");
                }
                q.push(" }");
                black_box(q.render())
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_gql, bench_template);
criterion_main!(benches);
