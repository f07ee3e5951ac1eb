use criterion::{Criterion, criterion_group, criterion_main};
use zettel_engine::render::html;
use zettel_engine::{build_outline, toc};
use zettel_syntax::parse_document;
mod common;

fn bench_parse_document(c: &mut Criterion) {
    let mut group = c.benchmark_group("parsing");
    group.sample_size(10);

    let content = common::generate_zettel_content(100);
    group.bench_function("typical_zettel", |b| {
        b.iter(|| parse_document(std::hint::black_box(&content)));
    });

    let outline = common::generate_deep_outline(50, 8);
    group.bench_function("deep_outline", |b| {
        b.iter(|| parse_document(std::hint::black_box(&outline)));
    });

    let stray = common::generate_stray_delimiters(200);
    group.bench_function("stray_delimiters", |b| {
        b.iter(|| parse_document(std::hint::black_box(&stray)));
    });

    group.finish();
}

fn bench_consumers(c: &mut Criterion) {
    let mut group = c.benchmark_group("consumers");
    group.sample_size(10);

    let nodes = parse_document(&common::generate_deep_outline(50, 8)).unwrap_or_default();
    group.bench_function("render_html", |b| {
        b.iter(|| html::render(std::hint::black_box(&nodes)));
    });
    group.bench_function("table_of_contents", |b| {
        b.iter(|| toc::build(std::hint::black_box(&nodes)));
    });
    group.bench_function("outline", |b| {
        b.iter(|| build_outline(std::hint::black_box(&nodes)));
    });

    group.finish();
}

criterion_group!(benches, bench_parse_document, bench_consumers);
criterion_main!(benches);
