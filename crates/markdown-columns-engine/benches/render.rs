use criterion::{Criterion, criterion_group, criterion_main};
use markdown_columns_engine::{
    ColumnSession, RenderEnv, parsing::parse_fragments, render_markdown,
};
mod common;

fn bench_parse_fragments(c: &mut Criterion) {
    let mut group = c.benchmark_group("parsing");
    group.sample_size(20);

    let content = common::generate_markdown_content(100);
    group.bench_function("parse_fragments", |b| {
        b.iter(|| {
            let fragments = parse_fragments(std::hint::black_box(&content));
            std::hint::black_box(fragments);
        });
    });

    group.finish();
}

fn bench_render_pass(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_pass");
    group.sample_size(20);

    let env = RenderEnv::default();
    let plain = common::generate_markdown_content(100);
    let columns = common::generate_column_blocks(100);

    group.bench_function("no_blocks", |b| {
        let mut session = ColumnSession::new();
        b.iter(|| {
            let doc = render_markdown(&mut session, std::hint::black_box(&plain), &env);
            std::hint::black_box(doc);
        });
    });

    group.bench_function("column_blocks", |b| {
        let mut session = ColumnSession::new();
        b.iter(|| {
            let doc = render_markdown(&mut session, std::hint::black_box(&columns), &env);
            std::hint::black_box(doc.to_html());
        });
    });

    group.finish();
}

criterion_group!(benches, bench_parse_fragments, bench_render_pass);
criterion_main!(benches);
