use criterion::{Criterion, criterion_group, criterion_main};
use danraku_engine::{DanrakuOptions, RuleSet, convert, convert_with_rules};
use pulldown_cmark::{Parser, html};
mod common;

fn bench_convert(c: &mut Criterion) {
    let mut group = c.benchmark_group("convert");
    group.sample_size(10);

    let content = common::generate_markdown_content(100);
    let options = DanrakuOptions::default();

    group.bench_function("danraku_standard", |b| {
        b.iter(|| std::hint::black_box(convert(std::hint::black_box(&content), &options)));
    });

    let empty = RuleSet::new();
    group.bench_function("danraku_empty_rule_set", |b| {
        b.iter(|| {
            std::hint::black_box(convert_with_rules(
                std::hint::black_box(&content),
                &empty,
                &options,
            ))
        });
    });

    group.bench_function("pulldown_cmark_baseline", |b| {
        b.iter(|| {
            let parser = Parser::new(std::hint::black_box(&content));
            let mut out = String::new();
            html::push_html(&mut out, parser);
            std::hint::black_box(out);
        });
    });

    group.finish();
}

criterion_group!(benches, bench_convert);
criterion_main!(benches);
