// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use understory_dom::{Document, MemoryDocument, Selector};

fn wide_page(items: usize) -> MemoryDocument {
    let mut doc = MemoryDocument::new();
    let root = doc.element(doc.body(), "div", &[("class", "accordion-js")]);
    for i in 0..items {
        let item = format!("item-{i}");
        let row = doc.element(root, "div", &[("class", "row")]);
        doc.element(row, "button", &[("data-accordion-control", item.as_str())]);
        doc.element(row, "div", &[("data-accordion-content", item.as_str())]);
    }
    doc
}

fn bench_selectors(c: &mut Criterion) {
    c.bench_function("selector_parse", |b| {
        b.iter(|| {
            for s in ["#progress", ".accordion-js", "[data-accordion-control=item-7]", "div", "*"] {
                black_box(Selector::parse(black_box(s)).ok());
            }
        });
    });
}

fn bench_queries(c: &mut Criterion) {
    let mut group = c.benchmark_group("understory_dom");

    for &items in &[64_usize, 1_024] {
        let doc = wide_page(items);
        let root = doc
            .query_selector(".accordion-js")
            .expect("root was just built");
        let last = format!("item-{}", items - 1);

        group.bench_function(format!("query_selector_all_class(n={items})"), |b| {
            b.iter(|| black_box(doc.query_selector_all(".row").len()));
        });
        group.bench_function(format!("find_descendant_last(n={items})"), |b| {
            b.iter(|| black_box(doc.find_descendant(&root, "data-accordion-content", &last)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_selectors, bench_queries);
criterion_main!(benches);
