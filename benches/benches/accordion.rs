// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use understory_accordion::{AccordionWidget, ActiveItem, Config, mount};
use understory_dom::{ElementId, MemoryDocument};
use understory_stepper::{StepIndicator, StepperConfig};

fn accordion_page(panels: usize, animate: bool) -> (MemoryDocument, Vec<ElementId>, AccordionWidget<MemoryDocument>) {
    let mut doc = MemoryDocument::new();
    let root = doc.element(doc.body(), "div", &[("class", "accordion-js")]);
    let mut controls = Vec::with_capacity(panels);
    for i in 0..panels {
        let item = format!("item-{i}");
        controls.push(doc.element(root, "button", &[("data-accordion-control", item.as_str())]));
        let content = doc.element(root, "div", &[("data-accordion-content", item.as_str())]);
        doc.set_natural_height(content, 40.0);
    }
    let config = Config {
        animate,
        ..Config::default()
    };
    let widget = mount(&mut doc, ".accordion-js", &config);
    (doc, controls, widget)
}

fn bench_state(c: &mut Criterion) {
    c.bench_function("active_item_toggle_cycle", |b| {
        let items: Vec<String> = (0..64).map(|i| format!("item-{i}")).collect();
        b.iter(|| {
            let mut state = ActiveItem::new();
            for item in &items {
                state.toggle(item);
                state.toggle(item);
            }
            black_box(state.is_none());
        });
    });
}

fn bench_accordion(c: &mut Criterion) {
    let mut group = c.benchmark_group("understory_accordion");
    group.sample_size(50);

    for &panels in &[8_usize, 64, 512] {
        group.bench_function(format!("mount(n={panels})"), |b| {
            b.iter(|| black_box(accordion_page(panels, true)));
        });

        for animate in [false, true] {
            // Click every control in turn; each click collapses the previous panel.
            group.bench_function(format!("click_sweep(n={panels},animate={animate})"), |b| {
                b.iter_batched(
                    || accordion_page(panels, animate),
                    |(mut doc, controls, widget)| {
                        for &control in &controls {
                            doc.click(control);
                            doc.run_frames(2);
                        }
                        black_box(widget.active_item());
                    },
                    BatchSize::LargeInput,
                );
            });
        }
    }

    group.finish();
}

fn bench_stepper(c: &mut Criterion) {
    c.bench_function("stepper_walk(n=32)", |b| {
        b.iter_batched(
            || {
                let mut doc = MemoryDocument::new();
                let body = doc.body();
                doc.element(body, "div", &[("id", "progress")]);
                for _ in 0..32 {
                    doc.element(body, "div", &[("class", "circle")]);
                }
                let prev = doc.element(body, "button", &[("id", "btnPrev")]);
                let next = doc.element(body, "button", &[("id", "btnNext")]);
                let stepper = StepIndicator::mount(&mut doc, &StepperConfig::default())
                    .expect("stepper markup is complete");
                (doc, prev, next, stepper)
            },
            |(mut doc, prev, next, stepper)| {
                for _ in 0..32 {
                    doc.click(next);
                }
                for _ in 0..32 {
                    doc.click(prev);
                }
                black_box(stepper.borrow().progress());
            },
            BatchSize::LargeInput,
        );
    });
}

criterion_group!(benches, bench_state, bench_accordion, bench_stepper);
criterion_main!(benches);
