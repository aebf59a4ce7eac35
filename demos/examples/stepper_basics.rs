// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Step progress basics.
//!
//! Walk a four-step indicator forward past the end and back again, printing
//! the bar width and button state after each click.
//!
//! Run:
//! - `cargo run -p understory_demos --example stepper_basics`

use understory_demos::{init_logging, stepper_page};
use understory_dom::MemoryDocument;
use understory_stepper::{StepIndicator, StepperConfig};

fn main() {
    init_logging();

    let mut doc = MemoryDocument::new();
    let page = stepper_page(&mut doc, 4);
    let stepper = match StepIndicator::mount(&mut doc, &StepperConfig::default()) {
        Ok(stepper) => stepper,
        Err(err) => {
            eprintln!("cannot mount: {err}");
            return;
        }
    };

    let report = |doc: &MemoryDocument, label: &str| {
        let reached = page
            .steps
            .iter()
            .map(|s| if doc.attr(*s, "class") == Some("circle active") { '●' } else { '○' })
            .collect::<String>();
        let button = |b| if doc.attr(b, "disabled").is_some() { "off" } else { "on" };
        println!(
            "{label:<6} {reached}  width={:<18} prev={:<3} next={}",
            doc.style(page.bar, "width").unwrap_or("-"),
            button(page.prev),
            button(page.next),
        );
    };

    report(&doc, "mount");
    for _ in 0..4 {
        doc.click(page.next);
        report(&doc, "next");
    }
    for _ in 0..4 {
        doc.click(page.prev);
        report(&doc, "prev");
    }
    println!("Final step: {}", stepper.borrow().progress().current());
}
