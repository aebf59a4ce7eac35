// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Accordion basics.
//!
//! Mount an accordion over an FAQ section, click through it and watch the
//! panels open, animate and close.
//!
//! Run:
//! - `cargo run -p understory_demos --example accordion_basics`
//! - `RUST_LOG=info cargo run -p understory_demos --example accordion_basics` for less noise

use understory_accordion::{Config, mount};
use understory_demos::{describe_faq, faq_page, init_logging};
use understory_dom::MemoryDocument;

fn main() {
    init_logging();

    let mut doc = MemoryDocument::new();
    let page = faq_page(
        &mut doc,
        &[
            ("shipping", "How long does shipping take?", "Three to five days.", 48.0),
            ("returns", "Can I return an order?", "Within thirty days.", 72.0),
            ("warranty", "Is there a warranty?", "Two years, parts and labour.", 96.0),
        ],
    );
    let widget = mount(&mut doc, ".accordion-js", &Config::default());
    println!("Mounted with {} controls wired:", widget.wired());
    println!("{}", describe_faq(&doc, &page));

    let (_, shipping, shipping_panel) = page.items[0].clone();
    let returns = page.items[1].1;

    doc.click(shipping);
    println!("\nClick shipping:");
    println!("{}", describe_faq(&doc, &page));

    doc.run_frames(2);
    println!("\nTwo frames later:");
    println!("{}", describe_faq(&doc, &page));

    doc.click(returns);
    doc.run_frames(2);
    println!("\nClick returns, two frames later:");
    println!("{}", describe_faq(&doc, &page));

    doc.end_transition(shipping_panel);
    println!("\nShipping's collapse transition ends:");
    println!("{}", describe_faq(&doc, &page));

    doc.click(returns);
    println!(
        "\nClick returns again: active item is {:?}",
        widget.active_item()
    );
}
