// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Percent counter basics.
//!
//! Start the beer loader's fill animation and advance the virtual clock,
//! printing the label as it counts to 100%.
//!
//! Run:
//! - `cargo run -p understory_demos --example counter_basics`

use understory_counter::{CounterConfig, CounterWidget};
use understory_demos::{init_logging, loader_page};
use understory_dom::{Document, MemoryDocument};

fn main() {
    init_logging();

    let mut doc = MemoryDocument::new();
    let (label, glass) = loader_page(&mut doc, "0");
    let config = CounterConfig::default();
    let widget = match CounterWidget::mount(&mut doc, &config) {
        Ok(widget) => widget,
        Err(err) => {
            eprintln!("cannot mount: {err}");
            return;
        }
    };

    doc.start_animation(glass);
    while widget.is_running() {
        doc.advance(500);
        println!("t={:>5}ms  {}", doc.now_ms(), doc.text_content(&label));
    }

    // The glass refills: a second animation start with the label at 100%.
    doc.start_animation(glass);
    println!("restart: {} (running: {})", doc.text_content(&label), widget.is_running());
}
