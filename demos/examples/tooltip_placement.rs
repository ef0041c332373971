// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tooltip placement and timing.
//!
//! Load a tooltip configuration from JSON, then drive a tooltip with a
//! simulated clock: a hover that leaves too early, a hover that opens, a
//! scroll that flips the side, and a leave that closes.
//!
//! Run:
//! - `cargo run -p understory_demos --example tooltip_placement`

use kurbo::{Rect, Size};
use overstory_widgets::{Element, Tooltip, Widget};
use understory_placement::{Measured, Reflow, TooltipConfig, TooltipInput};

const CONFIG: &str = r#"{ "side": "auto", "delay": 300, "hide-delay": 150, "offset": 6.0 }"#;

fn main() {
    understory_demos::init_logging();

    let config: TooltipConfig = match serde_json::from_str(CONFIG) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("bad config: {err}");
            return;
        }
    };
    println!("config: {config:?}");

    let trigger = Element::new("button").text("Export");
    let mut tooltip = Tooltip::new("export-tip", "Download as CSV", trigger).with_config(config);

    let viewport = Size::new(1024.0, 768.0);
    let tip_size = Size::new(180.0, 36.0);
    let mut geometry = Measured {
        trigger: Rect::new(400.0, 300.0, 480.0, 332.0),
        tooltip: tip_size,
        viewport,
    };

    let script = [
        (0, Some(TooltipInput::PointerEnter)),
        (120, Some(TooltipInput::PointerLeave)),
        (500, None),
        (1_000, Some(TooltipInput::PointerEnter)),
        (1_300, None),
    ];
    for (now, input) in script {
        let event = match input {
            Some(input) => tooltip.handle(input, now, &geometry),
            None => tooltip.tick(now, &geometry),
        };
        println!(
            "t={now:>5} input={input:?} event={event:?} phase={:?} deadline={:?}",
            tooltip.controller().phase(),
            tooltip.deadline()
        );
    }
    println!("open at {:?}", tooltip.placement());
    println!("{}", tooltip.view().to_html());

    // Scroll the trigger to the top edge; there is no room above any more.
    geometry.trigger = Rect::new(400.0, 4.0, 480.0, 36.0);
    let moved = tooltip.on_viewport_change(Reflow::Scroll, &geometry);
    println!("after scroll: {moved:?}");
    println!("classes: {}", tooltip.appearance().class_string());

    tooltip.handle(TooltipInput::PointerLeave, 2_000, &geometry);
    let closed = tooltip.tick(2_150, &geometry);
    println!("t= 2150 event={closed:?} visible={}", tooltip.is_visible());
    println!("{}", tooltip.view().to_html());
}
