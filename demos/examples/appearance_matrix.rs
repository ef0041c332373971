// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Appearance matrix.
//!
//! Resolve a button across every variant and accessibility mode, then show a
//! custom-colored button under each color-vision mode. Vocabulary values are
//! read from strings the way a host config would supply them; unknown values
//! fall back to defaults with a warning.
//!
//! Run:
//! - `cargo run -p understory_demos --example appearance_matrix`
//! - `RUST_LOG=warn cargo run -p understory_demos --example appearance_matrix`

use overstory_widgets::{Button, Widget};
use understory_appearance::{
    AccessibilityMode, AppearanceRequest, ColorVision, CustomColorsBuilder, Role, Variant,
};

fn main() {
    understory_demos::init_logging();

    println!("== variants x accessibility ==");
    for variant in Variant::ALL {
        for mode in AccessibilityMode::ALL {
            let button = Button::new("Save").with_appearance(
                AppearanceRequest::new()
                    .variant(*variant)
                    .accessibility(*mode),
            );
            let resolved = button.appearance();
            println!(
                "{variant:>9} {mode:>13}  class=\"{}\" style=\"{}\"",
                resolved.class_string(),
                resolved.inline_style()
            );
        }
    }

    println!("\n== custom colors x color vision ==");
    let colors = match CustomColorsBuilder::new()
        .set_named("background", "normal", "#e11d48")
        .and_then(|b| b.set_named("background", "protanopia", "#2563eb"))
        .and_then(|b| b.set_named("background", "deuteranopia", "#7c3aed"))
        .and_then(|b| b.set_named("foreground", "normal", "white"))
    {
        Ok(builder) => builder.build(),
        Err(err) => {
            eprintln!("bad color table: {err}");
            return;
        }
    };
    for mode in ColorVision::ALL {
        let button = Button::new("Brand").with_appearance(
            AppearanceRequest::new()
                .variant(Variant::Custom)
                .color_vision(*mode)
                .custom_colors(colors.clone()),
        );
        println!("{mode:>13}  {}", button.view().to_html());
    }

    println!("\n== host strings ==");
    for (variant, mode) in [("danger", "high-contrast"), ("neon", "low-vision")] {
        let request = AppearanceRequest::new()
            .variant(Variant::parse_or_default(variant))
            .accessibility(AccessibilityMode::parse_or_default(mode));
        let button = Button::new("Go").with_appearance(request);
        println!("{variant}/{mode} -> {}", button.appearance().class_string());
    }

    let roles: Vec<&str> = Role::ALL.iter().map(|r| r.as_str()).collect();
    println!("\ncolor roles: {}", roles.join(", "));
}
