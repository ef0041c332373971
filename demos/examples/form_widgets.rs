// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A small form built from the widget catalog.
//!
//! Each interaction returns a typed event; the host (this `main`) routes it
//! the way an application would route `on_change` callbacks.
//!
//! Run:
//! - `cargo run -p understory_demos --example form_widgets`

use overstory_widgets::{
    Alert, AlertRole, Breadcrumb, Button, ButtonType, Checkbox, Choice, Crumb, Input, InputKind,
    Orientation, Pagination, Radiogroup, Select, Slider, Speed, Spinner, SpinnerStyle, Textarea,
    Toggle, Widget,
};
use understory_appearance::{AccessibilityMode, AppearanceRequest, Size, Variant};

fn main() {
    understory_demos::init_logging();

    let large = AppearanceRequest::new()
        .size(Size::Lg)
        .accessibility(AccessibilityMode::LowVision);

    let mut crumbs = Breadcrumb::new(vec![
        Crumb::link("Settings", "/settings"),
        Crumb::link("Account", "/settings/account"),
        Crumb::link("Security", "/settings/account/security"),
        Crumb::new("Passkeys"),
    ])
    .home("Home")
    .max_items(3);
    println!("{:?}", crumbs.activate(0));
    println!("{}\n", crumbs.view().to_html());

    let mut email = Input::new("email")
        .label("Email")
        .kind(InputKind::Email)
        .required(true)
        .with_appearance(large.clone());
    println!("{:?}", email.focus());
    println!("{:?}", email.set_value("ada@example.com"));
    println!("{:?}", email.blur());

    let mut password = Input::new("password")
        .label("Password")
        .kind(InputKind::Password)
        .required(true);
    println!("{:?}", password.toggle_reveal());

    let mut plan = Select::new(
        "plan",
        vec![
            Choice::new("free", "Free"),
            Choice::new("team", "Team"),
            Choice::new("legacy", "Legacy").disabled(true),
            Choice::new("enterprise", "Enterprise"),
        ],
    )
    .label("Plan");
    println!("{:?}", plan.toggle_open());
    plan.highlight_next();
    plan.highlight_next();
    println!("{:?}", plan.commit_highlighted());

    let mut contact = Radiogroup::new(
        "contact",
        vec![Choice::new("email", "Email"), Choice::new("phone", "Phone")],
    )
    .orientation(Orientation::Horizontal)
    .label("Contact me by")
    .description("We never share your details.");
    println!("{:?}", contact.select_next());
    println!("{:?}", contact.select_next());

    let mut volume = Slider::new("volume", 0.0, 100.0).step(5.0).label("Volume");
    println!("{:?}", volume.set_value(62.0));
    println!("{:?}", volume.page_down());

    let mut bio = Textarea::new("bio").label("Bio").max_length(24);
    println!("{:?}", bio.set_value("Writes compilers for fun and profit."));

    let mut terms = Checkbox::new("terms", "Accept the terms").indeterminate(true);
    println!("{:?}", terms.toggle());

    let mut notify = Toggle::new("notify", "Notifications");
    println!("{:?}", notify.toggle());

    let submit = Button::new("Save")
        .kind(ButtonType::Submit)
        .with_appearance(AppearanceRequest::new().variant(Variant::Success));
    println!("{:?}", submit.press());

    let mut saved = Alert::new("Profile saved.")
        .title("Done")
        .role(AlertRole::Status)
        .dismissible(true)
        .with_appearance(AppearanceRequest::new().variant(Variant::Success));

    let mut pages = Pagination::new(20).current(10);
    println!("{:?}", pages.items());
    println!("{:?}", pages.next());

    println!();
    for html in [
        email.view().to_html(),
        password.view().to_html(),
        plan.view().to_html(),
        contact.view().to_html(),
        volume.view().to_html(),
        bio.view().to_html(),
        terms.view().to_html(),
        notify.view().to_html(),
        submit.view().to_html(),
        saved.view().to_html(),
        Spinner::new("Saving\u{2026}")
            .style(SpinnerStyle::Dots)
            .speed(Speed::Slow)
            .caption("Saving")
            .view()
            .to_html(),
        pages.view().to_html(),
    ] {
        println!("{html}\n");
    }

    println!("{:?}", saved.dismiss());
    println!("after dismiss: {:?}", saved.view().to_html());
}
