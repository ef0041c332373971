// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use overstory_widgets::{Choice, Select, Widget};
use understory_appearance::{
    AccessibilityMode, AppearanceRequest, ColorVision, ComponentSchema, CustomColorsBuilder, Role,
    Size, StateFlags, StyleKey, Token, Variant,
};

const CARD: ComponentSchema = ComponentSchema::new("card").colors(&[
    (Role::Background, StyleKey::new("--card-bg")),
    (Role::Foreground, StyleKey::new("--card-fg")),
    (Role::Border, StyleKey::new("--card-border")),
    (Role::Accent, StyleKey::new("--card-accent")),
]);

fn requests() -> Vec<(&'static str, AppearanceRequest)> {
    let mut colors = CustomColorsBuilder::new();
    for role in Role::ALL {
        for mode in ColorVision::ALL {
            colors = colors.set(*role, *mode, understory_appearance::Color::from_rgb8(10, 20, 30));
        }
    }
    vec![
        ("default", AppearanceRequest::new()),
        (
            "modifiers",
            AppearanceRequest::new()
                .variant(Variant::Danger)
                .size(Size::Lg)
                .color_vision(ColorVision::Protanopia)
                .accessibility(AccessibilityMode::HighContrast)
                .class("checkout"),
        ),
        (
            "custom_low_vision",
            AppearanceRequest::new()
                .variant(Variant::Custom)
                .color_vision(ColorVision::Tritanopia)
                .accessibility(AccessibilityMode::LowVision)
                .custom_colors(colors.build()),
        ),
    ]
}

fn bench_resolve(c: &mut Criterion) {
    let mut group = c.benchmark_group("appearance/resolve");
    let kinds = [Token::from_static("elevated")];
    let state = StateFlags::DISABLED | StateFlags::FOCUSED;

    for (name, request) in requests() {
        group.bench_with_input(BenchmarkId::from_parameter(name), &request, |b, request| {
            b.iter(|| black_box(CARD.resolve(black_box(request), &kinds, state)));
        });
    }

    group.finish();
}

fn bench_render_select(c: &mut Criterion) {
    let mut group = c.benchmark_group("appearance/select_view");

    for len in [4usize, 32, 256] {
        let options = (0..len)
            .map(|i| Choice::new(format!("v{i}"), format!("Option {i}")))
            .collect();
        let mut select = Select::new("s", options);
        select.open();
        group.bench_with_input(BenchmarkId::new("to_html", len), &select, |b, select| {
            b.iter(|| black_box(select.view().to_html()));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_resolve, bench_render_select);
criterion_main!(benches);
