// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Property tests for `understory_appearance` resolution.
//!
//! These quantify over every vocabulary value, state combination and extra
//! class to check determinism, state-token precedence and the isolation of
//! custom colors to the custom variant.

use proptest::prelude::*;
use proptest::sample::select;

use understory_appearance::{
    AccessibilityMode, AppearanceRequest, ColorVision, ComponentSchema, CustomColors,
    CustomColorsBuilder, FontSize, Role, Size, StateFlags, StyleKey, Token, TokenSlot, Variant,
    css_literal,
};

const BG: StyleKey = StyleKey::new("--card-bg");
const FG: StyleKey = StyleKey::new("--card-fg");
const BORDER: StyleKey = StyleKey::new("--card-border");
const ACCENT: StyleKey = StyleKey::new("--card-accent");

const CARD: ComponentSchema = ComponentSchema::new("card").colors(&[
    (Role::Background, BG),
    (Role::Foreground, FG),
    (Role::Border, BORDER),
    (Role::Accent, ACCENT),
]);

fn palette() -> CustomColors {
    let mut builder = CustomColorsBuilder::new();
    for (i, mode) in ColorVision::ALL.iter().enumerate() {
        let shade = u8::try_from(i * 40).unwrap();
        builder = builder
            .set(Role::Background, *mode, understory_appearance::Color::from_rgb8(shade, 0, 0))
            .set(Role::Foreground, *mode, understory_appearance::Color::from_rgb8(0, shade, 0))
            .set(Role::Border, *mode, understory_appearance::Color::from_rgb8(0, 0, shade));
    }
    builder.build()
}

fn request_strategy() -> impl Strategy<Value = (AppearanceRequest, StateFlags)> {
    (
        select(Variant::ALL),
        select(ColorVision::ALL),
        select(AccessibilityMode::ALL),
        select(Size::ALL),
        proptest::option::of(select(FontSize::ALL)),
        any::<bool>(),
        proptest::option::of("[a-z]{1,8}"),
        any::<u16>(),
    )
        .prop_map(
            |(variant, cv, a11y, size, font, with_colors, class, bits)| {
                let mut request = AppearanceRequest::new()
                    .variant(variant)
                    .color_vision(cv)
                    .accessibility(a11y)
                    .size(size);
                request.font_size = font;
                request.class = class;
                if with_colors {
                    request.custom_colors = Some(palette());
                }
                (request, StateFlags::from_bits_truncate(bits))
            },
        )
}

proptest! {
    #[test]
    fn resolution_is_deterministic((request, state) in request_strategy()) {
        let kinds = [Token::from("kind-a")];
        let a = CARD.resolve(&request, &kinds, state);
        let b = CARD.resolve(&request, &kinds, state);
        prop_assert_eq!(a.class_string(), b.class_string());
        prop_assert_eq!(a.inline_style(), b.inline_style());
        prop_assert_eq!(a, b);
    }

    #[test]
    fn state_tokens_follow_every_appearance_token((request, state) in request_strategy()) {
        let resolved = CARD.resolve(&request, &[Token::from("kind-a")], state);
        let slots: Vec<TokenSlot> = resolved.tokens.iter_slotted().map(|(s, _)| s).collect();
        prop_assert!(slots.windows(2).all(|w| w[0] <= w[1]));

        let last_non_state = resolved
            .tokens
            .iter_slotted()
            .enumerate()
            .filter(|(_, (slot, _))| *slot < TokenSlot::State)
            .map(|(i, _)| i)
            .max()
            .unwrap();
        for (i, (slot, _)) in resolved.tokens.iter_slotted().enumerate() {
            if slot == TokenSlot::State {
                prop_assert!(i > last_non_state);
            }
        }
        prop_assert_eq!(
            resolved.tokens.in_slot(TokenSlot::State).count(),
            state.tokens().count()
        );
    }

    #[test]
    fn custom_colors_only_apply_to_custom_variant((request, state) in request_strategy()) {
        let resolved = CARD.resolve(&request, &[], state);
        let color_keys = [BG, FG, BORDER, ACCENT];
        let has_color_override = color_keys.iter().any(|k| resolved.overrides.contains(*k));
        if request.variant != Variant::Custom {
            prop_assert!(!has_color_override);
        }
        if request.variant != Variant::Custom
            && request.accessibility != AccessibilityMode::LowVision
        {
            prop_assert!(resolved.overrides.is_empty());
        }
    }

    #[test]
    fn extra_class_is_always_last(class in "[a-z]{1,8}", bits in any::<u16>()) {
        let request = AppearanceRequest::new().class(class.clone());
        let resolved = CARD.resolve(&request, &[], StateFlags::from_bits_truncate(bits));
        prop_assert_eq!(resolved.tokens.iter().last().map(Token::as_str), Some(class.as_str()));
    }
}

#[test]
fn normal_mode_reads_the_default_sub_table() {
    let colors = palette();
    let request = AppearanceRequest::new()
        .variant(Variant::Custom)
        .custom_colors(colors.clone());
    let resolved = CARD.resolve(&request, &[], StateFlags::empty());

    let expected: Vec<(StyleKey, String)> = CARD
        .color_roles()
        .iter()
        .filter_map(|(role, key)| {
            colors
                .get(*role, ColorVision::Normal)
                .map(|c| (*key, css_literal(c)))
        })
        .collect();
    let actual: Vec<(StyleKey, String)> = resolved
        .overrides
        .iter()
        .map(|(k, v)| (k, v.to_string()))
        .collect();

    let mut expected_sorted = expected;
    expected_sorted.sort();
    assert_eq!(actual, expected_sorted);
    // Accent has no entry in any sub-table, so it is omitted.
    assert!(!resolved.overrides.contains(ACCENT));
}

#[test]
fn danger_high_contrast_disabled_scenario() {
    const BUTTON: ComponentSchema = ComponentSchema::new("button");
    let request = AppearanceRequest::new()
        .variant(Variant::Danger)
        .size(Size::Md)
        .accessibility(AccessibilityMode::HighContrast);
    let resolved = BUTTON.resolve(&request, &[], StateFlags::DISABLED);

    let tokens: Vec<&str> = resolved.tokens.iter().map(Token::as_str).collect();
    assert!(tokens.ends_with(&["danger", "md", "a11y-high-contrast", "disabled"]));
    assert!(resolved.overrides.is_empty());
}
