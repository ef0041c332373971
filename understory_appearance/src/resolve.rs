// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Resolution of an [`AppearanceRequest`] into tokens and overrides.

use crate::colors::{Role, css_literal};
use crate::overrides::{StyleKey, StyleOverrides};
use crate::request::{AppearanceRequest, StateFlags};
use crate::token::{Token, TokenList, TokenSlot};
use crate::vocab::AccessibilityMode;

/// Default font size forced by [`AccessibilityMode::LowVision`].
pub const LOW_VISION_FONT_SIZE: &str = "1.25rem";

/// A component's appearance vocabulary.
///
/// Each component declares one of these as a `const`: its base token, which
/// custom-color roles it exposes (and the style key each role writes), and
/// which style keys receive the enlarged low-vision font size, and how large
/// that is.
///
/// ```rust
/// use understory_appearance::{ComponentSchema, Role, StyleKey};
///
/// const BADGE: ComponentSchema = ComponentSchema::new("badge")
///     .colors(&[
///         (Role::Background, StyleKey::new("--badge-bg")),
///         (Role::Foreground, StyleKey::new("--badge-fg")),
///     ]);
/// assert_eq!(BADGE.base(), "badge");
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ComponentSchema {
    base: &'static str,
    colors: &'static [(Role, StyleKey)],
    low_vision: &'static [StyleKey],
    low_vision_size: &'static str,
}

impl ComponentSchema {
    /// Schema with only a base token; low vision writes [`StyleKey::FONT_SIZE`].
    #[must_use]
    pub const fn new(base: &'static str) -> Self {
        Self {
            base,
            colors: &[],
            low_vision: &[StyleKey::FONT_SIZE],
            low_vision_size: LOW_VISION_FONT_SIZE,
        }
    }

    /// Sets the custom-color roles and the style key each one writes.
    #[must_use]
    pub const fn colors(mut self, colors: &'static [(Role, StyleKey)]) -> Self {
        self.colors = colors;
        self
    }

    /// Sets the style keys that receive the low-vision font size.
    #[must_use]
    pub const fn low_vision(mut self, keys: &'static [StyleKey]) -> Self {
        self.low_vision = keys;
        self
    }

    /// Sets the low-vision font size, a CSS length.
    #[must_use]
    pub const fn low_vision_size(mut self, size: &'static str) -> Self {
        self.low_vision_size = size;
        self
    }

    /// The base token.
    #[must_use]
    pub const fn base(&self) -> &'static str {
        self.base
    }

    /// The custom-color roles.
    #[must_use]
    pub const fn color_roles(&self) -> &'static [(Role, StyleKey)] {
        self.colors
    }

    /// The low-vision font keys.
    #[must_use]
    pub const fn low_vision_keys(&self) -> &'static [StyleKey] {
        self.low_vision
    }

    /// Font size written in low-vision mode.
    #[must_use]
    pub const fn low_vision_font_size(&self) -> &'static str {
        self.low_vision_size
    }

    /// Resolves `request` against this schema.
    ///
    /// `kinds` are the component-specific type tokens (per-direction,
    /// per-status, ...), emitted in the order given.
    #[must_use]
    pub fn resolve(
        &self,
        request: &AppearanceRequest,
        kinds: &[Token],
        state: StateFlags,
    ) -> ResolvedAppearance {
        resolve(self, request, kinds, state)
    }
}

/// The output of resolution: ordered class tokens plus inline overrides.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ResolvedAppearance {
    /// Class tokens in cascade order; later tokens win.
    pub tokens: TokenList,
    /// Inline overrides, applied above the class cascade.
    pub overrides: StyleOverrides,
}

impl ResolvedAppearance {
    /// The `class` attribute value.
    #[must_use]
    pub fn class_string(&self) -> alloc::string::String {
        self.tokens.class_string()
    }

    /// The `style` attribute value.
    #[must_use]
    pub fn inline_style(&self) -> alloc::string::String {
        self.overrides.to_inline_style()
    }
}

/// Resolves `request` against `schema`.
///
/// Token order is fixed: base, variant, size, font size, color-vision
/// modifier, accessibility modifier, `kinds`, state tokens, extra class.
///
/// Overrides hold one entry per schema color role when the variant is
/// [`Variant::Custom`](crate::Variant::Custom) and the request carries a table with an entry
/// for that role in the active color-vision sub-table. Low-vision mode then
/// writes the schema's low-vision font size to each of its low-vision keys.
#[must_use]
pub fn resolve(
    schema: &ComponentSchema,
    request: &AppearanceRequest,
    kinds: &[Token],
    state: StateFlags,
) -> ResolvedAppearance {
    let mut tokens = TokenList::new();
    tokens.push(TokenSlot::Base, schema.base);
    tokens.push(TokenSlot::Variant, request.variant.token());
    tokens.push(TokenSlot::Size, request.size.token());
    if let Some(font_size) = request.font_size {
        tokens.push(TokenSlot::FontSize, font_size.token());
    }
    if let Some(token) = request.color_vision.token() {
        tokens.push(TokenSlot::ColorVision, token);
    }
    if let Some(token) = request.accessibility.token() {
        tokens.push(TokenSlot::Accessibility, token);
    }
    for kind in kinds {
        tokens.push(TokenSlot::Kind, kind.clone());
    }
    for token in state.tokens() {
        tokens.push(TokenSlot::State, token);
    }
    if let Some(class) = request.class.as_deref() {
        let class = class.trim();
        if !class.is_empty() {
            tokens.push(TokenSlot::Extra, Token::from(alloc::string::String::from(class)));
        }
    }

    let mut overrides = StyleOverrides::new();
    if request.variant.is_custom()
        && let Some(colors) = &request.custom_colors
    {
        for (role, key) in schema.colors {
            if let Some(color) = colors.get(*role, request.color_vision) {
                overrides.set(*key, css_literal(color));
            }
        }
    }
    if request.accessibility == AccessibilityMode::LowVision {
        for key in schema.low_vision {
            overrides.set(*key, schema.low_vision_size);
        }
    }

    tracing::trace!(
        base = schema.base,
        tokens = tokens.len(),
        overrides = overrides.len(),
        "resolved appearance"
    );
    ResolvedAppearance { tokens, overrides }
}
