// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The per-render appearance request.

use alloc::string::String;

use crate::colors::CustomColors;
use crate::vocab::{AccessibilityMode, ColorVision, FontSize, Size, Variant};

bitflags::bitflags! {
    /// Boolean interaction and validation state of a component instance.
    ///
    /// State tokens are emitted after every other vocabulary token, in the
    /// bit order below, so they override variant, size and color tokens.
    #[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct StateFlags: u16 {
        /// Interaction is suppressed.
        const DISABLED = 1 << 0;
        /// Work is in progress.
        const LOADING = 1 << 1;
        /// Validation failed.
        const ERROR = 1 << 2;
        /// A popup or disclosure is expanded.
        const OPEN = 1 << 3;
        /// The item is the current selection.
        const SELECTED = 1 << 4;
        /// A two-state control is on.
        const CHECKED = 1 << 5;
        /// A tri-state control is mixed.
        const INDETERMINATE = 1 << 6;
        /// The control has keyboard focus.
        const FOCUSED = 1 << 7;
        /// The value can be read but not edited.
        const READONLY = 1 << 8;
    }
}

impl StateFlags {
    /// Token for each single flag, in emission order.
    pub const TOKENS: &'static [(Self, &'static str)] = &[
        (Self::DISABLED, "disabled"),
        (Self::LOADING, "loading"),
        (Self::ERROR, "error"),
        (Self::OPEN, "open"),
        (Self::SELECTED, "selected"),
        (Self::CHECKED, "checked"),
        (Self::INDETERMINATE, "indeterminate"),
        (Self::FOCUSED, "focused"),
        (Self::READONLY, "readonly"),
    ];

    /// Tokens for the set flags, in emission order.
    pub fn tokens(self) -> impl Iterator<Item = &'static str> {
        Self::TOKENS
            .iter()
            .filter(move |(flag, _)| self.contains(*flag))
            .map(|(_, token)| *token)
    }

    /// Returns `self` with `flag` set when `on` is true.
    #[must_use]
    pub fn with(mut self, flag: Self, on: bool) -> Self {
        self.set(flag, on);
        self
    }
}

/// Declarative appearance props for one render of one component.
///
/// Requests are cheap to build and carry no identity; build a fresh one per
/// render.
///
/// ```rust
/// use understory_appearance::{AccessibilityMode, AppearanceRequest, Size, Variant};
///
/// let request = AppearanceRequest::new()
///     .variant(Variant::Danger)
///     .size(Size::Lg)
///     .accessibility(AccessibilityMode::HighContrast)
///     .class("checkout");
/// assert_eq!(request.variant, Variant::Danger);
/// ```
#[derive(Clone, Debug, Default)]
pub struct AppearanceRequest {
    /// Visual role.
    pub variant: Variant,
    /// Which custom-color sub-table to read, and the color-vision modifier token.
    pub color_vision: ColorVision,
    /// Accessibility modifier.
    pub accessibility: AccessibilityMode,
    /// Spacing scale.
    pub size: Size,
    /// Type scale; no token is emitted when `None`.
    pub font_size: Option<FontSize>,
    /// Colors for [`Variant::Custom`]; ignored for every other variant.
    pub custom_colors: Option<CustomColors>,
    /// Extra class appended last.
    pub class: Option<String>,
}

impl AppearanceRequest {
    /// Creates a request with every field at its default.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the variant.
    #[must_use]
    pub fn variant(mut self, variant: Variant) -> Self {
        self.variant = variant;
        self
    }

    /// Sets the color-vision mode.
    #[must_use]
    pub fn color_vision(mut self, mode: ColorVision) -> Self {
        self.color_vision = mode;
        self
    }

    /// Sets the accessibility mode.
    #[must_use]
    pub fn accessibility(mut self, mode: AccessibilityMode) -> Self {
        self.accessibility = mode;
        self
    }

    /// Sets the size.
    #[must_use]
    pub fn size(mut self, size: Size) -> Self {
        self.size = size;
        self
    }

    /// Sets the font size.
    #[must_use]
    pub fn font_size(mut self, font_size: FontSize) -> Self {
        self.font_size = Some(font_size);
        self
    }

    /// Sets the custom color table.
    #[must_use]
    pub fn custom_colors(mut self, colors: CustomColors) -> Self {
        self.custom_colors = Some(colors);
        self
    }

    /// Sets the extra class.
    #[must_use]
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }
}
