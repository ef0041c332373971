// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Caller-supplied color tables for the [`Variant::Custom`](crate::Variant::Custom) variant.
//!
//! A [`CustomColors`] table maps each `(Role, ColorVision)` pair to a color.
//! Components pick the sub-table for the active color-vision mode with a
//! single lookup per role instead of branching on the mode.

use alloc::format;
use alloc::rc::Rc;
use alloc::string::String;
use alloc::vec::Vec;

use peniko::Color;
use peniko::color::{Rgba8, Srgb, parse_color};

use crate::error::{ColorParseError, UnknownValue};
use crate::vocab::{ColorVision, vocabulary};

vocabulary! {
    /// Semantic color role within a component.
    pub enum Role: "color role" {
        /// Surface fill.
        #[default]
        Background => "background",
        /// Text and icons.
        Foreground => "foreground",
        /// Outline.
        Border => "border",
        /// Emphasis: check marks, focus rings, active indicators.
        Accent => "accent",
        /// Fill while hovered.
        Hover => "hover",
        /// Slider and toggle rails.
        Track => "track",
        /// Slider and toggle handles.
        Thumb => "thumb",
    }
}

/// An immutable table of custom colors keyed by `(Role, ColorVision)`.
///
/// Internally, `CustomColors` wraps an `Rc`, making cloning cheap. Entries are
/// stored in a sorted vector for O(log n) lookup.
///
/// # Example
///
/// ```rust
/// use understory_appearance::{ColorVision, CustomColorsBuilder, Role, css_literal};
///
/// let colors = CustomColorsBuilder::new()
///     .set_css(Role::Background, ColorVision::Normal, "#ff0000")?
///     .set_css(Role::Background, ColorVision::Protanopia, "#0055ff")?
///     .build();
///
/// let bg = colors.get(Role::Background, ColorVision::Protanopia).unwrap();
/// assert_eq!(css_literal(bg), "#0055ff");
/// assert!(colors.get(Role::Border, ColorVision::Normal).is_none());
/// # Ok::<(), understory_appearance::ColorParseError>(())
/// ```
#[derive(Clone, Debug, Default)]
pub struct CustomColors {
    inner: Rc<ColorsData>,
}

#[derive(Debug, Default)]
struct ColorsData {
    /// Sorted by `(Role, ColorVision)` for binary search lookup.
    entries: Vec<((Role, ColorVision), Color)>,
}

impl CustomColors {
    /// Looks up the color for `role` in the `mode` sub-table.
    #[must_use]
    pub fn get(&self, role: Role, mode: ColorVision) -> Option<Color> {
        let key = (role, mode);
        self.inner
            .entries
            .binary_search_by_key(&key, |(k, _)| *k)
            .ok()
            .map(|idx| self.inner.entries[idx].1)
    }

    /// Iterates the `(role, color)` entries of the `mode` sub-table.
    pub fn sub_table(&self, mode: ColorVision) -> impl Iterator<Item = (Role, Color)> + '_ {
        self.inner
            .entries
            .iter()
            .filter(move |((_, m), _)| *m == mode)
            .map(|((role, _), color)| (*role, *color))
    }

    /// Number of entries across every sub-table.
    #[must_use]
    #[inline]
    pub fn len(&self) -> usize {
        self.inner.entries.len()
    }

    /// Returns `true` if the table is empty.
    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.inner.entries.is_empty()
    }
}

/// Builder for [`CustomColors`].
#[derive(Debug, Default)]
pub struct CustomColorsBuilder {
    entries: Vec<((Role, ColorVision), Color)>,
}

impl CustomColorsBuilder {
    /// Creates an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the color for `role` in the `mode` sub-table, replacing any previous value.
    #[must_use]
    pub fn set(mut self, role: Role, mode: ColorVision, color: Color) -> Self {
        let key = (role, mode);
        match self.entries.binary_search_by_key(&key, |(k, _)| *k) {
            Ok(idx) => self.entries[idx].1 = color,
            Err(idx) => self.entries.insert(idx, (key, color)),
        }
        self
    }

    /// Sets a color given in CSS color syntax (`#rgb`, `rgb(...)`, named colors, ...).
    ///
    /// # Errors
    ///
    /// Returns [`ColorParseError`] if `css` is not a valid CSS color.
    pub fn set_css(self, role: Role, mode: ColorVision, css: &str) -> Result<Self, ColorParseError> {
        let color = parse_color(css)
            .map_err(|reason| ColorParseError::new(css, reason))?
            .to_alpha_color::<Srgb>();
        Ok(self.set(role, mode, color))
    }

    /// Sets a color from textual role and mode names, as found in host configuration.
    ///
    /// # Errors
    ///
    /// Returns [`CustomColorError`] if any of the three inputs is not recognized.
    pub fn set_named(self, role: &str, mode: &str, css: &str) -> Result<Self, CustomColorError> {
        let role = role.parse::<Role>()?;
        let mode = mode.parse::<ColorVision>()?;
        Ok(self.set_css(role, mode, css)?)
    }

    /// Builds the table.
    #[must_use]
    pub fn build(self) -> CustomColors {
        CustomColors {
            inner: Rc::new(ColorsData {
                entries: self.entries,
            }),
        }
    }
}

/// Error from [`CustomColorsBuilder::set_named`].
#[derive(Debug)]
pub enum CustomColorError {
    /// The role or color-vision mode name was not recognized.
    Unknown(UnknownValue),
    /// The color was not valid CSS.
    Color(ColorParseError),
}

impl From<UnknownValue> for CustomColorError {
    fn from(err: UnknownValue) -> Self {
        Self::Unknown(err)
    }
}

impl From<ColorParseError> for CustomColorError {
    fn from(err: ColorParseError) -> Self {
        Self::Color(err)
    }
}

impl core::fmt::Display for CustomColorError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Unknown(err) => err.fmt(f),
            Self::Color(err) => err.fmt(f),
        }
    }
}

impl core::error::Error for CustomColorError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Self::Unknown(err) => Some(err),
            Self::Color(err) => Some(err),
        }
    }
}

/// Formats `color` as a CSS hex literal: `#rrggbb` when opaque, `#rrggbbaa` otherwise.
#[must_use]
pub fn css_literal(color: Color) -> String {
    let Rgba8 { r, g, b, a } = color.to_rgba8();
    if a == u8::MAX {
        format!("#{r:02x}{g:02x}{b:02x}")
    } else {
        format!("#{r:02x}{g:02x}{b:02x}{a:02x}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_by_role_and_mode() {
        let colors = CustomColorsBuilder::new()
            .set(Role::Background, ColorVision::Normal, Color::from_rgb8(255, 0, 0))
            .set(Role::Background, ColorVision::Tritanopia, Color::from_rgb8(0, 0, 255))
            .set(Role::Border, ColorVision::Normal, Color::from_rgb8(0, 0, 0))
            .build();

        assert_eq!(colors.len(), 3);
        let bg = colors.get(Role::Background, ColorVision::Tritanopia).unwrap();
        assert_eq!(css_literal(bg), "#0000ff");
        assert!(colors.get(Role::Border, ColorVision::Tritanopia).is_none());

        let normal: Vec<_> = colors.sub_table(ColorVision::Normal).map(|(r, _)| r).collect();
        assert_eq!(normal, [Role::Background, Role::Border]);
    }

    #[test]
    fn set_replaces_existing_entry() {
        let colors = CustomColorsBuilder::new()
            .set(Role::Accent, ColorVision::Normal, Color::from_rgb8(1, 2, 3))
            .set(Role::Accent, ColorVision::Normal, Color::from_rgb8(4, 5, 6))
            .build();
        assert_eq!(colors.len(), 1);
        let accent = colors.get(Role::Accent, ColorVision::Normal).unwrap();
        assert_eq!(css_literal(accent), "#040506");
    }

    #[test]
    fn css_literal_keeps_alpha_when_translucent() {
        assert_eq!(css_literal(Color::from_rgba8(16, 32, 48, 128)), "#10203080");
    }

    #[test]
    fn set_css_rejects_garbage() {
        let err = CustomColorsBuilder::new()
            .set_css(Role::Background, ColorVision::Normal, "not a color")
            .unwrap_err();
        assert_eq!(err.input(), "not a color");
    }

    #[test]
    fn set_named_parses_every_part() {
        let colors = CustomColorsBuilder::new()
            .set_named("border", "deuteranopia", "#123456")
            .unwrap()
            .build();
        let border = colors.get(Role::Border, ColorVision::Deuteranopia).unwrap();
        assert_eq!(css_literal(border), "#123456");

        let err = CustomColorsBuilder::new()
            .set_named("shadow", "normal", "#123456")
            .unwrap_err();
        assert!(matches!(err, CustomColorError::Unknown(_)));
    }

    #[test]
    fn clone_is_cheap() {
        let colors = CustomColorsBuilder::new()
            .set(Role::Hover, ColorVision::Normal, Color::from_rgb8(0, 0, 0))
            .build();
        let again = colors.clone();
        assert!(Rc::ptr_eq(&colors.inner, &again.inner));
    }
}
