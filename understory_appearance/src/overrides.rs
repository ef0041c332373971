// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Inline style overrides.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

/// Name of a style property written as an inline override.
///
/// Usually a custom property (`--button-bg`) consumed by the component's
/// stylesheet, or a plain property such as [`StyleKey::FONT_SIZE`].
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StyleKey(&'static str);

impl StyleKey {
    /// The `font-size` property.
    pub const FONT_SIZE: Self = Self("font-size");

    /// Creates a key from its property name.
    #[must_use]
    #[inline]
    pub const fn new(name: &'static str) -> Self {
        Self(name)
    }

    /// The property name.
    #[must_use]
    #[inline]
    pub const fn name(self) -> &'static str {
        self.0
    }
}

impl fmt::Debug for StyleKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("StyleKey").field(&self.0).finish()
    }
}

impl fmt::Display for StyleKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// Literal style values applied inline, above the class cascade.
///
/// Entries are kept sorted by [`StyleKey`], so two override maps built from
/// the same settings compare and serialize identically regardless of the
/// order the settings were made in.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StyleOverrides {
    /// Sorted by `StyleKey` for binary search lookup.
    entries: Vec<(StyleKey, String)>,
}

impl StyleOverrides {
    /// Creates an empty override map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `key` to `value`, replacing any previous value.
    pub fn set(&mut self, key: StyleKey, value: impl Into<String>) {
        let value = value.into();
        match self.entries.binary_search_by_key(&key, |(k, _)| *k) {
            Ok(idx) => self.entries[idx].1 = value,
            Err(idx) => self.entries.insert(idx, (key, value)),
        }
    }

    /// Gets the value for `key`, if set.
    #[must_use]
    pub fn get(&self, key: StyleKey) -> Option<&str> {
        self.entries
            .binary_search_by_key(&key, |(k, _)| *k)
            .ok()
            .map(|idx| self.entries[idx].1.as_str())
    }

    /// Returns `true` if `key` is set.
    #[must_use]
    pub fn contains(&self, key: StyleKey) -> bool {
        self.get(key).is_some()
    }

    /// Number of overrides.
    #[must_use]
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if nothing is overridden.
    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates `(key, value)` pairs in key order.
    pub fn iter(&self) -> impl Iterator<Item = (StyleKey, &str)> + '_ {
        self.entries.iter().map(|(k, v)| (*k, v.as_str()))
    }

    /// Merges `other` into `self`; values from `other` win.
    pub fn extend_from(&mut self, other: &Self) {
        for (key, value) in other.iter() {
            self.set(key, value);
        }
    }

    /// Serializes as an inline `style` attribute value, e.g. `--a: 1; b: 2`.
    #[must_use]
    pub fn to_inline_style(&self) -> String {
        let mut out = String::new();
        for (idx, (key, value)) in self.iter().enumerate() {
            if idx > 0 {
                out.push_str("; ");
            }
            out.push_str(key.name());
            out.push_str(": ");
            out.push_str(value);
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BG: StyleKey = StyleKey::new("--button-bg");
    const FG: StyleKey = StyleKey::new("--button-fg");

    #[test]
    fn set_keeps_keys_sorted() {
        let mut a = StyleOverrides::new();
        a.set(FG, "#000000");
        a.set(BG, "#ffffff");

        let mut b = StyleOverrides::new();
        b.set(BG, "#ffffff");
        b.set(FG, "#000000");

        assert_eq!(a, b);
        assert_eq!(a.to_inline_style(), "--button-bg: #ffffff; --button-fg: #000000");
    }

    #[test]
    fn set_replaces() {
        let mut o = StyleOverrides::new();
        o.set(StyleKey::FONT_SIZE, "1rem");
        o.set(StyleKey::FONT_SIZE, "2rem");
        assert_eq!(o.len(), 1);
        assert_eq!(o.get(StyleKey::FONT_SIZE), Some("2rem"));
        assert!(!o.contains(BG));
    }

    #[test]
    fn extend_from_prefers_other() {
        let mut base = StyleOverrides::new();
        base.set(BG, "red");
        base.set(FG, "blue");
        let mut top = StyleOverrides::new();
        top.set(BG, "green");

        base.extend_from(&top);
        assert_eq!(base.get(BG), Some("green"));
        assert_eq!(base.get(FG), Some("blue"));
    }
}
