// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Class tokens and the ordered token list.

use alloc::borrow::Cow;
use alloc::string::String;
use core::fmt;

use smallvec::SmallVec;

/// An opaque class identifier contributing to an element's visual cascade.
///
/// Built-in vocabulary tokens borrow `'static` strings; caller-supplied
/// classes are owned.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Token(Cow<'static, str>);

impl Token {
    /// Creates a token from a static string.
    #[must_use]
    #[inline]
    pub const fn from_static(name: &'static str) -> Self {
        Self(Cow::Borrowed(name))
    }

    /// Returns the token text.
    #[must_use]
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&'static str> for Token {
    fn from(name: &'static str) -> Self {
        Self::from_static(name)
    }
}

impl From<String> for Token {
    fn from(name: String) -> Self {
        Self(Cow::Owned(name))
    }
}

impl AsRef<str> for Token {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl PartialEq<str> for Token {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for Token {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where a token sits in the resolution order.
///
/// Slots are declared in cascade order: a token in a later slot overrides
/// tokens in earlier slots, so the derived `Ord` is the precedence order.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TokenSlot {
    /// The component's base token.
    Base,
    /// [`Variant`](crate::Variant) token.
    Variant,
    /// [`Size`](crate::Size) token.
    Size,
    /// [`FontSize`](crate::FontSize) token.
    FontSize,
    /// [`ColorVision`](crate::ColorVision) modifier.
    ColorVision,
    /// [`AccessibilityMode`](crate::AccessibilityMode) modifier.
    Accessibility,
    /// Component-specific type tokens (per-direction, per-status, ...).
    Kind,
    /// [`StateFlags`](crate::StateFlags) tokens.
    State,
    /// The caller-supplied extra class.
    Extra,
}

/// An ordered list of class tokens, each tagged with the slot that produced it.
///
/// Pushes must arrive in non-decreasing slot order; the resolver guarantees
/// this and it is checked in debug builds.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TokenList {
    entries: SmallVec<[(TokenSlot, Token); 12]>,
}

impl TokenList {
    /// Creates an empty list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `token` in `slot`.
    pub fn push(&mut self, slot: TokenSlot, token: impl Into<Token>) {
        debug_assert!(
            self.entries.last().is_none_or(|(last, _)| *last <= slot),
            "tokens must be pushed in slot order"
        );
        self.entries.push((slot, token.into()));
    }

    /// Number of tokens.
    #[must_use]
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if there are no tokens.
    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates tokens in cascade order.
    pub fn iter(&self) -> impl Iterator<Item = &Token> + '_ {
        self.entries.iter().map(|(_, token)| token)
    }

    /// Iterates `(slot, token)` pairs in cascade order.
    pub fn iter_slotted(&self) -> impl Iterator<Item = (TokenSlot, &Token)> + '_ {
        self.entries.iter().map(|(slot, token)| (*slot, token))
    }

    /// Tokens produced by `slot`, in order.
    pub fn in_slot(&self, slot: TokenSlot) -> impl Iterator<Item = &Token> + '_ {
        self.iter_slotted()
            .filter(move |(s, _)| *s == slot)
            .map(|(_, token)| token)
    }

    /// Index of the first token equal to `name`.
    #[must_use]
    pub fn position(&self, name: &str) -> Option<usize> {
        self.iter().position(|token| token == name)
    }

    /// Returns `true` if any token equals `name`.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    /// Joins the tokens with single spaces, as a `class` attribute value.
    #[must_use]
    pub fn class_string(&self) -> String {
        let mut out = String::new();
        for (idx, token) in self.iter().enumerate() {
            if idx > 0 {
                out.push(' ');
            }
            out.push_str(token.as_str());
        }
        out
    }
}

impl fmt::Display for TokenList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, token) in self.iter().enumerate() {
            if idx > 0 {
                f.write_str(" ")?;
            }
            f.write_str(token.as_str())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;
    use alloc::vec::Vec;

    #[test]
    fn slots_are_in_cascade_order() {
        assert!(TokenSlot::Base < TokenSlot::Variant);
        assert!(TokenSlot::Accessibility < TokenSlot::Kind);
        assert!(TokenSlot::State < TokenSlot::Extra);
    }

    #[test]
    fn class_string_joins_with_spaces() {
        let mut list = TokenList::new();
        assert_eq!(list.class_string(), "");

        list.push(TokenSlot::Base, "button");
        list.push(TokenSlot::Variant, "danger");
        list.push(TokenSlot::Extra, "my-class".to_string());

        assert_eq!(list.class_string(), "button danger my-class");
        assert_eq!(list.to_string(), list.class_string());
        assert_eq!(list.position("danger"), Some(1));
        assert!(!list.contains("primary"));
    }

    #[test]
    fn in_slot_filters() {
        let mut list = TokenList::new();
        list.push(TokenSlot::Base, "alert");
        list.push(TokenSlot::State, "disabled");
        list.push(TokenSlot::State, "open");

        let states: Vec<_> = list.in_slot(TokenSlot::State).map(Token::as_str).collect();
        assert_eq!(states, ["disabled", "open"]);
    }

    #[test]
    fn owned_and_static_tokens_compare_equal() {
        assert_eq!(Token::from("md"), Token::from("md".to_string()));
    }
}
