// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error types for parsing appearance inputs.

use alloc::string::{String, ToString};
use core::fmt;

/// A string did not name any value of a closed appearance vocabulary.
///
/// Returned by the `FromStr` implementations of [`Variant`](crate::Variant),
/// [`ColorVision`](crate::ColorVision) and friends. Callers that prefer the
/// documented default over an error use `parse_or_default` instead.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnknownValue {
    kind: &'static str,
    value: String,
}

impl UnknownValue {
    pub(crate) fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_string(),
        }
    }

    /// The vocabulary that was being parsed, e.g. `"variant"`.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        self.kind
    }

    /// The rejected input.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for UnknownValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown {} `{}`", self.kind, self.value)
    }
}

impl core::error::Error for UnknownValue {}

/// A CSS color string could not be parsed.
#[derive(Debug)]
pub struct ColorParseError {
    input: String,
    reason: peniko::color::ParseError,
}

impl ColorParseError {
    pub(crate) fn new(input: &str, reason: peniko::color::ParseError) -> Self {
        Self {
            input: input.to_string(),
            reason,
        }
    }

    /// The rejected input.
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }

    /// The underlying parser error.
    #[must_use]
    pub fn reason(&self) -> &peniko::color::ParseError {
        &self.reason
    }
}

impl fmt::Display for ColorParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid CSS color `{}`", self.input)
    }
}

impl core::error::Error for ColorParseError {}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::format;

    #[test]
    fn unknown_value_display() {
        let err = UnknownValue::new("variant", "loud");
        assert_eq!(format!("{err}"), "unknown variant `loud`");
        assert_eq!(err.kind(), "variant");
        assert_eq!(err.value(), "loud");
    }
}
