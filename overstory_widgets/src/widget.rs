// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use understory_appearance::{
    AppearanceRequest, ComponentSchema, ResolvedAppearance, StateFlags, Token,
};

use crate::node::Node;

/// A component that resolves its appearance and renders a [`Node`] tree.
///
/// Implementors supply their schema, the caller's request, and whatever kind
/// tokens and state flags their props imply; [`Widget::appearance`] does the
/// rest.
pub trait Widget {
    /// The component's appearance vocabulary.
    const SCHEMA: ComponentSchema;

    /// The caller's appearance props.
    fn request(&self) -> &AppearanceRequest;

    /// Component-specific kind tokens.
    fn kinds(&self) -> Vec<Token> {
        Vec::new()
    }

    /// Current state flags.
    fn state(&self) -> StateFlags {
        StateFlags::empty()
    }

    /// Resolves the root element's classes and overrides.
    fn appearance(&self) -> ResolvedAppearance {
        Self::SCHEMA.resolve(self.request(), &self.kinds(), self.state())
    }

    /// Renders the component.
    fn view(&self) -> Node;
}

/// Layout axis for sliders and radio groups.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "kebab-case")
)]
pub enum Orientation {
    /// Left to right.
    #[default]
    Horizontal,
    /// Top to bottom.
    Vertical,
}

impl Orientation {
    /// Kind token and `aria-orientation` value.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Horizontal => "horizontal",
            Self::Vertical => "vertical",
        }
    }
}

/// Index of the next enabled entry after `from`, wrapping, or `None` if none is enabled.
///
/// Starting from `None` yields the first enabled entry (or the last, backwards).
pub(crate) fn step_enabled(
    len: usize,
    from: Option<usize>,
    forward: bool,
    enabled: impl Fn(usize) -> bool,
) -> Option<usize> {
    if len == 0 {
        return None;
    }
    let start = match (from, forward) {
        (Some(i), true) => i + 1,
        (Some(i), false) => i + len - 1,
        (None, true) => 0,
        (None, false) => len - 1,
    };
    (0..len)
        .map(|k| {
            if forward {
                (start + k) % len
            } else {
                (start + len - k) % len
            }
        })
        .find(|&i| enabled(i))
}
