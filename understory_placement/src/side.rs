// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sides of a trigger a floating element can sit on.

use core::fmt;
use core::str::FromStr;

use crate::error::ParseError;

/// A concrete side of the trigger.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "kebab-case")
)]
pub enum Side {
    /// Above the trigger.
    Top,
    /// Below the trigger.
    Bottom,
    /// Left of the trigger.
    Left,
    /// Right of the trigger.
    Right,
}

impl Side {
    /// Every side.
    pub const ALL: [Self; 4] = [Self::Top, Self::Bottom, Self::Left, Self::Right];

    /// Canonical lowercase name, also used as a class token.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Bottom => "bottom",
            Self::Left => "left",
            Self::Right => "right",
        }
    }

    /// Returns `true` for [`Side::Top`] and [`Side::Bottom`].
    #[must_use]
    pub const fn is_vertical(self) -> bool {
        matches!(self, Self::Top | Self::Bottom)
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Side {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "top" => Ok(Self::Top),
            "bottom" => Ok(Self::Bottom),
            "left" => Ok(Self::Left),
            "right" => Ok(Self::Right),
            _ => Err(ParseError::new("side", s)),
        }
    }
}

/// The side a caller asks for: a concrete side, or `Auto`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "kebab-case")
)]
pub enum SidePreference {
    /// Always above.
    #[default]
    Top,
    /// Always below.
    Bottom,
    /// Always left.
    Left,
    /// Always right.
    Right,
    /// Pick the first side with room: top, bottom, right, left; else top.
    Auto,
}

impl SidePreference {
    /// The concrete side, or `None` for [`SidePreference::Auto`].
    #[must_use]
    pub const fn explicit(self) -> Option<Side> {
        match self {
            Self::Top => Some(Side::Top),
            Self::Bottom => Some(Side::Bottom),
            Self::Left => Some(Side::Left),
            Self::Right => Some(Side::Right),
            Self::Auto => None,
        }
    }

    /// Canonical lowercase name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self.explicit() {
            Some(side) => side.as_str(),
            None => "auto",
        }
    }
}

impl From<Side> for SidePreference {
    fn from(side: Side) -> Self {
        match side {
            Side::Top => Self::Top,
            Side::Bottom => Self::Bottom,
            Side::Left => Self::Left,
            Side::Right => Self::Right,
        }
    }
}

impl fmt::Display for SidePreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SidePreference {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "auto" {
            return Ok(Self::Auto);
        }
        s.parse::<Side>()
            .map(Self::from)
            .map_err(|_| ParseError::new("side preference", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip() {
        for side in Side::ALL {
            assert_eq!(side.as_str().parse::<Side>(), Ok(side));
            let pref = SidePreference::from(side);
            assert_eq!(pref.explicit(), Some(side));
            assert_eq!(pref.as_str().parse::<SidePreference>(), Ok(pref));
        }
        assert_eq!("auto".parse::<SidePreference>(), Ok(SidePreference::Auto));
        assert!("auto".parse::<Side>().is_err());
        assert!("middle".parse::<SidePreference>().is_err());
    }

    #[test]
    fn default_preference_is_top() {
        assert_eq!(SidePreference::default(), SidePreference::Top);
    }
}
