// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Closed appearance vocabularies.
//!
//! Every enum here is a closed set with a documented default. Each one can be
//! parsed from its canonical kebab-case name, and `parse_or_default` turns an
//! unrecognized name into the default (with a warning) instead of an error.

use crate::error::UnknownValue;

/// Declares a closed vocabulary enum with its canonical names.
macro_rules! vocabulary {
    (
        $(#[$meta:meta])*
        pub enum $name:ident : $kind:literal {
            $( $(#[$vmeta:meta])* $variant:ident => $text:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
        #[cfg_attr(
            feature = "serde",
            derive(serde::Serialize, serde::Deserialize),
            serde(rename_all = "kebab-case")
        )]
        pub enum $name {
            $( $(#[$vmeta])* $variant, )+
        }

        impl $name {
            /// Every value, in declaration order.
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            /// Returns the canonical kebab-case name.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $text,)+
                }
            }

            /// Parses `name`, falling back to the default when it is not recognized.
            #[must_use]
            pub fn parse_or_default(name: &str) -> Self {
                name.parse().unwrap_or_else(|err: UnknownValue| {
                    let fallback = Self::default();
                    tracing::warn!(%err, fallback = fallback.as_str(), "falling back to default");
                    fallback
                })
            }
        }

        impl core::str::FromStr for $name {
            type Err = UnknownValue;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($text => Ok(Self::$variant),)+
                    _ => Err(UnknownValue::new($kind, s)),
                }
            }
        }

        impl core::fmt::Display for $name {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

pub(crate) use vocabulary;

vocabulary! {
    /// Semantic visual role of a component instance.
    pub enum Variant: "variant" {
        /// Main call to action.
        #[default]
        Primary => "primary",
        /// Secondary, lower-emphasis role.
        Secondary => "secondary",
        /// Positive outcome.
        Success => "success",
        /// Needs attention.
        Warning => "warning",
        /// Destructive or failed.
        Danger => "danger",
        /// Colors come from caller-supplied [`CustomColors`](crate::CustomColors).
        Custom => "custom",
    }
}

impl Variant {
    /// Class token for this variant.
    #[must_use]
    pub const fn token(self) -> &'static str {
        self.as_str()
    }

    /// Returns `true` for [`Variant::Custom`].
    #[must_use]
    pub const fn is_custom(self) -> bool {
        matches!(self, Self::Custom)
    }
}

vocabulary! {
    /// Palette adaptation for color-vision deficiencies.
    pub enum ColorVision: "color vision mode" {
        /// Typical color vision.
        #[default]
        Normal => "normal",
        /// Reduced sensitivity to red.
        Protanopia => "protanopia",
        /// Reduced sensitivity to green.
        Deuteranopia => "deuteranopia",
        /// Reduced sensitivity to blue.
        Tritanopia => "tritanopia",
    }
}

impl ColorVision {
    /// Modifier token, or `None` for [`ColorVision::Normal`].
    #[must_use]
    pub const fn token(self) -> Option<&'static str> {
        match self {
            Self::Normal => None,
            Self::Protanopia => Some("cv-protanopia"),
            Self::Deuteranopia => Some("cv-deuteranopia"),
            Self::Tritanopia => Some("cv-tritanopia"),
        }
    }
}

vocabulary! {
    /// Global accessibility modifier.
    pub enum AccessibilityMode: "accessibility mode" {
        /// No modifier.
        #[default]
        Default => "default",
        /// Enlarged type scale.
        LowVision => "low-vision",
        /// Maximized contrast.
        HighContrast => "high-contrast",
    }
}

impl AccessibilityMode {
    /// Modifier token, or `None` for [`AccessibilityMode::Default`].
    #[must_use]
    pub const fn token(self) -> Option<&'static str> {
        match self {
            Self::Default => None,
            Self::LowVision => Some("a11y-low-vision"),
            Self::HighContrast => Some("a11y-high-contrast"),
        }
    }
}

vocabulary! {
    /// Spacing scale.
    pub enum Size: "size" {
        /// Small.
        Sm => "sm",
        /// Medium.
        #[default]
        Md => "md",
        /// Large.
        Lg => "lg",
    }
}

impl Size {
    /// Class token for this size.
    #[must_use]
    pub const fn token(self) -> &'static str {
        self.as_str()
    }
}

vocabulary! {
    /// Type scale.
    pub enum FontSize: "font size" {
        /// Small.
        Sm => "sm",
        /// Medium.
        #[default]
        Md => "md",
        /// Large.
        Lg => "lg",
        /// Extra large.
        Xl => "xl",
    }
}

impl FontSize {
    /// Class token for this font size.
    #[must_use]
    pub const fn token(self) -> &'static str {
        match self {
            Self::Sm => "font-sm",
            Self::Md => "font-md",
            Self::Lg => "font-lg",
            Self::Xl => "font-xl",
        }
    }
}
