// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_appearance --heading-base-level=0

//! Understory Appearance: deterministic appearance resolution for UI components.
//!
//! Components in a themeable widget set are styled from a small tuple of
//! declarative props: a visual [`Variant`], a spacing [`Size`], an optional
//! [`FontSize`], a [`ColorVision`] mode, an [`AccessibilityMode`], some
//! boolean [`StateFlags`], optional [`CustomColors`] and an extra class. This
//! crate turns that tuple into:
//!
//! - an ordered [`TokenList`] of class tokens, where later tokens override
//!   earlier ones under the usual cascade rules, and
//! - a [`StyleOverrides`] map of literal values applied inline, above the
//!   class cascade.
//!
//! Resolution is a pure function of its inputs. The same request always
//! produces the same token order and the same override map.
//!
//! ## Token order
//!
//! 1. the component's base token,
//! 2. the variant token,
//! 3. the size token,
//! 4. the font-size token, when a font size is set,
//! 5. the color-vision modifier (`cv-*`), unless the mode is normal,
//! 6. the accessibility modifier (`a11y-*`), unless the mode is default,
//! 7. component-specific kind tokens,
//! 8. state tokens for the set flags,
//! 9. the caller's extra class.
//!
//! ## Overrides
//!
//! Only two things write overrides. [`Variant::Custom`] reads one color per
//! schema [`Role`] from the active color-vision sub-table of the request's
//! [`CustomColors`]. [`AccessibilityMode::LowVision`] forces a larger font
//! size ([`LOW_VISION_FONT_SIZE`] unless the schema names its own) onto the
//! schema's label and control font keys.
//!
//! ## Minimal example
//!
//! ```rust
//! use understory_appearance::{
//!     AccessibilityMode, AppearanceRequest, ComponentSchema, Size, StateFlags, Variant,
//! };
//!
//! const BUTTON: ComponentSchema = ComponentSchema::new("button");
//!
//! let request = AppearanceRequest::new()
//!     .variant(Variant::Danger)
//!     .size(Size::Md)
//!     .accessibility(AccessibilityMode::HighContrast);
//! let resolved = BUTTON.resolve(&request, &[], StateFlags::DISABLED);
//!
//! assert_eq!(
//!     resolved.class_string(),
//!     "button danger md a11y-high-contrast disabled"
//! );
//! assert!(resolved.overrides.is_empty());
//! ```
//!
//! ## Features
//!
//! - `std` (default): forwards to `peniko/std` and `tracing/std`.
//! - `libm`: builds Peniko with `libm` math for `no_std` targets.
//! - `serde`: derives `Serialize`/`Deserialize` for the vocabularies and
//!   [`StateFlags`], using kebab-case names.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod colors;
mod error;
mod overrides;
mod request;
mod resolve;
mod token;
mod vocab;

pub use colors::{CustomColorError, CustomColors, CustomColorsBuilder, Role, css_literal};
pub use error::{ColorParseError, UnknownValue};
pub use overrides::{StyleKey, StyleOverrides};
pub use request::{AppearanceRequest, StateFlags};
pub use resolve::{ComponentSchema, LOW_VISION_FONT_SIZE, ResolvedAppearance, resolve};
pub use token::{Token, TokenList, TokenSlot};
pub use vocab::{AccessibilityMode, ColorVision, FontSize, Size, Variant};

/// Re-export of the color type stored in [`CustomColors`].
pub use peniko::Color;
