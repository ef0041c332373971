// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Busy indicator.

use understory_appearance::{AppearanceRequest, ComponentSchema, Role, StyleKey, Token};

use crate::node::{Element, Node};
use crate::widget::Widget;

/// The animation drawn by a [`Spinner`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "kebab-case")
)]
pub enum SpinnerStyle {
    /// A rotating ring.
    #[default]
    Circular,
    /// Three pulsing dots.
    Dots,
    /// Four rising bars.
    Bars,
    /// A two-by-two grid of squares.
    Grid,
    /// Five bars in a travelling wave.
    Wave,
}

impl SpinnerStyle {
    /// Kind token.
    #[must_use]
    pub const fn token(self) -> &'static str {
        match self {
            Self::Circular => "style-circular",
            Self::Dots => "style-dots",
            Self::Bars => "style-bars",
            Self::Grid => "style-grid",
            Self::Wave => "style-wave",
        }
    }

    /// Class and count of the animated pieces.
    const fn pieces(self) -> (&'static str, usize) {
        match self {
            Self::Circular => ("spinner-ring", 1),
            Self::Dots => ("spinner-dot", 3),
            Self::Bars => ("spinner-bar", 4),
            Self::Grid => ("spinner-square", 4),
            Self::Wave => ("spinner-wave", 5),
        }
    }
}

/// Animation speed of a [`Spinner`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "kebab-case")
)]
pub enum Speed {
    /// Slower than normal.
    Slow,
    /// The default pace.
    #[default]
    Normal,
    /// Faster than normal.
    Fast,
}

impl Speed {
    /// Kind token.
    #[must_use]
    pub const fn token(self) -> &'static str {
        match self {
            Self::Slow => "speed-slow",
            Self::Normal => "speed-normal",
            Self::Fast => "speed-fast",
        }
    }
}

/// An indeterminate progress indicator with a screen-reader label.
#[derive(Clone, Debug)]
pub struct Spinner {
    /// Announced label.
    pub label: String,
    /// Visible caption, hidden from assistive technology.
    pub caption: Option<String>,
    /// Animation.
    pub style: SpinnerStyle,
    /// Animation speed.
    pub speed: Speed,
    /// Renders nothing when `false`.
    pub show: bool,
    /// Appearance props.
    pub appearance: AppearanceRequest,
}

impl Default for Spinner {
    fn default() -> Self {
        Self {
            label: String::from("Loading\u{2026}"),
            caption: None,
            style: SpinnerStyle::default(),
            speed: Speed::default(),
            show: true,
            appearance: AppearanceRequest::default(),
        }
    }
}

impl Spinner {
    /// A spinner announcing `label`.
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            ..Self::default()
        }
    }

    /// Sets the visible caption.
    #[must_use]
    pub fn caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = Some(caption.into());
        self
    }

    /// Sets the animation.
    #[must_use]
    pub fn style(mut self, style: SpinnerStyle) -> Self {
        self.style = style;
        self
    }

    /// Sets the animation speed.
    #[must_use]
    pub fn speed(mut self, speed: Speed) -> Self {
        self.speed = speed;
        self
    }

    /// Sets whether the spinner is rendered.
    #[must_use]
    pub fn show(mut self, show: bool) -> Self {
        self.show = show;
        self
    }

    /// Sets the appearance props.
    #[must_use]
    pub fn with_appearance(mut self, appearance: AppearanceRequest) -> Self {
        self.appearance = appearance;
        self
    }
}

impl Widget for Spinner {
    const SCHEMA: ComponentSchema = ComponentSchema::new("spinner").colors(&[
        (Role::Track, StyleKey::new("--spinner-track")),
        (Role::Accent, StyleKey::new("--spinner-arc")),
    ]);

    fn request(&self) -> &AppearanceRequest {
        &self.appearance
    }

    fn kinds(&self) -> Vec<Token> {
        vec![
            Token::from_static(self.style.token()),
            Token::from_static(self.speed.token()),
        ]
    }

    fn view(&self) -> Node {
        if !self.show {
            return Node::empty();
        }
        let (piece, count) = self.style.pieces();
        let caption = self.caption.as_ref().map(|text| {
            Element::new("span")
                .class("spinner-caption")
                .attr("aria-hidden", "true")
                .text(text.clone())
        });
        Element::new("div")
            .appearance(self.appearance())
            .attr("role", "status")
            .attr("aria-label", self.label.clone())
            .attr("aria-live", "polite")
            .child(
                Element::new("span")
                    .class("spinner-graphic")
                    .attr("aria-hidden", "true")
                    .children((0..count).map(|_| Element::new("span").class(piece).into())),
            )
            .child_opt(caption)
            .child(Element::new("span").class("visually-hidden").text(self.label.clone()))
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use understory_appearance::Size;

    #[test]
    fn status_with_hidden_label() {
        let spinner = Spinner::default()
            .with_appearance(AppearanceRequest::new().size(Size::Lg));
        assert_eq!(
            spinner.view().to_html(),
            "<div class=\"spinner primary lg style-circular speed-normal\" role=\"status\" \
             aria-label=\"Loading\u{2026}\" aria-live=\"polite\">\
             <span class=\"spinner-graphic\" aria-hidden=\"true\"><span class=\"spinner-ring\"></span></span>\
             <span class=\"visually-hidden\">Loading\u{2026}</span></div>"
        );
    }

    #[test]
    fn styles_draw_their_pieces() {
        let spinner = Spinner::new("Saving").style(SpinnerStyle::Wave).speed(Speed::Fast);
        let view = spinner.view();
        assert_eq!(view.find_all(&|e| e.has_class("spinner-wave")).len(), 5);
        assert_eq!(
            spinner.appearance().class_string(),
            "spinner primary md style-wave speed-fast"
        );
        let dots = Spinner::default().style(SpinnerStyle::Dots).view();
        assert_eq!(dots.find_all(&|e| e.has_class("spinner-dot")).len(), 3);
    }

    #[test]
    fn caption_is_hidden_from_readers() {
        let view = Spinner::default().caption("Please wait").view();
        let caption = view.find(&|e| e.has_class("spinner-caption")).unwrap();
        assert_eq!(caption.get_attr("aria-hidden"), Some("true"));
    }

    #[test]
    fn hidden_spinner_renders_nothing() {
        assert!(Spinner::default().show(false).view().is_empty());
    }
}
