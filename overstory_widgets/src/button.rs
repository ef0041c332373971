// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Push button.

use understory_appearance::{AppearanceRequest, ComponentSchema, Role, StateFlags, StyleKey, Token};

use crate::node::{Element, Node};
use crate::widget::Widget;

const DEFAULT_LOADING_LABEL: &str = "Loading";

/// The `type` attribute of a button.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "kebab-case")
)]
pub enum ButtonType {
    /// Plain button.
    #[default]
    Button,
    /// Submits its form.
    Submit,
    /// Resets its form.
    Reset,
}

impl ButtonType {
    /// Attribute value.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Button => "button",
            Self::Submit => "submit",
            Self::Reset => "reset",
        }
    }
}

/// Events emitted by [`Button`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ButtonEvent {
    /// The button was activated.
    Pressed,
}

/// A push button with an optional loading state.
#[derive(Clone, Debug, Default)]
pub struct Button {
    /// Visible label.
    pub label: String,
    /// Appearance props.
    pub appearance: AppearanceRequest,
    /// The `type` attribute.
    pub kind: ButtonType,
    /// Suppresses activation.
    pub disabled: bool,
    /// Shows a spinner and suppresses activation.
    pub loading: bool,
    /// Announced while loading, in place of the label (default: "Loading").
    pub loading_label: Option<String>,
    /// Stretches to the container width.
    pub block: bool,
}

impl Button {
    /// A button labelled `label`.
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            ..Self::default()
        }
    }

    /// Sets the appearance props.
    #[must_use]
    pub fn with_appearance(mut self, appearance: AppearanceRequest) -> Self {
        self.appearance = appearance;
        self
    }

    /// Sets the `type` attribute.
    #[must_use]
    pub fn kind(mut self, kind: ButtonType) -> Self {
        self.kind = kind;
        self
    }

    /// Sets whether the button is disabled.
    #[must_use]
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Sets whether the button is loading.
    #[must_use]
    pub fn loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    /// Sets the text announced while loading.
    #[must_use]
    pub fn loading_label(mut self, label: impl Into<String>) -> Self {
        self.loading_label = Some(label.into());
        self
    }

    /// Sets whether the button fills its container.
    #[must_use]
    pub fn block(mut self, block: bool) -> Self {
        self.block = block;
        self
    }

    /// Returns `true` if the button accepts activation.
    #[must_use]
    pub fn is_interactive(&self) -> bool {
        !self.disabled && !self.loading
    }

    /// Activates the button.
    pub fn press(&self) -> Option<ButtonEvent> {
        self.is_interactive().then_some(ButtonEvent::Pressed)
    }
}

impl Widget for Button {
    const SCHEMA: ComponentSchema = ComponentSchema::new("button").colors(&[
        (Role::Background, StyleKey::new("--button-bg")),
        (Role::Foreground, StyleKey::new("--button-fg")),
        (Role::Border, StyleKey::new("--button-border")),
        (Role::Hover, StyleKey::new("--button-hover-bg")),
    ]);

    fn request(&self) -> &AppearanceRequest {
        &self.appearance
    }

    fn kinds(&self) -> Vec<Token> {
        if self.block {
            vec![Token::from_static("block")]
        } else {
            Vec::new()
        }
    }

    fn state(&self) -> StateFlags {
        StateFlags::empty()
            .with(StateFlags::DISABLED, self.disabled)
            .with(StateFlags::LOADING, self.loading)
    }

    fn view(&self) -> Node {
        let loading_label = self
            .loading_label
            .as_deref()
            .unwrap_or(DEFAULT_LOADING_LABEL);
        let spinner = self.loading.then(|| {
            Element::new("span")
                .class("button-spinner")
                .attr("aria-live", "polite")
                .child(
                    Element::new("span")
                        .class("visually-hidden")
                        .text(loading_label),
                )
                .child(
                    Element::new("span")
                        .class("button-dots")
                        .attr("aria-hidden", "true")
                        .children((0..3).map(|_| Element::new("span").class("button-dot").into())),
                )
        });
        let inert = !self.is_interactive();
        Element::new("button")
            .appearance(self.appearance())
            .attr("type", self.kind.as_str())
            .flag("disabled", inert)
            .attr_opt("aria-disabled", inert.then_some("true"))
            .attr_opt("aria-busy", self.loading.then_some("true"))
            .attr_opt("aria-label", self.loading.then_some(loading_label))
            .child(
                Element::new("span")
                    .class("button-label")
                    .attr_opt("aria-hidden", self.loading.then_some("true"))
                    .text(self.label.clone()),
            )
            .child_opt(spinner)
            .into()
    }
}
