// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Single-line text field.

use understory_appearance::{
    AppearanceRequest, ComponentSchema, Role, StateFlags, StyleKey, Token,
};

use crate::node::{Element, Node};
use crate::widget::Widget;

/// The `type` attribute of an [`Input`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "kebab-case")
)]
pub enum InputKind {
    /// Free text.
    #[default]
    Text,
    /// Email address.
    Email,
    /// Obscured text.
    Password,
    /// Numeric.
    Number,
    /// Search query.
    Search,
    /// Telephone number.
    Tel,
    /// URL.
    Url,
}

impl InputKind {
    /// Attribute value.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Email => "email",
            Self::Password => "password",
            Self::Number => "number",
            Self::Search => "search",
            Self::Tel => "tel",
            Self::Url => "url",
        }
    }

    /// Kind token.
    #[must_use]
    pub const fn token(self) -> &'static str {
        match self {
            Self::Text => "type-text",
            Self::Email => "type-email",
            Self::Password => "type-password",
            Self::Number => "type-number",
            Self::Search => "type-search",
            Self::Tel => "type-tel",
            Self::Url => "type-url",
        }
    }
}

/// Events emitted by [`Input`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InputEvent {
    /// The value changed.
    Changed(String),
    /// The field gained focus.
    Focused,
    /// The field lost focus.
    Blurred,
    /// A password field switched between shown (`true`) and hidden text.
    RevealChanged(bool),
}

/// A labelled text field with validation feedback.
#[derive(Clone, Debug, Default)]
pub struct Input {
    /// Element id; also prefixes the error message id.
    pub id: String,
    /// Optional visible label.
    pub label: Option<String>,
    /// Current value.
    pub value: String,
    /// Placeholder text.
    pub placeholder: Option<String>,
    /// The `type` attribute.
    pub kind: InputKind,
    /// Appearance props.
    pub appearance: AppearanceRequest,
    /// Suppresses editing and focus.
    pub disabled: bool,
    /// Suppresses editing.
    pub readonly: bool,
    /// Marks the field required.
    pub required: bool,
    /// Validation message.
    pub error: Option<String>,
    focused: bool,
    revealed: bool,
}

impl Input {
    /// An empty text field.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    /// Sets the label.
    #[must_use]
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Sets the initial value.
    #[must_use]
    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    /// Sets the placeholder.
    #[must_use]
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    /// Sets the `type` attribute.
    #[must_use]
    pub fn kind(mut self, kind: InputKind) -> Self {
        self.kind = kind;
        self
    }

    /// Sets the appearance props.
    #[must_use]
    pub fn with_appearance(mut self, appearance: AppearanceRequest) -> Self {
        self.appearance = appearance;
        self
    }

    /// Sets whether the field is disabled.
    #[must_use]
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Sets whether the field is read-only.
    #[must_use]
    pub fn readonly(mut self, readonly: bool) -> Self {
        self.readonly = readonly;
        self
    }

    /// Sets whether the field is required.
    #[must_use]
    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    /// Sets the validation message.
    #[must_use]
    pub fn error(mut self, error: impl Into<String>) -> Self {
        self.error = Some(error.into());
        self
    }

    /// Returns `true` while focused.
    #[must_use]
    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// Replaces the value. Ignored when disabled, read-only, or unchanged.
    pub fn set_value(&mut self, value: impl Into<String>) -> Option<InputEvent> {
        if self.disabled || self.readonly {
            return None;
        }
        let value = value.into();
        if value == self.value {
            return None;
        }
        self.value.clone_from(&value);
        Some(InputEvent::Changed(value))
    }

    /// Moves focus into the field.
    pub fn focus(&mut self) -> Option<InputEvent> {
        if self.disabled || self.focused {
            return None;
        }
        self.focused = true;
        Some(InputEvent::Focused)
    }

    /// Moves focus out of the field.
    pub fn blur(&mut self) -> Option<InputEvent> {
        if !self.focused {
            return None;
        }
        self.focused = false;
        Some(InputEvent::Blurred)
    }

    /// Returns `true` while a password field shows its text.
    #[must_use]
    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    /// Shows or hides a password field's text. Other kinds ignore this.
    pub fn toggle_reveal(&mut self) -> Option<InputEvent> {
        if self.kind != InputKind::Password || self.disabled {
            return None;
        }
        self.revealed = !self.revealed;
        Some(InputEvent::RevealChanged(self.revealed))
    }

    fn field_type(&self) -> &'static str {
        if self.kind == InputKind::Password && self.revealed {
            InputKind::Text.as_str()
        } else {
            self.kind.as_str()
        }
    }

    fn error_id(&self) -> String {
        format!("{}-error", self.id)
    }
}

impl Widget for Input {
    const SCHEMA: ComponentSchema = ComponentSchema::new("input")
        .colors(&[
            (Role::Background, StyleKey::new("--input-bg")),
            (Role::Foreground, StyleKey::new("--input-fg")),
            (Role::Border, StyleKey::new("--input-border")),
            (Role::Accent, StyleKey::new("--input-focus-ring")),
        ])
        .low_vision(&[StyleKey::FONT_SIZE, StyleKey::new("--input-label-font-size")])
        .low_vision_size("18px");

    fn request(&self) -> &AppearanceRequest {
        &self.appearance
    }

    fn kinds(&self) -> Vec<Token> {
        vec![Token::from_static(self.kind.token())]
    }

    fn state(&self) -> StateFlags {
        StateFlags::empty()
            .with(StateFlags::DISABLED, self.disabled)
            .with(StateFlags::ERROR, self.error.is_some())
            .with(StateFlags::FOCUSED, self.focused)
            .with(StateFlags::READONLY, self.readonly)
    }

    fn view(&self) -> Node {
        let label = self.label.as_ref().map(|text| {
            Element::new("label")
                .class("input-label")
                .attr("for", self.id.clone())
                .text(text.clone())
        });
        let field = Element::new("input")
            .class("input-field")
            .attr("id", self.id.clone())
            .attr("type", self.field_type())
            .attr("value", self.value.clone())
            .attr_opt("placeholder", self.placeholder.clone())
            .attr_opt(
                "aria-label",
                self.label.is_none().then(|| self.placeholder.clone()).flatten(),
            )
            .flag("disabled", self.disabled)
            .flag("readonly", self.readonly)
            .flag("required", self.required)
            .attr_opt("aria-required", self.required.then_some("true"))
            .attr_opt("aria-invalid", self.error.as_ref().map(|_| "true"))
            .attr_opt("aria-describedby", self.error.as_ref().map(|_| self.error_id()));
        let reveal = (self.kind == InputKind::Password).then(|| {
            Element::new("button")
                .class("input-reveal")
                .attr("type", "button")
                .attr("aria-controls", self.id.clone())
                .attr("aria-pressed", if self.revealed { "true" } else { "false" })
                .attr(
                    "aria-label",
                    if self.revealed { "Hide password" } else { "Show password" },
                )
                .flag("disabled", self.disabled)
        });
        let message = self.error.as_ref().map(|msg| {
            Element::new("p")
                .class("input-error")
                .attr("id", self.error_id())
                .attr("role", "alert")
                .text(msg.clone())
        });
        Element::new("div")
            .appearance(self.appearance())
            .child_opt(label)
            .child(field)
            .child_opt(reveal)
            .child_opt(message)
            .into()
    }
}
