// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Multi-line text field with an optional character limit.

use understory_appearance::{
    AppearanceRequest, ComponentSchema, Role, StateFlags, StyleKey, Token,
};

use crate::node::{Element, Node};
use crate::widget::Widget;

/// Which axes the user may resize.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "kebab-case")
)]
pub enum Resize {
    /// Fixed size.
    None,
    /// Height only.
    #[default]
    Vertical,
    /// Width only.
    Horizontal,
    /// Both axes.
    Both,
}

impl Resize {
    /// Kind token; free resizing is the platform default and has none.
    #[must_use]
    pub const fn token(self) -> Option<&'static str> {
        match self {
            Self::None => Some("resize-none"),
            Self::Vertical => Some("resize-vertical"),
            Self::Horizontal => Some("resize-horizontal"),
            Self::Both => None,
        }
    }
}

/// Events emitted by [`Textarea`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TextareaEvent {
    /// The value changed.
    Changed(String),
}

/// A labelled multi-line text field.
///
/// With a `max_length`, edits are truncated to that many characters and a
/// `count/max` counter is rendered.
#[derive(Clone, Debug)]
pub struct Textarea {
    /// Element id; also prefixes the error message id.
    pub id: String,
    /// Optional visible label.
    pub label: Option<String>,
    /// Current value.
    pub value: String,
    /// Placeholder text.
    pub placeholder: Option<String>,
    /// Visible rows.
    pub rows: u32,
    /// Character limit.
    pub max_length: Option<usize>,
    /// Resize handle.
    pub resize: Resize,
    /// Appearance props.
    pub appearance: AppearanceRequest,
    /// Suppresses editing.
    pub disabled: bool,
    /// Suppresses editing.
    pub readonly: bool,
    /// Marks the field required.
    pub required: bool,
    /// Validation message.
    pub error: Option<String>,
}

impl Default for Textarea {
    fn default() -> Self {
        Self {
            id: String::new(),
            label: None,
            value: String::new(),
            placeholder: None,
            rows: 4,
            max_length: None,
            resize: Resize::default(),
            appearance: AppearanceRequest::default(),
            disabled: false,
            readonly: false,
            required: false,
            error: None,
        }
    }
}

impl Textarea {
    /// An empty four-row text area.
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

    /// Sets the placeholder.
    #[must_use]
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    /// Sets the visible row count.
    #[must_use]
    pub fn rows(mut self, rows: u32) -> Self {
        self.rows = rows;
        self
    }

    /// Sets the character limit.
    #[must_use]
    pub fn max_length(mut self, max: usize) -> Self {
        self.max_length = Some(max);
        self.value = truncate_chars(&self.value, max).to_owned();
        self
    }

    /// Sets whether a value is required.
    #[must_use]
    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    /// Sets the resize handle.
    #[must_use]
    pub fn resize(mut self, resize: Resize) -> Self {
        self.resize = resize;
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

    /// Sets the validation message.
    #[must_use]
    pub fn error(mut self, error: impl Into<String>) -> Self {
        self.error = Some(error.into());
        self
    }

    /// Number of characters in the value.
    #[must_use]
    pub fn char_count(&self) -> usize {
        self.value.chars().count()
    }

    /// Replaces the value, truncated to `max_length` characters.
    pub fn set_value(&mut self, value: &str) -> Option<TextareaEvent> {
        if self.disabled || self.readonly {
            return None;
        }
        let value = match self.max_length {
            Some(max) => truncate_chars(value, max),
            None => value,
        };
        if value == self.value {
            return None;
        }
        self.value = value.to_owned();
        Some(TextareaEvent::Changed(self.value.clone()))
    }

    fn error_id(&self) -> String {
        format!("{}-error", self.id)
    }

    fn counter_id(&self) -> String {
        format!("{}-count", self.id)
    }

    fn described_by(&self) -> Option<String> {
        let ids: Vec<String> = [
            self.max_length.map(|_| self.counter_id()),
            self.error.as_ref().map(|_| self.error_id()),
        ]
        .into_iter()
        .flatten()
        .collect();
        (!ids.is_empty()).then(|| ids.join(" "))
    }
}

fn truncate_chars(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

impl Widget for Textarea {
    const SCHEMA: ComponentSchema = ComponentSchema::new("textarea")
        .colors(&[
            (Role::Background, StyleKey::new("--textarea-bg")),
            (Role::Foreground, StyleKey::new("--textarea-fg")),
            (Role::Border, StyleKey::new("--textarea-border")),
            (Role::Accent, StyleKey::new("--textarea-focus-ring")),
        ])
        .low_vision(&[
            StyleKey::FONT_SIZE,
            StyleKey::new("--textarea-label-font-size"),
        ]);

    fn request(&self) -> &AppearanceRequest {
        &self.appearance
    }

    fn kinds(&self) -> Vec<Token> {
        self.resize.token().map(Token::from_static).into_iter().collect()
    }

    fn state(&self) -> StateFlags {
        StateFlags::empty()
            .with(StateFlags::DISABLED, self.disabled)
            .with(StateFlags::ERROR, self.error.is_some())
            .with(StateFlags::READONLY, self.readonly)
    }

    fn view(&self) -> Node {
        let label = self.label.as_ref().map(|text| {
            let marker = self.required.then(|| {
                Element::new("span")
                    .class("textarea-required")
                    .attr("aria-hidden", "true")
                    .text("*")
            });
            Element::new("label")
                .class("textarea-label")
                .attr("for", self.id.clone())
                .text(text.clone())
                .child_opt(marker)
        });
        let field = Element::new("textarea")
            .class("textarea-field")
            .attr("id", self.id.clone())
            .attr("rows", self.rows.to_string())
            .attr_opt("maxlength", self.max_length.map(|m| m.to_string()))
            .attr_opt("placeholder", self.placeholder.clone())
            .flag("disabled", self.disabled)
            .flag("readonly", self.readonly)
            .flag("required", self.required)
            .attr_opt("aria-invalid", self.error.as_ref().map(|_| "true"))
            .attr_opt("aria-describedby", self.described_by())
            .text(self.value.clone());
        let counter = self.max_length.map(|max| {
            Element::new("span")
                .class("textarea-counter")
                .attr("id", self.counter_id())
                .attr("aria-live", "polite")
                .text(format!("{}/{}", self.char_count(), max))
        });
        let message = self.error.as_ref().map(|msg| {
            Element::new("p")
                .class("textarea-error")
                .attr("id", self.error_id())
                .attr("role", "alert")
                .text(msg.clone())
        });
        Element::new("div")
            .appearance(self.appearance())
            .child_opt(label)
            .child(field)
            .child_opt(counter)
            .child_opt(message)
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncates_by_characters() {
        let mut ta = Textarea::new("bio").max_length(5);
        assert_eq!(
            ta.set_value("héllo world"),
            Some(TextareaEvent::Changed("héllo".into()))
        );
        assert_eq!(ta.char_count(), 5);
        assert_eq!(ta.set_value("héllo!"), None, "truncates to the same value");
    }

    #[test]
    fn counter_reflects_value() {
        let mut ta = Textarea::new("note").max_length(140);
        ta.set_value("hi");
        let view = ta.view();
        let counter = view.find(&|e| e.has_class("textarea-counter")).unwrap();
        assert_eq!(Node::Element(counter.clone()).text_content(), "2/140");
        let field = view.find(&|e| e.tag() == "textarea").unwrap();
        assert_eq!(field.get_attr("maxlength"), Some("140"));
        assert_eq!(field.get_attr("aria-describedby"), Some("note-count"));
    }

    #[test]
    fn resize_token_and_defaults() {
        let ta = Textarea::new("t").resize(Resize::Both).readonly(true);
        assert_eq!(ta.appearance().class_string(), "textarea primary md readonly");
        assert_eq!(ta.rows, 4);
        let fixed = Textarea::new("t").resize(Resize::None);
        assert_eq!(fixed.appearance().class_string(), "textarea primary md resize-none");
        let view = ta.view();
        assert!(view.find(&|e| e.has_class("textarea-counter")).is_none());
    }

    #[test]
    fn required_label_marker() {
        let ta = Textarea::new("t").label("Bio").required(true);
        let view = ta.view();
        let label = view.find(&|e| e.tag() == "label").unwrap();
        assert!(Node::Element(label.clone()).text_content().ends_with('*'));
        let field = view.find(&|e| e.tag() == "textarea").unwrap();
        assert!(field.has_attr("required"));
    }

    #[test]
    fn readonly_rejects_edits() {
        let mut ta = Textarea::new("t").readonly(true);
        assert_eq!(ta.set_value("x"), None);
    }
}
