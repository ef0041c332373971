// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tri-state checkbox.

use understory_appearance::{AppearanceRequest, ComponentSchema, Role, StateFlags, StyleKey};

use crate::node::{Element, Node};
use crate::widget::Widget;

/// Events emitted by [`Checkbox`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum CheckboxEvent {
    /// The checked state changed to the given value.
    Changed(bool),
}

/// A labelled checkbox with checked, unchecked and indeterminate states.
#[derive(Clone, Debug, Default)]
pub struct Checkbox {
    /// Element id; also prefixes the error message id.
    pub id: String,
    /// Visible label.
    pub label: String,
    /// Appearance props.
    pub appearance: AppearanceRequest,
    /// Checked state.
    pub checked: bool,
    /// Mixed state; takes precedence over `checked` for display.
    pub indeterminate: bool,
    /// Suppresses toggling.
    pub disabled: bool,
    /// Marks the field required.
    pub required: bool,
    /// Validation message.
    pub error: Option<String>,
}

impl Checkbox {
    /// An unchecked checkbox.
    #[must_use]
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
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

    /// Sets the checked state.
    #[must_use]
    pub fn checked(mut self, checked: bool) -> Self {
        self.checked = checked;
        self
    }

    /// Sets the mixed state.
    #[must_use]
    pub fn indeterminate(mut self, indeterminate: bool) -> Self {
        self.indeterminate = indeterminate;
        self
    }

    /// Sets whether the checkbox is disabled.
    #[must_use]
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Sets whether the checkbox is required.
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

    /// Flips the state. An indeterminate checkbox becomes checked.
    pub fn toggle(&mut self) -> Option<CheckboxEvent> {
        if self.disabled {
            return None;
        }
        let next = self.indeterminate || !self.checked;
        self.checked = next;
        self.indeterminate = false;
        Some(CheckboxEvent::Changed(next))
    }

    fn aria_checked(&self) -> &'static str {
        if self.indeterminate {
            "mixed"
        } else if self.checked {
            "true"
        } else {
            "false"
        }
    }

    fn error_id(&self) -> String {
        format!("{}-error", self.id)
    }
}

impl Widget for Checkbox {
    const SCHEMA: ComponentSchema = ComponentSchema::new("checkbox")
        .colors(&[
            (Role::Background, StyleKey::new("--checkbox-bg")),
            (Role::Border, StyleKey::new("--checkbox-border")),
            (Role::Accent, StyleKey::new("--checkbox-check")),
            (Role::Foreground, StyleKey::new("--checkbox-label")),
        ])
        .low_vision(&[
            StyleKey::FONT_SIZE,
            StyleKey::new("--checkbox-label-font-size"),
        ])
        .low_vision_size("22px");

    fn request(&self) -> &AppearanceRequest {
        &self.appearance
    }

    fn state(&self) -> StateFlags {
        StateFlags::empty()
            .with(StateFlags::DISABLED, self.disabled)
            .with(StateFlags::ERROR, self.error.is_some())
            .with(StateFlags::CHECKED, self.checked && !self.indeterminate)
            .with(StateFlags::INDETERMINATE, self.indeterminate)
    }

    fn view(&self) -> Node {
        let input = Element::new("input")
            .class("checkbox-input")
            .attr("type", "checkbox")
            .attr("id", self.id.clone())
            .flag("checked", self.checked && !self.indeterminate)
            .flag("disabled", self.disabled)
            .flag("required", self.required)
            .attr("aria-checked", self.aria_checked())
            .attr_opt("aria-invalid", self.error.as_ref().map(|_| "true"))
            .attr_opt("aria-describedby", self.error.as_ref().map(|_| self.error_id()));
        let message = self.error.as_ref().map(|msg| {
            Element::new("span")
                .class("checkbox-error")
                .attr("id", self.error_id())
                .attr("role", "alert")
                .text(msg.clone())
        });
        Element::new("label")
            .appearance(self.appearance())
            .attr("for", self.id.clone())
            .child(input)
            .child(
                Element::new("span")
                    .class("checkbox-box")
                    .attr("aria-hidden", "true"),
            )
            .child(Element::new("span").class("checkbox-label").text(self.label.clone()))
            .child_opt(message)
            .into()
    }
}
