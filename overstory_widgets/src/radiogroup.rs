// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Exclusive choice among visible options.

use understory_appearance::{
    AppearanceRequest, ComponentSchema, Role, StateFlags, StyleKey, Token,
};

use crate::node::{Element, Node};
use crate::select::Choice;
use crate::widget::{Orientation, Widget, step_enabled};

/// Events emitted by [`Radiogroup`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RadioEvent {
    /// A different option was selected; carries its value.
    Changed(String),
}

/// A group of radio buttons.
///
/// Keyboard focus is roving: only the selected option (or the first enabled
/// one, when nothing is selected) is in the tab order.
#[derive(Clone, Debug)]
pub struct Radiogroup {
    /// Group id; also the `name` shared by the inputs.
    pub id: String,
    /// Optional visible label.
    pub label: Option<String>,
    /// Optional help text under the label.
    pub description: Option<String>,
    /// The choices.
    pub options: Vec<Choice>,
    /// Layout axis.
    pub orientation: Orientation,
    /// Appearance props.
    pub appearance: AppearanceRequest,
    /// Suppresses selection.
    pub disabled: bool,
    /// Marks the group required.
    pub required: bool,
    /// Validation message.
    pub error: Option<String>,
    selected: Option<usize>,
}

impl Radiogroup {
    /// A vertical group with nothing selected.
    #[must_use]
    pub fn new(id: impl Into<String>, options: Vec<Choice>) -> Self {
        Self {
            id: id.into(),
            label: None,
            description: None,
            options,
            orientation: Orientation::Vertical,
            appearance: AppearanceRequest::default(),
            disabled: false,
            required: false,
            error: None,
            selected: None,
        }
    }

    /// Sets the label.
    #[must_use]
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Sets the help text.
    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the layout axis.
    #[must_use]
    pub fn orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    /// Sets the appearance props.
    #[must_use]
    pub fn with_appearance(mut self, appearance: AppearanceRequest) -> Self {
        self.appearance = appearance;
        self
    }

    /// Sets whether the group is disabled.
    #[must_use]
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Sets whether a choice is required.
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

    /// Preselects the option whose value is `value`, if it exists and is enabled.
    #[must_use]
    pub fn selected_value(mut self, value: &str) -> Self {
        self.selected = self
            .options
            .iter()
            .position(|c| c.value == value && !c.disabled);
        self
    }

    /// Index of the selected option.
    #[must_use]
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// The selected option.
    #[must_use]
    pub fn selected_choice(&self) -> Option<&Choice> {
        self.selected.and_then(|i| self.options.get(i))
    }

    fn is_enabled(&self, index: usize) -> bool {
        !self.disabled && self.options.get(index).is_some_and(|c| !c.disabled)
    }

    /// Selects the option at `index`.
    pub fn select(&mut self, index: usize) -> Option<RadioEvent> {
        if !self.is_enabled(index) || self.selected == Some(index) {
            return None;
        }
        self.selected = Some(index);
        tracing::debug!(id = %self.id, index, "radio changed");
        self.options
            .get(index)
            .map(|c| RadioEvent::Changed(c.value.clone()))
    }

    /// Selects the next enabled option, wrapping.
    pub fn select_next(&mut self) -> Option<RadioEvent> {
        self.step(true)
    }

    /// Selects the previous enabled option, wrapping.
    pub fn select_prev(&mut self) -> Option<RadioEvent> {
        self.step(false)
    }

    fn step(&mut self, forward: bool) -> Option<RadioEvent> {
        let next = step_enabled(self.options.len(), self.selected, forward, |i| {
            self.is_enabled(i)
        })?;
        self.select(next)
    }

    /// Index of the option that takes part in the tab order.
    #[must_use]
    pub fn tab_stop(&self) -> Option<usize> {
        self.selected
            .or_else(|| step_enabled(self.options.len(), None, true, |i| self.is_enabled(i)))
    }
}

impl Widget for Radiogroup {
    const SCHEMA: ComponentSchema = ComponentSchema::new("radiogroup")
        .colors(&[
            (Role::Accent, StyleKey::new("--radio-dot")),
            (Role::Border, StyleKey::new("--radio-border")),
            (Role::Foreground, StyleKey::new("--radio-label")),
        ])
        .low_vision(&[StyleKey::FONT_SIZE, StyleKey::new("--radio-label-font-size")]);

    fn request(&self) -> &AppearanceRequest {
        &self.appearance
    }

    fn kinds(&self) -> Vec<Token> {
        vec![Token::from_static(self.orientation.as_str())]
    }

    fn state(&self) -> StateFlags {
        StateFlags::empty()
            .with(StateFlags::DISABLED, self.disabled)
            .with(StateFlags::ERROR, self.error.is_some())
    }

    fn view(&self) -> Node {
        let label_id = format!("{}-label", self.id);
        let description_id = format!("{}-description", self.id);
        let error_id = format!("{}-error", self.id);
        let label = self.label.as_ref().map(|text| {
            let marker = self.required.then(|| {
                Element::new("span")
                    .class("radiogroup-required")
                    .attr("aria-hidden", "true")
                    .text("*")
            });
            Element::new("span")
                .class("radiogroup-label")
                .attr("id", label_id.clone())
                .text(text.clone())
                .child_opt(marker)
        });
        let description = self.description.as_ref().map(|text| {
            Element::new("p")
                .class("radiogroup-description")
                .attr("id", description_id.clone())
                .text(text.clone())
        });
        let message = self.error.as_ref().map(|text| {
            Element::new("p")
                .class("radiogroup-error")
                .attr("id", error_id.clone())
                .attr("role", "alert")
                .text(text.clone())
        });
        let described_by: Vec<&str> = [
            self.description.as_ref().map(|_| description_id.as_str()),
            self.error.as_ref().map(|_| error_id.as_str()),
        ]
        .into_iter()
        .flatten()
        .collect();
        let tab_stop = self.tab_stop();
        let radios = self.options.iter().enumerate().map(|(i, choice)| {
            let selected = self.selected == Some(i);
            let disabled = self.disabled || choice.disabled;
            let option_id = format!("{}-option-{i}", self.id);
            let hint_id = format!("{option_id}-desc");
            let hint = choice.description.as_ref().map(|text| {
                Element::new("span")
                    .class("radio-description")
                    .attr("id", hint_id.clone())
                    .text(text.clone())
            });
            Element::new("label")
                .class("radio")
                .class_if("selected", selected)
                .class_if("disabled", disabled)
                .attr("for", option_id.clone())
                .child(
                    Element::new("input")
                        .attr("type", "radio")
                        .attr("id", option_id)
                        .attr("name", self.id.clone())
                        .attr("value", choice.value.clone())
                        .flag("checked", selected)
                        .flag("disabled", disabled)
                        .attr("tabindex", if tab_stop == Some(i) { "0" } else { "-1" })
                        .attr_opt("aria-describedby", choice.description.as_ref().map(|_| hint_id)),
                )
                .child(Element::new("span").class("radio-label").text(choice.label.clone()))
                .child_opt(hint)
                .into()
        });
        Element::new("div")
            .appearance(self.appearance())
            .attr("role", "radiogroup")
            .attr("id", self.id.clone())
            .attr("aria-orientation", self.orientation.as_str())
            .attr_opt("aria-labelledby", self.label.as_ref().map(|_| label_id.clone()))
            .attr_opt(
                "aria-describedby",
                (!described_by.is_empty()).then(|| described_by.join(" ")),
            )
            .attr_opt("aria-required", self.required.then_some("true"))
            .attr_opt("aria-invalid", self.error.as_ref().map(|_| "true"))
            .child_opt(label)
            .child_opt(description)
            .children(radios)
            .child_opt(message)
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sizes() -> Radiogroup {
        Radiogroup::new(
            "size",
            vec![
                Choice::new("s", "Small"),
                Choice::new("m", "Medium").disabled(true),
                Choice::new("l", "Large"),
            ],
        )
    }

    #[test]
    fn arrows_wrap_and_skip_disabled() {
        let mut g = sizes();
        assert_eq!(g.select_next(), Some(RadioEvent::Changed("s".into())));
        assert_eq!(g.select_next(), Some(RadioEvent::Changed("l".into())));
        assert_eq!(g.select_next(), Some(RadioEvent::Changed("s".into())));
        assert_eq!(g.select_prev(), Some(RadioEvent::Changed("l".into())));
    }

    #[test]
    fn select_ignores_disabled_and_repeats() {
        let mut g = sizes();
        assert_eq!(g.select(1), None);
        assert_eq!(g.select(0), Some(RadioEvent::Changed("s".into())));
        assert_eq!(g.select(0), None);
        let mut off = sizes().disabled(true);
        assert_eq!(off.select_next(), None);
    }

    #[test]
    fn roving_tabindex() {
        let g = sizes();
        let view = g.view();
        let tabindex: Vec<_> = view
            .find_all(&|e| e.tag() == "input")
            .iter()
            .map(|e| e.get_attr("tabindex").unwrap_or_default())
            .collect();
        assert_eq!(tabindex, ["0", "-1", "-1"]);

        let g = sizes().selected_value("l");
        let view = g.view();
        let inputs = view.find_all(&|e| e.tag() == "input");
        assert_eq!(inputs[2].get_attr("tabindex"), Some("0"));
        assert!(inputs[2].has_attr("checked"));
    }

    #[test]
    fn orientation_token_and_role() {
        let g = sizes().orientation(Orientation::Horizontal).label("Size");
        let view = g.view();
        let root = view.as_element().unwrap();
        assert_eq!(root.classes().class_string(), "radiogroup primary md horizontal");
        assert_eq!(root.get_attr("role"), Some("radiogroup"));
        assert_eq!(root.get_attr("aria-labelledby"), Some("size-label"));
    }

    #[test]
    fn descriptions_and_error_are_linked() {
        let g = Radiogroup::new(
            "plan",
            vec![
                Choice::new("free", "Free").description("Up to 3 projects"),
                Choice::new("pro", "Pro"),
            ],
        )
        .description("Billed monthly")
        .error("Choose a plan");
        let view = g.view();
        let root = view.as_element().unwrap();
        assert_eq!(
            root.get_attr("aria-describedby"),
            Some("plan-description plan-error")
        );
        let inputs = view.find_all(&|e| e.tag() == "input");
        assert_eq!(inputs[0].get_attr("aria-describedby"), Some("plan-option-0-desc"));
        assert!(!inputs[1].has_attr("aria-describedby"));
        let error = view.find(&|e| e.get_attr("id") == Some("plan-error")).unwrap();
        assert_eq!(error.get_attr("role"), Some("alert"));
    }
}
