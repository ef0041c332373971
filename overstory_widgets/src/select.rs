// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Single-choice dropdown.
//!
//! The dropdown is a button that opens a listbox. While open, one option is
//! highlighted; arrow navigation moves the highlight over enabled options
//! (wrapping) and committing selects it and closes the list.

use understory_appearance::{AppearanceRequest, ComponentSchema, Role, StateFlags, StyleKey};

use crate::node::{Element, Node};
use crate::widget::{Widget, step_enabled};

/// One entry of a [`Select`] or [`Radiogroup`](crate::Radiogroup).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct Choice {
    /// Submitted value.
    pub value: String,
    /// Visible label.
    pub label: String,
    /// Excluded from selection and navigation.
    pub disabled: bool,
    /// Secondary text shown under the label in a radio group.
    pub description: Option<String>,
}

impl Choice {
    /// An enabled choice.
    #[must_use]
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
            disabled: false,
            description: None,
        }
    }

    /// Sets the secondary text.
    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets whether the choice is disabled.
    #[must_use]
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }
}

/// Events emitted by [`Select`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SelectEvent {
    /// The listbox opened or closed.
    OpenChanged(bool),
    /// A different option was selected; carries its value.
    Changed(String),
}

/// A dropdown picking one of several [`Choice`]s.
#[derive(Clone, Debug)]
pub struct Select {
    /// Id prefix for the trigger, listbox and options.
    pub id: String,
    /// Optional visible label.
    pub label: Option<String>,
    /// Text shown when nothing is selected.
    pub placeholder: String,
    /// The choices.
    pub options: Vec<Choice>,
    /// Appearance props.
    pub appearance: AppearanceRequest,
    /// Suppresses opening and selection.
    pub disabled: bool,
    /// Marks the field required.
    pub required: bool,
    /// Validation message.
    pub error: Option<String>,
    selected: Option<usize>,
    highlighted: Option<usize>,
    open: bool,
}

impl Select {
    /// A closed select with no selection.
    #[must_use]
    pub fn new(id: impl Into<String>, options: Vec<Choice>) -> Self {
        Self {
            id: id.into(),
            label: None,
            placeholder: String::from("Select\u{2026}"),
            options,
            appearance: AppearanceRequest::default(),
            disabled: false,
            required: false,
            error: None,
            selected: None,
            highlighted: None,
            open: false,
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
        self.placeholder = placeholder.into();
        self
    }

    /// Sets the appearance props.
    #[must_use]
    pub fn with_appearance(mut self, appearance: AppearanceRequest) -> Self {
        self.appearance = appearance;
        self
    }

    /// Sets whether the select is disabled.
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

    /// Index of the highlighted option while open.
    #[must_use]
    pub fn highlighted(&self) -> Option<usize> {
        self.highlighted
    }

    /// Returns `true` while the listbox is shown.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open
    }

    fn is_enabled(&self, index: usize) -> bool {
        self.options.get(index).is_some_and(|c| !c.disabled)
    }

    /// Opens or closes the listbox.
    pub fn toggle_open(&mut self) -> Option<SelectEvent> {
        if self.open { self.close() } else { self.open() }
    }

    /// Opens the listbox, highlighting the selection or the first enabled option.
    pub fn open(&mut self) -> Option<SelectEvent> {
        if self.disabled || self.open {
            return None;
        }
        self.open = true;
        self.highlighted = self
            .selected
            .or_else(|| step_enabled(self.options.len(), None, true, |i| self.is_enabled(i)));
        Some(SelectEvent::OpenChanged(true))
    }

    /// Closes the listbox without changing the selection.
    pub fn close(&mut self) -> Option<SelectEvent> {
        if !self.open {
            return None;
        }
        self.open = false;
        self.highlighted = None;
        Some(SelectEvent::OpenChanged(false))
    }

    /// Moves the highlight to the next enabled option, opening the list if closed.
    pub fn highlight_next(&mut self) -> Option<SelectEvent> {
        self.move_highlight(true)
    }

    /// Moves the highlight to the previous enabled option, opening the list if closed.
    pub fn highlight_prev(&mut self) -> Option<SelectEvent> {
        self.move_highlight(false)
    }

    fn move_highlight(&mut self, forward: bool) -> Option<SelectEvent> {
        if !self.open {
            return self.open();
        }
        let next = step_enabled(self.options.len(), self.highlighted, forward, |i| {
            self.is_enabled(i)
        });
        self.highlighted = next;
        None
    }

    /// Selects the highlighted option and closes the list.
    pub fn commit_highlighted(&mut self) -> Option<SelectEvent> {
        let index = self.highlighted?;
        self.select(index)
    }

    /// Selects the option at `index` and closes the list.
    ///
    /// Returns `Changed` only when an enabled option other than the current
    /// selection is chosen.
    pub fn select(&mut self, index: usize) -> Option<SelectEvent> {
        if self.disabled || !self.is_enabled(index) {
            return None;
        }
        self.open = false;
        self.highlighted = None;
        if self.selected == Some(index) {
            return None;
        }
        self.selected = Some(index);
        tracing::debug!(id = %self.id, index, "select changed");
        self.options
            .get(index)
            .map(|c| SelectEvent::Changed(c.value.clone()))
    }

    fn option_id(&self, index: usize) -> String {
        format!("{}-option-{index}", self.id)
    }

    fn listbox(&self) -> Element {
        let options = self.options.iter().enumerate().map(|(i, choice)| {
            let selected = self.selected == Some(i);
            Element::new("li")
                .class("select-option")
                .class_if("selected", selected)
                .class_if("highlighted", self.highlighted == Some(i))
                .attr("id", self.option_id(i))
                .attr("role", "option")
                .attr("aria-selected", if selected { "true" } else { "false" })
                .attr_opt("aria-disabled", choice.disabled.then_some("true"))
                .text(choice.label.clone())
                .into()
        });
        Element::new("ul")
            .class("select-listbox")
            .attr("id", format!("{}-listbox", self.id))
            .attr("role", "listbox")
            .attr_opt(
                "aria-activedescendant",
                self.highlighted.map(|i| self.option_id(i)),
            )
            .children(options)
    }
}

impl Widget for Select {
    const SCHEMA: ComponentSchema = ComponentSchema::new("select")
        .colors(&[
            (Role::Background, StyleKey::new("--select-bg")),
            (Role::Foreground, StyleKey::new("--select-fg")),
            (Role::Border, StyleKey::new("--select-border")),
            (Role::Accent, StyleKey::new("--select-focus-ring")),
            (Role::Hover, StyleKey::new("--select-option-hover-bg")),
        ])
        .low_vision(&[StyleKey::FONT_SIZE, StyleKey::new("--select-label-font-size")]);

    fn request(&self) -> &AppearanceRequest {
        &self.appearance
    }

    fn state(&self) -> StateFlags {
        StateFlags::empty()
            .with(StateFlags::DISABLED, self.disabled)
            .with(StateFlags::ERROR, self.error.is_some())
            .with(StateFlags::OPEN, self.open)
    }

    fn view(&self) -> Node {
        let label_id = format!("{}-label", self.id);
        let error_id = format!("{}-error", self.id);
        let label = self.label.as_ref().map(|text| {
            let marker = self.required.then(|| {
                Element::new("span")
                    .class("select-required")
                    .attr("aria-hidden", "true")
                    .text("*")
            });
            Element::new("span")
                .class("select-label")
                .attr("id", label_id.clone())
                .text(text.clone())
                .child_opt(marker)
        });
        let shown = self
            .selected_choice()
            .map_or(self.placeholder.clone(), |c| c.label.clone());
        let trigger = Element::new("button")
            .class("select-trigger")
            .attr("type", "button")
            .attr("id", format!("{}-trigger", self.id))
            .attr("aria-haspopup", "listbox")
            .attr("aria-expanded", if self.open { "true" } else { "false" })
            .attr("aria-controls", format!("{}-listbox", self.id))
            .attr_opt("aria-labelledby", self.label.as_ref().map(|_| label_id.clone()))
            .attr_opt("aria-invalid", self.error.as_ref().map(|_| "true"))
            .attr_opt("aria-describedby", self.error.as_ref().map(|_| error_id.clone()))
            .attr_opt("aria-required", self.required.then_some("true"))
            .flag("disabled", self.disabled)
            .child(
                Element::new("span")
                    .class("select-value")
                    .class_if("placeholder", self.selected.is_none())
                    .text(shown),
            );
        let message = self.error.as_ref().map(|msg| {
            Element::new("p")
                .class("select-error")
                .attr("id", error_id.clone())
                .attr("role", "alert")
                .text(msg.clone())
        });
        Element::new("div")
            .appearance(self.appearance())
            .child_opt(label)
            .child(trigger)
            .child_opt(self.open.then(|| self.listbox()))
            .child_opt(message)
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fruit() -> Select {
        Select::new(
            "fruit",
            vec![
                Choice::new("apple", "Apple"),
                Choice::new("banana", "Banana").disabled(true),
                Choice::new("cherry", "Cherry"),
            ],
        )
    }

    #[test]
    fn open_highlights_first_enabled() {
        let mut s = fruit();
        assert_eq!(s.toggle_open(), Some(SelectEvent::OpenChanged(true)));
        assert_eq!(s.highlighted(), Some(0));
        assert!(s.state().contains(StateFlags::OPEN));
    }

    #[test]
    fn navigation_skips_disabled_and_wraps() {
        let mut s = fruit();
        s.open();
        s.highlight_next();
        assert_eq!(s.highlighted(), Some(2));
        s.highlight_next();
        assert_eq!(s.highlighted(), Some(0));
        s.highlight_prev();
        assert_eq!(s.highlighted(), Some(2));
    }

    #[test]
    fn commit_selects_and_closes() {
        let mut s = fruit();
        s.open();
        s.highlight_next();
        assert_eq!(
            s.commit_highlighted(),
            Some(SelectEvent::Changed("cherry".into()))
        );
        assert!(!s.is_open());
        assert_eq!(s.selected_choice().map(|c| c.label.as_str()), Some("Cherry"));

        // Reopening starts from the selection; recommitting is silent.
        s.open();
        assert_eq!(s.highlighted(), Some(2));
        assert_eq!(s.commit_highlighted(), None);
        assert!(!s.is_open());
    }

    #[test]
    fn disabled_options_and_selects_refuse() {
        let mut s = fruit();
        assert_eq!(s.select(1), None);
        assert_eq!(s.select(7), None);
        let mut off = fruit().disabled(true);
        assert_eq!(off.toggle_open(), None);
        assert_eq!(off.select(0), None);
    }

    #[test]
    fn listbox_markup_while_open() {
        let mut s = fruit().label("Fruit").selected_value("apple");
        assert!(s.view().find(&|e| e.get_attr("role") == Some("listbox")).is_none());
        s.open();
        s.highlight_next();
        let view = s.view();
        let listbox = view.find(&|e| e.get_attr("role") == Some("listbox")).unwrap();
        assert_eq!(
            listbox.get_attr("aria-activedescendant"),
            Some("fruit-option-2")
        );
        let options = view.find_all(&|e| e.get_attr("role") == Some("option"));
        assert_eq!(options.len(), 3);
        assert_eq!(options[0].get_attr("aria-selected"), Some("true"));
        assert_eq!(options[1].get_attr("aria-disabled"), Some("true"));
        assert!(options[2].has_class("highlighted"));
        let trigger = view.find(&|e| e.has_class("select-trigger")).unwrap();
        assert_eq!(trigger.get_attr("aria-expanded"), Some("true"));
        assert_eq!(trigger.get_attr("aria-labelledby"), Some("fruit-label"));
    }

    #[test]
    fn required_and_error_wiring() {
        let s = fruit().label("Fruit").required(true).error("Pick one");
        let view = s.view();
        let trigger = view.find(&|e| e.has_class("select-trigger")).unwrap();
        assert_eq!(trigger.get_attr("aria-required"), Some("true"));
        assert_eq!(trigger.get_attr("aria-describedby"), Some("fruit-error"));
        let message = view.find(&|e| e.get_attr("id") == Some("fruit-error")).unwrap();
        assert_eq!(message.get_attr("role"), Some("alert"));
        assert!(view.find(&|e| e.has_class("select-required")).is_some());
    }
}
