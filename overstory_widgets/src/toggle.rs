// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! On/off switch.

use understory_appearance::{AppearanceRequest, ComponentSchema, Role, StateFlags, StyleKey};

use crate::node::{Element, Node};
use crate::widget::Widget;

/// Events emitted by [`Toggle`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ToggleEvent {
    /// The switch moved to the given position.
    Changed(bool),
}

/// A two-state switch.
#[derive(Clone, Debug, Default)]
pub struct Toggle {
    /// Element id.
    pub id: String,
    /// Visible label.
    pub label: String,
    /// Appearance props.
    pub appearance: AppearanceRequest,
    /// Current position.
    pub on: bool,
    /// Suppresses toggling.
    pub disabled: bool,
}

impl Toggle {
    /// A switch in the off position.
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

    /// Sets the position.
    #[must_use]
    pub fn on(mut self, on: bool) -> Self {
        self.on = on;
        self
    }

    /// Sets whether the switch is disabled.
    #[must_use]
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Flips the switch.
    pub fn toggle(&mut self) -> Option<ToggleEvent> {
        if self.disabled {
            return None;
        }
        self.on = !self.on;
        Some(ToggleEvent::Changed(self.on))
    }
}

impl Widget for Toggle {
    const SCHEMA: ComponentSchema = ComponentSchema::new("toggle").colors(&[
        (Role::Track, StyleKey::new("--toggle-track")),
        (Role::Thumb, StyleKey::new("--toggle-thumb")),
        (Role::Accent, StyleKey::new("--toggle-track-on")),
    ]);

    fn request(&self) -> &AppearanceRequest {
        &self.appearance
    }

    fn state(&self) -> StateFlags {
        StateFlags::empty()
            .with(StateFlags::DISABLED, self.disabled)
            .with(StateFlags::CHECKED, self.on)
    }

    fn view(&self) -> Node {
        Element::new("button")
            .appearance(self.appearance())
            .attr("type", "button")
            .attr("role", "switch")
            .attr("id", self.id.clone())
            .attr("aria-checked", if self.on { "true" } else { "false" })
            .flag("disabled", self.disabled)
            .child(
                Element::new("span")
                    .class("toggle-track")
                    .attr("aria-hidden", "true")
                    .child(Element::new("span").class("toggle-thumb")),
            )
            .child(Element::new("span").class("toggle-label").text(self.label.clone()))
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use understory_appearance::{ColorVision, CustomColorsBuilder, Variant};

    #[test]
    fn toggle_reports_new_position() {
        let mut t = Toggle::new("wifi", "Wi-Fi");
        assert_eq!(t.toggle(), Some(ToggleEvent::Changed(true)));
        assert!(t.state().contains(StateFlags::CHECKED));
        let view = t.view();
        assert_eq!(view.as_element().unwrap().get_attr("aria-checked"), Some("true"));
        assert_eq!(t.toggle(), Some(ToggleEvent::Changed(false)));
    }

    #[test]
    fn disabled_stays_put() {
        let mut t = Toggle::new("x", "X").on(true).disabled(true);
        assert_eq!(t.toggle(), None);
        assert!(t.on);
    }

    #[test]
    fn custom_colors_follow_color_vision() {
        let colors = CustomColorsBuilder::new()
            .set_css(understory_appearance::Role::Track, ColorVision::Normal, "#cccccc")
            .unwrap()
            .set_css(
                understory_appearance::Role::Track,
                ColorVision::Deuteranopia,
                "#0000ff",
            )
            .unwrap()
            .build();
        let t = Toggle::new("t", "T").with_appearance(
            AppearanceRequest::new()
                .variant(Variant::Custom)
                .color_vision(ColorVision::Deuteranopia)
                .custom_colors(colors),
        );
        let overrides = t.appearance().overrides;
        assert_eq!(overrides.get(StyleKey::new("--toggle-track")), Some("#0000ff"));
        assert_eq!(overrides.len(), 1);
    }
}
