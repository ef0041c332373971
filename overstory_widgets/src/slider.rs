// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Continuous value picker.
//!
//! The filled portion of the track is not painted imperatively: the value
//! maps to [`Slider::percent`], and the view writes that percentage into the
//! fill and thumb node styles.

use understory_appearance::{
    AppearanceRequest, ComponentSchema, Role, StateFlags, StyleKey, Token,
};

use crate::node::{Element, Node};
use crate::widget::{Orientation, Widget};

const WIDTH: StyleKey = StyleKey::new("width");
const HEIGHT: StyleKey = StyleKey::new("height");
const LEFT: StyleKey = StyleKey::new("left");
const BOTTOM: StyleKey = StyleKey::new("bottom");

/// Page steps span this many steps.
const PAGE_STEPS: f64 = 10.0;

/// Events emitted by [`Slider`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum SliderEvent {
    /// The value changed.
    Changed(f64),
}

/// A slider over `[min, max]` in increments of `step`.
#[derive(Clone, Debug)]
pub struct Slider {
    /// Element id.
    pub id: String,
    /// Optional visible label.
    pub label: Option<String>,
    /// Layout axis.
    pub orientation: Orientation,
    /// Appearance props.
    pub appearance: AppearanceRequest,
    /// Suppresses changes.
    pub disabled: bool,
    /// Renders the numeric value next to the track (default: on).
    pub show_value: bool,
    min: f64,
    max: f64,
    step: f64,
    value: f64,
}

impl Slider {
    /// A slider over `[min, max]` with step 1, starting at `min`.
    ///
    /// A reversed range collapses to `min`.
    #[must_use]
    pub fn new(id: impl Into<String>, min: f64, max: f64) -> Self {
        let max = if max < min { min } else { max };
        Self {
            id: id.into(),
            label: None,
            orientation: Orientation::Horizontal,
            appearance: AppearanceRequest::default(),
            disabled: false,
            show_value: true,
            min,
            max,
            step: 1.0,
            value: min,
        }
    }

    /// Sets the label.
    #[must_use]
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Sets the increment. Non-positive steps disable snapping.
    #[must_use]
    pub fn step(mut self, step: f64) -> Self {
        self.step = step;
        self
    }

    /// Sets the initial value, clamped and snapped.
    #[must_use]
    pub fn value(mut self, value: f64) -> Self {
        self.value = self.normalize(value);
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

    /// Sets whether the slider is disabled.
    #[must_use]
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Sets whether the value is rendered.
    #[must_use]
    pub fn show_value(mut self, show: bool) -> Self {
        self.show_value = show;
        self
    }

    /// Current value.
    #[must_use]
    pub fn current(&self) -> f64 {
        self.value
    }

    /// Lower bound.
    #[must_use]
    pub fn min(&self) -> f64 {
        self.min
    }

    /// Upper bound.
    #[must_use]
    pub fn max(&self) -> f64 {
        self.max
    }

    /// Position of the value within the range, `0.0..=100.0`.
    #[must_use]
    pub fn percent(&self) -> f64 {
        let span = self.max - self.min;
        if span <= 0.0 {
            0.0
        } else {
            ((self.value - self.min) / span * 100.0).clamp(0.0, 100.0)
        }
    }

    fn normalize(&self, value: f64) -> f64 {
        if value.is_nan() {
            return self.value;
        }
        let snapped = if self.step > 0.0 {
            let raw = self.min + ((value - self.min) / self.step).round() * self.step;
            // Drop the binary error from the multiply, so 0.1 steps read 0.3.
            let scale = decimal_scale(self.step).max(decimal_scale(self.min));
            (raw * scale).round() / scale
        } else {
            value
        };
        snapped.clamp(self.min, self.max)
    }

    /// Sets the value, clamped to the range and snapped to the step.
    pub fn set_value(&mut self, value: f64) -> Option<SliderEvent> {
        if self.disabled {
            return None;
        }
        let next = self.normalize(value);
        if next == self.value {
            return None;
        }
        self.value = next;
        Some(SliderEvent::Changed(next))
    }

    /// One step up.
    pub fn step_up(&mut self) -> Option<SliderEvent> {
        self.set_value(self.value + self.step.max(0.0))
    }

    /// One step down.
    pub fn step_down(&mut self) -> Option<SliderEvent> {
        self.set_value(self.value - self.step.max(0.0))
    }

    /// Ten steps up.
    pub fn page_up(&mut self) -> Option<SliderEvent> {
        self.set_value(self.value + self.step.max(0.0) * PAGE_STEPS)
    }

    /// Ten steps down.
    pub fn page_down(&mut self) -> Option<SliderEvent> {
        self.set_value(self.value - self.step.max(0.0) * PAGE_STEPS)
    }

    /// Jumps to the minimum.
    pub fn home(&mut self) -> Option<SliderEvent> {
        self.set_value(self.min)
    }

    /// Jumps to the maximum.
    ///
    /// `max` snaps like any other value, as on native range inputs: `0..10`
    /// in steps of 3 ends at 9.
    pub fn end(&mut self) -> Option<SliderEvent> {
        self.set_value(self.max)
    }
}

impl Widget for Slider {
    const SCHEMA: ComponentSchema = ComponentSchema::new("slider")
        .colors(&[
            (Role::Track, StyleKey::new("--slider-track")),
            (Role::Border, StyleKey::new("--slider-track-border")),
            (Role::Thumb, StyleKey::new("--slider-thumb")),
            (Role::Accent, StyleKey::new("--slider-fill")),
        ])
        .low_vision(&[StyleKey::FONT_SIZE, StyleKey::new("--slider-label-font-size")]);

    fn request(&self) -> &AppearanceRequest {
        &self.appearance
    }

    fn kinds(&self) -> Vec<Token> {
        vec![Token::from_static(self.orientation.as_str())]
    }

    fn state(&self) -> StateFlags {
        StateFlags::empty().with(StateFlags::DISABLED, self.disabled)
    }

    fn view(&self) -> Node {
        let label_id = format!("{}-label", self.id);
        let percent = format!("{}%", self.percent());
        let (extent, position) = match self.orientation {
            Orientation::Horizontal => (WIDTH, LEFT),
            Orientation::Vertical => (HEIGHT, BOTTOM),
        };
        let label = self.label.as_ref().map(|text| {
            Element::new("span")
                .class("slider-label")
                .attr("id", label_id.clone())
                .text(text.clone())
        });
        let thumb = Element::new("div")
            .class("slider-thumb")
            .attr("id", self.id.clone())
            .attr("role", "slider")
            .attr("tabindex", if self.disabled { "-1" } else { "0" })
            .attr("aria-valuemin", self.min.to_string())
            .attr("aria-valuemax", self.max.to_string())
            .attr("aria-valuenow", self.value.to_string())
            .attr("aria-orientation", self.orientation.as_str())
            .attr_opt("aria-labelledby", self.label.as_ref().map(|_| label_id.clone()))
            .attr_opt("aria-label", self.label.is_none().then_some("Slider"))
            .attr_opt("aria-disabled", self.disabled.then_some("true"))
            .style(position, percent.clone());
        let track = Element::new("div")
            .class("slider-track")
            .child(Element::new("div").class("slider-fill").style(extent, percent))
            .child(thumb);
        let output = self.show_value.then(|| {
            Element::new("output")
                .class("slider-value")
                .attr("for", self.id.clone())
                .text(self.value.to_string())
        });
        Element::new("div")
            .appearance(self.appearance())
            .child_opt(label)
            .child(track)
            .child_opt(output)
            .into()
    }
}

/// The power of ten that makes `x` whole, up to `1e12`.
fn decimal_scale(x: f64) -> f64 {
    let mut scale = 1.0;
    while scale < 1e12 {
        let scaled = x * scale;
        if (scaled - scaled.round()).abs() < 1e-9 {
            break;
        }
        scale *= 10.0;
    }
    scale
}
