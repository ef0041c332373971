// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tooltip attached to a trigger node.
//!
//! Visibility and placement live in a [`TooltipController`]; this widget
//! adds appearance resolution and the markup: a wrapper around the trigger
//! and, while visible, a `role="tooltip"` bubble positioned from the current
//! [`Placement`]. A tooltip without content, or a disabled one, renders its
//! trigger unchanged.

use understory_appearance::{
    AppearanceRequest, ComponentSchema, Role, StateFlags, StyleKey, Token,
};
use understory_placement::{
    Geometry, Placement, Reflow, TimerId, TooltipConfig, TooltipController, TooltipInput,
    VisibilityChange,
};

use crate::node::{Element, Node};
use crate::widget::Widget;

const LEFT: StyleKey = StyleKey::new("left");
const TOP: StyleKey = StyleKey::new("top");
const TRANSFORM: StyleKey = StyleKey::new("transform");
const MAX_WIDTH: StyleKey = StyleKey::new("max-width");
const OFFSET: StyleKey = StyleKey::new("--tooltip-offset");

/// Events emitted by [`Tooltip`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TooltipEvent {
    /// The tooltip appeared (`true`) or disappeared (`false`).
    OpenChanged(bool),
}

impl From<VisibilityChange> for TooltipEvent {
    fn from(change: VisibilityChange) -> Self {
        Self::OpenChanged(change == VisibilityChange::Opened)
    }
}

/// A tooltip around `trigger`.
#[derive(Clone, Debug)]
pub struct Tooltip {
    /// Id of the bubble; the trigger wrapper references it while visible.
    pub id: String,
    /// The element the tooltip describes.
    pub trigger: Node,
    /// Appearance props for the bubble.
    pub appearance: AppearanceRequest,
    /// Accessible name for the bubble, when the text alone is not enough.
    pub aria_label: Option<String>,
    content: String,
    config: TooltipConfig,
    controller: TooltipController,
}

impl Tooltip {
    /// A tooltip with the default configuration.
    #[must_use]
    pub fn new(id: impl Into<String>, content: impl Into<String>, trigger: impl Into<Node>) -> Self {
        let content = content.into();
        let config = TooltipConfig::default();
        Self {
            id: id.into(),
            trigger: trigger.into(),
            appearance: AppearanceRequest::default(),
            aria_label: None,
            controller: TooltipController::new(config, !content.is_empty()),
            content,
            config,
        }
    }

    /// Sets the configuration.
    #[must_use]
    pub fn with_config(mut self, config: TooltipConfig) -> Self {
        self.configure(config);
        self
    }

    /// Sets the appearance props.
    #[must_use]
    pub fn with_appearance(mut self, appearance: AppearanceRequest) -> Self {
        self.appearance = appearance;
        self
    }

    /// Sets the bubble's accessible name.
    #[must_use]
    pub fn aria_label(mut self, label: impl Into<String>) -> Self {
        self.aria_label = Some(label.into());
        self
    }

    /// Applies a new configuration.
    pub fn configure(&mut self, config: TooltipConfig) -> Option<TooltipEvent> {
        self.config = config;
        self.controller.configure(config).map(Into::into)
    }

    /// The configuration.
    #[must_use]
    pub fn config(&self) -> &TooltipConfig {
        &self.config
    }

    /// The tooltip text.
    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Replaces the text; empty text closes the tooltip.
    pub fn set_content(&mut self, content: impl Into<String>) -> Option<TooltipEvent> {
        self.content = content.into();
        self.controller
            .set_content(!self.content.is_empty())
            .map(Into::into)
    }

    /// The visibility and placement controller.
    #[must_use]
    pub fn controller(&self) -> &TooltipController {
        &self.controller
    }

    /// Returns `true` while the bubble is shown.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.controller.is_visible()
    }

    /// Current placement while visible.
    #[must_use]
    pub fn placement(&self) -> Option<Placement> {
        self.controller.placement()
    }

    /// When the host should next call [`Tooltip::tick`], in milliseconds.
    #[must_use]
    pub fn deadline(&self) -> Option<u64> {
        self.controller.state().deadline()
    }

    /// Id of the pending timer, for hosts that schedule callbacks.
    #[must_use]
    pub fn timer_id(&self) -> Option<TimerId> {
        self.controller.state().timer_id()
    }

    /// Routes a trigger event.
    pub fn handle(
        &mut self,
        input: TooltipInput,
        now: u64,
        geometry: &impl Geometry,
    ) -> Option<TooltipEvent> {
        self.controller.handle(input, now, geometry).map(Into::into)
    }

    /// Advances the clock.
    pub fn tick(&mut self, now: u64, geometry: &impl Geometry) -> Option<TooltipEvent> {
        self.controller.tick(now, geometry).map(Into::into)
    }

    /// Delivers a host-scheduled timer callback.
    pub fn fire(&mut self, id: TimerId, now: u64, geometry: &impl Geometry) -> Option<TooltipEvent> {
        self.controller.fire(id, now, geometry).map(Into::into)
    }

    /// Shows or hides the bubble immediately.
    pub fn set_open(&mut self, open: bool, geometry: &impl Geometry) -> Option<TooltipEvent> {
        self.controller.set_open(open, geometry).map(Into::into)
    }

    /// Repositions after a resize or scroll while visible.
    pub fn on_viewport_change(
        &mut self,
        reason: Reflow,
        geometry: &impl Geometry,
    ) -> Option<Placement> {
        self.controller.on_viewport_change(reason, geometry)
    }

    fn bubble(&self) -> Element {
        let mut bubble = Element::new("div")
            .appearance(self.appearance())
            .attr("id", self.id.clone())
            .attr("role", "tooltip")
            .attr_opt("aria-label", self.aria_label.clone())
            .style(MAX_WIDTH, format!("{}px", self.config.max_width))
            .style(OFFSET, format!("{}px", self.config.offset));
        if let Some(placement) = self.placement() {
            bubble = bubble
                .style(LEFT, format!("{}px", placement.anchor.x))
                .style(TOP, format!("{}px", placement.anchor.y))
                .style(TRANSFORM, placement.css_transform());
        }
        let arrow = self.config.arrow.then(|| {
            Element::new("span")
                .class("tooltip-arrow")
                .attr("aria-hidden", "true")
        });
        bubble
            .child(
                Element::new("div")
                    .class("tooltip-content")
                    .text(self.content.clone()),
            )
            .child_opt(arrow)
    }
}

impl Widget for Tooltip {
    const SCHEMA: ComponentSchema = ComponentSchema::new("tooltip").colors(&[
        (Role::Background, StyleKey::new("--tooltip-bg")),
        (Role::Foreground, StyleKey::new("--tooltip-fg")),
        (Role::Border, StyleKey::new("--tooltip-border")),
    ]);

    fn request(&self) -> &AppearanceRequest {
        &self.appearance
    }

    fn kinds(&self) -> Vec<Token> {
        self.placement()
            .map(|p| p.side)
            .or(self.config.side.explicit())
            .map(|side| Token::from_static(side.as_str()))
            .into_iter()
            .collect()
    }

    fn state(&self) -> StateFlags {
        StateFlags::empty()
            .with(StateFlags::DISABLED, self.config.disabled)
            .with(StateFlags::OPEN, self.is_visible())
    }

    fn view(&self) -> Node {
        if self.content.is_empty() || self.config.disabled {
            return self.trigger.clone();
        }
        let visible = self.is_visible();
        Element::new("span")
            .class("tooltip-trigger")
            .attr_opt("aria-describedby", visible.then(|| self.id.clone()))
            .child(self.trigger.clone())
            .child_opt(visible.then(|| self.bubble()))
            .into()
    }
}
