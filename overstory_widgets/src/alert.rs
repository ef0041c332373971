// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Inline status message.

use understory_appearance::{
    AppearanceRequest, ComponentSchema, Role, StyleKey, Token, Variant,
};

use crate::node::{Element, Node};
use crate::widget::Widget;

/// Semantic kind of an [`Alert`], independent of its color variant.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "kebab-case")
)]
pub enum AlertType {
    /// Information.
    Info,
    /// A completed action.
    Success,
    /// Something needs attention.
    Warning,
    /// Something failed.
    Error,
    /// No particular tone.
    Neutral,
}

impl AlertType {
    /// Kind token.
    #[must_use]
    pub const fn token(self) -> &'static str {
        match self {
            Self::Info => "type-info",
            Self::Success => "type-success",
            Self::Warning => "type-warning",
            Self::Error => "type-error",
            Self::Neutral => "type-neutral",
        }
    }

    const fn icon(self) -> &'static str {
        match self {
            Self::Info => "\u{1f4a1}",
            Self::Success => "\u{2705}",
            Self::Warning => "\u{26a0}\u{fe0f}",
            Self::Error => "\u{274c}",
            Self::Neutral => "\u{2139}\u{fe0f}",
        }
    }
}

/// ARIA role of an [`Alert`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "kebab-case")
)]
pub enum AlertRole {
    /// Interrupts: announced assertively.
    #[default]
    Alert,
    /// Advisory: announced politely.
    Status,
}

impl AlertRole {
    const fn as_str(self) -> &'static str {
        match self {
            Self::Alert => "alert",
            Self::Status => "status",
        }
    }

    const fn live(self) -> &'static str {
        match self {
            Self::Alert => "assertive",
            Self::Status => "polite",
        }
    }
}

/// Events emitted by [`Alert`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum AlertEvent {
    /// The user closed the alert.
    Dismissed,
}

/// A message box, optionally dismissible.
///
/// The leading icon follows the alert type when one is set, else the variant.
#[derive(Clone, Debug)]
pub struct Alert {
    /// Optional heading.
    pub title: Option<String>,
    /// Body text.
    pub message: String,
    /// Appearance props.
    pub appearance: AppearanceRequest,
    /// Semantic kind.
    pub kind: Option<AlertType>,
    /// ARIA role; also decides how urgently it is announced.
    pub role: AlertRole,
    /// Replaces the default icon.
    pub icon: Option<String>,
    /// Renders the leading icon (default: on).
    pub show_icon: bool,
    /// Accessible name.
    pub aria_label: Option<String>,
    /// Renders a close button.
    pub dismissible: bool,
    dismissed: bool,
}

impl Default for Alert {
    fn default() -> Self {
        Self {
            title: None,
            message: String::new(),
            appearance: AppearanceRequest::default(),
            kind: None,
            role: AlertRole::default(),
            icon: None,
            show_icon: true,
            aria_label: None,
            dismissible: false,
            dismissed: false,
        }
    }
}

impl Alert {
    /// An alert showing `message`.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            ..Self::default()
        }
    }

    /// Sets the heading.
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the appearance props.
    #[must_use]
    pub fn with_appearance(mut self, appearance: AppearanceRequest) -> Self {
        self.appearance = appearance;
        self
    }

    /// Sets the semantic kind.
    #[must_use]
    pub fn kind(mut self, kind: AlertType) -> Self {
        self.kind = Some(kind);
        self
    }

    /// Sets the ARIA role.
    #[must_use]
    pub fn role(mut self, role: AlertRole) -> Self {
        self.role = role;
        self
    }

    /// Replaces the default icon.
    #[must_use]
    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// Sets whether the icon is shown.
    #[must_use]
    pub fn show_icon(mut self, show: bool) -> Self {
        self.show_icon = show;
        self
    }

    /// Sets the accessible name.
    #[must_use]
    pub fn aria_label(mut self, label: impl Into<String>) -> Self {
        self.aria_label = Some(label.into());
        self
    }

    /// Sets whether the alert has a close button.
    #[must_use]
    pub fn dismissible(mut self, dismissible: bool) -> Self {
        self.dismissible = dismissible;
        self
    }

    /// Returns `true` once dismissed.
    #[must_use]
    pub fn is_dismissed(&self) -> bool {
        self.dismissed
    }

    /// Closes the alert. Fires once, and only for dismissible alerts.
    pub fn dismiss(&mut self) -> Option<AlertEvent> {
        if !self.dismissible || self.dismissed {
            return None;
        }
        self.dismissed = true;
        tracing::debug!(variant = %self.appearance.variant, "alert dismissed");
        Some(AlertEvent::Dismissed)
    }

    fn default_icon(&self) -> &'static str {
        if let Some(kind) = self.kind {
            return kind.icon();
        }
        match self.appearance.variant {
            Variant::Secondary => AlertType::Neutral.icon(),
            Variant::Success => AlertType::Success.icon(),
            Variant::Warning => AlertType::Warning.icon(),
            Variant::Danger => AlertType::Error.icon(),
            _ => AlertType::Info.icon(),
        }
    }
}

impl Widget for Alert {
    const SCHEMA: ComponentSchema = ComponentSchema::new("alert").colors(&[
        (Role::Background, StyleKey::new("--alert-bg")),
        (Role::Foreground, StyleKey::new("--alert-fg")),
        (Role::Border, StyleKey::new("--alert-border")),
        (Role::Accent, StyleKey::new("--alert-icon")),
    ]);

    fn request(&self) -> &AppearanceRequest {
        &self.appearance
    }

    fn kinds(&self) -> Vec<Token> {
        let mut kinds = Vec::new();
        if let Some(kind) = self.kind {
            kinds.push(Token::from_static(kind.token()));
        }
        if self.dismissible {
            kinds.push(Token::from_static("dismissible"));
        }
        kinds
    }

    fn view(&self) -> Node {
        if self.dismissed {
            return Node::empty();
        }
        let title = self
            .title
            .as_ref()
            .map(|t| Element::new("strong").class("alert-title").text(t.clone()));
        let icon = self.show_icon.then(|| {
            Element::new("span")
                .class("alert-icon")
                .attr("aria-hidden", "true")
                .text(self.icon.clone().unwrap_or_else(|| self.default_icon().into()))
        });
        let close = self.dismissible.then(|| {
            Element::new("button")
                .class("alert-dismiss")
                .attr("type", "button")
                .attr("aria-label", "Dismiss alert")
                .text("\u{00d7}")
        });
        Element::new("div")
            .appearance(self.appearance())
            .attr("role", self.role.as_str())
            .attr_opt("aria-label", self.aria_label.clone())
            .attr("aria-live", self.role.live())
            .child_opt(icon)
            .child(
                Element::new("div")
                    .class("alert-content")
                    .child_opt(title)
                    .child(Element::new("p").class("alert-message").text(self.message.clone())),
            )
            .child_opt(close)
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dismiss_fires_once() {
        let mut alert = Alert::new("Saved").dismissible(true);
        assert_eq!(alert.dismiss(), Some(AlertEvent::Dismissed));
        assert_eq!(alert.dismiss(), None);
        assert!(alert.view().is_empty());
        assert_eq!(alert.view().to_html(), "");
    }

    #[test]
    fn non_dismissible_ignores_dismiss() {
        let mut alert = Alert::new("Heads up");
        assert_eq!(alert.dismiss(), None);
        assert!(!alert.view().is_empty());
        assert!(alert.view().find(&|e| e.has_class("alert-dismiss")).is_none());
    }

    #[test]
    fn alert_role_is_assertive() {
        let alert = Alert::new("Failed")
            .title("Error")
            .dismissible(true)
            .show_icon(false)
            .with_appearance(AppearanceRequest::new().variant(Variant::Danger));
        let view = alert.view();
        let root = view.as_element().unwrap();
        assert_eq!(root.get_attr("role"), Some("alert"));
        assert_eq!(root.get_attr("aria-live"), Some("assertive"));
        assert_eq!(root.classes().class_string(), "alert danger md dismissible");
        assert_eq!(view.text_content(), "ErrorFailed\u{00d7}");
    }

    #[test]
    fn status_role_is_polite() {
        let view = Alert::new("Synced").role(AlertRole::Status).view();
        let root = view.as_element().unwrap();
        assert_eq!(root.get_attr("role"), Some("status"));
        assert_eq!(root.get_attr("aria-live"), Some("polite"));
    }

    #[test]
    fn icon_follows_type_then_variant() {
        let icon_of = |alert: Alert| {
            let view = alert.view();
            view.find(&|e| e.has_class("alert-icon"))
                .map(|e| Node::Element(e.clone()).text_content())
        };
        let danger = AppearanceRequest::new().variant(Variant::Danger);
        assert_eq!(
            icon_of(Alert::new("x").with_appearance(danger.clone())).as_deref(),
            Some("\u{274c}")
        );
        assert_eq!(
            icon_of(Alert::new("x").with_appearance(danger).kind(AlertType::Success)).as_deref(),
            Some("\u{2705}")
        );
        assert_eq!(icon_of(Alert::new("x").icon("!")).as_deref(), Some("!"));
        assert_eq!(icon_of(Alert::new("x").show_icon(false)), None);
    }

    #[test]
    fn type_token_precedes_dismissible() {
        let alert = Alert::new("x").kind(AlertType::Warning).dismissible(true);
        assert_eq!(
            alert.appearance().class_string(),
            "alert primary md type-warning dismissible"
        );
    }
}
