// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Location trail.

use understory_appearance::{AppearanceRequest, ComponentSchema, Role, StyleKey};

use crate::node::{Element, Node};
use crate::widget::Widget;

/// One step of a [`Breadcrumb`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Crumb {
    /// Visible label.
    pub label: String,
    /// Link target; the last crumb is never linked.
    pub href: Option<String>,
    /// Rendered as plain text and never activated.
    pub disabled: bool,
}

impl Crumb {
    /// An unlinked crumb.
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            ..Self::default()
        }
    }

    /// A linked crumb.
    #[must_use]
    pub fn link(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: Some(href.into()),
            disabled: false,
        }
    }

    /// Sets whether the crumb is disabled.
    #[must_use]
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }
}

/// A visible slot in a collapsed trail.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum CrumbSlot<'a> {
    /// The leading home crumb.
    Home(&'a str),
    /// The crumb at this index.
    Item(usize, &'a Crumb),
    /// Hidden crumbs.
    Ellipsis,
}

/// Events emitted by [`Breadcrumb`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum BreadcrumbEvent {
    /// The home crumb was activated.
    Home,
    /// The crumb at this index was activated.
    Activated(usize),
}

/// A trail of links ending at the current page.
#[derive(Clone, Debug)]
pub struct Breadcrumb {
    /// The trail, root first.
    pub items: Vec<Crumb>,
    /// Separator glyph.
    pub separator: String,
    /// Collapse threshold counting the ellipsis; values below 3 act as 3.
    pub max_items: Option<usize>,
    /// Label of a leading home crumb, when shown.
    pub home: Option<String>,
    /// Accessible name of the navigation landmark.
    pub aria_label: String,
    /// Appearance props.
    pub appearance: AppearanceRequest,
}

impl Breadcrumb {
    /// A trail with chevron separators and no collapsing.
    #[must_use]
    pub fn new(items: Vec<Crumb>) -> Self {
        Self {
            items,
            separator: String::from("\u{203a}"),
            max_items: None,
            home: None,
            aria_label: String::from("Breadcrumb"),
            appearance: AppearanceRequest::default(),
        }
    }

    /// Sets the separator.
    #[must_use]
    pub fn separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    /// Sets the collapse threshold.
    #[must_use]
    pub fn max_items(mut self, max: usize) -> Self {
        self.max_items = Some(max);
        self
    }

    /// Prepends a home crumb labelled `label`.
    #[must_use]
    pub fn home(mut self, label: impl Into<String>) -> Self {
        self.home = Some(label.into());
        self
    }

    /// Sets the landmark's accessible name.
    #[must_use]
    pub fn aria_label(mut self, label: impl Into<String>) -> Self {
        self.aria_label = label.into();
        self
    }

    /// Sets the appearance props.
    #[must_use]
    pub fn with_appearance(mut self, appearance: AppearanceRequest) -> Self {
        self.appearance = appearance;
        self
    }

    /// The visible slots.
    ///
    /// A trail longer than `max_items` keeps its first crumb, an ellipsis,
    /// and the last `max_items - 2` crumbs. The home crumb, if any, leads and
    /// is not counted.
    #[must_use]
    pub fn visible(&self) -> Vec<CrumbSlot<'_>> {
        let mut slots: Vec<CrumbSlot<'_>> =
            self.home.as_deref().map(CrumbSlot::Home).into_iter().collect();
        let all = self.items.iter().enumerate().map(|(i, c)| CrumbSlot::Item(i, c));
        match self.max_items.map(|m| m.max(3)) {
            Some(max) if self.items.len() > max => {
                let tail = self.items.len() - (max - 2);
                slots.push(CrumbSlot::Item(0, &self.items[0]));
                slots.push(CrumbSlot::Ellipsis);
                slots.extend(all.skip(tail));
            }
            _ => slots.extend(all),
        }
        slots
    }

    fn is_last(&self, index: usize) -> bool {
        index + 1 == self.items.len()
    }

    /// Activates the crumb at `index`; the current page and disabled crumbs
    /// do nothing.
    pub fn activate(&mut self, index: usize) -> Option<BreadcrumbEvent> {
        let crumb = self.items.get(index)?;
        if crumb.disabled || self.is_last(index) {
            return None;
        }
        tracing::debug!(index, label = %crumb.label, "breadcrumb activated");
        Some(BreadcrumbEvent::Activated(index))
    }

    /// Activates the home crumb, unless it is the only crumb.
    pub fn activate_home(&mut self) -> Option<BreadcrumbEvent> {
        (self.home.is_some() && !self.items.is_empty()).then_some(BreadcrumbEvent::Home)
    }
}

impl Widget for Breadcrumb {
    const SCHEMA: ComponentSchema = ComponentSchema::new("breadcrumb").colors(&[
        (Role::Foreground, StyleKey::new("--breadcrumb-fg")),
        (Role::Accent, StyleKey::new("--breadcrumb-link")),
        (Role::Hover, StyleKey::new("--breadcrumb-link-hover")),
    ]);

    fn request(&self) -> &AppearanceRequest {
        &self.appearance
    }

    fn view(&self) -> Node {
        let slots = self.visible();
        if slots.is_empty() {
            return Node::empty();
        }
        let count = slots.len();
        let list = slots.into_iter().enumerate().map(|(n, slot)| {
            let current = n + 1 == count;
            let content = match slot {
                CrumbSlot::Ellipsis => Element::new("span")
                    .class("breadcrumb-ellipsis")
                    .attr("aria-label", "More")
                    .text("\u{2026}"),
                _ if current => {
                    let label = match slot {
                        CrumbSlot::Home(label) => label,
                        CrumbSlot::Item(_, crumb) => crumb.label.as_str(),
                        CrumbSlot::Ellipsis => "",
                    };
                    Element::new("span")
                        .class("breadcrumb-current")
                        .attr("aria-current", "page")
                        .text(label)
                }
                CrumbSlot::Home(label) => Element::new("button")
                    .class("breadcrumb-home")
                    .attr("type", "button")
                    .text(label),
                CrumbSlot::Item(_, crumb) => match &crumb.href {
                    Some(href) if !crumb.disabled => Element::new("a")
                        .class("breadcrumb-link")
                        .attr("href", href.clone())
                        .text(crumb.label.clone()),
                    _ => Element::new("span")
                        .class("breadcrumb-text")
                        .class_if("disabled", crumb.disabled)
                        .text(crumb.label.clone()),
                },
            };
            let separator = (!current).then(|| {
                Element::new("span")
                    .class("breadcrumb-separator")
                    .attr("aria-hidden", "true")
                    .text(self.separator.clone())
            });
            Element::new("li")
                .class("breadcrumb-item")
                .child(content)
                .child_opt(separator)
                .into()
        });
        Element::new("nav")
            .appearance(self.appearance())
            .attr("aria-label", self.aria_label.clone())
            .child(Element::new("ol").class("breadcrumb-list").children(list))
            .into()
    }
}
