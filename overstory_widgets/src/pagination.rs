// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Page navigation.

use understory_appearance::{AppearanceRequest, ComponentSchema, Role, StateFlags, StyleKey};

use crate::node::{Element, Node};
use crate::widget::Widget;

/// One slot in the page list.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PageItem {
    /// A 1-based page number.
    Page(usize),
    /// A collapsed run of pages.
    Ellipsis,
}

/// Events emitted by [`Pagination`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PaginationEvent {
    /// The current page changed; carries the new 1-based page.
    Changed(usize),
}

/// Navigation over `total_pages` pages.
///
/// A window of at most `max_visible` consecutive pages slides to keep the
/// current page centred where it can; pages outside the window are marked
/// by an ellipsis at that end. First/last and previous/next buttons flank the
/// list. A single page renders nothing.
#[derive(Clone, Debug)]
pub struct Pagination {
    /// Appearance props.
    pub appearance: AppearanceRequest,
    /// Suppresses navigation.
    pub disabled: bool,
    /// Renders jump-to-first and jump-to-last buttons (default: on).
    pub show_first_last: bool,
    /// Renders previous and next buttons (default: on).
    pub show_prev_next: bool,
    /// Accessible name of the navigation landmark.
    pub aria_label: String,
    total_pages: usize,
    current: usize,
    max_visible: usize,
}

impl Pagination {
    /// Pagination over `total_pages`, on page 1, showing up to seven pages.
    #[must_use]
    pub fn new(total_pages: usize) -> Self {
        Self {
            appearance: AppearanceRequest::default(),
            disabled: false,
            show_first_last: true,
            show_prev_next: true,
            aria_label: "Pagination".into(),
            total_pages,
            current: 1,
            max_visible: 7,
        }
    }

    /// Sets the current page, clamped to `1..=total_pages`.
    #[must_use]
    pub fn current(mut self, page: usize) -> Self {
        self.current = page.clamp(1, self.total_pages.max(1));
        self
    }

    /// Sets the widest run of page buttons; at least one is always shown.
    #[must_use]
    pub fn max_visible(mut self, pages: usize) -> Self {
        self.max_visible = pages.max(1);
        self
    }

    /// Sets the appearance props.
    #[must_use]
    pub fn with_appearance(mut self, appearance: AppearanceRequest) -> Self {
        self.appearance = appearance;
        self
    }

    /// Sets whether navigation is disabled.
    #[must_use]
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Sets whether the first/last buttons are shown.
    #[must_use]
    pub fn show_first_last(mut self, show: bool) -> Self {
        self.show_first_last = show;
        self
    }

    /// Sets whether the previous/next buttons are shown.
    #[must_use]
    pub fn show_prev_next(mut self, show: bool) -> Self {
        self.show_prev_next = show;
        self
    }

    /// Sets the landmark's accessible name.
    #[must_use]
    pub fn aria_label(mut self, label: impl Into<String>) -> Self {
        self.aria_label = label.into();
        self
    }

    /// The current 1-based page.
    #[must_use]
    pub fn page(&self) -> usize {
        self.current
    }

    /// Number of pages.
    #[must_use]
    pub fn total_pages(&self) -> usize {
        self.total_pages
    }

    /// The pages inside the sliding window.
    fn window(&self) -> (usize, usize) {
        let visible = self.visible_pages();
        let half = visible / 2;
        let mut start = self.current.saturating_sub(half).max(1);
        let end = start.saturating_add(visible - 1).min(self.total_pages);
        if end + 1 - start < visible {
            start = (end + 1).saturating_sub(visible).max(1);
        }
        (start, end)
    }

    /// `max_visible`, never more than there are pages.
    fn visible_pages(&self) -> usize {
        self.max_visible.min(self.total_pages).max(1)
    }

    /// The page list, with an ellipsis at each end that hides pages.
    #[must_use]
    pub fn items(&self) -> Vec<PageItem> {
        let (start, end) = self.window();
        let mut items = Vec::with_capacity(self.visible_pages() + 2);
        if start > 1 {
            items.push(PageItem::Ellipsis);
        }
        items.extend((start..=end).map(PageItem::Page));
        if end < self.total_pages {
            items.push(PageItem::Ellipsis);
        }
        items
    }

    /// Moves to `page` when it is in range and not already current.
    pub fn go_to(&mut self, page: usize) -> Option<PaginationEvent> {
        if self.disabled || page == 0 || page > self.total_pages || page == self.current {
            return None;
        }
        tracing::debug!(from = self.current, to = page, "page changed");
        self.current = page;
        Some(PaginationEvent::Changed(page))
    }

    /// Moves forward one page.
    pub fn next(&mut self) -> Option<PaginationEvent> {
        self.go_to(self.current + 1)
    }

    /// Moves back one page.
    pub fn prev(&mut self) -> Option<PaginationEvent> {
        self.go_to(self.current.saturating_sub(1))
    }

    /// Jumps to page 1.
    pub fn first(&mut self) -> Option<PaginationEvent> {
        self.go_to(1)
    }

    /// Jumps to the last page.
    pub fn last(&mut self) -> Option<PaginationEvent> {
        self.go_to(self.total_pages)
    }
}

fn nav_button(class: &'static str, label: &'static str, glyph: &str, enabled: bool) -> Node {
    Element::new("li")
        .child(
            Element::new("button")
                .class(class)
                .class_if("disabled", !enabled)
                .attr("type", "button")
                .attr("aria-label", label)
                .flag("disabled", !enabled)
                .text(glyph),
        )
        .into()
}

impl Widget for Pagination {
    const SCHEMA: ComponentSchema = ComponentSchema::new("pagination").colors(&[
        (Role::Background, StyleKey::new("--pagination-bg")),
        (Role::Foreground, StyleKey::new("--pagination-fg")),
        (Role::Border, StyleKey::new("--pagination-border")),
        (Role::Accent, StyleKey::new("--pagination-current-bg")),
    ]);

    fn request(&self) -> &AppearanceRequest {
        &self.appearance
    }

    fn state(&self) -> StateFlags {
        StateFlags::empty().with(StateFlags::DISABLED, self.disabled)
    }

    fn view(&self) -> Node {
        if self.total_pages <= 1 {
            return Node::empty();
        }
        let back = !self.disabled && self.current > 1;
        let forward = !self.disabled && self.current < self.total_pages;
        let mut list = Vec::new();
        if self.show_first_last {
            list.push(nav_button("pagination-first", "First page", "\u{00ab}", back));
        }
        if self.show_prev_next {
            list.push(nav_button("pagination-prev", "Previous page", "\u{2039}", back));
        }
        for item in self.items() {
            let li = match item {
                PageItem::Page(page) => {
                    let current = page == self.current;
                    Element::new("li").child(
                        Element::new("button")
                            .class("pagination-page")
                            .class_if("selected", current)
                            .class_if("disabled", self.disabled)
                            .attr("type", "button")
                            .attr("aria-label", format!("Page {page}"))
                            .attr_opt("aria-current", current.then_some("page"))
                            .flag("disabled", self.disabled)
                            .text(page.to_string()),
                    )
                }
                PageItem::Ellipsis => Element::new("li").child(
                    Element::new("span")
                        .class("pagination-ellipsis")
                        .attr("aria-hidden", "true")
                        .text("\u{2026}"),
                ),
            };
            list.push(li.into());
        }
        if self.show_prev_next {
            list.push(nav_button("pagination-next", "Next page", "\u{203a}", forward));
        }
        if self.show_first_last {
            list.push(nav_button("pagination-last", "Last page", "\u{00bb}", forward));
        }
        Element::new("nav")
            .appearance(self.appearance())
            .attr("aria-label", self.aria_label.clone())
            .child(Element::new("ul").class("pagination-list").children(list))
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use PageItem::{Ellipsis, Page};

    #[test]
    fn short_ranges_list_every_page() {
        assert_eq!(
            Pagination::new(5).items(),
            [Page(1), Page(2), Page(3), Page(4), Page(5)]
        );
        assert!(Pagination::new(0).items().is_empty());
    }

    #[test]
    fn window_slides_with_current() {
        let p = Pagination::new(10);
        assert_eq!(
            p.items(),
            [Page(1), Page(2), Page(3), Page(4), Page(5), Page(6), Page(7), Ellipsis]
        );
        let p = Pagination::new(10).current(5);
        assert_eq!(
            p.items(),
            [Ellipsis, Page(2), Page(3), Page(4), Page(5), Page(6), Page(7), Page(8), Ellipsis]
        );
        let p = Pagination::new(10).current(10);
        assert_eq!(
            p.items(),
            [Ellipsis, Page(4), Page(5), Page(6), Page(7), Page(8), Page(9), Page(10)]
        );
    }

    #[test]
    fn narrow_window() {
        let p = Pagination::new(20).current(10).max_visible(3);
        assert_eq!(p.items(), [Ellipsis, Page(9), Page(10), Page(11), Ellipsis]);
        let p = Pagination::new(20).current(10).max_visible(0);
        assert_eq!(p.items(), [Ellipsis, Page(10), Ellipsis]);
    }

    #[test]
    fn oversized_window_lists_every_page() {
        let p = Pagination::new(10).current(5).max_visible(usize::MAX);
        assert_eq!(p.items(), (1..=10).map(Page).collect::<Vec<_>>());
        assert!(Pagination::new(0).max_visible(usize::MAX).items().is_empty());
    }

    #[test]
    fn single_page_renders_nothing() {
        assert!(Pagination::new(1).view().is_empty());
        assert!(Pagination::new(0).view().is_empty());
    }

    #[test]
    fn first_and_last() {
        let mut p = Pagination::new(9).current(4);
        assert_eq!(p.last(), Some(PaginationEvent::Changed(9)));
        assert_eq!(p.last(), None);
        assert_eq!(p.first(), Some(PaginationEvent::Changed(1)));
        let view = Pagination::new(9).show_first_last(false).view();
        assert!(view.find(&|e| e.has_class("pagination-first")).is_none());
        assert!(view.find(&|e| e.has_class("pagination-prev")).is_some());
    }

    #[test]
    fn navigation_stays_in_range() {
        let mut p = Pagination::new(3);
        assert_eq!(p.prev(), None);
        assert_eq!(p.next(), Some(PaginationEvent::Changed(2)));
        assert_eq!(p.go_to(3), Some(PaginationEvent::Changed(3)));
        assert_eq!(p.next(), None);
        assert_eq!(p.go_to(3), None);
        assert_eq!(p.go_to(0), None);
        assert_eq!(p.go_to(4), None);
        let mut off = Pagination::new(3).disabled(true);
        assert_eq!(off.next(), None);
    }

    #[test]
    fn marks_current_page() {
        let p = Pagination::new(4).current(2);
        let view = p.view();
        let current = view
            .find(&|e| e.get_attr("aria-current") == Some("page"))
            .unwrap();
        assert_eq!(current.get_attr("aria-label"), Some("Page 2"));
        let prev = view.find(&|e| e.has_class("pagination-prev")).unwrap();
        assert!(!prev.has_attr("disabled"));
        let next = view.find(&|e| e.has_class("pagination-next")).unwrap();
        assert!(!next.has_attr("disabled"));
        let first = Pagination::new(4).view();
        let prev = first.find(&|e| e.has_class("pagination-prev")).unwrap();
        assert!(prev.has_attr("disabled"));
        let root = first.as_element().unwrap();
        assert_eq!(root.get_attr("aria-label"), Some("Pagination"));
    }
}
