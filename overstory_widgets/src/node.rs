// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Declarative output tree.
//!
//! Widgets describe what to show as a small tree of [`Node`]s. Each
//! [`Element`] carries its resolved class tokens and inline overrides
//! separately from its other attributes so hosts can apply them natively;
//! [`Node::to_html`] serializes the whole tree for markup-based hosts and
//! tests.

use std::borrow::Cow;
use std::fmt::Write as _;

use understory_appearance::{ResolvedAppearance, StyleKey, StyleOverrides, TokenList, TokenSlot};

/// Elements that never have children or a closing tag.
const VOID_TAGS: &[&str] = &["br", "hr", "img", "input"];

/// One node of widget output.
#[derive(Clone, Debug, PartialEq)]
pub enum Node {
    /// A tagged element.
    Element(Element),
    /// Text content.
    Text(String),
    /// A transparent sequence of nodes. An empty fragment renders nothing.
    Fragment(Vec<Node>),
}

impl Node {
    /// A text node.
    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    /// A fragment that renders nothing.
    #[must_use]
    pub fn empty() -> Self {
        Self::Fragment(Vec::new())
    }

    /// Returns `true` for a fragment with nothing in it.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Fragment(children) => children.iter().all(Self::is_empty),
            _ => false,
        }
    }

    /// The element, if this node is one.
    #[must_use]
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Self::Element(element) => Some(element),
            _ => None,
        }
    }

    /// Depth-first search for the first element matching `pred`, including
    /// this node.
    #[must_use]
    pub fn find(&self, pred: &dyn Fn(&Element) -> bool) -> Option<&Element> {
        match self {
            Self::Element(element) => {
                if pred(element) {
                    return Some(element);
                }
                element.children.iter().find_map(|child| child.find(pred))
            }
            Self::Fragment(children) => children.iter().find_map(|child| child.find(pred)),
            Self::Text(_) => None,
        }
    }

    /// Every element matching `pred`, in document order.
    #[must_use]
    pub fn find_all(&self, pred: &dyn Fn(&Element) -> bool) -> Vec<&Element> {
        let mut out = Vec::new();
        self.collect(pred, &mut out);
        out
    }

    fn collect<'a>(&'a self, pred: &dyn Fn(&Element) -> bool, out: &mut Vec<&'a Element>) {
        match self {
            Self::Element(element) => {
                if pred(element) {
                    out.push(element);
                }
                for child in &element.children {
                    child.collect(pred, out);
                }
            }
            Self::Fragment(children) => {
                for child in children {
                    child.collect(pred, out);
                }
            }
            Self::Text(_) => {}
        }
    }

    /// Concatenated text content.
    #[must_use]
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.push_text(&mut out);
        out
    }

    fn push_text(&self, out: &mut String) {
        match self {
            Self::Text(text) => out.push_str(text),
            Self::Element(element) => {
                for child in &element.children {
                    child.push_text(out);
                }
            }
            Self::Fragment(children) => {
                for child in children {
                    child.push_text(out);
                }
            }
        }
    }

    /// Serializes the tree as HTML.
    #[must_use]
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    fn write_html(&self, out: &mut String) {
        match self {
            Self::Text(text) => escape_into(out, text),
            Self::Element(element) => element.write_html(out),
            Self::Fragment(children) => {
                for child in children {
                    child.write_html(out);
                }
            }
        }
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Self::Element(element)
    }
}

/// A tagged element with attributes, class tokens, inline style and children.
#[derive(Clone, Debug, PartialEq)]
pub struct Element {
    tag: &'static str,
    attrs: Vec<(Cow<'static, str>, String)>,
    classes: TokenList,
    style: StyleOverrides,
    children: Vec<Node>,
}

impl Element {
    /// An empty element.
    #[must_use]
    pub fn new(tag: &'static str) -> Self {
        Self {
            tag,
            attrs: Vec::new(),
            classes: TokenList::new(),
            style: StyleOverrides::new(),
            children: Vec::new(),
        }
    }

    /// Takes classes and inline overrides from a resolved appearance.
    #[must_use]
    pub fn appearance(mut self, resolved: ResolvedAppearance) -> Self {
        self.classes = resolved.tokens;
        self.style.extend_from(&resolved.overrides);
        self
    }

    /// Appends a structural class after any resolved tokens.
    #[must_use]
    pub fn class(mut self, class: &'static str) -> Self {
        self.classes.push(TokenSlot::Extra, class);
        self
    }

    /// Appends `class` when `on` is true.
    #[must_use]
    pub fn class_if(self, class: &'static str, on: bool) -> Self {
        if on { self.class(class) } else { self }
    }

    /// Sets an attribute, replacing any previous value.
    #[must_use]
    pub fn attr(mut self, name: impl Into<Cow<'static, str>>, value: impl Into<String>) -> Self {
        let name = name.into();
        let value = value.into();
        match self.attrs.iter_mut().find(|(n, _)| *n == name) {
            Some(slot) => slot.1 = value,
            None => self.attrs.push((name, value)),
        }
        self
    }

    /// Sets an attribute when `value` is present.
    #[must_use]
    pub fn attr_opt(self, name: &'static str, value: Option<impl Into<String>>) -> Self {
        match value {
            Some(value) => self.attr(name, value),
            None => self,
        }
    }

    /// Sets a boolean attribute (present with an empty value) when `on` is true.
    #[must_use]
    pub fn flag(self, name: &'static str, on: bool) -> Self {
        if on { self.attr(name, "") } else { self }
    }

    /// Sets one inline style property.
    #[must_use]
    pub fn style(mut self, key: StyleKey, value: impl Into<String>) -> Self {
        self.style.set(key, value);
        self
    }

    /// Appends a child.
    #[must_use]
    pub fn child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    /// Appends a child when present.
    #[must_use]
    pub fn child_opt(self, child: Option<impl Into<Node>>) -> Self {
        match child {
            Some(child) => self.child(child),
            None => self,
        }
    }

    /// Appends children.
    #[must_use]
    pub fn children(mut self, children: impl IntoIterator<Item = Node>) -> Self {
        self.children.extend(children);
        self
    }

    /// Appends a text child.
    #[must_use]
    pub fn text(self, text: impl Into<String>) -> Self {
        self.child(Node::Text(text.into()))
    }

    /// The tag name.
    #[must_use]
    pub fn tag(&self) -> &'static str {
        self.tag
    }

    /// Value of the attribute `name`.
    #[must_use]
    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Returns `true` if the attribute `name` is present.
    #[must_use]
    pub fn has_attr(&self, name: &str) -> bool {
        self.get_attr(name).is_some()
    }

    /// Attributes in insertion order, excluding `class` and `style`.
    pub fn attrs(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.attrs.iter().map(|(n, v)| (n.as_ref(), v.as_str()))
    }

    /// Class tokens.
    #[must_use]
    pub fn classes(&self) -> &TokenList {
        &self.classes
    }

    /// Returns `true` if `class` is among the class tokens.
    #[must_use]
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.contains(class)
    }

    /// Inline style.
    #[must_use]
    pub fn inline_style(&self) -> &StyleOverrides {
        &self.style
    }

    /// Child nodes.
    #[must_use]
    pub fn child_nodes(&self) -> &[Node] {
        &self.children
    }

    fn write_html(&self, out: &mut String) {
        out.push('<');
        out.push_str(self.tag);
        if !self.classes.is_empty() {
            write_attr(out, "class", &self.classes.class_string());
        }
        for (name, value) in &self.attrs {
            write_attr(out, name, value);
        }
        if !self.style.is_empty() {
            write_attr(out, "style", &self.style.to_inline_style());
        }
        if VOID_TAGS.contains(&self.tag) {
            out.push_str(" />");
            return;
        }
        out.push('>');
        for child in &self.children {
            child.write_html(out);
        }
        let _ = write!(out, "</{}>", self.tag);
    }
}

fn write_attr(out: &mut String, name: &str, value: &str) {
    out.push(' ');
    out.push_str(name);
    if !value.is_empty() {
        out.push_str("=\"");
        escape_into(out, value);
        out.push('"');
    }
}

fn escape_into(out: &mut String, text: &str) {
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
}
