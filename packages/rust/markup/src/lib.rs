//! In-memory markup tree and its serializer.
//!
//! An [`Element`] owns its attributes and children outright; children are
//! moved in by value, so a tree is always acyclic and every node has exactly
//! one parent. Serialization writes the tree incrementally to any
//! [`std::io::Write`] sink, escaping text and attribute values on the way out.

mod escape;

use std::io::Write;

use tracing::trace;

use sitelift_shared::{Result, SiteliftError};

pub use escape::{escape_attribute, escape_text};
pub use sitelift_shared::ClosePolicy;

// ---------------------------------------------------------------------------
// Public types
// ---------------------------------------------------------------------------

/// A child of an [`Element`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// A nested element.
    Element(Element),
    /// Character data, escaped when written.
    Text(String),
    /// Pre-serialized markup, written verbatim. The producer vouches for its well-formedness.
    Markup(String),
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Self::Element(element)
    }
}

/// Options controlling how a tree is written.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SerializeOptions {
    /// How elements without children are closed.
    pub close_policy: ClosePolicy,
}

impl SerializeOptions {
    /// Options with the given close policy.
    pub fn with_close_policy(close_policy: ClosePolicy) -> Self {
        Self { close_policy }
    }
}

/// A markup element: tag, ordered attributes, ordered children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    tag: String,
    attributes: Vec<(String, String)>,
    children: Vec<Node>,
}

// ---------------------------------------------------------------------------
// Construction
// ---------------------------------------------------------------------------

impl Element {
    /// Create an element with no attributes and no children.
    ///
    /// Fails if `tag` is empty or is not a legal markup name.
    pub fn new(tag: impl Into<String>) -> Result<Self> {
        let tag = tag.into();
        if tag.is_empty() {
            return Err(SiteliftError::invalid_argument("tag must not be empty"));
        }
        if !escape::is_valid_name(&tag) {
            return Err(SiteliftError::invalid_argument(format!(
                "illegal tag name {tag:?}"
            )));
        }

        Ok(Self {
            tag,
            attributes: Vec::new(),
            children: Vec::new(),
        })
    }

    /// Set an attribute. An existing key keeps its position and takes the new value.
    pub fn set_attribute(
        &mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Result<&mut Self> {
        let key = key.into();
        if key.is_empty() {
            return Err(SiteliftError::invalid_argument(
                "attribute key must not be empty",
            ));
        }
        if !escape::is_valid_name(&key) {
            return Err(SiteliftError::invalid_argument(format!(
                "illegal attribute name {key:?} on <{}>",
                self.tag
            )));
        }

        let value = value.into();
        match self.attributes.iter_mut().find(|(k, _)| *k == key) {
            Some((_, existing)) => *existing = value,
            None => self.attributes.push((key, value)),
        }
        Ok(self)
    }

    /// Builder form of [`Element::set_attribute`].
    pub fn with_attribute(
        mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Result<Self> {
        self.set_attribute(key, value)?;
        Ok(self)
    }

    /// Append a child node.
    pub fn add_child(&mut self, node: impl Into<Node>) -> &mut Self {
        self.children.push(node.into());
        self
    }

    /// Append a child element.
    pub fn add_element(&mut self, element: Element) -> &mut Self {
        self.add_child(Node::Element(element))
    }

    /// Append character data.
    pub fn add_text(&mut self, text: impl Into<String>) -> &mut Self {
        self.add_child(Node::Text(text.into()))
    }

    /// Append pre-serialized markup to be written as-is.
    pub fn add_markup(&mut self, markup: impl Into<String>) -> &mut Self {
        self.add_child(Node::Markup(markup.into()))
    }

    /// Builder form of [`Element::add_child`].
    pub fn with_child(mut self, node: impl Into<Node>) -> Self {
        self.add_child(node);
        self
    }

    /// Builder form of [`Element::add_text`].
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.add_text(text);
        self
    }
}

// ---------------------------------------------------------------------------
// Accessors
// ---------------------------------------------------------------------------

impl Element {
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Value of the attribute `key`, if set.
    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Attributes in insertion order.
    pub fn attributes(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attributes.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// Whether the element has no children at all.
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Serialization
// ---------------------------------------------------------------------------

impl Element {
    /// Write this element and its subtree to `out` using default options.
    pub fn append_to<W: Write + ?Sized>(&self, out: &mut W) -> Result<()> {
        self.append_to_with(out, &SerializeOptions::default())
    }

    /// Write this element and its subtree to `out`.
    ///
    /// Output goes straight to the sink; if a write fails, whatever was already
    /// written stays there.
    pub fn append_to_with<W: Write + ?Sized>(
        &self,
        out: &mut W,
        opts: &SerializeOptions,
    ) -> Result<()> {
        self.write_tree(out, opts).map_err(SiteliftError::Write)
    }

    /// Serialize into a string using default options.
    pub fn to_markup(&self) -> String {
        self.to_markup_with(&SerializeOptions::default())
    }

    /// Serialize into a string.
    pub fn to_markup_with(&self, opts: &SerializeOptions) -> String {
        let mut buf = Vec::new();
        self.write_tree(&mut buf, opts)
            .expect("writing to a Vec cannot fail");
        String::from_utf8(buf).expect("serializer emits UTF-8")
    }

    fn write_tree<W: Write + ?Sized>(
        &self,
        out: &mut W,
        opts: &SerializeOptions,
    ) -> std::io::Result<()> {
        write!(out, "<{}", self.tag)?;
        for (key, value) in &self.attributes {
            write!(out, " {key}=\"")?;
            escape::write_escaped(out, value, true)?;
            out.write_all(b"\"")?;
        }

        if self.children.is_empty() {
            if self.self_closes(opts.close_policy) {
                return out.write_all(b"/>");
            }
            return write!(out, "></{}>", self.tag);
        }

        out.write_all(b">")?;
        for child in &self.children {
            match child {
                Node::Element(element) => element.write_tree(out, opts)?,
                Node::Text(text) => escape::write_escaped(out, text, false)?,
                Node::Markup(markup) => out.write_all(markup.as_bytes())?,
            }
        }
        trace!(tag = %self.tag, children = self.children.len(), "closed element");
        write!(out, "</{}>", self.tag)
    }

    fn self_closes(&self, policy: ClosePolicy) -> bool {
        match policy {
            ClosePolicy::SelfClose => true,
            ClosePolicy::AlwaysPair => false,
            ClosePolicy::Html => escape::is_void_element(&self.tag),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
