//! A renderer over fragments that were rendered ahead of time.

use sitelift_markup::Element;
use sitelift_shared::Result;

use crate::render::{PageRenderer, Section};

/// An entry plus an optional, already-rendered fragment for each section.
///
/// Every `render_*` call hands out a fresh copy, so the same value can be
/// exported any number of times.
#[derive(Debug, Clone)]
pub struct PageSections<E> {
    entry: E,
    fragments: [Option<Element>; 7],
}

impl<E> PageSections<E> {
    /// Sections for `entry`, all absent.
    pub fn new(entry: E) -> Self {
        Self {
            entry,
            fragments: Default::default(),
        }
    }

    /// Set the fragment for `section`, replacing any earlier one.
    pub fn set(&mut self, section: Section, fragment: Element) -> &mut Self {
        self.fragments[section.index()] = Some(fragment);
        self
    }

    /// Builder form of [`PageSections::set`].
    pub fn with(mut self, section: Section, fragment: Element) -> Self {
        self.set(section, fragment);
        self
    }

    /// Mark `section` absent again.
    pub fn clear(&mut self, section: Section) -> &mut Self {
        self.fragments[section.index()] = None;
        self
    }

    pub fn get(&self, section: Section) -> Option<&Element> {
        self.fragments[section.index()].as_ref()
    }

    fn fragment(&self, section: Section) -> Result<Option<Element>> {
        Ok(self.get(section).cloned())
    }
}

impl<E> PageRenderer for PageSections<E> {
    type Entry = E;

    fn entry(&self) -> &E {
        &self.entry
    }

    fn render_parent_links(&self) -> Result<Option<Element>> {
        self.fragment(Section::ParentLinks)
    }

    fn render_title(&self) -> Result<Option<Element>> {
        self.fragment(Section::Title)
    }

    fn render_content(&self) -> Result<Option<Element>> {
        self.fragment(Section::Content)
    }

    fn render_additional_content(&self) -> Result<Option<Element>> {
        self.fragment(Section::AdditionalContent)
    }

    fn render_subpage_links(&self) -> Result<Option<Element>> {
        self.fragment(Section::SubpageLinks)
    }

    fn render_attachments(&self) -> Result<Option<Element>> {
        self.fragment(Section::Attachments)
    }

    fn render_comments(&self) -> Result<Option<Element>> {
        self.fragment(Section::Comments)
    }
}
