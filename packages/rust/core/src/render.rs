//! Collaborator traits consumed by the page exporter.
//!
//! The exporter knows nothing about how a page's sections are rendered or
//! what an entry looks like; it only asks these traits for elements.

use sitelift_markup::Element;
use sitelift_shared::Result;

// ---------------------------------------------------------------------------
// Section
// ---------------------------------------------------------------------------

/// One optional section of an exported page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    ParentLinks = 0,
    Title = 1,
    Content = 2,
    AdditionalContent = 3,
    SubpageLinks = 4,
    Attachments = 5,
    Comments = 6,
}

impl Section {
    /// Document order of the sections under the entry element.
    pub const ORDER: [Section; 7] = [
        Section::ParentLinks,
        Section::Title,
        Section::Content,
        Section::AdditionalContent,
        Section::SubpageLinks,
        Section::Attachments,
        Section::Comments,
    ];

    /// Short name used in logs.
    pub fn name(self) -> &'static str {
        match self {
            Self::ParentLinks => "parent-links",
            Self::Title => "title",
            Self::Content => "content",
            Self::AdditionalContent => "additional-content",
            Self::SubpageLinks => "subpage-links",
            Self::Attachments => "attachments",
            Self::Comments => "comments",
        }
    }

    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

impl std::fmt::Display for Section {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

// ---------------------------------------------------------------------------
// Traits
// ---------------------------------------------------------------------------

/// Builds the element that represents an entry and hosts its sections.
pub trait ElementFactory<E: ?Sized> {
    /// Create the root content element for `entry` with tag `root_tag`.
    fn entry_element(&self, entry: &E, root_tag: &str) -> Result<Element>;
}

impl<E: ?Sized, F: ElementFactory<E> + ?Sized> ElementFactory<E> for &F {
    fn entry_element(&self, entry: &E, root_tag: &str) -> Result<Element> {
        (**self).entry_element(entry, root_tag)
    }
}

/// Renders the sections of a single page.
///
/// Each `render_*` method returns `Ok(None)` when the page has nothing to
/// show for that section.
pub trait PageRenderer {
    /// The entry this page was rendered from.
    type Entry: ?Sized;

    fn entry(&self) -> &Self::Entry;

    /// Breadcrumb links to the page's ancestors.
    fn render_parent_links(&self) -> Result<Option<Element>>;

    fn render_title(&self) -> Result<Option<Element>>;

    /// The page body.
    fn render_content(&self) -> Result<Option<Element>>;

    /// Kind-specific extras (announcement lists, file cabinet tables, ...).
    fn render_additional_content(&self) -> Result<Option<Element>>;

    fn render_subpage_links(&self) -> Result<Option<Element>>;

    fn render_attachments(&self) -> Result<Option<Element>>;

    fn render_comments(&self) -> Result<Option<Element>>;

    /// Dispatch to the `render_*` method for `section`.
    fn render_section(&self, section: Section) -> Result<Option<Element>> {
        match section {
            Section::ParentLinks => self.render_parent_links(),
            Section::Title => self.render_title(),
            Section::Content => self.render_content(),
            Section::AdditionalContent => self.render_additional_content(),
            Section::SubpageLinks => self.render_subpage_links(),
            Section::Attachments => self.render_attachments(),
            Section::Comments => self.render_comments(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_matches_indices() {
        for (i, section) in Section::ORDER.iter().enumerate() {
            assert_eq!(section.index(), i);
        }
    }

    #[test]
    fn names_are_distinct() {
        let mut names: Vec<_> = Section::ORDER.iter().map(|s| s.name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), Section::ORDER.len());
    }
}
