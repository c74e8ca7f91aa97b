//! Default element factory for [`SiteEntry`] pages.
//!
//! Entry elements follow the hAtom microformat: `class="hentry <kind>"` plus
//! the entry's short id as the element id and its title, when non-empty, as
//! the `title` attribute.

use tracing::debug;

use sitelift_markup::Element;
use sitelift_shared::{Result, SiteEntry};

use crate::render::ElementFactory;

/// Builds hAtom entry elements for site entries.
#[derive(Debug, Clone, Copy, Default)]
pub struct EntryElementFactory;

impl ElementFactory<SiteEntry> for EntryElementFactory {
    fn entry_element(&self, entry: &SiteEntry, root_tag: &str) -> Result<Element> {
        let mut element = Element::new(root_tag)?;
        element.set_attribute("class", format!("hentry {}", entry.kind.as_str()))?;

        match entry.short_id() {
            Some(id) => {
                element.set_attribute("id", id)?;
            }
            None => debug!(id = %entry.id, "entry id has no path segment, omitting element id"),
        }

        if !entry.title.is_empty() {
            element.set_attribute("title", entry.title.as_str())?;
        }

        Ok(element)
    }
}
