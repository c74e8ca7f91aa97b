//! Page export for sitelift.
//!
//! This crate composes a page's rendered sections into a single markup
//! document (`html > body > entry element`) and writes it to a sink. The
//! section renderers and the entry element factory are supplied by the caller
//! through the traits in [`render`].

pub mod exporter;
pub mod factory;
pub mod render;
pub mod sections;

pub use exporter::{DEFAULT_ROOT_TAG, PageExporter};
pub use factory::EntryElementFactory;
pub use render::{ElementFactory, PageRenderer, Section};
pub use sections::PageSections;
