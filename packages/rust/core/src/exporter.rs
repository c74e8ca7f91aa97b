//! Single-page exporter.
//!
//! Assembles one page into the fixed skeleton
//! ```text
//! <html>
//!   <body>
//!     <ROOT ...entry attributes...>
//!       parent links, title, content, additional content,
//!       subpage links, attachments, comments
//!     </ROOT>
//!   </body>
//! </html>
//! ```
//! and writes it to a sink. Absent sections leave no trace in the output.

use std::io::Write;
use std::path::Path;

use tracing::{debug, info, instrument};

use sitelift_markup::{Element, SerializeOptions};
use sitelift_shared::{ExportConfig, Result, load_config};

use crate::render::{ElementFactory, PageRenderer, Section};

/// Default tag of the element that carries the entry.
pub const DEFAULT_ROOT_TAG: &str = "div";

/// Exports pages using an element factory for the entry element.
#[derive(Debug, Clone)]
pub struct PageExporter<F> {
    element_factory: F,
    root_tag: String,
    options: SerializeOptions,
}

impl<F> PageExporter<F> {
    /// Exporter with a `div` root and self-closing empty elements.
    pub fn new(element_factory: F) -> Self {
        Self {
            element_factory,
            root_tag: DEFAULT_ROOT_TAG.to_string(),
            options: SerializeOptions::default(),
        }
    }

    /// Exporter configured from the `[export]` config section.
    ///
    /// Fails if the configured root tag is not a legal element name.
    pub fn from_config(element_factory: F, config: &ExportConfig) -> Result<Self> {
        Element::new(config.root_tag.as_str())?;
        Ok(Self {
            element_factory,
            root_tag: config.root_tag.clone(),
            options: SerializeOptions::with_close_policy(config.close_policy),
        })
    }

    /// Exporter configured from the `[export]` section of a config file.
    /// A missing file means defaults.
    pub fn from_config_file(element_factory: F, path: &Path) -> Result<Self> {
        let config = load_config(path)?;
        Self::from_config(element_factory, &config.export)
    }

    /// Replace the serialization options.
    pub fn with_options(mut self, options: SerializeOptions) -> Self {
        self.options = options;
        self
    }

    pub fn root_tag(&self) -> &str {
        &self.root_tag
    }

    pub fn options(&self) -> &SerializeOptions {
        &self.options
    }

    /// Build the full document tree for one page without writing it.
    ///
    /// Renderer and factory errors are returned exactly as produced.
    #[instrument(skip_all, fields(root_tag = %self.root_tag))]
    pub fn build_document<R>(&self, renderer: &R) -> Result<Element>
    where
        R: PageRenderer + ?Sized,
        F: ElementFactory<R::Entry>,
    {
        let mut html = Element::new("html")?;
        let mut body = Element::new("body")?;
        let mut root = self
            .element_factory
            .entry_element(renderer.entry(), &self.root_tag)?;

        for section in Section::ORDER {
            match renderer.render_section(section)? {
                Some(fragment) => {
                    debug!(%section, tag = fragment.tag(), "appending section");
                    root.add_element(fragment);
                }
                None => debug!(%section, "section absent"),
            }
        }

        body.add_element(root);
        html.add_element(body);
        Ok(html)
    }

    /// Export one page to `out`.
    ///
    /// The whole tree is built before the first byte is written, so renderer
    /// failures leave the sink untouched. A sink failure may leave a prefix of
    /// the document behind.
    #[instrument(skip_all, fields(root_tag = %self.root_tag, policy = %self.options.close_policy))]
    pub fn export_page<R, W>(&self, renderer: &R, out: &mut W) -> Result<()>
    where
        R: PageRenderer + ?Sized,
        F: ElementFactory<R::Entry>,
        W: Write + ?Sized,
    {
        let html = self.build_document(renderer)?;
        let mut counted = CountingWriter::new(out);
        html.append_to_with(&mut counted, &self.options)?;
        info!(bytes = counted.bytes, "page exported");
        Ok(())
    }

    /// Export one page into a string.
    pub fn export_page_to_string<R>(&self, renderer: &R) -> Result<String>
    where
        R: PageRenderer + ?Sized,
        F: ElementFactory<R::Entry>,
    {
        let html = self.build_document(renderer)?;
        let markup = html.to_markup_with(&self.options);
        info!(bytes = markup.len(), "page exported");
        Ok(markup)
    }
}

/// Passes writes through to a sink while counting the bytes it accepted.
struct CountingWriter<'a, W: ?Sized> {
    inner: &'a mut W,
    bytes: usize,
}

impl<'a, W: Write + ?Sized> CountingWriter<'a, W> {
    fn new(inner: &'a mut W) -> Self {
        Self { inner, bytes: 0 }
    }
}

impl<W: Write + ?Sized> Write for CountingWriter<'_, W> {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        let n = self.inner.write(buf)?;
        self.bytes += n;
        Ok(n)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.inner.flush()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
