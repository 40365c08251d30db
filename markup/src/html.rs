//! HTML report writer.

use crate::error::Result;
use crate::writer::SimpleMarkupWriter;
use std::io::Write;
use std::ops::{Deref, DerefMut};

/// Preamble written by every [`SimpleHtmlWriter`].
pub const HTML_DOCTYPE: &str = "<!DOCTYPE HTML PUBLIC \"-//W3C//DTD HTML 4.01//EN\" \
                                \"http://www.w3.org/TR/html4/strict.dtd\">";

/// A [`SimpleMarkupWriter`] for HTML documents.
///
/// Construction writes [`HTML_DOCTYPE`] to the sink before returning, so the
/// first element a caller writes follows the doctype.
///
/// # Examples
///
/// ```
/// use ivy_publish_markup::{HTML_DOCTYPE, SimpleHtmlWriter};
///
/// let mut writer = SimpleHtmlWriter::new(Vec::new())?;
/// writer.start_element("html")?.end_element()?;
/// let output = String::from_utf8_lossy(&writer.into_inner()?).into_owned();
///
/// assert_eq!(output, format!("{HTML_DOCTYPE}<html/>"));
/// # Ok::<(), ivy_publish_markup::MarkupError>(())
/// ```
#[derive(Debug)]
pub struct SimpleHtmlWriter<W: Write> {
    inner: SimpleMarkupWriter<W>,
}

impl<W: Write> SimpleHtmlWriter<W> {
    /// Start an unindented HTML document on `sink`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::MarkupError::Io`] when the doctype cannot be written.
    pub fn new(sink: W) -> Result<Self> {
        Self::start(sink, None)
    }

    /// Start an HTML document on `sink`, indenting nested elements.
    ///
    /// # Errors
    ///
    /// Returns [`crate::MarkupError::Io`] when the doctype cannot be written.
    pub fn with_indent(sink: W, indent: &str) -> Result<Self> {
        Self::start(sink, Some(indent))
    }

    fn start(sink: W, indent: Option<&str>) -> Result<Self> {
        let mut inner = SimpleMarkupWriter::new(sink, indent);
        inner.write_raw(HTML_DOCTYPE)?;
        Ok(Self { inner })
    }

    /// Flush and return the sink.
    ///
    /// # Errors
    ///
    /// Returns [`crate::MarkupError::Io`] when flushing fails.
    pub fn into_inner(self) -> Result<W> {
        self.inner.into_inner()
    }
}

impl<W: Write> Deref for SimpleHtmlWriter<W> {
    type Target = SimpleMarkupWriter<W>;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl<W: Write> DerefMut for SimpleHtmlWriter<W> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.inner
    }
}
