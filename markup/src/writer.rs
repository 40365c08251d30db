//! A streaming writer for element-structured markup.

use crate::error::{MarkupError, Result};
use std::borrow::Cow;
use std::io::Write;

#[derive(Debug)]
struct OpenElement {
    name: String,
    has_child_elements: bool,
}

/// Writes elements, attributes and character data to a sink.
///
/// Start tags stay open until content or a child element follows, so
/// attributes may be added straight after [`start_element`]. An element
/// closed without content is written as an empty-element tag (`<br/>`).
///
/// With an indent string, every element starts on its own line, nested one
/// indent deeper than its parent. Elements holding only text stay on one
/// line.
///
/// [`start_element`]: SimpleMarkupWriter::start_element
///
/// # Examples
///
/// ```
/// use ivy_publish_markup::SimpleMarkupWriter;
///
/// let mut writer = SimpleMarkupWriter::new(Vec::new(), None);
/// writer
///     .start_element("a")?
///     .attribute("href", "index.html")?
///     .characters("R&D")?
///     .end_element()?;
/// let output = writer.into_inner()?;
///
/// assert_eq!(String::from_utf8_lossy(&output), r#"<a href="index.html">R&amp;D</a>"#);
/// # Ok::<(), ivy_publish_markup::MarkupError>(())
/// ```
#[derive(Debug)]
pub struct SimpleMarkupWriter<W: Write> {
    sink: W,
    indent: Option<String>,
    open: Vec<OpenElement>,
    start_tag_pending: bool,
    started: bool,
}

impl<W: Write> SimpleMarkupWriter<W> {
    /// Wrap `sink`, optionally indenting nested elements with `indent`.
    #[must_use]
    pub fn new(sink: W, indent: Option<&str>) -> Self {
        Self {
            sink,
            indent: indent.map(str::to_owned),
            open: Vec::new(),
            start_tag_pending: false,
            started: false,
        }
    }

    /// Write `text` verbatim, without escaping.
    ///
    /// # Errors
    ///
    /// Returns [`MarkupError::Io`] when the sink rejects the write.
    pub fn write_raw(&mut self, text: &str) -> Result<&mut Self> {
        self.close_start_tag()?;
        self.sink.write_all(text.as_bytes())?;
        self.started = true;
        Ok(self)
    }

    /// Open a new element named `name`.
    ///
    /// # Errors
    ///
    /// Returns [`MarkupError::Io`] when the sink rejects the write.
    pub fn start_element(&mut self, name: &str) -> Result<&mut Self> {
        self.close_start_tag()?;
        if let Some(parent) = self.open.last_mut() {
            parent.has_child_elements = true;
        }
        self.line_break()?;
        write!(self.sink, "<{name}")?;
        self.open.push(OpenElement {
            name: name.to_owned(),
            has_child_elements: false,
        });
        self.start_tag_pending = true;
        self.started = true;
        Ok(self)
    }

    /// Add an attribute to the element just started.
    ///
    /// # Errors
    ///
    /// Returns [`MarkupError::AttributeOutsideStartTag`] when content or a
    /// child element has already been written, or [`MarkupError::Io`] when the
    /// sink rejects the write.
    pub fn attribute(&mut self, name: &str, value: &str) -> Result<&mut Self> {
        if !self.start_tag_pending {
            return Err(MarkupError::AttributeOutsideStartTag {
                name: name.to_owned(),
            });
        }
        write!(self.sink, " {name}=\"{}\"", escape(value))?;
        Ok(self)
    }

    /// Write escaped character data into the current element.
    ///
    /// # Errors
    ///
    /// Returns [`MarkupError::NoOpenElement`] outside any element, or
    /// [`MarkupError::Io`] when the sink rejects the write.
    pub fn characters(&mut self, text: &str) -> Result<&mut Self> {
        if self.open.is_empty() {
            return Err(MarkupError::NoOpenElement {
                operation: "write characters",
            });
        }
        self.close_start_tag()?;
        self.sink.write_all(escape(text).as_bytes())?;
        Ok(self)
    }

    /// Close the innermost open element.
    ///
    /// # Errors
    ///
    /// Returns [`MarkupError::NoOpenElement`] when nothing is open, or
    /// [`MarkupError::Io`] when the sink rejects the write.
    pub fn end_element(&mut self) -> Result<&mut Self> {
        let Some(element) = self.open.pop() else {
            return Err(MarkupError::NoOpenElement {
                operation: "end element",
            });
        };
        if self.start_tag_pending {
            self.start_tag_pending = false;
            self.sink.write_all(b"/>")?;
            return Ok(self);
        }
        if element.has_child_elements {
            self.line_break()?;
        }
        write!(self.sink, "</{}>", element.name)?;
        Ok(self)
    }

    /// Number of elements currently open.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.open.len()
    }

    /// Flush and return the sink.
    ///
    /// Elements still open are left unclosed.
    ///
    /// # Errors
    ///
    /// Returns [`MarkupError::Io`] when flushing fails.
    pub fn into_inner(mut self) -> Result<W> {
        self.close_start_tag()?;
        self.sink.flush()?;
        Ok(self.sink)
    }

    fn close_start_tag(&mut self) -> Result<()> {
        if self.start_tag_pending {
            self.start_tag_pending = false;
            self.sink.write_all(b">")?;
        }
        Ok(())
    }

    fn line_break(&mut self) -> Result<()> {
        let Some(indent) = &self.indent else {
            return Ok(());
        };
        if self.started {
            write!(self.sink, "\n{}", indent.repeat(self.open.len()))?;
        }
        Ok(())
    }
}

fn escape(text: &str) -> Cow<'_, str> {
    if !text.contains(['&', '<', '>', '"']) {
        return Cow::Borrowed(text);
    }
    let mut escaped = String::with_capacity(text.len() + 8);
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            other => escaped.push(other),
        }
    }
    Cow::Owned(escaped)
}
