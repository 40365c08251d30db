//! Streaming markup writers.
//!
//! [`SimpleMarkupWriter`] emits elements, attributes and text to any
//! [`std::io::Write`] sink, escaping content as it goes. [`SimpleHtmlWriter`]
//! specialises it for HTML reports by writing the HTML 4.01 strict doctype
//! as soon as it is constructed.

mod error;
mod html;
mod writer;

pub use error::{MarkupError, Result};
pub use html::{HTML_DOCTYPE, SimpleHtmlWriter};
pub use writer::SimpleMarkupWriter;
