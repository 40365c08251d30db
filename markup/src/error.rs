//! Errors raised while writing markup.

use std::io;
use thiserror::Error;

/// Failures reported by the markup writers.
#[derive(Debug, Error)]
pub enum MarkupError {
    /// The underlying sink rejected a write.
    #[error("failed to write markup: {0}")]
    Io(#[from] io::Error),

    /// An operation needed an open element but none was open.
    #[error("cannot {operation}: no element is open")]
    NoOpenElement {
        /// The operation that was attempted.
        operation: &'static str,
    },

    /// An attribute was written after the start tag was closed.
    #[error("attribute '{name}' must be written directly after its start tag")]
    AttributeOutsideStartTag {
        /// Name of the rejected attribute.
        name: String,
    },
}

/// Convenience alias for markup results.
pub type Result<T> = std::result::Result<T, MarkupError>;
