//! Clipboard seam for the copy action.

use crate::error::clipboard::ClipboardError;

/// Destination for the copy button.
pub trait Clipboard {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// What a copy request did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CopyOutcome {
    /// The derived URL was written to the clipboard.
    Copied,
    /// Nothing to copy; the clipboard was not touched.
    Skipped,
    /// The clipboard refused the write.
    Failed(String),
}
