//! PDF processing module.

mod source;

pub use source::PdfSource;

use crate::error::PdfError;

/// Result type for PDF operations.
pub type Result<T> = std::result::Result<T, PdfError>;

/// A document-text source: yields the concatenated text of all pages in
/// reading order, or fails with a read/decode error. The extraction
/// engine never looks at document structure beyond this text.
pub trait DocumentSource {
    /// Load a document from bytes.
    fn load(&mut self, data: &[u8]) -> Result<()>;

    /// Get the number of pages in the document.
    fn page_count(&self) -> u32;

    /// Extract the full text of the document in reading order.
    fn extract_text(&self) -> Result<String>;
}
