//! PDF text extraction using lopdf and pdf-extract.

use lopdf::Document;
use tracing::debug;

use super::{DocumentSource, Result};
use crate::error::PdfError;

/// PDF text source backed by lopdf (structure) and pdf-extract (text).
pub struct PdfSource {
    document: Option<Document>,
    raw_data: Vec<u8>,
}

impl PdfSource {
    /// Create a new, empty PDF source.
    pub fn new() -> Self {
        Self {
            document: None,
            raw_data: Vec::new(),
        }
    }

    /// Convenience constructor: load directly from bytes.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        let mut source = Self::new();
        source.load(data)?;
        Ok(source)
    }
}

impl Default for PdfSource {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentSource for PdfSource {
    fn load(&mut self, data: &[u8]) -> Result<()> {
        let mut doc = Document::load_mem(data).map_err(|e| PdfError::Parse(e.to_string()))?;

        // Handle PDFs with empty password encryption
        if doc.is_encrypted() {
            if doc.decrypt("").is_err() {
                return Err(PdfError::Encrypted);
            }
            debug!("Decrypted PDF with empty password");

            // Save decrypted document to raw_data for pdf_extract
            let mut decrypted_data = Vec::new();
            doc.save_to(&mut decrypted_data)
                .map_err(|e| PdfError::Parse(format!("Failed to save decrypted PDF: {}", e)))?;
            self.raw_data = decrypted_data;
        } else {
            self.raw_data = data.to_vec();
        }

        let page_count = doc.get_pages().len();
        if page_count == 0 {
            return Err(PdfError::NoPages);
        }

        debug!("Loaded PDF with {} pages", page_count);
        self.document = Some(doc);
        Ok(())
    }

    fn page_count(&self) -> u32 {
        self.document
            .as_ref()
            .map(|doc| doc.get_pages().len() as u32)
            .unwrap_or(0)
    }

    fn extract_text(&self) -> Result<String> {
        if self.document.is_none() {
            return Err(PdfError::Parse("No document loaded".to_string()));
        }

        let text = pdf_extract::extract_text_from_mem(&self.raw_data)
            .map_err(|e| PdfError::TextExtraction(e.to_string()))?;
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_source_is_empty() {
        let source = PdfSource::new();
        assert_eq!(source.page_count(), 0);
        assert!(source.extract_text().is_err());
    }

    #[test]
    fn test_load_garbage_fails() {
        let mut source = PdfSource::new();
        assert!(source.load(b"not a pdf").is_err());
    }
}
