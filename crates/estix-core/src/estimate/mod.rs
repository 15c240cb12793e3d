//! Estimate field extraction module.

mod parser;
pub mod rules;

pub use parser::{ExtractionReport, MitchellEstimateParser};

use crate::models::estimate::Estimate;

/// Trait for estimate extractors.
///
/// Extraction never fails on off-format text: unmatched fields stay at
/// their empty defaults. Only the document-text source ahead of this
/// trait can fail.
pub trait EstimateExtractor {
    /// Extract an estimate record from plain text.
    fn extract_from_text(&self, text: &str) -> Estimate;
}
