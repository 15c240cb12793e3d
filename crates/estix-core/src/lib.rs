//! Core library for collision estimate extraction.
//!
//! This crate provides:
//! - PDF text extraction (the document-text source for the engine)
//! - Heuristic field extraction for Mitchell-style estimate sheets
//!   (VIN, plate, vehicle descriptor, repair line items)
//! - Plain data models for the extracted record

pub mod error;
pub mod models;
pub mod pdf;
pub mod estimate;

pub use error::{EstixError, Result};
pub use models::estimate::{Customer, Estimate, JobType, RepairItem, Vehicle};
pub use pdf::{DocumentSource, PdfSource};
pub use estimate::{EstimateExtractor, ExtractionReport, MitchellEstimateParser};
