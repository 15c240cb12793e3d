//! Heuristic parser for Mitchell-style estimate sheets.

use std::time::Instant;

use tracing::{debug, info};

use crate::models::estimate::{Estimate, Vehicle};

use super::rules::{
    dedup_items, extract_plate, extract_vehicle, extract_vin, normalize_lines, scan_items,
};
use super::EstimateExtractor;

/// Result of parsing one estimate sheet.
#[derive(Debug, Clone)]
pub struct ExtractionReport {
    /// The extracted record.
    pub estimate: Estimate,
    /// Fields the heuristics could not recover.
    pub warnings: Vec<String>,
    /// Processing time in milliseconds.
    pub processing_time_ms: u64,
}

/// Parser for the one recurring estimate-sheet family this engine
/// targets. Off-format documents degrade to empty/partial fields; no
/// input text makes parsing fail.
///
/// Each call allocates fresh state, so one parser can serve concurrent
/// extractions of different documents.
#[derive(Debug, Clone, Default)]
pub struct MitchellEstimateParser;

impl MitchellEstimateParser {
    /// Create a new parser.
    pub fn new() -> Self {
        Self
    }

    /// Parse an estimate sheet, reporting warnings for missing fields.
    pub fn parse(&self, text: &str) -> ExtractionReport {
        let start = Instant::now();
        let mut warnings = Vec::new();

        info!("Parsing estimate from {} characters of text", text.len());

        let mut vehicle = Vehicle::default();

        if let Some(vin) = extract_vin(text) {
            vehicle.vin = vin;
        } else {
            warnings.push("Could not extract VIN".to_string());
        }

        if let Some(plate) = extract_plate(text) {
            vehicle.plate = plate;
        } else {
            warnings.push("Could not extract license plate".to_string());
        }

        if let Some(info) = extract_vehicle(text) {
            vehicle.year = info.year;
            vehicle.make_model = info.make_model;
        } else {
            warnings.push("Could not extract vehicle description".to_string());
        }

        let lines = normalize_lines(text);
        let raw_items = scan_items(&lines);
        let items = dedup_items(raw_items);

        if items.is_empty() {
            warnings.push("No repair items found".to_string());
        }

        debug!(
            "Extracted {} items for {} {}",
            items.len(),
            vehicle.year,
            vehicle.make_model
        );

        ExtractionReport {
            estimate: Estimate {
                vehicle,
                items,
                ..Default::default()
            },
            warnings,
            processing_time_ms: start.elapsed().as_millis() as u64,
        }
    }
}

impl EstimateExtractor for MitchellEstimateParser {
    fn extract_from_text(&self, text: &str) -> Estimate {
        self.parse(text).estimate
    }
}
