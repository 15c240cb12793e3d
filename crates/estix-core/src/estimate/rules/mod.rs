//! Rule-based extraction for estimate sheets: regex patterns, keyword
//! tables, identifier extractors, and the line-item scanner.

pub mod patterns;
pub mod scanner;
pub mod tables;
pub mod vehicle;

pub use scanner::{
    assemble_description, classify_job_type, dedup_items, find_items_start, normalize_lines,
    resolve_part_number, scan_items, scan_line, ScanOutcome,
};
pub use vehicle::{extract_plate, extract_vehicle, extract_vin, VehicleInfo};
