//! Estimate data models matching the record shape consumed downstream.
//!
//! The serialized form is fixed: `customer` and `notes` are always present
//! even though only the surrounding system populates them, and the item
//! fields keep their camelCase wire names.

use serde::{Deserialize, Serialize};

/// A complete extracted estimate record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Estimate {
    /// Customer information (populated by the surrounding system).
    pub customer: Customer,

    /// Vehicle identifiers extracted from the sheet.
    pub vehicle: Vehicle,

    /// Repair operations, de-duplicated, in first-encounter order.
    pub items: Vec<RepairItem>,

    /// Free-form notes (populated by the surrounding system).
    pub notes: String,
}

/// Customer details. Always serialized, never filled by the extractor.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    /// Full customer name.
    pub name: String,

    /// Contact phone number.
    pub phone: String,
}

/// Vehicle identifiers. Empty strings where extraction found nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vehicle {
    /// Four-digit model year.
    pub year: String,

    /// Manufacturer and model, e.g. "Honda Accord".
    #[serde(rename = "makeModel")]
    pub make_model: String,

    /// License plate, e.g. "FL-ABC1234".
    pub plate: String,

    /// 17-character VIN (excludes I, O, Q), or empty.
    pub vin: String,
}

/// A single repair operation line extracted from the sheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepairItem {
    /// Classification of the operation.
    #[serde(rename = "type")]
    pub job_type: JobType,

    /// Trimmed description, possibly reassembled from wrapped lines.
    pub desc: String,

    /// Associated part number (Replace items only), or empty.
    #[serde(rename = "partNum")]
    pub part_num: String,

    /// User-supplied title; always empty at extraction time.
    #[serde(rename = "customTitle")]
    pub custom_title: String,
}

impl RepairItem {
    /// Create an item with an empty custom title.
    pub fn new(job_type: JobType, desc: impl Into<String>, part_num: impl Into<String>) -> Self {
        Self {
            job_type,
            desc: desc.into(),
            part_num: part_num.into(),
            custom_title: String::new(),
        }
    }

    /// Key used for de-duplication: job type plus case-folded description.
    pub fn dedup_key(&self) -> (JobType, String) {
        (self.job_type, self.desc.to_lowercase())
    }
}

/// Classification of a repair operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum JobType {
    /// Part is removed and replaced.
    Replace,
    /// Part is repaired in place.
    Repair,
    /// Adjacent panel is blended for paint match.
    Blend,
}

impl std::fmt::Display for JobType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            JobType::Replace => write!(f, "Replace"),
            JobType::Repair => write!(f, "Repair"),
            JobType::Blend => write!(f, "Blend"),
        }
    }
}
