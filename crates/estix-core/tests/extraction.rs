//! End-to-end extraction tests over synthetic estimate-sheet text.

use pretty_assertions::assert_eq;

use estix_core::estimate::rules::{assemble_description, classify_job_type, resolve_part_number};
use estix_core::{EstimateExtractor, JobType, MitchellEstimateParser};

/// A synthetic sheet exercising the whole pipeline: identifiers,
/// boilerplate feature lists, wrapped descriptions, part numbers, and a
/// repeated operation.
const SHEET: &str = "\
Mitchell International
Collision Estimate

2023 Honda Accord 4 Door Sedan 1.5L 4 Cyl Gas
VIN
1HGCM82633A004352
License
FL-ABC1234
Mileage
42,388

Power Door Locks
Power Windows
Cruise Control
Bluetooth
Air Conditioning

Line # Description Operation Qty Part Number

Front Bumper
Bumper Cover
Remove / Replace
New
71101-TVA-A00
1
Absorber Remove / Replace
71170-TVA-A00
1
Grille
Grille Shutter Remove / Replace
New
71300-TVA
A01ZZ
Hood
Hood Panel
Repair
Body
4.5
Front Fender
Fender Panel
Blend
Refinish
1.2
Bumper Cover
Remove / Replace
New
71101-TVA-A00

Labor
Total
$2,415.00
";

#[test]
fn vehicle_descriptor_scenario() {
    let estimate = MitchellEstimateParser::new().extract_from_text("2023 Honda Accord 4 Door");
    assert_eq!(estimate.vehicle.year, "2023");
    assert_eq!(estimate.vehicle.make_model, "Honda Accord");
}

#[test]
fn vin_scenario() {
    let estimate = MitchellEstimateParser::new().extract_from_text("VIN\n1HGCM82633A004352");
    assert_eq!(estimate.vehicle.vin, "1HGCM82633A004352");
}

#[test]
fn plate_scenario() {
    let estimate = MitchellEstimateParser::new().extract_from_text("License\nFL-ABC1234");
    assert_eq!(estimate.vehicle.plate, "FL-ABC1234");
}

#[test]
fn replace_with_part_number_scenario() {
    // "Front Bumper" / "Remove / Replace" / ... / "12345-AB": the
    // classifier, description assembler, and part resolver each see the
    // operation the same way.
    let lines: Vec<String> = ["Front Bumper", "Remove / Replace", "New", "12345-AB"]
        .iter()
        .map(|s| s.to_string())
        .collect();

    assert_eq!(classify_job_type(&lines, 0), Some(JobType::Replace));
    assert_eq!(assemble_description(&lines, 0).0, "Front Bumper");
    assert_eq!(resolve_part_number(&lines, 0), "12345-AB");
}

#[test]
fn exclude_phrase_scenario() {
    let estimate = MitchellEstimateParser::new()
        .extract_from_text("Line #\nPower Door Locks\nRemove / Replace\n12345-AB");
    assert!(estimate.items.is_empty());
}

#[test]
fn wrapped_description_scenario() {
    let lines: Vec<String> = ["Front", "Fender", "Remove / Replace"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    assert_eq!(assemble_description(&lines, 0).0, "Front Fender");
}

#[test]
fn full_sheet_extraction() {
    let estimate = MitchellEstimateParser::new().extract_from_text(SHEET);

    assert_eq!(estimate.vehicle.year, "2023");
    assert_eq!(estimate.vehicle.make_model, "Honda Accord");
    assert_eq!(estimate.vehicle.vin, "1HGCM82633A004352");
    assert_eq!(estimate.vehicle.plate, "FL-ABC1234");

    let summary: Vec<(JobType, &str, &str)> = estimate
        .items
        .iter()
        .map(|i| (i.job_type, i.desc.as_str(), i.part_num.as_str()))
        .collect();

    assert_eq!(
        summary,
        vec![
            (JobType::Replace, "Bumper Cover", "71101-TVA-A00"),
            (JobType::Replace, "Absorber", "71170-TVA-A00"),
            (JobType::Replace, "Grille Shutter", "71300-TVA A01ZZ"),
            (JobType::Repair, "Hood Panel", ""),
            (JobType::Blend, "Fender Panel", ""),
        ]
    );
}

#[test]
fn extraction_is_idempotent() {
    let parser = MitchellEstimateParser::new();
    let a = serde_json::to_string(&parser.extract_from_text(SHEET)).unwrap();
    let b = serde_json::to_string(&parser.extract_from_text(SHEET)).unwrap();
    assert_eq!(a, b);
}

#[test]
fn dedup_invariant_holds() {
    let estimate = MitchellEstimateParser::new().extract_from_text(SHEET);
    let keys: std::collections::HashSet<_> =
        estimate.items.iter().map(|i| i.dedup_key()).collect();
    assert_eq!(
        keys.len(),
        estimate.items.len(),
        "duplicate (type, desc) keys in output"
    );
}

#[test]
fn vin_shape_invariant() {
    let estimate = MitchellEstimateParser::new().extract_from_text(SHEET);
    let vin = &estimate.vehicle.vin;
    assert_eq!(vin.len(), 17);
    assert!(vin
        .chars()
        .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit()));
    assert!(!vin.contains(['I', 'O', 'Q']));
}

#[test]
fn serialized_shape_matches_contract() {
    let estimate = MitchellEstimateParser::new().extract_from_text(SHEET);
    let json = serde_json::to_value(&estimate).unwrap();

    let object = json.as_object().unwrap();
    let mut keys: Vec<_> = object.keys().map(String::as_str).collect();
    keys.sort_unstable();
    assert_eq!(keys, vec!["customer", "items", "notes", "vehicle"]);

    // customer and notes are present even though the engine never
    // populates them.
    assert_eq!(json["customer"]["name"], "");
    assert_eq!(json["customer"]["phone"], "");
    assert_eq!(json["notes"], "");

    let vehicle = json["vehicle"].as_object().unwrap();
    assert!(vehicle.contains_key("makeModel"));

    let item = json["items"][0].as_object().unwrap();
    let mut item_keys: Vec<_> = item.keys().map(String::as_str).collect();
    item_keys.sort_unstable();
    assert_eq!(item_keys, vec!["customTitle", "desc", "partNum", "type"]);
}

#[test]
fn off_format_document_degrades_to_empty() {
    let estimate = MitchellEstimateParser::new()
        .extract_from_text("Quarterly report\nRevenue was up 12% year over year.\n");
    assert_eq!(estimate.vehicle.vin, "");
    assert_eq!(estimate.vehicle.make_model, "");
    assert!(estimate.items.is_empty());
}
