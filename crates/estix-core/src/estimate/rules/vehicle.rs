//! Vehicle identifier extraction (VIN, plate, year/make/model).
//!
//! Each extractor is a pure function over the full document text (not
//! the line stream) and returns `None` when nothing matches; first
//! match wins.

use super::patterns::{PLATE_PATTERN, VEHICLE_PATTERN, VIN_PATTERN, WHEELBASE_SUFFIX};

/// Vehicle year and make/model descriptor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VehicleInfo {
    /// Four-digit model year.
    pub year: String,
    /// Manufacturer and model joined with a space.
    pub make_model: String,
}

/// Extract the first VIN following a `VIN` label.
pub fn extract_vin(text: &str) -> Option<String> {
    VIN_PATTERN
        .captures(text)
        .map(|caps| caps[1].to_string())
}

/// Extract the first license plate following a `License` label.
pub fn extract_plate(text: &str) -> Option<String> {
    PLATE_PATTERN
        .captures(text)
        .map(|caps| caps[1].to_string())
}

/// Extract the first vehicle descriptor: a 4-digit year, a known
/// manufacturer, and model text up to a door-count/"Van"/displacement
/// marker, with any trailing wheelbase annotation stripped.
pub fn extract_vehicle(text: &str) -> Option<VehicleInfo> {
    let caps = VEHICLE_PATTERN.captures(text)?;

    let year = caps[1].to_string();
    let make = caps[2].trim().to_string();
    let model_raw = caps[3].trim();
    let model = WHEELBASE_SUFFIX.replace(model_raw, "").trim().to_string();

    Some(VehicleInfo {
        year,
        make_model: format!("{} {}", make, model),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_vin_across_line_break() {
        let text = "Mileage 42000\nVIN\n1HGCM82633A004352\nLicense";
        assert_eq!(extract_vin(text), Some("1HGCM82633A004352".to_string()));
    }

    #[test]
    fn test_extract_vin_same_line() {
        let text = "VIN 5YJ3E1EA7KF317000";
        assert_eq!(extract_vin(text), Some("5YJ3E1EA7KF317000".to_string()));
    }

    #[test]
    fn test_extract_vin_wrong_length() {
        assert_eq!(extract_vin("VIN 1HGCM8263"), None);
    }

    #[test]
    fn test_extract_plate_across_line_break() {
        let text = "License\nFL-ABC1234\nState FL";
        assert_eq!(extract_plate(text), Some("FL-ABC1234".to_string()));
    }

    #[test]
    fn test_extract_plate_no_label() {
        assert_eq!(extract_plate("Plate FL-ABC1234"), None);
    }

    #[test]
    fn test_extract_vehicle_door_marker() {
        let info = extract_vehicle("2023 Honda Accord 4 Door Sedan").unwrap();
        assert_eq!(info.year, "2023");
        assert_eq!(info.make_model, "Honda Accord");
    }

    #[test]
    fn test_extract_vehicle_displacement_marker() {
        let info = extract_vehicle("2019 Toyota Camry SE 2.5L 4 Cyl Gas").unwrap();
        assert_eq!(info.year, "2019");
        assert_eq!(info.make_model, "Toyota Camry SE");
    }

    #[test]
    fn test_extract_vehicle_strips_wheelbase() {
        let info = extract_vehicle("2022 Ford Transit 250 148\" WB Med Roof Van").unwrap();
        assert_eq!(info.year, "2022");
        assert_eq!(info.make_model, "Ford Transit 250");
    }

    #[test]
    fn test_extract_vehicle_mercedes_alias() {
        let info = extract_vehicle("2020 Mercedes-Benz Sprinter 2500 Van").unwrap();
        assert_eq!(info.make_model, "Mercedes-Benz Sprinter 2500");

        let info = extract_vehicle("2020 Mercedes GLC 300 4 Door").unwrap();
        assert_eq!(info.make_model, "Mercedes GLC 300");
    }

    #[test]
    fn test_extract_vehicle_unknown_make() {
        assert_eq!(extract_vehicle("2023 Yugo GV 4 Door"), None);
    }
}
