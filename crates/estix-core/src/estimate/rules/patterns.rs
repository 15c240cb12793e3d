//! Regex patterns for estimate-sheet field extraction.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // VIN: label followed (possibly across a line break) by the 17-char
    // token. VINs never contain I, O, or Q.
    pub static ref VIN_PATTERN: Regex = Regex::new(
        r"VIN\s*\n?\s*([A-HJ-NPR-Z0-9]{17})"
    ).unwrap();

    // License plate: two-letter state prefix, dash, then letters/digits
    // (spaces allowed inside the tail).
    pub static ref PLATE_PATTERN: Regex = Regex::new(
        r"License\s*\n?\s*([A-Z]{2}-[A-Z0-9 ]+)"
    ).unwrap();

    // Vehicle descriptor: year, manufacturer, model text up to the first
    // door-count / "Van" / engine-displacement marker.
    pub static ref VEHICLE_PATTERN: Regex = Regex::new(concat!(
        r"(?i)((?:19|20)\d{2})\s+",
        r"(Honda|Toyota|Ford|Chevrolet|Nissan|Hyundai|Kia|BMW|Mercedes-Benz|Mercedes|Audi|",
        r"Lexus|Mazda|Subaru|Volkswagen|Jeep|Dodge|GMC|Ram|Acura|Infiniti|Volvo|Porsche|",
        r"Land\s*Rover|Range\s*Rover|Cadillac|Lincoln|Buick|Chrysler|Tesla|Rivian|Lucid)",
        r"\s+([^\n]+?)(?:\s+\d+\s*Door|\s+Van|\s+\d+\.\d+L)",
    )).unwrap();

    // Trailing wheelbase annotation on the model text, e.g. `144" WB ...`.
    pub static ref WHEELBASE_SUFFIX: Regex = Regex::new(
        r#"(?i)\s+\d+["']?\s*WB.*$"#
    ).unwrap();

    // Character class a part-number line must fully match.
    pub static ref PART_NUMBER_LINE: Regex = Regex::new(
        r"^[A-Z0-9 -]+$"
    ).unwrap();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vin_pattern_rejects_ambiguous_letters() {
        // I, O, Q are not valid VIN characters
        assert!(!VIN_PATTERN.is_match("VIN 1HGCM82633A00435I"));
        assert!(VIN_PATTERN.is_match("VIN 1HGCM82633A004352"));
    }

    #[test]
    fn test_vehicle_pattern_terminators() {
        assert!(VEHICLE_PATTERN.is_match("2023 Honda Accord 4 Door"));
        assert!(VEHICLE_PATTERN.is_match("2021 Ford Transit Van"));
        assert!(VEHICLE_PATTERN.is_match("2019 Toyota Camry 2.5L"));
        assert!(!VEHICLE_PATTERN.is_match("2023 Honda Accord"));
    }

    #[test]
    fn test_part_number_line_class() {
        assert!(PART_NUMBER_LINE.is_match("12345-AB"));
        assert!(PART_NUMBER_LINE.is_match("04711-TVA-A90ZZ 1"));
        assert!(!PART_NUMBER_LINE.is_match("12345-ab"));
        assert!(!PART_NUMBER_LINE.is_match("$123.45"));
    }
}
