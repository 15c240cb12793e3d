//! Keyword tables driving the line-item scanner.
//!
//! Held as data rather than inline logic so individual gates can be
//! tested and tuned without touching the scan control flow. All lists
//! are tuned to one recurring estimate-sheet family.

/// Substrings (lowercase) that mark a line as mentioning a body part.
/// A line matching none of these (and none of [`SPECIAL_PHRASES`]) is
/// never a candidate repair operation.
pub const BODY_PART_KEYWORDS: &[&str] = &[
    "bumper", "cover", "grille", "hood", "fender", "door", "panel",
    "rocker", "quarter", "trunk", "tailgate", "mirror", "lamp",
    "garnish", "molding", "bracket", "support", "assembly", "guard",
    "handle", "mudguard", "wheel opening", "belt", "sensor", "pump",
    "glass", "absorber", "condenser", "radiator", "frame", "plate",
    "shield", "lock", "latch", "hinge", "regulator", "motor", "pillar",
];

/// Multi-word body phrases that pass the body-part gate on their own.
pub const SPECIAL_PHRASES: &[&str] = &["air bag", "seat belt", "w/shield"];

/// Equipment/feature phrases (lowercase) that share vocabulary with body
/// parts but never denote a repair operation.
pub const EXCLUDE_PHRASES: &[&str] = &[
    "automatic headlights", "power door locks", "power remote", "power steering",
    "power windows", "heated mirror", "lumbar support", "daytime running",
    "tonneau cover", "air conditioning", "cruise control", "steering wheel",
    "bluetooth", "keyless", "4wd", "awd", "cyl gas", "door utility", "audio control",
];

/// Section-header lines that label a subsection of the sheet rather
/// than describing a specific operation. Exact-match against the full
/// trimmed line.
pub const SECTION_HEADERS: &[&str] = &[
    "Front Bumper", "Front Fender", "Front Door", "Rear Bumper", "Hood",
    "Headlamps", "Fog Lamps", "Front Lamps", "Grille", "Seat Belts",
    "Air Bags", "Cooling", "Radiator Support", "Air Bag System",
];

/// Generic nouns too unspecific to stand alone as a description.
pub const GENERIC_WORDS: &[&str] = &["Garnish", "Assembly", "Support", "Bracket"];

/// Keywords that end a wrapped description. Checked both as an exact
/// match and as a line prefix; the two checks are deliberately kept
/// separate.
pub const END_KEYWORDS: &[&str] = &[
    "Remove", "Replace", "Blend", "Refinish", "Repair", "Overhaul",
    "Body", "INC", "Existing", "Aftermarket", "New", "Yes", "No",
];

/// Stray tokens that disqualify an assembled description outright.
pub const DESC_DENYLIST: &[&str] = &["AUTO", "Body", "INC", "Inc", "Existing"];

/// Lines skipped while scanning forward for a part number.
pub const PART_SKIP_LINES: &[&str] = &[
    "Body", "Refinish", "New", "Aftermarket", "Recycled", "Existing",
    "Remove /", "Replace",
];

/// Column/footer words that match the part-number character class but
/// are never part numbers.
pub const PART_STRUCTURAL_WORDS: &[&str] = &["Order", "Labor", "Total", "Sublet", "Notes"];

/// Tokens that must not be appended as a part-number continuation.
pub const PART_TAIL_DENYLIST: &[&str] = &["Yes", "No", "New", "Body", "Refinish", "1", "2", "3"];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exclude_phrases_are_lowercase() {
        for phrase in EXCLUDE_PHRASES {
            assert_eq!(*phrase, phrase.to_lowercase(), "exclude phrases match lowercased lines");
        }
    }

    #[test]
    fn test_body_part_keywords_are_lowercase() {
        for kw in BODY_PART_KEYWORDS.iter().chain(SPECIAL_PHRASES) {
            assert_eq!(*kw, kw.to_lowercase());
        }
    }

    #[test]
    fn test_no_duplicate_end_keywords() {
        let mut seen = std::collections::HashSet::new();
        for kw in END_KEYWORDS {
            assert!(seen.insert(kw), "duplicate end keyword: {}", kw);
        }
    }
}
