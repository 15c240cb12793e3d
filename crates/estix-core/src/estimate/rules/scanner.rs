//! Line-item scanner: the cursor-driven walk that turns the normalized
//! line stream into repair items.
//!
//! The scan itself is a pure function from `(lines, index)` to an
//! outcome carrying the item (if any) and the number of lines consumed;
//! [`scan_items`] owns the cursor. All phrase and keyword lists live in
//! [`super::tables`].

use std::collections::HashSet;

use tracing::{debug, trace};

use super::patterns::PART_NUMBER_LINE;
use super::tables::{
    BODY_PART_KEYWORDS, DESC_DENYLIST, END_KEYWORDS, EXCLUDE_PHRASES, GENERIC_WORDS,
    PART_SKIP_LINES, PART_STRUCTURAL_WORDS, PART_TAIL_DENYLIST, SECTION_HEADERS, SPECIAL_PHRASES,
};
use crate::models::estimate::{JobType, RepairItem};

/// Outcome of scanning a single candidate position.
#[derive(Debug, Clone)]
pub struct ScanOutcome {
    /// The produced item, if the line survived all gates.
    pub item: Option<RepairItem>,
    /// Lines consumed: the candidate itself plus any continuation line
    /// absorbed by description assembly. Always at least 1.
    pub consumed: usize,
}

impl ScanOutcome {
    fn skip() -> Self {
        Self {
            item: None,
            consumed: 1,
        }
    }
}

/// Split raw page text into trimmed, non-empty lines, order preserved.
pub fn normalize_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(str::to_string)
        .collect()
}

/// Find the index where line items begin: the first line containing
/// `Line #`, or failing that the first line containing `Description`
/// whose two preceding and two following lines also mention
/// `Operation`. Defaults to 0 so an off-format sheet is still scanned.
pub fn find_items_start(lines: &[String]) -> usize {
    for (i, line) in lines.iter().enumerate() {
        if line.contains("Line #") {
            return i;
        }
        if line.contains("Description") {
            let lo = i.saturating_sub(2);
            let hi = (i + 3).min(lines.len());
            if lines[lo..hi].iter().any(|l| l.contains("Operation")) {
                return i;
            }
        }
    }
    0
}

/// True when the line, stripped of the given punctuation, is a bare
/// number.
fn is_numeric_after_strip(line: &str, strip: &[char]) -> bool {
    let stripped: String = line.chars().filter(|c| !strip.contains(c)).collect();
    !stripped.is_empty() && stripped.chars().all(|c| c.is_ascii_digit())
}

/// Classify the job type by searching the candidate line joined with up
/// to the next 4 lines. Blend wins over Replace wins over Repair.
pub fn classify_job_type(lines: &[String], i: usize) -> Option<JobType> {
    let end = (i + 5).min(lines.len());
    let window = lines[i..end].join(" ");

    if window.contains("Blend") {
        Some(JobType::Blend)
    } else if window.contains("Remove /") && window.contains("Replace") {
        Some(JobType::Replace)
    } else if window.contains("Repair") {
        Some(JobType::Repair)
    } else {
        None
    }
}

/// Assemble the description for the candidate at `i`: truncate at the
/// first operation keyword, then pull in at most one wrapped
/// continuation line from the next 2 lines. Returns the description and
/// the number of continuation lines consumed.
pub fn assemble_description(lines: &[String], i: usize) -> (String, usize) {
    let mut desc = lines[i].trim().to_string();

    for kw in ["Remove /", "Remove", "Replace"] {
        if let Some(pos) = desc.find(kw) {
            desc = desc[..pos].trim().to_string();
        }
    }

    let mut consumed = 0;
    let end = (i + 3).min(lines.len());
    for next in &lines[i + 1..end] {
        let next = next.trim();

        // The exact-match and prefix checks against the end keywords are
        // deliberately separate rules.
        if next.is_empty()
            || END_KEYWORDS.contains(&next)
            || is_numeric_after_strip(next, &['.', '#'])
            || END_KEYWORDS.iter().any(|kw| next.starts_with(kw))
        {
            break;
        }

        if next.len() > 2 && next.chars().next().is_some_and(|c| c.is_uppercase()) {
            desc = format!("{} {}", desc, next);
            consumed += 1;
            break;
        }
    }

    (desc, consumed)
}

/// Scan forward up to 15 lines from the candidate for a part number:
/// skip operation/labor noise and bare numbers, take the first
/// uppercase-alphanumeric line containing a digit, and append its
/// successor when that also looks like part-number text.
pub fn resolve_part_number(lines: &[String], i: usize) -> String {
    let end = (i + 15).min(lines.len());

    for k in i..end {
        let line = lines[k].trim();

        if PART_SKIP_LINES.contains(&line) {
            continue;
        }
        if is_numeric_after_strip(line, &['.', '#', '*', '$']) {
            continue;
        }

        if line.len() >= 3
            && PART_NUMBER_LINE.is_match(line)
            && line.chars().any(|c| c.is_ascii_digit())
            && !PART_STRUCTURAL_WORDS.contains(&line)
        {
            let mut part = line.to_string();

            if let Some(next) = lines.get(k + 1) {
                let next = next.trim();
                if PART_NUMBER_LINE.is_match(next)
                    && next.len() < 15
                    && !next.starts_with('$')
                    && !next.starts_with('(')
                    && !PART_TAIL_DENYLIST.contains(&next)
                    && !(next.len() <= 3 && next.chars().all(|c| c.is_ascii_digit()))
                {
                    part = format!("{} {}", part, next);
                }
            }

            trace!("Resolved part number {:?} at line {}", part, k);
            return part;
        }
    }

    String::new()
}

/// Scan the candidate at `i`. Pure: no state beyond the returned
/// outcome.
pub fn scan_line(lines: &[String], i: usize) -> ScanOutcome {
    let line = &lines[i];
    let lower = line.to_lowercase();

    // Gate 1: feature phrases that merely share body-part vocabulary.
    if EXCLUDE_PHRASES.iter().any(|p| lower.contains(p)) {
        return ScanOutcome::skip();
    }

    // Gate 2: must mention a body part at all.
    let has_part = BODY_PART_KEYWORDS.iter().any(|kw| lower.contains(kw))
        || SPECIAL_PHRASES.iter().any(|p| lower.contains(p));
    if !has_part {
        return ScanOutcome::skip();
    }

    // Gate 3: section headers label a subsection, not an operation.
    if SECTION_HEADERS.contains(&line.as_str()) {
        return ScanOutcome::skip();
    }

    // Gate 4: generic structural nouns cannot stand alone.
    if GENERIC_WORDS.contains(&line.as_str()) {
        return ScanOutcome::skip();
    }

    let Some(job_type) = classify_job_type(lines, i) else {
        return ScanOutcome::skip();
    };

    let (desc, continuation) = assemble_description(lines, i);

    // Trivially described operations are dropped, but their
    // continuation lines stay consumed.
    if desc.len() <= 3 || DESC_DENYLIST.contains(&desc.as_str()) {
        return ScanOutcome {
            item: None,
            consumed: 1 + continuation,
        };
    }

    let part_num = if job_type == JobType::Replace {
        resolve_part_number(lines, i)
    } else {
        String::new()
    };

    ScanOutcome {
        item: Some(RepairItem::new(job_type, desc, part_num)),
        consumed: 1 + continuation,
    }
}

/// Walk the line stream from the items-start offset and collect the raw
/// (not yet de-duplicated) item list.
pub fn scan_items(lines: &[String]) -> Vec<RepairItem> {
    let start = find_items_start(lines);
    let mut items = Vec::new();

    let mut i = start;
    while i < lines.len() {
        let outcome = scan_line(lines, i);
        if let Some(item) = outcome.item {
            debug!("Found {} item: {:?}", item.job_type, item.desc);
            items.push(item);
        }
        i += outcome.consumed;
    }

    items
}

/// Collapse repeated operations: first occurrence of each
/// `(type, lower(desc))` key wins, relative order preserved.
pub fn dedup_items(items: Vec<RepairItem>) -> Vec<RepairItem> {
    let mut seen = HashSet::new();
    items
        .into_iter()
        .filter(|item| seen.insert(item.dedup_key()))
        .collect()
}
