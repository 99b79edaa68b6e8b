use crate::model::Cell;
use chrono::{NaiveDate, NaiveDateTime};

// Formats tried in order. Day-first forms come before month-first,
// matching the locale of the source data.
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%d/%m/%Y", "%d-%m-%Y", "%m/%d/%Y"];
const DATETIME_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%d/%m/%Y %H:%M"];

/// Parse a date string permissively. Returns `None` when no known format
/// matches; callers decide whether that degrades to a warning.
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }
    for fmt in DATE_FORMATS {
        if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
            return Some(d);
        }
    }
    for fmt in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt.date());
        }
    }
    None
}

/// Outcome of reading a date cell. Distinguishes a genuinely absent value
/// (no warning) from one that is present but unparsable (row warning).
#[derive(Debug, Clone, PartialEq)]
pub enum DateParse {
    Missing,
    Parsed(NaiveDate),
    /// Raw value kept for the warning message.
    Invalid(String),
}

pub fn parse_date_cell(cell: &Cell) -> DateParse {
    match cell {
        Cell::Empty => DateParse::Missing,
        Cell::DateTime(dt) => DateParse::Parsed(dt.date()),
        Cell::Text(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                DateParse::Missing
            } else {
                match parse_date(trimmed) {
                    Some(d) => DateParse::Parsed(d),
                    None => DateParse::Invalid(trimmed.to_string()),
                }
            }
        }
        // Bare numbers in a date column (e.g. unformatted serials) are
        // not interpreted as dates.
        Cell::Number(n) => DateParse::Invalid(n.to_string()),
    }
}
