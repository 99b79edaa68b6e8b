pub mod columns;
pub mod dates;

pub use columns::{normalize_header, resolve_columns, ColumnBindings, ColumnMap, ResolvedColumn};
pub use dates::{parse_date, parse_date_cell, DateParse};

/// Treat whitespace-only text as absent. Classification and satisfaction
/// estimation use this so blank cells behave like missing ones.
pub fn blank_to_none(text: Option<&str>) -> Option<&str> {
    text.map(str::trim).filter(|t| !t.is_empty())
}
