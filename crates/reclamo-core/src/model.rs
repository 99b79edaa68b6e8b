use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Product label used when no product column is bound or the cell is empty.
pub const UNSPECIFIED_PRODUCT: &str = "Producto sin especificar";

/// One cell of a decoded dataset.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Empty,
    Text(String),
    Number(f64),
    /// Native spreadsheet date cell.
    DateTime(NaiveDateTime),
}

impl Cell {
    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// Textual view of the cell, `None` when empty.
    pub fn as_text(&self) -> Option<String> {
        match self {
            Cell::Empty => None,
            Cell::Text(s) => Some(s.clone()),
            Cell::Number(n) => Some(n.to_string()),
            Cell::DateTime(dt) => Some(dt.date().to_string()),
        }
    }
}

/// A decoded tabular dataset: free-form headers plus one row per complaint.
///
/// Rows may be ragged; indexing past the end of a row reads as an empty
/// cell. Fully empty rows are dropped at decode time.
#[derive(Debug, Clone, Default)]
pub struct RawTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<Cell>>,
}

impl RawTable {
    /// Cell at `idx` within `row`, `Empty` when the row is too short.
    pub fn cell<'a>(row: &'a [Cell], idx: usize) -> &'a Cell {
        row.get(idx).unwrap_or(&Cell::Empty)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Unclassified,
    Quality,
    Color,
    WrongItem,
    SizeMismatch,
    Delivery,
    Other,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::Unclassified => write!(f, "Sin clasificar"),
            Category::Quality => write!(f, "Calidad"),
            Category::Color => write!(f, "Colores"),
            Category::WrongItem => write!(f, "Pedido Equivocado"),
            Category::SizeMismatch => write!(f, "Talla/Tamaño"),
            Category::Delivery => write!(f, "Entrega"),
            Category::Other => write!(f, "Otros"),
        }
    }
}

impl Category {
    /// Parse either the serialized token or the display label, case-insensitively.
    pub fn from_str_loose(s: &str) -> Option<Category> {
        let lower = s.trim().to_lowercase();
        match lower.as_str() {
            "unclassified" | "sin clasificar" => Some(Category::Unclassified),
            "quality" | "calidad" => Some(Category::Quality),
            "color" | "colores" => Some(Category::Color),
            "wrong_item" | "pedido equivocado" => Some(Category::WrongItem),
            "size_mismatch" | "talla/tamaño" => Some(Category::SizeMismatch),
            "delivery" | "entrega" => Some(Category::Delivery),
            "other" | "otros" => Some(Category::Other),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    Resolved,
    InProgress,
    Pending,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Resolved => write!(f, "Resuelto"),
            Status::InProgress => write!(f, "En Proceso"),
            Status::Pending => write!(f, "Pendiente"),
        }
    }
}

impl Status {
    pub fn from_str_loose(s: &str) -> Option<Status> {
        let lower = s.trim().to_lowercase();
        match lower.as_str() {
            "resolved" | "resuelto" => Some(Status::Resolved),
            "in_progress" | "en proceso" => Some(Status::InProgress),
            "pending" | "pendiente" => Some(Status::Pending),
            _ => None,
        }
    }
}

/// Which satisfaction measurement is being estimated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// From the complaint text, before any resolution.
    Initial,
    /// From the response text, once the complaint is resolved.
    Final,
}

/// One normalized, classified complaint. Immutable once built; filtering
/// and aggregation never mutate records.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComplaintRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    pub product: String,
    pub complaint_text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response_text: Option<String>,
    pub category: Category,
    pub status: Status,
    pub satisfaction_before: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub satisfaction_after: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resolution_days: Option<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_labels_round_trip() {
        for cat in [
            Category::Unclassified,
            Category::Quality,
            Category::Color,
            Category::WrongItem,
            Category::SizeMismatch,
            Category::Delivery,
            Category::Other,
        ] {
            assert_eq!(Category::from_str_loose(&cat.to_string()), Some(cat));
        }
    }

    #[test]
    fn test_status_loose_parsing() {
        assert_eq!(Status::from_str_loose("RESUELTO"), Some(Status::Resolved));
        assert_eq!(Status::from_str_loose("en proceso"), Some(Status::InProgress));
        assert_eq!(Status::from_str_loose("in_progress"), Some(Status::InProgress));
        assert_eq!(Status::from_str_loose("???"), None);
    }

    #[test]
    fn test_ragged_row_reads_empty() {
        let row = vec![Cell::Text("a".into())];
        assert_eq!(RawTable::cell(&row, 0), &Cell::Text("a".into()));
        assert_eq!(RawTable::cell(&row, 5), &Cell::Empty);
    }

    #[test]
    fn test_cell_text_views() {
        assert_eq!(Cell::Empty.as_text(), None);
        assert_eq!(Cell::Number(5.0).as_text().as_deref(), Some("5"));
        assert_eq!(Cell::Text("x".into()).as_text().as_deref(), Some("x"));
    }
}
