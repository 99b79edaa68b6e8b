pub mod csv;
pub mod excel;

use crate::error::ReclamoError;
use crate::model::RawTable;
use std::fmt;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SheetFormat {
    Xlsx,
    Xls,
    Csv,
}

impl fmt::Display for SheetFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SheetFormat::Xlsx => write!(f, "xlsx"),
            SheetFormat::Xls => write!(f, "xls"),
            SheetFormat::Csv => write!(f, "csv"),
        }
    }
}

/// Ordered list of readers to try. The order is the strategy: datasets
/// arrive without reliable content types, so decoding walks the plan and
/// takes the first reader that accepts the bytes.
#[derive(Debug, Clone)]
pub struct DecodePlan {
    pub formats: Vec<SheetFormat>,
}

impl Default for DecodePlan {
    fn default() -> Self {
        DecodePlan {
            formats: vec![SheetFormat::Xlsx, SheetFormat::Xls, SheetFormat::Csv],
        }
    }
}

impl DecodePlan {
    /// Default order with the format matching the source's extension
    /// moved to the front.
    pub fn for_source(name: &str) -> DecodePlan {
        let lower = name.to_lowercase();
        let preferred = if lower.ends_with(".csv") {
            Some(SheetFormat::Csv)
        } else if lower.ends_with(".xlsx") {
            Some(SheetFormat::Xlsx)
        } else if lower.ends_with(".xls") {
            Some(SheetFormat::Xls)
        } else {
            None
        };

        let mut plan = DecodePlan::default();
        if let Some(first) = preferred {
            plan.formats.retain(|f| *f != first);
            plan.formats.insert(0, first);
        }
        plan
    }
}

/// Decode dataset bytes with the first reader in the plan that accepts
/// them. When every reader fails, the error lists each attempt with its
/// reason.
pub fn decode_table(bytes: &[u8], plan: &DecodePlan) -> Result<RawTable, ReclamoError> {
    let mut attempts = Vec::new();

    for format in &plan.formats {
        let result = match format {
            SheetFormat::Xlsx => excel::decode_xlsx(bytes),
            SheetFormat::Xls => excel::decode_xls(bytes),
            SheetFormat::Csv => csv::decode_csv(bytes),
        };
        match result {
            Ok(table) => {
                debug!(%format, rows = table.rows.len(), columns = table.headers.len(), "decoded dataset");
                return Ok(table);
            }
            Err(reason) => {
                debug!(%format, %reason, "reader failed, trying next");
                attempts.push(format!("{format}: {reason}"));
            }
        }
    }

    Err(ReclamoError::Decode {
        attempted: attempts.join("; "),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_csv_reached_through_fallback() {
        let bytes = b"fecha,queja\n2024-01-01,producto roto\n";
        let table = decode_table(bytes, &DecodePlan::default()).unwrap();
        assert_eq!(table.headers, vec!["fecha", "queja"]);
    }

    #[test]
    fn test_all_readers_reported_on_failure() {
        let err = decode_table(&[0xff, 0xfe, 0x00], &DecodePlan::default()).unwrap_err();
        match err {
            ReclamoError::Decode { attempted } => {
                assert!(attempted.contains("xlsx:"));
                assert!(attempted.contains("xls:"));
                assert!(attempted.contains("csv:"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_extension_biases_plan() {
        let plan = DecodePlan::for_source("quejas.csv");
        assert_eq!(plan.formats[0], SheetFormat::Csv);
        assert_eq!(plan.formats.len(), 3);

        let plan = DecodePlan::for_source("quejas.xls");
        assert_eq!(plan.formats[0], SheetFormat::Xls);

        let plan = DecodePlan::for_source("https://example.com/data");
        assert_eq!(plan.formats[0], SheetFormat::Xlsx);
    }
}
