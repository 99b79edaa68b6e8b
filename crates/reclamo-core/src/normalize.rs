use crate::classify::{classify_category, classify_status, classify_status_degraded};
use crate::classify::satisfaction::estimate_satisfaction;
use crate::model::{Cell, ComplaintRecord, Phase, RawTable, Status, UNSPECIFIED_PRODUCT};
use crate::parsing::dates::{parse_date_cell, DateParse};
use crate::parsing::ColumnMap;
use crate::rng::SyntheticRng;
use crate::rules::schema::KeywordRules;
use serde::Serialize;
use tracing::debug;

/// Resolved records get their resolution time from this range (days).
/// Synthetic, like the satisfaction scores.
const RESOLUTION_DAYS: (u32, u32) = (1, 9);

/// A row-local problem that degraded a field instead of failing the run.
#[derive(Debug, Clone, Serialize)]
pub struct RowWarning {
    /// 1-based data row number (header row not counted).
    pub row: usize,
    pub column: String,
    pub message: String,
}

/// Result of one normalization pass: the resolved columns, one record per
/// input row in input order, and any row-level warnings.
#[derive(Debug, Clone, Serialize)]
pub struct Analysis {
    pub columns: ColumnMap,
    pub records: Vec<ComplaintRecord>,
    pub warnings: Vec<RowWarning>,
}

/// Normalize a decoded table into classified complaint records.
///
/// One output per input row, order-preserving. Row-local problems degrade
/// the affected field and add a warning; they never drop the row and
/// never abort the run.
pub fn normalize_table(
    table: &RawTable,
    columns: &ColumnMap,
    rules: &KeywordRules,
    rng: &mut SyntheticRng,
) -> Analysis {
    let mut records = Vec::with_capacity(table.rows.len());
    let mut warnings = Vec::new();

    for (i, row) in table.rows.iter().enumerate() {
        let row_no = i + 1;

        let date = match parse_date_cell(RawTable::cell(row, columns.date.index)) {
            DateParse::Parsed(d) => Some(d),
            DateParse::Missing => None,
            DateParse::Invalid(raw) => {
                warnings.push(RowWarning {
                    row: row_no,
                    column: columns.date.name.clone(),
                    message: format!("unparsable date '{raw}', field left absent"),
                });
                None
            }
        };

        let product = columns
            .product
            .as_ref()
            .and_then(|col| cell_text(row, col.index))
            .unwrap_or_else(|| UNSPECIFIED_PRODUCT.to_string());

        let complaint_text = cell_text(row, columns.complaint.index).unwrap_or_default();

        let response_text = columns
            .response
            .as_ref()
            .and_then(|col| cell_text(row, col.index));

        let category = classify_category(rules, &complaint_text);

        let status = match &columns.status {
            Some(col) => {
                let status_raw = cell_text(row, col.index);
                classify_status(rules, status_raw.as_deref(), response_text.as_deref())
            }
            None => classify_status_degraded(rules, response_text.as_deref()),
        };

        // The Initial phase always yields a score.
        let satisfaction_before =
            estimate_satisfaction(&rules.sentiment, Some(&complaint_text), Phase::Initial, rng)
                .unwrap_or(2);

        let (satisfaction_after, resolution_days) = if status == Status::Resolved {
            let after = estimate_satisfaction(
                &rules.sentiment,
                response_text.as_deref(),
                Phase::Final,
                rng,
            );
            (after, Some(rng.days_between(RESOLUTION_DAYS.0, RESOLUTION_DAYS.1)))
        } else {
            (None, None)
        };

        records.push(ComplaintRecord {
            date,
            product,
            complaint_text,
            response_text,
            category,
            status,
            satisfaction_before,
            satisfaction_after,
            resolution_days,
        });
    }

    if !warnings.is_empty() {
        debug!(rows = warnings.len(), "normalization degraded some rows");
    }

    Analysis {
        columns: columns.clone(),
        records,
        warnings,
    }
}

/// Trimmed text of a cell, `None` when empty or blank.
fn cell_text(row: &[Cell], idx: usize) -> Option<String> {
    RawTable::cell(row, idx)
        .as_text()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}
