use reclamo_core::error::ReclamoError;
use reclamo_core::metrics::MetricsSummary;
use reclamo_core::model::ComplaintRecord;
use reclamo_core::normalize::RowWarning;
use reclamo_core::parsing::ColumnMap;

pub fn print_analysis(
    summary: &MetricsSummary,
    records: &[ComplaintRecord],
    warnings: &[RowWarning],
) -> Result<(), ReclamoError> {
    let payload = serde_json::json!({
        "summary": summary,
        "records": records,
        "warnings": warnings,
    });
    println!("{}", serde_json::to_string_pretty(&payload)?);
    Ok(())
}

pub fn print_columns(columns: &ColumnMap) -> Result<(), ReclamoError> {
    println!("{}", serde_json::to_string_pretty(columns)?);
    Ok(())
}
