use crate::commands::{AnalyzeOpts, FilterOpts, InputOpts};
use chrono::Local;
use reclamo_core::error::ReclamoError;
use reclamo_core::export::{records_to_csv, text_report};
use reclamo_core::metrics::MetricsSummary;
use std::path::Path;

pub fn run(
    input: &InputOpts,
    analyze: &AnalyzeOpts,
    filter: &FilterOpts,
    out: &Path,
    report: Option<&Path>,
) -> Result<(), ReclamoError> {
    let table = input.load_table()?;
    let options = analyze.to_options(input.bindings())?;
    let analysis = reclamo_core::analyze_table(&table, &options)?;

    let records = filter.to_filter()?.apply(&analysis.records);

    let csv = records_to_csv(&records)?;
    std::fs::write(out, csv)?;
    println!("Wrote {} records to {}", records.len(), out.display());

    if let Some(path) = report {
        let summary = MetricsSummary::compute(&records);
        let text = text_report(&summary, Local::now().naive_local());
        std::fs::write(path, text)?;
        println!("Wrote report to {}", path.display());
    }

    for warning in &analysis.warnings {
        eprintln!(
            "warning: row {}, {}: {}",
            warning.row, warning.column, warning.message
        );
    }

    Ok(())
}
