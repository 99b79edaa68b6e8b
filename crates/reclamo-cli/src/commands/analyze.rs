use crate::commands::{AnalyzeOpts, FilterOpts, InputOpts};
use crate::output;
use reclamo_core::error::ReclamoError;
use reclamo_core::metrics::MetricsSummary;

pub fn run(
    input: &InputOpts,
    analyze: &AnalyzeOpts,
    filter: &FilterOpts,
    output_format: &str,
) -> Result<(), ReclamoError> {
    let table = input.load_table()?;
    let options = analyze.to_options(input.bindings())?;
    let analysis = reclamo_core::analyze_table(&table, &options)?;

    let records = filter.to_filter()?.apply(&analysis.records);
    let summary = MetricsSummary::compute(&records);

    match output_format {
        "json" => output::json::print_analysis(&summary, &records, &analysis.warnings)?,
        _ => output::table::print_summary(&summary, &analysis.warnings),
    }

    Ok(())
}
