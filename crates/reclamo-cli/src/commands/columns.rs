use crate::commands::InputOpts;
use crate::output;
use reclamo_core::error::ReclamoError;
use reclamo_core::parsing::resolve_columns;

pub fn run(input: &InputOpts, output_format: &str) -> Result<(), ReclamoError> {
    let table = input.load_table()?;
    let columns = resolve_columns(&table.headers, &input.bindings())?;

    match output_format {
        "json" => output::json::print_columns(&columns)?,
        _ => output::table::print_columns(&columns, &table.headers),
    }

    Ok(())
}
