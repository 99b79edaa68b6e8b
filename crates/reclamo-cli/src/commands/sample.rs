use reclamo_core::error::ReclamoError;
use reclamo_core::export::table_to_csv;
use reclamo_core::rng::SyntheticRng;
use reclamo_core::sample::sample_table;
use std::path::Path;

pub fn run(rows: usize, seed: Option<u64>, out: Option<&Path>) -> Result<(), ReclamoError> {
    let mut rng = match seed {
        Some(s) => SyntheticRng::seeded(s),
        None => SyntheticRng::from_entropy(),
    };
    let table = sample_table(rows, &mut rng);
    let csv = table_to_csv(&table)?;

    match out {
        Some(path) => {
            std::fs::write(path, csv)?;
            println!("Wrote {rows} sample rows to {}", path.display());
        }
        None => print!("{csv}"),
    }

    Ok(())
}
