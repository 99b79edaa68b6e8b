use csv::ReaderBuilder;

use crate::model::{Cell, RawTable};

/// Decode CSV bytes. Rows may be ragged; every cell reads as trimmed
/// text. Non-UTF-8 input is rejected, which keeps binary blobs from
/// slipping through the fallback chain as one-column noise.
pub fn decode_csv(bytes: &[u8]) -> Result<RawTable, String> {
    let mut reader = ReaderBuilder::new().flexible(true).from_reader(bytes);

    let headers: Vec<String> = reader
        .headers()
        .map_err(|e| format!("failed to read csv header: {e}"))?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();
    if headers.is_empty() || headers.iter().all(|h| h.is_empty()) {
        return Err("header row is empty".into());
    }

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| format!("failed to read csv row: {e}"))?;
        let cells: Vec<Cell> = record
            .iter()
            .map(|field| {
                let trimmed = field.trim();
                if trimmed.is_empty() {
                    Cell::Empty
                } else {
                    Cell::Text(trimmed.to_string())
                }
            })
            .collect();
        if cells.iter().all(Cell::is_empty) {
            continue;
        }
        rows.push(cells);
    }

    Ok(RawTable { headers, rows })
}
