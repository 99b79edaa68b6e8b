use std::io::Cursor;

use calamine::{Data, Reader, Xls, Xlsx};

use crate::model::{Cell, RawTable};

/// Decode xlsx bytes: first worksheet, first row as headers.
pub fn decode_xlsx(bytes: &[u8]) -> Result<RawTable, String> {
    let mut workbook: Xlsx<_> = calamine::open_workbook_from_rs(Cursor::new(bytes))
        .map_err(|e| format!("failed to open xlsx: {e}"))?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| "workbook has no sheets".to_string())?
        .map_err(|e| format!("failed to read first sheet: {e}"))?;
    range_to_table(&range)
}

/// Decode legacy xls bytes: first worksheet, first row as headers.
pub fn decode_xls(bytes: &[u8]) -> Result<RawTable, String> {
    let mut workbook: Xls<_> = calamine::open_workbook_from_rs(Cursor::new(bytes))
        .map_err(|e| format!("failed to open xls: {e}"))?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| "workbook has no sheets".to_string())?
        .map_err(|e| format!("failed to read first sheet: {e}"))?;
    range_to_table(&range)
}

fn range_to_table(range: &calamine::Range<Data>) -> Result<RawTable, String> {
    let mut rows_iter = range.rows();
    let headers: Vec<String> = match rows_iter.next() {
        Some(row) => row.iter().map(header_text).collect(),
        None => return Err("sheet is empty".into()),
    };
    if headers.iter().all(|h| h.is_empty()) {
        return Err("header row is empty".into());
    }

    let mut rows = Vec::new();
    for row in rows_iter {
        let cells: Vec<Cell> = row.iter().map(cell_from_data).collect();
        if cells.iter().all(Cell::is_empty) {
            continue;
        }
        rows.push(cells);
    }

    Ok(RawTable { headers, rows })
}

fn header_text(data: &Data) -> String {
    match data {
        Data::String(s) => s.trim().to_string(),
        Data::Empty => String::new(),
        other => format!("{other}").trim().to_string(),
    }
}

fn cell_from_data(data: &Data) -> Cell {
    match data {
        Data::Empty => Cell::Empty,
        Data::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                Cell::Empty
            } else {
                Cell::Text(trimmed.to_string())
            }
        }
        Data::Float(f) => Cell::Number(*f),
        Data::Int(i) => Cell::Number(*i as f64),
        Data::Bool(b) => Cell::Text(b.to_string()),
        Data::DateTime(dt) => match dt.as_datetime() {
            Some(ndt) => Cell::DateTime(ndt),
            None => Cell::Number(dt.as_f64()),
        },
        Data::DateTimeIso(s) => Cell::Text(s.clone()),
        Data::DurationIso(s) => Cell::Text(s.clone()),
        Data::Error(_) => Cell::Empty,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_mapping() {
        assert_eq!(cell_from_data(&Data::Empty), Cell::Empty);
        assert_eq!(cell_from_data(&Data::String("  ".into())), Cell::Empty);
        assert_eq!(
            cell_from_data(&Data::String(" hola ".into())),
            Cell::Text("hola".into())
        );
        assert_eq!(cell_from_data(&Data::Int(3)), Cell::Number(3.0));
        assert_eq!(cell_from_data(&Data::Bool(true)), Cell::Text("true".into()));
    }

    #[test]
    fn test_garbage_bytes_rejected() {
        assert!(decode_xlsx(b"fecha,queja\n2024-01-01,roto\n").is_err());
        assert!(decode_xls(&[0u8, 1, 2, 3]).is_err());
    }
}
