use std::fmt::Write;

use chrono::NaiveDateTime;

use crate::error::ReclamoError;
use crate::metrics::MetricsSummary;
use crate::model::{ComplaintRecord, RawTable};

/// Canonical export header. These names resolve back through the column
/// inference, so an exported file re-analyzes cleanly.
const CSV_HEADERS: [&str; 9] = [
    "fecha",
    "producto",
    "descripcion_queja",
    "respuesta",
    "tipo_error",
    "estado",
    "satisfaccion_inicial",
    "satisfaccion_final",
    "dias_resolucion",
];

/// Serialize records as UTF-8 CSV with ISO-8601 dates. Absent values
/// write as empty fields; category and status write as display labels.
pub fn records_to_csv(records: &[ComplaintRecord]) -> Result<String, ReclamoError> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(CSV_HEADERS)?;
    for r in records {
        writer.write_record([
            r.date.map(|d| d.to_string()).unwrap_or_default(),
            r.product.clone(),
            r.complaint_text.clone(),
            r.response_text.clone().unwrap_or_default(),
            r.category.to_string(),
            r.status.to_string(),
            r.satisfaction_before.to_string(),
            r.satisfaction_after.map(|v| v.to_string()).unwrap_or_default(),
            r.resolution_days.map(|v| v.to_string()).unwrap_or_default(),
        ])?;
    }
    finish(writer)
}

/// Serialize a raw table as CSV (used for generated sample datasets).
pub fn table_to_csv(table: &RawTable) -> Result<String, ReclamoError> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(&table.headers)?;
    for row in &table.rows {
        let fields: Vec<String> = row.iter().map(|c| c.as_text().unwrap_or_default()).collect();
        writer.write_record(&fields)?;
    }
    finish(writer)
}

fn finish(writer: csv::Writer<Vec<u8>>) -> Result<String, ReclamoError> {
    let bytes = writer
        .into_inner()
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e.to_string()))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Plain-text summary report for download alongside the CSV.
pub fn text_report(summary: &MetricsSummary, generated_at: NaiveDateTime) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "REPORTE DE QUEJAS Y RECLAMOS");
    let _ = writeln!(out, "Generado: {}", generated_at.format("%Y-%m-%d %H:%M"));
    let _ = writeln!(out);
    let _ = writeln!(out, "MÉTRICAS GENERALES");
    let _ = writeln!(out, "- Total de quejas: {}", summary.total);
    let _ = writeln!(out, "- Quejas resueltas: {}", summary.resolved_count);
    let _ = writeln!(out, "- Tasa de resolución: {:.1}%", summary.resolution_rate);
    let _ = writeln!(
        out,
        "- Tiempo promedio de resolución: {:.1} días",
        summary.avg_resolution_days
    );
    let _ = writeln!(out);
    let _ = writeln!(out, "SATISFACCIÓN DEL CLIENTE");
    let _ = writeln!(
        out,
        "- Satisfacción inicial promedio: {:.2}/5",
        summary.avg_satisfaction_before
    );
    let _ = writeln!(
        out,
        "- Satisfacción final promedio: {:.2}/5",
        summary.avg_satisfaction_after
    );
    let _ = writeln!(out, "- Mejora: {:+.2}", summary.satisfaction_delta);
    let _ = writeln!(out);
    let _ = writeln!(out, "TOP 3 TIPOS DE ERROR");
    if summary.category_counts.is_empty() {
        let _ = writeln!(out, "Sin registros en el período.");
    } else {
        for (i, c) in summary.category_counts.iter().take(3).enumerate() {
            let _ = writeln!(out, "{}. {}: {}", i + 1, c.category, c.count);
        }
    }
    let _ = writeln!(out);
    let _ = writeln!(out, "ESTADO DE QUEJAS");
    if summary.status_counts.is_empty() {
        let _ = writeln!(out, "Sin registros en el período.");
    } else {
        for s in &summary.status_counts {
            let _ = writeln!(out, "- {}: {}", s.status, s.count);
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Category, Status};

    fn record() -> ComplaintRecord {
        ComplaintRecord {
            date: Some("2024-01-02".parse().unwrap()),
            product: "Guantes de Seguridad".into(),
            complaint_text: "producto roto".into(),
            response_text: Some("ya resuelto".into()),
            category: Category::Quality,
            status: Status::Resolved,
            satisfaction_before: 2,
            satisfaction_after: Some(4),
            resolution_days: Some(3),
        }
    }

    #[test]
    fn test_csv_header_and_row() {
        let csv = records_to_csv(&[record()]).unwrap();
        let mut lines = csv.lines();
        assert_eq!(
            lines.next().unwrap(),
            "fecha,producto,descripcion_queja,respuesta,tipo_error,estado,satisfaccion_inicial,satisfaccion_final,dias_resolucion"
        );
        let row = lines.next().unwrap();
        assert!(row.starts_with("2024-01-02,"));
        assert!(row.contains("Calidad"));
        assert!(row.contains("Resuelto"));
    }

    #[test]
    fn test_absent_values_write_empty_fields() {
        let mut rec = record();
        rec.date = None;
        rec.response_text = None;
        rec.satisfaction_after = None;
        rec.resolution_days = None;
        rec.status = Status::Pending;
        let csv = records_to_csv(&[rec]).unwrap();
        let row = csv.lines().nth(1).unwrap();
        assert!(row.starts_with(','));
        assert!(row.ends_with(",,"));
    }

    #[test]
    fn test_report_sections() {
        let summary = MetricsSummary::compute(&[record()]);
        let report = text_report(&summary, "2024-02-01T10:30:00".parse().unwrap());
        assert!(report.contains("REPORTE DE QUEJAS Y RECLAMOS"));
        assert!(report.contains("Generado: 2024-02-01 10:30"));
        assert!(report.contains("- Total de quejas: 1"));
        assert!(report.contains("- Tasa de resolución: 100.0%"));
        assert!(report.contains("1. Calidad: 1"));
        assert!(report.contains("- Resuelto: 1"));
    }

    #[test]
    fn test_report_on_empty_summary() {
        let summary = MetricsSummary::compute(&[]);
        let report = text_report(&summary, "2024-02-01T10:30:00".parse().unwrap());
        assert!(report.contains("Sin registros en el período."));
        assert!(report.contains("- Tasa de resolución: 0.0%"));
    }
}
