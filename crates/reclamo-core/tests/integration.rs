//! End-to-end pipeline tests over in-memory CSV datasets: decode,
//! column resolution, normalization, filtering, aggregation and export.

use reclamo_core::decode::DecodePlan;
use reclamo_core::error::ReclamoError;
use reclamo_core::export::records_to_csv;
use reclamo_core::metrics::{MetricsSummary, RecordFilter};
use reclamo_core::model::{Category, Status};
use reclamo_core::normalize::Analysis;
use reclamo_core::parsing::ColumnBindings;
use reclamo_core::rng::SyntheticRng;
use reclamo_core::sample::sample_table;
use reclamo_core::{analyze_bytes, analyze_table, AnalyzeOptions};

fn analyze_csv(bytes: &[u8]) -> Analysis {
    let options = AnalyzeOptions {
        seed: Some(42),
        ..Default::default()
    };
    analyze_bytes(bytes, &DecodePlan::default(), &options).unwrap()
}

const SCENARIO: &[u8] = b"\
fecha,producto,descripcion_queja,respuesta,estado
2024-01-01,Guantes,producto defectuoso,,
invalida,Casco,color incorrecto,\"resuelto, gracias\",
2024-01-03,Botas,talla equivocada,en proceso de revisi\xc3\xb3n,
";

// ---------------------------------------------------------------------------
// Test 1: three-row scenario, one invalid date, statuses from responses
// ---------------------------------------------------------------------------
#[test]
fn scenario_classifies_and_aggregates() {
    let analysis = analyze_csv(SCENARIO);
    assert_eq!(analysis.records.len(), 3);

    let categories: Vec<Category> = analysis.records.iter().map(|r| r.category).collect();
    assert_eq!(
        categories,
        vec![Category::Quality, Category::Color, Category::SizeMismatch]
    );

    let statuses: Vec<Status> = analysis.records.iter().map(|r| r.status).collect();
    assert_eq!(
        statuses,
        vec![Status::Pending, Status::Resolved, Status::InProgress]
    );

    // The unparsable date degrades to absent; the row stays.
    assert_eq!(analysis.records[1].date, None);
    assert_eq!(analysis.warnings.len(), 1);
    assert_eq!(analysis.warnings[0].row, 2);
    assert_eq!(analysis.warnings[0].column, "fecha");
    assert!(analysis.warnings[0].message.contains("invalida"));

    let summary = MetricsSummary::compute(&analysis.records);
    assert_eq!(summary.total, 3);
    assert_eq!(summary.resolved_count, 1);
    assert!((summary.resolution_rate - 100.0 / 3.0).abs() < 1e-9);
    // Only the two dated rows enter the series.
    assert_eq!(summary.daily_counts.len(), 2);
}

// ---------------------------------------------------------------------------
// Test 2: gated fields appear only on resolved records
// ---------------------------------------------------------------------------
#[test]
fn gated_fields_follow_status() {
    let analysis = analyze_csv(SCENARIO);
    for record in &analysis.records {
        assert!((1..=5).contains(&record.satisfaction_before));
        if record.status == Status::Resolved {
            let days = record.resolution_days.expect("resolved needs days");
            assert!((1..=9).contains(&days));
            if let Some(after) = record.satisfaction_after {
                assert!((1..=5).contains(&after));
            }
        } else {
            assert_eq!(record.satisfaction_after, None);
            assert_eq!(record.resolution_days, None);
        }
    }
    // "resuelto, gracias" reads positive, so the after-score is high.
    let resolved = &analysis.records[1];
    assert!((4..=5).contains(&resolved.satisfaction_after.unwrap()));
}

// ---------------------------------------------------------------------------
// Test 3: exported CSV re-analyzes to the same classification
// ---------------------------------------------------------------------------
#[test]
fn export_round_trip_preserves_labels() {
    let first = analyze_csv(SCENARIO);
    let csv = records_to_csv(&first.records).unwrap();
    let second = analyze_csv(csv.as_bytes());

    assert_eq!(first.records.len(), second.records.len());
    for (a, b) in first.records.iter().zip(&second.records) {
        assert_eq!(a.category, b.category);
        assert_eq!(a.status, b.status);
        assert_eq!(a.product, b.product);
        assert_eq!(a.date, b.date);
    }
}

// ---------------------------------------------------------------------------
// Test 4: a filter that excludes everything still aggregates cleanly
// ---------------------------------------------------------------------------
#[test]
fn excluding_filter_yields_zero_defaults() {
    let analysis = analyze_csv(SCENARIO);
    let filter = RecordFilter {
        categories: vec![Category::Delivery],
        ..Default::default()
    };
    let subset = filter.apply(&analysis.records);
    assert!(subset.is_empty());

    let summary = MetricsSummary::compute(&subset);
    assert_eq!(summary.total, 0);
    assert_eq!(summary.resolution_rate, 0.0);
    assert_eq!(summary.satisfaction_delta, 0.0);
    assert!(summary.category_counts.is_empty());
}

// ---------------------------------------------------------------------------
// Test 5: unresolvable complaint column aborts before any aggregation
// ---------------------------------------------------------------------------
#[test]
fn missing_complaint_column_is_fatal() {
    let err = analyze_bytes(
        b"fecha,producto\n2024-01-01,Guantes\n",
        &DecodePlan::default(),
        &AnalyzeOptions::default(),
    )
    .unwrap_err();
    match err {
        ReclamoError::MissingColumn { field, available } => {
            assert_eq!(field, "complaint");
            assert!(available.contains("fecha"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

// ---------------------------------------------------------------------------
// Test 6: undecodable bytes report every reader that was tried
// ---------------------------------------------------------------------------
#[test]
fn undecodable_bytes_list_attempts() {
    let err = analyze_bytes(
        &[0xff, 0xfe, 0x00, 0x13],
        &DecodePlan::default(),
        &AnalyzeOptions::default(),
    )
    .unwrap_err();
    match err {
        ReclamoError::Decode { attempted } => {
            for reader in ["xlsx:", "xls:", "csv:"] {
                assert!(attempted.contains(reader), "missing {reader} in {attempted}");
            }
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

// ---------------------------------------------------------------------------
// Test 7: explicit bindings drive datasets with opaque headers
// ---------------------------------------------------------------------------
#[test]
fn explicit_bindings_resolve_opaque_headers() {
    let csv = b"cuando,detalle\n2024-05-05,demora en la entrega\n";
    let options = AnalyzeOptions {
        bindings: ColumnBindings {
            date: Some("cuando".into()),
            complaint: Some("detalle".into()),
            ..Default::default()
        },
        seed: Some(1),
        ..Default::default()
    };
    let analysis = analyze_bytes(csv, &DecodePlan::default(), &options).unwrap();
    assert_eq!(analysis.columns.complaint.name, "detalle");
    assert_eq!(analysis.records[0].category, Category::Delivery);
    // No status column and no response column: the degraded path pends.
    assert_eq!(analysis.records[0].status, Status::Pending);
}

// ---------------------------------------------------------------------------
// Test 8: generated sample data flows through the whole pipeline
// ---------------------------------------------------------------------------
#[test]
fn sample_dataset_flows_end_to_end() {
    let table = sample_table(50, &mut SyntheticRng::seeded(9));
    let options = AnalyzeOptions {
        seed: Some(9),
        ..Default::default()
    };
    let analysis = analyze_table(&table, &options).unwrap();
    assert_eq!(analysis.records.len(), 50);
    assert!(analysis.warnings.is_empty());

    for record in &analysis.records {
        assert!(record.date.is_some());
        assert_ne!(record.category, Category::Unclassified);
        assert_ne!(record.category, Category::Other);
    }

    let summary = MetricsSummary::compute(&analysis.records);
    assert_eq!(summary.total, 50);
    assert!(summary.resolution_rate >= 0.0 && summary.resolution_rate <= 100.0);
    assert!(!summary.product_counts.is_empty());
}

// ---------------------------------------------------------------------------
// Test 9: a fixed seed reproduces every synthetic field
// ---------------------------------------------------------------------------
#[test]
fn seeded_runs_are_identical() {
    let a = analyze_csv(SCENARIO);
    let b = analyze_csv(SCENARIO);
    for (x, y) in a.records.iter().zip(&b.records) {
        assert_eq!(x.satisfaction_before, y.satisfaction_before);
        assert_eq!(x.satisfaction_after, y.satisfaction_after);
        assert_eq!(x.resolution_days, y.resolution_days);
    }
}
