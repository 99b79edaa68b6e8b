use reclamo_core::metrics::MetricsSummary;
use reclamo_core::normalize::RowWarning;
use reclamo_core::parsing::{ColumnMap, ResolvedColumn};

pub fn print_summary(summary: &MetricsSummary, warnings: &[RowWarning]) {
    println!("Complaints:     {}", summary.total);
    println!(
        "Resolved:       {} ({:.1}%)",
        summary.resolved_count, summary.resolution_rate
    );
    if summary.resolved_count > 0 {
        println!("Avg resolution: {:.1} days", summary.avg_resolution_days);
    }
    println!(
        "Satisfaction:   {:.2} -> {:.2} ({:+.2})",
        summary.avg_satisfaction_before, summary.avg_satisfaction_after, summary.satisfaction_delta
    );

    if !summary.category_counts.is_empty() {
        println!("\nBy category:");
        print_counts(
            summary
                .category_counts
                .iter()
                .map(|row| (row.category.to_string(), row.count)),
        );
    }

    if !summary.status_counts.is_empty() {
        println!("\nBy status:");
        print_counts(
            summary
                .status_counts
                .iter()
                .map(|row| (row.status.to_string(), row.count)),
        );
    }

    if !summary.product_counts.is_empty() {
        println!("\nTop products:");
        print_counts(
            summary
                .product_counts
                .iter()
                .take(5)
                .map(|row| (row.product.clone(), row.count)),
        );
    }

    if !warnings.is_empty() {
        println!("\nWarnings:");
        for w in warnings {
            println!("  row {}, {}: {}", w.row, w.column, w.message);
        }
    }
}

fn print_counts<I: IntoIterator<Item = (String, usize)>>(rows: I) {
    let rows: Vec<(String, usize)> = rows.into_iter().collect();
    let width = rows.iter().map(|(label, _)| label.len()).max().unwrap_or(10);
    for (label, count) in &rows {
        println!("  {:<width$}  {:>5}", label, count, width = width);
    }
}

pub fn print_columns(columns: &ColumnMap, headers: &[String]) {
    println!("Dataset headers: {}", headers.join(", "));
    println!();
    println!("  {:<10} {}", "date", bound(Some(&columns.date)));
    println!("  {:<10} {}", "product", bound(columns.product.as_ref()));
    println!("  {:<10} {}", "complaint", bound(Some(&columns.complaint)));
    println!("  {:<10} {}", "response", bound(columns.response.as_ref()));
    println!("  {:<10} {}", "status", bound(columns.status.as_ref()));
}

fn bound(column: Option<&ResolvedColumn>) -> String {
    match column {
        Some(c) => format!("{} (column {})", c.name, c.index + 1),
        None => "(not found)".to_string(),
    }
}
