use crate::model::{Category, ComplaintRecord, Status};
use chrono::NaiveDate;
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};

/// Caller-chosen subset predicate over the canonical fields. Unset
/// bounds and empty sets are unbounded.
#[derive(Debug, Clone, Default)]
pub struct RecordFilter {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
    pub categories: Vec<Category>,
    pub statuses: Vec<Status>,
}

impl RecordFilter {
    pub fn matches(&self, record: &ComplaintRecord) -> bool {
        if self.from.is_some() || self.to.is_some() {
            // A record without a date cannot satisfy a bounded range.
            let Some(date) = record.date else {
                return false;
            };
            if self.from.is_some_and(|from| date < from) {
                return false;
            }
            if self.to.is_some_and(|to| date > to) {
                return false;
            }
        }
        if !self.categories.is_empty() && !self.categories.contains(&record.category) {
            return false;
        }
        if !self.statuses.is_empty() && !self.statuses.contains(&record.status) {
            return false;
        }
        true
    }

    /// New subset holding the records that pass; never mutates the input.
    pub fn apply(&self, records: &[ComplaintRecord]) -> Vec<ComplaintRecord> {
        records.iter().filter(|r| self.matches(r)).cloned().collect()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CategoryCount {
    pub category: Category,
    pub count: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct StatusCount {
    pub status: Status,
    pub count: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProductCount {
    pub product: String,
    pub count: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct DailyCount {
    pub date: NaiveDate,
    pub count: usize,
}

/// Aggregate view of a (filtered) record collection. Every field is
/// defined on empty input, at its zero default.
#[derive(Debug, Clone, Serialize)]
pub struct MetricsSummary {
    pub total: usize,
    pub resolved_count: usize,
    /// Percentage, 0.0 when there are no records.
    pub resolution_rate: f64,
    pub avg_resolution_days: f64,
    pub avg_satisfaction_before: f64,
    pub avg_satisfaction_after: f64,
    /// `avg_satisfaction_after - avg_satisfaction_before`, 0.0 when no
    /// record carries an after-score.
    pub satisfaction_delta: f64,
    /// Count-descending (label-ascending on ties).
    pub category_counts: Vec<CategoryCount>,
    pub status_counts: Vec<StatusCount>,
    pub product_counts: Vec<ProductCount>,
    /// Date-ascending; records without a date are not part of the series.
    pub daily_counts: Vec<DailyCount>,
}

impl MetricsSummary {
    pub fn compute(records: &[ComplaintRecord]) -> MetricsSummary {
        let total = records.len();
        let resolved_count = records
            .iter()
            .filter(|r| r.status == Status::Resolved)
            .count();
        let resolution_rate = if total == 0 {
            0.0
        } else {
            resolved_count as f64 / total as f64 * 100.0
        };

        let avg_resolution_days = mean(
            records
                .iter()
                .filter_map(|r| r.resolution_days.map(|d| d as f64)),
        );
        let avg_satisfaction_before = mean(records.iter().map(|r| f64::from(r.satisfaction_before)));

        let has_after = records.iter().any(|r| r.satisfaction_after.is_some());
        let avg_satisfaction_after = mean(
            records
                .iter()
                .filter_map(|r| r.satisfaction_after.map(f64::from)),
        );
        let satisfaction_delta = if has_after {
            avg_satisfaction_after - avg_satisfaction_before
        } else {
            0.0
        };

        let mut by_category: HashMap<Category, usize> = HashMap::new();
        let mut by_status: HashMap<Status, usize> = HashMap::new();
        let mut by_product: HashMap<&str, usize> = HashMap::new();
        let mut by_day: BTreeMap<NaiveDate, usize> = BTreeMap::new();
        for r in records {
            *by_category.entry(r.category).or_default() += 1;
            *by_status.entry(r.status).or_default() += 1;
            *by_product.entry(r.product.as_str()).or_default() += 1;
            if let Some(date) = r.date {
                *by_day.entry(date).or_default() += 1;
            }
        }

        let mut category_counts: Vec<CategoryCount> = by_category
            .into_iter()
            .map(|(category, count)| CategoryCount { category, count })
            .collect();
        category_counts.sort_by(|a, b| {
            b.count
                .cmp(&a.count)
                .then_with(|| a.category.to_string().cmp(&b.category.to_string()))
        });

        let mut status_counts: Vec<StatusCount> = by_status
            .into_iter()
            .map(|(status, count)| StatusCount { status, count })
            .collect();
        status_counts.sort_by(|a, b| {
            b.count
                .cmp(&a.count)
                .then_with(|| a.status.to_string().cmp(&b.status.to_string()))
        });

        let mut product_counts: Vec<ProductCount> = by_product
            .into_iter()
            .map(|(product, count)| ProductCount {
                product: product.to_string(),
                count,
            })
            .collect();
        product_counts.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.product.cmp(&b.product)));

        let daily_counts = by_day
            .into_iter()
            .map(|(date, count)| DailyCount { date, count })
            .collect();

        MetricsSummary {
            total,
            resolved_count,
            resolution_rate,
            avg_resolution_days,
            avg_satisfaction_before,
            avg_satisfaction_after,
            satisfaction_delta,
            category_counts,
            status_counts,
            product_counts,
            daily_counts,
        }
    }
}

fn mean<I: Iterator<Item = f64>>(values: I) -> f64 {
    let mut sum = 0.0;
    let mut n = 0usize;
    for v in values {
        sum += v;
        n += 1;
    }
    if n == 0 {
        0.0
    } else {
        sum / n as f64
    }
}
