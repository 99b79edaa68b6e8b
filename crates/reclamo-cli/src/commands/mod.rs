pub mod analyze;
pub mod columns;
pub mod export;
pub mod rules;
pub mod sample;

use chrono::NaiveDate;
use clap::Args;
use reclamo_core::decode::{decode_table, DecodePlan};
use reclamo_core::error::ReclamoError;
use reclamo_core::metrics::RecordFilter;
use reclamo_core::model::{Category, RawTable, Status};
use reclamo_core::parsing::{parse_date, ColumnBindings};
use reclamo_core::source::{DataSource, SourceLoader, DEFAULT_TTL};
use reclamo_core::AnalyzeOptions;
use std::path::PathBuf;
use std::time::Duration;

/// Flags shared by every command that reads a dataset.
#[derive(Args)]
pub(crate) struct InputOpts {
    /// Path or HTTP(S) URL of the dataset
    pub(crate) input: String,

    /// Explicit date column (bypasses header inference)
    #[arg(long = "date-col", value_name = "NAME")]
    pub(crate) date_col: Option<String>,

    /// Explicit product column
    #[arg(long = "product-col", value_name = "NAME")]
    pub(crate) product_col: Option<String>,

    /// Explicit complaint text column
    #[arg(long = "complaint-col", value_name = "NAME")]
    pub(crate) complaint_col: Option<String>,

    /// Explicit response column
    #[arg(long = "response-col", value_name = "NAME")]
    pub(crate) response_col: Option<String>,

    /// Explicit status column
    #[arg(long = "status-col", value_name = "NAME")]
    pub(crate) status_col: Option<String>,

    /// HTTP timeout for URL sources, in seconds
    #[arg(long, value_name = "SECS", default_value_t = 10)]
    pub(crate) timeout_secs: u64,
}

impl InputOpts {
    /// Fetch and decode the dataset this invocation points at.
    pub(crate) fn load_table(&self) -> Result<RawTable, ReclamoError> {
        let source = DataSource::parse(&self.input);
        let mut loader =
            SourceLoader::with_config(DEFAULT_TTL, Duration::from_secs(self.timeout_secs))?;
        let bytes = loader.load(&source)?;
        decode_table(&bytes, &DecodePlan::for_source(&self.input))
    }

    pub(crate) fn bindings(&self) -> ColumnBindings {
        ColumnBindings {
            date: self.date_col.clone(),
            product: self.product_col.clone(),
            complaint: self.complaint_col.clone(),
            response: self.response_col.clone(),
            status: self.status_col.clone(),
        }
    }
}

/// Rule and seed selection for the normalization pass.
#[derive(Args)]
pub(crate) struct AnalyzeOpts {
    /// Custom keyword rule file (JSON); defaults to the builtin "es" preset
    #[arg(short, long = "rules", value_name = "FILE")]
    pub(crate) rules: Option<PathBuf>,

    /// Seed for the synthetic satisfaction and resolution fields
    #[arg(long, value_name = "N")]
    pub(crate) seed: Option<u64>,
}

impl AnalyzeOpts {
    pub(crate) fn to_options(&self, bindings: ColumnBindings) -> Result<AnalyzeOptions, ReclamoError> {
        let rules = match &self.rules {
            Some(path) => Some(reclamo_core::rules::load_rules(path)?),
            None => None,
        };
        Ok(AnalyzeOptions {
            bindings,
            rules,
            seed: self.seed,
        })
    }
}

/// Record subset selection, applied after normalization.
#[derive(Args)]
pub(crate) struct FilterOpts {
    /// Keep records on or after this date (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub(crate) from: Option<String>,

    /// Keep records on or before this date (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub(crate) to: Option<String>,

    /// Keep only these categories (repeatable; label or identifier)
    #[arg(long = "category", value_name = "NAME")]
    pub(crate) categories: Vec<String>,

    /// Keep only these statuses (repeatable; label or identifier)
    #[arg(long = "status", value_name = "NAME")]
    pub(crate) statuses: Vec<String>,
}

impl FilterOpts {
    pub(crate) fn to_filter(&self) -> Result<RecordFilter, ReclamoError> {
        let mut categories = Vec::with_capacity(self.categories.len());
        for raw in &self.categories {
            let category = Category::from_str_loose(raw)
                .ok_or_else(|| ReclamoError::InvalidFilter(format!("unknown category '{raw}'")))?;
            categories.push(category);
        }

        let mut statuses = Vec::with_capacity(self.statuses.len());
        for raw in &self.statuses {
            let status = Status::from_str_loose(raw)
                .ok_or_else(|| ReclamoError::InvalidFilter(format!("unknown status '{raw}'")))?;
            statuses.push(status);
        }

        Ok(RecordFilter {
            from: parse_bound(self.from.as_deref())?,
            to: parse_bound(self.to.as_deref())?,
            categories,
            statuses,
        })
    }
}

fn parse_bound(raw: Option<&str>) -> Result<Option<NaiveDate>, ReclamoError> {
    match raw {
        None => Ok(None),
        Some(s) => parse_date(s)
            .map(Some)
            .ok_or_else(|| ReclamoError::InvalidFilter(format!("unrecognized date '{s}'"))),
    }
}
