pub mod classify;
pub mod decode;
pub mod error;
pub mod export;
pub mod metrics;
pub mod model;
pub mod normalize;
pub mod parsing;
pub mod rng;
pub mod rules;
pub mod sample;
pub mod source;

use decode::{decode_table, DecodePlan};
use error::ReclamoError;
use model::RawTable;
use normalize::{normalize_table, Analysis};
use parsing::{resolve_columns, ColumnBindings};
use rng::SyntheticRng;
use rules::schema::KeywordRules;

/// Options for one analysis run.
#[derive(Debug, Default)]
pub struct AnalyzeOptions {
    pub bindings: ColumnBindings,
    /// `None` uses the builtin "es" preset.
    pub rules: Option<KeywordRules>,
    /// Seed for the synthetic fields; `None` draws from entropy.
    pub seed: Option<u64>,
}

/// Main API entry point: decode dataset bytes, resolve columns and
/// normalize every row into a classified record.
pub fn analyze_bytes(
    bytes: &[u8],
    plan: &DecodePlan,
    options: &AnalyzeOptions,
) -> Result<Analysis, ReclamoError> {
    let table = decode_table(bytes, plan)?;
    analyze_table(&table, options)
}

/// Analyze an already-decoded table.
pub fn analyze_table(table: &RawTable, options: &AnalyzeOptions) -> Result<Analysis, ReclamoError> {
    let columns = resolve_columns(&table.headers, &options.bindings)?;
    let rules = match &options.rules {
        Some(rules) => rules.clone(),
        None => rules::builtin::load_preset("es")?,
    };
    let mut rng = match options.seed {
        Some(seed) => SyntheticRng::seeded(seed),
        None => SyntheticRng::from_entropy(),
    };
    Ok(normalize_table(table, &columns, &rules, &mut rng))
}
