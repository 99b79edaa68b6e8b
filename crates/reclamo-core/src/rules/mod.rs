pub mod builtin;
pub mod schema;

use crate::error::ReclamoError;
use crate::model::{Category, Status};
use schema::KeywordRules;
use std::path::Path;

/// Load keyword rules from a JSON file.
pub fn load_rules(path: &Path) -> Result<KeywordRules, ReclamoError> {
    let content = std::fs::read_to_string(path).map_err(|e| ReclamoError::RulesLoad {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    parse_rules(&content, path)
}

/// Parse keyword rules from a JSON string.
pub fn parse_rules(json: &str, source: &Path) -> Result<KeywordRules, ReclamoError> {
    let rules: KeywordRules = serde_json::from_str(json).map_err(|e| ReclamoError::RulesLoad {
        path: source.to_path_buf(),
        reason: e.to_string(),
    })?;
    finish(rules)
}

/// Parse keyword rules from a JSON string (no file path context).
pub fn parse_rules_str(json: &str) -> Result<KeywordRules, ReclamoError> {
    let rules: KeywordRules = serde_json::from_str(json).map_err(ReclamoError::Json)?;
    finish(rules)
}

fn finish(mut rules: KeywordRules) -> Result<KeywordRules, ReclamoError> {
    normalize_keywords(&mut rules);
    validate_rules(&rules)?;
    Ok(rules)
}

/// Matching is caseless, so keywords are stored trimmed and lower-cased.
fn normalize_keywords(rules: &mut KeywordRules) {
    let clean = |words: &mut Vec<String>| {
        for w in words.iter_mut() {
            *w = w.trim().to_lowercase();
        }
    };
    for group in &mut rules.categories {
        clean(&mut group.keywords);
    }
    for group in &mut rules.statuses {
        clean(&mut group.keywords);
    }
    clean(&mut rules.sentiment.negative);
    clean(&mut rules.sentiment.positive);
}

/// Validate that a rule file is well-formed.
pub fn validate_rules(rules: &KeywordRules) -> Result<(), ReclamoError> {
    if rules.categories.is_empty() {
        return Err(ReclamoError::RulesInvalid(
            "categories must not be empty".into(),
        ));
    }
    if rules.statuses.is_empty() {
        return Err(ReclamoError::RulesInvalid(
            "statuses must not be empty".into(),
        ));
    }

    let mut seen_categories = Vec::new();
    for group in &rules.categories {
        // Unclassified and Other are fallbacks, never keyword-driven.
        if matches!(group.category, Category::Unclassified | Category::Other) {
            return Err(ReclamoError::RulesInvalid(format!(
                "category '{}' is a fallback and cannot carry keywords",
                group.category
            )));
        }
        if seen_categories.contains(&group.category) {
            return Err(ReclamoError::RulesInvalid(format!(
                "duplicate category group '{}'",
                group.category
            )));
        }
        seen_categories.push(group.category);
        check_keywords(&group.keywords, &format!("category '{}'", group.category))?;
    }

    let mut seen_statuses = Vec::new();
    for group in &rules.statuses {
        if group.status == Status::Pending {
            return Err(ReclamoError::RulesInvalid(
                "status 'Pendiente' is the fallback and cannot carry keywords".into(),
            ));
        }
        if seen_statuses.contains(&group.status) {
            return Err(ReclamoError::RulesInvalid(format!(
                "duplicate status group '{}'",
                group.status
            )));
        }
        seen_statuses.push(group.status);
        check_keywords(&group.keywords, &format!("status '{}'", group.status))?;
    }

    check_keywords(&rules.sentiment.negative, "sentiment.negative")?;
    check_keywords(&rules.sentiment.positive, "sentiment.positive")?;
    for word in &rules.sentiment.negative {
        if rules.sentiment.positive.contains(word) {
            return Err(ReclamoError::RulesInvalid(format!(
                "sentiment word '{}' appears in both lists",
                word
            )));
        }
    }

    Ok(())
}

fn check_keywords(words: &[String], context: &str) -> Result<(), ReclamoError> {
    if words.is_empty() {
        return Err(ReclamoError::RulesInvalid(format!(
            "{} has no keywords",
            context
        )));
    }
    if words.iter().any(|w| w.is_empty()) {
        return Err(ReclamoError::RulesInvalid(format!(
            "{} contains an empty keyword",
            context
        )));
    }
    Ok(())
}
