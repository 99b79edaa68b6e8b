use crate::error::ReclamoError;
use crate::rules::schema::KeywordRules;

const QUEJAS_ES_JSON: &str = include_str!("../../../../rules/quejas-es.json");

/// Available predefined rule files.
pub const PRESETS: &[&str] = &["es"];

/// Load a predefined rule file by name.
pub fn load_preset(name: &str) -> Result<KeywordRules, ReclamoError> {
    match name {
        "es" => crate::rules::parse_rules_str(QUEJAS_ES_JSON),
        _ => Err(ReclamoError::RulesInvalid(format!(
            "unknown preset '{}'. Available: {}",
            name,
            PRESETS.join(", ")
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Category, Status};

    #[test]
    fn test_load_es_preset() {
        let rules = load_preset("es").unwrap();
        assert_eq!(rules.categories.len(), 5);
        assert_eq!(rules.categories[0].category, Category::Quality);
        assert_eq!(rules.categories[4].category, Category::Delivery);
        assert_eq!(rules.statuses[0].status, Status::Resolved);
        assert!(!rules.sentiment.negative.is_empty());
    }

    #[test]
    fn test_unknown_preset() {
        assert!(load_preset("xyz").is_err());
    }
}
