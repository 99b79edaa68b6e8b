use reclamo_core::error::ReclamoError;
use reclamo_core::rules::builtin;
use reclamo_core::rules::schema::KeywordRules;
use std::path::Path;

pub fn list() -> Result<(), ReclamoError> {
    println!("Builtin keyword presets:\n");
    for name in builtin::PRESETS {
        let rules = builtin::load_preset(name)?;
        println!("  {:<6} {}", name, rules.name);
        if let Some(ref desc) = rules.description {
            println!("         {}", desc);
        }
        let labels: Vec<String> = rules
            .categories
            .iter()
            .map(|g| g.category.to_string())
            .collect();
        println!("         categories: {}", labels.join(", "));
        println!();
    }
    Ok(())
}

pub fn show(preset: &str) -> Result<(), ReclamoError> {
    let rules = builtin::load_preset(preset)?;
    println!("{}", serde_json::to_string_pretty(&rules)?);
    Ok(())
}

pub fn validate(file: &Path) -> Result<(), ReclamoError> {
    let rules = reclamo_core::rules::load_rules(file)?;

    println!("Rule file '{}' is valid.", rules.name);
    println!("  Category groups: {}", rules.categories.len());
    println!("  Status groups:   {}", rules.statuses.len());
    println!(
        "  Sentiment terms: {} negative, {} positive",
        rules.sentiment.negative.len(),
        rules.sentiment.positive.len()
    );

    let warnings = shadowed_keywords(&rules);
    if !warnings.is_empty() {
        println!("\nWarnings:");
        for w in &warnings {
            println!("  - {}", w);
        }
    }

    Ok(())
}

/// Earlier groups win on overlapping matches, so a later keyword that
/// contains an earlier one can never decide a classification.
fn shadowed_keywords(rules: &KeywordRules) -> Vec<String> {
    let mut warnings = Vec::new();
    for (i, earlier) in rules.categories.iter().enumerate() {
        for later in rules.categories.iter().skip(i + 1) {
            for keyword in &later.keywords {
                if earlier.keywords.iter().any(|kw| keyword.contains(kw.as_str())) {
                    warnings.push(format!(
                        "keyword '{}' in group '{}' is shadowed by group '{}'",
                        keyword, later.category, earlier.category
                    ));
                }
            }
        }
    }
    warnings
}
