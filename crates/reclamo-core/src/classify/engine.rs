use crate::model::{Category, Status};
use crate::parsing::blank_to_none;
use crate::rules::schema::KeywordRules;

/// Classify complaint text into a category.
///
/// Missing or blank text is `Unclassified`. Otherwise the rule file's
/// groups are tested in order and the first group with a hit wins; text
/// matching no group falls to `Other`. Matching is case-insensitive
/// substring containment, not word-boundary matching, so a keyword
/// embedded in a longer word still matches.
pub fn classify_category(rules: &KeywordRules, text: &str) -> Category {
    let Some(text) = blank_to_none(Some(text)) else {
        return Category::Unclassified;
    };
    let lower = text.to_lowercase();
    for group in &rules.categories {
        if contains_any(&lower, &group.keywords) {
            return group.category;
        }
    }
    Category::Other
}

/// Classify lifecycle status from the status cell and the response text.
///
/// Both missing means `Pending`. Otherwise the two are concatenated
/// (missing side empty) and the status groups are tested in order;
/// no hit falls back to `Pending`.
pub fn classify_status(
    rules: &KeywordRules,
    status_text: Option<&str>,
    response_text: Option<&str>,
) -> Status {
    let status_text = blank_to_none(status_text);
    let response_text = blank_to_none(response_text);
    if status_text.is_none() && response_text.is_none() {
        return Status::Pending;
    }

    let combined = format!(
        "{} {}",
        status_text.unwrap_or_default(),
        response_text.unwrap_or_default()
    )
    .to_lowercase();

    for group in &rules.statuses {
        if contains_any(&combined, &group.keywords) {
            return group.status;
        }
    }
    Status::Pending
}

/// Degraded form for datasets without a status column: the resolved
/// keywords alone decide Resolved vs Pending over the response text.
/// Never yields `InProgress`.
pub fn classify_status_degraded(rules: &KeywordRules, response_text: Option<&str>) -> Status {
    let Some(text) = blank_to_none(response_text) else {
        return Status::Pending;
    };
    let lower = text.to_lowercase();
    if let Some(group) = rules.status_group(Status::Resolved) {
        if contains_any(&lower, &group.keywords) {
            return Status::Resolved;
        }
    }
    Status::Pending
}

fn contains_any(text: &str, keywords: &[String]) -> bool {
    keywords.iter().any(|k| text.contains(k.as_str()))
}
