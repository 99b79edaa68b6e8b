use crate::model::{Category, Status};
use serde::{Deserialize, Serialize};

/// One loaded rule file: ordered keyword groups for categorization and
/// status detection plus the sentiment lexicon.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeywordRules {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Ordered: earlier groups take precedence on overlapping keywords.
    pub categories: Vec<CategoryRule>,
    /// Ordered: earlier groups are tested first over the combined text.
    pub statuses: Vec<StatusRule>,
    pub sentiment: SentimentLexicon,
}

impl KeywordRules {
    /// The keyword group for one status, if the file defines it.
    pub fn status_group(&self, status: Status) -> Option<&StatusRule> {
        self.statuses.iter().find(|g| g.status == status)
    }
}

/// Keywords mapping complaint text to one category.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryRule {
    pub category: Category,
    pub keywords: Vec<String>,
}

/// Keywords mapping status/response text to one lifecycle state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusRule {
    pub status: Status,
    pub keywords: Vec<String>,
}

/// Word lists for the placeholder satisfaction heuristic. The two lists
/// must be disjoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SentimentLexicon {
    pub negative: Vec<String>,
    pub positive: Vec<String>,
}
