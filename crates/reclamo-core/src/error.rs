use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ReclamoError {
    #[error("required column for '{field}' not found. Available columns: {available}")]
    MissingColumn { field: String, available: String },

    #[error("column '{column}' bound to '{field}' does not exist in the dataset")]
    UnknownColumn { field: String, column: String },

    #[error("failed to fetch '{origin}': {detail}")]
    Fetch { origin: String, detail: String },

    #[error("failed to initialize http client: {0}")]
    ClientInit(String),

    #[error("could not decode dataset with any supported reader: {attempted}")]
    Decode { attempted: String },

    #[error("failed to load rules from {path}: {reason}")]
    RulesLoad { path: PathBuf, reason: String },

    #[error("invalid rules: {0}")]
    RulesInvalid(String),

    #[error("invalid filter value: {0}")]
    InvalidFilter(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_fetch_display_names_the_origin() {
        let err = ReclamoError::Fetch {
            origin: "https://example.com/q.xlsx".into(),
            detail: "connection refused".into(),
        };
        assert_eq!(
            err.to_string(),
            "failed to fetch 'https://example.com/q.xlsx': connection refused"
        );
        // Both fields are display data, not a wrapped cause.
        assert!(err.source().is_none());
    }

    #[test]
    fn test_client_init_display() {
        let err = ReclamoError::ClientInit("bad tls backend".into());
        assert_eq!(
            err.to_string(),
            "failed to initialize http client: bad tls backend"
        );
    }
}
