pub mod cache;

pub use cache::SourceCache;

use crate::error::ReclamoError;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info};

pub const DEFAULT_TTL: Duration = Duration::from_secs(60);
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

// Transport errors can be verbose; keep enough to name the cause.
const DETAIL_MAX: usize = 200;

/// Where a dataset comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    File(PathBuf),
    Url(String),
}

impl DataSource {
    /// Anything with an http(s) scheme is a URL, everything else a local
    /// path.
    pub fn parse(input: &str) -> DataSource {
        if input.starts_with("http://") || input.starts_with("https://") {
            DataSource::Url(input.to_string())
        } else {
            DataSource::File(PathBuf::from(input))
        }
    }

    /// Cache key and display name.
    pub fn id(&self) -> String {
        match self {
            DataSource::File(path) => path.display().to_string(),
            DataSource::Url(url) => url.clone(),
        }
    }
}

/// Loads dataset bytes from files or URLs, holding them in a short-TTL
/// cache so rapid repeat interactions do not re-fetch.
pub struct SourceLoader {
    client: reqwest::blocking::Client,
    cache: SourceCache,
}

impl SourceLoader {
    pub fn new() -> Result<SourceLoader, ReclamoError> {
        SourceLoader::with_config(DEFAULT_TTL, DEFAULT_TIMEOUT)
    }

    pub fn with_config(ttl: Duration, timeout: Duration) -> Result<SourceLoader, ReclamoError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ReclamoError::ClientInit(truncate_detail(&e.to_string())))?;
        Ok(SourceLoader {
            client,
            cache: SourceCache::new(ttl),
        })
    }

    /// Bytes for a source, from the cache when fresh.
    pub fn load(&mut self, source: &DataSource) -> Result<Arc<Vec<u8>>, ReclamoError> {
        let key = source.id();
        self.cache.evict_expired();
        if let Some(bytes) = self.cache.get(&key) {
            debug!(source = %key, "cache hit");
            return Ok(bytes);
        }

        let bytes = match source {
            DataSource::File(path) => read_file(path)?,
            DataSource::Url(url) => self.fetch_url(url)?,
        };
        info!(source = %key, bytes = bytes.len(), "dataset loaded");
        Ok(self.cache.insert(&key, bytes))
    }

    fn fetch_url(&self, url: &str) -> Result<Vec<u8>, ReclamoError> {
        let fetch_err = |detail: String| ReclamoError::Fetch {
            origin: url.to_string(),
            detail: truncate_detail(&detail),
        };

        let response = self
            .client
            .get(url)
            .send()
            .map_err(|e| fetch_err(e.to_string()))?
            .error_for_status()
            .map_err(|e| fetch_err(e.to_string()))?;
        let body = response.bytes().map_err(|e| fetch_err(e.to_string()))?;
        Ok(body.to_vec())
    }
}

fn read_file(path: &Path) -> Result<Vec<u8>, ReclamoError> {
    std::fs::read(path).map_err(|e| ReclamoError::Fetch {
        origin: path.display().to_string(),
        detail: truncate_detail(&e.to_string()),
    })
}

fn truncate_detail(detail: &str) -> String {
    if detail.chars().count() <= DETAIL_MAX {
        detail.to_string()
    } else {
        let cut: String = detail.chars().take(DETAIL_MAX).collect();
        format!("{cut}...")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_picks_scheme() {
        assert_eq!(
            DataSource::parse("https://example.com/q.xlsx"),
            DataSource::Url("https://example.com/q.xlsx".into())
        );
        assert_eq!(
            DataSource::parse("data/quejas.csv"),
            DataSource::File(PathBuf::from("data/quejas.csv"))
        );
    }

    #[test]
    fn test_load_file_and_cache_hit() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("quejas.csv");
        std::fs::write(&path, b"fecha,queja\n").unwrap();

        let mut loader = SourceLoader::new().unwrap();
        let source = DataSource::File(path);
        let first = loader.load(&source).unwrap();
        let second = loader.load(&source).unwrap();
        assert_eq!(*first, b"fecha,queja\n".to_vec());
        // Second read is served from the cache, no re-read of the file.
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn test_missing_file_names_the_path() {
        let mut loader = SourceLoader::new().unwrap();
        let err = loader
            .load(&DataSource::File(PathBuf::from("/no/such/quejas.csv")))
            .unwrap_err();
        match err {
            ReclamoError::Fetch { origin, .. } => assert!(origin.contains("quejas.csv")),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_detail_truncation() {
        let long = "x".repeat(500);
        let out = truncate_detail(&long);
        assert!(out.len() < 250);
        assert!(out.ends_with("..."));
    }
}
