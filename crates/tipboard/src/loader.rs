//! Tip collection loader
//!
//! Performs the single read-only retrieval of the data document. Remote
//! sources are fetched with cache-bypassing headers so a stale copy is never
//! served. There is no retry, polling or timeout; a failed load yields an
//! empty board.

use std::path::PathBuf;

use async_trait::async_trait;
use reqwest::Client;
use reqwest::header::{CACHE_CONTROL, PRAGMA};
use tracing::{debug, info, warn};
use url::Url;

use crate::error::LoadError;
use crate::tip::Tip;

/// Somewhere a tip collection can be retrieved from
#[async_trait]
pub trait TipSource: Send + Sync {
    /// Retrieve and parse the full collection
    async fn fetch(&self) -> Result<Vec<Tip>, LoadError>;

    /// Human-readable location, for logging
    fn describe(&self) -> String;
}

/// Data document served over HTTP(S)
#[derive(Debug, Clone)]
pub struct HttpSource {
    client: Client,
    url: Url,
}

impl HttpSource {
    pub fn new(url: &str) -> Result<Self, LoadError> {
        let url = Url::parse(url).map_err(|e| LoadError::InvalidLocation(format!("{url}: {e}")))?;
        let client = Client::builder()
            .build()
            .map_err(|e| LoadError::Network(e.to_string()))?;
        Ok(Self { client, url })
    }
}

#[async_trait]
impl TipSource for HttpSource {
    async fn fetch(&self) -> Result<Vec<Tip>, LoadError> {
        debug!("Fetching tips from: {}", self.url);

        let response = self
            .client
            .get(self.url.clone())
            .header(CACHE_CONTROL, "no-store, no-cache")
            .header(PRAGMA, "no-cache")
            .send()
            .await
            .map_err(|e| LoadError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(LoadError::Status(status.as_u16()));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| LoadError::Network(e.to_string()))?;

        parse_tips(&body)
    }

    fn describe(&self) -> String {
        self.url.to_string()
    }
}

/// Data document on the local filesystem
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl TipSource for FileSource {
    async fn fetch(&self) -> Result<Vec<Tip>, LoadError> {
        debug!("Reading tips from: {}", self.path.display());
        let body = tokio::fs::read(&self.path).await?;
        parse_tips(&body)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Parse a payload as a JSON array of tips
pub fn parse_tips(body: &[u8]) -> Result<Vec<Tip>, LoadError> {
    serde_json::from_slice(body).map_err(|e| LoadError::Parse(e.to_string()))
}

/// Pick a source for a location: `http(s)://` URLs go over the network,
/// anything else is treated as a file path
pub fn source_for(location: &str) -> Result<Box<dyn TipSource>, LoadError> {
    match Url::parse(location) {
        Ok(url) if matches!(url.scheme(), "http" | "https") => {
            Ok(Box::new(HttpSource::new(location)?))
        }
        Ok(url) if url.scheme() == "file" => {
            let path = url
                .to_file_path()
                .map_err(|_| LoadError::InvalidLocation(location.to_string()))?;
            Ok(Box::new(FileSource::new(path)))
        }
        _ => Ok(Box::new(FileSource::new(location))),
    }
}

/// Load the collection, converting any failure into an empty collection.
/// The failure goes to the log, never to the caller.
pub async fn load_or_empty(source: &dyn TipSource) -> Vec<Tip> {
    match source.fetch().await {
        Ok(tips) => {
            info!("Loaded {} tips from {}", tips.len(), source.describe());
            tips
        }
        Err(e) => {
            warn!("Could not load tips from {}: {}", source.describe(), e);
            Vec::new()
        }
    }
}
