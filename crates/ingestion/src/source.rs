//! Access to the remote snapshot directory.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use crate::error::Result;
use crate::geojson::FeatureCollection;

/// Remote directory holding time-stamped snapshot files.
///
/// Seam between the publisher and the network: production uses
/// [`HttpSnapshotSource`], tests substitute an in-memory implementation.
#[async_trait]
pub trait SnapshotSource: Send + Sync {
    /// Fetch the raw directory listing (opaque text, typically HTML).
    async fn list_directory(&self) -> Result<String>;

    /// Fetch and parse one snapshot file by name.
    async fn fetch_snapshot(&self, filename: &str) -> Result<FeatureCollection>;
}

/// HTTP-backed snapshot source.
pub struct HttpSnapshotSource {
    client: Client,
    base_url: String,
}

impl HttpSnapshotSource {
    /// Create a source rooted at the given directory URL.
    ///
    /// Requests use a fixed timeout and are never retried here; a timeout
    /// or connection failure surfaces as a transport error to the caller.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .connect_timeout(Duration::from_secs(30))
            .build()?;

        let mut base_url = base_url.into();
        if !base_url.ends_with('/') {
            base_url.push('/');
        }

        Ok(Self { client, base_url })
    }
}

#[async_trait]
impl SnapshotSource for HttpSnapshotSource {
    async fn list_directory(&self) -> Result<String> {
        debug!(url = %self.base_url, "Listing snapshot directory");

        let body = self
            .client
            .get(&self.base_url)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        Ok(body)
    }

    async fn fetch_snapshot(&self, filename: &str) -> Result<FeatureCollection> {
        let url = format!("{}{}", self.base_url, filename);
        debug!(url = %url, "Fetching snapshot");

        let body = self
            .client
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        Ok(serde_json::from_str(&body)?)
    }
}
