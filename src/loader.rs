use std::path::Path;
use std::time::Duration;

use reqwest::Client;
use tracing::debug;

use crate::error::LoadError;
use crate::feed::{BoundaryCollection, QuakeCollection};

/// Client used for the feed request. The timeout bounds the whole request,
/// body included.
pub fn http_client(timeout: Duration) -> Result<Client, reqwest::Error> {
    Client::builder()
        .timeout(timeout)
        .user_agent(concat!("quakemap/", env!("CARGO_PKG_VERSION")))
        .build()
}

/// Downloads and parses the earthquake feed. One request, no retries.
pub async fn fetch_earthquakes(client: &Client, url: &str) -> Result<QuakeCollection, LoadError> {
    let transport = |source| LoadError::Transport {
        url: url.to_string(),
        source,
    };

    debug!(url, "requesting earthquake feed");
    let response = client.get(url).send().await.map_err(transport)?;

    let status = response.status();
    if !status.is_success() {
        return Err(LoadError::Status {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    let body = response.bytes().await.map_err(transport)?;
    debug!(bytes = body.len(), "earthquake feed downloaded");

    serde_json::from_slice(&body).map_err(|e| LoadError::malformed(url, e))
}

/// Reads the plate boundary file from disk.
pub async fn load_boundaries(path: &Path) -> Result<BoundaryCollection, LoadError> {
    debug!(path = %path.display(), "reading plate boundaries");
    let bytes = tokio::fs::read(path).await.map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_slice(&bytes).map_err(|e| LoadError::malformed(path.display().to_string(), e))
}
