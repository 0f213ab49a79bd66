use std::path::PathBuf;

/// Why an overlay could not be populated.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{url} answered with HTTP {status}")]
    Status { url: String, status: u16 },

    #[error("malformed feature collection from {origin}: {reason}")]
    Malformed { origin: String, reason: String },

    #[error("cannot read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Returned when a layer group that already holds a result is written again.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("layer group {0} was already populated")]
pub struct GroupSettled(pub &'static str);

impl LoadError {
    /// Short machine-readable kind, used in layer events.
    pub fn kind(&self) -> &'static str {
        match self {
            LoadError::Transport { .. } => "transport",
            LoadError::Status { .. } => "status",
            LoadError::Malformed { .. } => "malformed",
            LoadError::Io { .. } => "io",
        }
    }

    pub(crate) fn malformed(origin: impl Into<String>, err: serde_json::Error) -> Self {
        LoadError::Malformed {
            origin: origin.into(),
            reason: err.to_string(),
        }
    }
}
