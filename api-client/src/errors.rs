// API client errors

use crate::http_client::Resource;
use donate_core::ConfigError;
use reqwest::StatusCode;

/// API client error types
///
/// The underlying transport and decode errors are kept intact as the
/// `source` so callers see the original failure.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Connection, TLS or body transfer failure
    #[error("network error")]
    Transport(#[from] reqwest::Error),

    /// The API answered with a non-2xx status
    #[error("{resource} request failed with HTTP {status}{}", detail(.message))]
    Status {
        resource: Resource,
        status: StatusCode,
        /// `error` field of the response body, when present
        message: Option<String>,
    },

    /// The response body does not match the expected shape
    #[error("failed to decode {resource} response: {source}")]
    Decode {
        resource: Resource,
        #[source]
        source: serde_json::Error,
    },

    /// Invalid client configuration
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
}

impl ApiError {
    /// HTTP status of the failed response, if the request got that far
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            ApiError::Transport(err) => err.status(),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(StatusCode::NOT_FOUND)
    }

    /// Resource the failed request targeted, when known
    pub fn resource(&self) -> Option<Resource> {
        match self {
            ApiError::Status { resource, .. } | ApiError::Decode { resource, .. } => {
                Some(*resource)
            }
            _ => None,
        }
    }
}

fn detail(message: &Option<String>) -> String {
    match message {
        Some(msg) => format!(": {msg}"),
        None => String::new(),
    }
}
