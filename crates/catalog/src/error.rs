//! Error types for catalog access.

use thiserror::Error;

/// Failures surfaced by the catalog client and passed through the aggregators.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The HTTP call failed: connection problem, timeout or a non-success status
    /// other than not-found.
    #[error("Catalog request to '{endpoint}' failed: {message}")]
    RemoteUnavailable {
        endpoint: String,
        status: Option<u16>,
        message: String,
    },

    /// The response body did not decode into the expected shape.
    #[error("Malformed response from '{endpoint}': {source}")]
    MalformedResponse {
        endpoint: String,
        #[source]
        source: serde_json::Error,
    },

    /// The remote catalog does not know the requested slug.
    #[error("'{resource}' not found in the remote catalog")]
    NotFoundUpstream { resource: String },

    #[error("Invalid catalog base url: {0}")]
    InvalidBaseUrl(#[from] url::ParseError),
}

pub type Result<T> = std::result::Result<T, CatalogError>;

impl CatalogError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, CatalogError::NotFoundUpstream { .. })
    }

    /// Either flavor of "the upstream fetch failed".
    pub fn is_upstream_failure(&self) -> bool {
        matches!(
            self,
            CatalogError::RemoteUnavailable { .. } | CatalogError::MalformedResponse { .. }
        )
    }
}
