use async_trait::async_trait;
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};
use url::Url;

use super::{Endpoint, HttpExecutor, REQUEST_TIMEOUT, RemoteResponse};
use crate::error::{CatalogError, Result};

pub const USER_AGENT: &str = concat!("lektury-catalog/", env!("CARGO_PKG_VERSION"));

pub struct ReqwestExecutor {
    client: reqwest::Client,
    base_url: Url,
}

impl ReqwestExecutor {
    pub fn new(base_url: &str) -> Result<Self> {
        let base_url = parse_base_url(base_url)?;

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .build()
            .map_err(|e| CatalogError::RemoteUnavailable {
                endpoint: base_url.to_string(),
                status: None,
                message: format!("Failed to create HTTP client: {}", e),
            })?;

        Ok(Self { client, base_url })
    }

    /// Absolute URL of `endpoint`, with each segment percent-encoded.
    ///
    /// Empty, `.` and `..` segments cannot be expressed as a single path
    /// segment (they would be dropped or resolved away), so such endpoints
    /// are reported as not found instead of addressing another resource.
    pub fn url_for(&self, endpoint: &Endpoint) -> Result<Url> {
        if endpoint.segments().any(is_unaddressable) {
            return Err(CatalogError::NotFoundUpstream {
                resource: endpoint.to_string(),
            });
        }

        let mut url = self.base_url.clone();
        // parse_base_url rejects cannot-be-a-base urls, so segments are available.
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(endpoint.segments()).push("");
        }
        Ok(url)
    }
}

fn is_unaddressable(segment: &str) -> bool {
    matches!(segment, "" | "." | "..")
}

fn parse_base_url(base_url: &str) -> Result<Url> {
    let url = Url::parse(base_url)?;
    if url.cannot_be_a_base() {
        return Err(CatalogError::InvalidBaseUrl(
            url::ParseError::RelativeUrlWithCannotBeABaseBase,
        ));
    }
    Ok(url)
}

#[async_trait]
impl HttpExecutor for ReqwestExecutor {
    async fn get(&self, endpoint: &Endpoint) -> Result<RemoteResponse> {
        let response = self
            .client
            .get(self.url_for(endpoint)?)
            .send()
            .await
            .map_err(|e| unavailable(endpoint, e))?;

        let status = response.status().as_u16();
        let body = response
            .bytes()
            .await
            .map_err(|e| unavailable(endpoint, e))?;

        Ok(RemoteResponse::new(status, body.to_vec()))
    }
}

fn unavailable(endpoint: &Endpoint, error: reqwest::Error) -> CatalogError {
    let message = if error.is_timeout() {
        format!("timed out after {}s", REQUEST_TIMEOUT.as_secs())
    } else {
        error.to_string()
    };

    CatalogError::RemoteUnavailable {
        endpoint: endpoint.to_string(),
        status: error.status().map(|s| s.as_u16()),
        message,
    }
}
