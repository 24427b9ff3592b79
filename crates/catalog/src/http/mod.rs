mod reqwest;

use std::fmt;
use std::time::Duration;

use async_trait::async_trait;

use crate::error::Result;

pub use self::reqwest::ReqwestExecutor;

/// Fixed timeout for every call to the vendor API.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// A vendor API resource, as path segments relative to the base address.
///
/// Displays as the relative path with a trailing slash, e.g. `books/dziady/`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Endpoint {
    segments: Vec<String>,
}

impl Endpoint {
    pub fn books() -> Self {
        Self::from_segments(["books"])
    }

    pub fn book(slug: &str) -> Self {
        Self::from_segments(["books", slug])
    }

    pub fn authors() -> Self {
        Self::from_segments(["authors"])
    }

    pub fn author_books(slug: &str) -> Self {
        Self::from_segments(["authors", slug, "books"])
    }

    fn from_segments<'a>(segments: impl IntoIterator<Item = &'a str>) -> Self {
        Self {
            segments: segments.into_iter().map(str::to_string).collect(),
        }
    }

    /// Unencoded path segments; the executor is responsible for escaping them.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().map(String::as_str)
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for segment in &self.segments {
            write!(f, "{}/", segment)?;
        }
        Ok(())
    }
}

/// Raw outcome of a remote GET that produced an HTTP response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl RemoteResponse {
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Performs GET requests against the vendor API.
///
/// Implementations report transport failures as
/// [`CatalogError::RemoteUnavailable`](crate::CatalogError::RemoteUnavailable);
/// any received response, whatever its status, is returned as-is.
#[async_trait]
pub trait HttpExecutor: Send + Sync {
    async fn get(&self, endpoint: &Endpoint) -> Result<RemoteResponse>;
}
