//! Cache-aside client for the vendor catalog API.

use std::sync::Arc;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use tracing::{debug, error, info, warn};

use crate::cache::{CachePolicies, CachePolicy, ExpiringCache};
use crate::error::{CatalogError, Result};
use crate::http::{Endpoint, HttpExecutor};
use crate::models::{RawAuthor, RawBook, RawBookDetail};
use crate::source::CatalogSource;

const BOOKS_KEY: &str = "books";
const AUTHORS_KEY: &str = "authors";

/// A value held in the catalog cache.
#[derive(Debug, Clone)]
pub enum CatalogEntry {
    Books(Arc<Vec<RawBook>>),
    Authors(Arc<Vec<RawAuthor>>),
    BookDetail(Arc<RawBookDetail>),
}

impl CatalogEntry {
    fn into_books(self) -> Option<Arc<Vec<RawBook>>> {
        match self {
            CatalogEntry::Books(books) => Some(books),
            _ => None,
        }
    }

    fn into_authors(self) -> Option<Arc<Vec<RawAuthor>>> {
        match self {
            CatalogEntry::Authors(authors) => Some(authors),
            _ => None,
        }
    }

    fn into_book_detail(self) -> Option<Arc<RawBookDetail>> {
        match self {
            CatalogEntry::BookDetail(detail) => Some(detail),
            _ => None,
        }
    }
}

/// Number of records in a fetched payload, for logging.
trait ItemCount {
    fn item_count(&self) -> usize;
}

impl<T> ItemCount for Vec<T> {
    fn item_count(&self) -> usize {
        self.len()
    }
}

impl ItemCount for RawBookDetail {
    fn item_count(&self) -> usize {
        1
    }
}

fn detail_key(slug: &str) -> String {
    format!("detail:{}", slug)
}

fn by_author_key(slug: &str) -> String {
    format!("byAuthor:{}", slug)
}

/// Fetches raw catalog records, serving repeats from a shared cache.
///
/// Only successful fetches are cached. Concurrent misses on the same key each
/// go to the remote API; whichever finishes last leaves its value in place.
pub struct CatalogClient {
    executor: Arc<dyn HttpExecutor>,
    cache: Arc<ExpiringCache<CatalogEntry>>,
    policies: CachePolicies,
}

impl CatalogClient {
    pub fn new(executor: Arc<dyn HttpExecutor>, cache: Arc<ExpiringCache<CatalogEntry>>) -> Self {
        Self {
            executor,
            cache,
            policies: CachePolicies::default(),
        }
    }

    /// Replace the default expiration policies.
    pub fn with_policies(mut self, policies: CachePolicies) -> Self {
        self.policies = policies;
        self
    }

    pub fn cache(&self) -> &Arc<ExpiringCache<CatalogEntry>> {
        &self.cache
    }

    async fn cached<T>(
        &self,
        key: &str,
        endpoint: Endpoint,
        policy: CachePolicy,
        unwrap: fn(CatalogEntry) -> Option<Arc<T>>,
        wrap: fn(Arc<T>) -> CatalogEntry,
    ) -> Result<Arc<T>>
    where
        T: DeserializeOwned + ItemCount + Send + Sync,
    {
        if let Some(value) = self.cache.get(key).and_then(unwrap) {
            debug!(key, "Retrieved '{}' from cache", endpoint);
            return Ok(value);
        }

        let value = Arc::new(self.fetch::<T>(&endpoint).await?);
        self.cache.put(key, wrap(value.clone()), policy);
        info!(
            key,
            count = value.item_count(),
            "Cached response from '{}'",
            endpoint
        );

        Ok(value)
    }

    async fn fetch<T: DeserializeOwned>(&self, endpoint: &Endpoint) -> Result<T> {
        info!("Fetching '{}' from catalog API", endpoint);

        let response = self.executor.get(endpoint).await.inspect_err(|e| {
            error!("HTTP error while fetching '{}': {}", endpoint, e);
        })?;

        if response.status == 404 {
            warn!("Catalog API has no '{}'", endpoint);
            return Err(CatalogError::NotFoundUpstream {
                resource: endpoint.to_string(),
            });
        }

        if !response.is_success() {
            error!(
                status = response.status,
                "Catalog API request for '{}' failed", endpoint
            );
            return Err(CatalogError::RemoteUnavailable {
                endpoint: endpoint.to_string(),
                status: Some(response.status),
                message: format!("unexpected status {}", response.status),
            });
        }

        serde_json::from_slice(&response.body).map_err(|source| {
            error!("JSON deserialization error for '{}': {}", endpoint, source);
            CatalogError::MalformedResponse {
                endpoint: endpoint.to_string(),
                source,
            }
        })
    }
}

#[async_trait]
impl CatalogSource for CatalogClient {
    async fn list_books(&self) -> Result<Arc<Vec<RawBook>>> {
        self.cached(
            BOOKS_KEY,
            Endpoint::books(),
            self.policies.books,
            CatalogEntry::into_books,
            CatalogEntry::Books,
        )
        .await
    }

    async fn list_authors(&self) -> Result<Arc<Vec<RawAuthor>>> {
        self.cached(
            AUTHORS_KEY,
            Endpoint::authors(),
            self.policies.authors,
            CatalogEntry::into_authors,
            CatalogEntry::Authors,
        )
        .await
    }

    async fn book_detail(&self, slug: &str) -> Result<Arc<RawBookDetail>> {
        self.cached(
            &detail_key(slug),
            Endpoint::book(slug),
            self.policies.book_detail,
            CatalogEntry::into_book_detail,
            CatalogEntry::BookDetail,
        )
        .await
    }

    async fn books_by_author(&self, author_slug: &str) -> Result<Arc<Vec<RawBook>>> {
        self.cached(
            &by_author_key(author_slug),
            Endpoint::author_books(author_slug),
            self.policies.books_by_author,
            CatalogEntry::into_books,
            CatalogEntry::Books,
        )
        .await
    }
}
