//! Trait definitions for read access to the catalog.

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::Result;
use crate::models::{RawAuthor, RawBook, RawBookDetail};

/// Read-only access to raw catalog records.
///
/// Returned collections are shared snapshots; callers must not expect to own
/// them. [`CatalogClient`](crate::CatalogClient) is the cached implementation
/// backed by the vendor API.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Every book in the catalog, in vendor order.
    async fn list_books(&self) -> Result<Arc<Vec<RawBook>>>;

    /// Every author in the catalog, in vendor order.
    async fn list_authors(&self) -> Result<Arc<Vec<RawAuthor>>>;

    /// Full record for one book.
    ///
    /// Fails with `NotFoundUpstream` if the slug is unknown.
    async fn book_detail(&self, slug: &str) -> Result<Arc<RawBookDetail>>;

    /// Books attributed to one author, in vendor order.
    async fn books_by_author(&self, author_slug: &str) -> Result<Arc<Vec<RawBook>>>;
}
