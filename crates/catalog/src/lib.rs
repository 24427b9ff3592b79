//! Lektury Catalog - cached aggregation over a third-party book catalog
//!
//! This crate fetches raw book and author records from the vendor API, caches
//! them with per-kind expiration policies, joins books to authors by name and
//! produces filtered, sorted and paginated public listings.
//!
//! # Examples
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use lektury_catalog::{BookAggregator, CatalogClient, ExpiringCache, ReqwestExecutor};
//! use lektury_types::{BookFilter, BookSort, PageRequest, SortOrder};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let executor = Arc::new(ReqwestExecutor::new(lektury_catalog::DEFAULT_BASE_URL)?);
//! let client = Arc::new(CatalogClient::new(executor, Arc::new(ExpiringCache::new())));
//!
//! let books = BookAggregator::new(client);
//! let page = books
//!     .list_books(
//!         PageRequest::new(1, 20)?,
//!         &BookFilter::default().with_kind("Epika"),
//!         BookSort::Title,
//!         SortOrder::Asc,
//!     )
//!     .await?;
//! println!("{} of {} books", page.items.len(), page.total_count);
//! # Ok(())
//! # }
//! ```
pub mod authors;
pub mod books;
pub mod cache;
pub mod client;
pub mod error;
pub mod http;
pub mod index;
pub mod models;
pub mod source;

pub use authors::AuthorAggregator;
pub use books::BookAggregator;
pub use cache::{CachePolicies, CachePolicy, ExpiringCache};
pub use client::{CatalogClient, CatalogEntry};
pub use error::{CatalogError, Result};
pub use http::{Endpoint, HttpExecutor, REQUEST_TIMEOUT, RemoteResponse, ReqwestExecutor};
pub use index::AuthorIndex;
pub use models::{RawAuthor, RawBook, RawBookDetail};
pub use source::CatalogSource;

/// Base address of the vendor catalog API.
pub const DEFAULT_BASE_URL: &str = "https://wolnelektury.pl/api/";
