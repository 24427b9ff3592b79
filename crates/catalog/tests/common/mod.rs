#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use lektury_catalog::{CatalogError, CatalogSource, RawAuthor, RawBook, RawBookDetail, Result};

/// In-memory catalog counting how often each list is requested.
#[derive(Default)]
pub struct FakeCatalog {
    pub books: Vec<RawBook>,
    pub authors: Vec<RawAuthor>,
    pub details: HashMap<String, RawBookDetail>,
    pub books_by_author: HashMap<String, Vec<RawBook>>,
    pub fail_authors: bool,
    pub book_calls: AtomicUsize,
    pub author_calls: AtomicUsize,
}

impl FakeCatalog {
    pub fn new(books: Vec<RawBook>, authors: Vec<RawAuthor>) -> Self {
        Self {
            books,
            authors,
            ..Default::default()
        }
    }

    pub fn with_author_books(mut self, slug: &str, books: Vec<RawBook>) -> Self {
        self.books_by_author.insert(slug.to_string(), books);
        self
    }

    pub fn with_detail(mut self, slug: &str, detail: RawBookDetail) -> Self {
        self.details.insert(slug.to_string(), detail);
        self
    }

    pub fn failing_authors(mut self) -> Self {
        self.fail_authors = true;
        self
    }

    pub fn into_source(self) -> Arc<dyn CatalogSource> {
        Arc::new(self)
    }
}

#[async_trait]
impl CatalogSource for FakeCatalog {
    async fn list_books(&self) -> Result<Arc<Vec<RawBook>>> {
        self.book_calls.fetch_add(1, Ordering::SeqCst);
        Ok(Arc::new(self.books.clone()))
    }

    async fn list_authors(&self) -> Result<Arc<Vec<RawAuthor>>> {
        self.author_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_authors {
            return Err(CatalogError::RemoteUnavailable {
                endpoint: "authors/".to_string(),
                status: Some(502),
                message: "bad gateway".to_string(),
            });
        }
        Ok(Arc::new(self.authors.clone()))
    }

    async fn book_detail(&self, slug: &str) -> Result<Arc<RawBookDetail>> {
        self.details
            .get(slug)
            .cloned()
            .map(Arc::new)
            .ok_or_else(|| CatalogError::NotFoundUpstream {
                resource: format!("books/{}/", slug),
            })
    }

    async fn books_by_author(&self, author_slug: &str) -> Result<Arc<Vec<RawBook>>> {
        self.books_by_author
            .get(author_slug)
            .cloned()
            .map(Arc::new)
            .ok_or_else(|| CatalogError::NotFoundUpstream {
                resource: format!("authors/{}/books/", author_slug),
            })
    }
}

pub fn book(slug: &str, title: &str, author: &str) -> RawBook {
    RawBook {
        slug: slug.to_string(),
        title: title.to_string(),
        author: author.to_string(),
        url: format!("https://example.com/{}", slug),
        cover_thumb: format!("{}.jpg", slug),
        ..Default::default()
    }
}

pub fn classified(
    slug: &str,
    title: &str,
    author: &str,
    kind: &str,
    genre: &str,
    epoch: &str,
) -> RawBook {
    RawBook {
        kind: kind.to_string(),
        genre: genre.to_string(),
        epoch: epoch.to_string(),
        ..book(slug, title, author)
    }
}

pub fn author(slug: &str, name: &str) -> RawAuthor {
    RawAuthor {
        slug: slug.to_string(),
        name: name.to_string(),
        ..Default::default()
    }
}
