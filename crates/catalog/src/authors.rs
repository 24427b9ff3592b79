//! Author listings and per-author book listings.

use std::sync::Arc;

use lektury_types::{AuthorSort, PageRequest, PagedResult, PublicAuthor, PublicBook, SortOrder};
use tracing::{info, warn};

use crate::books::{BookAggregator, map_list_item};
use crate::error::Result;
use crate::models::RawBook;
use crate::source::CatalogSource;

#[derive(Clone)]
pub struct AuthorAggregator {
    source: Arc<dyn CatalogSource>,
    books: BookAggregator,
}

impl AuthorAggregator {
    pub fn new(source: Arc<dyn CatalogSource>) -> Self {
        Self {
            books: BookAggregator::new(source.clone()),
            source,
        }
    }

    /// One page of the author list, ordered by name.
    pub async fn list_authors(
        &self,
        page: PageRequest,
        sort: AuthorSort,
        order: SortOrder,
    ) -> Result<PagedResult<PublicAuthor>> {
        let authors = self.source.list_authors().await?;

        let mut authors: Vec<PublicAuthor> = authors
            .iter()
            .map(|a| PublicAuthor::new(a.slug.clone(), a.name.clone()))
            .collect();

        match sort {
            AuthorSort::Name => authors.sort_by(|a, b| {
                let ordering = a.name.cmp(&b.name);
                if order.is_desc() {
                    ordering.reverse()
                } else {
                    ordering
                }
            }),
        }

        let result = PagedResult::paginate(authors, page);
        info!(
            "Returning {} authors out of {}",
            result.items.len(),
            result.total_count
        );
        Ok(result)
    }

    /// One page of the books attributed to `author_slug`, in the order the
    /// catalog lists them.
    ///
    /// An author unknown to the catalog yields an empty result rather than an
    /// error; the caller decides whether that means "not found".
    pub async fn list_books_by_author(
        &self,
        author_slug: &str,
        page: PageRequest,
    ) -> Result<PagedResult<PublicBook>> {
        let (books, index) = tokio::try_join!(
            self.books_by_author(author_slug),
            self.books.author_index()
        )?;

        let books: Vec<PublicBook> = books
            .iter()
            .map(|book| map_list_item(book, &index))
            .collect();

        let result = PagedResult::paginate(books, page);
        info!(
            author = author_slug,
            "Returning {} books out of {}",
            result.items.len(),
            result.total_count
        );
        Ok(result)
    }

    async fn books_by_author(&self, author_slug: &str) -> Result<Arc<Vec<RawBook>>> {
        match self.source.books_by_author(author_slug).await {
            Err(e) if e.is_not_found() => {
                warn!(author = author_slug, "Author not known to the catalog");
                Ok(Arc::new(Vec::new()))
            }
            result => result,
        }
    }
}
