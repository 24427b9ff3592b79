//! Book listings and book detail.

use std::sync::Arc;

use lektury_types::{
    BookFilter, BookSort, PageRequest, PagedResult, PublicAuthor, PublicBook, SortOrder,
};
use tracing::info;

use crate::error::Result;
use crate::index::AuthorIndex;
use crate::models::{RawBook, RawBookDetail};
use crate::source::CatalogSource;

/// Joins raw books with the author list and serves filtered, sorted pages.
#[derive(Clone)]
pub struct BookAggregator {
    source: Arc<dyn CatalogSource>,
}

impl BookAggregator {
    pub fn new(source: Arc<dyn CatalogSource>) -> Self {
        Self { source }
    }

    /// One page of the whole catalog.
    ///
    /// Books are resolved against the author list, narrowed by `filter`, put
    /// in order and then paginated. `total_count` counts the filtered set.
    pub async fn list_books(
        &self,
        page: PageRequest,
        filter: &BookFilter,
        sort: BookSort,
        order: SortOrder,
    ) -> Result<PagedResult<PublicBook>> {
        let (books, index) = tokio::try_join!(self.source.list_books(), self.author_index())?;

        let mut books: Vec<PublicBook> = books
            .iter()
            .map(|book| map_list_item(book, &index))
            .filter(|book| filter.is_empty() || matches_filter(book, filter))
            .collect();

        sort_books(&mut books, sort, order);

        let result = PagedResult::paginate(books, page);
        info!(
            "Returning {} books out of {}",
            result.items.len(),
            result.total_count
        );
        Ok(result)
    }

    /// Full record for one book, straight from the detail endpoint.
    pub async fn get_book_by_slug(&self, slug: &str) -> Result<PublicBook> {
        let detail = self.source.book_detail(slug).await?;
        Ok(map_detail(&detail, slug))
    }

    /// Fresh index over the currently cached author list.
    pub(crate) async fn author_index(&self) -> Result<AuthorIndex> {
        let authors = self.source.list_authors().await?;
        Ok(AuthorIndex::new(&authors))
    }
}

/// Map a list entry, resolving its free-text author string through `index`.
pub fn map_list_item(book: &RawBook, index: &AuthorIndex) -> PublicBook {
    PublicBook {
        slug: book.slug.clone(),
        title: book.title.clone(),
        description: None,
        url: book.url.clone(),
        thumbnail: book.cover_thumb.clone(),
        authors: index.resolve_all(&book.author),
        kind: non_empty(&book.kind),
        genre: non_empty(&book.genre),
        epoch: non_empty(&book.epoch),
    }
}

/// The detail payload has no slug of its own, so the requested one is used.
fn map_detail(detail: &RawBookDetail, slug: &str) -> PublicBook {
    PublicBook {
        slug: slug.to_string(),
        title: detail.title.clone(),
        description: Some(detail.description_html().unwrap_or_default().to_string()),
        url: detail.url.clone(),
        thumbnail: detail.cover_thumb.clone(),
        authors: detail
            .authors
            .iter()
            .map(|a| PublicAuthor::new(a.slug.clone(), a.name.clone()))
            .collect(),
        kind: detail.kind().map(str::to_string),
        genre: detail.genre().map(str::to_string),
        epoch: detail.epoch().map(str::to_string),
    }
}

fn non_empty(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_string())
}

fn matches_filter(book: &PublicBook, filter: &BookFilter) -> bool {
    field_matches(book.kind.as_deref(), filter.kind.as_deref())
        && field_matches(book.genre.as_deref(), filter.genre.as_deref())
        && field_matches(book.epoch.as_deref(), filter.epoch.as_deref())
}

fn field_matches(value: Option<&str>, wanted: Option<&str>) -> bool {
    match (value, wanted) {
        (_, None) => true,
        (Some(value), Some(wanted)) => value.to_lowercase() == wanted.trim().to_lowercase(),
        (None, Some(_)) => false,
    }
}

/// Stable sort: books with equal keys keep their fetch order in both directions.
fn sort_books(books: &mut [PublicBook], sort: BookSort, order: SortOrder) {
    let key: fn(&PublicBook) -> &str = match sort {
        BookSort::Title => title_key,
        BookSort::Author => PublicBook::first_author_name,
    };

    books.sort_by(|a, b| {
        let ordering = key(a).cmp(key(b));
        if order.is_desc() {
            ordering.reverse()
        } else {
            ordering
        }
    });
}

fn title_key(book: &PublicBook) -> &str {
    &book.title
}
