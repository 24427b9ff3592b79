mod common;

use common::{FakeCatalog, author, book};
use lektury_catalog::AuthorAggregator;
use lektury_types::{AuthorSort, PageRequest, PublicAuthor, SortOrder};

fn page(page: usize, page_size: usize) -> PageRequest {
    PageRequest::new(page, page_size).unwrap()
}

#[tokio::test]
async fn test_list_authors_paginates() {
    let catalog = FakeCatalog::new(
        vec![],
        vec![
            author("author1", "Author 1"),
            author("author2", "Author 2"),
            author("author3", "Author 3"),
        ],
    );
    let aggregator = AuthorAggregator::new(catalog.into_source());

    let result = aggregator
        .list_authors(page(1, 2), AuthorSort::Name, SortOrder::Asc)
        .await
        .unwrap();

    assert_eq!(result.items.len(), 2);
    assert_eq!(result.total_count, 3);
    assert_eq!(result.total_pages, 2);
}

#[tokio::test]
async fn test_list_authors_sorts_by_name() {
    let catalog = FakeCatalog::new(
        vec![],
        vec![author("c", "Charlie"), author("a", "Alice"), author("b", "Bob")],
    );
    let aggregator = AuthorAggregator::new(catalog.into_source());

    let ascending = aggregator
        .list_authors(page(1, 10), AuthorSort::Name, SortOrder::Asc)
        .await
        .unwrap();
    let names: Vec<_> = ascending.items.iter().map(|a| a.name.as_str()).collect();
    assert_eq!(names, vec!["Alice", "Bob", "Charlie"]);

    let descending = aggregator
        .list_authors(page(1, 10), AuthorSort::Name, SortOrder::Desc)
        .await
        .unwrap();
    let names: Vec<_> = descending.items.iter().map(|a| a.name.as_str()).collect();
    assert_eq!(names, vec!["Charlie", "Bob", "Alice"]);
}

#[tokio::test]
async fn test_default_sort_is_name_ascending() {
    let catalog = FakeCatalog::new(vec![], vec![author("b", "Bob"), author("a", "Alice")]);
    let aggregator = AuthorAggregator::new(catalog.into_source());

    let result = aggregator
        .list_authors(page(1, 10), AuthorSort::default(), SortOrder::default())
        .await
        .unwrap();

    assert_eq!(result.items[0], PublicAuthor::new("a", "Alice"));
    assert_eq!(result.items[1], PublicAuthor::new("b", "Bob"));
}

#[tokio::test]
async fn test_books_by_author() {
    let catalog = FakeCatalog::new(vec![], vec![author("test-author", "Test Author")])
        .with_author_books(
            "test-author",
            vec![
                book("book1", "Book 1", "Test Author"),
                book("book2", "Book 2", "Test Author"),
            ],
        );
    let aggregator = AuthorAggregator::new(catalog.into_source());

    let result = aggregator
        .list_books_by_author("test-author", page(1, 10))
        .await
        .unwrap();

    assert_eq!(result.items.len(), 2);
    assert_eq!(result.items[0].title, "Book 1");
    assert_eq!(
        result.items[0].authors,
        vec![PublicAuthor::new("test-author", "Test Author")]
    );
}

#[tokio::test]
async fn test_books_by_author_keep_remote_order() {
    let catalog = FakeCatalog::new(vec![], vec![author("prus", "Bolesław Prus")])
        .with_author_books(
            "prus",
            vec![
                book("placowka", "Placówka", "Bolesław Prus"),
                book("lalka", "Lalka", "Bolesław Prus"),
                book("faraon", "Faraon", "Bolesław Prus"),
            ],
        );
    let aggregator = AuthorAggregator::new(catalog.into_source());

    let result = aggregator
        .list_books_by_author("prus", page(2, 2))
        .await
        .unwrap();

    assert_eq!(result.total_count, 3);
    assert_eq!(result.total_pages, 2);
    assert_eq!(result.items.len(), 1);
    assert_eq!(result.items[0].slug, "faraon");
}

#[tokio::test]
async fn test_books_by_author_co_authors_resolved() {
    let catalog = FakeCatalog::new(
        vec![],
        vec![author("a", "Anna"), author("b", "Bartek")],
    )
    .with_author_books("a", vec![book("wspolna", "Wspólna", "Anna, Bartek, Celina")]);
    let aggregator = AuthorAggregator::new(catalog.into_source());

    let result = aggregator
        .list_books_by_author("a", page(1, 10))
        .await
        .unwrap();

    let slugs: Vec<_> = result.items[0]
        .authors
        .iter()
        .map(|a| a.slug.as_str())
        .collect();
    assert_eq!(slugs, vec!["a", "b", ""]);
}

#[tokio::test]
async fn test_unknown_author_yields_empty_result() {
    let aggregator = AuthorAggregator::new(FakeCatalog::default().into_source());

    let result = aggregator
        .list_books_by_author("unknown-slug", page(1, 10))
        .await
        .unwrap();

    assert_eq!(result.total_count, 0);
    assert!(result.items.is_empty());
    assert_eq!(result.total_pages, 0);
}

#[tokio::test]
async fn test_author_list_failure_propagates() {
    let catalog = FakeCatalog::default()
        .with_author_books("a", vec![book("x", "X", "A")])
        .failing_authors();
    let aggregator = AuthorAggregator::new(catalog.into_source());

    let err = aggregator
        .list_books_by_author("a", page(1, 10))
        .await
        .unwrap_err();
    assert!(err.is_upstream_failure());

    let err = aggregator
        .list_authors(page(1, 10), AuthorSort::Name, SortOrder::Asc)
        .await
        .unwrap_err();
    assert!(err.is_upstream_failure());
}
