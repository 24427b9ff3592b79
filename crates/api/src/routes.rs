use std::sync::Arc;

use axum::{Router, routing::get};
use lektury_catalog::{AuthorAggregator, BookAggregator, CatalogSource};
use tower_http::trace::TraceLayer;

use crate::handlers::{self, authors, books};

#[derive(Clone)]
pub struct AppState {
    pub books: BookAggregator,
    pub authors: AuthorAggregator,
}

impl AppState {
    pub fn new(source: Arc<dyn CatalogSource>) -> Self {
        Self {
            books: BookAggregator::new(source.clone()),
            authors: AuthorAggregator::new(source),
        }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/api/books", get(books::list_books))
        .route("/api/books/{slug}", get(books::get_book))
        .route("/api/authors", get(authors::list_authors))
        .route("/api/authors/{slug}/books", get(authors::list_books_by_author))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
