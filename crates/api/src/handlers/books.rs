use axum::{
    Json,
    extract::{Path, Query, State, rejection::QueryRejection},
};
use lektury_types::{BookFilter, BookSort, PagedResult, PublicBook, SortOrder};
use serde::Deserialize;

use super::page_request;
use crate::error::ApiError;
use crate::routes::AppState;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookListQuery {
    pub page: Option<i64>,
    pub page_size: Option<i64>,
    pub kind: Option<String>,
    pub genre: Option<String>,
    pub epoch: Option<String>,
    pub sort_by: Option<String>,
    pub order: Option<String>,
}

/// `GET /api/books`. Unknown `sortBy`/`order` values fall back to title, ascending.
pub async fn list_books(
    State(state): State<AppState>,
    query: Result<Query<BookListQuery>, QueryRejection>,
) -> Result<Json<PagedResult<PublicBook>>, ApiError> {
    let Query(query) = query?;
    let page = page_request(query.page, query.page_size)?;
    let filter = BookFilter::new(query.kind, query.genre, query.epoch);
    let sort = BookSort::from_param(query.sort_by.as_deref());
    let order = SortOrder::from_param(query.order.as_deref());

    state
        .books
        .list_books(page, &filter, sort, order)
        .await
        .map(Json)
        .map_err(|e| ApiError::catalog(e, "books"))
}

pub async fn get_book(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<PublicBook>, ApiError> {
    if slug.trim().is_empty() {
        return Err(ApiError::BadRequest("Book slug is required".to_string()));
    }

    state
        .books
        .get_book_by_slug(&slug)
        .await
        .map(Json)
        .map_err(|e| ApiError::catalog(e, "book"))
}
