use axum::{
    Json,
    extract::{Path, Query, State, rejection::QueryRejection},
};
use lektury_types::{AuthorSort, PagedResult, PublicAuthor, PublicBook, SortOrder};
use serde::Deserialize;

use super::page_request;
use crate::error::ApiError;
use crate::routes::AppState;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorListQuery {
    pub page: Option<i64>,
    pub page_size: Option<i64>,
    pub sort_by: Option<String>,
    pub order: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorBooksQuery {
    pub page: Option<i64>,
    pub page_size: Option<i64>,
}

/// `GET /api/authors`. Unlike the book listing, unknown sort parameters are
/// rejected.
pub async fn list_authors(
    State(state): State<AppState>,
    query: Result<Query<AuthorListQuery>, QueryRejection>,
) -> Result<Json<PagedResult<PublicAuthor>>, ApiError> {
    let Query(query) = query?;
    let page = page_request(query.page, query.page_size)?;

    let sort = match query.sort_by.as_deref() {
        None => AuthorSort::default(),
        Some(value) => AuthorSort::parse(value)
            .ok_or_else(|| ApiError::BadRequest("sortBy must be 'name'".to_string()))?,
    };
    let order = match query.order.as_deref() {
        None => SortOrder::default(),
        Some(value) => SortOrder::parse(value)
            .ok_or_else(|| ApiError::BadRequest("order must be 'asc' or 'desc'".to_string()))?,
    };

    state
        .authors
        .list_authors(page, sort, order)
        .await
        .map(Json)
        .map_err(|e| ApiError::catalog(e, "authors"))
}

/// `GET /api/authors/{slug}/books`. An author with no books is reported as
/// missing.
pub async fn list_books_by_author(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    query: Result<Query<AuthorBooksQuery>, QueryRejection>,
) -> Result<Json<PagedResult<PublicBook>>, ApiError> {
    let Query(query) = query?;
    if slug.trim().is_empty() {
        return Err(ApiError::BadRequest("Author slug is required".to_string()));
    }
    let page = page_request(query.page, query.page_size)?;

    let result = state
        .authors
        .list_books_by_author(&slug, page)
        .await
        .map_err(|e| ApiError::catalog(e, "books"))?;

    if result.is_empty() {
        tracing::warn!(author = %slug, "No books found for author");
        return Err(ApiError::NotFound(format!(
            "No books found for author '{}'",
            slug
        )));
    }

    Ok(Json(result))
}
