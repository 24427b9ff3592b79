use axum::{
    Json,
    extract::rejection::QueryRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use lektury_catalog::CatalogError;
use lektury_types::PageRequestError;
use serde_json::json;

/// Error returned by every handler, rendered as `{"status":"error","message":...}`.
#[derive(Debug, PartialEq, Eq)]
pub enum ApiError {
    BadRequest(String),
    NotFound(String),
    /// The catalog could not be reached or answered with garbage. The message
    /// is generic; details only go to the log.
    Upstream(String),
}

impl ApiError {
    /// Map a catalog failure while fetching `what` (e.g. `"books"`).
    pub fn catalog(err: CatalogError, what: &str) -> Self {
        if err.is_not_found() {
            tracing::warn!("Catalog has no {}: {}", what, err);
            ApiError::NotFound(format!("{} not found", capitalize(what)))
        } else {
            tracing::error!("Failed to fetch {}: {}", what, err);
            ApiError::Upstream(format!(
                "Failed to fetch {}. Please try again later.",
                what
            ))
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Upstream(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<PageRequestError> for ApiError {
    fn from(err: PageRequestError) -> Self {
        ApiError::BadRequest(err.to_string())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match self {
            ApiError::BadRequest(msg) | ApiError::NotFound(msg) | ApiError::Upstream(msg) => msg,
        };

        let body = Json(json!({
            "status": "error",
            "message": message
        }));

        (status, body).into_response()
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
