pub mod authors;
pub mod books;

use lektury_types::PageRequest;

use crate::error::ApiError;

pub async fn health_check() -> &'static str {
    "OK"
}

/// Validate raw `page`/`pageSize` parameters, filling in the defaults.
pub(crate) fn page_request(
    page: Option<i64>,
    page_size: Option<i64>,
) -> Result<PageRequest, ApiError> {
    let defaults = PageRequest::default();
    // Negative values fail conversion and are rejected as 0.
    let page = page.map_or(defaults.page(), |p| usize::try_from(p).unwrap_or(0));
    let page_size = page_size.map_or(defaults.page_size(), |s| usize::try_from(s).unwrap_or(0));
    Ok(PageRequest::new(page, page_size)?)
}
