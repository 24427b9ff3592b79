//! Page selection and paged results.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Largest page size a caller may request.
pub const MAX_PAGE_SIZE: usize = 100;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PageRequestError {
    #[error("Page must be greater than 0")]
    InvalidPage,

    #[error("PageSize must be between 1 and {MAX_PAGE_SIZE}")]
    InvalidPageSize,
}

/// A validated page selection: `page >= 1`, `1 <= page_size <= MAX_PAGE_SIZE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: usize,
    page_size: usize,
}

impl PageRequest {
    pub fn new(page: usize, page_size: usize) -> Result<Self, PageRequestError> {
        if page < 1 {
            return Err(PageRequestError::InvalidPage);
        }
        if page_size < 1 || page_size > MAX_PAGE_SIZE {
            return Err(PageRequestError::InvalidPageSize);
        }
        Ok(Self { page, page_size })
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Number of items preceding this page.
    pub fn offset(&self) -> usize {
        (self.page - 1).saturating_mul(self.page_size)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: 20,
        }
    }
}

/// One page of a larger, already filtered and ordered result set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PagedResult<T> {
    pub items: Vec<T>,
    pub page: usize,
    pub page_size: usize,
    pub total_count: usize,
    pub total_pages: usize,
}

impl<T> PagedResult<T> {
    /// Slice `items` down to the requested page.
    ///
    /// `total_count` is the length of `items` before slicing. A page past the
    /// end yields no items but keeps the totals.
    pub fn paginate(items: Vec<T>, request: PageRequest) -> Self {
        let total_count = items.len();
        let items = items
            .into_iter()
            .skip(request.offset())
            .take(request.page_size())
            .collect();

        Self {
            items,
            page: request.page(),
            page_size: request.page_size(),
            total_count,
            total_pages: total_count.div_ceil(request.page_size()),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.total_count == 0
    }
}
