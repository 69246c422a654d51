//! Pagination types

use serde::{Deserialize, Serialize};

use super::ValidationError;

/// Default page number when a client doesn't send one
pub const DEFAULT_PAGE: u32 = 0;

/// Default items per page when a client doesn't send one
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Page request with zero-based page numbers.
///
/// No clamping happens here; defaulting belongs to [`PageParams`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    /// Page number (0-indexed)
    pub page_number: u32,
    /// Upper bound on items in the page
    pub page_size: u32,
}

impl PageRequest {
    pub fn new(page_number: u32, page_size: u32) -> Self {
        Self {
            page_number,
            page_size,
        }
    }

    /// Calculate SQL OFFSET value.
    pub fn offset(&self) -> u64 {
        u64::from(self.page_number) * u64::from(self.page_size)
    }

    /// Get LIMIT value.
    pub fn limit(&self) -> u32 {
        self.page_size
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE, DEFAULT_PAGE_SIZE)
    }
}

/// One page of results plus the size of the whole collection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    /// Items for current page
    pub content: Vec<T>,
    /// Current page number (0-indexed)
    pub page_number: u32,
    /// Requested page size
    pub page_size: u32,
    /// Total count across all pages
    pub total_elements: u64,
}

impl<T> Page<T> {
    pub fn new(content: Vec<T>, request: PageRequest, total_elements: u64) -> Self {
        Self {
            content,
            page_number: request.page_number,
            page_size: request.page_size,
            total_elements,
        }
    }

    /// Page with nothing in it, for an empty collection.
    pub fn empty(request: PageRequest) -> Self {
        Self::new(Vec::new(), request, 0)
    }

    /// Calculate total number of pages.
    pub fn total_pages(&self) -> u64 {
        if self.page_size == 0 {
            return 0;
        }
        self.total_elements.div_ceil(u64::from(self.page_size))
    }

    /// Check if there's a next page.
    pub fn has_next(&self) -> bool {
        u64::from(self.page_number) + 1 < self.total_pages()
    }

    /// Check if there's a previous page.
    pub fn has_previous(&self) -> bool {
        self.page_number > 0
    }

    /// Convert the items, keeping the paging metadata.
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            content: self.content.into_iter().map(f).collect(),
            page_number: self.page_number,
            page_size: self.page_size,
            total_elements: self.total_elements,
        }
    }
}

/// Query parameters for pagination
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PageParams {
    pub page: Option<u32>,
    pub size: Option<u32>,
}

impl TryFrom<PageParams> for PageRequest {
    type Error = ValidationError;

    fn try_from(params: PageParams) -> Result<Self, Self::Error> {
        let size = params.size.unwrap_or(DEFAULT_PAGE_SIZE);
        if size == 0 {
            return Err(ValidationError::InvalidPageSize);
        }
        Ok(Self::new(params.page.unwrap_or(DEFAULT_PAGE), size))
    }
}
