use crate::domain::error::DomainError;
use serde::Serialize;

pub const DEFAULT_PAGE: u64 = 1;
pub const DEFAULT_PAGE_SIZE: u64 = 10;

/// A validated page window request. Page numbers are 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: u64,
    page_size: u64,
}

impl PageRequest {
    /// Missing values fall back to page 1 with 10 records per page.
    /// Zero is rejected for both fields rather than silently producing
    /// an empty window.
    pub fn new(page: Option<u64>, page_size: Option<u64>) -> Result<Self, DomainError> {
        let page = page.unwrap_or(DEFAULT_PAGE);
        let page_size = page_size.unwrap_or(DEFAULT_PAGE_SIZE);
        if page < 1 {
            return Err(DomainError::InvalidRequest(format!(
                "page must be >= 1, got {page}"
            )));
        }
        if page_size < 1 {
            return Err(DomainError::InvalidRequest(format!(
                "page_size must be >= 1, got {page_size}"
            )));
        }
        Ok(Self { page, page_size })
    }

    pub fn page(&self) -> u64 {
        self.page
    }

    pub fn page_size(&self) -> u64 {
        self.page_size
    }

    pub fn offset(&self) -> u64 {
        (self.page - 1) * self.page_size
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// Derived pagination state returned alongside every page of records.
///
/// The page number is not clamped: requests beyond the last page keep
/// their requested number and yield `has_next_page == false`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageDescriptor {
    pub page: u64,
    pub page_size: u64,
    pub total_records: u64,
    pub total_pages: u64,
    pub has_next_page: bool,
    pub has_previous_page: bool,
}

impl PageDescriptor {
    pub fn compute(total_records: u64, request: &PageRequest) -> Self {
        let page = request.page();
        let page_size = request.page_size();
        let total_pages = total_records.div_ceil(page_size);
        Self {
            page,
            page_size,
            total_records,
            total_pages,
            has_next_page: page < total_pages,
            has_previous_page: page > 1,
        }
    }
}
