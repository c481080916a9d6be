use crate::domain::error::DomainError;
use crate::domain::values::filter::RecordFilter;
use crate::domain::values::page::PageDescriptor;
use serde::Serialize;

/// One page of records plus the pagination state it was cut from.
#[derive(Debug, Clone, Serialize)]
pub struct PagedResult<T> {
    pub records: Vec<T>,
    pub pagination: PageDescriptor,
}

/// Filtered count-and-window access to one record collection.
///
/// Every browseable entity exposes this pair so the paginated fetch
/// logic exists exactly once. Implementations order windows newest
/// first by creation timestamp with an id tie-break, keeping page
/// boundaries stable across requests.
pub trait RecordStore: Send + Sync {
    type Record;

    fn count(&self, filter: &RecordFilter) -> Result<u64, DomainError>;

    fn window(
        &self,
        filter: &RecordFilter,
        offset: u64,
        limit: u64,
    ) -> Result<Vec<Self::Record>, DomainError>;
}
