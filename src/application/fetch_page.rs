use crate::domain::error::DomainError;
use crate::domain::ports::record_store::{PagedResult, RecordStore};
use crate::domain::values::filter::RecordFilter;
use crate::domain::values::page::{PageDescriptor, PageRequest};
use crate::domain::values::policy::FailurePolicy;

/// Counts matching records, then fetches the requested window.
///
/// The count and the window are two separate store reads with no
/// transactional link: a write landing between them can leave
/// `total_records` stale relative to `records`. That staleness is an
/// accepted contract of this layer. Pages past the end are not clamped
/// and come back as an empty record list with a descriptor consistent
/// with the observed total.
pub fn fetch_page<S>(
    store: &S,
    filter: &RecordFilter,
    request: &PageRequest,
    policy: FailurePolicy,
    operation: &str,
) -> Result<PagedResult<S::Record>, DomainError>
where
    S: RecordStore + ?Sized,
{
    match try_fetch(store, filter, request) {
        Ok(result) => Ok(result),
        Err(err) => match policy {
            FailurePolicy::Propagate => {
                tracing::error!(operation, error = %err, "page fetch failed");
                Err(err)
            }
            FailurePolicy::EmptyFallback => {
                tracing::warn!(operation, error = %err, "page fetch failed, serving empty page");
                Ok(PagedResult {
                    records: Vec::new(),
                    pagination: PageDescriptor::compute(0, request),
                })
            }
        },
    }
}

fn try_fetch<S>(
    store: &S,
    filter: &RecordFilter,
    request: &PageRequest,
) -> Result<PagedResult<S::Record>, DomainError>
where
    S: RecordStore + ?Sized,
{
    let total_records = store.count(filter)?;
    let records = store.window(filter, request.offset(), request.page_size())?;
    Ok(PagedResult {
        records,
        pagination: PageDescriptor::compute(total_records, request),
    })
}
