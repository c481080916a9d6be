use mindcare::application::fetch_page::fetch_page;
use mindcare::domain::error::DomainError;
use mindcare::domain::ports::record_store::RecordStore;
use mindcare::domain::values::filter::RecordFilter;
use mindcare::domain::values::page::PageRequest;
use mindcare::domain::values::policy::FailurePolicy;

/// A store whose backing database is gone.
struct UnreachableStore;

impl RecordStore for UnreachableStore {
    type Record = ();

    fn count(&self, _filter: &RecordFilter) -> Result<u64, DomainError> {
        Err(DomainError::StoreUnavailable("disk I/O error".into()))
    }

    fn window(
        &self,
        _filter: &RecordFilter,
        _offset: u64,
        _limit: u64,
    ) -> Result<Vec<()>, DomainError> {
        Err(DomainError::StoreUnavailable("disk I/O error".into()))
    }
}

#[test]
fn test_propagate_surfaces_store_failure() {
    let err = fetch_page(
        &UnreachableStore,
        &RecordFilter::default(),
        &PageRequest::default(),
        FailurePolicy::Propagate,
        "test.browse",
    )
    .unwrap_err();
    assert!(matches!(err, DomainError::StoreUnavailable(_)));
}

#[test]
fn test_empty_fallback_serves_zero_state() {
    let result = fetch_page(
        &UnreachableStore,
        &RecordFilter::default(),
        &PageRequest::default(),
        FailurePolicy::EmptyFallback,
        "test.widget",
    )
    .unwrap();

    assert!(result.records.is_empty());
    assert_eq!(result.pagination.total_records, 0);
    assert_eq!(result.pagination.total_pages, 0);
    assert!(!result.pagination.has_next_page);
    assert!(!result.pagination.has_previous_page);
}

#[test]
fn test_empty_fallback_keeps_requested_page() {
    let request = PageRequest::new(Some(4), Some(20)).unwrap();
    let result = fetch_page(
        &UnreachableStore,
        &RecordFilter::default(),
        &request,
        FailurePolicy::EmptyFallback,
        "test.widget",
    )
    .unwrap();

    assert_eq!(result.pagination.page, 4);
    assert_eq!(result.pagination.page_size, 20);
    assert!(result.pagination.has_previous_page);
}
