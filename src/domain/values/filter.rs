use chrono::{DateTime, NaiveDate, TimeZone, Utc};

/// Combined search/date predicate applied before counting and fetching.
///
/// Constructed per request and validated up front; repositories translate
/// it to their own query syntax but never reinterpret it.
#[derive(Debug, Clone, Default)]
pub struct RecordFilter {
    search: Option<String>,
    id_match: Option<i64>,
    range: Option<(DateTime<Utc>, DateTime<Utc>)>,
}

impl RecordFilter {
    /// Builds a filter from a free-text search term and an optional date
    /// range over the creation timestamp.
    ///
    /// An empty or whitespace-only term matches everything. A term that
    /// parses as an integer additionally matches the record id exactly,
    /// OR-combined with the substring predicate. The date predicate is
    /// active only when both bounds are present and covers
    /// `[start 00:00:00.000, end 23:59:59.999]` UTC inclusive.
    pub fn build(search: Option<&str>, start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        let search = search
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string);
        let id_match = search.as_deref().and_then(|s| s.parse::<i64>().ok());

        let range = match (start, end) {
            (Some(start), Some(end)) => {
                let lo = Utc.from_utc_datetime(&start.and_hms_opt(0, 0, 0).unwrap_or_default());
                let hi = Utc.from_utc_datetime(
                    &end.and_hms_milli_opt(23, 59, 59, 999).unwrap_or_default(),
                );
                Some((lo, hi))
            }
            _ => None,
        };

        Self {
            search,
            id_match,
            range,
        }
    }

    pub fn search(&self) -> Option<&str> {
        self.search.as_deref()
    }

    pub fn id_match(&self) -> Option<i64> {
        self.id_match
    }

    pub fn range(&self) -> Option<(DateTime<Utc>, DateTime<Utc>)> {
        self.range
    }

    pub fn is_unfiltered(&self) -> bool {
        self.search.is_none() && self.range.is_none()
    }
}
