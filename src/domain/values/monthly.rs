use chrono::{DateTime, Datelike, Utc};
use serde::Serialize;

pub const MONTH_NAMES: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// One of 12 fixed month slots in a yearly case-load report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct MonthlyBucket {
    pub total: u64,
    pub solved: u64,
    pub pending: u64,
}

/// A record that can be placed into monthly buckets: anything with a
/// creation timestamp and a resolved/unresolved state.
pub trait TrackedRecord {
    fn created_at(&self) -> DateTime<Utc>;
    fn is_resolved(&self) -> bool;
}

/// Buckets records into the 12 months of `year`.
///
/// Records created outside the target year are skipped, so callers may
/// pass a broader slice without corrupting the totals. `pending` is
/// derived as `total - solved` once the pass completes.
pub fn aggregate_by_month<R: TrackedRecord>(year: i32, records: &[R]) -> [MonthlyBucket; 12] {
    let mut buckets = [MonthlyBucket::default(); 12];
    for record in records {
        let created = record.created_at();
        if created.year() != year {
            continue;
        }
        let slot = &mut buckets[created.month0() as usize];
        slot.total += 1;
        if record.is_resolved() {
            slot.solved += 1;
        }
    }
    for slot in &mut buckets {
        slot.pending = slot.total - slot.solved;
    }
    buckets
}
