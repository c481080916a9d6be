/// What a fetch operation does when the backing store fails.
///
/// `Propagate` surfaces the error to the caller; `EmptyFallback` logs a
/// diagnostic and degrades to an empty result, for dashboard widgets
/// where a zero state beats a hard failure. Fixed per operation at
/// construction time, never decided ad hoc at call sites.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailurePolicy {
    Propagate,
    EmptyFallback,
}
