//! The `OutputWriter` trait implemented by row-oriented backends.

use crate::{OutputResult, TickSummaryRow};

/// A sink for periodic tick summaries.
///
/// Errors are returned to the caller; [`SimOutputObserver`][crate::SimOutputObserver]
/// stores the first one for retrieval after the run.
pub trait OutputWriter {
    /// Append one summary row.
    fn write_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()>;

    /// Flush and close the underlying file handles.  Calling it twice is a
    /// no-op.
    fn finish(&mut self) -> OutputResult<()>;
}
