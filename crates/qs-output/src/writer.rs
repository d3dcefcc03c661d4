//! The `AuditWriter` trait implemented by all audit-trail backends.

use crate::{AuditRow, OutputResult};

/// Trait implemented by the CSV and SQLite audit writers.
///
/// Each row must be durable when `write_customer` returns: a later abort
/// (e.g. waiting-line overflow) must not lose rows already written.
pub trait AuditWriter {
    /// Write one completed customer and flush it to the sink.
    fn write_customer(&mut self, row: &AuditRow) -> OutputResult<()>;

    /// Flush and close the underlying sink.
    ///
    /// Idempotent: safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
