//! `AuditObserver<W>`: bridges `SimObserver` to an `AuditWriter`.

use qs_sim::{CompletedCustomer, SimError, SimObserver, SimReport};
use tracing::warn;

use crate::row::AuditRow;
use crate::writer::AuditWriter;
use crate::{OutputError, OutputResult};

/// A [`SimObserver`] that writes one audit row per departure to any
/// [`AuditWriter`] backend.
///
/// Errors from the writer are stored internally because `SimObserver` methods
/// have no return value.  After `sim.run()` returns, check for errors with
/// [`take_error`][Self::take_error].  The writer is finished on both normal
/// termination and abort, so rows written before an overflow stay on disk.
pub struct AuditObserver<W: AuditWriter> {
    writer:       W,
    rows_written: u64,
    last_error:   Option<OutputError>,
}

impl<W: AuditWriter> AuditObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, rows_written: 0, last_error: None }
    }

    /// Take the stored write error (if any) after `sim.run()` returns.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Number of rows successfully handed to the writer.
    pub fn rows_written(&self) -> u64 {
        self.rows_written
    }

    pub fn writer(&self) -> &W {
        &self.writer
    }

    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            if self.last_error.is_none() {
                warn!(error = %e, "audit write failed");
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: AuditWriter> SimObserver for AuditObserver<W> {
    fn on_departure(&mut self, customer: &CompletedCustomer) {
        let result = self.writer.write_customer(&AuditRow::from(customer));
        if result.is_ok() {
            self.rows_written += 1;
        }
        self.store_err(result);
    }

    fn on_sim_end(&mut self, _report: &SimReport) {
        let result = self.writer.finish();
        self.store_err(result);
    }

    fn on_sim_abort(&mut self, _error: &SimError) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
