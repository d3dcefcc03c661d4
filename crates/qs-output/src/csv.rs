//! CSV audit-trail backend.
//!
//! ```csv
//! customer,inter_arrival_secs,service_secs
//! 1,54.947,13.202
//! 2,21.731,41.006
//! ```
//!
//! Durations are printed with three decimals.  Every row is flushed as soon
//! as it is written.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use csv::Writer;

use crate::writer::AuditWriter;
use crate::{AuditRow, OutputResult};

/// Column names, in order.
pub const AUDIT_HEADER: [&str; 3] = ["customer", "inter_arrival_secs", "service_secs"];

/// Writes the audit trail as CSV to any `Write` sink (a file by default).
pub struct CsvAuditWriter<W: Write = File> {
    inner:    Writer<W>,
    finished: bool,
}

impl CsvAuditWriter<File> {
    /// Create (or truncate) the file at `path` and write the header row.
    pub fn new(path: &Path) -> OutputResult<Self> {
        Self::from_writer(File::create(path)?)
    }
}

impl<W: Write> CsvAuditWriter<W> {
    /// Wrap an arbitrary sink and write the header row.
    pub fn from_writer(sink: W) -> OutputResult<Self> {
        let mut inner = Writer::from_writer(sink);
        inner.write_record(AUDIT_HEADER)?;
        inner.flush()?;
        Ok(Self { inner, finished: false })
    }

    /// Borrow the underlying sink.
    pub fn get_ref(&self) -> &W {
        self.inner.get_ref()
    }
}

impl<W: Write> AuditWriter for CsvAuditWriter<W> {
    fn write_customer(&mut self, row: &AuditRow) -> OutputResult<()> {
        self.inner.write_record(&[
            row.customer.to_string(),
            format!("{:.3}", row.inter_arrival_secs),
            format!("{:.3}", row.service_secs),
        ])?;
        self.inner.flush()?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.inner.flush()?;
        Ok(())
    }
}
