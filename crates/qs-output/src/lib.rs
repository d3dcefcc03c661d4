//! `qs-output`: audit trail and report output for the queueing simulator.
//!
//! | Feature   | Backend | Sink                         |
//! |-----------|---------|------------------------------|
//! | *(none)*  | CSV     | any file, e.g. `audit.csv`   |
//! | `sqlite`  | SQLite  | any file, e.g. `audit.db`    |
//!
//! Both backends implement [`AuditWriter`] and are driven by
//! [`AuditObserver`], which implements `qs_sim::SimObserver`.  The text
//! report lives in [`report`].
//!
//! # Usage
//!
//! ```rust,ignore
//! use qs_output::{write_report, AuditObserver, CsvAuditWriter};
//!
//! let writer = CsvAuditWriter::new(Path::new("audit.csv"))?;
//! let mut obs = AuditObserver::new(writer);
//! let report = sim.run(&mut obs)?;
//! if let Some(e) = obs.take_error() { eprintln!("audit error: {e}"); }
//! write_report(&mut report_file, &report)?;
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod report;
pub mod row;
pub mod writer;

#[cfg(feature = "sqlite")]
pub mod sqlite;

#[cfg(test)]
mod tests;

pub use csv::{CsvAuditWriter, AUDIT_HEADER};
pub use error::{OutputError, OutputResult};
pub use observer::AuditObserver;
pub use report::{write_replication_summary, write_report, write_report_header, Summary};
pub use row::AuditRow;
pub use writer::AuditWriter;

#[cfg(feature = "sqlite")]
pub use sqlite::SqliteAuditWriter;
