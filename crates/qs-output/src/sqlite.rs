//! SQLite audit-trail backend (feature `sqlite`).
//!
//! Creates (or truncates) a database with one table, `audit_trail`, holding
//! the same columns as the CSV backend.  Rows are inserted in autocommit mode
//! so each one is durable as soon as it is written.

use std::path::Path;

use rusqlite::Connection;

use crate::writer::AuditWriter;
use crate::{AuditRow, OutputResult};

/// Writes the audit trail to an SQLite database.
pub struct SqliteAuditWriter {
    conn:     Connection,
    finished: bool,
}

impl SqliteAuditWriter {
    /// Open (or create) the database at `path` and reset the `audit_trail` table.
    pub fn new(path: &Path) -> OutputResult<Self> {
        let conn = Connection::open(path)?;

        conn.execute_batch(
            "PRAGMA journal_mode = WAL;
             PRAGMA synchronous  = NORMAL;
             DROP TABLE IF EXISTS audit_trail;
             CREATE TABLE audit_trail (
                 customer           INTEGER PRIMARY KEY,
                 inter_arrival_secs REAL    NOT NULL,
                 service_secs       REAL    NOT NULL
             );",
        )?;

        Ok(Self { conn, finished: false })
    }
}

impl AuditWriter for SqliteAuditWriter {
    fn write_customer(&mut self, row: &AuditRow) -> OutputResult<()> {
        let mut stmt = self.conn.prepare_cached(
            "INSERT INTO audit_trail (customer, inter_arrival_secs, service_secs) \
             VALUES (?1, ?2, ?3)",
        )?;
        stmt.execute(rusqlite::params![
            row.customer,
            row.inter_arrival_secs,
            row.service_secs,
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.conn
            .execute_batch("PRAGMA wal_checkpoint(TRUNCATE);")?;
        Ok(())
    }
}
