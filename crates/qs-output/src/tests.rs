//! Integration tests for qs-output.

use std::collections::VecDeque;

use qs_core::{SimParams, VariateSource};
use qs_sim::{SimBuilder, SimReport};

/// Hands out pre-chosen exponential variates in order, ignoring the mean.
struct Script(VecDeque<f64>);

impl Script {
    fn new(values: &[f64]) -> Self {
        Script(values.iter().copied().collect())
    }
}

impl VariateSource for Script {
    fn uniform(&mut self) -> f64 {
        unreachable!("scripted source only hands out exponentials")
    }

    fn exponential(&mut self, _mean: f64) -> f64 {
        self.0.pop_front().expect("script exhausted")
    }
}

fn read_rows(path: &std::path::Path) -> Vec<Vec<String>> {
    let mut rdr = csv::Reader::from_path(path).unwrap();
    rdr.records()
        .map(|r| r.unwrap().iter().map(str::to_owned).collect())
        .collect()
}

fn sample_report() -> SimReport {
    SimReport {
        avg_wait:           1.0,
        avg_queue_length:   0.5,
        server_utilization: 0.625,
        total_time:         8.0,
        customers_served:   4,
    }
}

#[cfg(test)]
mod row_tests {
    use qs_core::{CustomerId, SimTime};
    use qs_sim::CompletedCustomer;

    use crate::AuditRow;

    #[test]
    fn converts_minutes_to_seconds() {
        let done = CompletedCustomer {
            id:            CustomerId(7),
            arrival:       SimTime(3.0),
            inter_arrival: 1.5,
            wait:          0.25,
            service:       0.1,
            departure:     SimTime(3.35),
        };
        let row = AuditRow::from(&done);
        assert_eq!(row.customer, 7);
        assert!((row.inter_arrival_secs - 90.0).abs() < 1e-9);
        assert!((row.service_secs - 6.0).abs() < 1e-9);
    }

    #[test]
    fn sequence_numbers_beyond_u32() {
        let done = CompletedCustomer {
            id:            CustomerId(5_000_000_000),
            arrival:       SimTime(1.0),
            inter_arrival: 1.0,
            wait:          0.0,
            service:       1.0,
            departure:     SimTime(2.0),
        };
        assert_eq!(AuditRow::from(&done).customer, 5_000_000_000);
    }
}

#[cfg(test)]
mod csv_tests {
    use tempfile::TempDir;

    use super::read_rows;
    use crate::{AuditRow, AuditWriter, CsvAuditWriter, AUDIT_HEADER};

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    #[test]
    fn header_written_on_create() {
        let dir = tmp();
        let path = dir.path().join("audit.csv");
        let _w = CsvAuditWriter::new(&path).unwrap();

        let mut rdr = csv::Reader::from_path(&path).unwrap();
        let headers: Vec<_> = rdr.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers, AUDIT_HEADER);
        assert_eq!(rdr.records().count(), 0);
    }

    #[test]
    fn rows_use_three_decimals() {
        let dir = tmp();
        let path = dir.path().join("audit.csv");
        let mut w = CsvAuditWriter::new(&path).unwrap();
        w.write_customer(&AuditRow { customer: 1, inter_arrival_secs: 54.94712, service_secs: 13.2 })
            .unwrap();
        w.write_customer(&AuditRow { customer: 2, inter_arrival_secs: 0.0, service_secs: 41.0056 })
            .unwrap();
        w.finish().unwrap();

        let rows = read_rows(&path);
        assert_eq!(rows, vec![
            vec!["1".to_owned(), "54.947".to_owned(), "13.200".to_owned()],
            vec!["2".to_owned(), "0.000".to_owned(), "41.006".to_owned()],
        ]);
    }

    #[test]
    fn rows_visible_before_finish() {
        let dir = tmp();
        let path = dir.path().join("audit.csv");
        let mut w = CsvAuditWriter::new(&path).unwrap();
        w.write_customer(&AuditRow { customer: 1, inter_arrival_secs: 1.0, service_secs: 2.0 })
            .unwrap();

        // The writer is still open; the row must already be on disk.
        assert_eq!(read_rows(&path).len(), 1);
    }

    #[test]
    fn in_memory_sink() {
        let mut w = CsvAuditWriter::from_writer(Vec::new()).unwrap();
        w.write_customer(&AuditRow { customer: 3, inter_arrival_secs: 60.0, service_secs: 30.0 })
            .unwrap();
        w.write_customer(&AuditRow { customer: 1 << 32, inter_arrival_secs: 1.0, service_secs: 2.0 })
            .unwrap();
        w.finish().unwrap();
        let text = String::from_utf8(w.get_ref().clone()).unwrap();
        assert_eq!(
            text,
            "customer,inter_arrival_secs,service_secs\n3,60.000,30.000\n4294967296,1.000,2.000\n"
        );
    }

    #[test]
    fn finish_idempotent() {
        let dir = tmp();
        let mut w = CsvAuditWriter::new(&dir.path().join("audit.csv")).unwrap();
        w.finish().unwrap();
        w.finish().unwrap();
    }

    #[test]
    fn missing_directory_is_io_error() {
        let dir = tmp();
        let result = CsvAuditWriter::new(&dir.path().join("nope").join("audit.csv"));
        assert!(matches!(result, Err(crate::OutputError::Io(_))));
    }
}

#[cfg(test)]
mod report_tests {
    use qs_core::{GeneratorKind, SimParams};

    use super::sample_report;
    use crate::{write_replication_summary, write_report, write_report_header, Summary};

    #[test]
    fn header_echoes_parameters() {
        let mut params = SimParams::new(1.0, 0.5, 1000);
        params.queue_capacity = 25;
        params.seed = 42;
        params.generator = GeneratorKind::Small;

        let mut out = Vec::new();
        write_report_header(&mut out, &params).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.starts_with("Single-server queueing system\n"));
        assert!(text.contains("Mean inter-arrival time:       1.000 minutes"));
        assert!(text.contains("Mean service time:             0.500 minutes"));
        assert!(text.contains("1000"));
        assert!(text.contains("25"));
        assert!(text.contains("small"));
        assert!(text.contains("42"));
    }

    #[test]
    fn report_lines() {
        let mut out = Vec::new();
        write_report(&mut out, &sample_report()).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().filter(|l| !l.is_empty()).collect();

        assert_eq!(lines, [
            "==== SIMULATION REPORT ====",
            "Average wait in queue:         1.000 minutes",
            "Average number in queue:       0.500",
            "Server utilization:            0.625",
            "Simulation end time:           8.000 minutes",
            "Customers served: 4",
        ]);
    }

    #[test]
    fn summary_mean_and_std_dev() {
        let s = Summary::of(&[1.0, 2.0, 3.0]).unwrap();
        assert!((s.mean - 2.0).abs() < 1e-12);
        assert!((s.std_dev - 1.0).abs() < 1e-12);

        let single = Summary::of(&[4.0]).unwrap();
        assert_eq!(single, Summary { mean: 4.0, std_dev: 0.0 });

        assert!(Summary::of(&[]).is_none());
    }

    #[test]
    fn replication_summary() {
        let mut second = sample_report();
        second.avg_wait = 3.0;

        let mut out = Vec::new();
        write_replication_summary(&mut out, &[sample_report(), second]).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("==== 2 REPLICATIONS ===="));
        let wait_line = text.lines().find(|l| l.starts_with("Average wait in queue")).unwrap();
        let cols: Vec<&str> = wait_line.split_whitespace().collect();
        assert_eq!(&cols[cols.len() - 2..], ["2.000", "1.414"]);
    }

    #[test]
    fn replication_summary_empty_writes_nothing() {
        let mut out = Vec::new();
        write_replication_summary(&mut out, &[]).unwrap();
        assert!(out.is_empty());
    }
}

#[cfg(test)]
mod observer_tests {
    use qs_sim::{SimBuilder, SimError};
    use tempfile::TempDir;

    use super::{read_rows, Script};
    use crate::{AuditObserver, CsvAuditWriter};

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    /// Three departures happen before the fourth wait is recorded at t=8.
    #[test]
    fn audit_rows_follow_departures() {
        let dir = tmp();
        let path = dir.path().join("audit.csv");
        let mut obs = AuditObserver::new(CsvAuditWriter::new(&path).unwrap());

        let mut sim = SimBuilder::new(qs_core::SimParams::new(1.0, 0.5, 4))
            .rng(Script::new(&[1.0, 1.0, 3.0, 1.0, 5.0, 1.0, 1.0, 10.0, 1.0]))
            .build()
            .unwrap();
        let report = sim.run(&mut obs).unwrap();
        assert!(obs.take_error().is_none());
        assert_eq!(obs.rows_written(), 3);
        assert_eq!(report.customers_served, 4);

        let rows = read_rows(&path);
        let expected = [
            ["1", "60.000", "180.000"],
            ["2", "60.000", "60.000"],
            ["3", "60.000", "60.000"],
        ];
        assert_eq!(rows.len(), expected.len());
        for (row, want) in rows.iter().zip(expected) {
            assert_eq!(row, &want);
        }
    }

    /// ```text
    /// arr @1    next @1.5, idle → service 1 (dep @2)
    /// arr @1.5  next @3.5, busy → line [c2]
    /// dep @2    c1 leaves (audited); c2 served, service 10
    /// arr @3.5  next @4, busy → line [c3]
    /// arr @4    next @4.5, busy → line full
    /// ```
    #[test]
    fn overflow_keeps_written_rows() {
        let dir = tmp();
        let path = dir.path().join("audit.csv");
        let mut obs = AuditObserver::new(CsvAuditWriter::new(&path).unwrap());

        let mut params = qs_core::SimParams::new(1.0, 0.5, 100);
        params.queue_capacity = 1;
        let mut sim = SimBuilder::new(params)
            .rng(Script::new(&[1.0, 0.5, 1.0, 2.0, 10.0, 0.5, 0.5]))
            .build()
            .unwrap();

        let err = sim.run(&mut obs).unwrap_err();
        assert!(matches!(err, SimError::CapacityExceeded { capacity: 1, .. }));
        assert!(obs.take_error().is_none());

        let rows = read_rows(&path);
        assert_eq!(rows, vec![vec!["1".to_owned(), "60.000".to_owned(), "60.000".to_owned()]]);
    }
}

#[cfg(test)]
mod determinism_tests {
    use std::fs;

    use super::*;
    use crate::{write_report, write_report_header, AuditObserver, CsvAuditWriter};

    fn run_to_files(dir: &std::path::Path, tag: &str, params: &SimParams) -> (Vec<u8>, Vec<u8>) {
        let audit = dir.join(format!("audit_{tag}.csv"));
        let report_path = dir.join(format!("report_{tag}.txt"));

        let mut report_file = fs::File::create(&report_path).unwrap();
        write_report_header(&mut report_file, params).unwrap();

        let mut obs = AuditObserver::new(CsvAuditWriter::new(&audit).unwrap());
        let mut sim = SimBuilder::new(params.clone()).build().unwrap();
        let report = sim.run(&mut obs).unwrap();
        write_report(&mut report_file, &report).unwrap();
        drop(report_file);

        (fs::read(&audit).unwrap(), fs::read(&report_path).unwrap())
    }

    #[test]
    fn same_seed_same_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let params = SimParams::new(1.0, 0.5, 500);

        let (audit_a, report_a) = run_to_files(dir.path(), "a", &params);
        let (audit_b, report_b) = run_to_files(dir.path(), "b", &params);
        assert_eq!(audit_a, audit_b);
        assert_eq!(report_a, report_b);
    }

    #[test]
    fn different_seed_different_audit() {
        let dir = tempfile::tempdir().unwrap();
        let params = SimParams::new(1.0, 0.5, 300);
        let mut other = params.clone();
        other.seed = params.seed + 1;

        let (audit_a, _) = run_to_files(dir.path(), "a", &params);
        let (audit_b, _) = run_to_files(dir.path(), "b", &other);
        assert_ne!(audit_a, audit_b);
    }
}

#[cfg(all(test, feature = "sqlite"))]
mod sqlite_tests {
    use rusqlite::Connection;
    use tempfile::TempDir;

    use crate::{AuditRow, AuditWriter, SqliteAuditWriter};

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    #[test]
    fn rows_inserted() {
        let dir = tmp();
        let path = dir.path().join("audit.db");
        let mut w = SqliteAuditWriter::new(&path).unwrap();
        w.write_customer(&AuditRow { customer: 1, inter_arrival_secs: 60.0, service_secs: 12.5 })
            .unwrap();
        w.write_customer(&AuditRow { customer: 2, inter_arrival_secs: 30.0, service_secs: 6.0 })
            .unwrap();
        w.finish().unwrap();
        w.finish().unwrap();

        let conn = Connection::open(&path).unwrap();
        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM audit_trail", [], |r| r.get(0))
            .unwrap();
        assert_eq!(count, 2);

        let service: f64 = conn
            .query_row("SELECT service_secs FROM audit_trail WHERE customer = 1", [], |r| r.get(0))
            .unwrap();
        assert!((service - 12.5).abs() < 1e-12);
    }

    #[test]
    fn reopen_resets_table() {
        let dir = tmp();
        let path = dir.path().join("audit.db");
        {
            let mut w = SqliteAuditWriter::new(&path).unwrap();
            w.write_customer(&AuditRow { customer: 1, inter_arrival_secs: 1.0, service_secs: 1.0 })
                .unwrap();
            w.finish().unwrap();
        }
        let mut w = SqliteAuditWriter::new(&path).unwrap();
        w.finish().unwrap();

        let conn = Connection::open(&path).unwrap();
        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM audit_trail", [], |r| r.get(0))
            .unwrap();
        assert_eq!(count, 0);
    }
}
