//! Plain-text report formatting.
//!
//! A report file is written in two steps: [`write_report_header`] before the
//! run (so the inputs are on disk even if the run aborts) and
//! [`write_report`] once the statistics are final.

use std::io::Write;

use qs_core::SimParams;
use qs_sim::SimReport;

use crate::OutputResult;

/// Write the title and echo the run parameters.
pub fn write_report_header<W: Write>(out: &mut W, params: &SimParams) -> OutputResult<()> {
    writeln!(out, "Single-server queueing system\n")?;
    writeln!(out, "Mean inter-arrival time: {:11.3} minutes", params.inter_arrival_mean)?;
    writeln!(out, "Mean service time: {:17.3} minutes", params.service_mean)?;
    writeln!(out, "Customers required: {:16}", params.target_customers)?;
    writeln!(out, "Waiting-line capacity: {:13}", params.queue_capacity)?;
    writeln!(out, "Generator: {:>25}", params.generator.to_string())?;
    writeln!(out, "Seed: {:30}\n", params.seed)?;
    out.flush()?;
    Ok(())
}

/// Write the final statistics block.
pub fn write_report<W: Write>(out: &mut W, report: &SimReport) -> OutputResult<()> {
    writeln!(out, "\n==== SIMULATION REPORT ====")?;
    writeln!(out, "Average wait in queue: {:13.3} minutes", report.avg_wait)?;
    writeln!(out, "Average number in queue: {:11.3}", report.avg_queue_length)?;
    writeln!(out, "Server utilization: {:16.3}", report.server_utilization)?;
    writeln!(out, "Simulation end time: {:15.3} minutes", report.total_time)?;
    writeln!(out, "Customers served: {}", report.customers_served)?;
    out.flush()?;
    Ok(())
}

/// Mean and sample standard deviation of one statistic across replications.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Summary {
    pub mean:    f64,
    pub std_dev: f64,
}

impl Summary {
    /// `None` for an empty slice.  A single value has a standard deviation of 0.
    pub fn of(values: &[f64]) -> Option<Self> {
        if values.is_empty() {
            return None;
        }
        let n = values.len() as f64;
        let mean = values.iter().sum::<f64>() / n;
        let std_dev = if values.len() < 2 {
            0.0
        } else {
            let ss: f64 = values.iter().map(|v| (v - mean).powi(2)).sum();
            (ss / (n - 1.0)).sqrt()
        };
        Some(Summary { mean, std_dev })
    }
}

/// Write per-statistic mean and standard deviation over independent
/// replications.  Writes nothing for an empty slice.
pub fn write_replication_summary<W: Write>(out: &mut W, reports: &[SimReport]) -> OutputResult<()> {
    let column = |f: fn(&SimReport) -> f64| -> Option<Summary> {
        Summary::of(&reports.iter().map(f).collect::<Vec<_>>())
    };
    let rows: [(&str, Option<Summary>); 4] = [
        ("Average wait in queue", column(|r| r.avg_wait)),
        ("Average number in queue", column(|r| r.avg_queue_length)),
        ("Server utilization", column(|r| r.server_utilization)),
        ("Simulation end time", column(|r| r.total_time)),
    ];

    if reports.is_empty() {
        return Ok(());
    }
    writeln!(out, "\n==== {} REPLICATIONS ====", reports.len())?;
    writeln!(out, "{:<24} {:>10} {:>10}", "statistic", "mean", "std dev")?;
    for (name, summary) in rows {
        if let Some(s) = summary {
            writeln!(out, "{:<24} {:>10.3} {:>10.3}", name, s.mean, s.std_dev)?;
        }
    }
    out.flush()?;
    Ok(())
}
