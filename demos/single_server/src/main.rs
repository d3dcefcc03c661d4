//! single_server: M/M/1 queue with a bounded waiting line.
//!
//! Reads the run parameters, writes a text report and a per-customer audit
//! trail, and exits non-zero on a fatal simulation error:
//!
//! | Exit | Cause                                |
//! |------|--------------------------------------|
//! | 0    | target reached                       |
//! | 1    | bad parameters, I/O or output error  |
//! | 2    | waiting line exceeded its capacity   |
//! | 3    | event list empty (scheduling error)  |
//!
//! ```text
//! cargo run -p single_server -- --params demos/single_server/param.txt
//! RUST_LOG=qs_sim=debug cargo run -p single_server -- --seed 7 --capacity 20
//! ```

use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use qs_core::{GeneratorKind, SimParams, load_params};
use qs_output::{
    AuditObserver, AuditWriter, CsvAuditWriter, write_replication_summary, write_report,
    write_report_header,
};
use qs_sim::{SimBuilder, SimError, SimReport, replicate};

// ── CLI definition ────────────────────────────────────────────────────────────

#[derive(Parser)]
#[command(
    name = "single_server",
    about = "Discrete-event simulation of a single-server queue",
    long_about = "Simulates an M/M/1 queue until the requested number of customers\n\
                  have started service, then reports average wait, average queue\n\
                  length and server utilization."
)]
struct Cli {
    /// Parameter file: `<inter_arrival_mean> <service_mean> <customers>`, or JSON
    #[arg(long, default_value = "param.txt")]
    params: PathBuf,

    /// Report output file
    #[arg(long, default_value = "results.txt")]
    report: PathBuf,

    /// Audit-trail CSV (one line per departed customer)
    #[arg(long, default_value = "audit.csv")]
    audit: PathBuf,

    /// Write the audit trail to this SQLite database instead of CSV
    #[cfg(feature = "sqlite")]
    #[arg(long)]
    sqlite: Option<PathBuf>,

    /// Override the random seed
    #[arg(long)]
    seed: Option<u64>,

    /// Override the waiting-line capacity
    #[arg(long)]
    capacity: Option<usize>,

    /// Override the random generator (`lcg` or `small`)
    #[arg(long)]
    generator: Option<GeneratorKind>,

    /// Run N independent replications (seeds seed, seed+1, ...) and summarise
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u64).range(1..))]
    replications: u64,
}


// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn,qs_sim=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::from(exit_code(&e))
        }
    }
}

fn exit_code(err: &anyhow::Error) -> u8 {
    match err.downcast_ref::<SimError>() {
        Some(SimError::CapacityExceeded { .. }) => 2,
        Some(SimError::Scheduling { .. }) => 3,
        _ => 1,
    }
}

fn run(cli: &Cli) -> Result<()> {
    let params = resolve_params(cli)?;

    let mut report_file = BufWriter::new(
        File::create(&cli.report)
            .with_context(|| format!("creating report {}", cli.report.display()))?,
    );
    write_report_header(&mut report_file, &params)?;

    if cli.replications > 1 {
        return run_replications(cli, &params, &mut report_file);
    }

    #[cfg(feature = "sqlite")]
    if let Some(db) = &cli.sqlite {
        let writer = qs_output::SqliteAuditWriter::new(db)
            .with_context(|| format!("opening audit database {}", db.display()))?;
        let report = simulate(params, writer)?;
        write_report(&mut report_file, &report)?;
        print_summary(&report, &db.display().to_string());
        return Ok(());
    }

    let writer = CsvAuditWriter::new(&cli.audit)
        .with_context(|| format!("creating audit trail {}", cli.audit.display()))?;
    let report = simulate(params, writer)?;
    write_report(&mut report_file, &report)?;
    print_summary(&report, &cli.audit.display().to_string());
    Ok(())
}

/// Load the parameter file and apply command-line overrides.
fn resolve_params(cli: &Cli) -> Result<SimParams> {
    let mut params = load_params(&cli.params)
        .with_context(|| format!("loading parameters from {}", cli.params.display()))?;

    if let Some(seed) = cli.seed {
        params.seed = seed;
    }
    if let Some(capacity) = cli.capacity {
        params.queue_capacity = capacity;
    }
    if let Some(generator) = cli.generator {
        params.generator = generator;
    }
    params.validate()?;

    info!(
        inter_arrival_mean = params.inter_arrival_mean,
        service_mean       = params.service_mean,
        target             = params.target_customers,
        offered_load       = params.offered_load(),
        "parameters loaded"
    );
    if params.offered_load() >= 1.0 {
        warn!(rho = params.offered_load(), "offered load >= 1; the line will grow without bound");
    }
    Ok(params)
}

/// Run one engine, auditing every departure to `writer`.
///
/// The audit sink is finished on both outcomes, so on overflow the rows
/// written so far are on disk before the error propagates.
fn simulate<W: AuditWriter>(params: SimParams, writer: W) -> Result<SimReport> {
    let mut obs = AuditObserver::new(writer);
    let mut sim = SimBuilder::new(params).build()?;

    let t0 = Instant::now();
    let outcome = sim.run(&mut obs);
    info!(elapsed_ms = t0.elapsed().as_millis() as u64, rows = obs.rows_written(), "run complete");

    let audit_err = obs.take_error();
    let report = outcome?;
    if let Some(e) = audit_err {
        return Err(e).context("writing audit trail");
    }
    Ok(report)
}

fn run_replications(
    cli:         &Cli,
    params:      &SimParams,
    report_file: &mut BufWriter<File>,
) -> Result<()> {
    let t0 = Instant::now();
    let count = usize::try_from(cli.replications).context("replication count too large")?;
    let reports = replicate(params, count)?;
    info!(
        replications = reports.len(),
        elapsed_ms   = t0.elapsed().as_millis() as u64,
        "replications complete"
    );

    for report in &reports {
        write_report(report_file, report)?;
    }
    write_replication_summary(report_file, &reports)?;

    println!("{}", serde_json::to_string_pretty(&reports)?);
    Ok(())
}

fn print_summary(report: &SimReport, audit: &str) {
    println!("Customers served      : {}", report.customers_served);
    println!("Average wait          : {:.3} min", report.avg_wait);
    println!("Average queue length  : {:.3}", report.avg_queue_length);
    println!("Server utilization    : {:.3}", report.server_utilization);
    println!("Simulated time        : {:.3} min", report.total_time);
    println!("Audit trail           : {audit}");
}
