//! Time-weighted statistics: area-under-curve integration plus wait tallies.
//!
//! # Integration rule
//!
//! Queue length and server status are piecewise constant between events.
//! At every dispatch, before the transition runs, the accumulator adds
//! `value * (now - last_event_time)` for both curves, i.e. it integrates the
//! interval that just ended under the state that held throughout it.
//!
//! The accumulator stores only the raw sums.  Averages are computed once, in
//! [`StatisticsAccumulator::finalize`], so the reported figures are exactly
//! `sum / divisor` with no intermediate rounding.

use std::fmt;

use qs_core::{SimClock, SimTime};
use serde::{Deserialize, Serialize};

use crate::{SimError, SimResult};

// ── ServerStatus ──────────────────────────────────────────────────────────────

/// Whether a customer is currently in service.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
pub enum ServerStatus {
    #[default]
    Idle,
    Busy,
}

impl ServerStatus {
    #[inline]
    pub fn is_busy(self) -> bool {
        self == ServerStatus::Busy
    }

    /// 1.0 while busy, 0.0 while idle: the integrand of the busy area.
    #[inline]
    pub fn indicator(self) -> f64 {
        match self {
            ServerStatus::Idle => 0.0,
            ServerStatus::Busy => 1.0,
        }
    }
}

impl fmt::Display for ServerStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServerStatus::Idle => f.write_str("idle"),
            ServerStatus::Busy => f.write_str("busy"),
        }
    }
}

// ── StatisticsAccumulator ─────────────────────────────────────────────────────

/// Running sums for one simulation run.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StatisticsAccumulator {
    completed_count:   u64,
    total_wait:        f64,
    area_queue_length: f64,
    area_server_busy:  f64,
}

impl StatisticsAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Integrate the interval `[last_event_time, current_time]` under the
    /// given (pre-transition) state, then close the interval on `clock`.
    ///
    /// Must be called exactly once per dispatched event.
    pub fn advance(&mut self, clock: &mut SimClock, status: ServerStatus, queue_len: usize) {
        let elapsed = clock.since_last_event();
        clock.mark_event();

        self.area_queue_length += queue_len as f64 * elapsed;
        self.area_server_busy  += status.indicator() * elapsed;
    }

    /// Record one customer's time spent waiting in line (0 if served
    /// immediately).
    pub fn record_wait(&mut self, wait: f64) {
        self.total_wait += wait;
        self.completed_count += 1;
    }

    #[inline]
    pub fn completed_count(&self) -> u64 {
        self.completed_count
    }

    #[inline]
    pub fn total_wait(&self) -> f64 {
        self.total_wait
    }

    #[inline]
    pub fn area_queue_length(&self) -> f64 {
        self.area_queue_length
    }

    #[inline]
    pub fn area_server_busy(&self) -> f64 {
        self.area_server_busy
    }

    /// Compute the end-of-run figures over `total_time` simulated time units.
    ///
    /// Fails with [`SimError::NoObservations`] rather than producing NaN when
    /// no wait was recorded or no time has elapsed.
    pub fn finalize(&self, total_time: SimTime) -> SimResult<SimReport> {
        if self.completed_count == 0 {
            return Err(SimError::NoObservations("no customer has been served"));
        }
        let span = total_time.as_f64();
        if span <= 0.0 {
            return Err(SimError::NoObservations("no simulated time has elapsed"));
        }

        Ok(SimReport {
            avg_wait:           self.total_wait / self.completed_count as f64,
            avg_queue_length:   self.area_queue_length / span,
            server_utilization: self.area_server_busy / span,
            total_time:         span,
            customers_served:   self.completed_count,
        })
    }
}

// ── SimReport ─────────────────────────────────────────────────────────────────

/// End-of-run performance measures.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SimReport {
    /// Mean time spent waiting in line, over all customers whose wait was
    /// recorded.
    pub avg_wait:           f64,
    /// Time-average number of customers waiting.
    pub avg_queue_length:   f64,
    /// Fraction of simulated time the server was busy.
    pub server_utilization: f64,
    /// Simulated time at which the run stopped.
    pub total_time:         f64,
    /// Number of customers whose wait was recorded.
    pub customers_served:   u64,
}
