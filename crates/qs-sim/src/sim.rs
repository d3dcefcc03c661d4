//! The `Sim` struct and its event loop.

use qs_core::{AnyRng, CustomerId, SimClock, SimParams, SimTime, VariateSource};
use qs_schedule::{EventKind, EventSchedule, WaitingLine};
use tracing::{debug, error, info, trace};

use crate::customer::{CustomerRecord, InService};
use crate::{ServerStatus, SimError, SimObserver, SimReport, SimResult, StatisticsAccumulator};

// ── Sim ───────────────────────────────────────────────────────────────────────

/// The single-server queue and its next-event loop.
///
/// Each call to [`step`](Self::step) performs one iteration:
///
/// 1. **Select**: take the earliest pending event from the schedule.
/// 2. **Advance**: move the clock to it and integrate the queue-length and
///    busy areas over the interval that just ended (pre-transition state).
/// 3. **Transition**: run the arrival or departure logic, which draws
///    variates, mutates the waiting line, and reschedules events.
///
/// [`run`](Self::run) repeats this until `target_customers` waits have been
/// recorded, then finalizes the statistics at the current clock time.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim<U: VariateSource = AnyRng> {
    pub(crate) params:       SimParams,
    pub(crate) clock:        SimClock,
    pub(crate) schedule:     EventSchedule,
    pub(crate) status:       ServerStatus,
    pub(crate) line:         WaitingLine<CustomerRecord>,
    pub(crate) stats:        StatisticsAccumulator,
    pub(crate) rng:          U,
    pub(crate) in_service:   Option<InService>,
    /// Id handed to the next arriving customer.
    pub(crate) next_id:      CustomerId,
    /// Arrival time of the most recent customer (t=0 before the first).
    pub(crate) last_arrival: SimTime,
}

impl<U: VariateSource> Sim<U> {
    // ── Public API ────────────────────────────────────────────────────────

    /// Run until `target_customers` waits have been recorded.
    ///
    /// On a fatal error the observer's `on_sim_abort` hook fires before the
    /// error is returned, so sinks can flush what they already hold.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<SimReport> {
        info!(
            inter_arrival_mean = self.params.inter_arrival_mean,
            service_mean       = self.params.service_mean,
            target             = self.params.target_customers,
            capacity           = self.params.queue_capacity,
            "simulation started"
        );

        match self.run_loop(observer) {
            Ok(report) => {
                info!(
                    served      = report.customers_served,
                    avg_wait    = report.avg_wait,
                    utilization = report.server_utilization,
                    total_time  = report.total_time,
                    "simulation finished"
                );
                observer.on_sim_end(&report);
                Ok(report)
            }
            Err(e) => {
                error!(error = %e, clock = %self.clock, "simulation aborted");
                observer.on_sim_abort(&e);
                Err(e)
            }
        }
    }

    /// Dispatch exactly one event and return its kind.
    ///
    /// Ignores the target; useful for tests and incremental stepping.
    pub fn step<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<EventKind> {
        let (kind, now) = self
            .schedule
            .next_event()
            .map_err(|e| SimError::at(e, self.clock.current_time()))?;

        self.clock.set_time(now);
        self.stats.advance(&mut self.clock, self.status, self.line.len());

        match kind {
            EventKind::Arrival   => self.arrive(now)?,
            EventKind::Departure => self.depart(now, observer),
        }

        debug!(
            %kind,
            now       = now.as_f64(),
            queue_len = self.line.len(),
            status    = %self.status,
            completed = self.stats.completed_count(),
            "event dispatched"
        );
        observer.on_event(kind, now, self.line.len(), self.status);
        Ok(kind)
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    pub fn params(&self) -> &SimParams {
        &self.params
    }

    pub fn clock(&self) -> &SimClock {
        &self.clock
    }

    pub fn schedule(&self) -> &EventSchedule {
        &self.schedule
    }

    pub fn server_status(&self) -> ServerStatus {
        self.status
    }

    pub fn queue_len(&self) -> usize {
        self.line.len()
    }

    pub fn waiting_line(&self) -> &WaitingLine<CustomerRecord> {
        &self.line
    }

    pub fn stats(&self) -> &StatisticsAccumulator {
        &self.stats
    }

    pub fn in_service(&self) -> Option<&InService> {
        self.in_service.as_ref()
    }

    /// `true` once `target_customers` waits have been recorded.
    pub fn is_complete(&self) -> bool {
        self.stats.completed_count() >= self.params.target_customers
    }

    // ── Event loop ────────────────────────────────────────────────────────

    fn run_loop<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<SimReport> {
        while !self.is_complete() {
            self.step(observer)?;
        }
        self.stats.finalize(self.clock.current_time())
    }

    // ── Transitions ───────────────────────────────────────────────────────

    /// Arrival: reschedule the next arrival, then either join the line
    /// (server busy) or go straight to service with zero wait (server idle).
    fn arrive(&mut self, now: SimTime) -> SimResult<()> {
        let record = CustomerRecord {
            id:            self.next_id,
            arrival:       now,
            inter_arrival: now - self.last_arrival,
        };
        self.next_id = self.next_id.next();
        self.last_arrival = now;

        let gap = self.rng.exponential(self.params.inter_arrival_mean);
        self.schedule.schedule(EventKind::Arrival, now + gap);

        match self.status {
            ServerStatus::Busy => {
                trace!(customer = %record.id, position = self.line.len(), "joins line");
                self.line
                    .enqueue(now, record)
                    .map_err(|e| SimError::at(e, now))?;
            }
            ServerStatus::Idle => {
                trace!(customer = %record.id, "served immediately");
                self.stats.record_wait(0.0);
                self.status = ServerStatus::Busy;
                self.begin_service(record, now, 0.0);
            }
        }
        Ok(())
    }

    /// Departure: finalize the customer in service, then either idle the
    /// server (line empty) or start serving the front of the line.
    fn depart<O: SimObserver>(&mut self, now: SimTime, observer: &mut O) {
        debug_assert!(self.status.is_busy(), "departure dispatched while idle");

        if let Some(done) = self.in_service.take() {
            let completed = done.complete(now);
            trace!(customer = %completed.id, wait = completed.wait, "departs");
            observer.on_departure(&completed);
        }

        match self.line.dequeue_front() {
            None => {
                self.status = ServerStatus::Idle;
                self.schedule.cancel(EventKind::Departure);
            }
            Some((arrived, record)) => {
                let wait = now - arrived;
                self.stats.record_wait(wait);
                self.begin_service(record, now, wait);
            }
        }
    }

    /// Draw a service duration for `record` and schedule its departure.
    fn begin_service(&mut self, record: CustomerRecord, now: SimTime, wait: f64) {
        let service = self.rng.exponential(self.params.service_mean);
        self.schedule.schedule(EventKind::Departure, now + service);
        self.in_service = Some(InService {
            record,
            wait,
            service,
            started: now,
        });
    }
}
