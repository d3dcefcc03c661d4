//! Simulation observer trait for audit trails and progress reporting.

use qs_core::SimTime;
use qs_schedule::EventKind;

use crate::{CompletedCustomer, ServerStatus, SimError, SimReport};

/// Callbacks invoked by [`Sim::run`][crate::Sim::run] at key points in the
/// event loop.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example: departure printer
///
/// ```rust,ignore
/// struct DeparturePrinter;
///
/// impl SimObserver for DeparturePrinter {
///     fn on_departure(&mut self, c: &CompletedCustomer) {
///         println!("{} left at {} after waiting {:.3}", c.id, c.departure, c.wait);
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called after every dispatched event, with the post-transition state.
    fn on_event(
        &mut self,
        _kind:      EventKind,
        _now:       SimTime,
        _queue_len: usize,
        _status:    ServerStatus,
    ) {}

    /// Called once per departure, before the next customer (if any) starts
    /// service.  Records arrive in completion order.
    fn on_departure(&mut self, _customer: &CompletedCustomer) {}

    /// Called once after the target is reached and the report is computed.
    fn on_sim_end(&mut self, _report: &SimReport) {}

    /// Called once when the run aborts with a fatal error, before the error is
    /// returned.  Implementors holding sinks should flush them here.
    fn on_sim_abort(&mut self, _error: &SimError) {}
}

/// A [`SimObserver`] that does nothing.  Use when you need to call `run` but
/// don't want an audit trail.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}

impl<O: SimObserver + ?Sized> SimObserver for &mut O {
    fn on_event(&mut self, kind: EventKind, now: SimTime, queue_len: usize, status: ServerStatus) {
        (**self).on_event(kind, now, queue_len, status);
    }

    fn on_departure(&mut self, customer: &CompletedCustomer) {
        (**self).on_departure(customer);
    }

    fn on_sim_end(&mut self, report: &SimReport) {
        (**self).on_sim_end(report);
    }

    fn on_sim_abort(&mut self, error: &SimError) {
        (**self).on_sim_abort(error);
    }
}
