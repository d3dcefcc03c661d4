//! Per-customer bookkeeping for the audit trail.
//!
//! A customer moves through three shapes:
//!
//! ```text
//! arrival ──► CustomerRecord ──(waits in line, or not)──► InService ──departure──► CompletedCustomer
//! ```

use qs_core::{CustomerId, SimTime};
use serde::{Deserialize, Serialize};

/// A customer who has arrived but not yet started service.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CustomerRecord {
    pub id:            CustomerId,
    pub arrival:       SimTime,
    /// Time since the previous arrival (since t=0 for the first customer).
    pub inter_arrival: f64,
}

/// The customer currently at the server.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InService {
    pub record:  CustomerRecord,
    /// Time spent in line before service started.
    pub wait:    f64,
    /// Drawn service duration.
    pub service: f64,
    pub started: SimTime,
}

impl InService {
    /// Scheduled departure time.
    #[inline]
    pub fn departs_at(&self) -> SimTime {
        self.started + self.service
    }

    pub(crate) fn complete(self, departure: SimTime) -> CompletedCustomer {
        CompletedCustomer {
            id:            self.record.id,
            arrival:       self.record.arrival,
            inter_arrival: self.record.inter_arrival,
            wait:          self.wait,
            service:       self.service,
            departure,
        }
    }
}

/// A customer whose departure has been dispatched.  Handed to
/// [`SimObserver::on_departure`](crate::SimObserver::on_departure).
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CompletedCustomer {
    pub id:            CustomerId,
    pub arrival:       SimTime,
    pub inter_arrival: f64,
    pub wait:          f64,
    pub service:       f64,
    pub departure:     SimTime,
}
