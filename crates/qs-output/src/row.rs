//! Plain data row written to the audit trail.

use qs_core::MINUTES_TO_SECONDS;
use qs_sim::CompletedCustomer;

/// One completed customer, with durations converted from simulated minutes
/// to seconds (× [`MINUTES_TO_SECONDS`]).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AuditRow {
    /// 1-based arrival sequence number.
    pub customer:           u64,
    /// Gap since the previous arrival, in seconds.
    pub inter_arrival_secs: f64,
    /// Service duration, in seconds.
    pub service_secs:       f64,
}

impl From<&CompletedCustomer> for AuditRow {
    fn from(c: &CompletedCustomer) -> Self {
        AuditRow {
            customer:           c.id.0,
            inter_arrival_secs: c.inter_arrival * MINUTES_TO_SECONDS,
            service_secs:       c.service * MINUTES_TO_SECONDS,
        }
    }
}
