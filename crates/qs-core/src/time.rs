//! Simulation time model.
//!
//! # Design
//!
//! Time is continuous: inter-arrival and service durations are drawn from
//! exponential distributions, so an event can land anywhere on the real line.
//! `SimTime` wraps an `f64` and orders it with [`f64::total_cmp`], which makes
//! it `Ord` and therefore usable as a sort or map key.
//!
//! The unit is whatever the parameters use.  By convention that is minutes;
//! the audit trail converts to seconds with [`MINUTES_TO_SECONDS`].
//!
//! `SimClock` follows the next-event time-advance rule: the engine jumps
//! `current_time` straight to the next scheduled event, and the statistics
//! accumulator moves `last_event_time` up behind it once it has integrated
//! the interval in between.

use std::cmp::Ordering;
use std::fmt;

/// Multiplier from simulated minutes to audit-trail seconds.
pub const MINUTES_TO_SECONDS: f64 = 60.0;

// ── SimTime ──────────────────────────────────────────────────────────────────

/// An absolute simulated-time instant.
#[derive(Copy, Clone, Debug, Default, serde::Serialize, serde::Deserialize)]
pub struct SimTime(pub f64);

impl SimTime {
    pub const ZERO: SimTime = SimTime(0.0);

    /// Time elapsed from `earlier` to `self`.
    #[inline]
    pub fn since(self, earlier: SimTime) -> f64 {
        self.0 - earlier.0
    }

    #[inline]
    pub fn as_f64(self) -> f64 {
        self.0
    }
}

impl PartialEq for SimTime {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.0.total_cmp(&other.0) == Ordering::Equal
    }
}

impl Eq for SimTime {}

impl PartialOrd for SimTime {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SimTime {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl std::ops::Add<f64> for SimTime {
    type Output = SimTime;
    #[inline]
    fn add(self, rhs: f64) -> SimTime {
        SimTime(self.0 + rhs)
    }
}

impl std::ops::Sub for SimTime {
    type Output = f64;
    #[inline]
    fn sub(self, rhs: SimTime) -> f64 {
        self.0 - rhs.0
    }
}

impl fmt::Display for SimTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "t={:.3}", self.0)
    }
}

// ── SimClock ──────────────────────────────────────────────────────────────────

/// The simulation clock: current event time and the time of the previous
/// dispatch.
///
/// Invariant: `current_time >= last_event_time`; both start at zero.
#[derive(Clone, Debug, Default)]
pub struct SimClock {
    current_time:    SimTime,
    last_event_time: SimTime,
}

impl SimClock {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn current_time(&self) -> SimTime {
        self.current_time
    }

    #[inline]
    pub fn last_event_time(&self) -> SimTime {
        self.last_event_time
    }

    /// Jump the clock to the time of the event about to be dispatched.
    ///
    /// # Panics
    /// Panics in debug mode if `t` lies before the current time.
    #[inline]
    pub fn set_time(&mut self, t: SimTime) {
        debug_assert!(t >= self.current_time, "clock moved backwards: {t} < {}", self.current_time);
        self.current_time = t;
    }

    /// Length of the interval that ended at `current_time`.
    #[inline]
    pub fn since_last_event(&self) -> f64 {
        self.current_time.since(self.last_event_time)
    }

    /// Close the current interval: `last_event_time = current_time`.
    #[inline]
    pub fn mark_event(&mut self) {
        self.last_event_time = self.current_time;
    }
}

impl fmt::Display for SimClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (last event {})", self.current_time, self.last_event_time)
    }
}
