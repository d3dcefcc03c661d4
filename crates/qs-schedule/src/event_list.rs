//! `EventSchedule`: next scheduled time per event kind.
//!
//! A single-server queue has at most one pending event of each kind: the next
//! arrival, and the departure of the customer in service.  One slot per kind
//! is the whole event list; selecting the next event scans
//! `EventKind::COUNT` slots.
//!
//! An empty slot is `None` ("never"), never a sentinel time.

use std::fmt;

use qs_core::SimTime;

use crate::{ScheduleError, ScheduleResult};

// ── EventKind ─────────────────────────────────────────────────────────────────

/// The event kinds the engine dispatches.  Declaration order is the
/// tie-break order.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
pub enum EventKind {
    Arrival,
    Departure,
}

impl EventKind {
    pub const COUNT: usize = 2;

    /// All kinds in index order.
    pub const ALL: [EventKind; EventKind::COUNT] = [EventKind::Arrival, EventKind::Departure];

    #[inline(always)]
    pub fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EventKind::Arrival   => f.write_str("arrival"),
            EventKind::Departure => f.write_str("departure"),
        }
    }
}

// ── EventSchedule ─────────────────────────────────────────────────────────────

/// Maps each [`EventKind`] to its next scheduled time, or `None`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EventSchedule {
    next: [Option<SimTime>; EventKind::COUNT],
}

impl EventSchedule {
    /// A schedule with nothing pending.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set (or overwrite) the next occurrence of `kind`.
    #[inline]
    pub fn schedule(&mut self, kind: EventKind, at: SimTime) {
        self.next[kind.index()] = Some(at);
    }

    /// Mark `kind` as not pending.
    #[inline]
    pub fn cancel(&mut self, kind: EventKind) {
        self.next[kind.index()] = None;
    }

    /// The scheduled time of `kind`, or `None` if it is not pending.
    #[inline]
    pub fn get(&self, kind: EventKind) -> Option<SimTime> {
        self.next[kind.index()]
    }

    /// The pending event with the earliest time.
    ///
    /// Ties go to the lower kind index.  Does not remove the event: every
    /// transition overwrites or cancels the slot it consumes.
    pub fn next_event(&self) -> ScheduleResult<(EventKind, SimTime)> {
        let mut best: Option<(EventKind, SimTime)> = None;
        for kind in EventKind::ALL {
            let Some(at) = self.get(kind) else { continue };
            match best {
                Some((_, best_at)) if best_at <= at => {}
                _ => best = Some((kind, at)),
            }
        }
        best.ok_or(ScheduleError::Empty)
    }

    /// Number of kinds currently pending.
    pub fn pending(&self) -> usize {
        self.next.iter().filter(|slot| slot.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.pending() == 0
    }
}
