//! `WaitingLine`: bounded FIFO of waiting customers.
//!
//! Each entry is the customer's arrival time plus caller-chosen metadata `M`
//! (`()` when only waits are needed, a full customer record when an audit
//! trail is attached).  The customer in service is *not* in the line.
//!
//! Overflow is an error, never a silent drop: a line that fills up means the
//! arrival rate is too high for the configured capacity and run length, and a
//! run that lost a customer has no statistical meaning.

use std::collections::VecDeque;

use qs_core::SimTime;

use crate::{ScheduleError, ScheduleResult};

/// A capacity-bounded FIFO queue of `(arrival_time, meta)` entries.
#[derive(Clone, Debug)]
pub struct WaitingLine<M = ()> {
    entries:  VecDeque<(SimTime, M)>,
    capacity: usize,
}

impl<M> WaitingLine<M> {
    /// An empty line holding at most `capacity` customers.
    ///
    /// Storage grows on demand; `capacity` is only the enqueue bound.
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: VecDeque::new(),
            capacity,
        }
    }

    /// Append a customer at the back.
    ///
    /// Fails with [`ScheduleError::CapacityExceeded`] if the line is already
    /// full; the line is left unchanged.
    pub fn enqueue(&mut self, arrival: SimTime, meta: M) -> ScheduleResult<()> {
        if self.entries.len() >= self.capacity {
            return Err(ScheduleError::CapacityExceeded { capacity: self.capacity });
        }
        self.entries.push_back((arrival, meta));
        Ok(())
    }

    /// Remove and return the customer at the front, or `None` if empty.
    pub fn dequeue_front(&mut self) -> Option<(SimTime, M)> {
        self.entries.pop_front()
    }

    /// The customer who will be served next.
    pub fn front(&self) -> Option<&(SimTime, M)> {
        self.entries.front()
    }

    /// Waiting customers, front first.
    pub fn iter(&self) -> impl Iterator<Item = &(SimTime, M)> {
        self.entries.iter()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.entries.len() >= self.capacity
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
