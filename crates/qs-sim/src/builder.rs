//! Fluent builder for constructing a [`Sim`].

use qs_core::{AnyRng, CustomerId, SimClock, SimParams, SimTime, VariateSource};
use qs_schedule::{EventKind, EventSchedule, WaitingLine};

use crate::{ServerStatus, Sim, SimResult, StatisticsAccumulator};

/// Fluent builder for [`Sim<U>`].
///
/// # Required inputs
///
/// - [`SimParams`]: means, target, capacity, seed, generator kind.
///
/// # Optional inputs (have defaults)
///
/// | Method         | Default                                              |
/// |----------------|------------------------------------------------------|
/// | `.seed(s)`     | `params.seed`                                        |
/// | `.rng(r)`      | `AnyRng::new(params.generator, params.seed)`         |
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(SimParams::new(1.0, 0.5, 1_000)).build()?;
/// let report = sim.run(&mut NoopObserver)?;
/// ```
pub struct SimBuilder<U: VariateSource = AnyRng> {
    params: SimParams,
    rng:    U,
}

impl SimBuilder<AnyRng> {
    /// Create a builder whose generator is chosen by `params.generator` and
    /// seeded with `params.seed`.
    pub fn new(params: SimParams) -> Self {
        let rng = AnyRng::new(params.generator, params.seed);
        Self { params, rng }
    }

    /// Reseed the configured generator kind.
    pub fn seed(mut self, seed: u64) -> Self {
        self.params.seed = seed;
        self.rng = AnyRng::new(self.params.generator, seed);
        self
    }
}

impl<U: VariateSource> SimBuilder<U> {
    /// Drive the run from a caller-supplied generator instead.
    pub fn rng<V: VariateSource>(self, rng: V) -> SimBuilder<V> {
        SimBuilder { params: self.params, rng }
    }

    /// Validate the parameters, draw the first arrival, and return a
    /// ready-to-run [`Sim`].
    ///
    /// Initial state: clock at zero, server idle, empty line, zeroed
    /// statistics, first arrival at `0 + exponential(inter_arrival_mean)`,
    /// no departure pending.
    pub fn build(self) -> SimResult<Sim<U>> {
        self.params.validate()?;

        let mut rng = self.rng;
        let mut schedule = EventSchedule::new();
        let first = rng.exponential(self.params.inter_arrival_mean);
        schedule.schedule(EventKind::Arrival, SimTime::ZERO + first);

        Ok(Sim {
            clock:        SimClock::new(),
            schedule,
            status:       ServerStatus::Idle,
            line:         WaitingLine::new(self.params.queue_capacity),
            stats:        StatisticsAccumulator::new(),
            rng,
            in_service:   None,
            next_id:      CustomerId::FIRST,
            last_arrival: SimTime::ZERO,
            params:       self.params,
        })
    }
}
