use qs_core::{QsError, SimTime};
use qs_schedule::ScheduleError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(#[from] QsError),

    #[error("event list empty at {at}: no arrival or departure pending")]
    Scheduling { at: SimTime },

    #[error("waiting line overflow at {at}: capacity {capacity} exceeded")]
    CapacityExceeded { capacity: usize, at: SimTime },

    #[error("no observations to average: {0}")]
    NoObservations(&'static str),
}

impl SimError {
    /// Attach the event time to a schedule-layer failure.
    pub(crate) fn at(err: ScheduleError, at: SimTime) -> Self {
        match err {
            ScheduleError::Empty => SimError::Scheduling { at },
            ScheduleError::CapacityExceeded { capacity } => {
                SimError::CapacityExceeded { capacity, at }
            }
        }
    }
}

pub type SimResult<T> = Result<T, SimError>;
