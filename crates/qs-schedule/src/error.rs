use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScheduleError {
    #[error("event list is empty: no event kind is scheduled")]
    Empty,

    #[error("waiting line overflow: capacity {capacity} already reached")]
    CapacityExceeded { capacity: usize },
}

pub type ScheduleResult<T> = Result<T, ScheduleError>;
