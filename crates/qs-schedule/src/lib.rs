//! `qs-schedule`: the event list and the waiting line.
//!
//! # Crate layout
//!
//! | Module            | Contents                                              |
//! |-------------------|-------------------------------------------------------|
//! | [`event_list`]    | `EventKind`, `EventSchedule` (`[Option<SimTime>; N]`) |
//! | [`waiting_line`]  | `WaitingLine<M>` (bounded `VecDeque`)                 |
//! | [`error`]         | `ScheduleError`, `ScheduleResult<T>`                  |
//!
//! # Next-event selection (summary)
//!
//! ```text
//! next_event = argmin over kinds k with schedule[k] = Some(t) of t
//!              ties → lowest kind index (Arrival before Departure)
//!              all None → ScheduleError::Empty
//! ```

pub mod error;
pub mod event_list;
pub mod waiting_line;


pub use error::{ScheduleError, ScheduleResult};
pub use event_list::{EventKind, EventSchedule};
pub use waiting_line::WaitingLine;
