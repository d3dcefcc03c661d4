//! `qs-core`: foundational types for the `qsim` queueing simulator.
//!
//! This crate is a dependency of every other `qs-*` crate.  It has no `qs-*`
//! dependencies and few external ones (`rand`, `thiserror`, `serde`,
//! `serde_json`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `CustomerId`                                          |
//! | [`time`]        | `SimTime`, `SimClock`, `MINUTES_TO_SECONDS`           |
//! | [`rng`]         | `VariateSource`, `LcgRng`, `SimRng`, `AnyRng`         |
//! | [`config`]      | `SimParams`, `GeneratorKind`, parameter loaders       |
//! | [`error`]       | `QsError`, `QsResult`                                 |

pub mod config;
pub mod error;
pub mod ids;
pub mod rng;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{GeneratorKind, SimParams, load_params};
pub use error::{QsError, QsResult};
pub use ids::CustomerId;
pub use rng::{AnyRng, LcgRng, SimRng, VariateSource};
pub use time::{MINUTES_TO_SECONDS, SimClock, SimTime};
