//! `qs-sim`: next-event time-advance engine for the qsim queueing simulator.
//!
//! # Event loop
//!
//! ```text
//! while completed_count < target:
//!   ① Select  : (kind, t) = earliest pending event (ties → arrival)
//!   ② Advance : clock = t; integrate queue-length and busy areas over the
//!               interval that just ended, under the pre-transition state
//!   ③ Dispatch: Arrival:   schedule next arrival; idle → serve now (wait 0)
//!                                                 busy → join the line
//!               Departure: emit finished customer to the observer;
//!                          line empty → idle, no departure pending
//!                          otherwise  → serve front, record its wait
//! finalize(clock.current_time)
//! ```
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | Runs [`replicate`] on Rayon's thread pool.             |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use qs_core::SimParams;
//! use qs_sim::{NoopObserver, SimBuilder};
//!
//! let mut sim = SimBuilder::new(SimParams::new(1.0, 0.5, 1_000)).build()?;
//! let report = sim.run(&mut NoopObserver)?;
//! println!("utilization {:.3}", report.server_utilization);
//! ```

pub mod builder;
pub mod customer;
pub mod error;
pub mod observer;
pub mod replicate;
pub mod sim;
pub mod stats;


pub use builder::SimBuilder;
pub use customer::{CompletedCustomer, CustomerRecord, InService};
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use replicate::replicate;
pub use sim::Sim;
pub use stats::{ServerStatus, SimReport, StatisticsAccumulator};
