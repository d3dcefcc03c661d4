//! Independent replications of one parameter set.
//!
//! Replication `i` is an ordinary run with seed `params.seed + i`
//! (wrapping).  Every replication owns its engine and generator, so with the
//! `parallel` feature they run on Rayon's pool with nothing shared; results
//! are always returned in replication order.

use qs_core::SimParams;
use tracing::info;

use crate::{NoopObserver, SimBuilder, SimReport, SimResult};

/// Run `count` independent replications and return their reports in order.
///
/// The first error (in replication order) aborts the batch.
pub fn replicate(params: &SimParams, count: usize) -> SimResult<Vec<SimReport>> {
    params.validate()?;
    info!(count, base_seed = params.seed, "running replications");

    #[cfg(not(feature = "parallel"))]
    {
        (0..count).map(|i| run_one(params, i)).collect()
    }

    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;

        (0..count)
            .into_par_iter()
            .map(|i| run_one(params, i))
            .collect()
    }
}

fn run_one(params: &SimParams, index: usize) -> SimResult<SimReport> {
    let seed = params.seed.wrapping_add(index as u64);
    let mut sim = SimBuilder::new(params.clone()).seed(seed).build()?;
    sim.run(&mut NoopObserver)
}
