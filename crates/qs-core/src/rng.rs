//! Deterministic random-variate sources.
//!
//! # Determinism strategy
//!
//! The engine owns exactly one generator, seeded once from a single integer
//! and advanced one step per draw.  It is never reseeded mid-run, so a run is
//! reproducible bit-for-bit from `(seed, parameters)`.  There is no global
//! stream: two engines with their own generators never interfere, which is
//! what makes independent replications possible.
//!
//! Two generators are provided:
//!
//! - [`LcgRng`]: prime-modulus multiplicative congruential generator
//!   (modulus 2³¹ − 1, multiplier 630 360 016).  This is the classic
//!   queueing-textbook stream and the default.
//! - [`SimRng`]: `rand`'s `SmallRng`, for runs that want a modern stream.

use rand::distributions::Open01;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::GeneratorKind;

// ── VariateSource ────────────────────────────────────────────────────────────

/// A stream of uniform(0,1) deviates and the variates derived from them.
pub trait VariateSource {
    /// Next deviate in the open interval (0, 1).  Never returns 0 or 1, so
    /// `ln(uniform())` is always finite.
    fn uniform(&mut self) -> f64;

    /// Exponential variate with the given mean, by inverse-CDF transform:
    /// `-mean * ln(U)`.
    ///
    /// `mean` must be positive; `SimParams::validate` enforces that before any
    /// draw happens.
    #[inline]
    fn exponential(&mut self, mean: f64) -> f64 {
        -mean * self.uniform().ln()
    }
}

// ── LcgRng ───────────────────────────────────────────────────────────────────

/// Prime modulus 2³¹ − 1.
const MODULUS: u64 = 2_147_483_647;

/// 24 112 × 26 143; the classic two-step multiplier folded into one.
const MULTIPLIER: u64 = 630_360_016;

/// 2²⁴: the deviate keeps the top 24 bits of the 31-bit state.
const SCALE: f64 = 16_777_216.0;

/// Prime-modulus multiplicative LCG.
///
/// `z ← z · 630 360 016 mod (2³¹ − 1)`, returning `((z >> 7) | 1) / 2²⁴`.
/// Forcing the low bit keeps the deviate strictly inside (0, 1).
#[derive(Clone, Debug)]
pub struct LcgRng {
    z: u32,
}

impl LcgRng {
    /// Initial state of stream 1 of the textbook generator.
    pub const DEFAULT_SEED: u32 = 1_973_272_912;

    /// Seed the stream.  The seed is reduced modulo 2³¹ − 1; a residue of 0
    /// (which would lock the generator at zero) falls back to
    /// [`DEFAULT_SEED`](Self::DEFAULT_SEED).
    pub fn new(seed: u64) -> Self {
        let z = (seed % MODULUS) as u32;
        LcgRng { z: if z == 0 { Self::DEFAULT_SEED } else { z } }
    }

    /// Current internal state.
    #[inline]
    pub fn state(&self) -> u32 {
        self.z
    }
}

impl Default for LcgRng {
    fn default() -> Self {
        LcgRng { z: Self::DEFAULT_SEED }
    }
}

impl VariateSource for LcgRng {
    #[inline]
    fn uniform(&mut self) -> f64 {
        self.z = ((self.z as u64 * MULTIPLIER) % MODULUS) as u32;
        ((self.z >> 7) | 1) as f64 / SCALE
    }
}

// ── SimRng ────────────────────────────────────────────────────────────────────

/// `SmallRng`-backed source.
///
/// Used only in single-threaded contexts; each replication builds its own.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Expose the inner `SmallRng` for use with `rand` distribution types.
    #[inline]
    pub fn inner(&mut self) -> &mut SmallRng {
        &mut self.0
    }
}

impl VariateSource for SimRng {
    #[inline]
    fn uniform(&mut self) -> f64 {
        self.0.sample(Open01)
    }
}

// ── AnyRng ────────────────────────────────────────────────────────────────────

/// Runtime-selected generator, built from a [`GeneratorKind`] and a seed.
pub enum AnyRng {
    Lcg(LcgRng),
    Small(SimRng),
}

impl AnyRng {
    pub fn new(kind: GeneratorKind, seed: u64) -> Self {
        match kind {
            GeneratorKind::Lcg   => AnyRng::Lcg(LcgRng::new(seed)),
            GeneratorKind::Small => AnyRng::Small(SimRng::new(seed)),
        }
    }
}

impl VariateSource for AnyRng {
    #[inline]
    fn uniform(&mut self) -> f64 {
        match self {
            AnyRng::Lcg(r)   => r.uniform(),
            AnyRng::Small(r) => r.uniform(),
        }
    }
}
