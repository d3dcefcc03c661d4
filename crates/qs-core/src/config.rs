//! Run parameters and their loaders.
//!
//! Two on-disk formats are accepted:
//!
//! **Parameter file** (any extension other than `.json`): three
//! whitespace-separated values: mean inter-arrival time, mean service time,
//! and the number of customers whose wait must be observed.
//!
//! ```text
//! 1.0 0.5 1000
//! ```
//!
//! **JSON** (`.json`): the same three fields by name, plus optional overrides:
//!
//! ```json
//! { "inter_arrival_mean": 1.0, "service_mean": 0.5, "target_customers": 1000,
//!   "queue_capacity": 100, "seed": 1973272912, "generator": "lcg" }
//! ```
//!
//! Both time values share one unit (minutes by convention).  Loaders always
//! call [`SimParams::validate`], so a `SimParams` obtained from them is safe
//! to hand to the engine.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{LcgRng, QsError, QsResult};

/// Waiting-line capacity when none is configured.
pub const DEFAULT_QUEUE_CAPACITY: usize = 100;

// ── GeneratorKind ─────────────────────────────────────────────────────────────

/// Which uniform generator drives the run.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GeneratorKind {
    /// Prime-modulus multiplicative LCG ([`LcgRng`]).
    #[default]
    Lcg,
    /// `rand`'s `SmallRng` ([`SimRng`](crate::SimRng)).
    Small,
}

impl fmt::Display for GeneratorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeneratorKind::Lcg   => f.write_str("lcg"),
            GeneratorKind::Small => f.write_str("small"),
        }
    }
}

impl FromStr for GeneratorKind {
    type Err = QsError;

    fn from_str(s: &str) -> QsResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "lcg"   => Ok(GeneratorKind::Lcg),
            "small" => Ok(GeneratorKind::Small),
            other   => Err(QsError::Parse(format!(
                "unknown generator {other:?}: expected \"lcg\" or \"small\""
            ))),
        }
    }
}

// ── SimParams ─────────────────────────────────────────────────────────────────

/// Everything the engine needs to know before the first event.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SimParams {
    /// Mean time between consecutive arrivals.
    pub inter_arrival_mean: f64,

    /// Mean service duration.
    pub service_mean: f64,

    /// The run stops once this many customers have had their wait recorded.
    pub target_customers: u64,

    /// Maximum number of customers waiting (not counting the one in service).
    #[serde(default = "default_capacity")]
    pub queue_capacity: usize,

    /// Seed for the uniform generator.  The same seed always produces
    /// identical results.
    #[serde(default = "default_seed")]
    pub seed: u64,

    #[serde(default)]
    pub generator: GeneratorKind,
}

fn default_capacity() -> usize {
    DEFAULT_QUEUE_CAPACITY
}

fn default_seed() -> u64 {
    LcgRng::DEFAULT_SEED as u64
}

impl SimParams {
    /// Parameters with default capacity, seed, and generator.
    pub fn new(inter_arrival_mean: f64, service_mean: f64, target_customers: u64) -> Self {
        Self {
            inter_arrival_mean,
            service_mean,
            target_customers,
            queue_capacity: DEFAULT_QUEUE_CAPACITY,
            seed:           default_seed(),
            generator:      GeneratorKind::default(),
        }
    }

    /// Check that every value is usable by the engine.
    pub fn validate(&self) -> QsResult<()> {
        positive_finite("inter_arrival_mean", self.inter_arrival_mean)?;
        positive_finite("service_mean", self.service_mean)?;
        if self.target_customers == 0 {
            return Err(QsError::Config("target_customers must be at least 1".into()));
        }
        if self.queue_capacity == 0 {
            return Err(QsError::Config("queue_capacity must be at least 1".into()));
        }
        Ok(())
    }

    /// Offered load ρ = service_mean / inter_arrival_mean.  The queue is
    /// stable (utilization tends to ρ) only when ρ < 1.
    pub fn offered_load(&self) -> f64 {
        self.service_mean / self.inter_arrival_mean
    }

    /// Parse the whitespace-separated parameter format and validate.
    ///
    /// Tokens after the third are ignored.
    pub fn from_param_str(s: &str) -> QsResult<Self> {
        let mut tokens = s.split_whitespace();
        let inter_arrival_mean = next_token(&mut tokens, "inter_arrival_mean")?;
        let service_mean       = next_token(&mut tokens, "service_mean")?;
        let target_customers   = next_token(&mut tokens, "target_customers")?;

        let params = Self::new(inter_arrival_mean, service_mean, target_customers);
        params.validate()?;
        Ok(params)
    }

    /// Parse the JSON format and validate.
    pub fn from_json_str(s: &str) -> QsResult<Self> {
        let params: SimParams =
            serde_json::from_str(s).map_err(|e| QsError::Parse(e.to_string()))?;
        params.validate()?;
        Ok(params)
    }
}

/// Load and validate parameters from `path`, choosing the format by
/// extension (`.json` → JSON, anything else → parameter file).
pub fn load_params(path: &Path) -> QsResult<SimParams> {
    let text = std::fs::read_to_string(path)?;
    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    if is_json {
        SimParams::from_json_str(&text)
    } else {
        SimParams::from_param_str(&text)
    }
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn next_token<'a, T, I>(tokens: &mut I, name: &str) -> QsResult<T>
where
    T: FromStr,
    T::Err: fmt::Display,
    I: Iterator<Item = &'a str>,
{
    let raw = tokens
        .next()
        .ok_or_else(|| QsError::Parse(format!("missing value for {name}")))?;
    raw.parse::<T>()
        .map_err(|e| QsError::Parse(format!("invalid {name} {raw:?}: {e}")))
}

fn positive_finite(name: &str, value: f64) -> QsResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(QsError::Config(format!("{name} must be a positive finite number, got {value}")))
    }
}
