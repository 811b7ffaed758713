//! Simulation time model.
//!
//! # Design
//!
//! Time is a monotonically increasing integer `Tick`.  Each tick represents a
//! fixed logical step `dt`, so simulation time is
//!
//!   time = tick * dt
//!
//! Deriving time from the integer tick instead of accumulating `dt` keeps
//! fire dwell-time comparisons free of floating-point drift.  The clock is
//! decoupled from wall time.

use std::fmt;

use crate::{CoreError, CoreResult};

// ── Tick ─────────────────────────────────────────────────────────────────────

/// An absolute simulation tick counter.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

// ── SimClock ──────────────────────────────────────────────────────────────────

/// Maps the tick counter to simulation time.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimClock {
    /// Simulation time units per tick.
    pub dt: f64,
    /// The current tick, advanced by `SimClock::advance()` once per step.
    pub current_tick: Tick,
}

impl SimClock {
    pub fn new(dt: f64) -> Self {
        Self { dt, current_tick: Tick::ZERO }
    }

    /// Advance the clock by one tick.
    #[inline]
    pub fn advance(&mut self) {
        self.current_tick = Tick(self.current_tick.0 + 1);
    }

    /// Simulation time at the current tick.
    #[inline]
    pub fn time(&self) -> f64 {
        self.time_at(self.current_tick)
    }

    #[inline]
    pub fn time_at(&self, tick: Tick) -> f64 {
        tick.0 as f64 * self.dt
    }
}

impl fmt::Display for SimClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (t={:.1})", self.current_tick, self.time())
    }
}

// ── SimConfig ─────────────────────────────────────────────────────────────────

/// Top-level simulation configuration.
///
/// `SimConfig::default()` is the reference scenario: a 200×200 city with
/// 1000 structures, 50 agents, 5 depots and 100 initial fires.  Applications
/// typically load overrides from a TOML file.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SimConfig {
    /// Side length of the square city.
    pub city_size: f64,

    /// Number of firefighting agents.
    pub num_agents: usize,

    /// Number of structures.
    pub num_structures: usize,

    /// Fires ignited at initialization.  Must not exceed `num_structures`.
    pub num_fires: usize,

    /// Number of water depots.
    pub num_depots: usize,

    /// Simulation time per tick.
    pub dt: f64,

    /// Master RNG seed.  The same seed always produces identical results.
    pub seed: u64,

    /// Hard cap on the number of ticks `Sim::run` executes.
    pub max_ticks: u64,

    /// `Sim::run` stops once more than this many structures are destroyed.
    /// `None` disables the check.
    pub destruction_limit: Option<u32>,

    /// Water units restored per unit time at every depot.
    pub depot_refill_rate: f64,

    /// Emit a statistics snapshot to the observer every N ticks.  0 disables
    /// snapshots.
    pub output_interval_ticks: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            city_size:             200.0,
            num_agents:            50,
            num_structures:        1000,
            num_fires:             100,
            num_depots:            5,
            dt:                    0.1,
            seed:                  42,
            max_ticks:             10_000,
            destruction_limit:     Some(100),
            depot_refill_rate:     50.0,
            output_interval_ticks: 100,
        }
    }
}

impl SimConfig {
    /// Check the configuration for values that would make the world
    /// inconsistent or the tick loop ill-defined.
    pub fn validate(&self) -> CoreResult<()> {
        if !(self.city_size.is_finite() && self.city_size > 0.0) {
            return Err(CoreError::Config(format!(
                "city_size must be positive, got {}",
                self.city_size
            )));
        }
        if !(self.dt.is_finite() && self.dt > 0.0) {
            return Err(CoreError::Config(format!("dt must be positive, got {}", self.dt)));
        }
        if self.num_fires > self.num_structures {
            return Err(CoreError::Config(format!(
                "num_fires ({}) exceeds num_structures ({})",
                self.num_fires, self.num_structures
            )));
        }
        if self.num_depots == 0 && self.num_agents > 0 {
            return Err(CoreError::Config(
                "at least one depot is required when agents are present".into(),
            ));
        }
        if !(self.depot_refill_rate.is_finite() && self.depot_refill_rate >= 0.0) {
            return Err(CoreError::Config(format!(
                "depot_refill_rate must be non-negative, got {}",
                self.depot_refill_rate
            )));
        }
        Ok(())
    }

    /// Construct a `SimClock` pre-configured for this run.
    pub fn make_clock(&self) -> SimClock {
        SimClock::new(self.dt)
    }
}
