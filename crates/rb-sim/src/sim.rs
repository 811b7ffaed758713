//! The `Sim` struct and its tick loop.

use rb_core::{SimClock, SimConfig, SimRng, Tick};
use rb_dispatch::{AssignReport, assign_targets};
use rb_fire::{FireReport, evolve_fires};
use rb_motion::{MotionReport, advance_agents};
use rb_world::World;

use crate::{SimObserver, StateDump, StatsSnapshot};

/// Everything that changed during one tick, phase by phase.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickReport {
    /// The tick that was just executed.
    pub tick:   Tick,
    pub assign: AssignReport,
    pub motion: MotionReport,
    pub fire:   FireReport,
}

/// Why [`Sim::run`] stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// No active fires remain.
    AllFiresOut,
    /// More structures were destroyed than `SimConfig::destruction_limit`.
    DestructionLimit,
    /// `SimConfig::max_ticks` was reached.
    TickLimit,
}

/// The simulation: one world, one clock, one RNG.
///
/// Single-threaded.  Each call to [`step`](Self::step) runs one tick to
/// completion.  Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim {
    pub config: SimConfig,

    /// Tick counter; simulation time is `tick * dt`.
    pub clock: SimClock,

    pub world: World,

    /// The single random source for the whole run.
    pub rng: SimRng,
}

impl Sim {
    // ── Public API ────────────────────────────────────────────────────────

    /// Current simulation time.
    #[inline]
    pub fn time(&self) -> f64 {
        self.clock.time()
    }

    /// Advance the world by exactly one tick.
    pub fn step(&mut self) -> TickReport {
        let tick = self.clock.current_tick;
        let now = self.clock.time();
        let dt = self.clock.dt;

        let assign = assign_targets(&mut self.world);
        let motion = advance_agents(&mut self.world, now, dt);
        let fire = evolve_fires(&mut self.world, now, dt, &mut self.rng);
        self.clock.advance();

        if cfg!(debug_assertions) {
            if let Err(e) = self.world.check_invariants() {
                panic!("world inconsistent after {tick}: {e}");
            }
        }

        TickReport { tick, assign, motion, fire }
    }

    /// Step until the fires are out, the destruction limit is exceeded, or
    /// `config.max_ticks` is reached (counting from tick zero).
    ///
    /// The stop conditions are checked after each tick, so at least one tick
    /// runs unless the tick limit has already been reached.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> RunOutcome {
        let outcome = loop {
            if self.clock.current_tick.0 >= self.config.max_ticks {
                break RunOutcome::TickLimit;
            }

            self.observed_step(observer);

            if self.world.fires.is_empty() {
                break RunOutcome::AllFiresOut;
            }
            let destroyed = self.world.counters.structures_destroyed;
            if self.config.destruction_limit.is_some_and(|limit| destroyed > limit) {
                tracing::warn!(destroyed, "destruction limit exceeded");
                break RunOutcome::DestructionLimit;
            }
        };

        let stats = self.stats();
        tracing::info!(
            ?outcome,
            tick = self.clock.current_tick.0,
            time = stats.time,
            extinguished = stats.fires_extinguished,
            destroyed = stats.structures_destroyed,
            "run finished"
        );
        observer.on_sim_end(self.clock.current_tick, &stats);
        outcome
    }

    /// Run exactly `n` ticks, ignoring every stop condition.
    ///
    /// Useful for tests and incremental stepping.
    pub fn run_ticks<O: SimObserver>(&mut self, n: u64, observer: &mut O) {
        for _ in 0..n {
            self.observed_step(observer);
        }
    }

    /// Aggregate statistics for the current state.
    pub fn stats(&self) -> StatsSnapshot {
        StatsSnapshot::collect(&self.world, self.time())
    }

    /// Borrowed view of the whole state, ready for serialization.
    pub fn dump(&self) -> StateDump<'_> {
        StateDump::new(&self.world, self.time())
    }

    // ── Internals ─────────────────────────────────────────────────────────

    fn observed_step<O: SimObserver>(&mut self, observer: &mut O) {
        observer.on_tick_start(self.clock.current_tick);
        let report = self.step();
        observer.on_tick_end(&report);

        // Snapshots are labelled with the ticks completed, matching the clock
        // and the tick handed to `on_sim_end`.
        let done = self.clock.current_tick;
        let interval = self.config.output_interval_ticks;
        if interval > 0 && done.0 % interval == 0 {
            observer.on_snapshot(done, &self.stats());
        }
    }
}
