//! Simulation observer trait for progress reporting and data collection.

use rb_core::Tick;

use crate::{StatsSnapshot, TickReport};

/// Callbacks invoked by [`Sim::run`][crate::Sim::run] and
/// [`Sim::run_ticks`][crate::Sim::run_ticks].
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example
///
/// ```rust,ignore
/// struct Progress;
///
/// impl SimObserver for Progress {
///     fn on_snapshot(&mut self, tick: Tick, stats: &StatsSnapshot) {
///         println!("{tick}: {} fires burning", stats.active_fires);
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called before a tick runs.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called after a tick, with what each phase changed.
    fn on_tick_end(&mut self, _report: &TickReport) {}

    /// Called after every `config.output_interval_ticks`-th tick.  `tick` is
    /// the number of ticks completed, so `stats.time == tick * dt`.
    fn on_snapshot(&mut self, _tick: Tick, _stats: &StatsSnapshot) {}

    /// Called once when [`Sim::run`][crate::Sim::run] stops, with the number
    /// of ticks completed.
    fn on_sim_end(&mut self, _final_tick: Tick, _stats: &StatsSnapshot) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
