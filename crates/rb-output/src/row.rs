//! Plain data rows written by output backends.

use rb_core::Tick;
use rb_sim::StatsSnapshot;

/// World-level statistics for one tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickSummaryRow {
    /// Ticks completed when the row was taken.
    pub tick:                 u64,
    /// Simulation time after `tick` ticks.
    pub time:                 f64,
    pub active_fires:         usize,
    pub agents_fighting:      usize,
    pub agents_refilling:     usize,
    pub agents_idle:          usize,
    pub fires_started:        u32,
    pub fires_extinguished:   u32,
    pub structures_destroyed: u32,
    pub avg_water:            f64,
    pub total_fire_intensity: f64,
}

impl TickSummaryRow {
    pub fn from_stats(tick: Tick, stats: &StatsSnapshot) -> Self {
        Self {
            tick:                 tick.0,
            time:                 stats.time,
            active_fires:         stats.active_fires,
            agents_fighting:      stats.agents_fighting,
            agents_refilling:     stats.agents_refilling,
            agents_idle:          stats.agents_idle,
            fires_started:        stats.fires_started,
            fires_extinguished:   stats.fires_extinguished,
            structures_destroyed: stats.structures_destroyed,
            avg_water:            stats.avg_water,
            total_fire_intensity: stats.total_fire_intensity,
        }
    }
}
