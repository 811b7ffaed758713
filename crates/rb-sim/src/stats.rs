//! Read-only snapshots of the world for reporting and export.

use rb_world::{ActiveFire, Agent, AgentKind, Depot, Structure, Target, World};

/// Agents per kind.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct FleetComposition {
    pub scout:    usize,
    pub standard: usize,
    pub heavy:    usize,
}

/// Aggregate statistics at one instant.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct StatsSnapshot {
    pub time:                 f64,
    /// Active fires with positive intensity.
    pub active_fires:         usize,
    pub agents_fighting:      usize,
    pub agents_refilling:     usize,
    pub agents_idle:          usize,
    pub fires_started:        u32,
    pub fires_extinguished:   u32,
    pub structures_destroyed: u32,
    /// Mean water carried per agent, in water units.  0 with no agents.
    pub avg_water:            f64,
    pub total_fire_intensity: f64,
    pub avg_response_time:    f64,
    pub fleet:                FleetComposition,
}

impl StatsSnapshot {
    pub fn collect(world: &World, time: f64) -> Self {
        let mut s = StatsSnapshot {
            time,
            active_fires:         world.fires.iter().filter(|f| f.intensity > 0.0).count(),
            agents_fighting:      0,
            agents_refilling:     0,
            agents_idle:          0,
            fires_started:        world.counters.fires_started,
            fires_extinguished:   world.counters.fires_extinguished,
            structures_destroyed: world.counters.structures_destroyed,
            avg_water:            0.0,
            total_fire_intensity: world.fires.iter().map(|f| f.intensity).sum(),
            avg_response_time:    world.counters.avg_response_time(),
            fleet:                FleetComposition::default(),
        };

        let mut water = 0.0;
        for a in &world.agents {
            match a.target {
                Target::None         => s.agents_idle += 1,
                Target::Depot(_)     => s.agents_refilling += 1,
                Target::Structure(_) => s.agents_fighting += 1,
            }
            match a.kind {
                AgentKind::Scout    => s.fleet.scout += 1,
                AgentKind::Standard => s.fleet.standard += 1,
                AgentKind::Heavy    => s.fleet.heavy += 1,
            }
            water += a.water;
        }
        if !world.agents.is_empty() {
            s.avg_water = water / world.agents.len() as f64;
        }
        s
    }
}

/// The full state at one instant, borrowed from the world.  The encoding is
/// left to the consumer (see `rb-output` for JSON).
#[derive(Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct StateDump<'a> {
    pub time:       f64,
    pub structures: &'a [Structure],
    pub agents:     &'a [Agent],
    pub fires:      &'a [ActiveFire],
    pub depots:     &'a [Depot],
    pub stats:      StatsSnapshot,
}

impl<'a> StateDump<'a> {
    pub fn new(world: &'a World, time: f64) -> Self {
        Self {
            time,
            structures: &world.structures,
            agents:     &world.agents,
            fires:      &world.fires,
            depots:     &world.depots,
            stats:      StatsSnapshot::collect(world, time),
        }
    }
}
