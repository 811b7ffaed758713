//! Fire evolution: growth, destruction and spread.
//!
//! For every burning structure, once per tick:
//!
//! 1. intensity grows by `spread_rate * dt * 0.7`, capped at 200;
//! 2. above 180, after burning for more than 45 time units, the structure is
//!    destroyed and its fire removed;
//! 3. otherwise, if no agent is targeting it, the fire may jump to the
//!    nearest ignitable structure within 8 units.
//!
//! New fires are queued during the pass and ignited only afterwards, so a
//! fire started this tick neither grows nor spreads until the next tick.

use rb_core::{SimRng, StructureId};
use rb_world::{MAX_FIRE_INTENSITY, World};

use crate::ignite::ignite;

/// Damping applied to every fire's growth rate.
pub const GROWTH_FACTOR: f64 = 0.7;

/// Intensity that must be exceeded for a structure to be destroyed.
pub const DESTRUCTION_INTENSITY: f64 = 180.0;

/// Burn time that must be exceeded for a structure to be destroyed.
pub const DESTRUCTION_DWELL: f64 = 45.0;

/// Per-unit-time, per-intensity chance that an unattended fire tries to spread.
pub const SPREAD_TRIGGER_FACTOR: f64 = 0.0001;

/// Maximum jump distance for spreading fire.
pub const SPREAD_RADIUS: f64 = 8.0;

/// Ignition chance for a candidate at distance zero; falls off linearly to
/// zero at [`SPREAD_RADIUS`].
pub const SPREAD_CHANCE: f64 = 0.15;

/// What the fire phase changed this tick.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FireReport {
    /// Structures destroyed this tick, in fire order.
    pub destroyed: Vec<StructureId>,
    /// Structures newly ignited by spread this tick.
    pub ignited:   Vec<StructureId>,
}

/// Run the fire phase over every active fire.
///
/// `now` is the simulation time at the start of the tick; it is used both
/// for the dwell-time check and as the ignition time of spread fires.
pub fn evolve_fires(world: &mut World, now: f64, dt: f64, rng: &mut SimRng) -> FireReport {
    let mut report = FireReport::default();
    let mut queued: Vec<StructureId> = Vec::new();

    for i in 0..world.fires.len() {
        let id = world.fires[i].structure;
        if !world.structure(id).is_burning() {
            continue;
        }

        let growth = world.fires[i].spread_rate * dt * GROWTH_FACTOR;
        let (intensity, started) = {
            let s = world.structure_mut(id);
            s.fire_intensity = (s.fire_intensity + growth).min(MAX_FIRE_INTENSITY);
            (s.fire_intensity, s.fire_start_time)
        };
        world.fires[i].intensity = intensity;

        if intensity > DESTRUCTION_INTENSITY && now - started > DESTRUCTION_DWELL {
            let s = world.structure_mut(id);
            s.destroyed = true;
            s.on_fire = false;
            world.counters.structures_destroyed += 1;
            report.destroyed.push(id);
            tracing::debug!(structure = %id, now, "structure destroyed");
            continue;
        }

        if world.agents_targeting(id) == 0
            && rng.random::<f64>() < SPREAD_TRIGGER_FACTOR * dt * intensity
        {
            if let Some(next) = try_spread(world, id, rng) {
                queued.push(next);
            }
        }
    }

    if !report.destroyed.is_empty() {
        let structures = &world.structures;
        world.fires.retain(|f| structures[f.structure.index()].is_burning());
    }

    for id in queued {
        if ignite(world, id, now, rng) {
            tracing::debug!(structure = %id, "fire spread");
            report.ignited.push(id);
        }
    }

    report
}

/// Nearest ignitable structure strictly within [`SPREAD_RADIUS`] of
/// `source`, excluding `source` itself.  Ties go to the lower id.
pub fn spread_candidate(world: &World, source: StructureId) -> Option<(StructureId, f64)> {
    let center = world.structure(source).pos;
    world
        .structures_within(center, SPREAD_RADIUS)
        .filter(|&(id, _)| id != source && world.structure(id).is_ignitable())
        .min_by(|a, b| a.1.total_cmp(&b.1).then(a.0.cmp(&b.0)))
}

/// One spread attempt from `source`: pick the nearest candidate and roll
/// against a chance that falls off with distance.
fn try_spread(world: &World, source: StructureId, rng: &mut SimRng) -> Option<StructureId> {
    let (candidate, dist) = spread_candidate(world, source)?;
    let chance = SPREAD_CHANCE * (1.0 - dist / SPREAD_RADIUS);
    (rng.random::<f64>() < chance).then_some(candidate)
}
