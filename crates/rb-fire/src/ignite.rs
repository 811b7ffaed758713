//! Starting fires.

use std::ops::Range;

use rb_core::{SimRng, StructureId};
use rb_world::{ActiveFire, World};

use crate::priority::fire_priority;

/// Initial intensity of a new fire.
pub const IGNITION_INTENSITY: Range<f64> = 50.0..100.0;

/// Growth rate of a new fire.
pub const SPREAD_RATE: Range<f64> = 0.5..2.0;

/// Ignite `structure` at simulation time `now`.
///
/// Draws the starting intensity and spread rate from `rng`, fixes the
/// priority, flags the structure, appends an [`ActiveFire`] and bumps
/// `fires_started`.  Returns `false` without drawing anything if the
/// structure is already burning or destroyed.
pub fn ignite(world: &mut World, structure: StructureId, now: f64, rng: &mut SimRng) -> bool {
    if !world.structure(structure).is_ignitable() {
        return false;
    }

    let intensity = rng.gen_range(IGNITION_INTENSITY);
    let priority = fire_priority(world, structure, intensity);

    let s = world.structure_mut(structure);
    s.on_fire = true;
    s.fire_intensity = intensity;
    s.fire_start_time = now;

    world.fires.push(ActiveFire {
        structure,
        intensity,
        spread_rate: rng.gen_range(SPREAD_RATE),
        priority,
    });
    world.counters.fires_started += 1;

    tracing::debug!(%structure, intensity, priority, now, "fire ignited");
    true
}
