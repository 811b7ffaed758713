//! Fire priority model.
//!
//! A fire's priority is fixed at ignition from two inputs: how intense it
//! started and how many standing structures surround it.
//!
//! | condition                                  | priority |
//! |--------------------------------------------|----------|
//! | intensity > 80 and nearby > 10             | 5        |
//! | intensity > 60 or nearby > 7               | 4        |
//! | intensity > 40 or nearby > 4               | 3        |
//! | intensity > 20                             | 2        |
//! | otherwise                                  | 1        |

use rb_core::StructureId;
use rb_world::World;

/// Radius used to measure local structure density.
pub const PROXIMITY_RADIUS: f64 = 15.0;

/// Non-destroyed structures strictly within [`PROXIMITY_RADIUS`] of
/// `structure`.  The structure itself is at distance zero and is counted.
pub fn nearby_count(world: &World, structure: StructureId) -> usize {
    let center = world.structure(structure).pos;
    world
        .structures_within(center, PROXIMITY_RADIUS)
        .filter(|&(id, _)| !world.structure(id).destroyed)
        .count()
}

/// Pure priority table; first matching row wins.
pub fn priority_class(intensity: f64, nearby: usize) -> u8 {
    if intensity > 80.0 && nearby > 10 {
        5
    } else if intensity > 60.0 || nearby > 7 {
        4
    } else if intensity > 40.0 || nearby > 4 {
        3
    } else if intensity > 20.0 {
        2
    } else {
        1
    }
}

/// Priority of a fire igniting in `structure` at `intensity`.
pub fn fire_priority(world: &World, structure: StructureId, intensity: f64) -> u8 {
    priority_class(intensity, nearby_count(world, structure))
}
