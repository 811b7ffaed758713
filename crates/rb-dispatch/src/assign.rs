//! Target selection for idle agents.

use std::cmp::Ordering;

use rb_core::{DepotId, Point, StructureId};
use rb_world::{Depot, Target, World};

/// Agents below this fraction of their tank head for a depot.
pub const LOW_WATER_FRACTION: f64 = 0.2;

/// How many idle agents received each kind of target in one pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AssignReport {
    pub to_depot: usize,
    pub to_fire:  usize,
    /// Idle agents left without a target (no fires to fight).
    pub idle:     usize,
}

/// Assign a target to every agent whose target is [`Target::None`].
///
/// Agents are processed in id order; each decision sees the world as left by
/// the previous ones, though choosing a fire does not change its
/// attractiveness to the next agent.
pub fn assign_targets(world: &mut World) -> AssignReport {
    let mut report = AssignReport::default();

    for i in 0..world.agents.len() {
        let agent = &world.agents[i];
        if !agent.target.is_none() {
            continue;
        }

        let target = if agent.water < agent.max_water * LOW_WATER_FRACTION {
            nearest_depot(&world.depots, agent.pos).map(Target::Depot)
        } else if agent.water > 0.0 {
            best_fire(world, agent.pos).map(Target::Structure)
        } else {
            // Only a zero-capacity tank gets here: any empty tank with a
            // positive capacity is caught by the resource check above.
            None
        };

        match target {
            Some(Target::Depot(_)) => report.to_depot += 1,
            Some(Target::Structure(_)) => report.to_fire += 1,
            _ => report.idle += 1,
        }
        if let Some(t) = target {
            world.agents[i].target = t;
        }
    }

    report
}

/// The depot closest to `pos`.  On a tie the lowest id wins.
pub fn nearest_depot(depots: &[Depot], pos: Point) -> Option<DepotId> {
    depots
        .iter()
        .min_by(|a, b| pos.distance(a.pos).total_cmp(&pos.distance(b.pos)))
        .map(|d| d.id)
}

/// The fire an agent at `pos` should fight: highest priority, then nearest,
/// then earliest ignited.
///
/// Only fires with positive intensity whose structure is still burning are
/// candidates.
pub fn best_fire(world: &World, pos: Point) -> Option<StructureId> {
    world
        .fires
        .iter()
        .filter(|f| f.intensity > 0.0 && world.structure(f.structure).is_burning())
        .map(|f| (f.priority, pos.distance(world.structure(f.structure).pos), f.structure))
        .min_by(|a, b| rank(a.0, a.1, b.0, b.1))
        .map(|(_, _, id)| id)
}

/// Ordering on `(priority, distance)`: higher priority sorts first, then
/// shorter distance.
#[inline]
fn rank(pa: u8, da: f64, pb: u8, db: f64) -> Ordering {
    pb.cmp(&pa).then(da.total_cmp(&db))
}
