//! Per-agent integration step.

use rb_core::{DepotId, StructureId};
use rb_world::{Target, World};

/// Distance under which an agent is at a depot.
pub const DEPOT_ARRIVAL_RADIUS: f64 = 2.0;

/// Distance under which an agent is at a structure.
pub const STRUCTURE_ARRIVAL_RADIUS: f64 = 1.0;

/// Refilling stops once the tank reaches this fraction of capacity.
pub const REFILL_DONE_FRACTION: f64 = 0.95;

/// What the motion phase changed this tick.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MotionReport {
    /// Structures whose fire was put out, in agent order.
    pub extinguished: Vec<StructureId>,
    /// Agents that finished refilling and went idle.
    pub refilled:     usize,
    /// Agents that dropped a structure target without putting it out (fire
    /// already gone, or arrived with an empty tank).
    pub abandoned:    usize,
}

/// Advance every agent by one tick of length `dt`.
///
/// `now` is the simulation time at the start of the tick and is used to
/// compute response times.
pub fn advance_agents(world: &mut World, now: f64, dt: f64) -> MotionReport {
    let mut report = MotionReport::default();

    for i in 0..world.agents.len() {
        let last = world.agents[i].pos;

        match world.agents[i].target {
            Target::None => {}
            Target::Depot(depot) => step_depot(world, i, depot, dt, &mut report),
            Target::Structure(structure) => {
                step_structure(world, i, structure, now, dt, &mut report)
            }
        }

        let agent = &mut world.agents[i];
        agent.distance_traveled += last.distance(agent.pos);

        debug_assert!(
            agent.water >= 0.0 && agent.water <= agent.max_water,
            "{} water {} outside [0, {}]",
            agent.id,
            agent.water,
            agent.max_water,
        );
    }

    report
}

fn step_depot(world: &mut World, i: usize, depot: DepotId, dt: f64, report: &mut MotionReport) {
    let (depot_pos, refill_rate) = {
        let d = world.depot(depot);
        (d.pos, d.refill_rate)
    };
    let agent = &mut world.agents[i];
    let dist = agent.pos.distance(depot_pos);

    if dist >= DEPOT_ARRIVAL_RADIUS {
        agent.pos = agent.pos.step_toward(depot_pos, agent.speed * dt);
        return;
    }

    let amount = (refill_rate * dt).min(agent.max_water - agent.water);
    agent.water = (agent.water + amount).min(agent.max_water);

    if agent.water >= agent.max_water * REFILL_DONE_FRACTION {
        agent.target = Target::None;
        report.refilled += 1;
    }
}

fn step_structure(
    world:     &mut World,
    i:         usize,
    structure: StructureId,
    now:       f64,
    dt:        f64,
    report:    &mut MotionReport,
) {
    let (pos, burning) = {
        let s = world.structure(structure);
        (s.pos, s.is_burning())
    };

    // The fire may have been put out by another agent or destroyed the
    // building since this agent picked it.
    if !burning {
        world.agents[i].target = Target::None;
        report.abandoned += 1;
        return;
    }

    let agent = &mut world.agents[i];
    let dist = agent.pos.distance(pos);

    if dist >= STRUCTURE_ARRIVAL_RADIUS {
        agent.pos = agent.pos.step_toward(pos, agent.speed * dt);
        return;
    }

    if agent.water <= 0.0 {
        agent.target = Target::None;
        report.abandoned += 1;
        return;
    }

    let s = &mut world.structures[structure.index()];
    let amount = (agent.extinguish_rate * dt).min(s.fire_intensity).min(agent.water);
    s.fire_intensity -= amount;
    agent.water -= amount;

    if s.fire_intensity > 0.0 {
        let remaining = s.fire_intensity;
        if let Some(fire) = world.fire_at_mut(structure) {
            fire.intensity = remaining;
        }
        return;
    }

    s.on_fire = false;
    s.fire_intensity = 0.0;
    let response = now - s.fire_start_time;

    agent.fires_extinguished += 1;
    agent.target = Target::None;
    let agent_id = agent.id;

    world.counters.fires_extinguished += 1;
    world.counters.response_times.push(response);
    world.remove_fire(structure);
    report.extinguished.push(structure);

    tracing::debug!(%structure, agent = %agent_id, response, "fire extinguished");
}
