//! Unit tests for rb-motion.

use rb_core::{AgentId, DepotId, Point, StructureId};
use rb_world::{ActiveFire, Agent, AgentKind, Depot, Structure, Target, World};

use crate::advance_agents;

// ── Helpers ───────────────────────────────────────────────────────────────────

/// One structure at (10, 0), one depot at (-10, 0), one Heavy agent at the
/// origin with speed 5 (0.5 per tick at dt = 0.1).
fn world() -> World {
    let structures = vec![Structure::new(StructureId(0), Point::new(10.0, 0.0))];
    let depots = vec![Depot { id: DepotId(0), pos: Point::new(-10.0, 0.0), refill_rate: 50.0 }];
    let agents = vec![Agent::new(AgentId(0), Point::new(0.0, 0.0), AgentKind::Heavy, 5.0)];
    World::new(structures, agents, depots)
}

fn burn(world: &mut World, intensity: f64, started: f64) {
    let s = world.structure_mut(StructureId(0));
    s.on_fire = true;
    s.fire_intensity = intensity;
    s.fire_start_time = started;
    world.fires.push(ActiveFire {
        structure: StructureId(0),
        intensity,
        spread_rate: 1.0,
        priority: 3,
    });
}

#[cfg(test)]
mod movement {
    use super::*;

    #[test]
    fn moves_toward_depot_by_speed_times_dt() {
        let mut w = world();
        w.agents[0].target = Target::Depot(DepotId(0));
        advance_agents(&mut w, 0.0, 0.1);
        let a = &w.agents[0];
        assert!((a.pos.x + 0.5).abs() < 1e-12);
        assert_eq!(a.pos.y, 0.0);
        assert!((a.distance_traveled - 0.5).abs() < 1e-12);
    }

    #[test]
    fn final_step_lands_on_target_without_overshoot() {
        let mut w = world();
        burn(&mut w, 50.0, 0.0);
        w.agents[0].pos = Point::new(9.0, 0.0);
        w.agents[0].speed = 100.0;
        w.agents[0].target = Target::Structure(StructureId(0));
        advance_agents(&mut w, 0.0, 0.1);
        assert_eq!(w.agents[0].pos, Point::new(10.0, 0.0));
        assert!((w.agents[0].distance_traveled - 1.0).abs() < 1e-12);
    }

    #[test]
    fn idle_agent_does_not_move() {
        let mut w = world();
        advance_agents(&mut w, 0.0, 0.1);
        assert_eq!(w.agents[0].pos, Point::new(0.0, 0.0));
        assert_eq!(w.agents[0].distance_traveled, 0.0);
    }

    #[test]
    fn coincident_target_counts_as_arrived() {
        let mut w = world();
        burn(&mut w, 50.0, 0.0);
        w.agents[0].pos = Point::new(10.0, 0.0);
        w.agents[0].target = Target::Structure(StructureId(0));
        advance_agents(&mut w, 0.0, 0.1);
        let a = &w.agents[0];
        assert!(a.pos.x.is_finite() && a.pos.y.is_finite());
        assert_eq!(a.water, a.max_water - 1.0); // sprayed 10 * 0.1
    }
}

#[cfg(test)]
mod refill {
    use super::*;

    #[test]
    fn refills_by_rate_times_dt() {
        let mut w = world();
        w.agents[0].pos = Point::new(-9.0, 0.0);
        w.agents[0].water = 10.0;
        w.agents[0].target = Target::Depot(DepotId(0));
        advance_agents(&mut w, 0.0, 0.1);
        assert_eq!(w.agents[0].water, 15.0);
        assert_eq!(w.agents[0].target, Target::Depot(DepotId(0)));
        assert_eq!(w.agents[0].pos, Point::new(-9.0, 0.0));
    }

    #[test]
    fn refill_never_exceeds_capacity_and_releases_agent() {
        let mut w = world();
        w.agents[0].pos = Point::new(-10.0, 0.5);
        w.agents[0].water = 249.0;
        w.agents[0].target = Target::Depot(DepotId(0));
        let report = advance_agents(&mut w, 0.0, 0.1);
        assert_eq!(w.agents[0].water, 250.0);
        assert!(w.agents[0].target.is_none());
        assert_eq!(report.refilled, 1);
    }

    #[test]
    fn releases_at_ninety_five_percent() {
        let mut w = world();
        w.agents[0].pos = Point::new(-10.0, 0.0);
        w.agents[0].water = 250.0 * 0.95 - 4.0;
        w.agents[0].target = Target::Depot(DepotId(0));
        advance_agents(&mut w, 0.0, 0.1);
        assert!(w.agents[0].target.is_none());
        assert!(w.agents[0].water < 250.0);
    }
}

#[cfg(test)]
mod extinguish {
    use super::*;

    #[test]
    fn five_ticks_put_out_an_intensity_five_fire() {
        let mut w = world();
        burn(&mut w, 5.0, 0.0);
        w.agents[0].pos = Point::new(9.5, 0.0);
        w.agents[0].target = Target::Structure(StructureId(0));

        advance_agents(&mut w, 0.0, 0.1);
        assert_eq!(w.structure(StructureId(0)).fire_intensity, 4.0);
        assert!(w.structure(StructureId(0)).on_fire);
        assert_eq!(w.fires[0].intensity, 4.0);

        for k in 1..5 {
            advance_agents(&mut w, k as f64 * 0.1, 0.1);
        }
        let s = w.structure(StructureId(0));
        assert!(s.fire_intensity <= 0.0);
        assert!(!s.on_fire);
        assert!(w.fires.is_empty());
        assert_eq!(w.agents[0].fires_extinguished, 1);
        assert_eq!(w.counters.fires_extinguished, 1);
        assert!(w.agents[0].target.is_none());
        assert_eq!(w.agents[0].water, 245.0);
    }

    #[test]
    fn response_time_is_now_minus_ignition() {
        let mut w = world();
        burn(&mut w, 0.5, 2.0);
        w.agents[0].pos = Point::new(10.0, 0.0);
        w.agents[0].target = Target::Structure(StructureId(0));
        let report = advance_agents(&mut w, 7.5, 0.1);
        assert_eq!(report.extinguished, vec![StructureId(0)]);
        assert_eq!(w.counters.response_times, vec![5.5]);
    }

    #[test]
    fn spray_limited_by_water() {
        let mut w = world();
        burn(&mut w, 50.0, 0.0);
        w.agents[0].pos = Point::new(10.0, 0.0);
        w.agents[0].water = 0.25;
        w.agents[0].target = Target::Structure(StructureId(0));
        advance_agents(&mut w, 0.0, 0.1);
        assert_eq!(w.agents[0].water, 0.0);
        assert_eq!(w.structure(StructureId(0)).fire_intensity, 49.75);
    }

    #[test]
    fn empty_tank_on_arrival_drops_target() {
        let mut w = world();
        burn(&mut w, 50.0, 0.0);
        w.agents[0].pos = Point::new(10.0, 0.0);
        w.agents[0].water = 0.0;
        w.agents[0].target = Target::Structure(StructureId(0));
        let report = advance_agents(&mut w, 0.0, 0.1);
        assert!(w.agents[0].target.is_none());
        assert_eq!(report.abandoned, 1);
        assert_eq!(w.structure(StructureId(0)).fire_intensity, 50.0);
    }

    #[test]
    fn fire_gone_before_arrival_drops_target_without_moving() {
        let mut w = world();
        w.agents[0].target = Target::Structure(StructureId(0));
        let report = advance_agents(&mut w, 0.0, 0.1);
        assert!(w.agents[0].target.is_none());
        assert_eq!(w.agents[0].pos, Point::new(0.0, 0.0));
        assert_eq!(w.agents[0].distance_traveled, 0.0);
        assert_eq!(report.abandoned, 1);
    }

    #[test]
    fn destroyed_structure_drops_target() {
        let mut w = world();
        let s = w.structure_mut(StructureId(0));
        s.destroyed = true;
        w.agents[0].pos = Point::new(10.0, 0.0);
        w.agents[0].target = Target::Structure(StructureId(0));
        advance_agents(&mut w, 0.0, 0.1);
        assert!(w.agents[0].target.is_none());
        assert_eq!(w.agents[0].water, w.agents[0].max_water);
    }
}
