//! `rb-motion`: the motion and action integrator.
//!
//! # Movement model
//!
//! Each tick, every agent with a target either:
//!
//! - **moves** straight toward it by `min(speed * dt, distance)`, if outside
//!   the arrival radius (2.0 for depots, 1.0 for structures); or
//! - **acts**, if inside: refills at a depot, or sprays a burning structure.
//!
//! There is no pathfinding and no collision between agents.  All agents use
//! the same `dt`.

pub mod integrate;

#[cfg(test)]
mod tests;

pub use integrate::{
    DEPOT_ARRIVAL_RADIUS, MotionReport, REFILL_DONE_FRACTION, STRUCTURE_ARRIVAL_RADIUS,
    advance_agents,
};
