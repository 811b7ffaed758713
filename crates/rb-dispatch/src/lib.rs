//! `rb-dispatch`: the assignment policy.
//!
//! Once per tick, every agent without a target is given one:
//!
//! 1. **Resource check**: below 20 % of capacity → nearest depot.
//! 2. **Fire targeting**: otherwise, the burning structure with the highest
//!    fire priority, nearest first among equals.
//!
//! Agents that already have a target are left alone; they keep it until the
//! motion phase clears it.  The policy is greedy and uncoordinated: several
//! agents may pick the same fire in one pass.

pub mod assign;


pub use assign::{AssignReport, LOW_WATER_FRACTION, assign_targets, best_fire, nearest_depot};
