//! World consistency checks.
//!
//! These are defects, not recoverable errors: the tick loop asserts on them
//! in debug builds and tests check them after every step.

use thiserror::Error;

use rb_core::{AgentId, StructureId};

#[derive(Debug, Error, PartialEq)]
pub enum InvariantViolation {
    #[error("{agent} water {water} outside [0, {max}]")]
    WaterOutOfBounds { agent: AgentId, water: f64, max: f64 },

    #[error("fire at {structure} has intensity {intensity} outside [0, 200]")]
    IntensityOutOfBounds { structure: StructureId, intensity: f64 },

    #[error("{0} is destroyed but still on fire")]
    DestroyedStillBurning(StructureId),

    #[error("active fire refers to {0}, which is not burning")]
    OrphanFire(StructureId),

    #[error("{active} active fires but {burning} structures on fire")]
    FireSetMismatch { active: usize, burning: usize },
}
