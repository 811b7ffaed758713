//! `rb-core`: foundational types for the rescue-bots fire response simulation.
//!
//! This crate is a dependency of every other `rb-*` crate.  It has no `rb-*`
//! dependencies and minimal external ones (only `rand` and `thiserror`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `AgentId`, `StructureId`, `DepotId`                   |
//! | [`geo`]         | `Point`, Euclidean distance, bounded step toward      |
//! | [`time`]        | `Tick`, `SimClock`, `SimConfig`                       |
//! | [`rng`]         | `SimRng` (the single shared random source)            |
//! | [`error`]       | `CoreError`, `CoreResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod error;
pub mod geo;
pub mod ids;
pub mod rng;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{CoreError, CoreResult};
pub use geo::Point;
pub use ids::{AgentId, DepotId, StructureId};
pub use rng::SimRng;
pub use time::{SimClock, SimConfig, Tick};
