//! `rb-world`: the single mutable world shared by every simulation phase.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                      |
//! |---------------|---------------------------------------------------------------|
//! | [`entity`]    | `Structure`, `Agent`, `AgentKind`, `Target`, `ActiveFire`, `Depot` |
//! | [`index`]     | `StructureIndex`: R-tree over static structure positions     |
//! | [`world`]     | `World` (flat entity collections + counters), `Counters`      |
//! | [`error`]     | `InvariantViolation`                                          |
//!
//! # Ownership
//!
//! All entities live in dense `Vec`s owned by [`World`].  Cross references
//! are plain ids (`StructureId`, `DepotId`), never borrows, and structures
//! and depots are never removed, so an id stays valid for the whole run.
//! Only `World::fires` shrinks: a fire is dropped when it is put out or its
//! structure is destroyed.

pub mod entity;
pub mod error;
pub mod index;
pub mod world;


pub use entity::{MAX_FIRE_INTENSITY, ActiveFire, Agent, AgentKind, Depot, KindProfile, Structure, Target};
pub use error::InvariantViolation;
pub use index::StructureIndex;
pub use world::{Counters, World};
