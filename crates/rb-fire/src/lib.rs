//! `rb-fire`: everything that happens to fires on their own.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                     |
//! |---------------|--------------------------------------------------------------|
//! | [`priority`]  | urgency class (1–5) from intensity and local density         |
//! | [`ignite`]    | `ignite`: start a fire in a structure                       |
//! | [`evolve`]    | `evolve_fires`: growth, destruction, probabilistic spread   |
//!
//! Agents fighting fires live in `rb-motion`; this crate only reads agent
//! targets (an attended fire does not spread).

pub mod evolve;
pub mod ignite;
pub mod priority;


pub use evolve::{FireReport, evolve_fires, spread_candidate};
pub use ignite::ignite;
pub use priority::{fire_priority, nearby_count, priority_class};
