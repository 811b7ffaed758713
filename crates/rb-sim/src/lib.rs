//! `rb-sim`: world initialization and the tick orchestrator.
//!
//! # Tick loop
//!
//! ```text
//! for each tick:
//!   ① Assign  : idle agents get a depot (low water) or the best fire.
//!   ② Motion  : agents move toward targets, refill, or spray.
//!   ③ Fire    : fires grow, destroy structures, spread; spread fires ignite.
//!   ④ Clock   : advance by dt.
//! ```
//!
//! The order is fixed.  Each phase sees the world as the previous phase left
//! it: a fire put out in ② is not grown in ③ during the same tick.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use rb_core::SimConfig;
//! use rb_sim::{NoopObserver, SimBuilder};
//!
//! let mut sim = SimBuilder::new(SimConfig::default()).build()?;
//! let outcome = sim.run(&mut NoopObserver);
//! println!("{outcome:?}: {:?}", sim.stats());
//! ```

pub mod builder;
pub mod error;
pub mod observer;
pub mod sim;
pub mod stats;


pub use builder::{SimBuilder, populate};
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use sim::{RunOutcome, Sim, TickReport};
pub use stats::{FleetComposition, StateDump, StatsSnapshot};
