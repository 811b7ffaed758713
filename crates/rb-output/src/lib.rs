//! `rb-output`: output backends for the rescue-bots simulation.
//!
//! | Item                  | Produces                                          |
//! |-----------------------|---------------------------------------------------|
//! | [`CsvWriter`]         | `tick_summaries.csv`, one row per snapshot        |
//! | [`write_state_json`]  | a pretty-printed JSON dump of the whole world     |
//! | [`render_report`]     | the end-of-run statistics block as plain text     |
//!
//! Writers implement [`OutputWriter`] and are driven by
//! [`SimOutputObserver`], which implements `rb_sim::SimObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use rb_output::{CsvWriter, SimOutputObserver, write_state_json};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = SimOutputObserver::new(writer);
//! sim.run(&mut obs);
//! if let Some(e) = obs.take_error() { eprintln!("output error: {e}"); }
//! write_state_json(Path::new("./output/simulation_state.json"), &sim.dump())?;
//! ```

pub mod csv;
pub mod error;
pub mod json;
pub mod observer;
pub mod report;
pub mod row;
pub mod writer;

#[cfg(test)]
mod tests;

pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use json::write_state_json;
pub use observer::SimOutputObserver;
pub use report::render_report;
pub use row::TickSummaryRow;
pub use writer::OutputWriter;
