//! CSV output backend.
//!
//! Creates `tick_summaries.csv` in the configured output directory.

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{OutputResult, TickSummaryRow};

/// Column order of `tick_summaries.csv`.
pub const SUMMARY_HEADER: [&str; 11] = [
    "tick",
    "time",
    "active_fires",
    "agents_fighting",
    "agents_refilling",
    "agents_idle",
    "fires_started",
    "fires_extinguished",
    "structures_destroyed",
    "avg_water",
    "total_fire_intensity",
];

/// Writes tick summaries to a CSV file.
pub struct CsvWriter {
    summaries: Writer<File>,
    finished:  bool,
}

impl CsvWriter {
    /// Create `tick_summaries.csv` in `dir` (which must exist) and write the
    /// header row.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut summaries = Writer::from_path(dir.join("tick_summaries.csv"))?;
        summaries.write_record(SUMMARY_HEADER)?;
        Ok(Self { summaries, finished: false })
    }
}

impl OutputWriter for CsvWriter {
    fn write_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()> {
        self.summaries.write_record(&[
            row.tick.to_string(),
            format!("{:.1}", row.time),
            row.active_fires.to_string(),
            row.agents_fighting.to_string(),
            row.agents_refilling.to_string(),
            row.agents_idle.to_string(),
            row.fires_started.to_string(),
            row.fires_extinguished.to_string(),
            row.structures_destroyed.to_string(),
            format!("{:.2}", row.avg_water),
            format!("{:.2}", row.total_fire_intensity),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.summaries.flush()?;
        Ok(())
    }
}
