//! `SimOutputObserver<W>` bridges `SimObserver` to an `OutputWriter`.

use rb_core::Tick;
use rb_sim::{SimObserver, StatsSnapshot};

use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult, TickSummaryRow};

/// A [`SimObserver`] that writes a summary row on every snapshot and a final
/// row when the run ends, unless that tick was just written as a snapshot.
///
/// Observer hooks return nothing, so writer errors are kept and can be
/// retrieved with [`take_error`][Self::take_error] once `sim.run()` returns.
pub struct SimOutputObserver<W: OutputWriter> {
    writer:     W,
    rows:       usize,
    last_tick:  Option<Tick>,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> SimOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, rows: 0, last_tick: None, last_error: None }
    }

    /// The first write error, if any.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Rows handed to the writer so far.
    pub fn rows_written(&self) -> usize {
        self.rows
    }

    pub fn into_writer(self) -> W {
        self.writer
    }

    fn write(&mut self, tick: Tick, stats: &StatsSnapshot) {
        self.last_tick = Some(tick);
        let result = self.writer.write_summary(&TickSummaryRow::from_stats(tick, stats));
        if result.is_ok() {
            self.rows += 1;
        }
        self.store_err(result);
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                tracing::warn!(error = %e, "output write failed");
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SimObserver for SimOutputObserver<W> {
    fn on_snapshot(&mut self, tick: Tick, stats: &StatsSnapshot) {
        self.write(tick, stats);
    }

    fn on_sim_end(&mut self, final_tick: Tick, stats: &StatsSnapshot) {
        if self.last_tick != Some(final_tick) {
            self.write(final_tick, stats);
        }
        let result = self.writer.finish();
        self.store_err(result);
    }
}
