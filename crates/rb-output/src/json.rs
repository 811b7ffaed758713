//! JSON state export.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use rb_sim::StateDump;

use crate::OutputResult;

/// Write `dump` to `path` as pretty-printed JSON, replacing any existing file.
pub fn write_state_json(path: &Path, dump: &StateDump<'_>) -> OutputResult<()> {
    let mut out = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(&mut out, dump)?;
    out.flush()?;
    tracing::debug!(path = %path.display(), structures = dump.structures.len(), "state exported");
    Ok(())
}
