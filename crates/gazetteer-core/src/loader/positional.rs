// crates/gazetteer-core/src/loader/positional.rs
use super::{common_io, line_of, PROGRESS_EVERY};
use crate::common::{LoadOutcome, RunReport};
use crate::convert::normalize;
use crate::error::Result;
use crate::raw::PositionalRow;
use csv::{Reader, ReaderBuilder, StringRecord};
use std::io::Read;
use std::path::Path;
use tracing::{debug, info, warn};

/// Reader for the tab-delimited extract: no header, no quoting, ragged rows.
pub(crate) fn tab_reader(path: &Path) -> Result<Reader<Box<dyn Read>>> {
    let stream = common_io::open_stream(path)?;
    Ok(ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .from_reader(stream))
}

/// Walks every non-blank row of the tab-delimited extract.
///
/// Undecodable rows are logged, counted in [`RunReport::errors`] and skipped.
/// Only I/O failures abort the pass.
pub(crate) fn for_each_row<F>(path: &Path, mut visit: F) -> Result<RunReport>
where
    F: FnMut(PositionalRow<'_>, &mut RunReport) -> Result<()>,
{
    let mut reader = tab_reader(path)?;
    let mut run = RunReport::default();
    let mut record = StringRecord::new();

    loop {
        match reader.read_record(&mut record) {
            Ok(false) => break,
            Ok(true) => {}
            Err(err) if err.is_io_error() => return Err(err.into()),
            Err(err) => {
                let line = line_of(err.position());
                run.errors += 1;
                run.failed_rows.push(line);
                warn!(line, error = %err, "skipping unreadable row");
                continue;
            }
        }

        let row = PositionalRow::new(&record);
        if row.is_blank() {
            continue;
        }

        visit(row, &mut run)?;
        run.processed += 1;

        let line = line_of(record.position());
        if line % PROGRESS_EVERY == 0 {
            info!(line, "processed {line} lines");
        }
    }

    Ok(run)
}

/// Reads and normalizes the tab-delimited extract (`CM.txt`).
///
/// Rows without an id are counted as dropped and left out of the result.
pub fn load_positional(path: &Path) -> Result<LoadOutcome> {
    let mut locations = Vec::new();

    let run = for_each_row(path, |row, run| {
        let location = normalize(&row);
        if location.id.is_empty() {
            run.dropped += 1;
            debug!(line = line_of(row.position()), "row without id dropped");
        } else {
            locations.push(location);
        }
        Ok(())
    })?;

    Ok(LoadOutcome { locations, run })
}
