// crates/gazetteer-core/src/loader/format.rs

//! Rewrites the tab-delimited extract as the comma-delimited layout so both
//! inputs can go through the same pipeline.

use super::common_io;
use super::positional::for_each_row;
use crate::common::{FormatOutcome, RunReport};
use crate::error::Result;
use crate::raw::{Field, NAMED_HEADERS};
use crate::traits::FieldSource;
use std::io::Write;
use std::path::Path;

/// Writes `input` (tab layout) to `output` (CSV layout).
///
/// Columns 9, 11-13 and 15 of the input are discarded, `admin_code_2..4` are
/// always empty. Short rows are padded so every output row has 17 fields.
/// The output only appears once the whole input has been read.
pub fn reformat_positional_to_named(input: &Path, output: &Path) -> Result<FormatOutcome> {
    let mut run = RunReport::default();

    let bytes = common_io::write_atomic(output, |out: &mut dyn Write| {
        let mut writer = csv::Writer::from_writer(out);
        writer.write_record(NAMED_HEADERS)?;

        run = for_each_row(input, |row, _| {
            writer.write_record(Field::NAMED_ORDER.iter().map(|field| row.field(*field)))?;
            Ok(())
        })?;

        writer.flush()?;
        Ok(())
    })?;

    Ok(FormatOutcome {
        run,
        output: output.to_path_buf(),
        output_bytes: bytes,
    })
}
