// crates/gazetteer-core/src/loader/named.rs
use super::{common_io, PROGRESS_EVERY};
use crate::common::LoadOutcome;
use crate::convert::normalize;
use crate::error::{GazetteerError, Result};
use crate::raw::{ColumnMapping, NamedRow, NAMED_HEADERS};
use csv::{ReaderBuilder, StringRecord};
use std::path::Path;
use tracing::{info, warn};

/// Reads and normalizes the comma-delimited extract (`CM.csv`).
///
/// Columns are resolved by header name, so their order is free. Columns the
/// header does not declare read as empty for every row. Every decoded row
/// becomes a record, including rows with an empty id. A header without a
/// single expected column is rejected as [`GazetteerError::InvalidData`].
pub fn load_named(path: &Path) -> Result<LoadOutcome> {
    let stream = common_io::open_stream(path)?;
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(stream);

    // 1. Header
    let mapping = ColumnMapping::from_headers(reader.headers()?);
    let missing = mapping.missing_columns();
    if missing.len() == NAMED_HEADERS.len() {
        return Err(GazetteerError::InvalidData(format!(
            "{} has none of the expected columns ({})",
            path.display(),
            NAMED_HEADERS.join(", ")
        )));
    }
    if !missing.is_empty() {
        warn!(columns = ?missing, "header lacks expected columns, they will read as empty");
    }

    // 2. Rows, numbered from 1 after the header
    let mut outcome = LoadOutcome::default();
    let mut record = StringRecord::new();
    let mut row: u64 = 0;
    loop {
        let read = reader.read_record(&mut record);
        row += 1;
        match read {
            Ok(false) => break,
            Ok(true) => {}
            Err(err) if err.is_io_error() => return Err(err.into()),
            Err(err) => {
                outcome.run.errors += 1;
                outcome.run.failed_rows.push(row);
                warn!(row, error = %err, "skipping unreadable row");
                continue;
            }
        }

        outcome
            .locations
            .push(normalize(&NamedRow::new(&record, &mapping)));
        outcome.run.processed += 1;

        if row % PROGRESS_EVERY == 0 {
            info!(row, "processed {row} rows");
        }
    }

    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_tmp(text: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(text.as_bytes()).unwrap();
        file
    }

    #[test]
    fn columns_resolve_by_name() {
        let file = write_tmp(
            "name_primary,id,feature_code,admin_code_2,elevation\n\
             Bafoussam,2235189,PPLA,A2,1450\n",
        );
        let outcome = load_named(file.path()).unwrap();
        assert_eq!(outcome.locations.len(), 1);

        let record = &outcome.locations[0];
        assert_eq!(record.id, "2235189");
        assert_eq!(record.name(), "Bafoussam");
        assert_eq!(record.feature_code(), Some("PPLA"));
        assert_eq!(
            record.feature.code_label.as_deref(),
            Some("Seat of a first-order administrative division")
        );
        assert_eq!(
            record.administrative.as_ref().and_then(|a| a.get("level_2")).map(String::as_str),
            Some("A2")
        );
        assert_eq!(record.elevation.map(|e| e.meters.as_f64()), Some(1450.0));
    }

    #[test]
    fn quoted_fields_and_empty_ids_are_kept() {
        let file = write_tmp(
            "id,name_primary,name_alternatives\n\
             5,\"Yaoundé, capital\",\"Jaunde,Yaounde\"\n\
             ,Unnamed,\n",
        );
        let outcome = load_named(file.path()).unwrap();

        assert_eq!(outcome.run.processed, 2);
        assert_eq!(outcome.run.dropped, 0);
        assert_eq!(outcome.locations[0].name(), "Yaoundé, capital");
        assert_eq!(outcome.locations[0].names.alternatives, ["Jaunde", "Yaounde"]);
        assert_eq!(outcome.locations[1].id, "");
    }

    #[test]
    fn short_rows_read_missing_columns_as_empty() {
        let file = write_tmp(&format!("{}\n7,Tiko,,,4.07\n", NAMED_HEADERS.join(",")));
        let outcome = load_named(file.path()).unwrap();
        assert_eq!(outcome.run.errors, 0);

        let record = &outcome.locations[0];
        assert_eq!(record.id, "7");
        assert_eq!(record.name(), "Tiko");
        assert_eq!(record.coordinates, None);
        assert_eq!(record.feature_type(), None);
        assert_eq!(record.country.code, None);
        assert_eq!(record.administrative, None);
        assert_eq!(record.elevation, None);
        assert_eq!(record.timezone, None);
        assert_eq!(
            record.to_sparse_value().unwrap(),
            serde_json::json!({
                "id": "7",
                "names": { "primary": "Tiko", "all": ["Tiko"] },
            })
        );
    }

    #[test]
    fn unrelated_header_is_rejected() {
        let file = write_tmp("1\tDouala\t\t\n2\tBuea\t\t\n");
        let err = load_named(file.path()).unwrap_err();
        assert!(matches!(err, GazetteerError::InvalidData(_)));
    }

    #[test]
    fn bad_row_does_not_abort() {
        let mut bytes = b"id,name_primary\n1,Ngaoundere\n2,".to_vec();
        bytes.extend_from_slice(b"\xff\n3,Bertoua\n");
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(&bytes).unwrap();

        let outcome = load_named(file.path()).unwrap();
        assert_eq!(outcome.run.errors, 1);
        // Second data row, third line of the file.
        assert_eq!(outcome.run.failed_rows, [2]);
        assert_eq!(outcome.run.processed, 2);
        assert_eq!(outcome.locations[1].name(), "Bertoua");
    }
}
