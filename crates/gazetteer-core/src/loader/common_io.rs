// crates/gazetteer-core/src/loader/common_io.rs
use crate::error::{GazetteerError, Result};
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;
use tempfile::NamedTempFile;

pub fn open_stream(path: &Path) -> Result<Box<dyn Read>> {
    let file = File::open(path).map_err(|e| {
        GazetteerError::NotFound(format!("Dataset not found at {}: {}", path.display(), e))
    })?;

    Ok(Box::new(BufReader::new(file)))
}

/// Writes `path` through a temporary file in the same directory and renames
/// it into place once `write` succeeded. On any error the previous content of
/// `path` is left untouched. Returns the size of the written file.
pub fn write_atomic<F>(path: &Path, write: F) -> Result<u64>
where
    F: FnOnce(&mut dyn Write) -> Result<()>,
{
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(dir)?;
    {
        let mut writer = BufWriter::new(tmp.as_file_mut());
        write(&mut writer)?;
        writer.flush()?;
    }

    let file = tmp.persist(path)?;
    Ok(file.metadata()?.len())
}
