// crates/gazetteer-core/src/loader/corpus.rs
use super::common_io;
use crate::error::Result;
use crate::model::Corpus;
use std::io::Write;
use std::path::Path;

/// Writes the corpus as indented UTF-8 JSON (non-ASCII kept as-is) and
/// returns the file size.
pub fn write_corpus(path: &Path, corpus: &Corpus) -> Result<u64> {
    common_io::write_atomic(path, |out| {
        serde_json::to_writer_pretty(&mut *out, corpus)?;
        out.write_all(b"\n")?;
        Ok(())
    })
}

/// Reads a corpus document back. Missing keys fall back to their defaults.
pub fn read_corpus(path: &Path) -> Result<Corpus> {
    let reader = common_io::open_stream(path)?;
    Ok(serde_json::from_reader(reader)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CorpusInfo;
    use crate::error::GazetteerError;
    use crate::model::{LocationRecord, Names};

    #[test]
    fn written_corpus_reads_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("CM.json");
        let record = LocationRecord {
            id: "1".into(),
            names: Names {
                primary: "Ébolowa".into(),
                all: vec!["Ébolowa".into()],
                ..Default::default()
            },
            ..Default::default()
        };
        let corpus = Corpus::new(&CorpusInfo::default(), vec![record.clone()]);

        let size = write_corpus(&path, &corpus).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(size, text.len() as u64);
        assert!(text.contains("\"primary\": \"Ébolowa\""));
        assert!(text.starts_with("{\n  \"metadata\": {"));

        let back = read_corpus(&path).unwrap();
        assert_eq!(back.metadata, corpus.metadata);
        assert_eq!(back.locations(), [record]);
    }

    #[test]
    fn malformed_json_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("CM.json");
        std::fs::write(&path, "{ not json").unwrap();
        assert!(matches!(read_corpus(&path), Err(GazetteerError::Json(_))));
    }
}
