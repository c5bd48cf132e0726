// crates/gazetteer-core/src/common.rs

//! Result types shared by the loaders and the CLI.

use crate::model::{Corpus, LocationRecord};
use crate::stats::CorpusStatistics;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Row counters for one pass over an input file.
///
/// `processed` counts every non-blank row that was read, including the ones
/// that were `dropped` for lack of an id. Rows that could not be decoded at
/// all only count towards `errors`, and their numbers land in `failed_rows`:
/// the physical line for the tab layout, the data row (header excluded) for
/// the CSV layout.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunReport {
    pub processed: usize,
    pub errors: usize,
    pub dropped: usize,
    pub failed_rows: Vec<u64>,
}

/// Normalized records plus the counters of the pass that produced them.
#[derive(Debug, Clone, Default)]
pub struct LoadOutcome {
    pub locations: Vec<LocationRecord>,
    pub run: RunReport,
}

/// Everything a finished conversion knows about itself.
#[derive(Debug, Clone)]
pub struct ConversionOutcome {
    pub corpus: Corpus,
    pub run: RunReport,
    pub output: PathBuf,
    pub output_bytes: u64,
    pub stats: CorpusStatistics,
}

/// Result of rewriting the tab extract as CSV.
#[derive(Debug, Clone)]
pub struct FormatOutcome {
    pub run: RunReport,
    pub output: PathBuf,
    pub output_bytes: u64,
}

/// A corpus read back from disk together with its statistics.
#[derive(Debug, Clone)]
pub struct Analysis {
    pub path: PathBuf,
    pub corpus: Corpus,
    pub stats: CorpusStatistics,
}
