// crates/gazetteer-core/src/config.rs

//! Run configuration: where the dataset files live, what the corpus metadata
//! says about itself, and the thresholds the coverage analysis applies.
//!
//! Every type carries a `Default` with the stock Cameroon values, so callers
//! only override what they need.

use std::path::{Path, PathBuf};

pub const DEFAULT_POSITIONAL_FILE: &str = "CM.txt";
pub const DEFAULT_NAMED_FILE: &str = "CM.csv";
pub const DEFAULT_OUTPUT_FILE: &str = "CM.json";

#[derive(Debug, Clone, Default)]
pub struct GazetteerConfig {
    pub paths: DatasetPaths,
    pub corpus: CorpusInfo,
    pub thresholds: CompletenessThresholds,
}

impl GazetteerConfig {
    /// Stock configuration rooted at `data_dir`.
    pub fn with_data_dir(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            paths: DatasetPaths::new(data_dir),
            ..Default::default()
        }
    }
}

/// File names of the dataset, resolved against one data directory.
#[derive(Debug, Clone)]
pub struct DatasetPaths {
    pub data_dir: PathBuf,
    pub positional_file: String,
    pub named_file: String,
    pub output_file: String,
}

impl DatasetPaths {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            ..Default::default()
        }
    }

    /// The tab-delimited extract (`CM.txt`).
    pub fn positional(&self) -> PathBuf {
        self.data_dir.join(&self.positional_file)
    }

    /// The comma-delimited extract (`CM.csv`).
    pub fn named(&self) -> PathBuf {
        self.data_dir.join(&self.named_file)
    }

    /// The JSON corpus (`CM.json`).
    pub fn output(&self) -> PathBuf {
        self.data_dir.join(&self.output_file)
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

impl Default for DatasetPaths {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("."),
            positional_file: DEFAULT_POSITIONAL_FILE.to_string(),
            named_file: DEFAULT_NAMED_FILE.to_string(),
            output_file: DEFAULT_OUTPUT_FILE.to_string(),
        }
    }
}

/// Descriptive metadata written into every corpus.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorpusInfo {
    pub source: String,
    pub country: String,
    pub country_code: String,
}

impl Default for CorpusInfo {
    fn default() -> Self {
        Self {
            source: "GeoNames and geographic databases".to_string(),
            country: "Cameroon".to_string(),
            country_code: "CM".to_string(),
        }
    }
}

/// Thresholds for calling a corpus complete. This is a reporting heuristic,
/// not a correctness guarantee.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompletenessThresholds {
    /// Minimum number of records.
    pub min_locations: usize,
    /// Minimum number of city-like records (`PPLA*`, `PPLC`).
    pub min_cities: usize,
}

impl Default for CompletenessThresholds {
    fn default() -> Self {
        Self {
            min_locations: 24_000,
            min_cities: 1,
        }
    }
}
