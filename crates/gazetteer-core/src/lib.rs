// crates/gazetteer-core/src/lib.rs

pub mod common; // Run counters and pipeline outcomes
pub mod config;
pub mod convert; // Raw row -> LocationRecord
pub mod error;
pub mod labels;
pub mod loader; // File access and the end-to-end pipelines
pub mod model;
pub mod prune;
pub mod report;
pub mod stats;
pub mod traits;
pub mod value;
// Raw input rows of both source layouts
#[doc(hidden)]
pub mod raw;

// Re-exports
pub use crate::error::{GazetteerError, Result};
pub use crate::common::{Analysis, ConversionOutcome, FormatOutcome, LoadOutcome, RunReport};
pub use crate::config::{CompletenessThresholds, CorpusInfo, DatasetPaths, GazetteerConfig};
pub use crate::model::{Corpus, CorpusMetadata, LocationRecord};
pub use crate::raw::Layout;
pub use crate::stats::{Assessment, CorpusStatistics};
pub use crate::traits::FieldSource;
