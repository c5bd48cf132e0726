// crates/gazetteer-core/src/loader/builder.rs

//! End-to-end pipelines used by the CLI: convert, reformat, analyze.

use super::{load, read_corpus, reformat_positional_to_named, write_corpus};
use crate::common::{Analysis, ConversionOutcome, FormatOutcome};
use crate::config::GazetteerConfig;
use crate::error::Result;
use crate::model::Corpus;
use crate::raw::Layout;
use crate::stats::CorpusStatistics;
use tracing::info;

// -----------------------------------------------------------------------------
// CONVERSION
// -----------------------------------------------------------------------------

/// Reads the extract for `layout`, writes the JSON corpus and computes its
/// statistics. Any previous corpus is only replaced once the new one has been
/// written completely.
pub fn convert(config: &GazetteerConfig, layout: Layout) -> Result<ConversionOutcome> {
    let input = match layout {
        Layout::PositionalV1 => config.paths.positional(),
        Layout::NamedV2 => config.paths.named(),
    };
    let output = config.paths.output();
    info!(input = %input.display(), ?layout, "reading gazetteer extract");

    // 1. Parse & Normalize
    let loaded = load(&input, layout)?;
    info!(
        processed = loaded.run.processed,
        errors = loaded.run.errors,
        dropped = loaded.run.dropped,
        "extract read"
    );

    // 2. Assemble
    let corpus = Corpus::new(&config.corpus, loaded.locations);

    // 3. Write
    info!(output = %output.display(), locations = corpus.metadata.total_locations, "writing corpus");
    let output_bytes = write_corpus(&output, &corpus)?;

    let stats = CorpusStatistics::compute(corpus.locations());
    Ok(ConversionOutcome {
        corpus,
        run: loaded.run,
        output,
        output_bytes,
        stats,
    })
}

// -----------------------------------------------------------------------------
// REFORMAT
// -----------------------------------------------------------------------------

/// `CM.txt` -> `CM.csv` inside the configured data directory.
pub fn reformat(config: &GazetteerConfig) -> Result<FormatOutcome> {
    let input = config.paths.positional();
    let output = config.paths.named();
    info!(input = %input.display(), output = %output.display(), "reformatting extract");

    reformat_positional_to_named(&input, &output)
}

// -----------------------------------------------------------------------------
// ANALYSIS
// -----------------------------------------------------------------------------

/// Reads the configured JSON corpus back and computes its statistics.
pub fn analyze(config: &GazetteerConfig) -> Result<Analysis> {
    let path = config.paths.output();
    info!(path = %path.display(), "analyzing corpus");

    let corpus = read_corpus(&path)?;
    let stats = CorpusStatistics::compute(corpus.locations());
    if corpus.metadata.total_locations != stats.total_locations {
        tracing::warn!(
            declared = corpus.metadata.total_locations,
            actual = stats.total_locations,
            "declared total does not match the number of locations"
        );
    }

    Ok(Analysis {
        path,
        corpus,
        stats,
    })
}
