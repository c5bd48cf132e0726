//! gazetteer: command-line front end for `gazetteer-core`.
//!
//! Usage examples
//! --------------
//!
//! - Convert the tab-delimited extract into `CM.json`
//!   $ gazetteer convert
//!
//! - Convert the comma-delimited extract instead
//!   $ gazetteer convert --layout named
//!
//! - Rewrite `CM.txt` as `CM.csv`
//!   $ gazetteer format
//!
//! - Check the corpus for coverage
//!   $ gazetteer --data-dir data analyze --min-locations 20000
//!
//! Reports go to stdout, logs go to stderr (`RUST_LOG` overrides `-v`/`-q`).
mod args;

use crate::args::{CliArgs, Commands};
use anyhow::Context;
use clap::Parser;
use gazetteer_core::config::CompletenessThresholds;
use gazetteer_core::loader;
use gazetteer_core::report::{group_thousands, AnalysisReport, ConversionSummary};
use gazetteer_core::GazetteerConfig;

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();
    setup_logging(&args);

    let mut config = GazetteerConfig::with_data_dir(&args.data_dir);

    match args.command {
        Commands::Convert { layout } => {
            let outcome = loader::convert(&config, layout.into())
                .context("Conversion failed")?;
            println!(
                "{}",
                ConversionSummary {
                    run: &outcome.run,
                    output: &outcome.output,
                    output_bytes: outcome.output_bytes,
                    stats: &outcome.stats,
                }
            );
        }

        Commands::Format => {
            let outcome = loader::reformat(&config).context("Reformatting failed")?;
            println!("Reformatting finished");
            println!("- Rows processed: {}", outcome.run.processed);
            println!("- Errors: {}", outcome.run.errors);
            println!(
                "- Output: {} ({} bytes)",
                outcome.output.display(),
                group_thousands(outcome.output_bytes as usize)
            );
        }

        Commands::Analyze {
            min_locations,
            min_cities,
        } => {
            config.thresholds = CompletenessThresholds {
                min_locations,
                min_cities,
            };
            let analysis = loader::analyze(&config).context("Analysis failed")?;
            println!(
                "{}",
                AnalysisReport {
                    path: &analysis.path,
                    metadata: &analysis.corpus.metadata,
                    stats: &analysis.stats,
                    thresholds: &config.thresholds,
                }
            );
        }
    }

    Ok(())
}

fn setup_logging(args: &CliArgs) {
    use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let level = args.log_level();
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!("gazetteer_core={level},gazetteer={level}"))
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();
}
