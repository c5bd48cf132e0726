use clap::{Parser, Subcommand, ValueEnum};
use gazetteer_core::config::CompletenessThresholds;
use gazetteer_core::Layout;
use std::path::PathBuf;

/// CLI arguments for gazetteer-cli
#[derive(Debug, Parser)]
#[command(
    name = "gazetteer",
    version,
    about = "Convert and analyze the Cameroon gazetteer extract"
)]
pub struct CliArgs {
    /// Directory holding CM.txt, CM.csv and CM.json
    #[arg(short = 'd', long = "data-dir", global = true, default_value = ".")]
    pub data_dir: PathBuf,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short = 'v', long = "verbose", global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short = 'q', long = "quiet", global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

impl CliArgs {
    pub fn log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "info",
                1 => "debug",
                _ => "trace",
            }
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Convert the extract into the JSON corpus (CM.json)
    Convert {
        /// Which extract to read
        #[arg(short = 'l', long = "layout", value_enum, default_value_t = LayoutArg::Positional)]
        layout: LayoutArg,
    },

    /// Rewrite the tab-delimited CM.txt as comma-delimited CM.csv
    Format,

    /// Report coverage and completeness of CM.json
    Analyze {
        /// Minimum number of locations for a complete corpus
        #[arg(long = "min-locations", default_value_t = CompletenessThresholds::default().min_locations)]
        min_locations: usize,

        /// Minimum number of major cities for a complete corpus
        #[arg(long = "min-cities", default_value_t = CompletenessThresholds::default().min_cities)]
        min_cities: usize,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LayoutArg {
    /// CM.txt, tab-delimited, no header
    Positional,
    /// CM.csv, comma-delimited with header
    Named,
}

impl From<LayoutArg> for Layout {
    fn from(arg: LayoutArg) -> Self {
        match arg {
            LayoutArg::Positional => Layout::PositionalV1,
            LayoutArg::Named => Layout::NamedV2,
        }
    }
}
