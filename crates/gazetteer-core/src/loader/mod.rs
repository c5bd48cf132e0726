// crates/gazetteer-core/src/loader/mod.rs

//! File access for the gazetteer pipeline.
//!
//! * `positional` / `named`: read the two source layouts into records.
//! * `format`: rewrite the tab layout as CSV.
//! * `corpus`: write and read the JSON corpus.
//! * `builder`: the end-to-end pipelines on top of those.

mod builder;
mod common_io;
mod corpus;
mod format;
mod named;
mod positional;

use crate::common::LoadOutcome;
use crate::error::Result;
use crate::raw::Layout;
use csv::Position;
use std::path::Path;

pub use builder::{analyze, convert, reformat};
pub use corpus::{read_corpus, write_corpus};
pub use format::reformat_positional_to_named;
pub use named::load_named;
pub use positional::load_positional;

/// Progress is logged every this many input lines.
pub const PROGRESS_EVERY: u64 = 1000;

/// Reads `path` as the given layout.
pub fn load(path: &Path, layout: Layout) -> Result<LoadOutcome> {
    match layout {
        Layout::PositionalV1 => load_positional(path),
        Layout::NamedV2 => load_named(path),
    }
}

fn line_of(position: Option<&Position>) -> u64 {
    position.map_or(0, Position::line)
}
