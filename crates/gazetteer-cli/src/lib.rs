//! gazetteer-cli
//! =============
//!
//! Command-line interface for the `gazetteer-core` crate.
//!
//! This crate primarily provides a binary (`gazetteer`). The library target
//! exists so that docs.rs renders this overview.
//!
//! Basic usage:
//!
//! ```text
//! gazetteer --help
//! gazetteer format
//! gazetteer convert --layout named
//! gazetteer analyze --min-locations 24000
//! ```
//!
//! For programmatic access to the conversion pipeline and the statistics,
//! use the [`gazetteer-core`] crate directly.
#![cfg_attr(docsrs, feature(doc_cfg))]

// No API here; the binary is the deliverable.
