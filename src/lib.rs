//! xlocalize - translation catalog generator
//!
//! xlocalize is a CLI tool and library that scans a source tree for calls to a
//! translation marker function (`translate("...")` by default), and keeps a
//! `translations.json` catalog in every directory mapping each discovered text
//! to its translations. Re-running it only ever adds: existing translations
//! are never overwritten, new text and new languages get a placeholder.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (arguments, commands, reporting)
//! - `config`: Configuration file loading and parsing
//! - `core`: Extraction engine, catalog merge and directory processing
//! - `utils`: Shared utility functions

pub mod cli;
pub mod config;
pub mod core;
pub mod utils;
