//! Core extraction and catalog engine.
//!
//! Data flows leaves first:
//!
//! 1. `extract`: locate marker calls in raw text and recover their argument
//! 2. `catalog`: stamp placeholders for each finding and merge the fragment
//!    into the persisted catalog without clobbering existing values
//! 3. `scan`: walk directories and run the read-merge-write cycle per directory

pub mod catalog;
pub mod error;
pub mod extract;
pub mod messages;
pub mod scan;

pub use catalog::{Catalog, CatalogEntry, MergeStats, merge};
pub use error::{ScanError, ScanResult};
pub use extract::{Finding, MarkerCall, extract};
pub use messages::ToolMessages;
pub use scan::{
    DirectoryOutcome, DirectoryReport, LocatedFinding, ScanOptions, ScanSummary, Scanner,
};
