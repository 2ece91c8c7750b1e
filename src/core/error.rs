use std::{io, path::PathBuf};

use thiserror::Error;

/// Failures while scanning a tree and updating its catalogs.
#[derive(Debug, Error)]
pub enum ScanError {
    /// A candidate source file (or an existing catalog) could not be read.
    #[error("cannot read {}: {source}", .path.display())]
    UnreadableFile { path: PathBuf, source: io::Error },

    /// A directory could not be listed.
    #[error("cannot list directory: {source}")]
    UnreadableDirectory {
        #[from]
        source: walkdir::Error,
    },

    /// An existing catalog is not an object of objects of strings.
    #[error("malformed catalog {}: {source}", .path.display())]
    MalformedCatalog {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// The merged catalog could not be persisted.
    #[error("cannot write catalog {}: {source}", .path.display())]
    UnwritableCatalog { path: PathBuf, source: io::Error },
}

impl ScanError {
    /// Whether the failure must stop the whole run rather than one directory.
    pub fn is_fatal(&self) -> bool {
        matches!(self, ScanError::UnwritableCatalog { .. })
    }
}

pub type ScanResult<T> = Result<T, ScanError>;
