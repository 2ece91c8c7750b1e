//! Reading and writing catalog files.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

use super::Catalog;
use crate::core::error::{ScanError, ScanResult};

/// Default catalog file name, one per processed directory.
pub const CATALOG_FILE_NAME: &str = "translations.json";

/// Catalog file of a directory, loaded or empty.
#[derive(Debug)]
pub struct CatalogFile {
    path: PathBuf,
    pub catalog: Catalog,
    /// True if the file existed on disk when opened.
    pub existed: bool,
}

impl CatalogFile {
    /// Open the catalog at `path`, or start an empty one if it does not exist.
    pub fn open_or_create(path: &Path) -> ScanResult<Self> {
        let content = match fs::read_to_string(path) {
            Ok(content) => Some(content),
            Err(err) if err.kind() == io::ErrorKind::NotFound => None,
            Err(source) => {
                return Err(ScanError::UnreadableFile {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };

        let (catalog, existed) = match content {
            Some(content) => (parse(path, &content)?, true),
            None => (Catalog::new(), false),
        };

        Ok(Self {
            path: path.to_path_buf(),
            catalog,
            existed,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write the catalog back, tab indented with a trailing newline.
    pub fn save(&self) -> ScanResult<()> {
        let unwritable = |source: io::Error| ScanError::UnwritableCatalog {
            path: self.path.clone(),
            source,
        };

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(unwritable)?;
        }

        let content = to_json(&self.catalog).map_err(unwritable)?;
        fs::write(&self.path, content).map_err(unwritable)
    }
}

fn parse(path: &Path, content: &str) -> ScanResult<Catalog> {
    // An empty file is treated as an empty catalog.
    if content.trim().is_empty() {
        return Ok(Catalog::new());
    }
    serde_json::from_str(content).map_err(|source| ScanError::MalformedCatalog {
        path: path.to_path_buf(),
        source,
    })
}

/// Serialize a catalog the way it is stored on disk.
pub fn to_json(catalog: &Catalog) -> io::Result<String> {
    let mut buffer = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"\t");
    let mut serializer = Serializer::with_formatter(&mut buffer, formatter);
    catalog.serialize(&mut serializer)?;
    buffer.push(b'\n');
    String::from_utf8(buffer).map_err(|err| io::Error::new(io::ErrorKind::InvalidData, err))
}
