//! Directory walking and the per-directory read-merge-write cycle.
//!
//! Each visited directory owns one catalog file. Processing a directory
//! reads its catalog, extracts marker calls from the directory's own files
//! (not from subdirectories), merges the resulting fragment into the catalog
//! and writes it back. Directories share nothing, so they are processed in
//! parallel.

mod ignore;

use std::{
    collections::HashSet,
    fs,
    path::{Path, PathBuf},
};

use colored::Colorize;
use rayon::prelude::*;
use walkdir::WalkDir;

pub use ignore::{IgnoreRules, is_glob_pattern};

use crate::core::catalog::{Catalog, MergeStats, store::CatalogFile};
use crate::core::error::{ScanError, ScanResult};
use crate::core::extract::{Finding, extract};
use crate::core::messages::ToolMessages;
use crate::utils::{build_line_index, offset_to_line};

/// Everything the scanner needs, resolved from config and command line.
#[derive(Debug, Clone)]
pub struct ScanOptions {
    pub root: PathBuf,
    pub marker: String,
    pub recursive: bool,
    /// File extensions to scan, without the leading dot.
    pub extensions: Vec<String>,
    pub target_languages: Vec<String>,
    pub messages: ToolMessages,
    pub catalog_file: String,
    pub ignores: IgnoreRules,
    pub dry_run: bool,
    pub verbose: bool,
}

/// A finding with its source location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocatedFinding {
    pub path: PathBuf,
    /// 1-based line of the marker name.
    pub line: usize,
    pub finding: Finding,
}

/// Result of processing one directory.
#[derive(Debug)]
pub struct DirectoryReport {
    pub dir: PathBuf,
    pub catalog_path: PathBuf,
    /// True if the catalog file did not exist before this run.
    pub created: bool,
    pub files_scanned: usize,
    /// Marker calls whose argument is not a literal.
    pub non_literals: Vec<LocatedFinding>,
    pub stats: MergeStats,
    pub total_keys: usize,
    /// Values still holding the placeholder after the merge.
    pub missing: usize,
}

#[derive(Debug)]
pub enum DirectoryOutcome {
    Processed(DirectoryReport),
    Failed { dir: PathBuf, error: ScanError },
}

#[derive(Debug, Default)]
pub struct ScanSummary {
    pub outcomes: Vec<DirectoryOutcome>,
}

impl ScanSummary {
    pub fn reports(&self) -> impl Iterator<Item = &DirectoryReport> {
        self.outcomes.iter().filter_map(|outcome| match outcome {
            DirectoryOutcome::Processed(report) => Some(report),
            DirectoryOutcome::Failed { .. } => None,
        })
    }

    pub fn failures(&self) -> impl Iterator<Item = (&Path, &ScanError)> {
        self.outcomes.iter().filter_map(|outcome| match outcome {
            DirectoryOutcome::Failed { dir, error } => Some((dir.as_path(), error)),
            DirectoryOutcome::Processed(_) => None,
        })
    }

    pub fn failure_count(&self) -> usize {
        self.failures().count()
    }

    pub fn files_scanned(&self) -> usize {
        self.reports().map(|r| r.files_scanned).sum()
    }

    pub fn added_keys(&self) -> usize {
        self.reports().map(|r| r.stats.added_keys).sum()
    }
}

/// Canonical paths of the files that make up this tool's entry point.
fn own_entry_points() -> HashSet<PathBuf> {
    let candidates = [
        std::env::current_exe().ok(),
        Some(Path::new(env!("CARGO_MANIFEST_DIR")).join("src").join("main.rs")),
    ];
    candidates
        .into_iter()
        .flatten()
        .filter_map(|path| path.canonicalize().ok())
        .collect()
}

pub struct Scanner {
    options: ScanOptions,
    excluded: HashSet<PathBuf>,
}

impl Scanner {
    /// Create a scanner that never processes the tool's own entry point.
    pub fn new(options: ScanOptions) -> Self {
        Self {
            options,
            excluded: own_entry_points(),
        }
    }

    pub fn options(&self) -> &ScanOptions {
        &self.options
    }

    /// Also exclude `path`. Nonexistent paths are ignored.
    pub fn exclude(mut self, path: &Path) -> Self {
        if let Ok(canonical) = path.canonicalize() {
            self.excluded.insert(canonical);
        }
        self
    }

    pub fn is_excluded(&self, path: &Path) -> bool {
        path.canonicalize()
            .is_ok_and(|canonical| self.excluded.contains(&canonical))
    }

    fn log(&self, action: &str, path: &Path) {
        if self.options.verbose {
            eprintln!("{} {}", action.cyan(), path.display());
        }
    }

    fn is_scannable_file(&self, path: &Path) -> bool {
        let is_catalog = path
            .file_name()
            .is_some_and(|name| name == self.options.catalog_file.as_str());
        if is_catalog || self.options.ignores.is_ignored_file(path) {
            return false;
        }

        path.extension()
            .and_then(|e| e.to_str())
            .is_some_and(|ext| {
                self.options
                    .extensions
                    .iter()
                    .any(|wanted| wanted.eq_ignore_ascii_case(ext))
            })
    }

    /// Extract all marker calls from one file.
    ///
    /// The tool's own entry point always yields nothing.
    pub fn scan_file(&self, path: &Path) -> ScanResult<Vec<LocatedFinding>> {
        if self.is_excluded(path) {
            self.log("Skipping", path);
            return Ok(Vec::new());
        }
        self.log("Processing", path);

        let content = fs::read_to_string(path).map_err(|source| ScanError::UnreadableFile {
            path: path.to_path_buf(),
            source,
        })?;
        let line_index = build_line_index(&content);

        Ok(extract(&content, &self.options.marker)
            .map(|call| LocatedFinding {
                path: path.to_path_buf(),
                line: offset_to_line(&line_index, call.offset),
                finding: call.finding,
            })
            .collect())
    }

    /// Directories to process, depth first, in file name order.
    ///
    /// Directories that cannot be listed are returned as errors.
    pub fn directories(&self) -> Vec<Result<PathBuf, (PathBuf, ScanError)>> {
        let root = &self.options.root;
        let max_depth = if self.options.recursive { usize::MAX } else { 0 };

        WalkDir::new(root)
            .max_depth(max_depth)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| {
                entry.depth() == 0
                    || !entry.file_type().is_dir()
                    || !self.options.ignores.is_ignored_dir(entry.path())
            })
            .filter_map(|entry| match entry {
                Ok(entry) if entry.file_type().is_dir() => Some(Ok(entry.into_path())),
                Ok(_) => None,
                Err(err) => {
                    let dir = err.path().map_or_else(|| root.clone(), Path::to_path_buf);
                    Some(Err((dir, ScanError::from(err))))
                }
            })
            .collect()
    }

    /// Run the read-merge-write cycle for a single directory.
    pub fn process_directory(&self, dir: &Path) -> ScanResult<DirectoryReport> {
        let catalog_path = dir.join(&self.options.catalog_file);
        // The existing catalog is read before anything is written.
        let mut file = CatalogFile::open_or_create(&catalog_path)?;

        let mut files = Vec::new();
        for entry in WalkDir::new(dir).min_depth(1).max_depth(1).sort_by_file_name() {
            let path = entry?.into_path();
            if path.is_file() && self.is_scannable_file(&path) {
                files.push(path);
            }
        }

        let mut located = Vec::new();
        for path in &files {
            located.extend(self.scan_file(path)?);
        }

        let messages = &self.options.messages;
        let fragment = Catalog::build(
            located.iter().map(|l| &l.finding),
            &self.options.target_languages,
            messages,
        );
        let stats = file.catalog.absorb(fragment);

        if !self.options.dry_run {
            file.save()?;
        }

        let non_literals = located
            .into_iter()
            .filter(|l| matches!(l.finding, Finding::NonLiteral(_)))
            .collect();

        Ok(DirectoryReport {
            dir: dir.to_path_buf(),
            catalog_path,
            created: !file.existed,
            files_scanned: files.len(),
            non_literals,
            stats,
            total_keys: file.catalog.len(),
            missing: file.catalog.missing_count(messages.placeholder),
        })
    }

    /// Process every directory under the root.
    ///
    /// Read failures and malformed catalogs fail only their directory; a
    /// catalog that cannot be written stops the run.
    pub fn run(&self) -> ScanResult<ScanSummary> {
        let outcomes = self
            .directories()
            .into_par_iter()
            .map(|dir| match dir {
                Ok(dir) => match self.process_directory(&dir) {
                    Ok(report) => Ok(DirectoryOutcome::Processed(report)),
                    Err(error) if error.is_fatal() => Err(error),
                    Err(error) => Ok(DirectoryOutcome::Failed { dir, error }),
                },
                Err((dir, error)) => Ok(DirectoryOutcome::Failed { dir, error }),
            })
            .collect::<ScanResult<Vec<_>>>()?;

        Ok(ScanSummary { outcomes })
    }
}
