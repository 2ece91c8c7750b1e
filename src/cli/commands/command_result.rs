use std::path::PathBuf;

use super::super::exit_status::ExitStatus;
use crate::core::ScanSummary;

#[derive(Debug)]
pub enum CommandSummary {
    Scan(ScanCommandSummary),
    Init(InitSummary),
}

#[derive(Debug)]
pub struct ScanCommandSummary {
    /// Root directory that was processed.
    pub root: PathBuf,
    /// Config file the options were read from, if any.
    pub config_path: Option<PathBuf>,
    pub marker: String,
    pub dry_run: bool,
    pub outcome: ScanSummary,
}

#[derive(Debug)]
pub struct InitSummary {
    pub path: PathBuf,
    /// Set when the config file could not be created.
    pub error: Option<String>,
}

/// Result of running xlocalize commands
#[derive(Debug)]
pub struct CommandResult {
    pub summary: CommandSummary,
    /// Directories (or config files) that could not be processed.
    pub error_count: usize,
    /// Marker calls with a non-literal argument.
    pub warning_count: usize,
}

impl CommandResult {
    pub fn exit_status(&self) -> ExitStatus {
        if self.error_count > 0 {
            ExitStatus::Failure
        } else {
            ExitStatus::Success
        }
    }
}
