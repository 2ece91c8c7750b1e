//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `scan`: Extract marker calls and update every directory's catalog
//! - `init`: Initialize an xlocalize configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    /// Get the verbose flag of the command, if it has one.
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Scan(cmd)) => cmd.args.verbose,
            Some(Command::Init) | None => false,
        }
    }
}

/// Arguments of the `scan` command.
///
/// Every option left unset falls back to the config file, then to the
/// built-in default.
#[derive(Debug, Clone, Default, Args)]
pub struct ScanArgs {
    /// Language of placeholders and diagnostic keys (default: en)
    #[arg(short, long)]
    pub language: Option<String>,

    /// Process subdirectories too (default)
    #[arg(short, long, overrides_with = "no_recursive")]
    pub recursive: bool,

    /// Only process the output directory itself
    #[arg(short = 'R', long, overrides_with = "recursive")]
    pub no_recursive: bool,

    /// File extensions to scan, comma separated (default: html,js)
    #[arg(short, long, value_delimiter = ',')]
    pub extensions: Vec<String>,

    /// Languages to stamp placeholders for, comma separated
    #[arg(short, long, value_delimiter = ',')]
    pub translate_to: Vec<String>,

    /// Root directory whose catalogs are updated (default: current directory)
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// Report what would change without writing any catalog
    #[arg(long)]
    pub dry_run: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl ScanArgs {
    /// Recursion requested on the command line; the last of `-r`/`-R` wins.
    pub fn recursive(&self) -> Option<bool> {
        if self.recursive {
            Some(true)
        } else if self.no_recursive {
            Some(false)
        } else {
            None
        }
    }
}

#[derive(Debug, Args)]
pub struct ScanCommand {
    #[command(flatten)]
    pub args: ScanArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Extract translatable text and update translations.json catalogs
    Scan(ScanCommand),
    /// Initialize a new .xlocalizerc.json configuration file
    Init,
}
