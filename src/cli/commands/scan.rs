use std::{env, path::PathBuf};

use anyhow::{Context, Result, bail};

use super::super::args::{ScanArgs, ScanCommand};
use super::{CommandResult, CommandSummary, ScanCommandSummary};
use crate::config::{Config, load_config};
use crate::core::{ScanOptions, Scanner, ToolMessages, scan::IgnoreRules};

/// Apply command-line overrides on top of the loaded config.
///
/// List options replace the config value when given at all.
pub fn apply_overrides(mut config: Config, args: &ScanArgs) -> Config {
    if let Some(language) = &args.language {
        config.language = language.clone();
    }
    if let Some(recursive) = args.recursive() {
        config.recursive = recursive;
    }
    if !args.extensions.is_empty() {
        config.extensions = args.extensions.clone();
    }
    if !args.translate_to.is_empty() {
        config.translate_to = args.translate_to.clone();
    }
    config.normalize();
    config
}

fn resolve_root(args: &ScanArgs) -> Result<PathBuf> {
    let root = match &args.output_dir {
        Some(dir) => dir.clone(),
        None => env::current_dir().context("Failed to get current directory")?,
    };
    if !root.is_dir() {
        bail!("Output directory does not exist: {}", root.display());
    }
    Ok(root)
}

pub fn scan(cmd: ScanCommand) -> Result<CommandResult> {
    let args = &cmd.args;
    let root = resolve_root(args)?;

    let loaded = load_config(&root)?;
    let config = apply_overrides(loaded.config, args);
    config.validate()?;

    let ignores = IgnoreRules::new(&root, &config.ignores)
        .context("Invalid glob pattern in 'ignores'")?;

    let options = ScanOptions {
        root: root.clone(),
        marker: config.marker.clone(),
        recursive: config.recursive,
        extensions: config.extensions,
        target_languages: config.translate_to,
        messages: ToolMessages::for_language(&config.language),
        catalog_file: config.catalog_file,
        ignores,
        dry_run: args.dry_run,
        verbose: args.verbose,
    };

    let outcome = Scanner::new(options)
        .run()
        .context("Failed to update translation catalogs")?;

    let error_count = outcome.failure_count();
    let warning_count = outcome.reports().map(|r| r.non_literals.len()).sum();

    Ok(CommandResult {
        summary: CommandSummary::Scan(ScanCommandSummary {
            root,
            config_path: loaded.path,
            marker: config.marker,
            dry_run: args.dry_run,
            outcome,
        }),
        error_count,
        warning_count,
    })
}
