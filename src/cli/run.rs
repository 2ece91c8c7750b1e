//! Dispatches to the command handler for the parsed arguments.
//!
//! # Returns
//! - `Ok(CommandResult)` with the command summary and error/warning counts
//! - `Err` if the command cannot run at all (bad config, unwritable catalog)

use super::{
    args::{Arguments, Command},
    commands::{CommandResult, init::init, scan::scan},
};
use anyhow::Result;

pub fn run(Arguments { command }: Arguments) -> Result<CommandResult> {
    match command {
        Some(Command::Scan(cmd)) => scan(cmd),
        Some(Command::Init) => init(),
        None => {
            anyhow::bail!("No command provided. Use --help to see available commands.")
        }
    }
}
