/// Dispatches to the appropriate command handler based on the parsed arguments.
///
/// # Returns
/// - `Ok(CommandResult)` with error/warning counts and exit behavior
/// - `Err` if the command fails (e.g., config not found, unreadable catalog)
use anyhow::Result;

use super::{
    args::{Arguments, Command},
    commands::{
        CommandResult, analyse::analyse, convert::convert, duplicates::duplicates, init::init,
        locate::locate, write::write,
    },
};

pub fn run(Arguments { command }: Arguments) -> Result<CommandResult> {
    match command {
        Some(Command::Analyse(cmd)) => analyse(cmd),
        Some(Command::Create(cmd)) => write(cmd, false),
        Some(Command::Change(cmd)) => write(cmd, true),
        Some(Command::Locate(cmd)) => locate(cmd),
        Some(Command::Convert(cmd)) => convert(cmd),
        Some(Command::Duplicates(cmd)) => duplicates(cmd),
        Some(Command::Init) => init(),
        Some(Command::Serve) => {
            // Serve command is handled in main.rs before calling run()
            anyhow::bail!("Serve command should be handled before run()")
        }
        None => {
            anyhow::bail!("No command provided. Use --help to see available commands.")
        }
    }
}
