pub mod executor;
pub mod parser;

pub use executor::{execute_command, Outcome};
pub use parser::{parse_command, Command, CommandKind, JoinKind, ParseError, PARAM_DELIMITER};

use crate::config::Config;
use crate::data::{Table, TableError};
use std::io::Write;

/// Convenience function to parse and execute a single command
pub fn run_command<W: Write>(
    table: &mut Table,
    config: &Config,
    text: &str,
    out: &mut W,
) -> Result<Outcome, CommandError> {
    let command = parse_command(text)?;
    execute_command(table, &command, config, out)
}

#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Table(#[from] TableError),

    #[error("Output error: {0}")]
    Io(#[from] std::io::Error),
}
