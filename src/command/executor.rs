use super::parser::{Command, JoinKind};
use super::CommandError;
use crate::config::Config;
use crate::data::{CellDisplay, Table};
use std::io::Write;

/// What the caller should do after a command ran
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Continue,
    Quit,
}

/// Run a parsed command against `table`, writing any output to `out`
pub fn execute_command<W: Write>(
    table: &mut Table,
    command: &Command,
    config: &Config,
    out: &mut W,
) -> Result<Outcome, CommandError> {
    tracing::debug!("Executing {}", command.kind().name());

    match command {
        Command::ReadCsv { path } => table.load_file(path, config.resolve(path))?,
        Command::PrintTable => table.print_table(out)?,
        Command::PrintHeaders => table.print_headers(out)?,
        Command::PrintRow(row) => table.print_row(*row, out)?,
        Command::PrintColumn(col) => table.print_column(*col, out)?,
        Command::PrintColumns(specs) => table.print_columns(specs, out)?,
        Command::PrintNumColumns => writeln!(out, "{}", table.num_columns())?,
        Command::PrintNumRows => writeln!(out, "{}", table.num_rows())?,
        Command::DeleteColumn(col) => table.delete_column(*col)?,
        Command::DeleteRow(row) => table.delete_row(*row)?,
        Command::Join { kind, path, column } => {
            let other = Table::from_file(path, config.resolve(path))?;
            match kind {
                JoinKind::Inner => table.inner_join(&other, column)?,
                JoinKind::Outer => table.outer_join(&other, column)?,
            }
        }
        Command::Statistic { stat, column } => {
            if let Some(value) = table.statistic(*column, *stat)? {
                writeln!(out, "{}", CellDisplay(value))?;
            } else {
                tracing::debug!("No values in column {} for {}", column, stat.name());
            }
        }
        Command::Combine { op, left, right } => {
            let col = table.combine_columns(*left, *right, *op)?;
            tracing::debug!("Appended column {} ({})", col, table.headers()[col]);
        }
        Command::Quit => return Ok(Outcome::Quit),
    }

    Ok(Outcome::Continue)
}
