use crate::data::{split_segments, ColumnSpec, ColumnSpecError};
use crate::query::{ColumnOp, Statistic};

/// Separator between a command name and its parameters
pub const PARAM_DELIMITER: char = '-';

/// Every command the tool understands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandKind {
    ReadCsv,
    PrintTable,
    PrintHeaders,
    PrintRow,
    PrintColumn,
    PrintColumns,
    PrintNumColumns,
    PrintNumRows,
    DeleteColumn,
    DeleteRow,
    InnerJoin,
    OuterJoin,
    AverageColumn,
    MedianColumn,
    MinColumn,
    MaxColumn,
    SumColumns,
    SubtractColumns,
    DivideColumns,
    MultiplyColumns,
    Quit,
}

/// Command names, in `CommandKind` declaration order
const COMMANDS: &[(&str, CommandKind)] = &[
    ("READCSV", CommandKind::ReadCsv),
    ("PRINTTABLE", CommandKind::PrintTable),
    ("PRINTHEADERS", CommandKind::PrintHeaders),
    ("PRINTROW", CommandKind::PrintRow),
    ("PRINTCOLUMN", CommandKind::PrintColumn),
    ("PRINTCOLUMNS", CommandKind::PrintColumns),
    ("PRINTNUMCOLUMNS", CommandKind::PrintNumColumns),
    ("PRINTNUMROWS", CommandKind::PrintNumRows),
    ("DELETECOLUMN", CommandKind::DeleteColumn),
    ("DELETEROW", CommandKind::DeleteRow),
    ("INNERJOIN", CommandKind::InnerJoin),
    ("OUTERJOIN", CommandKind::OuterJoin),
    ("AVERAGECOLUMN", CommandKind::AverageColumn),
    ("MEDIANCOLUMN", CommandKind::MedianColumn),
    ("MINCOLUMN", CommandKind::MinColumn),
    ("MAXCOLUMN", CommandKind::MaxColumn),
    ("SUMCOLUMNS", CommandKind::SumColumns),
    ("SUBTRACTCOLUMNS", CommandKind::SubtractColumns),
    ("DIVIDECOLUMNS", CommandKind::DivideColumns),
    ("MULTIPLYCOLUMNS", CommandKind::MultiplyColumns),
    ("QUIT", CommandKind::Quit),
];

impl CommandKind {
    /// Case-insensitive lookup by name
    pub fn lookup(name: &str) -> Option<Self> {
        COMMANDS
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, kind)| *kind)
    }

    pub fn name(&self) -> &'static str {
        COMMANDS[*self as usize].0
    }

    #[cfg(test)]
    fn all() -> impl Iterator<Item = CommandKind> {
        COMMANDS.iter().map(|(_, kind)| *kind)
    }
}

/// Which rows a join keeps
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JoinKind {
    /// Augment existing rows only
    Inner,
    /// Also import rows of the other table that match nothing
    Outer,
}

/// A validated command, ready to execute
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    ReadCsv { path: String },
    PrintTable,
    PrintHeaders,
    PrintRow(usize),
    PrintColumn(usize),
    PrintColumns(Vec<ColumnSpec>),
    PrintNumColumns,
    PrintNumRows,
    DeleteColumn(usize),
    DeleteRow(usize),
    Join {
        kind: JoinKind,
        path: String,
        column: String,
    },
    Statistic { stat: Statistic, column: usize },
    Combine { op: ColumnOp, left: usize, right: usize },
    Quit,
}

impl Command {
    pub fn kind(&self) -> CommandKind {
        match self {
            Command::ReadCsv { .. } => CommandKind::ReadCsv,
            Command::PrintTable => CommandKind::PrintTable,
            Command::PrintHeaders => CommandKind::PrintHeaders,
            Command::PrintRow(_) => CommandKind::PrintRow,
            Command::PrintColumn(_) => CommandKind::PrintColumn,
            Command::PrintColumns(_) => CommandKind::PrintColumns,
            Command::PrintNumColumns => CommandKind::PrintNumColumns,
            Command::PrintNumRows => CommandKind::PrintNumRows,
            Command::DeleteColumn(_) => CommandKind::DeleteColumn,
            Command::DeleteRow(_) => CommandKind::DeleteRow,
            Command::Join { kind: JoinKind::Inner, .. } => CommandKind::InnerJoin,
            Command::Join { kind: JoinKind::Outer, .. } => CommandKind::OuterJoin,
            Command::Statistic { stat, .. } => match stat {
                Statistic::Average => CommandKind::AverageColumn,
                Statistic::Median => CommandKind::MedianColumn,
                Statistic::Min => CommandKind::MinColumn,
                Statistic::Max => CommandKind::MaxColumn,
            },
            Command::Combine { op, .. } => match op {
                ColumnOp::Sum => CommandKind::SumColumns,
                ColumnOp::Subtract => CommandKind::SubtractColumns,
                ColumnOp::Divide => CommandKind::DivideColumns,
                ColumnOp::Multiply => CommandKind::MultiplyColumns,
            },
            Command::Quit => CommandKind::Quit,
        }
    }
}

/// Parse one command such as `printrow-3` or `innerjoin-other.csv-ID`.
///
/// The name and parameters are separated by `-`; empty segments are ignored.
pub fn parse_command(arg: &str) -> Result<Command, ParseError> {
    let params: Vec<&str> = split_segments(arg.trim(), PARAM_DELIMITER).collect();
    let (name, args) = match params.split_first() {
        Some((name, args)) => (*name, args),
        None => return Err(ParseError::EmptyCommand),
    };
    let kind = CommandKind::lookup(name).ok_or_else(|| ParseError::UnknownCommand(name.to_string()))?;

    let expect = |n: usize| {
        if args.len() == n {
            Ok(())
        } else {
            Err(ParseError::BadParameters {
                command: kind.name(),
                expected: n,
                found: args.len(),
            })
        }
    };

    let command = match kind {
        CommandKind::ReadCsv => {
            expect(1)?;
            Command::ReadCsv {
                path: args[0].to_string(),
            }
        }
        CommandKind::PrintTable => {
            expect(0)?;
            Command::PrintTable
        }
        CommandKind::PrintHeaders => {
            expect(0)?;
            Command::PrintHeaders
        }
        CommandKind::PrintRow => {
            expect(1)?;
            Command::PrintRow(parse_index(args[0])?)
        }
        CommandKind::PrintColumn => {
            expect(1)?;
            Command::PrintColumn(parse_index(args[0])?)
        }
        CommandKind::PrintColumns => {
            if args.is_empty() {
                return Err(ParseError::BadParameters {
                    command: kind.name(),
                    expected: 1,
                    found: 0,
                });
            }
            let specs = args
                .iter()
                .map(|s| s.parse::<ColumnSpec>())
                .collect::<Result<Vec<_>, _>>()?;
            Command::PrintColumns(specs)
        }
        CommandKind::PrintNumColumns => {
            expect(0)?;
            Command::PrintNumColumns
        }
        CommandKind::PrintNumRows => {
            expect(0)?;
            Command::PrintNumRows
        }
        CommandKind::DeleteColumn => {
            expect(1)?;
            Command::DeleteColumn(parse_index(args[0])?)
        }
        CommandKind::DeleteRow => {
            expect(1)?;
            Command::DeleteRow(parse_index(args[0])?)
        }
        CommandKind::InnerJoin | CommandKind::OuterJoin => {
            expect(2)?;
            Command::Join {
                kind: if kind == CommandKind::InnerJoin {
                    JoinKind::Inner
                } else {
                    JoinKind::Outer
                },
                path: args[0].to_string(),
                column: args[1].to_string(),
            }
        }
        CommandKind::AverageColumn
        | CommandKind::MedianColumn
        | CommandKind::MinColumn
        | CommandKind::MaxColumn => {
            expect(1)?;
            let stat = match kind {
                CommandKind::AverageColumn => Statistic::Average,
                CommandKind::MedianColumn => Statistic::Median,
                CommandKind::MinColumn => Statistic::Min,
                _ => Statistic::Max,
            };
            Command::Statistic {
                stat,
                column: parse_index(args[0])?,
            }
        }
        CommandKind::SumColumns
        | CommandKind::SubtractColumns
        | CommandKind::DivideColumns
        | CommandKind::MultiplyColumns => {
            expect(2)?;
            let op = match kind {
                CommandKind::SumColumns => ColumnOp::Sum,
                CommandKind::SubtractColumns => ColumnOp::Subtract,
                CommandKind::DivideColumns => ColumnOp::Divide,
                _ => ColumnOp::Multiply,
            };
            Command::Combine {
                op,
                left: parse_index(args[0])?,
                right: parse_index(args[1])?,
            }
        }
        CommandKind::Quit => {
            expect(0)?;
            Command::Quit
        }
    };

    Ok(command)
}

fn parse_index(text: &str) -> Result<usize, ParseError> {
    text.trim()
        .parse::<usize>()
        .map_err(|_| ParseError::InvalidIndex(text.to_string()))
}

#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("Empty command")]
    EmptyCommand,

    #[error("Unable to parse command: {0}")]
    UnknownCommand(String),

    #[error("Bad parameters for {command}: expected {expected}, got {found}. Check help.")]
    BadParameters {
        command: &'static str,
        expected: usize,
        found: usize,
    },

    #[error("Invalid index: {0}")]
    InvalidIndex(String),

    #[error(transparent)]
    ColumnSpec(#[from] ColumnSpecError),
}
