//! Batch and interactive front ends over [`run_command`].

use crate::command::{run_command, Outcome};
use crate::config::Config;
use crate::data::Table;
use std::io::{self, BufRead, Write};

pub const HELP: &str = "
                    CSV TOOL
Load and query tables of numerical data from CSV files.
The numerical data is zero-indexed, excluding the column headers.
Commands are case-insensitive and are executed sequentially.

Separate commands by spaces and parameters by the '-' symbol.
e.g. \"readcsv-data1.csv innerjoin-data2.csv-ID printtable\"

These are all available operations:
  READCSV         - Read in CSV data from file
                    readcsv-[filename.csv]
  PRINTTABLE      - Prints the table headers and data.
                    printtable
  PRINTHEADERS    - Prints the table headers.
                    printheaders
  PRINTROW        - Prints the row number provided.
                    printrow-#
  PRINTCOLUMN     - Prints the column number provided.
                    printcolumn-#
  PRINTCOLUMNS    - Prints the column numbers and ranges provided.
                    printcolumns-#-#t#-#
  PRINTNUMCOLUMNS - Prints the number of columns of data.
                    printnumcolumns
  PRINTNUMROWS    - Prints the number of rows of data, excluding headers.
                    printnumrows
  DELETECOLUMN    - Deletes a column by number.
                    deletecolumn-#
  DELETEROW       - Deletes a row by number.
                    deleterow-#
  INNERJOIN       - Left joins a second table of CSV data.
                    innerjoin-[filename.csv]-[join column name]
  OUTERJOIN       - Full outer joins a second table of CSV data.
                    outerjoin-[filename.csv]-[join column name]
  AVERAGECOLUMN   - Prints the average of a given column.
                    averagecolumn-#
  MEDIANCOLUMN    - Prints the median of a given column.
                    mediancolumn-#
  MINCOLUMN       - Prints the minimum value of a given column.
                    mincolumn-#
  MAXCOLUMN       - Prints the maximum value of a given column.
                    maxcolumn-#
  SUMCOLUMNS      - Sum two columns and append the result to table.
                    sumcolumns-#-#
  SUBTRACTCOLUMNS - Subtract two columns and append the result to table.
                    subtractcolumns-#-#
  DIVIDECOLUMNS   - Divide two columns and append the result to table.
                    dividecolumns-#-#
  MULTIPLYCOLUMNS - Multiply two columns and append the result to table.
                    multiplycolumns-#-#
  QUIT            - Exits the program.
                    quit

";

/// Result of dispatching one command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Done,
    Failed,
    Quit,
}

/// A session: one table plus the configuration commands run with
#[derive(Debug)]
pub struct Repl {
    table: Table,
    config: Config,
}

impl Repl {
    pub fn new(config: Config) -> Self {
        Self::with_table(Table::new(), config)
    }

    pub fn with_table(table: Table, config: Config) -> Self {
        Self { table, config }
    }

    pub fn table(&self) -> &Table {
        &self.table
    }

    /// Run one command, reporting any error to `out`
    pub fn dispatch<W: Write>(&mut self, arg: &str, out: &mut W) -> io::Result<Status> {
        match run_command(&mut self.table, &self.config, arg, out) {
            Ok(Outcome::Continue) => Ok(Status::Done),
            Ok(Outcome::Quit) => Ok(Status::Quit),
            Err(e) => {
                tracing::debug!("Command '{}' failed: {}", arg, e);
                writeln!(out, "{}", e)?;
                writeln!(out)?;
                Ok(Status::Failed)
            }
        }
    }

    /// Run commands in order. Stops at `quit`, and at the first failure when
    /// the configuration asks for it.
    pub fn run_batch<W, I, S>(&mut self, args: I, out: &mut W) -> io::Result<Status>
    where
        W: Write,
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut status = Status::Done;
        for arg in args {
            match self.dispatch(arg.as_ref(), out)? {
                Status::Quit => return Ok(Status::Quit),
                Status::Failed => {
                    status = Status::Failed;
                    if self.config.stop_on_error {
                        break;
                    }
                }
                Status::Done => {}
            }
        }
        Ok(status)
    }

    /// Read commands line by line until `quit` or end of input.
    ///
    /// `help` prints the command reference; any other line is split on spaces
    /// and run as a batch.
    pub fn run_interactive<R: BufRead, W: Write>(&mut self, input: R, out: &mut W) -> io::Result<()> {
        writeln!(out, "Interactive terminal...")?;
        writeln!(out, "Type \"help\" for options or \"quit\" to exit.")?;
        writeln!(out)?;
        out.flush()?;

        for line in input.lines() {
            let line = line?;
            let line = line.trim();
            if line.eq_ignore_ascii_case("help") {
                write!(out, "{}", HELP)?;
            } else if line.eq_ignore_ascii_case("quit") {
                break;
            } else if self.run_batch(line.split(' ').filter(|s| !s.is_empty()), out)? == Status::Quit {
                break;
            }
            out.flush()?;
        }
        Ok(())
    }
}
