//! csvtool: In-Memory Numeric Table Engine
//!
//! Loads a rectangular table of numbers from a CSV file and runs a small
//! command language over it to inspect, mutate, join and summarise the data.
//!
//! # Features
//!
//! - **CSV Loading**: header line plus numeric rows, empty cells are missing
//! - **Printing**: whole table, headers, single rows, columns and column ranges
//! - **Mutation**: delete rows and columns, derive columns with `+ - / *`
//! - **Joins**: left-augmenting inner join and row-importing outer join by
//!   column name
//! - **Statistics**: MIN, MAX, AVERAGE and MEDIAN that skip missing cells
//!
//! # Example
//!
//! ```no_run
//! use csvtool::command::run_command;
//! use csvtool::{Config, Table};
//!
//! let config = Config::default();
//! let mut table = Table::new();
//! let mut out = std::io::stdout();
//!
//! run_command(&mut table, &config, "readcsv-data1.csv", &mut out).unwrap();
//! run_command(&mut table, &config, "innerjoin-data2.csv-ID", &mut out).unwrap();
//! run_command(&mut table, &config, "mediancolumn-1", &mut out).unwrap();
//! ```

pub mod command;
pub mod config;
pub mod data;
pub mod query;
pub mod repl;

// Re-export commonly used types
pub use command::{run_command, Command, CommandError, Outcome, ParseError};
pub use config::Config;
pub use data::{ColumnSpec, Table, TableError};
pub use query::{ColumnOp, Statistic};
pub use repl::Repl;
