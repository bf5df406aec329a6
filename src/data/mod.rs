pub mod csv;
pub mod join;
pub mod table;
pub mod value;

pub use self::csv::{parse_csv, ParsedCsv};
pub use table::{ColumnSpec, ColumnSpecError, Table, TableError};
pub use value::{is_missing, key_bits, parse_cell, split_segments, CellDisplay, MISSING};
