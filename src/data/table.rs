use super::csv::parse_csv;
use super::value::{is_missing, split_segments, CellDisplay};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// An in-memory table of named numeric columns.
///
/// Every row holds exactly one cell per header. Header names are not required
/// to be unique; lookups by name always take the first match.
#[derive(Debug, Clone, Default)]
pub struct Table {
    /// Where the data was loaded from
    name: String,
    headers: Vec<String>,
    rows: Vec<Vec<f64>>,
}

impl Table {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a table and load it from the CSV file at `path`, reported as `name`
    pub fn from_file(name: &str, path: impl AsRef<Path>) -> Result<Self, TableError> {
        let mut table = Self::new();
        table.load_file(name, path)?;
        Ok(table)
    }

    /// Build a table directly from headers and rows.
    ///
    /// Short rows are padded with missing cells and long rows truncated so the
    /// width invariant holds.
    #[cfg(test)]
    pub(crate) fn from_parts(
        name: impl Into<String>,
        headers: Vec<String>,
        rows: Vec<Vec<f64>>,
    ) -> Self {
        let width = headers.len();
        let rows = rows
            .into_iter()
            .map(|mut row| {
                row.resize(width, super::value::MISSING);
                row
            })
            .collect();
        Self {
            name: name.into(),
            headers,
            rows,
        }
    }

    /// Load CSV data from a file. Fails if the table already holds data.
    ///
    /// `name` is the file as the user gave it; the table and any open error
    /// carry it instead of the resolved `path`.
    pub fn load_file(&mut self, name: &str, path: impl AsRef<Path>) -> Result<(), TableError> {
        let path = path.as_ref();
        self.ensure_empty()?;

        let text = std::fs::read_to_string(path).map_err(|source| TableError::Open {
            name: name.to_string(),
            path: path.to_path_buf(),
            source,
        })?;
        self.load_str(name, &text)
    }

    /// Load CSV data from in-memory text
    pub fn load_str(&mut self, name: impl Into<String>, text: &str) -> Result<(), TableError> {
        self.ensure_empty()?;
        let parsed = parse_csv(text)?;

        self.name = name.into();
        self.headers = parsed.headers;
        self.rows = parsed.rows;
        tracing::info!(
            "Loaded table {}: {} columns, {} rows",
            self.name,
            self.headers.len(),
            self.rows.len()
        );
        Ok(())
    }

    fn ensure_empty(&self) -> Result<(), TableError> {
        if self.is_loaded() {
            return Err(TableError::AlreadyLoaded(self.name.clone()));
        }
        Ok(())
    }

    /// Name the table was loaded under
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn rows(&self) -> &[Vec<f64>] {
        &self.rows
    }

    /// Whether any headers or rows are present
    pub fn is_loaded(&self) -> bool {
        !self.headers.is_empty() || !self.rows.is_empty()
    }

    pub fn num_columns(&self) -> usize {
        self.headers.len()
    }

    pub fn num_rows(&self) -> usize {
        self.rows.len()
    }

    /// Index of the first header called `name`
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    #[cfg(test)]
    pub(crate) fn cell(&self, row: usize, col: usize) -> Option<f64> {
        self.rows.get(row).and_then(|r| r.get(col)).copied()
    }

    /// Values of a column in row order, missing cells included
    pub fn column(&self, col: usize) -> Result<impl Iterator<Item = f64> + '_, TableError> {
        self.check_valid_column(col)?;
        Ok(self.rows.iter().map(move |row| row[col]))
    }

    /// Non-missing values of a column in row order
    pub fn column_values(&self, col: usize) -> Result<Vec<f64>, TableError> {
        Ok(self.column(col)?.filter(|v| !is_missing(*v)).collect())
    }

    pub fn check_valid_row(&self, row: usize) -> Result<(), TableError> {
        if row >= self.rows.len() {
            return Err(TableError::RowOutOfRange(row));
        }
        Ok(())
    }

    pub fn check_valid_column(&self, col: usize) -> Result<(), TableError> {
        if col >= self.headers.len() {
            return Err(TableError::ColumnOutOfRange(col));
        }
        Ok(())
    }

    // Display

    /// Headers followed by every row and a blank line
    pub fn print_table<W: Write>(&self, out: &mut W) -> Result<(), TableError> {
        self.print_headers(out)?;
        for row in 0..self.rows.len() {
            self.print_row(row, out)?;
        }
        writeln!(out)?;
        Ok(())
    }

    pub fn print_headers<W: Write>(&self, out: &mut W) -> Result<(), TableError> {
        for h in &self.headers {
            write!(out, "{},", h)?;
        }
        writeln!(out)?;
        Ok(())
    }

    pub fn print_row<W: Write>(&self, row: usize, out: &mut W) -> Result<(), TableError> {
        self.check_valid_row(row)?;
        for &cell in &self.rows[row] {
            write!(out, "{},", CellDisplay(cell))?;
        }
        writeln!(out)?;
        Ok(())
    }

    /// Header then one value per line
    pub fn print_column<W: Write>(&self, col: usize, out: &mut W) -> Result<(), TableError> {
        self.check_valid_column(col)?;
        writeln!(out, "{}", self.headers[col])?;
        for row in &self.rows {
            writeln!(out, "{}", CellDisplay(row[col]))?;
        }
        Ok(())
    }

    /// Print the selected columns side by side, in selection order.
    ///
    /// Nothing is printed unless every selected index is valid.
    pub fn print_columns<W: Write>(
        &self,
        specs: &[ColumnSpec],
        out: &mut W,
    ) -> Result<(), TableError> {
        let mut cols = Vec::new();
        for spec in specs {
            match *spec {
                ColumnSpec::Single(col) => {
                    self.check_valid_column(col)?;
                    cols.push(col);
                }
                ColumnSpec::Range(start, end) => {
                    self.check_valid_column(start)?;
                    self.check_valid_column(end)?;
                    cols.extend(start..=end);
                }
            }
        }

        for &col in &cols {
            write!(out, "{},", self.headers[col])?;
        }
        writeln!(out)?;
        for row in &self.rows {
            for &col in &cols {
                write!(out, "{},", CellDisplay(row[col]))?;
            }
            writeln!(out)?;
        }
        Ok(())
    }

    // Mutation

    pub fn delete_column(&mut self, col: usize) -> Result<(), TableError> {
        self.check_valid_column(col)?;
        self.headers.remove(col);
        for row in &mut self.rows {
            row.remove(col);
        }
        Ok(())
    }

    pub fn delete_row(&mut self, row: usize) -> Result<(), TableError> {
        self.check_valid_row(row)?;
        self.rows.remove(row);
        Ok(())
    }

    /// Append a column; `values` must hold one entry per row
    pub(crate) fn append_column(&mut self, name: impl Into<String>, values: Vec<f64>) {
        debug_assert_eq!(values.len(), self.rows.len());
        self.headers.push(name.into());
        for (row, value) in self.rows.iter_mut().zip(values) {
            row.push(value);
        }
    }

    /// Append a row; `row` must hold one cell per header
    pub(crate) fn push_row(&mut self, row: Vec<f64>) {
        debug_assert_eq!(row.len(), self.headers.len());
        self.rows.push(row);
    }
}

/// A column selection for [`Table::print_columns`]: one index or an
/// inclusive range written `AtB`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnSpec {
    Single(usize),
    Range(usize, usize),
}

impl FromStr for ColumnSpec {
    type Err = ColumnSpecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = split_segments(s, 't').collect();
        let index = |p: &str| {
            p.trim()
                .parse::<usize>()
                .map_err(|_| ColumnSpecError::InvalidIndex(p.to_string()))
        };
        match parts.as_slice() {
            [col] => Ok(ColumnSpec::Single(index(*col)?)),
            [start, end] => Ok(ColumnSpec::Range(index(*start)?, index(*end)?)),
            _ => Err(ColumnSpecError::Malformed(s.to_string())),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ColumnSpecError {
    #[error("Incorrect range format: {0}")]
    Malformed(String),

    #[error("Invalid column index: {0}")]
    InvalidIndex(String),
}

#[derive(Debug, thiserror::Error)]
pub enum TableError {
    #[error("Table already loaded: {0}")]
    AlreadyLoaded(String),

    #[error("Unable to open CSV file: {name}")]
    Open {
        name: String,
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Unable to read CSV data: {0}")]
    Csv(#[from] ::csv::Error),

    #[error("Line {line} has {found} cells but the header has {expected}")]
    RowWidth {
        line: usize,
        found: usize,
        expected: usize,
    },

    #[error("Row out of range: {0}")]
    RowOutOfRange(usize),

    #[error("Col out of range: {0}")]
    ColumnOutOfRange(usize),

    #[error("Column not found: {0}")]
    ColumnNotFound(String),

    #[error("No main table data loaded")]
    NoData,

    #[error("Output error: {0}")]
    Io(#[from] std::io::Error),
}
