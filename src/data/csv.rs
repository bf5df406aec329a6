use super::table::TableError;
use super::value::{parse_cell, MISSING};
use csv::{ReaderBuilder, StringRecord};

/// Headers and rows read from CSV text
#[derive(Debug, Clone, Default)]
pub struct ParsedCsv {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<f64>>,
}

/// Parse CSV text into headers and numeric rows.
///
/// The first record holds the headers; empty header fields are dropped. Every
/// later non-blank record is a row: empty cells are missing, short rows are
/// padded with missing cells, and a row wider than the header is rejected.
/// Cells that are not numbers load as missing. Quotes have no special meaning.
pub fn parse_csv(text: &str) -> Result<ParsedCsv, TableError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .quoting(false)
        .from_reader(text.as_bytes());

    let headers: Vec<String> = reader
        .headers()?
        .iter()
        .filter(|h| !h.is_empty())
        .map(String::from)
        .collect();
    let width = headers.len();

    let mut rows = Vec::new();
    let mut record = StringRecord::new();
    while reader.read_record(&mut record)? {
        if is_blank(&record) {
            continue;
        }
        let line = record.position().map_or(0, |p| p.line() as usize);

        let mut cells: Vec<&str> = record.iter().collect();
        if cells.last().is_some_and(|c| c.is_empty()) {
            cells.pop();
        }
        if cells.len() > width {
            return Err(TableError::RowWidth {
                line,
                found: cells.len(),
                expected: width,
            });
        }

        let mut row = Vec::with_capacity(width);
        for (col, cell) in cells.iter().enumerate() {
            match parse_cell(cell) {
                Some(v) => row.push(v),
                None => {
                    tracing::warn!(
                        "Line {} column {}: '{}' is not a number, loading as missing",
                        line,
                        col,
                        cell
                    );
                    row.push(MISSING);
                }
            }
        }
        row.resize(width, MISSING);
        rows.push(row);
    }

    Ok(ParsedCsv { headers, rows })
}

/// A record holding nothing but whitespace
fn is_blank(record: &StringRecord) -> bool {
    record.len() == 1 && record[0].trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_basic() {
        let parsed = parse_csv("A,B,C\n1,2,3\n4,5,6\n").unwrap();
        assert_eq!(parsed.headers, vec!["A", "B", "C"]);
        assert_eq!(parsed.rows, vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]);
    }

    #[test]
    fn test_empty_header_segments_dropped() {
        let parsed = parse_csv("A,,B,\n1,2\n").unwrap();
        assert_eq!(parsed.headers, vec!["A", "B"]);
    }

    #[test]
    fn test_empty_cells_are_missing() {
        let parsed = parse_csv("A,B,C\n1,,3\n").unwrap();
        let row = &parsed.rows[0];
        assert_eq!(row[0], 1.0);
        assert!(row[1].is_nan());
        assert_eq!(row[2], 3.0);
    }

    #[test]
    fn test_trailing_comma_and_short_rows_padded() {
        let parsed = parse_csv("A,B\n1,2\n3,\n").unwrap();
        assert_eq!(parsed.rows.len(), 2);
        assert_eq!(parsed.rows[1].len(), 2);
        assert_eq!(parsed.rows[1][0], 3.0);
        assert!(parsed.rows[1][1].is_nan());
    }

    #[test]
    fn test_crlf_and_blank_lines() {
        let parsed = parse_csv("A,B\r\n1,2\r\n\r\n3,4\r\n").unwrap();
        assert_eq!(parsed.headers, vec!["A", "B"]);
        assert_eq!(parsed.rows, vec![vec![1.0, 2.0], vec![3.0, 4.0]]);
    }

    #[test]
    fn test_wide_row_rejected() {
        let err = parse_csv("A,B\n1,2\n1,2,3\n").unwrap_err();
        assert!(matches!(
            err,
            TableError::RowWidth {
                line: 3,
                found: 3,
                expected: 2
            }
        ));
    }

    #[test]
    fn test_bad_number_loads_as_missing() {
        let parsed = parse_csv("A,B\nx,2\n").unwrap();
        assert!(parsed.rows[0][0].is_nan());
        assert_eq!(parsed.rows[0][1], 2.0);
    }

    #[test]
    fn test_empty_text() {
        let parsed = parse_csv("").unwrap();
        assert!(parsed.headers.is_empty());
        assert!(parsed.rows.is_empty());
    }

    #[test]
    fn test_whitespace_lines_skipped() {
        let parsed = parse_csv("A,B\n1,2\n   \n3,4\n").unwrap();
        assert_eq!(parsed.rows, vec![vec![1.0, 2.0], vec![3.0, 4.0]]);
    }

    #[test]
    fn test_quotes_are_not_special() {
        let parsed = parse_csv("A,\"B\nx\"\n\"1\",2\n").unwrap();
        assert_eq!(parsed.headers, vec!["A", "\"B"]);
        assert_eq!(parsed.rows.len(), 2);
        assert!(parsed.rows[1][0].is_nan());
        assert_eq!(parsed.rows[1][1], 2.0);
    }
}
