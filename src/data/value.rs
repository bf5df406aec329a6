use std::fmt;

/// Sentinel stored in a cell that has no value
pub const MISSING: f64 = f64::NAN;

/// Whether a cell holds the missing sentinel
#[inline]
pub fn is_missing(value: f64) -> bool {
    value.is_nan()
}

/// Parse a single CSV cell.
///
/// Empty cells are missing. Returns `None` when the text is not a number so the
/// caller can decide how to report it.
pub fn parse_cell(text: &str) -> Option<f64> {
    let text = text.trim();
    if text.is_empty() {
        return Some(MISSING);
    }
    text.parse::<f64>().ok()
}

/// Split on `delim`, dropping empty segments.
///
/// Used for header lines, command parameters and column ranges alike.
pub fn split_segments(text: &str, delim: char) -> impl Iterator<Item = &str> {
    text.split(delim).filter(|s| !s.is_empty())
}

/// Hash key for join matching.
///
/// Two keys are equal exactly when the cells compare equal with `==`:
/// `-0.0` folds into `0.0` and missing cells have no key.
pub fn key_bits(value: f64) -> Option<u64> {
    if is_missing(value) {
        None
    } else if value == 0.0 {
        Some(0.0f64.to_bits())
    } else {
        Some(value.to_bits())
    }
}

/// Renders a cell the way the table printers show it
#[derive(Debug, Clone, Copy)]
pub struct CellDisplay(pub f64);

impl fmt::Display for CellDisplay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let v = self.0;
        if is_missing(v) {
            write!(f, "nan")
        } else if v.is_infinite() {
            write!(f, "{}", if v > 0.0 { "inf" } else { "-inf" })
        } else {
            write!(f, "{}", v)
        }
    }
}
