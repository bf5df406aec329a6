//! Joining a second table into this one on a shared column name.
//!
//! Both joins augment the rows already present with the columns of the other
//! table that this table lacks. The outer join additionally imports the other
//! table's rows whose key matches nothing here.

use super::table::{Table, TableError};
use super::value::{key_bits, MISSING};
use fxhash::{FxHashMap, FxHashSet};

impl Table {
    /// Locate `name` in both tables, first match on each side
    pub fn find_matching_column(
        &self,
        other: &Table,
        name: &str,
    ) -> Result<(usize, usize), TableError> {
        match (self.column_index(name), other.column_index(name)) {
            (Some(this_col), Some(other_col)) => Ok((this_col, other_col)),
            _ => Err(TableError::ColumnNotFound(name.to_string())),
        }
    }

    /// Append every column of `other` whose name does not appear here.
    ///
    /// Each row takes its values from the last row of `other` with an equal
    /// key; rows without a match get missing cells.
    pub(crate) fn join_missing_columns(&mut self, other: &Table, this_col: usize, other_col: usize) {
        let new_cols: Vec<usize> = other
            .headers()
            .iter()
            .enumerate()
            .filter(|(_, h)| !self.headers().contains(*h))
            .map(|(i, _)| i)
            .collect();
        if new_cols.is_empty() {
            return;
        }

        // later rows overwrite earlier ones
        let mut other_rows: FxHashMap<u64, usize> = FxHashMap::default();
        for (i, row) in other.rows().iter().enumerate() {
            if let Some(key) = key_bits(row[other_col]) {
                other_rows.insert(key, i);
            }
        }

        let matches: Vec<Option<usize>> = self
            .rows()
            .iter()
            .map(|row| key_bits(row[this_col]).and_then(|k| other_rows.get(&k).copied()))
            .collect();

        for col in new_cols {
            let values = matches
                .iter()
                .map(|m| m.map_or(MISSING, |i| other.rows()[i][col]))
                .collect();
            self.append_column(other.headers()[col].clone(), values);
        }
    }

    /// Left-augment this table with the columns of `other`.
    ///
    /// Row count never changes.
    pub fn inner_join(&mut self, other: &Table, name: &str) -> Result<(), TableError> {
        let (this_col, other_col) = self.prepare_join(other, name)?;
        self.join_missing_columns(other, this_col, other_col);
        tracing::info!(
            "Inner join of {} on {}: {} columns",
            other.name(),
            name,
            self.num_columns()
        );
        Ok(())
    }

    /// Inner join, then append the rows of `other` whose key has no match
    /// here, filling the columns both tables share by name.
    pub fn outer_join(&mut self, other: &Table, name: &str) -> Result<(), TableError> {
        let (this_col, other_col) = self.prepare_join(other, name)?;
        self.join_missing_columns(other, this_col, other_col);

        let keys: FxHashSet<u64> = self
            .rows()
            .iter()
            .filter_map(|row| key_bits(row[this_col]))
            .collect();
        let unmatched: Vec<&Vec<f64>> = other
            .rows()
            .iter()
            .filter(|row| key_bits(row[other_col]).map_or(true, |k| !keys.contains(&k)))
            .collect();
        if unmatched.is_empty() {
            return Ok(());
        }

        // last header of the same name in `other` wins
        let source_cols: Vec<Option<usize>> = self
            .headers()
            .iter()
            .map(|h| other.headers().iter().rposition(|o| o == h))
            .collect();

        let added = unmatched.len();
        for other_row in unmatched {
            let row = source_cols
                .iter()
                .map(|src| src.map_or(MISSING, |c| other_row[c]))
                .collect();
            self.push_row(row);
        }
        tracing::info!(
            "Outer join of {} on {}: imported {} rows",
            other.name(),
            name,
            added
        );
        Ok(())
    }

    fn prepare_join(&self, other: &Table, name: &str) -> Result<(usize, usize), TableError> {
        if self.num_columns() == 0 || self.num_rows() == 0 {
            return Err(TableError::NoData);
        }
        self.find_matching_column(other, name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(name: &str, csv: &str) -> Table {
        let mut t = Table::new();
        t.load_str(name, csv).unwrap();
        t
    }

    fn left() -> Table {
        table("left", "ID,X\n1,10\n2,20\n")
    }

    fn right() -> Table {
        table("right", "ID,Y\n2,99\n3,88\n")
    }

    #[test]
    fn test_inner_join() {
        let mut t = left();
        t.inner_join(&right(), "ID").unwrap();

        assert_eq!(t.headers(), &["ID", "X", "Y"]);
        assert_eq!(t.num_rows(), 2);
        assert_eq!(&t.rows()[0][..2], &[1.0, 10.0]);
        assert!(t.rows()[0][2].is_nan());
        assert_eq!(t.rows()[1], vec![2.0, 20.0, 99.0]);
    }

    #[test]
    fn test_outer_join() {
        let mut t = left();
        t.outer_join(&right(), "ID").unwrap();

        assert_eq!(t.headers(), &["ID", "X", "Y"]);
        assert_eq!(t.num_rows(), 3);
        assert_eq!(t.rows()[1], vec![2.0, 20.0, 99.0]);
        let imported = &t.rows()[2];
        assert_eq!(imported[0], 3.0);
        assert!(imported[1].is_nan());
        assert_eq!(imported[2], 88.0);
    }

    #[test]
    fn test_outer_join_row_count() {
        let mut t = table("l", "K,A\n1,1\n2,2\n3,3\n");
        let other = table("r", "K,B\n3,0\n4,0\n5,0\n4,1\n");
        t.outer_join(&other, "K").unwrap();
        // keys 4, 5 and the second 4 are unmatched
        assert_eq!(t.num_rows(), 6);
    }

    #[test]
    fn test_last_match_wins() {
        let mut t = left();
        let other = table("dups", "ID,Y\n2,1\n2,2\n2,3\n");
        t.inner_join(&other, "ID").unwrap();
        assert_eq!(t.rows()[1][2], 3.0);
    }

    #[test]
    fn test_join_column_not_found() {
        let mut t = left();
        let err = t.inner_join(&right(), "Nope").unwrap_err();
        assert!(matches!(err, TableError::ColumnNotFound(ref n) if n == "Nope"));

        let other = table("other", "id,Y\n1,1\n");
        assert!(t.outer_join(&other, "ID").is_err());
        assert_eq!(t.num_columns(), 2);
    }

    #[test]
    fn test_join_requires_data() {
        let mut t = Table::new();
        assert!(matches!(t.inner_join(&right(), "ID"), Err(TableError::NoData)));

        let mut headers_only = table("h", "ID,X\n");
        assert!(matches!(
            headers_only.outer_join(&right(), "ID"),
            Err(TableError::NoData)
        ));
    }

    #[test]
    fn test_no_new_columns_is_noop() {
        let mut t = left();
        let other = table("same", "X,ID\n5,1\n");
        t.inner_join(&other, "ID").unwrap();
        assert_eq!(t.num_columns(), 2);
        assert_eq!(t.num_rows(), 2);
    }

    #[test]
    fn test_missing_keys_never_match() {
        let mut t = table("l", "ID,X\n,10\n2,20\n");
        let other = table("r", "ID,Y\n,5\n");
        t.outer_join(&other, "ID").unwrap();

        assert!(t.rows()[0][2].is_nan());
        // the missing-key row of `other` is imported as unmatched
        assert_eq!(t.num_rows(), 3);
        assert_eq!(t.rows()[2][2], 5.0);
    }

    #[test]
    fn test_outer_join_fills_shared_columns() {
        let mut t = table("l", "ID,X,Y\n1,1,1\n");
        let other = table("r", "Y,ID,Z\n7,9,8\n");
        t.outer_join(&other, "ID").unwrap();

        assert_eq!(t.headers(), &["ID", "X", "Y", "Z"]);
        let imported = &t.rows()[1];
        assert_eq!(imported[0], 9.0);
        assert!(imported[1].is_nan());
        assert_eq!(imported[2], 7.0);
        assert_eq!(imported[3], 8.0);
    }

    #[test]
    fn test_negative_zero_matches_zero() {
        let mut t = table("l", "ID,X\n0,1\n");
        let other = table("r", "ID,Y\n-0,2\n");
        t.outer_join(&other, "ID").unwrap();
        assert_eq!(t.num_rows(), 1);
        assert_eq!(t.rows()[0][2], 2.0);
    }
}
