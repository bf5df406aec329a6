use crate::data::{is_missing, Table, TableError, MISSING};

/// Element-wise operation between two columns
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnOp {
    Sum,
    Subtract,
    Divide,
    Multiply,
}

impl ColumnOp {
    pub fn symbol(&self) -> char {
        match self {
            ColumnOp::Sum => '+',
            ColumnOp::Subtract => '-',
            ColumnOp::Divide => '/',
            ColumnOp::Multiply => '*',
        }
    }

    /// Apply to two cells. A missing operand gives a missing result; division
    /// by zero follows IEEE rules.
    pub fn apply(&self, left: f64, right: f64) -> f64 {
        if is_missing(left) || is_missing(right) {
            return MISSING;
        }
        match self {
            ColumnOp::Sum => left + right,
            ColumnOp::Subtract => left - right,
            ColumnOp::Divide => left / right,
            ColumnOp::Multiply => left * right,
        }
    }

    /// Header of the derived column, e.g. `A_+_B`
    pub fn column_name(&self, left: &str, right: &str) -> String {
        format!("{}_{}_{}", left, self.symbol(), right)
    }
}

impl Table {
    /// Append `col1 op col2` as a new column and return its index
    pub fn combine_columns(
        &mut self,
        col1: usize,
        col2: usize,
        op: ColumnOp,
    ) -> Result<usize, TableError> {
        self.check_valid_column(col1)?;
        self.check_valid_column(col2)?;

        let name = op.column_name(&self.headers()[col1], &self.headers()[col2]);
        let values = self
            .rows()
            .iter()
            .map(|row| op.apply(row[col1], row[col2]))
            .collect();
        self.append_column(name, values);
        Ok(self.num_columns() - 1)
    }

    pub fn sum_columns(&mut self, col1: usize, col2: usize) -> Result<usize, TableError> {
        self.combine_columns(col1, col2, ColumnOp::Sum)
    }

    pub fn subtract_columns(&mut self, col1: usize, col2: usize) -> Result<usize, TableError> {
        self.combine_columns(col1, col2, ColumnOp::Subtract)
    }

    pub fn divide_columns(&mut self, col1: usize, col2: usize) -> Result<usize, TableError> {
        self.combine_columns(col1, col2, ColumnOp::Divide)
    }

    pub fn multiply_columns(&mut self, col1: usize, col2: usize) -> Result<usize, TableError> {
        self.combine_columns(col1, col2, ColumnOp::Multiply)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> Table {
        let mut t = Table::new();
        t.load_str("math", "A,B\n6,3\n,2\n5,0\n-4,\n").unwrap();
        t
    }

    #[test]
    fn test_column_names() {
        let mut t = table();
        t.sum_columns(0, 1).unwrap();
        t.subtract_columns(0, 1).unwrap();
        t.divide_columns(0, 1).unwrap();
        t.multiply_columns(0, 1).unwrap();
        assert_eq!(t.headers(), &["A", "B", "A_+_B", "A_-_B", "A_/_B", "A_*_B"]);
        assert!(t.rows().iter().all(|r| r.len() == 6));
    }

    #[test]
    fn test_values_and_missing_propagation() {
        let mut t = table();
        let col = t.multiply_columns(0, 1).unwrap();
        assert_eq!(col, 2);
        assert_eq!(t.cell(0, col), Some(18.0));
        assert!(t.cell(1, col).unwrap().is_nan());
        assert_eq!(t.cell(2, col), Some(0.0));
        assert!(t.cell(3, col).unwrap().is_nan());
    }

    #[test]
    fn test_divide_by_zero() {
        let mut t = table();
        let col = t.divide_columns(0, 1).unwrap();
        assert_eq!(t.cell(0, col), Some(2.0));
        assert_eq!(t.cell(2, col), Some(f64::INFINITY));

        assert!(ColumnOp::Divide.apply(0.0, 0.0).is_nan());
    }

    #[test]
    fn test_sum_then_subtract_restores_column() {
        let mut t = table();
        let sum = t.sum_columns(0, 1).unwrap();
        let restored = t.subtract_columns(sum, 1).unwrap();
        for row in t.rows() {
            if !row[0].is_nan() && !row[1].is_nan() {
                assert_eq!(row[restored], row[0]);
            }
        }
    }

    #[test]
    fn test_invalid_columns_leave_table_unchanged() {
        let mut t = table();
        assert!(matches!(
            t.sum_columns(0, 2),
            Err(TableError::ColumnOutOfRange(2))
        ));
        assert!(t.divide_columns(5, 0).is_err());
        assert_eq!(t.num_columns(), 2);
    }
}
