pub mod aggregates;
pub mod arithmetic;
pub mod sort;

pub use aggregates::{create_accumulator, Accumulator, Statistic};
pub use arithmetic::ColumnOp;
pub use sort::quick_sort;
