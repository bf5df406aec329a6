use super::sort::quick_sort;
use crate::data::{is_missing, Table, TableError};

/// Accumulator trait for column statistics
pub trait Accumulator {
    /// Add a value to the accumulator; missing values are ignored
    fn accumulate(&mut self, value: f64);

    /// Get the final result, `None` when nothing was accumulated
    fn result(&self) -> Option<f64>;
}

/// Statistics that reduce a column to a single value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Statistic {
    Min,
    Max,
    Average,
    Median,
}

impl Statistic {
    pub fn name(&self) -> &'static str {
        match self {
            Statistic::Min => "min",
            Statistic::Max => "max",
            Statistic::Average => "average",
            Statistic::Median => "median",
        }
    }
}

/// MIN(column)
#[derive(Debug, Clone, Default)]
pub struct MinAccumulator {
    min: Option<f64>,
}

impl MinAccumulator {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Accumulator for MinAccumulator {
    fn accumulate(&mut self, value: f64) {
        if is_missing(value) {
            return;
        }
        match self.min {
            Some(current) if value >= current => {}
            _ => self.min = Some(value),
        }
    }

    fn result(&self) -> Option<f64> {
        self.min
    }
}

/// MAX(column)
#[derive(Debug, Clone, Default)]
pub struct MaxAccumulator {
    max: Option<f64>,
}

impl MaxAccumulator {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Accumulator for MaxAccumulator {
    fn accumulate(&mut self, value: f64) {
        if is_missing(value) {
            return;
        }
        match self.max {
            Some(current) if value <= current => {}
            _ => self.max = Some(value),
        }
    }

    fn result(&self) -> Option<f64> {
        self.max
    }
}

/// AVG(column)
#[derive(Debug, Clone, Default)]
pub struct AvgAccumulator {
    sum: f64,
    count: usize,
}

impl AvgAccumulator {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Accumulator for AvgAccumulator {
    fn accumulate(&mut self, value: f64) {
        if is_missing(value) {
            return;
        }
        self.sum += value;
        self.count += 1;
    }

    fn result(&self) -> Option<f64> {
        if self.count > 0 {
            Some(self.sum / self.count as f64)
        } else {
            None
        }
    }
}

/// MEDIAN(column) - exact, keeps every value
#[derive(Debug, Clone, Default)]
pub struct MedianAccumulator {
    values: Vec<f64>,
}

impl MedianAccumulator {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Accumulator for MedianAccumulator {
    fn accumulate(&mut self, value: f64) {
        if !is_missing(value) {
            self.values.push(value);
        }
    }

    fn result(&self) -> Option<f64> {
        if self.values.is_empty() {
            return None;
        }

        let mut sorted = self.values.clone();
        quick_sort(&mut sorted);

        let mid = sorted.len() / 2;
        if sorted.len() % 2 == 0 {
            Some((sorted[mid - 1] + sorted[mid]) / 2.0)
        } else {
            Some(sorted[mid])
        }
    }
}

pub fn create_accumulator(stat: Statistic) -> Box<dyn Accumulator> {
    match stat {
        Statistic::Min => Box::new(MinAccumulator::new()),
        Statistic::Max => Box::new(MaxAccumulator::new()),
        Statistic::Average => Box::new(AvgAccumulator::new()),
        Statistic::Median => Box::new(MedianAccumulator::new()),
    }
}

impl Table {
    /// Reduce a column, skipping missing cells.
    ///
    /// Returns `Ok(None)` when the column holds no values.
    pub fn statistic(&self, col: usize, stat: Statistic) -> Result<Option<f64>, TableError> {
        let mut acc = create_accumulator(stat);
        for value in self.column(col)? {
            acc.accumulate(value);
        }
        Ok(acc.result())
    }

    pub fn min(&self, col: usize) -> Result<Option<f64>, TableError> {
        self.statistic(col, Statistic::Min)
    }

    pub fn max(&self, col: usize) -> Result<Option<f64>, TableError> {
        self.statistic(col, Statistic::Max)
    }

    pub fn average(&self, col: usize) -> Result<Option<f64>, TableError> {
        self.statistic(col, Statistic::Average)
    }

    pub fn median(&self, col: usize) -> Result<Option<f64>, TableError> {
        self.statistic(col, Statistic::Median)
    }
}
