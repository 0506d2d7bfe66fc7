use crate::columns::assign_columns;
use crate::times::Range;
use itertools::Itertools;
use std::cmp::Ordering;
use std::fmt::Debug;

/// The result of laying out a set of ranges: the ranges sorted by start,
/// and the column for each of them.
pub struct Layout<T> {
    ranges: Vec<Range<T>>,
    columns: Vec<usize>,
    column_count: usize,
}

impl<T: PartialOrd + Debug> Layout<T> {
    /// Sort the ranges by their start, then compute their columns.
    /// Ranges with the same start keep the order they were given in.
    #[must_use]
    pub fn new(ranges: Vec<Range<T>>) -> Self {
        for r in ranges.iter().filter(|r| r.is_inverted()) {
            log::warn!("range ends before it starts: {:?}", r);
        }

        let ranges: Vec<Range<T>> = ranges
            .into_iter()
            .sorted_by(|a, b| {
                a.start.partial_cmp(&b.start).unwrap_or(Ordering::Equal)
            })
            .collect();

        let columns = assign_columns(&ranges);
        let column_count = columns.iter().max().map_or(0, |c| c + 1);

        log::debug!(
            "laid out {} ranges in {} columns",
            ranges.len(),
            column_count
        );

        Layout {
            ranges,
            columns,
            column_count,
        }
    }
}

impl<T> Layout<T> {
    /// The ranges, sorted by start
    #[must_use]
    pub fn ranges(&self) -> &[Range<T>] {
        &self.ranges
    }

    /// One column per range, in the same order as `ranges()`
    #[must_use]
    pub fn columns(&self) -> &[usize] {
        &self.columns
    }

    /// Number of columns needed to display all ranges side by side
    #[must_use]
    pub fn column_count(&self) -> usize {
        self.column_count
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Range<T>, usize)> {
        self.ranges.iter().zip(self.columns.iter().copied())
    }
}
