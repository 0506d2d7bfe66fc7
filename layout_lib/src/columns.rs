use crate::times::Range;

/// The columns currently open while laying out a sequence of ranges.
/// Each column remembers the last range that was placed in it, and only
/// lives for the duration of one layout.
pub struct ActiveColumns<'a, T> {
    held: Vec<&'a Range<T>>,
}

impl<T> Default for ActiveColumns<'_, T> {
    fn default() -> Self {
        ActiveColumns { held: Vec::new() }
    }
}

impl<'a, T: PartialOrd> ActiveColumns<'a, T> {
    /// Place the range in the lowest column whose last range does not
    /// overlap it, opening a new column if there is none.  Returns the
    /// index of that column.
    /// Ranges must be placed in increasing order of their start.
    pub fn place(&mut self, range: &'a Range<T>) -> usize {
        for (column, held) in self.held.iter_mut().enumerate() {
            if !held.overlaps(range) {
                *held = range;
                return column;
            }
        }

        let column = self.held.len();
        log::trace!("opening column {}", column);
        self.held.push(range);
        column
    }
}

impl<T> ActiveColumns<'_, T> {
    /// Number of columns opened so far
    #[must_use]
    pub fn len(&self) -> usize {
        self.held.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.held.is_empty()
    }

    /// The last range placed in that column
    #[must_use]
    pub fn held(&self, column: usize) -> Option<&Range<T>> {
        self.held.get(column).copied()
    }
}

/// Compute a column for each range, so that ranges in the same column never
/// overlap and each range gets the lowest possible column.
/// The ranges must already be sorted by start.  The result has one entry per
/// range, in the same order.
#[must_use]
pub fn assign_columns<T: PartialOrd>(ranges: &[Range<T>]) -> Vec<usize> {
    let mut active = ActiveColumns::default();
    ranges.iter().map(|r| active.place(r)).collect()
}
