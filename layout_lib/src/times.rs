use std::fmt::Display;

/// A range of time [start; end], for instance a calendar event.
/// Nothing checks that start <= end, this is up to whoever builds the range.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Range<T> {
    pub start: T,
    pub end: T,
}

impl<T> Range<T> {
    #[must_use]
    pub fn new(start: T, end: T) -> Self {
        Range { start, end }
    }
}

impl<T: PartialOrd> Range<T> {
    /// Whether the two ranges share at least one instant.
    /// A range that ends exactly when the other one starts does not overlap
    /// it, so back-to-back events can be displayed in the same column.
    /// Two ranges that start at the same instant always overlap, whatever
    /// their end (even an empty range).
    #[must_use]
    pub fn overlaps(&self, other: &Self) -> bool {
        if self.start < other.start {
            self.end > other.start
        } else if other.start < self.start {
            other.end > self.start
        } else {
            true
        }
    }

    /// True if the range ends before it starts.
    #[must_use]
    pub fn is_inverted(&self) -> bool {
        self.end < self.start
    }
}

impl<T> From<(T, T)> for Range<T> {
    fn from(value: (T, T)) -> Self {
        Range::new(value.0, value.1)
    }
}

impl<T: Display> Display for Range<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}–{}", self.start, self.end)
    }
}
