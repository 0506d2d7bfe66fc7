use crate::times::Range;
use chrono::{NaiveDate, NaiveDateTime};

fn at(day: u32, hour: u32, min: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2018, 1, day)
        .and_then(|d| d.and_hms_opt(hour, min, 0))
        .unwrap_or_default()
}

/// A small evening of overlapping events, in no particular order.  Once
/// sorted by start, they are laid out in columns [0, 1, 2, 0, 1, 0].
#[must_use]
pub fn canonical() -> Vec<Range<NaiveDateTime>> {
    vec![
        Range::new(at(1, 20, 0), at(1, 22, 0)),
        Range::new(at(1, 22, 0), at(2, 0, 0)),
        Range::new(at(1, 20, 30), at(1, 22, 30)),
        Range::new(at(1, 21, 59), at(2, 0, 14)),
        Range::new(at(2, 0, 5), at(2, 0, 7)),
        Range::new(at(1, 23, 30), at(2, 0, 0)),
    ]
}
