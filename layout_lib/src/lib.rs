//! Lay out time ranges in columns, so that overlapping ranges (for instance
//! calendar events) can be displayed side by side.
//!
//! ```text
//!     col 0     col 1     col 2
//!   [20:00    [20:30
//!     |         |       [21:59
//!   22:00)      |         |
//!   [22:00    22:30)      |
//!     |       [23:30      |
//!   00:00)    00:00)      |
//!   [00:05              00:14)
//!   00:07)
//! ```
//!
//! Each range goes to the lowest column whose last range it does not
//! overlap.  See [`columns::assign_columns`] for the algorithm itself, and
//! [`layouts::Layout`] to first sort the ranges.

pub mod columns;
pub mod errors;
pub mod importers;
pub mod layouts;
pub mod samples;
pub mod times;
