//! Millisecond conversion factors for the duration grammar.
//!
//! These are fixed constants, not calendar-derived: a month is always
//! 30 days and a year always 365 days.

pub const SECOND: i64 = 1_000;
pub const MINUTE: i64 = 60 * SECOND;
pub const HOUR: i64 = 60 * MINUTE;
pub const DAY: i64 = 24 * HOUR;
pub const MONTH: i64 = 30 * DAY;
pub const YEAR: i64 = 365 * DAY;
