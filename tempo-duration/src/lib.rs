//! # tempo-duration
//!
//! The duration core of the tempo workspace:
//!
//! - A compound duration string grammar (`"1y 2mo 3d 4h 5m 6s 7ms"`) that
//!   normalizes strings or raw numbers to signed milliseconds
//! - A clock-style formatter (`"51:04:05"`, `"1:14"`)
//! - The fixed unit conversion factors shared with `tempo-relative`
//!
//! Unit conversions are deliberately calendar-naive: a month is always 30
//! days and a year always 365 days.

pub mod clock;
pub mod error;
pub mod parse;
pub mod units;

// Re-export common types for convenience
pub use clock::format_duration;
pub use error::{ParseError, ParseResult};
pub use parse::{DurationInput, parse_duration, parse_std_duration, try_parse_duration};
