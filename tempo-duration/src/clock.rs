use crate::parse::{DurationInput, parse_duration};

/// Format a duration as a clock string: `M:SS`, or `H:MM:SS` once there is
/// at least an hour (days fold into the hours field).
///
/// Sub-second precision is truncated, never rounded, and anything that
/// normalizes to a non-positive duration renders as `"0:00"`.
///
/// # Examples
///
/// ```
/// use tempo_duration::format_duration;
///
/// assert_eq!(format_duration(74_000.0), "1:14");
/// assert_eq!(format_duration("2d 3h 4m 5s"), "51:04:05");
/// assert_eq!(format_duration(-10.0), "0:00");
/// ```
pub fn format_duration<'a>(input: impl Into<DurationInput<'a>>) -> String {
    let total_seconds = (parse_duration(input) / 1000.0).floor();
    if total_seconds <= 0.0 {
        return "0:00".to_string();
    }
    let total_seconds = total_seconds as u64;
    let hours = total_seconds / 3600;
    let minutes = total_seconds % 3600 / 60;
    let seconds = total_seconds % 60;
    if hours > 0 {
        format!("{hours}:{minutes:02}:{seconds:02}")
    } else {
        format!("{minutes}:{seconds:02}")
    }
}
