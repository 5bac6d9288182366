//! # tempo-relative
//!
//! Human phrasing for the difference between two instants: a five-bucket
//! threshold ladder ("Just now", "6 seconds ago", "In an hour", "Tomorrow")
//! backed by a calendar-date fallback once the difference reaches two weeks
//! ("4 Jan", "1 May 2024").
//!
//! Instants are [`chrono::NaiveDateTime`]: timezone handling is out of
//! scope, inputs are taken to already be in the caller's reference frame.
//!
//! ```
//! use chrono::NaiveDate;
//! use tempo_relative::{RelativeTimeConfig, format_relative_time};
//!
//! let now = NaiveDate::from_ymd_opt(2024, 1, 18)
//!     .unwrap()
//!     .and_hms_opt(12, 0, 0)
//!     .unwrap();
//! let date = NaiveDate::from_ymd_opt(2024, 1, 18)
//!     .unwrap()
//!     .and_hms_opt(11, 58, 0)
//!     .unwrap();
//! let config = RelativeTimeConfig {
//!     now: Some(now),
//!     ..Default::default()
//! };
//! assert_eq!(format_relative_time(date, config), "2 minutes ago");
//! ```

use chrono::{Datelike, Local, NaiveDateTime};
use tempo_duration::units::{DAY, HOUR, MINUTE, SECOND};

// Re-export the duration surface for convenience
pub use tempo_duration::{
    DurationInput, ParseError, ParseResult, format_duration, parse_duration, parse_std_duration,
    try_parse_duration, units,
};

/// Differences under this read as "Just now" / "In a moment".
const MOMENT: i64 = 5 * SECOND;

/// Differences at or past this leave the ladder for the calendar fallback.
const CALENDAR_CUTOFF: i64 = 14 * DAY;

/// Short month names as rendered by the calendar fallback.
const SHORT_MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sept", "Oct", "Nov", "Dec",
];

/// Per-call options for [`format_relative_time`].
#[derive(Debug, Clone, Copy, Default)]
pub struct RelativeTimeConfig {
    /// Lowercase the leading word of the ladder phrases ("just now",
    /// "in a moment"). The calendar fallback is unaffected.
    pub lowercase: bool,
    /// Reference instant. Defaults to the current local wall-clock time.
    pub now: Option<NaiveDateTime>,
}

/// Format `date` relative to the reference instant.
///
/// Buckets are checked in ascending order with strict bounds; within the
/// ladder the count is the floor of the difference in the bucket's own
/// unit. A difference of two weeks or more renders as a calendar date
/// instead, with the year shown only when the two instants are more than
/// three calendar months apart.
pub fn format_relative_time(date: NaiveDateTime, config: RelativeTimeConfig) -> String {
    let now = config.now.unwrap_or_else(|| Local::now().naive_local());
    // Ties count as the past: a timestamp of exactly `now` reads
    // "Just now", not "In a moment".
    let phrase = if now >= date {
        past_phrase((now - date).num_milliseconds())
    } else {
        future_phrase((date - now).num_milliseconds())
    };
    match phrase {
        Some(phrase) if config.lowercase => lowercase_first(phrase),
        Some(phrase) => phrase,
        None => calendar_date(date, now),
    }
}

fn past_phrase(magnitude: i64) -> Option<String> {
    if magnitude < MOMENT {
        Some("Just now".to_string())
    } else if magnitude < MINUTE {
        Some(format!("{} seconds ago", magnitude / SECOND))
    } else if magnitude < HOUR {
        Some(match magnitude / MINUTE {
            1 => "A minute ago".to_string(),
            minutes => format!("{minutes} minutes ago"),
        })
    } else if magnitude < DAY {
        Some(match magnitude / HOUR {
            1 => "An hour ago".to_string(),
            hours => format!("{hours} hours ago"),
        })
    } else if magnitude < CALENDAR_CUTOFF {
        Some(match magnitude / DAY {
            1 => "Yesterday".to_string(),
            days => format!("{days} days ago"),
        })
    } else {
        None
    }
}

fn future_phrase(magnitude: i64) -> Option<String> {
    if magnitude < MOMENT {
        Some("In a moment".to_string())
    } else if magnitude < MINUTE {
        Some(format!("In {} seconds", magnitude / SECOND))
    } else if magnitude < HOUR {
        Some(match magnitude / MINUTE {
            1 => "In a minute".to_string(),
            minutes => format!("In {minutes} minutes"),
        })
    } else if magnitude < DAY {
        Some(match magnitude / HOUR {
            1 => "In an hour".to_string(),
            hours => format!("In {hours} hours"),
        })
    } else if magnitude < CALENDAR_CUTOFF {
        Some(match magnitude / DAY {
            1 => "Tomorrow".to_string(),
            days => format!("In {days} days"),
        })
    } else {
        None
    }
}

fn lowercase_first(mut phrase: String) -> String {
    if let Some(first) = phrase.get_mut(0..1) {
        first.make_ascii_lowercase();
    }
    phrase
}

/// The `"{day} {month}"` / `"{day} {month} {year}"` fallback. Whether the
/// year is shown is keyed on calendar-month distance, not day distance, so
/// nearby dates never disagree about it.
fn calendar_date(date: NaiveDateTime, now: NaiveDateTime) -> String {
    let month_index = |d: NaiveDateTime| i64::from(d.year()) * 12 + i64::from(d.month0());
    let month = SHORT_MONTHS[date.month0() as usize];
    if (month_index(date) - month_index(now)).abs() <= 3 {
        format!("{} {}", date.day(), month)
    } else {
        format!("{} {} {}", date.day(), month, date.year())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    fn dt(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, mo, d)
            .unwrap()
            .and_hms_opt(h, mi, s)
            .unwrap()
    }

    fn reference() -> NaiveDateTime {
        dt(2024, 1, 18, 12, 0, 0)
    }

    fn frt(date: NaiveDateTime) -> String {
        format_relative_time(
            date,
            RelativeTimeConfig {
                now: Some(reference()),
                ..Default::default()
            },
        )
    }

    fn frt_lower(date: NaiveDateTime) -> String {
        format_relative_time(
            date,
            RelativeTimeConfig {
                lowercase: true,
                now: Some(reference()),
            },
        )
    }

    #[test]
    fn ties_read_as_just_now() {
        assert_eq!(frt(reference()), "Just now");
        assert_eq!(frt_lower(reference()), "just now");
    }

    #[test]
    fn defaults_to_current_time() {
        let date = Local::now().naive_local();
        assert_eq!(
            format_relative_time(date, RelativeTimeConfig::default()),
            "Just now"
        );
    }

    #[test]
    fn past_ladder() {
        assert_eq!(frt(dt(2024, 1, 18, 11, 59, 59)), "Just now");
        assert_eq!(frt(dt(2024, 1, 18, 11, 59, 54)), "6 seconds ago");
        assert_eq!(frt(dt(2024, 1, 18, 11, 59, 1)), "59 seconds ago");
        assert_eq!(frt(dt(2024, 1, 18, 11, 59, 0)), "A minute ago");
        assert_eq!(frt(dt(2024, 1, 18, 11, 58, 10)), "A minute ago");
        assert_eq!(frt(dt(2024, 1, 18, 11, 58, 0)), "2 minutes ago");
        assert_eq!(frt(dt(2024, 1, 18, 11, 0, 1)), "59 minutes ago");
        assert_eq!(frt(dt(2024, 1, 18, 11, 0, 0)), "An hour ago");
        assert_eq!(frt(dt(2024, 1, 18, 5, 10, 5)), "6 hours ago");
        assert_eq!(frt(dt(2024, 1, 17, 5, 10, 5)), "Yesterday");
        assert_eq!(frt(dt(2024, 1, 16, 5, 10, 5)), "2 days ago");
        assert_eq!(frt(dt(2024, 1, 4, 13, 0, 0)), "13 days ago");
    }

    #[test]
    fn future_ladder() {
        assert_eq!(frt(dt(2024, 1, 18, 12, 0, 3)), "In a moment");
        assert_eq!(frt(dt(2024, 1, 18, 12, 0, 8)), "In 8 seconds");
        assert_eq!(frt(dt(2024, 1, 18, 12, 0, 59)), "In 59 seconds");
        assert_eq!(frt(dt(2024, 1, 18, 12, 1, 0)), "In a minute");
        assert_eq!(frt(dt(2024, 1, 18, 12, 1, 50)), "In a minute");
        assert_eq!(frt(dt(2024, 1, 18, 12, 2, 50)), "In 2 minutes");
        assert_eq!(frt(dt(2024, 1, 18, 12, 59, 59)), "In 59 minutes");
        assert_eq!(frt(dt(2024, 1, 18, 13, 0, 0)), "In an hour");
        assert_eq!(frt(dt(2024, 1, 18, 18, 0, 0)), "In 6 hours");
        assert_eq!(frt(dt(2024, 1, 19, 18, 0, 0)), "Tomorrow");
        assert_eq!(frt(dt(2024, 1, 31, 18, 0, 0)), "In 13 days");
    }

    #[test]
    fn lowercase_applies_to_every_ladder_phrase() {
        assert_eq!(frt_lower(dt(2024, 1, 18, 11, 59, 59)), "just now");
        assert_eq!(frt_lower(dt(2024, 1, 18, 11, 59, 54)), "6 seconds ago");
        assert_eq!(frt_lower(dt(2024, 1, 18, 11, 59, 0)), "a minute ago");
        assert_eq!(frt_lower(dt(2024, 1, 18, 11, 0, 0)), "an hour ago");
        assert_eq!(frt_lower(dt(2024, 1, 17, 5, 10, 5)), "yesterday");
        assert_eq!(frt_lower(dt(2024, 1, 16, 5, 10, 5)), "2 days ago");
        assert_eq!(frt_lower(dt(2024, 1, 18, 12, 0, 3)), "in a moment");
        assert_eq!(frt_lower(dt(2024, 1, 18, 12, 0, 8)), "in 8 seconds");
        assert_eq!(frt_lower(dt(2024, 1, 18, 12, 1, 0)), "in a minute");
        assert_eq!(frt_lower(dt(2024, 1, 18, 13, 0, 0)), "in an hour");
        assert_eq!(frt_lower(dt(2024, 1, 19, 18, 0, 0)), "tomorrow");
        assert_eq!(frt_lower(dt(2024, 1, 31, 18, 0, 0)), "in 13 days");
    }

    #[test]
    fn calendar_fallback() {
        assert_eq!(frt(dt(2024, 1, 4, 11, 0, 0)), "4 Jan");
        assert_eq!(frt(dt(2023, 12, 31, 11, 0, 0)), "31 Dec");
        assert_eq!(frt(dt(2023, 12, 1, 11, 0, 0)), "1 Dec");
        assert_eq!(frt(dt(2023, 10, 1, 11, 0, 0)), "1 Oct");
        assert_eq!(frt(dt(2023, 9, 30, 11, 0, 0)), "30 Sept 2023");
        assert_eq!(frt(dt(2001, 3, 5, 11, 0, 0)), "5 Mar 2001");
        assert_eq!(frt(dt(2024, 2, 1, 18, 0, 0)), "1 Feb");
        assert_eq!(frt(dt(2024, 4, 30, 18, 0, 0)), "30 Apr");
        assert_eq!(frt(dt(2024, 5, 1, 18, 0, 0)), "1 May 2024");
        assert_eq!(frt(dt(2035, 6, 10, 18, 0, 0)), "10 Jun 2035");
    }

    #[test]
    fn calendar_fallback_ignores_lowercase() {
        assert_eq!(frt_lower(dt(2024, 2, 1, 18, 0, 0)), "1 Feb");
        assert_eq!(frt_lower(dt(2023, 9, 30, 11, 0, 0)), "30 Sept 2023");
    }
}
