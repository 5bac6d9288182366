//! The compound duration string grammar.
//!
//! A duration string is a sequence of up to seven optional segments in one
//! fixed order: years, months, days, hours, minutes, seconds, milliseconds
//! (`"1y 2mo 3d 4h 5m 6s 7ms"`). Each segment is a signed, optionally
//! fractional number followed by the unit abbreviation. Whitespace between
//! tokens is free-form. Segments must not repeat or appear out of order.

use crate::error::{ParseError, ParseResult};
use crate::units;
use std::time::Duration;
use tracing::debug;

/// A duration given either as raw milliseconds or as a compound string.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DurationInput<'a> {
    Millis(f64),
    Text(&'a str),
}

impl From<f64> for DurationInput<'static> {
    fn from(millis: f64) -> Self {
        DurationInput::Millis(millis)
    }
}

impl From<i64> for DurationInput<'static> {
    fn from(millis: i64) -> Self {
        DurationInput::Millis(millis as f64)
    }
}

impl From<i32> for DurationInput<'static> {
    fn from(millis: i32) -> Self {
        DurationInput::Millis(f64::from(millis))
    }
}

impl From<u64> for DurationInput<'static> {
    fn from(millis: u64) -> Self {
        DurationInput::Millis(millis as f64)
    }
}

impl From<u32> for DurationInput<'static> {
    fn from(millis: u32) -> Self {
        DurationInput::Millis(f64::from(millis))
    }
}

impl<'a> From<&'a str> for DurationInput<'a> {
    fn from(text: &'a str) -> Self {
        DurationInput::Text(text)
    }
}

impl<'a> From<&'a String> for DurationInput<'a> {
    fn from(text: &'a String) -> Self {
        DurationInput::Text(text.as_str())
    }
}

struct Segment {
    abbrev: &'static str,
    millis: i64,
}

/// Canonical unit order. The parser walks these positions once, in order,
/// so a repeated or misplaced unit falls through to the leftover check.
const SEGMENTS: [Segment; 7] = [
    Segment { abbrev: "y", millis: units::YEAR },
    Segment { abbrev: "mo", millis: units::MONTH },
    Segment { abbrev: "d", millis: units::DAY },
    Segment { abbrev: "h", millis: units::HOUR },
    Segment { abbrev: "m", millis: units::MINUTE },
    Segment { abbrev: "s", millis: units::SECOND },
    Segment { abbrev: "ms", millis: 1 },
];

/// Abbreviations longest-first, for classifying leftover input.
const ABBREVS: [&str; 7] = ["mo", "ms", "y", "d", "h", "m", "s"];

/// Convert a duration into signed milliseconds.
///
/// Numeric input is returned unchanged. Strings are parsed against the
/// compound grammar; a malformed string degrades to `0.0` rather than
/// failing (use [`try_parse_duration`] to observe the error instead).
///
/// # Examples
///
/// ```
/// use tempo_duration::parse_duration;
///
/// assert_eq!(parse_duration("6s 749ms"), 6749.0);
/// assert_eq!(parse_duration("8m -14s"), 466_000.0);
/// assert_eq!(parse_duration(1500.0), 1500.0);
/// assert_eq!(parse_duration("not a duration"), 0.0);
/// ```
pub fn parse_duration<'a>(input: impl Into<DurationInput<'a>>) -> f64 {
    match input.into() {
        DurationInput::Millis(millis) => millis,
        DurationInput::Text(text) => try_parse_duration(text).unwrap_or_else(|error| {
            debug!(input = text, %error, "malformed duration string, defaulting to 0ms");
            0.0
        }),
    }
}

/// Strict variant of [`parse_duration`] for string input.
///
/// Parses the compound grammar and reports leftover input instead of
/// degrading to zero. An empty (or all-whitespace) string is valid and
/// parses to `0.0`.
pub fn try_parse_duration(input: &str) -> ParseResult<f64> {
    let mut scanner = Scanner::new(input);
    let mut total = 0.0;
    for segment in &SEGMENTS {
        if let Some(value) = scanner.segment(segment) {
            total += value * segment.millis as f64;
        }
    }
    scanner.skip_spaces();
    if scanner.at_end() {
        Ok(total)
    } else {
        Err(scanner.classify_leftover())
    }
}

/// Strictly parse a duration string into a [`std::time::Duration`].
///
/// Negative totals have no `Duration` representation and are rejected.
pub fn parse_std_duration(input: &str) -> ParseResult<Duration> {
    let millis = try_parse_duration(input)?;
    if millis < 0.0 {
        return Err(ParseError::NegativeDuration { millis });
    }
    Duration::try_from_secs_f64(millis / 1000.0).map_err(|_| ParseError::OutOfRange { millis })
}

struct Scanner<'a> {
    input: &'a [u8],
    pos: usize,
}

impl<'a> Scanner<'a> {
    fn new(input: &'a str) -> Self {
        Scanner {
            input: input.as_bytes(),
            pos: 0,
        }
    }

    fn peek(&self) -> Option<u8> {
        self.input.get(self.pos).copied()
    }

    fn at_end(&self) -> bool {
        self.pos == self.input.len()
    }

    fn skip_spaces(&mut self) {
        while matches!(self.peek(), Some(b' ' | b'\t')) {
            self.pos += 1;
        }
    }

    fn eat(&mut self, tag: &str) -> bool {
        if self.input[self.pos..].starts_with(tag.as_bytes()) {
            self.pos += tag.len();
            true
        } else {
            false
        }
    }

    fn digits(&mut self) -> usize {
        let start = self.pos;
        while matches!(self.peek(), Some(b'0'..=b'9')) {
            self.pos += 1;
        }
        self.pos - start
    }

    /// An optionally negative decimal number. The leading zero of a
    /// fraction may be omitted (`.25`); a trailing dot may not.
    fn number(&mut self) -> Option<f64> {
        let start = self.pos;
        if self.peek() == Some(b'-') {
            self.pos += 1;
        }
        let int_digits = self.digits();
        let mut frac_digits = 0;
        if self.peek() == Some(b'.') {
            let dot = self.pos;
            self.pos += 1;
            frac_digits = self.digits();
            if frac_digits == 0 {
                self.pos = dot;
            }
        }
        if int_digits == 0 && frac_digits == 0 {
            self.pos = start;
            return None;
        }
        // The scan above only admits strings that f64 accepts.
        std::str::from_utf8(&self.input[start..self.pos])
            .ok()?
            .parse()
            .ok()
    }

    /// One optional `ws* number ws* abbrev` position. Rewinds wholesale on
    /// any partial match so the next position sees the original input.
    fn segment(&mut self, segment: &Segment) -> Option<f64> {
        let start = self.pos;
        self.skip_spaces();
        let Some(value) = self.number() else {
            self.pos = start;
            return None;
        };
        self.skip_spaces();
        if !self.eat(segment.abbrev) {
            self.pos = start;
            return None;
        }
        // `m` alone is minutes; back off when it is the start of `ms` or
        // `mo` so those tokens reach their own positions (or the leftover
        // check, if out of order).
        if segment.abbrev == "m" && matches!(self.peek(), Some(b's' | b'o')) {
            self.pos = start;
            return None;
        }
        Some(value)
    }

    /// Called with unconsumed input after all seven positions: decide what
    /// the leftover looks like for the error message.
    fn classify_leftover(&mut self) -> ParseError {
        let offset = self.pos;
        if self.number().is_some() {
            self.skip_spaces();
            for abbrev in ABBREVS {
                if self.eat(abbrev) {
                    return ParseError::MisplacedUnit {
                        unit: abbrev,
                        offset,
                    };
                }
            }
            return ParseError::BareNumber { offset };
        }
        ParseError::Trailing {
            offset,
            found: String::from_utf8_lossy(&self.input[offset..]).into_owned(),
        }
    }
}
