use miette::Diagnostic;
use thiserror::Error;

/// Errors reported by the strict duration parser.
///
/// Offsets are byte positions into the input where the first leftover
/// token starts.
#[derive(Error, Diagnostic, Debug, Clone, PartialEq)]
pub enum ParseError {
    #[error("number without a unit at byte {offset}")]
    BareNumber { offset: usize },

    #[error("unit '{unit}' is repeated or out of order at byte {offset}, expected y mo d h m s ms")]
    MisplacedUnit { unit: &'static str, offset: usize },

    #[error("unrecognized duration input at byte {offset}: {found:?}")]
    Trailing { offset: usize, found: String },

    #[error("duration is negative: {millis}ms")]
    NegativeDuration { millis: f64 },

    #[error("duration does not fit std::time::Duration: {millis}ms")]
    OutOfRange { millis: f64 },
}

/// A specialized result type for duration parsing.
pub type ParseResult<T> = std::result::Result<T, ParseError>;
