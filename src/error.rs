//! Error types for parsing, formatting and the base-60 codec.

use thiserror::Error;

/// Failures of the input parser.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("unable to parse {input:?} as a timestamp")]
    Unparseable { input: String },

    #[error("invalid ordinal date: day {day} is outside 1..={max} for year {year}")]
    InvalidOrdinalDay { year: i32, day: u32, max: u32 },
}

/// Non-fatal findings reported alongside a successfully parsed value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseWarning {
    #[error(
        "parsed {input:?} as a newbase60 epoch date in year {year}, outside of normal bounds. This might be an error."
    )]
    SuspiciousDecodedDate { input: String, year: i32 },
}

/// Failures of the base-60 decoder.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    #[error("empty newbase60 string")]
    Empty,

    #[error("invalid newbase60 digit {digit:?} at position {position}")]
    InvalidDigit { digit: char, position: usize },

    #[error("newbase60 value overflows 64 bits")]
    Overflow,
}

/// Failures of the output formatter.
#[derive(Debug, Error)]
pub enum FormatError {
    #[error("{0} predates 1970-01-01 UTC and has no epoch day count")]
    PreEpoch(String),

    #[error("write failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Failures resolving a timezone name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ZoneError {
    #[error("unknown timezone: {0}")]
    Unknown(String),
}
