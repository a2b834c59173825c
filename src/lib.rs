//! timestamp - print timestamps in various formats
//!
//! This library parses a timestamp given as a unix timestamp, an RFC 3339
//! string, a calendar or ordinal date, or newbase60 encoded epoch days, and
//! renders it as a report of equivalent representations.
//!
//! # Modules
//!
//! * [`parser`] - Ordered input parsing into an [`Instant`]
//! * [`formatter`] - Report and single-value output
//! * [`zone`] - Display and default timezones
//! * [`config`] - Configuration file handling
//! * [`utils`] - Calendar helpers and the newbase60 codec

/// Command-line arguments for the binary
pub mod cli;

/// Configuration module for managing application settings
pub mod config;

/// Application constants and default values
pub mod constants;

/// Error types
pub mod error;

/// Output formatting
pub mod formatter;

/// Points in time with a display zone
pub mod instant;

/// Logging setup
pub mod logger;

/// Options threaded through a conversion
pub mod options;

/// Input parsing
pub mod parser;

/// Utility functions for date/time handling and encoding
pub mod utils;

/// Timezones
pub mod zone;

pub use error::{CodecError, FormatError, ParseError, ParseWarning, ZoneError};
pub use instant::{Instant, EPOCH};
pub use options::{ConvertOptions, OutputMode};
pub use parser::{parse_input, ParseOutcome};
pub use zone::Zone;
