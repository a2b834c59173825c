//! Constants used throughout the application
//!
//! This module centralizes labels, layouts, thresholds and user-facing
//! messages so the parser, formatter and binary agree on them.

// Report labels
pub const LABEL_UNIX: &str = "Unix Timestamp";
pub const LABEL_RFC3339: &str = "RFC 3339";
pub const LABEL_RFC3339_LOCAL: &str = "RFC 3339 (Local)";
pub const LABEL_RFC3339_UTC: &str = "RFC 3339 (UTC)";
pub const LABEL_ORDINAL: &str = "Ordinal Date";
pub const LABEL_ORDINAL_UTC: &str = "Ordinal Date (UTC)";
pub const LABEL_EPOCH_DAYS: &str = "Epoch Days";

/// Width of the label column, colon included
pub const LABEL_WIDTH: usize = 19;

// Layouts
/// Readable display layout, modeled on a full timestamp without subseconds
pub const DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M:%S %z";
pub const DATE_FORMAT: &str = "%Y-%m-%d";
pub const DATETIME_T_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";
pub const DATETIME_SPACE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

// Parser thresholds
/// Numeric input above this magnitude is assumed to carry sub-second digits
pub const UNIX_SECONDS_CEILING: i64 = 10_000_000_000;
/// Decoded base-60 dates further than this many years ahead are flagged
pub const SUSPICIOUS_YEARS_AHEAD: i32 = 100;
/// Decoded base-60 dates before this year are flagged
pub const SUSPICIOUS_YEAR_FLOOR: i32 = 1970;

// Configuration
pub const CONFIG_FILE_NAME: &str = "timestamp.toml";
pub const CONFIG_DIR_NAME: &str = "timestamp";
pub const CONFIG_GENERATED: &str = "Generated default configuration file";
pub const DEFAULT_LOG_LEVEL: &str = "warn";
pub const VALID_LOG_LEVELS: [&str; 6] = ["off", "error", "warn", "info", "debug", "trace"];
