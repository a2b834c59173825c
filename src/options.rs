//! Conversion options threaded through parsing and formatting.

use crate::zone::Zone;

/// What the formatter writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// The full multi-line report
    #[default]
    Report,
    /// Only the RFC 3339 timestamp
    Rfc3339Only,
    /// Only the base-60 epoch day count
    EpochDaysOnly,
}

/// Options for a single conversion.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConvertOptions {
    /// Interpret zone-less input as UTC instead of local time
    pub utc: bool,
    /// Zone for zone-less input; the system zone when unset
    pub zone: Option<Zone>,
    pub mode: OutputMode,
    /// Also print the RFC 3339 timestamp in the system zone
    pub show_local: bool,
}

impl ConvertOptions {
    /// Zone used for zone-less input and for results that carry no zone
    /// of their own.
    #[must_use]
    pub fn default_zone(&self) -> Zone {
        if self.utc {
            Zone::Utc
        } else {
            self.zone.unwrap_or_else(Zone::local)
        }
    }
}
