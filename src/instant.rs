//! Absolute points in time paired with the zone they are displayed in.

use std::fmt;

use chrono::{DateTime, FixedOffset, SecondsFormat, Utc};

use crate::constants::DISPLAY_FORMAT;
use crate::utils::datetime;
use crate::zone::Zone;

/// 1970-01-01T00:00:00 UTC
pub const EPOCH: DateTime<Utc> = DateTime::<Utc>::UNIX_EPOCH;

/// A point in time with nanosecond precision and a display zone.
///
/// Comparing two instants for the same point in time should go through
/// [`Instant::utc`]; the display zone is presentation only.
#[derive(Debug, Clone, Copy)]
pub struct Instant {
    utc: DateTime<Utc>,
    zone: Zone,
}

impl Instant {
    #[must_use]
    pub fn new(utc: DateTime<Utc>, zone: Zone) -> Self {
        Self { utc, zone }
    }

    /// Current system time.
    #[must_use]
    pub fn now(zone: Zone) -> Self {
        Self::new(Utc::now(), zone)
    }

    /// Whole seconds since the epoch; `None` outside chrono's range.
    #[must_use]
    pub fn from_unix(secs: i64, zone: Zone) -> Option<Self> {
        DateTime::from_timestamp(secs, 0).map(|utc| Self::new(utc, zone))
    }

    #[must_use]
    pub fn utc(&self) -> DateTime<Utc> {
        self.utc
    }

    #[must_use]
    pub fn zone(&self) -> Zone {
        self.zone
    }

    /// The same instant displayed in another zone.
    #[must_use]
    pub fn in_zone(&self, zone: Zone) -> Self {
        Self::new(self.utc, zone)
    }

    /// Wall-clock time in the display zone.
    #[must_use]
    pub fn local(&self) -> DateTime<FixedOffset> {
        self.utc.with_timezone(&self.zone.offset_at(&self.utc))
    }

    #[must_use]
    pub fn unix(&self) -> i64 {
        self.utc.timestamp()
    }

    /// Whole days since the epoch, always computed in UTC.
    #[must_use]
    pub fn epoch_days(&self) -> i64 {
        datetime::epoch_days(self.utc)
    }

    /// RFC 3339 in the display zone, whole seconds, `Z` for a zero offset.
    #[must_use]
    pub fn rfc3339(&self) -> String {
        self.local().to_rfc3339_opts(SecondsFormat::Secs, true)
    }

    /// Ordinal date (`YYYY-DDD`) in the display zone.
    #[must_use]
    pub fn ordinal(&self) -> String {
        datetime::format_ordinal(&self.local())
    }
}

/// `2006-01-02 15:04:05 -0700 MST`
impl fmt::Display for Instant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}",
            self.local().format(DISPLAY_FORMAT),
            self.zone.abbreviation_at(&self.utc)
        )
    }
}
