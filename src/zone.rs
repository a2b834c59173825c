//! Timezones used to interpret zone-less input and to display results.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, FixedOffset, Local, NaiveDateTime, Offset, TimeZone, Utc};
use chrono_tz::Tz;

use crate::error::ZoneError;

/// IANA names that all denote UTC
const UTC_ALIASES: [&str; 10] = [
    "UTC",
    "Etc/UTC",
    "Etc/Universal",
    "Universal",
    "Zulu",
    "Etc/Zulu",
    "UCT",
    "Etc/UCT",
    "Etc/GMT0",
    "Etc/GMT+0",
];

/// A display or default timezone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Zone {
    Utc,
    /// A zone from the IANA database, e.g. `America/New_York`
    Named(Tz),
    /// A bare offset with no zone name, as parsed from RFC 3339 input
    Fixed(FixedOffset),
    /// The system zone when its IANA name cannot be determined
    Local,
}

impl Zone {
    /// The system timezone.
    ///
    /// `TZ` wins when set; otherwise the zone configured for the system.
    /// Resolved through its IANA name so abbreviations such as `EST` are
    /// available; falls back to [`Zone::Local`] when the name is unknown.
    #[must_use]
    pub fn local() -> Self {
        if let Ok(value) = std::env::var("TZ") {
            return Self::from_tz_value(&value);
        }

        match iana_time_zone::get_timezone() {
            Ok(name) => Self::from_name(&name).unwrap_or(Zone::Local),
            Err(e) => {
                log::debug!("Could not determine system timezone name: {}", e);
                Zone::Local
            }
        }
    }

    /// Interpret a `TZ` environment value.
    ///
    /// A leading `:` is ignored and an empty value means UTC. Values that
    /// are not IANA names (POSIX rules such as `EST5EDT,M3.2.0,M11.1.0`,
    /// file paths) are left to [`Zone::Local`].
    #[must_use]
    pub fn from_tz_value(value: &str) -> Self {
        let name = value.strip_prefix(':').unwrap_or(value).trim();
        if name.is_empty() {
            return Zone::Utc;
        }
        if name.eq_ignore_ascii_case("local") {
            return Zone::Local;
        }
        Self::from_name(name).unwrap_or(Zone::Local)
    }

    /// Resolve a zone by IANA name.
    ///
    /// `local` (any case) selects the system zone, UTC aliases collapse to
    /// [`Zone::Utc`].
    pub fn from_name(name: &str) -> Result<Self, ZoneError> {
        let name = name.trim();
        if name.eq_ignore_ascii_case("local") {
            return Ok(Self::local());
        }
        if UTC_ALIASES.contains(&name) {
            return Ok(Zone::Utc);
        }
        name.parse::<Tz>()
            .map(Zone::Named)
            .map_err(|_| ZoneError::Unknown(name.to_string()))
    }

    #[must_use]
    pub fn is_utc(&self) -> bool {
        matches!(self, Zone::Utc)
    }

    /// UTC offset in effect at `utc`.
    #[must_use]
    pub fn offset_at(&self, utc: &DateTime<Utc>) -> FixedOffset {
        let naive = utc.naive_utc();
        match self {
            Zone::Utc => Utc.fix(),
            Zone::Named(tz) => tz.offset_from_utc_datetime(&naive).fix(),
            Zone::Fixed(offset) => *offset,
            Zone::Local => Local.offset_from_utc_datetime(&naive).fix(),
        }
    }

    /// Zone abbreviation in effect at `utc`, e.g. `EST`.
    ///
    /// Zones without a name render their numeric offset (`-0800`).
    #[must_use]
    pub fn abbreviation_at(&self, utc: &DateTime<Utc>) -> String {
        match self {
            Zone::Utc => "UTC".to_string(),
            Zone::Named(tz) => utc.with_timezone(tz).format("%Z").to_string(),
            Zone::Fixed(_) | Zone::Local => utc.with_timezone(&self.offset_at(utc)).format("%z").to_string(),
        }
    }

    /// Interpret a wall-clock time in this zone.
    ///
    /// Times skipped by a DST transition yield `None`; repeated times
    /// resolve to the earlier instant.
    #[must_use]
    pub fn localize(&self, naive: &NaiveDateTime) -> Option<DateTime<Utc>> {
        match self {
            Zone::Utc => Some(naive.and_utc()),
            Zone::Named(tz) => tz.from_local_datetime(naive).earliest().map(|dt| dt.with_timezone(&Utc)),
            Zone::Fixed(offset) => offset.from_local_datetime(naive).single().map(|dt| dt.with_timezone(&Utc)),
            Zone::Local => Local.from_local_datetime(naive).earliest().map(|dt| dt.with_timezone(&Utc)),
        }
    }
}

impl FromStr for Zone {
    type Err = ZoneError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
    }
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Zone::Utc => f.write_str("UTC"),
            Zone::Named(tz) => f.write_str(tz.name()),
            Zone::Fixed(offset) => write!(f, "{}", offset),
            Zone::Local => f.write_str("Local"),
        }
    }
}
