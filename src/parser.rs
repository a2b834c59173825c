//! Input parser
//!
//! Turns user input into an [`Instant`]. Stages are tried in a fixed
//! order and the first one that matches wins:
//!
//! 1. empty input: the current time
//! 2. a decimal number: Unix seconds, with sub-second digits stripped
//! 3. each layout of [`INPUT_LAYOUTS`], in order
//! 4. newbase60 encoded epoch days

use chrono::{DateTime, Datelike, FixedOffset, Utc};
use log::{debug, warn};

use crate::constants::{SUSPICIOUS_YEARS_AHEAD, SUSPICIOUS_YEAR_FLOOR, UNIX_SECONDS_CEILING};
use crate::error::{ParseError, ParseWarning};
use crate::instant::Instant;
use crate::utils::{datetime, newbase60};
use crate::zone::Zone;

/// A parsed instant and any warning raised while producing it.
#[derive(Debug, Clone)]
pub struct ParseOutcome {
    pub instant: Instant,
    pub warning: Option<ParseWarning>,
}

impl ParseOutcome {
    fn new(instant: Instant) -> Self {
        Self { instant, warning: None }
    }

    /// Report the warning, if any, through the logger at warn level.
    pub fn log_warning(&self) {
        if let Some(warning) = &self.warning {
            warn!("{}", warning);
        }
    }
}

/// Textual input layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    /// `2006-01-02T15:04:05Z07:00`
    Rfc3339,
    /// `2006-01-02`
    Date,
    /// `2006-002`
    Ordinal,
    /// `2006-01-02T15:04:05`
    DateTimeT,
    /// `2006-01-02 15:04:05`
    DateTimeSpace,
}

/// Layouts in trial order. Several accept overlapping inputs, so the
/// order decides which interpretation wins and must not change.
pub const INPUT_LAYOUTS: [Layout; 5] = [
    Layout::Rfc3339,
    Layout::Date,
    Layout::Ordinal,
    Layout::DateTimeT,
    Layout::DateTimeSpace,
];

impl Layout {
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Layout::Rfc3339 => "rfc3339",
            Layout::Date => "date",
            Layout::Ordinal => "ordinal date",
            Layout::DateTimeT => "datetime",
            Layout::DateTimeSpace => "datetime (space separated)",
        }
    }

    /// Try this layout. `None` means "no match, try the next one";
    /// `Some(Err(_))` stops the search.
    pub fn parse(&self, s: &str, zone: Zone) -> Option<Result<Instant, ParseError>> {
        let naive = match self {
            Layout::Rfc3339 => {
                let dt = DateTime::parse_from_rfc3339(s).ok()?;
                let utc = dt.with_timezone(&Utc);
                let display = zone_for_offset(s, *dt.offset(), zone, &utc);
                return Some(Ok(Instant::new(utc, display)));
            }
            Layout::Date => datetime::parse_date(s)?,
            Layout::Ordinal => match datetime::parse_ordinal(s)? {
                Ok(date) => date.and_hms_opt(0, 0, 0)?,
                Err(e) => return Some(Err(e)),
            },
            Layout::DateTimeT => datetime::parse_datetime_t(s)?,
            Layout::DateTimeSpace => datetime::parse_datetime_space(s)?,
        };

        let utc = zone.localize(&naive)?;
        Some(Ok(Instant::new(utc, zone)))
    }
}

/// Parse user input, interpreting zone-less values in `zone`.
///
/// Leading and trailing whitespace is ignored.
pub fn parse_input(s: &str, zone: Zone) -> Result<ParseOutcome, ParseError> {
    let s = s.trim();

    if s.is_empty() {
        debug!("Empty input, using current time");
        return Ok(ParseOutcome::new(Instant::now(zone)));
    }

    if let Some(secs) = parse_unix_seconds(s) {
        debug!("Parsed {:?} as unix timestamp {}", s, secs);
        return Instant::from_unix(secs, zone)
            .map(ParseOutcome::new)
            .ok_or_else(|| ParseError::Unparseable { input: s.to_string() });
    }

    for layout in INPUT_LAYOUTS {
        if let Some(result) = layout.parse(s, zone) {
            debug!("Input {:?} matched layout {}", s, layout.name());
            return result.map(ParseOutcome::new);
        }
    }

    if let Some(outcome) = parse_epoch_days(s) {
        debug!("Parsed {:?} as newbase60 epoch days", s);
        return Ok(outcome);
    }

    Err(ParseError::Unparseable { input: s.to_string() })
}

/// Decimal integer or float seconds since the epoch.
///
/// Values above the seconds ceiling are taken to carry milli-, micro- or
/// nanosecond digits and are divided down until they fit.
fn parse_unix_seconds(s: &str) -> Option<i64> {
    if let Some(n) = parse_integer_seconds(s) {
        return Some(n);
    }

    let mut f = s.parse::<f64>().ok().filter(|f| f.is_finite())?;
    while f.abs() > UNIX_SECONDS_CEILING as f64 {
        f /= 10.0;
    }
    // In range after scaling, so the cast cannot saturate
    Some(f.trunc() as i64)
}

/// Signed integer seconds of any length, scaled exactly.
///
/// Dividing by ten and truncating is the same as dropping the last digit,
/// so integers too long for `i64` are scaled on their digit string.
fn parse_integer_seconds(s: &str) -> Option<i64> {
    let (negative, digits) = match s.as_bytes().first()? {
        b'-' => (true, &s[1..]),
        b'+' => (false, &s[1..]),
        _ => (false, s),
    };
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    // Any longer prefix is still above the ceiling, so it would be divided
    // again anyway
    let keep = UNIX_SECONDS_CEILING.to_string().len();
    let significant = digits.trim_start_matches('0');
    let prefix = &significant[..significant.len().min(keep)];

    let mut n = if prefix.is_empty() { 0 } else { prefix.parse::<i64>().ok()? };
    while n > UNIX_SECONDS_CEILING {
        n /= 10;
    }
    Some(if negative { -n } else { n })
}

/// Newbase60 encoded day count since the epoch, displayed in UTC.
fn parse_epoch_days(s: &str) -> Option<ParseOutcome> {
    let days = newbase60::decode(s).ok()?;
    let utc = datetime::from_epoch_days(i64::try_from(days).ok()?)?;

    let year = utc.year();
    let latest = Utc::now().year() + SUSPICIOUS_YEARS_AHEAD;
    let warning = (year < SUSPICIOUS_YEAR_FLOOR || year > latest).then(|| ParseWarning::SuspiciousDecodedDate {
        input: s.to_string(),
        year,
    });

    Some(ParseOutcome {
        instant: Instant::new(utc, Zone::Utc),
        warning,
    })
}

/// Display zone for an RFC 3339 input: UTC for `Z`, the default zone when
/// its offset matches, otherwise the bare offset.
fn zone_for_offset(s: &str, offset: FixedOffset, zone: Zone, utc: &DateTime<Utc>) -> Zone {
    if s.ends_with(|c: char| c == 'Z' || c == 'z') {
        Zone::Utc
    } else if zone.offset_at(utc) == offset {
        zone
    } else {
        Zone::Fixed(offset)
    }
}
