//! Output formatter
//!
//! Writes an [`Instant`] either as a labelled multi-line report or, in the
//! single-value modes, as just its RFC 3339 string or base-60 epoch days.

use std::fmt::Display;
use std::io::Write;

use crate::constants::{
    LABEL_EPOCH_DAYS, LABEL_ORDINAL, LABEL_ORDINAL_UTC, LABEL_RFC3339, LABEL_RFC3339_LOCAL, LABEL_RFC3339_UTC,
    LABEL_UNIX, LABEL_WIDTH,
};
use crate::error::FormatError;
use crate::instant::Instant;
use crate::options::{ConvertOptions, OutputMode};
use crate::utils::newbase60;
use crate::zone::Zone;

/// Write `instant` to `w` according to `options.mode`.
///
/// Report lines, in order:
/// - the display timestamp, followed by a blank line
/// - unix timestamp
/// - RFC 3339 in the display zone (unless it is UTC)
/// - RFC 3339 in the system zone (only with `show_local`, unless the
///   display zone is the system zone)
/// - RFC 3339 in UTC
/// - ordinal date in the display zone (unless it is UTC)
/// - ordinal date in UTC
/// - epoch days as decimal and base-60, only after 1970-01-01 UTC
///
/// The single-value modes write no trailing newline.
pub fn print_output<W: Write>(w: &mut W, instant: &Instant, options: &ConvertOptions) -> Result<(), FormatError> {
    match options.mode {
        OutputMode::Rfc3339Only => {
            write!(w, "{}", instant.rfc3339())?;
            return Ok(());
        }
        OutputMode::EpochDaysOnly => {
            let days = u64::try_from(instant.epoch_days()).map_err(|_| FormatError::PreEpoch(instant.rfc3339()))?;
            write!(w, "{}", newbase60::encode(days))?;
            return Ok(());
        }
        OutputMode::Report => {}
    }

    let zone = instant.zone();
    let utc = instant.in_zone(Zone::Utc);

    writeln!(w, "{}\n", instant)?;
    print_line(w, LABEL_UNIX, instant.unix())?;

    if !zone.is_utc() {
        print_line(w, LABEL_RFC3339, instant.rfc3339())?;
    }
    if options.show_local {
        let local = Zone::local();
        if zone != local {
            print_line(w, LABEL_RFC3339_LOCAL, instant.in_zone(local).rfc3339())?;
        }
    }
    print_line(w, LABEL_RFC3339_UTC, utc.rfc3339())?;

    if !zone.is_utc() {
        print_line(w, LABEL_ORDINAL, instant.ordinal())?;
    }
    print_line(w, LABEL_ORDINAL_UTC, utc.ordinal())?;

    let days = instant.epoch_days();
    if days > 0 {
        let encoded = newbase60::encode(days.unsigned_abs());
        print_line(w, LABEL_EPOCH_DAYS, format!("{} ({})", days, encoded))?;
    }

    Ok(())
}

/// Render the report into a string.
pub fn render(instant: &Instant, options: &ConvertOptions) -> Result<String, FormatError> {
    let mut buf = Vec::new();
    print_output(&mut buf, instant, options)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

fn print_line<W: Write>(w: &mut W, label: &str, value: impl Display) -> std::io::Result<()> {
    writeln!(w, "{:<width$} {}", format!("{}:", label), value, width = LABEL_WIDTH)
}
