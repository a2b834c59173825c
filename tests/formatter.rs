use chrono::{FixedOffset, TimeZone, Utc};
use timestamp::formatter::{print_output, render};
use timestamp::parser::parse_input;
use timestamp::{ConvertOptions, FormatError, Instant, OutputMode, Zone};

fn instant(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32, zone: Zone) -> Instant {
    Instant::new(Utc.with_ymd_and_hms(y, mo, d, h, mi, s).unwrap(), zone)
}

fn new_york() -> Zone {
    Zone::from_name("America/New_York").unwrap()
}

fn report(instant: &Instant) -> String {
    render(instant, &ConvertOptions::default()).unwrap()
}

fn only(mode: OutputMode) -> ConvertOptions {
    ConvertOptions {
        mode,
        ..ConvertOptions::default()
    }
}

#[test]
fn test_report_utc() {
    let out = report(&instant(2006, 1, 2, 0, 0, 0, Zone::Utc));

    assert!(out.contains("2006-01-02 00:00:00 +0000 UTC"));
    // No redundant lines for the display zone
    assert!(!out.contains("RFC 3339:"));
    assert!(!out.contains("Ordinal Date:"));
    assert!(out.contains("RFC 3339 (UTC):     2006-01-02T00:00:00Z\n"));
    assert!(out.contains("Ordinal Date (UTC): 2006-002\n"));
}

#[test]
fn test_report_new_york() {
    // Midnight in New York
    let out = report(&instant(2006, 1, 2, 5, 0, 0, new_york()));

    let expected = "\
2006-01-02 00:00:00 -0500 EST

Unix Timestamp:     1136178000
RFC 3339:           2006-01-02T00:00:00-05:00
RFC 3339 (UTC):     2006-01-02T05:00:00Z
Ordinal Date:       2006-002
Ordinal Date (UTC): 2006-002
Epoch Days:         13150 (3eA)
";
    assert_eq!(out, expected);
}

#[test]
fn test_report_ordinal_dates_differ_across_zones() {
    // 2006-01-01 22:00 in New York is already the 2nd in UTC
    let out = report(&instant(2006, 1, 2, 3, 0, 0, new_york()));

    assert!(out.contains("Ordinal Date:       2006-001\n"));
    assert!(out.contains("Ordinal Date (UTC): 2006-002\n"));
}

#[test]
fn test_report_fixed_offset() {
    let pst = Zone::Fixed(FixedOffset::west_opt(8 * 3600).unwrap());
    let out = report(&instant(2006, 1, 2, 23, 4, 5, pst));

    assert!(out.starts_with("2006-01-02 15:04:05 -0800 -0800\n\n"));
    assert!(out.contains("RFC 3339:           2006-01-02T15:04:05-08:00\n"));
}

#[test]
fn test_epoch_days_omitted_before_epoch() {
    let out = report(&instant(1969, 7, 20, 20, 17, 40, Zone::Utc));
    assert!(out.contains("Unix Timestamp:     -14182940\n"));
    assert!(!out.contains("Epoch Days"));

    // Day zero is not strictly positive either
    let out = report(&instant(1970, 1, 1, 12, 0, 0, Zone::Utc));
    assert!(!out.contains("Epoch Days"));
}

#[test]
fn test_epoch_days_truncate() {
    let out = report(&instant(1970, 1, 2, 23, 59, 59, Zone::Utc));
    assert!(out.contains("Epoch Days:         1 (1)\n"));
}

#[test]
fn test_rfc3339_only() {
    let options = only(OutputMode::Rfc3339Only);

    let out = render(&instant(2006, 1, 2, 15, 4, 5, Zone::Utc), &options).unwrap();
    assert_eq!(out, "2006-01-02T15:04:05Z");

    let out = render(&instant(2006, 1, 2, 5, 0, 0, new_york()), &options).unwrap();
    assert_eq!(out, "2006-01-02T00:00:00-05:00");
}

#[test]
fn test_epoch_days_only() {
    let options = only(OutputMode::EpochDaysOnly);

    let out = render(&instant(2006, 1, 2, 15, 4, 5, Zone::Utc), &options).unwrap();
    assert_eq!(out, "3eA");

    let out = render(&instant(1970, 1, 1, 0, 0, 0, Zone::Utc), &options).unwrap();
    assert_eq!(out, "0");
}

#[test]
fn test_epoch_days_only_before_epoch() {
    let options = only(OutputMode::EpochDaysOnly);
    let result = render(&instant(1969, 12, 30, 0, 0, 0, Zone::Utc), &options);
    assert!(matches!(result, Err(FormatError::PreEpoch(_))));
}

#[test]
fn test_local_line_skipped_in_local_zone() {
    let options = ConvertOptions {
        show_local: true,
        ..ConvertOptions::default()
    };
    let out = render(&instant(2006, 1, 2, 0, 0, 0, Zone::local()), &options).unwrap();
    assert!(!out.contains("RFC 3339 (Local):"));
}

#[test]
fn test_local_line_opt_in() {
    let out = report(&instant(2006, 1, 2, 0, 0, 0, new_york()));
    assert!(!out.contains("RFC 3339 (Local):"));
}

#[test]
fn test_local_line_shown_for_other_zone() {
    let options = ConvertOptions {
        show_local: true,
        ..ConvertOptions::default()
    };
    // A bare offset is never the system zone
    let kathmandu = Zone::Fixed(FixedOffset::east_opt(5 * 3600 + 45 * 60).unwrap());
    let inst = instant(2006, 1, 2, 15, 4, 5, kathmandu);
    let out = render(&inst, &options).unwrap();

    let local_line = format!("RFC 3339 (Local):   {}\n", inst.in_zone(Zone::local()).rfc3339());
    assert!(out.contains(&local_line), "missing {:?} in:\n{}", local_line, out);

    let rfc = out.find("RFC 3339:").unwrap();
    let local = out.find("RFC 3339 (Local):").unwrap();
    let utc = out.find("RFC 3339 (UTC):").unwrap();
    assert!(rfc < local && local < utc);
}

#[test]
fn test_rfc3339_round_trip() {
    let options = only(OutputMode::Rfc3339Only);
    for input in [
        "2006-01-02T15:04:05Z",
        "2006-01-02T15:04:05-08:00",
        "2024-02-29T23:59:59+05:30",
        "1969-07-20T20:17:40Z",
    ] {
        let first = parse_input(input, Zone::Utc).unwrap().instant;
        let printed = render(&first, &options).unwrap();
        let second = parse_input(&printed, Zone::Utc).unwrap().instant;
        assert_eq!(first.utc(), second.utc(), "round trip of {:?} via {:?}", input, printed);
    }
}

#[test]
fn test_print_output_writes_to_sink() {
    let mut buf = Vec::new();
    print_output(&mut buf, &instant(2006, 1, 2, 0, 0, 0, Zone::Utc), &ConvertOptions::default()).unwrap();
    let out = String::from_utf8(buf).unwrap();
    assert_eq!(out.lines().next(), Some("2006-01-02 00:00:00 +0000 UTC"));
    assert_eq!(out.lines().nth(1), Some(""));
}
