use chrono::{FixedOffset, NaiveDate, TimeZone, Utc};
use timestamp::{Zone, ZoneError};

#[test]
fn test_from_name() {
    assert_eq!(Zone::from_name("UTC").unwrap(), Zone::Utc);
    assert_eq!(Zone::from_name("Etc/UTC").unwrap(), Zone::Utc);
    assert_eq!(Zone::from_name("Zulu").unwrap(), Zone::Utc);
    assert_eq!(
        Zone::from_name("America/New_York").unwrap(),
        Zone::Named(chrono_tz::America::New_York)
    );
    assert_eq!(
        Zone::from_name("Mars/Olympus_Mons"),
        Err(ZoneError::Unknown("Mars/Olympus_Mons".to_string()))
    );
    assert_eq!("Europe/Paris".parse::<Zone>().unwrap(), Zone::Named(chrono_tz::Europe::Paris));
}

#[test]
fn test_is_utc() {
    assert!(Zone::Utc.is_utc());
    assert!(!Zone::Named(chrono_tz::Europe::London).is_utc());
    assert!(!Zone::Fixed(FixedOffset::east_opt(0).unwrap()).is_utc());
}

#[test]
fn test_offsets_follow_dst() {
    let ny = Zone::Named(chrono_tz::America::New_York);
    let winter = Utc.with_ymd_and_hms(2006, 1, 2, 5, 0, 0).unwrap();
    let summer = Utc.with_ymd_and_hms(2006, 7, 2, 5, 0, 0).unwrap();

    assert_eq!(ny.offset_at(&winter), FixedOffset::west_opt(5 * 3600).unwrap());
    assert_eq!(ny.offset_at(&summer), FixedOffset::west_opt(4 * 3600).unwrap());
    assert_eq!(ny.abbreviation_at(&winter), "EST");
    assert_eq!(ny.abbreviation_at(&summer), "EDT");
    assert_eq!(Zone::Utc.abbreviation_at(&winter), "UTC");
}

#[test]
fn test_fixed_zone_abbreviation_is_numeric() {
    let ist = Zone::Fixed(FixedOffset::east_opt(5 * 3600 + 1800).unwrap());
    let t = Utc.with_ymd_and_hms(2006, 1, 2, 0, 0, 0).unwrap();
    assert_eq!(ist.abbreviation_at(&t), "+0530");
}

#[test]
fn test_localize() {
    let ny = Zone::Named(chrono_tz::America::New_York);
    let naive = NaiveDate::from_ymd_opt(2006, 1, 2).unwrap().and_hms_opt(0, 0, 0).unwrap();
    assert_eq!(
        ny.localize(&naive),
        Some(Utc.with_ymd_and_hms(2006, 1, 2, 5, 0, 0).unwrap())
    );
    assert_eq!(Zone::Utc.localize(&naive), Some(naive.and_utc()));

    // Skipped by the spring-forward transition
    let gap = NaiveDate::from_ymd_opt(2021, 3, 14).unwrap().and_hms_opt(2, 30, 0).unwrap();
    assert_eq!(ny.localize(&gap), None);
}

#[test]
fn test_display() {
    assert_eq!(Zone::Utc.to_string(), "UTC");
    assert_eq!(Zone::Named(chrono_tz::Asia::Tokyo).to_string(), "Asia/Tokyo");
    assert_eq!(Zone::Fixed(FixedOffset::west_opt(8 * 3600).unwrap()).to_string(), "-08:00");
}

#[test]
fn test_from_tz_value() {
    assert_eq!(
        Zone::from_tz_value("America/New_York"),
        Zone::Named(chrono_tz::America::New_York)
    );
    assert_eq!(Zone::from_tz_value(":Europe/Paris"), Zone::Named(chrono_tz::Europe::Paris));
    assert_eq!(Zone::from_tz_value("Etc/UTC"), Zone::Utc);
    assert_eq!(Zone::from_tz_value(""), Zone::Utc);
    assert_eq!(Zone::from_tz_value(":"), Zone::Utc);
    // POSIX rule strings are not IANA names
    assert_eq!(Zone::from_tz_value("EST5EDT,M3.2.0,M11.1.0"), Zone::Local);
    assert_eq!(Zone::from_tz_value("local"), Zone::Local);
}
