//! Period token detection, extraction and encoding.

use chrono::NaiveDate;
use gahshomar::dash::{
    dash_to_date, dash_to_date_with, date_to_dash, detect_period, extract_day_format,
    extract_day_format_with, extract_month_format, extract_season_format, extract_week_format,
    extract_year_format, is_day_format, is_day_format_with, is_month_format, is_month_format_with,
    is_season_format, is_week_format, is_week_format_with, is_year_format, to_day_format,
    to_month_format, to_season_format, to_week_format, to_year_format,
};
use gahshomar::{DateFormat, Period, PeriodKind};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn test_extract_day_format() {
    assert_eq!(extract_day_format("2024-03-20"), Some((2024, 3, 20)));
    assert_eq!(extract_day_format("2024-W12"), None);
    assert_eq!(extract_day_format("2024-3-20"), None);
    assert_eq!(extract_day_format("2024-03-32"), None);
}

#[test]
fn test_extract_other_shapes() {
    assert_eq!(extract_week_format("1404-W12"), Some((1404, 12)));
    assert_eq!(extract_week_format("1404-W00"), None);
    assert_eq!(extract_month_format("1404-07"), Some((1404, 7)));
    assert_eq!(extract_month_format("1404-00"), None);
    assert_eq!(extract_season_format("1404-S2"), Some((1404, 2)));
    assert_eq!(extract_season_format("1404-S02"), Some((1404, 2)));
    assert_eq!(extract_season_format("1404-S0"), None);
    assert_eq!(extract_year_format("1404"), Some(1404));
    assert_eq!(extract_year_format("14045"), None);
}

#[test]
fn test_shapes_are_mutually_exclusive() {
    let tokens = [
        "1404-01-09",
        "1404-W12",
        "1404-W3",
        "1404-01",
        "1404-S2",
        "1404",
        "980",
        "1404-1",
        "1404-S5",
        "1404-W",
        "W12",
        "",
        "۱۴۰۴-۰۱-۰۹",
    ];

    for token in tokens {
        let matches = [
            is_day_format(token),
            is_week_format(token),
            is_month_format(token),
            is_season_format(token),
            is_year_format(token),
        ]
        .iter()
        .filter(|m| **m)
        .count();
        assert!(matches <= 1, "'{}' matched {} shapes", token, matches);
        assert_eq!(matches == 1, detect_period(token, "-").is_some(), "'{}'", token);
    }
}

#[test]
fn test_empty_separator_keeps_shapes_exclusive() {
    // Without a separator a day token would also read as a month token
    let token = to_day_format(14, 4, 1, "");
    assert!(!is_day_format_with(&token, ""));
    assert!(!is_month_format_with(&token, ""));
    assert!(!is_week_format_with("14W04", ""));
    assert_eq!(detect_period(&token, ""), None);
    assert_eq!(extract_day_format_with(&token, ""), None);
    assert_eq!(dash_to_date_with("14040101", DateFormat::Jalali, ""), None);
}

#[test]
fn test_persian_digits_are_not_tokens() {
    assert!(!is_day_format("۱۴۰۴-۰۱-۰۹"));
    assert!(!is_year_format("۱۴۰۴"));
}

#[test]
fn test_custom_separator() {
    assert!(is_day_format_with("1404/01/09", "/"));
    assert!(!is_day_format_with("1404-01-09", "/"));
    assert_eq!(extract_day_format_with("1404.01.09", "."), Some((1404, 1, 9)));
    // The separator is matched literally, not as a pattern
    assert_eq!(extract_day_format_with("1404x01x09", "."), None);
    assert_eq!(detect_period("1404_W05", "_"), Some(PeriodKind::Week));
}

#[test]
fn test_encoding() {
    assert_eq!(to_day_format(1404, 1, 9, "-"), "1404-01-09");
    assert_eq!(to_week_format(1404, 5, "-"), "1404-W05");
    assert_eq!(to_month_format(1404, 12, "/"), "1404/12");
    assert_eq!(to_season_format(1404, 3, "-"), "1404-S3");
    assert_eq!(to_year_format(1404), "1404");
}

#[test]
fn test_encode_then_detect() {
    let periods = [
        Period::Day {
            year: 1404,
            month: 1,
            day: 9,
        },
        Period::Week {
            year: 1404,
            week: 52,
        },
        Period::Month {
            year: 1404,
            month: 11,
        },
        Period::Season {
            year: 1404,
            season: 4,
        },
        Period::Year { year: 1404 },
    ];

    for period in periods {
        let token = period.to_token("-");
        assert_eq!(detect_period(&token, "-"), Some(period.kind()), "{}", token);
        assert_eq!(Period::parse(&token, "-"), Some(period));
    }
}

#[test]
fn test_dash_to_date() {
    assert_eq!(dash_to_date("1403-01-01", DateFormat::Jalali), Some(date(2024, 3, 20)));
    assert_eq!(dash_to_date("2024-03-20", DateFormat::Gregorian), Some(date(2024, 3, 20)));
    assert_eq!(dash_to_date("1447-09-21", DateFormat::Hijri), Some(date(2026, 3, 11)));
    assert_eq!(
        dash_to_date_with("1404/12/20", DateFormat::Jalali, "/"),
        Some(date(2026, 3, 11))
    );

    // Esfand 30 only exists in leap years
    assert_eq!(dash_to_date("1404-12-30", DateFormat::Jalali), None);
    assert_eq!(dash_to_date("2025-02-29", DateFormat::Gregorian), None);
    assert_eq!(dash_to_date("1404-01", DateFormat::Jalali), None);
}

#[test]
fn test_date_to_dash() {
    let d = date(2026, 3, 11);
    assert_eq!(date_to_dash(d, DateFormat::Jalali, "-").as_deref(), Some("1404-12-20"));
    assert_eq!(date_to_dash(d, DateFormat::Gregorian, "-").as_deref(), Some("2026-03-11"));
    assert_eq!(date_to_dash(d, DateFormat::Hijri, "/").as_deref(), Some("1447/09/21"));
}
