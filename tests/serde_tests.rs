//! Configuration as it arrives from a settings file.

#![cfg(feature = "serde")]

use gahshomar::{DateFormat, EventVisibility, JalaliDate, Locale, Options, WeekStart};

#[test]
fn test_options_from_partial_json() {
    let opts: Options =
        serde_json::from_str(r#"{ "weekStart": "mon", "separator": "/" }"#).unwrap();
    assert_eq!(opts.week_start, WeekStart::Monday);
    assert_eq!(opts.separator, "/");
    assert_eq!(opts.locale, Locale::Fa);
    assert_eq!(opts.date_format, DateFormat::Jalali);
}

#[test]
fn test_options_spellings() {
    let opts: Options = serde_json::from_str(
        r#"{ "weekStart": "sun", "locale": "en", "dateFormat": "gregorian" }"#,
    )
    .unwrap();
    assert_eq!(opts.week_start, WeekStart::Sunday);
    assert_eq!(opts.locale, Locale::En);
    assert_eq!(opts.date_format, DateFormat::Gregorian);

    let json = serde_json::to_value(Options::default()).unwrap();
    assert_eq!(json["weekStart"], "sat");
    assert_eq!(json["locale"], "fa");
    assert_eq!(json["dateFormat"], "jalali");
}

#[test]
fn test_event_visibility_defaults_to_shown() {
    let vis: EventVisibility = serde_json::from_str(r#"{ "irAncient": false }"#).unwrap();
    assert_eq!(
        vis,
        EventVisibility {
            ir_ancient: false,
            ..EventVisibility::all()
        }
    );
}

#[test]
fn test_date_serializes_as_fields() {
    let date = JalaliDate::new(1404, 1, 9).unwrap();
    let json = serde_json::to_value(date).unwrap();
    assert_eq!(json, serde_json::json!({ "year": 1404, "month": 1, "day": 9 }));
}
