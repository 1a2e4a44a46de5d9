use chrono::Weekday;
use gahshomar::locale::{
    calendar_name, format_jalali_date, from_persian_digits, month_name, season_name,
    to_arabic_digits, to_persian_digits, weekday_name,
};
use gahshomar::{dash, DateFormat, JalaliDate, Locale};

#[test]
fn test_month_names_per_calendar() {
    assert_eq!(month_name(DateFormat::Jalali, 12, Locale::Fa), Some("اسفند"));
    assert_eq!(month_name(DateFormat::Gregorian, 3, Locale::Fa), Some("مارس"));
    assert_eq!(month_name(DateFormat::Hijri, 9, Locale::Fa), Some("رمضان"));
    assert_eq!(month_name(DateFormat::Hijri, 9, Locale::En), Some("Ramadan"));
    assert_eq!(month_name(DateFormat::Jalali, 0, Locale::Fa), None);
    assert_eq!(month_name(DateFormat::Jalali, 13, Locale::Fa), None);
}

#[test]
fn test_every_month_has_a_name() {
    for locale in [Locale::Fa, Locale::En] {
        for calendar in DateFormat::ALL {
            for month in 1..=12 {
                let name = month_name(calendar, month, locale).unwrap();
                assert!(!name.is_empty(), "{} {} {}", locale, calendar, month);
            }
        }
    }
}

#[test]
fn test_weekday_and_calendar_names() {
    assert_eq!(weekday_name(Weekday::Sat, Locale::Fa), "شنبه");
    assert_eq!(weekday_name(Weekday::Fri, Locale::Fa), "جمعه");
    assert_eq!(weekday_name(Weekday::Sun, Locale::En), "Sunday");
    assert_eq!(calendar_name(DateFormat::Jalali, Locale::Fa), "هجری شمسی");
    assert_eq!(calendar_name(DateFormat::Hijri, Locale::En), "Hijri");
    assert_eq!(season_name(2, Locale::Fa), Some("تابستان"));
    assert_eq!(season_name(0, Locale::Fa), None);
}

#[test]
fn test_format_jalali_date() {
    let date = JalaliDate::new(1404, 12, 20).unwrap();
    assert_eq!(
        format_jalali_date(date, Locale::Fa).as_deref(),
        Some("۲۰ اسفند ۱۴۰۴")
    );
    assert_eq!(
        format_jalali_date(date, Locale::En).as_deref(),
        Some("20 Esfand 1404")
    );
}

#[test]
fn test_digit_conversion() {
    assert_eq!(to_persian_digits("1404-01-09"), "۱۴۰۴-۰۱-۰۹");
    assert_eq!(to_arabic_digits("1447"), "١٤٤٧");
    assert_eq!(from_persian_digits("۱۴۰۴-۰۱-۰۹"), "1404-01-09");
    assert_eq!(from_persian_digits("١٤٤٧ and ۱۴۰۴"), "1447 and 1404");
    assert_eq!(to_persian_digits("no digits"), "no digits");
}

#[test]
fn test_persian_input_can_be_normalized_into_a_token() {
    let typed = "۱۴۰۴-۰۱-۰۹";
    assert!(!dash::is_day_format(typed));
    assert!(dash::is_day_format(&from_persian_digits(typed)));
}

#[test]
fn test_locale_digits() {
    assert_eq!(Locale::Fa.digits("12"), "۱۲");
    assert_eq!(Locale::En.digits("12"), "12");
}
