//! Built-in name tables.
//!
//! Every table has a fixed length (12 months, 7 weekdays, 4 seasons), so an
//! out-of-range index is caught by the lookup helpers instead of producing a
//! blank name.

/// Names for one locale.
#[derive(Debug)]
pub struct NameTable {
    pub jalali_months: [&'static str; 12],
    pub gregorian_months: [&'static str; 12],
    pub hijri_months: [&'static str; 12],
    /// Sunday first, matching `Weekday::num_days_from_sunday`
    pub weekdays: [&'static str; 7],
    pub seasons: [&'static str; 4],
    /// Jalali, Gregorian, Hijri
    pub calendars: [&'static str; 3],
    pub holiday_marker: &'static str,
    pub no_events: &'static str,
}

pub static FA: NameTable = NameTable {
    jalali_months: [
        "فروردین",
        "اردیبهشت",
        "خرداد",
        "تیر",
        "مرداد",
        "شهریور",
        "مهر",
        "آبان",
        "آذر",
        "دی",
        "بهمن",
        "اسفند",
    ],
    gregorian_months: [
        "ژانویه",
        "فوریه",
        "مارس",
        "آوریل",
        "مه",
        "ژوئن",
        "ژوئیه",
        "اوت",
        "سپتامبر",
        "اکتبر",
        "نوامبر",
        "دسامبر",
    ],
    hijri_months: [
        "محرم",
        "صفر",
        "ربیع‌الاول",
        "ربیع‌الثانی",
        "جمادی‌الاول",
        "جمادی‌الثانی",
        "رجب",
        "شعبان",
        "رمضان",
        "شوال",
        "ذی‌القعده",
        "ذی‌الحجه",
    ],
    weekdays: [
        "یکشنبه",
        "دوشنبه",
        "سه‌شنبه",
        "چهارشنبه",
        "پنجشنبه",
        "جمعه",
        "شنبه",
    ],
    seasons: ["بهار", "تابستان", "پاییز", "زمستان"],
    calendars: ["هجری شمسی", "میلادی", "هجری قمری"],
    holiday_marker: "تعطیل",
    no_events: "رویدادی وجود ندارد",
};

pub static EN: NameTable = NameTable {
    jalali_months: [
        "Farvardin",
        "Ordibehesht",
        "Khordad",
        "Tir",
        "Mordad",
        "Shahrivar",
        "Mehr",
        "Aban",
        "Azar",
        "Dey",
        "Bahman",
        "Esfand",
    ],
    gregorian_months: [
        "January",
        "February",
        "March",
        "April",
        "May",
        "June",
        "July",
        "August",
        "September",
        "October",
        "November",
        "December",
    ],
    hijri_months: [
        "Muharram",
        "Safar",
        "Rabi' al-Awwal",
        "Rabi' al-Thani",
        "Jumada al-Awwal",
        "Jumada al-Thani",
        "Rajab",
        "Sha'ban",
        "Ramadan",
        "Shawwal",
        "Dhu al-Qi'dah",
        "Dhu al-Hijjah",
    ],
    weekdays: [
        "Sunday",
        "Monday",
        "Tuesday",
        "Wednesday",
        "Thursday",
        "Friday",
        "Saturday",
    ],
    seasons: ["Spring", "Summer", "Autumn", "Winter"],
    calendars: ["Jalali", "Gregorian", "Hijri"],
    holiday_marker: "holiday",
    no_events: "No events",
};
