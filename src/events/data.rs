//! Static event tables.
//!
//! Each table is keyed by (month, day) in its own calendar: Iranian
//! government and ancient events in the Jalali calendar, Islamic events in
//! the Hijri calendar and global observances in the Gregorian calendar.

use super::{EventBase, EventRecord};

const fn gov(month: u32, day: u32, title: &'static str, holiday: bool) -> EventRecord {
    EventRecord {
        month,
        day,
        base: EventBase::IrGovernment,
        title,
        holiday,
    }
}

const fn ancient(month: u32, day: u32, title: &'static str) -> EventRecord {
    EventRecord {
        month,
        day,
        base: EventBase::IrAncient,
        title,
        holiday: false,
    }
}

const fn islam(month: u32, day: u32, title: &'static str, holiday: bool) -> EventRecord {
    EventRecord {
        month,
        day,
        base: EventBase::IrIslam,
        title,
        holiday,
    }
}

const fn global(month: u32, day: u32, title: &'static str) -> EventRecord {
    EventRecord {
        month,
        day,
        base: EventBase::Global,
        title,
        holiday: false,
    }
}

pub(super) static JALALI_EVENTS: &[EventRecord] = &[
    gov(1, 1, "جشن نوروز/جشن سال نو", true),
    gov(1, 2, "عیدنوروز", true),
    gov(1, 3, "عیدنوروز", true),
    gov(1, 4, "عیدنوروز", true),
    gov(1, 12, "روز جمهوری اسلامی", true),
    gov(1, 13, "جشن سیزده به در", true),
    gov(1, 18, "روز سلامتی", false),
    gov(1, 25, "روز بزرگداشت عطار نیشابوری", false),
    gov(2, 1, "روز بزرگداشت سعدی", false),
    gov(2, 12, "روز معلم", false),
    gov(2, 25, "روز بزرگداشت فردوسی", false),
    gov(3, 3, "فتح خرمشهر در عملیات بیت‌المقدس", false),
    gov(3, 14, "رحلت حضرت امام خمینی", true),
    gov(3, 15, "قیام خونین ۱۵ خرداد", true),
    gov(5, 14, "صدور فرمان مشروطیت", false),
    gov(6, 1, "روز بزرگداشت ابوعلی سینا و روز پزشک", false),
    gov(6, 31, "آغاز هفته دفاع مقدس", false),
    gov(7, 8, "روز بزرگداشت مولوی", false),
    gov(7, 20, "روز بزرگداشت حافظ", false),
    gov(8, 13, "روز دانش‌آموز", false),
    gov(9, 16, "روز دانشجو", false),
    gov(11, 22, "پیروزی انقلاب اسلامی", true),
    gov(12, 5, "روز بزرگداشت خواجه نصیرالدین طوسی و روز مهندسی", false),
    gov(12, 15, "روز درختکاری", false),
    gov(12, 29, "روز ملی شدن صنعت نفت ایران", true),
    ancient(1, 1, "آغاز نوروز"),
    ancient(1, 6, "روز امید، روز شادباش نویسی"),
    ancient(1, 10, "جشن آبانگاه"),
    ancient(1, 17, "سروش روز، جشن سروشگان"),
    ancient(1, 19, "فروردین روز، جشن فروردینگان"),
    ancient(2, 3, "اردیبهشت روز، جشن اردیبهشتگان"),
    ancient(2, 10, "جشن چهلم نوروز"),
    ancient(2, 15, "جشن میانه بهار، جشن بهاربد"),
    ancient(3, 1, "ارغاسوان، جشن گرما"),
    ancient(3, 6, "خرداد روز، جشن خردادگان"),
    ancient(4, 1, "جشن آب‌پاشونک، جشن آغاز تابستان"),
    ancient(4, 13, "تیرروز، جشن تیرگان"),
    ancient(4, 15, "جشن خام‌خواری"),
    ancient(5, 7, "مرداد روز، جشن مردادگان"),
    ancient(5, 18, "جشن مَی‌خواره"),
    ancient(6, 4, "شهریور روز، جشن شهریورگان"),
    ancient(7, 10, "مهر روز، جشن مهرگان"),
    ancient(8, 10, "آبان روز، جشن آبانگان"),
    ancient(9, 1, "آذر جشن"),
    ancient(9, 9, "آذر روز، جشن آذرگان"),
    ancient(9, 30, "جشن شب یلدا"),
    ancient(10, 1, "روز میلاد خورشید، جشن خرم روز"),
    ancient(10, 8, "دی به مهر روز، جشن دی به مهر"),
    ancient(10, 14, "سیر سور، جشن گیاه‌خواری"),
    ancient(11, 2, "بهمن روز، جشن بهمنگان"),
    ancient(11, 10, "جشن سده"),
    ancient(12, 5, "اسفندروز، جشن اسفندگان، روز گرامیداشت زمین و بانوان"),
    ancient(12, 29, "جشن پایان سال"),
];

pub(super) static HIJRI_EVENTS: &[EventRecord] = &[
    islam(1, 1, "آغاز سال هجری قمری", false),
    islam(1, 9, "تاسوعای حسینی", true),
    islam(1, 10, "عاشورای حسینی", true),
    islam(1, 12, "شهادت امام زین‌العابدین (ع)", false),
    islam(2, 20, "اربعین حسینی", true),
    islam(2, 28, "رحلت رسول اکرم؛ شهادت امام حسن مجتبی (ع)", true),
    islam(2, 30, "شهادت امام رضا (ع)", true),
    islam(3, 8, "شهادت امام حسن عسکری (ع)", true),
    islam(3, 17, "میلاد رسول اکرم و امام جعفر صادق (ع)", true),
    islam(5, 5, "ولادت حضرت زینب (س) و روز پرستار", false),
    islam(6, 3, "شهادت حضرت فاطمه زهرا (س)", true),
    islam(6, 20, "ولادت حضرت فاطمه زهرا (س) و روز زن", false),
    islam(7, 1, "ولادت امام محمد باقر (ع)", false),
    islam(7, 13, "ولادت امام علی (ع) و روز پدر", true),
    islam(7, 27, "مبعث رسول اکرم (ص)", true),
    islam(8, 3, "ولادت امام حسین (ع) و روز پاسدار", false),
    islam(8, 15, "ولادت حضرت قائم (عج) و جشن نیمه شعبان", true),
    islam(9, 15, "ولادت امام حسن مجتبی (ع)", false),
    islam(9, 19, "شب قدر و ضربت خوردن حضرت علی (ع)", false),
    islam(9, 21, "شهادت حضرت علی (ع)", true),
    islam(9, 23, "شب قدر", false),
    islam(10, 1, "عید سعید فطر", true),
    islam(10, 2, "تعطیل به مناسبت عید سعید فطر", true),
    islam(10, 25, "شهادت امام جعفر صادق (ع)", true),
    islam(11, 1, "ولادت حضرت معصومه (س) و روز دختران", false),
    islam(11, 11, "ولادت امام رضا (ع)", false),
    islam(12, 9, "روز عرفه", false),
    islam(12, 10, "عید سعید قربان", true),
    islam(12, 18, "عید سعید غدیر خم", true),
];

pub(super) static GREGORIAN_EVENTS: &[EventRecord] = &[
    global(1, 1, "آغاز سال نو میلادی"),
    global(2, 14, "روز ولنتاین"),
    global(3, 8, "روز جهانی زن"),
    global(3, 21, "روز جهانی نوروز"),
    global(3, 22, "روز جهانی آب"),
    global(4, 22, "روز زمین پاک"),
    global(5, 1, "روز جهانی کارگر"),
    global(5, 18, "روز جهانی موزه و میراث فرهنگی"),
    global(6, 5, "روز جهانی محیط زیست"),
    global(9, 27, "روز جهانی جهانگردی"),
    global(10, 1, "روز جهانی سالمندان"),
    global(10, 5, "روز جهانی معلم"),
    global(10, 16, "روز جهانی غذا"),
    global(12, 10, "روز جهانی حقوق بشر"),
    global(12, 25, "کریسمس"),
];
