// Rust guideline compliant 2026-10-12

//! Display labels and locale-aware number and date rendering.
//!
//! Domain enums carry no display text of their own; every user-facing
//! string is looked up here by locale.

use crate::{Category, Condition, Error, Gender, Result, Status};
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Supported display locales.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Locale {
    /// Persian, Eastern Arabic-Indic digits, Solar Hijri dates.
    #[default]
    Fa,
    /// English, ASCII digits, Gregorian dates.
    En,
}

impl FromStr for Locale {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self> {
        match value.to_ascii_lowercase().as_str() {
            "fa" | "fa-ir" | "fa_ir" => Ok(Locale::Fa),
            "en" | "en-us" | "en_us" | "en-gb" => Ok(Locale::En),
            _ => Err(Error::Config(format!(
                "Unsupported locale '{}', expected fa or en",
                value
            ))),
        }
    }
}

/// A domain value with a localized display label.
pub trait Label {
    /// Returns the display label for `locale`.
    fn label(&self, locale: Locale) -> &'static str;
}

impl Label for Category {
    fn label(&self, locale: Locale) -> &'static str {
        match (self, locale) {
            (Category::Home, Locale::Fa) => "خانه و آشپزخانه",
            (Category::Home, Locale::En) => "Home & Kitchen",
            (Category::Electronics, Locale::Fa) => "کالای دیجیتال",
            (Category::Electronics, Locale::En) => "Electronics",
            (Category::Clothing, Locale::Fa) => "پوشاک",
            (Category::Clothing, Locale::En) => "Clothing",
            (Category::Books, Locale::Fa) => "کتاب و لوازم تحریر",
            (Category::Books, Locale::En) => "Books & Stationery",
            (Category::Sports, Locale::Fa) => "ورزش و سرگرمی",
            (Category::Sports, Locale::En) => "Sports & Leisure",
            (Category::Kids, Locale::Fa) => "کودک و نوزاد",
            (Category::Kids, Locale::En) => "Kids & Baby",
            (Category::Vehicles, Locale::Fa) => "وسایل نقلیه",
            (Category::Vehicles, Locale::En) => "Vehicles",
            (Category::Others, Locale::Fa) => "سایر",
            (Category::Others, Locale::En) => "Others",
        }
    }
}

impl Label for Condition {
    fn label(&self, locale: Locale) -> &'static str {
        match (self, locale) {
            (Condition::New, Locale::Fa) => "نو",
            (Condition::New, Locale::En) => "New",
            (Condition::AlmostNew, Locale::Fa) => "در حد نو",
            (Condition::AlmostNew, Locale::En) => "Almost new",
            (Condition::Used, Locale::Fa) => "کارکرده",
            (Condition::Used, Locale::En) => "Used",
            (Condition::NeedsRepair, Locale::Fa) => "نیاز به تعمیر",
            (Condition::NeedsRepair, Locale::En) => "Needs repair",
        }
    }
}

impl Label for Gender {
    fn label(&self, locale: Locale) -> &'static str {
        match (self, locale) {
            (Gender::Male, Locale::Fa) => "مرد",
            (Gender::Male, Locale::En) => "Male",
            (Gender::Female, Locale::Fa) => "زن",
            (Gender::Female, Locale::En) => "Female",
            (Gender::RatherNotSay, Locale::Fa) => "ترجیح می‌دهم نگویم",
            (Gender::RatherNotSay, Locale::En) => "Rather not say",
        }
    }
}

impl Label for Status {
    fn label(&self, locale: Locale) -> &'static str {
        match (self, locale) {
            (Status::Available, Locale::Fa) => "موجود",
            (Status::Available, Locale::En) => "Available",
            (Status::Reserved, Locale::Fa) => "رزرو شده",
            (Status::Reserved, Locale::En) => "Reserved",
            (Status::Given, Locale::Fa) => "اهدا شده",
            (Status::Given, Locale::En) => "Given",
        }
    }
}

const PERSIAN_DIGITS: [char; 10] = ['۰', '۱', '۲', '۳', '۴', '۵', '۶', '۷', '۸', '۹'];

const JALALI_MONTHS: [&str; 12] = [
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
];

/// Rewrites ASCII digits in `text` into the native script of `locale`.
pub fn localize_digits(text: &str, locale: Locale) -> String {
    match locale {
        Locale::En => text.to_string(),
        Locale::Fa => text
            .chars()
            .map(|c| match c.to_digit(10) {
                Some(d) if c.is_ascii_digit() => PERSIAN_DIGITS[d as usize],
                _ => c,
            })
            .collect(),
    }
}

/// Renders an integer in the native digit script of `locale`.
pub fn localize_number(n: i64, locale: Locale) -> String {
    localize_digits(&n.to_string(), locale)
}

/// Converts a Gregorian date into a Solar Hijri `(year, month, day)`.
pub fn to_jalali(date: NaiveDate) -> (i64, u32, u32) {
    const CUMULATIVE_DAYS: [i64; 12] = [0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334];

    let gy = i64::from(date.year());
    let gm = date.month() as usize;
    let gd = i64::from(date.day());

    let gy2 = if gm > 2 { gy + 1 } else { gy };
    let mut days = 355_666 + 365 * gy + (gy2 + 3) / 4 - (gy2 + 99) / 100 + (gy2 + 399) / 400
        + gd
        + CUMULATIVE_DAYS[gm - 1];

    let mut jy = -1595 + 33 * (days / 12_053);
    days %= 12_053;
    jy += 4 * (days / 1461);
    days %= 1461;
    if days > 365 {
        jy += (days - 1) / 365;
        days = (days - 1) % 365;
    }

    let (jm, jd) = if days < 186 {
        (1 + days / 31, 1 + days % 31)
    } else {
        (7 + (days - 186) / 30, 1 + (days - 186) % 30)
    };

    (jy, jm as u32, jd as u32)
}

/// Formats a date as a localized "month day" without a year.
///
/// Persian uses the Solar Hijri calendar ("۲۵ مهر"), English the
/// Gregorian one ("October 17").
pub fn month_day(date: NaiveDate, locale: Locale) -> String {
    match locale {
        Locale::Fa => {
            let (_, month, day) = to_jalali(date);
            format!(
                "{} {}",
                localize_number(i64::from(day), locale),
                JALALI_MONTHS[(month - 1) as usize]
            )
        }
        Locale::En => date.format("%B %-d").to_string(),
    }
}
