// Rust guideline compliant 2026-10-12

//! Relative "time ago" formatting.

use crate::labels::{localize_number, month_day};
use crate::Locale;
use chrono::{DateTime, Utc};

const MINUTE: i64 = 60;
const HOUR: i64 = 60 * MINUTE;
const DAY: i64 = 24 * HOUR;

/// Formats the age of `created_at` relative to `now`.
///
/// Thresholds are evaluated in order and the first match wins: under a
/// minute, minutes, hours, exactly one day ("yesterday"), days, weeks, and
/// finally an absolute month/day date once the age reaches thirty days.
/// Timestamps in the future count as "moments ago".
///
/// # Arguments
///
/// * `created_at` - The timestamp to describe
/// * `now` - The reference time
/// * `locale` - Language and digit script of the output
pub fn relative_time(created_at: DateTime<Utc>, now: DateTime<Utc>, locale: Locale) -> String {
    let seconds = (now - created_at).num_seconds();

    if seconds < MINUTE {
        return match locale {
            Locale::Fa => "لحظاتی پیش".to_string(),
            Locale::En => "moments ago".to_string(),
        };
    }

    if seconds < HOUR {
        return ago(seconds / MINUTE, Unit::Minute, locale);
    }

    if seconds < DAY {
        return ago(seconds / HOUR, Unit::Hour, locale);
    }

    let days = seconds / DAY;
    if days == 1 {
        return match locale {
            Locale::Fa => "دیروز".to_string(),
            Locale::En => "yesterday".to_string(),
        };
    }
    if days < 7 {
        return ago(days, Unit::Day, locale);
    }
    if days < 30 {
        return ago(days / 7, Unit::Week, locale);
    }

    month_day(created_at.date_naive(), locale)
}

#[derive(Clone, Copy)]
enum Unit {
    Minute,
    Hour,
    Day,
    Week,
}

fn ago(n: i64, unit: Unit, locale: Locale) -> String {
    match locale {
        Locale::Fa => {
            let word = match unit {
                Unit::Minute => "دقیقه",
                Unit::Hour => "ساعت",
                Unit::Day => "روز",
                Unit::Week => "هفته",
            };
            format!("{} {} پیش", localize_number(n, locale), word)
        }
        Locale::En => {
            let word = match unit {
                Unit::Minute => "minute",
                Unit::Hour => "hour",
                Unit::Day => "day",
                Unit::Week => "week",
            };
            let plural = if n == 1 { "" } else { "s" };
            format!("{} {}{} ago", n, word, plural)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 17, 12, 0, 0).unwrap()
    }

    fn en(age: Duration) -> String {
        relative_time(now() - age, now(), Locale::En)
    }

    #[test]
    fn test_moments_ago() {
        assert_eq!(en(Duration::seconds(30)), "moments ago");
        assert_eq!(en(Duration::seconds(59)), "moments ago");
    }

    #[test]
    fn test_future_timestamp_is_moments_ago() {
        assert_eq!(en(Duration::seconds(-300)), "moments ago");
    }

    #[test]
    fn test_minutes_and_hours() {
        assert_eq!(en(Duration::minutes(5)), "5 minutes ago");
        assert_eq!(en(Duration::minutes(1)), "1 minute ago");
        assert_eq!(en(Duration::minutes(59)), "59 minutes ago");
        assert_eq!(en(Duration::minutes(60)), "1 hour ago");
        assert_eq!(en(Duration::hours(23)), "23 hours ago");
    }

    #[test]
    fn test_yesterday_covers_whole_second_day() {
        assert_eq!(en(Duration::hours(24)), "yesterday");
        assert_eq!(en(Duration::hours(25)), "yesterday");
        assert_eq!(en(Duration::hours(47)), "yesterday");
        assert_eq!(en(Duration::hours(48)), "2 days ago");
    }

    #[test]
    fn test_days_and_weeks() {
        assert_eq!(en(Duration::days(6)), "6 days ago");
        assert_eq!(en(Duration::days(7)), "1 week ago");
        assert_eq!(en(Duration::days(10)), "1 week ago");
        assert_eq!(en(Duration::days(29)), "4 weeks ago");
    }

    #[test]
    fn test_absolute_date_after_thirty_days() {
        // 2026-09-07
        assert_eq!(en(Duration::days(40)), "September 7");
        assert_eq!(
            relative_time(now() - Duration::days(40), now(), Locale::Fa),
            "۱۶ شهریور"
        );
    }

    #[test]
    fn test_persian_phrases() {
        let fa = |age: Duration| relative_time(now() - age, now(), Locale::Fa);
        assert_eq!(fa(Duration::seconds(10)), "لحظاتی پیش");
        assert_eq!(fa(Duration::minutes(5)), "۵ دقیقه پیش");
        assert_eq!(fa(Duration::hours(25)), "دیروز");
        assert_eq!(fa(Duration::days(3)), "۳ روز پیش");
        assert_eq!(fa(Duration::days(14)), "۲ هفته پیش");
    }
}
