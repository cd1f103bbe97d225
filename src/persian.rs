//! Persian calendar and numeral helpers
//!
//! Dates in the dataset are Solar Hijri strings such as `1370/01/15`, written
//! with either ASCII or Persian digits. Display numbers follow the `fa-IR`
//! conventions: Persian digits, `٬` between thousands groups, `٫` before the
//! fraction.

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

lazy_static! {
    static ref DATE_REGEX: Regex =
        Regex::new(r"^\s*([0-9]{1,4})\s*[/\-.]\s*([0-9]{1,2})\s*[/\-.]\s*([0-9]{1,2})\s*$").unwrap();
}

/// The twelve Solar Hijri months in calendar order
pub const MONTHS: [&str; 12] = [
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

const GROUP_SEPARATOR: char = '٬';
const DECIMAL_SEPARATOR: char = '٫';

/// A parsed Solar Hijri calendar date
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersianDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl PersianDate {
    /// Parse a `YYYY/MM/DD` date; `-` and `.` are accepted as separators
    ///
    /// Returns `None` when the text is not a date or the month/day are out of range.
    pub fn parse(text: &str) -> Option<Self> {
        let normalized = normalize_digits(text);
        let caps = DATE_REGEX.captures(&normalized)?;
        let year = caps[1].parse().ok()?;
        let month: u32 = caps[2].parse().ok()?;
        let day: u32 = caps[3].parse().ok()?;
        if !(1..=12).contains(&month) || !(1..=31).contains(&day) {
            return None;
        }
        Some(PersianDate { year, month, day })
    }

    /// Name of this date's month; `None` when the month is not in `1..=12`
    pub fn month_name(&self) -> Option<&'static str> {
        month_name(self.month)
    }

    /// Format as `YYYY/M/D` without zero padding
    pub fn to_compact_string(&self) -> String {
        format!("{}/{}/{}", self.year, self.month, self.day)
    }
}

/// Year component of a date string
///
/// Only the part before the first separator has to be numeric, so partially
/// filled dates such as `1370/` still yield a year.
pub fn year_of(text: &str) -> Option<i32> {
    let normalized = normalize_digits(text);
    let head = normalized.trim().split(['/', '-', '.']).next()?.trim();
    if head.is_empty() || !head.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    head.parse().ok()
}

/// Month name for a 1-based month number
pub fn month_name(month: u32) -> Option<&'static str> {
    if (1..=12).contains(&month) {
        Some(MONTHS[(month - 1) as usize])
    } else {
        None
    }
}

/// Replace Persian and Arabic-Indic digits with ASCII digits
pub fn normalize_digits(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            '\u{06F0}'..='\u{06F9}' => char::from(b'0' + (c as u32 - 0x06F0) as u8),
            '\u{0660}'..='\u{0669}' => char::from(b'0' + (c as u32 - 0x0660) as u8),
            _ => c,
        })
        .collect()
}

/// Replace ASCII digits with Persian digits
pub fn to_persian_digits(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            '0'..='9' => char::from_u32(0x06F0 + (c as u32 - '0' as u32)).unwrap_or(c),
            _ => c,
        })
        .collect()
}

/// Format an integer the way `fa-IR` number formatting does
///
/// # Examples
/// ```
/// use hr_dashboard::persian::format_number;
///
/// assert_eq!(format_number(120000000), "۱۲۰٬۰۰۰٬۰۰۰");
/// assert_eq!(format_number(78), "۷۸");
/// ```
pub fn format_number(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let grouped = group_thousands(&digits);
    let sign = if value < 0 { "-" } else { "" };
    format!("{}{}", sign, to_persian_digits(&grouped))
}

/// Format a value with a fixed number of decimals using Persian numerals
///
/// Non-finite values render as zero.
pub fn format_decimal(value: f64, decimals: usize) -> String {
    let value = if value.is_finite() { value } else { 0.0 };
    let fixed = format!("{:.*}", decimals, value.abs());
    let (int_part, frac_part) = match fixed.split_once('.') {
        Some((i, f)) => (i.to_string(), Some(f.to_string())),
        None => (fixed.clone(), None),
    };

    let mut out = String::new();
    if value < 0.0 && fixed.chars().any(|c| c.is_ascii_digit() && c != '0') {
        out.push('-');
    }
    out.push_str(&to_persian_digits(&group_thousands(&int_part)));
    if let Some(frac) = frac_part {
        out.push(DECIMAL_SEPARATOR);
        out.push_str(&to_persian_digits(&frac));
    }
    out
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut grouped = String::with_capacity(len + len / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push(GROUP_SEPARATOR);
        }
        grouped.push(c);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_ascii_and_persian_dates() {
        let ascii = PersianDate::parse("1370/01/15").unwrap();
        assert_eq!(ascii, PersianDate { year: 1370, month: 1, day: 15 });
        assert_eq!(ascii.month_name(), Some("فروردین"));

        let persian = PersianDate::parse("۱۳۶۵/۱۲/۰۳").unwrap();
        assert_eq!(persian.year, 1365);
        assert_eq!(persian.month_name(), Some("اسفند"));
    }

    #[test]
    fn hand_built_date_with_bad_month_has_no_name() {
        let zero = PersianDate { year: 1370, month: 0, day: 1 };
        assert_eq!(zero.month_name(), None);
        let thirteen = PersianDate { year: 1370, month: 13, day: 1 };
        assert_eq!(thirteen.month_name(), None);
    }

    #[test]
    fn rejects_out_of_range_month() {
        assert!(PersianDate::parse("1370/13/01").is_none());
        assert!(PersianDate::parse("not a date").is_none());
    }

    #[test]
    fn year_from_partial_date() {
        assert_eq!(year_of("1370/01/15"), Some(1370));
        assert_eq!(year_of("1380"), Some(1380));
        assert_eq!(year_of("abc/01/01"), None);
        assert_eq!(year_of(""), None);
    }

    #[test]
    fn formats_numbers_with_persian_digits() {
        assert_eq!(format_number(0), "۰");
        assert_eq!(format_number(1234), "۱٬۲۳۴");
        assert_eq!(format_number(-5000), "-۵٬۰۰۰");
        assert_eq!(format_decimal(33.456, 2), "۳۳٫۴۶");
        assert_eq!(format_decimal(f64::NAN, 2), "۰٫۰۰");
    }
}
