use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

static DATE_TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([+-]?\d+)-([+-]?\d+)-([+-]?\d+)$").expect("date pattern is valid")
});

/// Calendar date with no timezone. Always holds a valid day for its month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Date {
    day: i32,
    month: i32,
    year: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateError {
    /// The token is not shaped like `D-M-Y`.
    Malformed,
    /// The numbers do not name a day on the calendar.
    OutOfCalendar,
}

impl fmt::Display for DateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DateError::Malformed => write!(f, "expected a date formatted as D-M-Y"),
            DateError::OutOfCalendar => write!(f, "no such day in the calendar"),
        }
    }
}

impl std::error::Error for DateError {}

pub fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

pub fn days_in_month(month: i32, year: i32) -> Option<i32> {
    let days = match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => return None,
    };
    Some(days)
}

pub fn is_valid_date(day: i32, month: i32, year: i32) -> bool {
    match days_in_month(month, year) {
        Some(last) => (1..=last).contains(&day),
        None => false,
    }
}

impl Date {
    pub fn new(day: i32, month: i32, year: i32) -> Option<Self> {
        is_valid_date(day, month, year).then_some(Self { day, month, year })
    }

    pub fn day(&self) -> i32 {
        self.day
    }

    pub fn month(&self) -> i32 {
        self.month
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// True when `self` falls on or after `other`.
    pub fn is_not_before(&self, other: &Date) -> bool {
        self >= other
    }
}

impl Default for Date {
    /// 1 January 2025, the clock's starting point.
    fn default() -> Self {
        Self {
            day: 1,
            month: 1,
            year: 2025,
        }
    }
}

impl Ord for Date {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.year, self.month, self.day).cmp(&(other.year, other.month, other.day))
    }
}

impl PartialOrd for Date {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}-{:02}-{:04}", self.day, self.month, self.year)
    }
}

impl FromStr for Date {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let caps = DATE_TOKEN.captures(s.trim()).ok_or(DateError::Malformed)?;
        // Numbers too large for i32 cannot be calendar days either.
        let field = |i: usize| caps[i].parse::<i32>().map_err(|_| DateError::OutOfCalendar);
        let (day, month, year) = (field(1)?, field(2)?, field(3)?);
        Date::new(day, month, year).ok_or(DateError::OutOfCalendar)
    }
}

impl Serialize for Date {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Date {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse()
            .map_err(|e| serde::de::Error::custom(format!("invalid date '{}': {}", raw, e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leap_years() {
        assert!(is_leap_year(2024));
        assert!(is_leap_year(2000));
        assert!(!is_leap_year(1900));
        assert!(!is_leap_year(2025));
    }

    #[test]
    fn test_is_valid_date() {
        assert!(is_valid_date(29, 2, 2024));
        assert!(!is_valid_date(29, 2, 2025));
        assert!(!is_valid_date(31, 4, 2025));
        assert!(is_valid_date(31, 12, 2025));
        assert!(!is_valid_date(0, 1, 2025));
        assert!(!is_valid_date(1, 13, 2025));
        assert!(!is_valid_date(1, 0, 2025));
        assert!(is_valid_date(1, 1, 99999));
    }

    #[test]
    fn test_ordering_is_year_month_day() {
        let a = Date::new(31, 12, 2024).unwrap();
        let b = Date::new(1, 1, 2025).unwrap();
        let c = Date::new(2, 1, 2025).unwrap();
        assert!(a < b);
        assert!(b < c);
        assert_eq!(b.cmp(&b), Ordering::Equal);
        assert!(c.is_not_before(&b));
        assert!(b.is_not_before(&b));
        assert!(!a.is_not_before(&b));
    }

    #[test]
    fn test_parse_and_display() {
        let date: Date = "1-6-2025".parse().unwrap();
        assert_eq!(date.to_string(), "01-06-2025");
        assert_eq!("31-02-2025".parse::<Date>(), Err(DateError::OutOfCalendar));
        assert_eq!("tomorrow".parse::<Date>(), Err(DateError::Malformed));
        assert_eq!("1-6".parse::<Date>(), Err(DateError::Malformed));
        assert_eq!("1-6-99999999999".parse::<Date>(), Err(DateError::OutOfCalendar));
    }

    #[test]
    fn test_default_is_first_of_january_2025() {
        assert_eq!(Date::default().to_string(), "01-01-2025");
    }
}
