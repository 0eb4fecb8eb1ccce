use std::fmt::{Display, Formatter};

use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::{Date, Month};

use crate::ValidationError;

const ISO_DATE: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");

/// Calendar date without time-of-day or offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarDate(Date);

impl CalendarDate {
    pub fn from_ymd(year: i32, month: u8, day: u8) -> Result<Self, ValidationError> {
        let invalid = || ValidationError::InvalidDateComponents { year, month, day };
        let month = Month::try_from(month).map_err(|_| invalid())?;
        Date::from_calendar_date(year, month, day)
            .map(Self)
            .map_err(|_| invalid())
    }

    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        Date::parse(input.trim(), ISO_DATE)
            .map(Self)
            .map_err(|_| ValidationError::InvalidDate {
                value: input.to_owned(),
            })
    }

    /// Following calendar day, or `None` past the last representable date.
    pub fn next_day(self) -> Option<Self> {
        self.0.next_day().map(Self)
    }

    pub const fn into_inner(self) -> Date {
        self.0
    }

    pub fn format_iso(self) -> String {
        self.to_string()
    }
}

impl From<Date> for CalendarDate {
    fn from(value: Date) -> Self {
        Self(value)
    }
}

impl Display for CalendarDate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02}",
            self.0.year(),
            u8::from(self.0.month()),
            self.0.day()
        )
    }
}

impl Serialize for CalendarDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.format_iso())
    }
}

impl<'de> Deserialize<'de> for CalendarDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Self::parse(&value).map_err(D::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_and_formats_iso_date() {
        let date = CalendarDate::parse("2024-03-01").expect("must parse");
        assert_eq!(date.format_iso(), "2024-03-01");
        assert_eq!(date, CalendarDate::from_ymd(2024, 3, 1).expect("valid"));
    }

    #[test]
    fn rejects_impossible_dates() {
        let err = CalendarDate::from_ymd(2023, 2, 29).expect_err("2023 is not a leap year");
        assert!(matches!(err, ValidationError::InvalidDateComponents { .. }));

        let err = CalendarDate::parse("2024-13-01").expect_err("month 13 is invalid");
        assert!(matches!(err, ValidationError::InvalidDate { .. }));
    }

    #[test]
    fn next_day_crosses_month_and_year_boundaries() {
        let leap = CalendarDate::from_ymd(2024, 2, 28).expect("valid");
        assert_eq!(leap.next_day().map(CalendarDate::format_iso).as_deref(), Some("2024-02-29"));

        let new_year = CalendarDate::from_ymd(2024, 12, 31).expect("valid");
        assert_eq!(
            new_year.next_day(),
            Some(CalendarDate::from_ymd(2025, 1, 1).expect("valid"))
        );

        assert_eq!(CalendarDate::from(Date::MAX).next_day(), None);
    }

    #[test]
    fn serializes_as_iso_string() {
        let date = CalendarDate::from_ymd(2025, 6, 5).expect("valid");
        let json = serde_json::to_string(&date).expect("serialize");
        assert_eq!(json, "\"2025-06-05\"");

        let back: CalendarDate = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, date);
    }
}
