//! Service calendar: which timetable variant runs on a given day.
//!
//! The schedule only distinguishes weekday and weekend service. There are no
//! holiday exceptions or date ranges.

use std::fmt;

use chrono::{Datelike, NaiveDate, Weekday};

/// Timetable variant a trip belongs to
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ServiceType {
    Weekday,
    Weekend,
}

impl ServiceType {
    /// Decode the single-character service code of the raw dataset.
    ///
    /// Only `weekday_code` maps to weekday service, anything else is weekend.
    pub fn from_code(code: &str, weekday_code: &str) -> Self {
        if code == weekday_code {
            Self::Weekday
        } else {
            Self::Weekend
        }
    }

    /// Days of the week this variant operates
    pub fn days(self) -> WeekdayFlags {
        match self {
            Self::Weekday => WeekdayFlags::from_days(&[
                Weekday::Mon,
                Weekday::Tue,
                Weekday::Wed,
                Weekday::Thu,
                Weekday::Fri,
            ]),
            Self::Weekend => WeekdayFlags::from_days(&[Weekday::Sat, Weekday::Sun]),
        }
    }

    pub fn for_weekday(weekday: Weekday) -> Self {
        if Self::Weekend.days().contains(weekday) {
            Self::Weekend
        } else {
            Self::Weekday
        }
    }

    pub fn for_date(date: NaiveDate) -> Self {
        Self::for_weekday(date.weekday())
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Weekday => "weekday",
            Self::Weekend => "weekend",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Weekday => "Weekday",
            Self::Weekend => "Weekend",
        }
    }
}

impl fmt::Display for ServiceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Compact representation of a set of weekdays
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct WeekdayFlags {
    pub(crate) flags: u8,
}

impl WeekdayFlags {
    pub fn new() -> Self {
        Self { flags: 0 }
    }

    pub fn from_days(days: &[Weekday]) -> Self {
        let mut flags = Self::new();
        for day in days {
            flags.set(*day);
        }
        flags
    }

    pub fn set(&mut self, weekday: Weekday) {
        self.flags |= 1 << weekday.number_from_monday();
    }

    pub fn contains(&self, weekday: Weekday) -> bool {
        (self.flags & (1 << weekday.number_from_monday())) != 0
    }

    pub fn len(&self) -> usize {
        self.flags.count_ones() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.flags == 0
    }
}
