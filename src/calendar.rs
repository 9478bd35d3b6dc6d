//! Weekday / weekend split used to pick a timetable.

use std::fmt;

use chrono::{Datelike, NaiveDate, Weekday};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DayType {
    Weekday,
    SaturdayHoliday,
}

impl DayType {
    pub fn key(self) -> &'static str {
        match self {
            DayType::Weekday => "Weekday",
            DayType::SaturdayHoliday => "SaturdayHoliday",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DayType::Weekday => "平日",
            DayType::SaturdayHoliday => "土曜/休日",
        }
    }
}

impl fmt::Display for DayType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Saturdays and Sundays run the Saturday/holiday timetable.
///
/// Public holidays falling on a weekday are not detected and get the
/// weekday timetable.
pub fn classify_day(date: NaiveDate) -> DayType {
    match date.weekday() {
        Weekday::Sat | Weekday::Sun => DayType::SaturdayHoliday,
        _ => DayType::Weekday,
    }
}

/// Label for a timetable key as written in file names; unknown keys map to `""`.
pub fn label_for_key(key: &str) -> &'static str {
    [DayType::Weekday, DayType::SaturdayHoliday]
        .into_iter()
        .find(|day_type| day_type.key() == key)
        .map_or("", DayType::label)
}
