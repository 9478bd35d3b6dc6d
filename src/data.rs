use std::fmt;

use serde::Deserialize;

use crate::calendar::DayType;
use crate::gtfs::RawTimetableEntry;

/// Minutes since midnight.
pub type Time = u32;

pub const MINUTES_PER_DAY: Time = 24 * 60;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Train {
    pub train: String,
    pub departure: String,
    pub destination: String,
    pub departure_minutes: Option<Time>,
}

impl Train {
    /// Minutes from `now` until this train leaves, if it has not left yet.
    pub fn minutes_until(&self, now: Time) -> Option<Time> {
        self.departure_minutes?.checked_sub(now)
    }
}

impl From<RawTimetableEntry> for Train {
    fn from(raw: RawTimetableEntry) -> Self {
        let departure: String = raw
            .departure_time
            .unwrap_or_default()
            .chars()
            .take(5)
            .collect();

        Self {
            train: raw.trip_id,
            departure_minutes: parse_departure(&departure),
            departure,
            destination: raw.trip_headsign.unwrap_or_default(),
        }
    }
}

/// Parses an `HH:MM` wall-clock time into minutes since midnight.
///
/// Single-digit fields are accepted (`7:05`). Only the first two
/// `:`-separated fields are read, so `7:15:` (a truncated `7:15:00`) parses
/// too. Anything else that is not a valid time of day yields `None`.
pub fn parse_departure(departure: &str) -> Option<Time> {
    let mut fields = departure.split(':');
    let hours = fields.next()?;
    let minutes = fields.next()?;
    let hours = parse_field(hours).filter(|&h| h < 24)?;
    let minutes = parse_field(minutes).filter(|&m| m < 60)?;
    Some(hours * 60 + minutes)
}

fn parse_field(field: &str) -> Option<Time> {
    if field.is_empty() || field.len() > 2 || !field.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    field.parse().ok()
}

pub fn minutes_of_day(time: &impl chrono::Timelike) -> Time {
    time.hour() * 60 + time.minute()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Direction {
    #[default]
    OokayamaToSuzukakedai,
    SuzukakedaiToOokayama,
}

impl Direction {
    pub fn toggled(self) -> Self {
        match self {
            Direction::OokayamaToSuzukakedai => Direction::SuzukakedaiToOokayama,
            Direction::SuzukakedaiToOokayama => Direction::OokayamaToSuzukakedai,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Direction::OokayamaToSuzukakedai => "大岡山 → すずかけ台",
            Direction::SuzukakedaiToOokayama => "すずかけ台 → 大岡山",
        }
    }
}

/// Identifies which published timetable file a board is built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimetableKey {
    pub direction: Direction,
    pub day_type: DayType,
}

impl TimetableKey {
    pub fn file_name(&self) -> String {
        match self.direction {
            Direction::OokayamaToSuzukakedai => format!("timetable_{}.json", self.day_type),
            Direction::SuzukakedaiToOokayama => {
                format!("timetable_reverse_{}.json", self.day_type)
            }
        }
    }
}

impl fmt::Display for TimetableKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.direction.title(), self.day_type)
    }
}
