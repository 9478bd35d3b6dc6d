use crate::data::*;
use crate::departures;
use crate::gtfs::RawTimetableEntry;

/// A day's departures in one direction, in the order the file lists them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Timetable {
    pub trains: Vec<Train>,
}

impl Timetable {
    pub fn is_empty(&self) -> bool {
        self.trains.is_empty()
    }

    pub fn len(&self) -> usize {
        self.trains.len()
    }

    pub fn next_departure(&self, now: Time) -> Option<&Train> {
        departures::select_next(&self.trains, now)
    }

    pub fn remaining(&self, now: Time) -> Vec<&Train> {
        departures::remaining(&self.trains, now)
    }
}

impl From<Vec<RawTimetableEntry>> for Timetable {
    fn from(raw: Vec<RawTimetableEntry>) -> Self {
        Self {
            trains: normalize(raw),
        }
    }
}

/// Converts raw entries one-to-one, keeping their order.
pub fn normalize(raw: Vec<RawTimetableEntry>) -> Vec<Train> {
    raw.into_iter().map(Train::from).collect()
}
