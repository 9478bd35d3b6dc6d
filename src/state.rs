//! Tracker state, kept as a sequence of immutable snapshots.

use std::sync::Arc;

use chrono::NaiveDateTime;
use log::*;

use crate::calendar::{classify_day, DayType};
use crate::data::*;
use crate::source::{load_timetable, TimetableSource};
use crate::timetable::Timetable;

/// Everything a board is computed from at one instant.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub direction: Direction,
    pub day_type: DayType,
    pub now: NaiveDateTime,
    pub timetable: Arc<Timetable>,
}

impl Snapshot {
    pub fn key(&self) -> TimetableKey {
        TimetableKey {
            direction: self.direction,
            day_type: self.day_type,
        }
    }

    pub fn now_minutes(&self) -> Time {
        minutes_of_day(&self.now)
    }
}

/// Owns the timetable source and produces a fresh snapshot on every clock
/// tick or direction change.
///
/// The timetable is only refetched when the (direction, day type) pair
/// changes; otherwise the new snapshot shares the previous timetable.
pub struct Tracker<S> {
    source: S,
    snapshot: Arc<Snapshot>,
}

impl<S: TimetableSource> Tracker<S> {
    pub fn new(source: S, direction: Direction, now: NaiveDateTime) -> Self {
        let day_type = classify_day(now.date());
        let timetable = load_timetable(&source, TimetableKey { direction, day_type });
        Self {
            source,
            snapshot: Arc::new(Snapshot {
                direction,
                day_type,
                now,
                timetable: Arc::new(timetable),
            }),
        }
    }

    pub fn snapshot(&self) -> Arc<Snapshot> {
        Arc::clone(&self.snapshot)
    }

    pub fn tick(&mut self, now: NaiveDateTime) -> Arc<Snapshot> {
        self.advance(self.snapshot.direction, now)
    }

    pub fn toggle_direction(&mut self, now: NaiveDateTime) -> Arc<Snapshot> {
        self.advance(self.snapshot.direction.toggled(), now)
    }

    fn advance(&mut self, direction: Direction, now: NaiveDateTime) -> Arc<Snapshot> {
        let key = TimetableKey {
            direction,
            day_type: classify_day(now.date()),
        };

        let timetable = if key == self.snapshot.key() {
            Arc::clone(&self.snapshot.timetable)
        } else {
            info!("Switching timetable from {} to {}", self.snapshot.key(), key);
            Arc::new(load_timetable(&self.source, key))
        };

        self.snapshot = Arc::new(Snapshot {
            direction,
            day_type: key.day_type,
            now,
            timetable,
        });
        debug!("New snapshot at {}", now);
        self.snapshot()
    }
}
