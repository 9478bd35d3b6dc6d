use chrono::Datelike;

use crate::data::*;
use crate::state::Snapshot;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NextDeparture {
    pub departure: String,
    pub destination: String,
    pub minutes_until: Time,
}

/// What the display shows for one snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    pub clock: String,
    pub title: &'static str,
    pub heading: String,
    pub next: Option<NextDeparture>,
    pub remaining: Vec<Train>,
}

impl From<&Snapshot> for Board {
    fn from(snapshot: &Snapshot) -> Self {
        let now = snapshot.now_minutes();
        let timetable = &snapshot.timetable;

        let next = timetable.next_departure(now).and_then(|train| {
            Some(NextDeparture {
                departure: train.departure.to_owned(),
                destination: train.destination.to_owned(),
                minutes_until: train.minutes_until(now)?,
            })
        });

        Self {
            clock: snapshot.now.format("%H:%M:%S").to_string(),
            title: snapshot.direction.title(),
            heading: format!(
                "{}月{}日の時刻表（{}）",
                snapshot.now.month(),
                snapshot.now.day(),
                snapshot.day_type.label()
            ),
            next,
            remaining: timetable.remaining(now).into_iter().cloned().collect(),
        }
    }
}

#[cfg(test)]
mod test {
    use std::sync::Arc;

    use chrono::NaiveDate;

    use super::*;
    use crate::calendar::DayType;
    use crate::gtfs::RawTimetableEntry;
    use crate::timetable::Timetable;

    fn snapshot(h: u32, m: u32, departures: &[&str]) -> Snapshot {
        let raw: Vec<RawTimetableEntry> = departures
            .iter()
            .enumerate()
            .map(|(i, dep)| RawTimetableEntry {
                trip_id: format!("T{i}"),
                departure_time: Some(dep.to_string()),
                trip_headsign: Some("すずかけ台".to_owned()),
            })
            .collect();
        Snapshot {
            direction: Direction::OokayamaToSuzukakedai,
            day_type: DayType::Weekday,
            now: NaiveDate::from_ymd_opt(2026, 10, 20)
                .unwrap()
                .and_hms_opt(h, m, 42)
                .unwrap(),
            timetable: Arc::new(Timetable::from(raw)),
        }
    }

    #[test]
    fn test_board_with_next_train() {
        let board = Board::from(&snapshot(8, 1, &["07:45:00", "08:05:00", "08:25:00"]));
        assert_eq!(board.clock, "08:01:42");
        assert_eq!(board.title, "大岡山 → すずかけ台");
        assert_eq!(board.heading, "10月20日の時刻表（平日）");
        assert_eq!(
            board.next,
            Some(NextDeparture {
                departure: "08:05".to_owned(),
                destination: "すずかけ台".to_owned(),
                minutes_until: 4,
            })
        );
        let remaining: Vec<&str> = board.remaining.iter().map(|t| t.train.as_str()).collect();
        assert_eq!(remaining, vec!["T1", "T2"]);
    }

    #[test]
    fn test_board_after_last_train() {
        let board = Board::from(&snapshot(23, 30, &["07:45:00", "22:05:00"]));
        assert_eq!(board.next, None);
        assert!(board.remaining.is_empty());
    }

    #[test]
    fn test_board_on_empty_timetable() {
        let board = Board::from(&snapshot(8, 0, &[]));
        assert_eq!(board.next, None);
        assert!(board.remaining.is_empty());
        assert_eq!(board.heading, "10月20日の時刻表（平日）");
    }
}
