use crate::data::*;

/// Finds the soonest departure at or after `now`.
///
/// Trains without a usable departure time are skipped. When several trains
/// share the smallest wait, the one listed first wins.
pub fn select_next(trains: &[Train], now: Time) -> Option<&Train> {
    trains
        .iter()
        .filter_map(|train| Some((train.minutes_until(now)?, train)))
        .min_by_key(|&(wait, _)| wait)
        .map(|(_, train)| train)
}

/// Departures still to come today, in timetable order.
pub fn remaining(trains: &[Train], now: Time) -> Vec<&Train> {
    trains
        .iter()
        .filter(|train| matches!(train.departure_minutes, Some(dep) if dep >= now))
        .collect()
}

#[cfg(test)]
mod test {
    use super::*;

    fn train(id: &str, departure: &str) -> Train {
        Train {
            train: id.to_owned(),
            departure: departure.to_owned(),
            destination: String::new(),
            departure_minutes: parse_departure(departure),
        }
    }

    fn sample() -> Vec<Train> {
        vec![
            train("A", "05:48"),
            train("B", "06:10"),
            train("C", ""),
            train("D", "07:35"),
            train("E", "07:35"),
            train("F", "12:00"),
            train("G", "23:59"),
        ]
    }

    #[test]
    fn test_selects_zero_wait() {
        let trains = vec![train("A", "08:00"), train("B", "08:30"), train("C", "07:00")];
        let next = select_next(&trains, 480).unwrap();
        assert_eq!(next.train, "A");
        assert_eq!(next.departure, "08:00");
    }

    #[test]
    fn test_unsorted_input_still_finds_soonest() {
        let trains = vec![train("A", "09:00"), train("B", "08:15"), train("C", "08:45")];
        assert_eq!(select_next(&trains, 480).unwrap().train, "B");
    }

    #[test]
    fn test_all_departed() {
        let trains = vec![train("A", "06:00"), train("B", "07:59")];
        assert_eq!(select_next(&trains, 480), None);
        assert!(remaining(&trains, 480).is_empty());
    }

    #[test]
    fn test_tie_goes_to_first_listed() {
        let trains = sample();
        assert_eq!(select_next(&trains, 7 * 60).unwrap().train, "D");
    }

    #[test]
    fn test_missing_departure_never_selected() {
        let trains = vec![train("A", ""), train("B", "bogus")];
        for now in [0, 480, MINUTES_PER_DAY - 1] {
            assert_eq!(select_next(&trains, now), None);
            assert!(remaining(&trains, now).is_empty());
        }
    }

    #[test]
    fn test_remaining_keeps_order() {
        let trains = sample();
        let ids: Vec<&str> = remaining(&trains, 6 * 60)
            .into_iter()
            .map(|t| t.train.as_str())
            .collect();
        assert_eq!(ids, vec!["B", "D", "E", "F", "G"]);
    }

    #[test]
    fn test_remaining_head_matches_next() {
        let trains = sample();
        for now in 0..MINUTES_PER_DAY {
            let rest = remaining(&trains, now);
            match rest.first() {
                Some(&head) => {
                    assert_eq!(Some(head), select_next(&trains, now), "at minute {now}")
                }
                None => assert_eq!(select_next(&trains, now), None, "at minute {now}"),
            }
        }
    }
}
