use serde::Deserialize;

/// One scheduled trip as it appears in the published timetable files.
///
/// The files are exported from GTFS `stop_times`, so other columns such as
/// `arrival_time` may be present; they are ignored.
#[derive(Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct RawTimetableEntry {
    #[serde(default)]
    pub trip_id: String,
    #[serde(default)]
    pub departure_time: Option<String>,
    #[serde(default)]
    pub trip_headsign: Option<String>,
}
