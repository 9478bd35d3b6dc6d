//! Live departure board for the 大岡山 ⇄ すずかけ台 rapid express.
//!
//! Timetables are static JSON exports, one per direction and day type. The
//! board picks the next departure and lists the rest of today's trains,
//! recomputed from an immutable [`state::Snapshot`] on every clock tick.

pub mod board;
pub mod calendar;
pub mod data;
pub mod departures;
pub mod display;
pub mod error;
pub mod gtfs;
pub mod settings;
pub mod source;
pub mod state;
pub mod timetable;
