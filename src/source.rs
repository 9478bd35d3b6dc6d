use std::path::PathBuf;

use log::*;
use serde_json::Value;

use crate::data::TimetableKey;
use crate::error::TrackerError;
use crate::gtfs::RawTimetableEntry;
use crate::timetable::Timetable;

/// Somewhere the published timetable files can be read from.
pub trait TimetableSource {
    fn fetch(&self, file_name: &str) -> Result<Value, TrackerError>;
}

impl<T: TimetableSource + ?Sized> TimetableSource for &T {
    fn fetch(&self, file_name: &str) -> Result<Value, TrackerError> {
        (**self).fetch(file_name)
    }
}

impl TimetableSource for Box<dyn TimetableSource + Send> {
    fn fetch(&self, file_name: &str) -> Result<Value, TrackerError> {
        (**self).fetch(file_name)
    }
}

#[derive(Debug)]
pub struct HttpSource {
    base_url: String,
    client: reqwest::blocking::Client,
}

impl HttpSource {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_owned(),
            client: reqwest::blocking::Client::new(),
        }
    }
}

impl TimetableSource for HttpSource {
    fn fetch(&self, file_name: &str) -> Result<Value, TrackerError> {
        let url = format!("{}/{}", self.base_url, file_name);
        let http_err = |source| TrackerError::Http {
            url: url.clone(),
            source,
        };

        let response = self
            .client
            .get(&url)
            .header(reqwest::header::CACHE_CONTROL, "no-store")
            .send()
            .map_err(http_err)?;
        if !response.status().is_success() {
            return Err(TrackerError::Status {
                url: url.clone(),
                status: response.status().as_u16(),
            });
        }
        let body = response.bytes().map_err(http_err)?;

        serde_json::from_slice(&body).map_err(|source| TrackerError::Json {
            file_name: file_name.to_owned(),
            source,
        })
    }
}

#[derive(Debug)]
pub struct DirSource {
    root: PathBuf,
}

impl DirSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl TimetableSource for DirSource {
    fn fetch(&self, file_name: &str) -> Result<Value, TrackerError> {
        let path = self.root.join(file_name);
        let body = std::fs::read(&path).map_err(|source| TrackerError::Io {
            path: path.display().to_string(),
            source,
        })?;

        serde_json::from_slice(&body).map_err(|source| TrackerError::Json {
            file_name: file_name.to_owned(),
            source,
        })
    }
}

/// Picks an HTTP source for `http://` and `https://` locations, a directory otherwise.
pub fn source_for(location: &str) -> Box<dyn TimetableSource + Send> {
    if location.starts_with("http://") || location.starts_with("https://") {
        Box::new(HttpSource::new(location))
    } else {
        Box::new(DirSource::new(location))
    }
}

/// Fetches and normalizes the timetable for `key`.
///
/// Never fails: anything that goes wrong is logged and an empty timetable
/// is returned instead.
pub fn load_timetable(source: &impl TimetableSource, key: TimetableKey) -> Timetable {
    let file_name = key.file_name();
    match try_load(source, &file_name) {
        Ok(timetable) => {
            info!(
                "Loaded {} departures for {} from {}",
                timetable.len(),
                key,
                file_name
            );
            timetable
        }
        Err(e) => {
            warn!("Could not load timetable for {}: {}", key, e);
            Timetable::default()
        }
    }
}

fn try_load(
    source: &impl TimetableSource,
    file_name: &str,
) -> Result<Timetable, TrackerError> {
    let document = source.fetch(file_name)?;
    if !document.is_array() {
        return Err(TrackerError::NotAnArray {
            file_name: file_name.to_owned(),
        });
    }
    let raw: Vec<RawTimetableEntry> =
        serde_json::from_value(document).map_err(|source| TrackerError::Json {
            file_name: file_name.to_owned(),
            source,
        })?;
    Ok(Timetable::from(raw))
}
