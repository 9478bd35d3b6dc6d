use thiserror::Error;

#[derive(Error, Debug)]
pub enum TrackerError {
    #[error("Request for {url:?} failed: {source}")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Request for {url:?} returned status {status}")]
    Status { url: String, status: u16 },

    #[error("Could not read {path:?}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Timetable {file_name:?} is not valid JSON: {source}")]
    Json {
        file_name: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Timetable {file_name:?} is not a JSON array")]
    NotAnArray { file_name: String },

    #[error("Invalid configuration: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Invalid value {value:?} for {field}")]
    InvalidValue { field: &'static str, value: String },

    #[error("Terminal I/O failed: {0}")]
    Terminal(#[from] std::io::Error),
}
