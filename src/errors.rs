use thiserror::Error;

#[derive(Error, Debug)]
pub enum SercommError {
    #[error("Transport Error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("HTTP Status Error: {url} returned {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("Invalid event trigger '{0}' - must be one of in1, in2, mt, pir, httpc, audio")]
    InvalidTrigger(String),

    #[error("Invalid pan/tilt direction '{0}' - must be one of U, D, L, R, UL, UR, DL, DR")]
    InvalidPanTiltDirection(String),

    #[error("Malformed group line (missing '='): {0:?}")]
    MalformedLine(String),

    #[error("Invalid value for '{field}': {value:?}")]
    InvalidValue { field: String, value: String },

    #[error("Invalid group name: {0:?}")]
    InvalidGroupName(String),

    #[error("Configuration Error: {0}")]
    Config(String),

    #[error("File I/O Error: {0}")]
    Io(#[from] std::io::Error),
}

impl SercommError {
    pub(crate) fn invalid_value(field: &str, value: &str) -> Self {
        SercommError::InvalidValue {
            field: field.to_string(),
            value: value.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, SercommError>;
