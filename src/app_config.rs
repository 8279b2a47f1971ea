use crate::camera::transport::DEFAULT_TIMEOUT;
use serde::Deserialize;
use std::time::Duration;

fn default_request_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT.as_secs()
}

fn default_output_directory() -> String {
    "./output".to_string()
}

fn default_filename_timestamp_format() -> String {
    "%Y%m%d_%H%M%S".to_string()
}

#[derive(Debug, Deserialize, Clone)]
pub struct ApplicationConfig {
    pub log_level: Option<String>, // CLI --debug takes precedence
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
    #[serde(default = "default_output_directory")]
    pub output_directory: String, // where snapshots land
    #[serde(default = "default_filename_timestamp_format")]
    pub filename_timestamp_format: String, // strftime format string
}

impl ApplicationConfig {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        ApplicationConfig {
            log_level: Some("info".to_string()),
            request_timeout_secs: default_request_timeout_secs(),
            output_directory: default_output_directory(),
            filename_timestamp_format: default_filename_timestamp_format(),
        }
    }
}
