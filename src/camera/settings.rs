//! Typed views over individual configuration groups.
//!
//! `*Config` types are decoded from a group read. `*Settings` and
//! [`DestinationUpdate`] are what callers pass to the writers; each one
//! knows exactly which fields it puts on the wire.

use crate::camera::group_codec::GroupParams;
use crate::errors::{Result, SercommError};
use std::fmt;
use std::str::FromStr;

/// Ordered `(field, value)` pairs for one `set_group.cgi` request.
pub type GroupFields = Vec<(&'static str, String)>;

pub(crate) const KEY_EVENT_TRIGGER: &str = "event_trigger";
pub(crate) const KEY_EVENT_INTERVAL: &str = "event_interval";
pub(crate) const KEY_EVENT_ATTACH: &str = "event_attach";

const DEFAULT_DESTINATIONS: &str = "0,0,0,0,0,0,0,0";
const DEFAULT_EVENT_ATTACH: &str = "avi,3,1,1";
const EVENT_ATTACH_FORMAT: &str = "avi";
const HTTP_PROXY_PORT: &str = "80";

fn flag(enabled: bool) -> String {
    let value = if enabled { "1" } else { "0" };
    value.to_string()
}

fn is_set(params: &GroupParams, key: &str) -> bool {
    params.get(key).map(String::as_str) == Some("1")
}

fn parse_number(field: &str, value: &str) -> Result<u32> {
    value
        .trim()
        .parse()
        .map_err(|_| SercommError::invalid_value(field, value))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HttpMethod {
    #[default]
    Get,
    Post,
}

impl HttpMethod {
    fn wire_value(&self) -> &'static str {
        match self {
            HttpMethod::Get => "0",
            HttpMethod::Post => "1",
        }
    }

    fn from_wire(value: Option<&str>) -> Self {
        match value {
            Some("1") => HttpMethod::Post,
            _ => HttpMethod::Get,
        }
    }
}

impl FromStr for HttpMethod {
    type Err = SercommError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "GET" => Ok(HttpMethod::Get),
            "POST" => Ok(HttpMethod::Post),
            _ => Err(SercommError::invalid_value("http_method", s)),
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HttpMethod::Get => f.write_str("GET"),
            HttpMethod::Post => f.write_str("POST"),
        }
    }
}

/// Webhook state as stored in `HTTP_NOTIFY`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebhookConfig {
    pub enabled: bool,
    pub url: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
    pub method: HttpMethod,
}

impl WebhookConfig {
    pub fn from_params(params: &GroupParams) -> Self {
        WebhookConfig {
            enabled: is_set(params, "http_notify"),
            url: params.get("http_url").cloned(),
            username: params.get("http_user").cloned(),
            password: params.get("http_password").cloned(),
            method: HttpMethod::from_wire(params.get("http_method").map(String::as_str)),
        }
    }
}

/// Arguments for enabling the webhook. Username and password default to
/// empty, method to GET.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WebhookSettings {
    pub url: String,
    pub username: String,
    pub password: String,
    pub method: HttpMethod,
}

impl WebhookSettings {
    pub fn new(url: impl Into<String>) -> Self {
        WebhookSettings {
            url: url.into(),
            ..Default::default()
        }
    }

    pub fn with_credentials(mut self, username: impl Into<String>, password: impl Into<String>) -> Self {
        self.username = username.into();
        self.password = password.into();
        self
    }

    pub fn with_method(mut self, method: HttpMethod) -> Self {
        self.method = method;
        self
    }

    pub fn enable_fields(&self) -> GroupFields {
        vec![
            ("http_notify", flag(true)),
            ("http_url", self.url.clone()),
            ("http_proxy", String::new()),
            ("http_proxy_no", HTTP_PROXY_PORT.to_string()),
            ("http_method", self.method.wire_value().to_string()),
            ("http_user", self.username.clone()),
            ("http_password", self.password.clone()),
            ("event_data_flag", flag(true)),
        ]
    }

    pub fn disable_fields() -> GroupFields {
        vec![
            ("http_notify", flag(false)),
            ("http_url", String::new()),
            ("http_proxy", String::new()),
            ("http_proxy_no", HTTP_PROXY_PORT.to_string()),
            ("http_method", HttpMethod::Get.wire_value().to_string()),
            ("http_user", String::new()),
            ("http_password", String::new()),
            ("event_data_flag", flag(false)),
        ]
    }
}

/// HTTP event upload state as stored in `HTTP_EVENT`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpUploadConfig {
    pub enabled: bool,
    pub url: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
}

impl HttpUploadConfig {
    pub fn from_params(params: &GroupParams) -> Self {
        HttpUploadConfig {
            enabled: is_set(params, "http_post_en"),
            url: params.get("http_post_url").cloned(),
            username: params.get("http_post_user").cloned(),
            password: params.get("http_post_pass").cloned(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct HttpUploadSettings {
    pub url: String,
    pub username: String,
    pub password: String,
}

impl HttpUploadSettings {
    pub fn new(url: impl Into<String>) -> Self {
        HttpUploadSettings {
            url: url.into(),
            ..Default::default()
        }
    }

    pub fn with_credentials(mut self, username: impl Into<String>, password: impl Into<String>) -> Self {
        self.username = username.into();
        self.password = password.into();
        self
    }

    pub fn enable_fields(&self) -> GroupFields {
        vec![
            ("http_event_en", flag(true)),
            ("http_post_en", flag(true)),
            ("http_post_user", self.username.clone()),
            ("http_post_pass", self.password.clone()),
            ("http_post_url", self.url.clone()),
        ]
    }

    pub fn disable_fields() -> GroupFields {
        vec![
            ("http_event_en", flag(false)),
            ("http_post_en", flag(false)),
            ("http_post_user", String::new()),
            ("http_post_pass", String::new()),
            ("http_post_url", String::new()),
        ]
    }
}

/// Minimum spacing between triggered events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EventInterval {
    pub enabled: bool,
    /// Seconds; `None` when the device does not report a value.
    pub interval_secs: Option<u32>,
}

impl EventInterval {
    pub fn from_params(params: &GroupParams) -> Result<Self> {
        let interval_secs = params
            .get(KEY_EVENT_INTERVAL)
            .map(|v| parse_number(KEY_EVENT_INTERVAL, v))
            .transpose()?;
        Ok(EventInterval {
            enabled: is_set(params, KEY_EVENT_TRIGGER),
            interval_secs,
        })
    }

    pub fn fields(enabled: bool, interval_secs: u32) -> GroupFields {
        vec![
            (KEY_EVENT_TRIGGER, flag(enabled)),
            (KEY_EVENT_INTERVAL, interval_secs.to_string()),
        ]
    }
}

/// Notification channels enabled for one trigger.
///
/// On the wire this is an 8-position comma list. Positions 0, 1, 4 and 5
/// carry email, ftp, webhook and http upload; the rest are always written
/// as `0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EventDestinations {
    pub email: bool,
    pub ftp: bool,
    pub webhook: bool,
    pub http_upload: bool,
}

impl EventDestinations {
    /// Decodes the value of `event_<trigger>`. A missing value means nothing
    /// is enabled.
    pub fn decode(field: &str, value: Option<&str>) -> Result<Self> {
        let raw = value.unwrap_or(DEFAULT_DESTINATIONS);
        let parts: Vec<&str> = raw.split(',').map(str::trim).collect();
        if parts.len() != 8 {
            return Err(SercommError::invalid_value(field, raw));
        }
        Ok(EventDestinations {
            email: parts[0] == "1",
            ftp: parts[1] == "1",
            webhook: parts[4] == "1",
            http_upload: parts[5] == "1",
        })
    }

    pub fn encode(&self) -> String {
        format!(
            "{},{},0,0,{},{},0,0",
            flag(self.email),
            flag(self.ftp),
            flag(self.webhook),
            flag(self.http_upload)
        )
    }
}

/// Per-destination changes; `None` leaves the current value alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DestinationUpdate {
    pub email: Option<bool>,
    pub ftp: Option<bool>,
    pub webhook: Option<bool>,
    pub http_upload: Option<bool>,
}

impl DestinationUpdate {
    pub fn is_empty(&self) -> bool {
        self.email.is_none() && self.ftp.is_none() && self.webhook.is_none() && self.http_upload.is_none()
    }

    pub fn apply(&self, current: EventDestinations) -> EventDestinations {
        EventDestinations {
            email: self.email.unwrap_or(current.email),
            ftp: self.ftp.unwrap_or(current.ftp),
            webhook: self.webhook.unwrap_or(current.webhook),
            http_upload: self.http_upload.unwrap_or(current.http_upload),
        }
    }
}

/// Quality and pre/post-event seconds of event-triggered recordings.
/// Stored as `event_attach=avi,<quality>,<before>,<after>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EventDuration {
    pub quality: u32,
    pub before: u32,
    pub after: u32,
}

impl EventDuration {
    pub fn from_params(params: &GroupParams) -> Result<Self> {
        let raw = params
            .get(KEY_EVENT_ATTACH)
            .map(String::as_str)
            .unwrap_or(DEFAULT_EVENT_ATTACH);
        let parts: Vec<&str> = raw.split(',').collect();
        if parts.len() != 4 {
            return Err(SercommError::invalid_value(KEY_EVENT_ATTACH, raw));
        }
        Ok(EventDuration {
            quality: parse_number(KEY_EVENT_ATTACH, parts[1])?,
            before: parse_number(KEY_EVENT_ATTACH, parts[2])?,
            after: parse_number(KEY_EVENT_ATTACH, parts[3])?,
        })
    }

    pub fn encode(&self) -> String {
        format!("{},{},{},{}", EVENT_ATTACH_FORMAT, self.quality, self.before, self.after)
    }

    pub fn fields(&self) -> GroupFields {
        vec![(KEY_EVENT_ATTACH, self.encode())]
    }
}
