//! Client for configuring Sercomm IP cameras through their CGI interface.
//!
//! The device stores its settings in named groups of `key=value` text.
//! [`camera::SercommCamera`] reads and writes those groups and offers typed
//! accessors for webhooks, HTTP event upload, event interval, per-trigger
//! destinations and event recording duration.
//!
//! ```no_run
//! use sercomm::camera::{CameraAddress, Credentials, SercommCamera, WebhookSettings, HttpMethod};
//! use std::time::Duration;
//!
//! # fn main() -> sercomm::errors::Result<()> {
//! let camera = SercommCamera::new(
//!     CameraAddress::new("192.168.1.20", 80, false),
//!     Credentials::new("administrator", "secret"),
//!     Duration::from_secs(10),
//! )?;
//! camera.enable_webhook(&WebhookSettings::new("http://hooks.local/cam").with_method(HttpMethod::Post))?;
//! println!("{:?}", camera.get_webhook()?);
//! # Ok(())
//! # }
//! ```

pub mod app_config;
pub mod camera;
pub mod camera_config;
pub mod common;
pub mod config_loader;
pub mod core;
pub mod errors;

pub use camera::SercommCamera;
pub use errors::SercommError;
