pub mod endpoints;
pub mod group_codec;
pub mod sercomm_camera;
pub mod settings;
pub mod transport;

pub use endpoints::{EventTrigger, Group, PanTiltDirection};
pub use group_codec::GroupParams;
pub use sercomm_camera::{CameraAddress, SercommCamera};
pub use settings::{
    DestinationUpdate, EventDestinations, EventDuration, EventInterval, HttpMethod, HttpUploadConfig,
    HttpUploadSettings, WebhookConfig, WebhookSettings,
};
pub use transport::{CgiResponse, Credentials, HttpTransport, Transport};
