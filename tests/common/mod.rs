// Shared helpers for the HTTP-level tests.

use sercomm::camera::{CameraAddress, Credentials, SercommCamera};
use std::time::Duration;
use wiremock::MockServer;

pub const USERNAME: &str = "administrator";
pub const PASSWORD: &str = "secret";
/// `Basic base64("administrator:secret")`
pub const BASIC_AUTH: &str = "Basic YWRtaW5pc3RyYXRvcjpzZWNyZXQ=";

pub async fn start_mock_camera_api_server() -> MockServer {
    MockServer::start().await
}

/// Runs `op` against a real blocking client pointed at `server`.
///
/// The blocking client must be built and dropped off the async runtime, so
/// everything happens inside `spawn_blocking`.
pub async fn with_camera<F, R>(server: &MockServer, op: F) -> R
where
    F: FnOnce(SercommCamera) -> R + Send + 'static,
    R: Send + 'static,
{
    let addr = *server.address();
    tokio::task::spawn_blocking(move || {
        let camera = SercommCamera::new(
            CameraAddress::new(addr.ip().to_string(), addr.port(), false),
            Credentials::new(USERNAME, PASSWORD),
            Duration::from_secs(5),
        )
        .expect("failed to build camera client");
        op(camera)
    })
    .await
    .expect("blocking camera task panicked")
}
