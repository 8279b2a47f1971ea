use crate::camera::SercommCamera;
use crate::config_loader::MasterConfig;
use anyhow::{bail, Context, Result};
use log::{debug, info};
use std::time::Instant;

/// A configured camera and its client.
pub struct ManagedCamera {
    pub name: String,
    pub camera: SercommCamera,
}

/// Cameras from the master config, kept in file order.
pub struct CameraManager {
    cameras: Vec<ManagedCamera>,
}

impl CameraManager {
    pub fn new(master_config: &MasterConfig) -> Result<Self> {
        debug!("🛠️ Initializing CameraManager...");
        let start_time = Instant::now();
        let timeout = master_config.app_settings.request_timeout();
        let mut cameras: Vec<ManagedCamera> = Vec::with_capacity(master_config.cameras.len());
        for (idx, cam_config) in master_config.cameras.iter().enumerate() {
            debug!("  Processing camera config #{}: {}", idx + 1, cam_config.name);
            if cameras.iter().any(|c| c.name == cam_config.name) {
                bail!("❌ Duplicate camera name found in configuration: {}", cam_config.name);
            }
            let camera = SercommCamera::new(cam_config.address(), cam_config.credentials(), timeout)
                .with_context(|| format!("Failed to create client for camera '{}'", cam_config.name))?;
            cameras.push(ManagedCamera {
                name: cam_config.name.clone(),
                camera,
            });
            debug!("  Added camera '{}' to manager.", cam_config.name);
        }
        info!("✅ CameraManager initialized with {} cameras in {:?}.", cameras.len(), start_time.elapsed());
        Ok(CameraManager { cameras })
    }

    pub fn get_all_cameras(&self) -> Vec<&ManagedCamera> {
        debug!("📷 Retrieving all configured cameras ({})", self.cameras.len());
        self.cameras.iter().collect()
    }

    pub fn get_cameras_by_names(&self, names: &[String]) -> Vec<&ManagedCamera> {
        debug!("📷 Retrieving cameras by names: {:?}", names);
        let mut result = Vec::new();
        for name in names {
            match self.cameras.iter().find(|c| &c.name == name) {
                Some(cam) => result.push(cam),
                None => debug!("  Camera not found: {}", name),
            }
        }
        result
    }
}

// Helper to parse comma-separated camera names from CLI
pub fn parse_camera_names_arg(names_str_opt: Option<&String>) -> Option<Vec<String>> {
    names_str_opt.map(|names_str| {
        names_str
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect()
    })
}
