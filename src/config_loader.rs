use crate::app_config::ApplicationConfig;
use crate::camera_config::CameraConfig;
use anyhow::{bail, Context, Result};
use log::{debug, info};
use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::time::Instant;

pub const DEFAULT_CONFIG_PATH: &str = "config/sercomm.yaml";

#[derive(Debug, Deserialize, Clone)]
pub struct MasterConfig {
    #[serde(rename = "application", default)]
    pub app_settings: ApplicationConfig,
    pub cameras: Vec<CameraConfig>,
}

pub fn load_config(path: &str) -> Result<MasterConfig> {
    debug!("📄 Attempting to load config from: {}", path);
    let start_time = Instant::now();

    let config_str = fs::read_to_string(path)
        .with_context(|| format!("Failed to read configuration file '{}'. 📖", path))?;
    let config = parse_config(&config_str)
        .with_context(|| format!("Invalid configuration in '{}'. 💔", path))?;

    info!("✅ Successfully loaded and validated configuration from '{}' in {:?}", path, start_time.elapsed());
    Ok(config)
}

pub fn parse_config(config_str: &str) -> Result<MasterConfig> {
    let config: MasterConfig = serde_yaml::from_str(config_str).context("Failed to parse YAML configuration")?;
    validate_master_config(&config).context("Master configuration validation failed 👎")?;
    Ok(config)
}

fn validate_master_config(config: &MasterConfig) -> Result<()> {
    debug!("🕵️ Validating master configuration...");
    if config.app_settings.output_directory.trim().is_empty() {
        bail!("❌ Application output_directory cannot be empty.");
    }
    if config.app_settings.request_timeout_secs == 0 {
        bail!("❌ Application request_timeout_secs must be greater than zero.");
    }
    if config.cameras.is_empty() {
        bail!("❌ No cameras defined in the configuration.");
    }

    let mut camera_names = HashSet::new();
    for (idx, camera) in config.cameras.iter().enumerate() {
        debug!("Validating camera #{}: {}", idx + 1, camera.name);
        if camera.name.trim().is_empty() {
            bail!("❌ Camera name cannot be empty for camera #{}.", idx + 1);
        }
        if !camera_names.insert(&camera.name) {
            bail!("❌ Duplicate camera name found: {}", camera.name);
        }
        if camera.host.trim().is_empty() {
            bail!("❌ Host for camera '{}' cannot be empty.", camera.name);
        }
        if camera.port == 0 {
            bail!("❌ Port for camera '{}' cannot be 0.", camera.name);
        }
    }
    debug!("👍 Validated {} camera(s).", config.cameras.len());
    Ok(())
}
