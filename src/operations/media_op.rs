use crate::operations::op_helper::run_camera_op;
use anyhow::{Context, Result};
use clap::ArgMatches;
use log::info;
use sercomm::app_config::ApplicationConfig;
use sercomm::camera::PanTiltDirection;
use sercomm::common::file_utils::{ensure_output_directory, generate_timestamped_filename};
use sercomm::core::camera_manager::CameraManager;
use std::path::PathBuf;

pub fn handle_snapshot_cli(
    app_settings: &ApplicationConfig,
    camera_manager: &CameraManager,
    args: &ArgMatches,
) -> Result<()> {
    let output_dir = args
        .get_one::<String>("output")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(&app_settings.output_directory));
    let output_dir = ensure_output_directory(&output_dir)
        .with_context(|| format!("Output directory '{}' is not usable 📂💥", output_dir.display()))?;

    run_camera_op(camera_manager, args, "Snapshot", |managed| {
        let image = managed.camera.snapshot()?;
        let filename = generate_timestamped_filename(&managed.name, &app_settings.filename_timestamp_format, "jpg");
        let file_path = output_dir.join(filename);
        std::fs::write(&file_path, &image)
            .with_context(|| format!("Failed to write snapshot to {}", file_path.display()))?;
        info!("📸 [{}] saved snapshot ({} bytes) to {}", managed.name, image.len(), file_path.display());
        Ok(())
    })
}

pub fn handle_urls_cli(camera_manager: &CameraManager, args: &ArgMatches) -> Result<()> {
    run_camera_op(camera_manager, args, "Stream URLs", |managed| {
        println!("{}\tsnapshot\t{}", managed.name, managed.camera.image_url());
        println!("{}\tmjpeg\t{}", managed.name, managed.camera.mjpeg_url());
        println!("{}\tmedia\t{}", managed.name, managed.camera.media_url());
        Ok(())
    })
}

pub fn handle_pan_tilt_cli(camera_manager: &CameraManager, args: &ArgMatches) -> Result<()> {
    let direction: PanTiltDirection = args
        .get_one::<String>("direction")
        .context("Missing --direction argument")?
        .parse()?;
    let step = args.get_one::<u32>("step").copied().unwrap_or(10);
    run_camera_op(camera_manager, args, "Pan/Tilt", |managed| {
        managed.camera.pan_tilt(direction, step)?;
        info!("🎯 [{}] moved {} by {}", managed.name, direction, step);
        Ok(())
    })
}
