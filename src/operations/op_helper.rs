use anyhow::{bail, Result};
use clap::ArgMatches;
use log::{debug, error, info, warn};
use sercomm::core::camera_manager::{parse_camera_names_arg, CameraManager, ManagedCamera};
use std::time::Instant;

/// Runs `per_camera_op` against every camera selected by `--cameras`, one
/// after another.
///
/// A failing camera does not stop the others; the operation as a whole
/// fails if any camera failed.
pub fn run_camera_op<F>(
    camera_manager: &CameraManager,
    args: &ArgMatches,
    operation_display_name: &str,
    per_camera_op: F,
) -> Result<()>
where
    F: Fn(&ManagedCamera) -> Result<()>,
{
    let op_start_time = Instant::now();
    info!("🛠️ Starting operation: '{}'...", operation_display_name);

    let camera_names_to_process = parse_camera_names_arg(args.get_one::<String>("cameras"));
    let cameras_to_target = match camera_names_to_process {
        Some(ref names) => camera_manager.get_cameras_by_names(names),
        None => camera_manager.get_all_cameras(),
    };

    if cameras_to_target.is_empty() {
        match camera_names_to_process {
            Some(names) => warn!("⚠️ No cameras found matching names: {:?} for '{}'.", names, operation_display_name),
            None => warn!("⚠️ No cameras configured for '{}'.", operation_display_name),
        }
        return Ok(());
    }
    info!("🎯 Targeting {} camera(s) for {}.", cameras_to_target.len(), operation_display_name);

    let mut failed = Vec::new();
    for managed in cameras_to_target {
        let cam_start_time = Instant::now();
        debug!("  [{}] {} starting", managed.name, operation_display_name);
        match per_camera_op(managed) {
            Ok(()) => debug!("  [{}] done in {:?}", managed.name, cam_start_time.elapsed()),
            Err(e) => {
                error!("❌ [{}] {} failed after {:?}: {:#}", managed.name, operation_display_name, cam_start_time.elapsed(), e);
                failed.push(managed.name.clone());
            }
        }
    }

    if !failed.is_empty() {
        bail!("'{}' failed for camera(s): {}", operation_display_name, failed.join(", "));
    }
    info!("✅ '{}' completed in {:?}.", operation_display_name, op_start_time.elapsed());
    Ok(())
}
