mod cli;
mod operations;

use anyhow::{bail, Context, Result};
use log::{debug, error, info};
use sercomm::common::logging_setup;
use sercomm::config_loader;
use sercomm::core::camera_manager::CameraManager;
use std::time::Instant;

fn main() -> Result<()> {
    let main_start_time = Instant::now();
    let matches = cli::build_cli().get_matches();
    let debug_flag = matches.get_flag("debug");

    let config_path = matches
        .get_one::<String>("config")
        .map(String::as_str)
        .unwrap_or(config_loader::DEFAULT_CONFIG_PATH);

    let master_config = match config_loader::load_config(config_path) {
        Ok(cfg) => {
            logging_setup::initialize_logging(Some(&cfg), debug_flag);
            info!("✅ Configuration loaded from: {}", config_path);
            cfg
        }
        Err(e) => {
            logging_setup::initialize_logging(None, debug_flag);
            error!("❌ Failed to load master configuration from '{}': {:#}. Exiting.", config_path, e);
            return Err(e.context(format!("Failed to load master configuration from '{}'", config_path)));
        }
    };

    info!("🚀 sercomm starting with {} camera(s) configured.", master_config.cameras.len());
    let camera_manager = CameraManager::new(&master_config).context("Failed to initialize CameraManager")?;

    let Some((operation_name, sub_matches)) = matches.subcommand() else {
        bail!("No subcommand provided.");
    };
    debug!("🎬 Dispatching to subcommand: {}", operation_name);
    let op_start_time = Instant::now();

    let op_result: Result<()> = match operation_name {
        "groups" => operations::group_op::handle_groups_cli(&camera_manager, sub_matches),
        "get-group" => operations::group_op::handle_get_group_cli(&camera_manager, sub_matches),
        "set-group" => operations::group_op::handle_set_group_cli(&camera_manager, sub_matches),
        "webhook" => operations::notify_op::handle_webhook_cli(&camera_manager, sub_matches),
        "http-upload" => operations::notify_op::handle_http_upload_cli(&camera_manager, sub_matches),
        "event-interval" => operations::event_op::handle_event_interval_cli(&camera_manager, sub_matches),
        "destinations" => operations::event_op::handle_destinations_cli(&camera_manager, sub_matches),
        "event-duration" => operations::event_op::handle_event_duration_cli(&camera_manager, sub_matches),
        "snapshot" => {
            operations::media_op::handle_snapshot_cli(&master_config.app_settings, &camera_manager, sub_matches)
        }
        "urls" => operations::media_op::handle_urls_cli(&camera_manager, sub_matches),
        "pan-tilt" => operations::media_op::handle_pan_tilt_cli(&camera_manager, sub_matches),
        "status" => operations::diagnostic_op::handle_status_cli(&camera_manager, sub_matches),
        "inject-telnetd" => operations::diagnostic_op::handle_inject_telnetd_cli(&camera_manager, sub_matches),
        other => bail!("Subcommand '{}' not implemented.", other),
    };

    if let Err(e) = op_result {
        error!("❌ Operation '{}' failed after {:?}: {:#}", operation_name, op_start_time.elapsed(), e);
        return Err(e);
    }
    info!("🏁 Operation '{}' finished in {:?} (total {:?}).", operation_name, op_start_time.elapsed(), main_start_time.elapsed());
    Ok(())
}
