use crate::operations::op_helper::run_camera_op;
use anyhow::{bail, Result};
use clap::ArgMatches;
use log::{info, warn};
use sercomm::camera::endpoints::{PASS_TELNETD, USER_TELNETD};
use sercomm::core::camera_manager::CameraManager;

pub fn handle_status_cli(camera_manager: &CameraManager, args: &ArgMatches) -> Result<()> {
    run_camera_op(camera_manager, args, "System Status", |managed| {
        let info = managed.camera.system_info()?;
        let status = managed.camera.system_status()?;
        info!("🩺 [{}] {} info / {} status entries", managed.name, info.len(), status.len());
        for (key, value) in info.iter().chain(status.iter()) {
            println!("{}\t{}={}", managed.name, key, value);
        }
        Ok(())
    })
}

pub fn handle_inject_telnetd_cli(camera_manager: &CameraManager, args: &ArgMatches) -> Result<()> {
    if !args.get_flag("confirm") {
        bail!("Refusing to start telnetd without --confirm: it opens a root shell with a factory password.");
    }
    warn!("⚠️ Starting telnetd. The cameras will accept '{}' / '{}' until rebooted.", USER_TELNETD, PASS_TELNETD);
    run_camera_op(camera_manager, args, "Inject telnetd", |managed| {
        managed.camera.inject_telnetd()?;
        println!("{}\ttelnet {} ({} / {})", managed.name, managed.camera.address().host, USER_TELNETD, PASS_TELNETD);
        Ok(())
    })
}
