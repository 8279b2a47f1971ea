use crate::operations::op_helper::run_camera_op;
use anyhow::{bail, Context, Result};
use clap::ArgMatches;
use log::info;
use sercomm::camera::{DestinationUpdate, EventDuration, EventTrigger};
use sercomm::core::camera_manager::CameraManager;

pub fn handle_event_interval_cli(camera_manager: &CameraManager, args: &ArgMatches) -> Result<()> {
    match args.get_one::<bool>("enabled").copied() {
        Some(enabled) => {
            let interval = args
                .get_one::<u32>("interval")
                .copied()
                .context("--interval is required together with --enabled")?;
            run_camera_op(camera_manager, args, "Set Event Interval", |managed| {
                managed.camera.set_event_interval(enabled, interval)?;
                info!("⏱️ [{}] event trigger enabled={} interval={}s", managed.name, enabled, interval);
                Ok(())
            })
        }
        None => run_camera_op(camera_manager, args, "Show Event Interval", |managed| {
            let interval = managed.camera.get_event_interval()?;
            let secs = interval
                .interval_secs
                .map(|s| s.to_string())
                .unwrap_or_else(|| "unset".to_string());
            println!("{}\tenabled={}\tinterval={}", managed.name, interval.enabled, secs);
            Ok(())
        }),
    }
}

pub fn destination_update_from_args(args: &ArgMatches) -> DestinationUpdate {
    DestinationUpdate {
        email: args.get_one::<bool>("email").copied(),
        ftp: args.get_one::<bool>("ftp").copied(),
        webhook: args.get_one::<bool>("webhook").copied(),
        http_upload: args.get_one::<bool>("http-upload").copied(),
    }
}

pub fn handle_destinations_cli(camera_manager: &CameraManager, args: &ArgMatches) -> Result<()> {
    let trigger: EventTrigger = args
        .get_one::<String>("trigger")
        .context("Missing --trigger argument")?
        .parse()?;
    let update = destination_update_from_args(args);

    let display_name = if update.is_empty() { "Show Destinations" } else { "Set Destinations" };
    run_camera_op(camera_manager, args, display_name, |managed| {
        let destinations = if update.is_empty() {
            managed.camera.get_event_destinations(trigger)?
        } else {
            let written = managed.camera.set_event_destinations(trigger, &update)?;
            info!("📬 [{}] destinations for '{}' updated", managed.name, trigger);
            written
        };
        println!(
            "{}\t{}\temail={}\tftp={}\twebhook={}\thttp_upload={}",
            managed.name, trigger, destinations.email, destinations.ftp, destinations.webhook, destinations.http_upload
        );
        Ok(())
    })
}

pub fn handle_event_duration_cli(camera_manager: &CameraManager, args: &ArgMatches) -> Result<()> {
    let quality = args.get_one::<u32>("quality").copied();
    let before = args.get_one::<u32>("before").copied();
    let after = args.get_one::<u32>("after").copied();

    match (quality, before, after) {
        (None, None, None) => run_camera_op(camera_manager, args, "Show Event Duration", |managed| {
            let duration = managed.camera.get_event_duration()?;
            println!(
                "{}\tquality={}\tbefore={}s\tafter={}s",
                managed.name, duration.quality, duration.before, duration.after
            );
            Ok(())
        }),
        (Some(quality), Some(before), Some(after)) => {
            let duration = EventDuration { quality, before, after };
            run_camera_op(camera_manager, args, "Set Event Duration", |managed| {
                managed.camera.set_event_duration(&duration)?;
                info!("🎞️ [{}] event recording set to {}", managed.name, duration.encode());
                Ok(())
            })
        }
        _ => bail!("--quality, --before and --after must be given together"),
    }
}
