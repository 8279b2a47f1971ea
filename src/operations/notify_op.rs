use crate::operations::op_helper::run_camera_op;
use anyhow::{Context, Result};
use clap::ArgMatches;
use log::info;
use sercomm::camera::{HttpMethod, HttpUploadSettings, WebhookSettings};
use sercomm::core::camera_manager::CameraManager;

fn action(args: &ArgMatches) -> &str {
    args.get_one::<String>("action").map(String::as_str).unwrap_or("show")
}

fn text<'a>(args: &'a ArgMatches, name: &str) -> &'a str {
    args.get_one::<String>(name).map(String::as_str).unwrap_or("")
}

fn required_url(args: &ArgMatches) -> Result<String> {
    args.get_one::<String>("url")
        .cloned()
        .context("--url is required with --action enable")
}

pub fn handle_webhook_cli(camera_manager: &CameraManager, args: &ArgMatches) -> Result<()> {
    match action(args) {
        "enable" => {
            let method: HttpMethod = text(args, "method").parse()?;
            let settings = WebhookSettings::new(required_url(args)?)
                .with_credentials(text(args, "user"), text(args, "pass"))
                .with_method(method);
            run_camera_op(camera_manager, args, "Enable Webhook", |managed| {
                managed.camera.enable_webhook(&settings)?;
                info!("🔔 [{}] webhook enabled ({} {})", managed.name, settings.method, settings.url);
                Ok(())
            })
        }
        "disable" => run_camera_op(camera_manager, args, "Disable Webhook", |managed| {
            managed.camera.disable_webhook()?;
            info!("🔕 [{}] webhook disabled", managed.name);
            Ok(())
        }),
        _ => run_camera_op(camera_manager, args, "Show Webhook", |managed| {
            let webhook = managed.camera.get_webhook()?;
            println!(
                "{}\tenabled={}\tmethod={}\turl={}\tuser={}",
                managed.name,
                webhook.enabled,
                webhook.method,
                webhook.url.unwrap_or_default(),
                webhook.username.unwrap_or_default()
            );
            Ok(())
        }),
    }
}

pub fn handle_http_upload_cli(camera_manager: &CameraManager, args: &ArgMatches) -> Result<()> {
    match action(args) {
        "enable" => {
            let settings = HttpUploadSettings::new(required_url(args)?)
                .with_credentials(text(args, "user"), text(args, "pass"));
            run_camera_op(camera_manager, args, "Enable HTTP Upload", |managed| {
                managed.camera.enable_http_upload(&settings)?;
                info!("📤 [{}] HTTP upload enabled ({})", managed.name, settings.url);
                Ok(())
            })
        }
        "disable" => run_camera_op(camera_manager, args, "Disable HTTP Upload", |managed| {
            managed.camera.disable_http_upload()?;
            info!("📭 [{}] HTTP upload disabled", managed.name);
            Ok(())
        }),
        _ => run_camera_op(camera_manager, args, "Show HTTP Upload", |managed| {
            let upload = managed.camera.get_http_upload()?;
            println!(
                "{}\tenabled={}\turl={}\tuser={}",
                managed.name,
                upload.enabled,
                upload.url.unwrap_or_default(),
                upload.username.unwrap_or_default()
            );
            Ok(())
        }),
    }
}
