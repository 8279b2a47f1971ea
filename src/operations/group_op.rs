use crate::operations::op_helper::run_camera_op;
use anyhow::{Context, Result};
use clap::ArgMatches;
use log::info;
use sercomm::core::camera_manager::CameraManager;

/// Splits `KEY=VALUE` CLI arguments at the first `=`.
pub fn parse_field_args<'a>(raw: impl IntoIterator<Item = &'a String>) -> Result<Vec<(String, String)>> {
    raw.into_iter()
        .map(|field| {
            field
                .split_once('=')
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .with_context(|| format!("Field '{}' is not in KEY=VALUE form", field))
        })
        .collect()
}

pub fn handle_groups_cli(camera_manager: &CameraManager, args: &ArgMatches) -> Result<()> {
    run_camera_op(camera_manager, args, "List Groups", |managed| {
        let groups = managed.camera.list_groups()?;
        info!("📚 [{}] {} group(s)", managed.name, groups.len());
        for group in groups {
            println!("{}\t{}", managed.name, group);
        }
        Ok(())
    })
}

pub fn handle_get_group_cli(camera_manager: &CameraManager, args: &ArgMatches) -> Result<()> {
    let group = args.get_one::<String>("group").context("Missing --group argument")?;
    run_camera_op(camera_manager, args, "Get Group", |managed| {
        let params = managed
            .camera
            .get_group(group)
            .with_context(|| format!("Failed to read group {}", group))?;
        println!("[{}] {}", managed.name, group);
        for (key, value) in &params {
            println!("{}={}", key, value);
        }
        Ok(())
    })
}

pub fn handle_set_group_cli(camera_manager: &CameraManager, args: &ArgMatches) -> Result<()> {
    let group = args.get_one::<String>("group").context("Missing --group argument")?;
    let fields = parse_field_args(args.get_many::<String>("field").into_iter().flatten())?;
    run_camera_op(camera_manager, args, "Set Group", |managed| {
        managed
            .camera
            .set_group(group, &fields)
            .with_context(|| format!("Failed to write group {}", group))?;
        info!("✍️ [{}] wrote {} field(s) to {}", managed.name, fields.len(), group);
        Ok(())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_args_split_on_first_equals() {
        let raw = vec!["http_url=http://x/?a=b".to_string(), "empty=".to_string()];
        let fields = parse_field_args(&raw).unwrap();
        assert_eq!(fields[0], ("http_url".to_string(), "http://x/?a=b".to_string()));
        assert_eq!(fields[1], ("empty".to_string(), String::new()));
        assert!(parse_field_args(&vec!["novalue".to_string()]).is_err());
    }
}
