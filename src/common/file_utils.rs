use crate::errors::SercommError;
use chrono::Local;
use log::debug;
use std::path::{Path, PathBuf};

pub fn generate_timestamped_filename(
    base_name: &str,        // e.g., camera name
    timestamp_format: &str, // from config, e.g., "%Y%m%d_%H%M%S"
    extension: &str,        // e.g., "jpg"
) -> String {
    let timestamp = Local::now().format(timestamp_format);
    format!("{}_{}.{}", base_name, timestamp, extension)
}

pub fn ensure_output_directory(dir_path: &Path) -> Result<PathBuf, SercommError> {
    if !dir_path.exists() {
        debug!("Output directory '{}' does not exist, attempting to create it.", dir_path.display());
        std::fs::create_dir_all(dir_path)?;
    } else if !dir_path.is_dir() {
        return Err(SercommError::Config(format!(
            "Output path '{}' exists but is not a directory.",
            dir_path.display()
        )));
    }
    Ok(dir_path.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filename_has_name_and_extension() {
        let name = generate_timestamped_filename("porch", "%Y", "jpg");
        assert!(name.starts_with("porch_"));
        assert!(name.ends_with(".jpg"));
        assert_eq!(name.len(), "porch_".len() + 4 + ".jpg".len());
    }

    #[test]
    fn creates_missing_directory_and_rejects_files() {
        let tmp = tempfile::tempdir().unwrap();
        let nested = tmp.path().join("a/b");
        assert_eq!(ensure_output_directory(&nested).unwrap(), nested);
        assert!(nested.is_dir());

        let file = tmp.path().join("file");
        std::fs::write(&file, b"x").unwrap();
        assert!(matches!(ensure_output_directory(&file), Err(SercommError::Config(_))));
    }
}
