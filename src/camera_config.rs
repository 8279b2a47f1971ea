use crate::camera::{CameraAddress, Credentials};
use crate::camera::transport::DEFAULT_USERNAME;
use log::debug;
use serde::Deserialize;
use std::env;

fn default_port() -> u16 {
    80
}

fn default_username() -> String {
    DEFAULT_USERNAME.to_string()
}

#[derive(Debug, Deserialize, Clone)]
pub struct CameraConfig {
    pub name: String,
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default)]
    pub ssl: bool,
    #[serde(default = "default_username")]
    pub username: String,
    pub password: Option<String>, // falls back to <NAME>_PASSWORD
}

impl CameraConfig {
    pub fn password_env_var(&self) -> String {
        format!("{}_PASSWORD", self.name.to_uppercase().replace('-', "_"))
    }

    pub fn address(&self) -> CameraAddress {
        CameraAddress::new(self.host.clone(), self.port, self.ssl)
    }

    /// Credentials from the config file, else the password environment
    /// variable, else an empty password.
    pub fn credentials(&self) -> Credentials {
        let password = match &self.password {
            Some(password) => password.clone(),
            None => {
                let env_var_name = self.password_env_var();
                env::var(&env_var_name).unwrap_or_else(|_| {
                    debug!(
                        "No password configured for camera '{}' and '{}' is unset; using an empty password.",
                        self.name, env_var_name
                    );
                    String::new()
                })
            }
        };
        Credentials::new(self.username.clone(), password)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_for_missing_fields() {
        let cfg: CameraConfig = serde_yaml::from_str("name: porch\nhost: 10.0.0.5\npassword: pw\n").unwrap();
        assert_eq!(cfg.port, 80);
        assert!(!cfg.ssl);
        assert_eq!(cfg.username, "administrator");
        assert_eq!(cfg.credentials(), Credentials::new("administrator", "pw"));
        assert_eq!(cfg.address().format_uri("/x"), "http://10.0.0.5:80/x");
    }

    #[test]
    fn password_env_var_name_is_derived_from_camera_name() {
        let cfg: CameraConfig = serde_yaml::from_str("name: front-door\nhost: cam\nport: 443\n").unwrap();
        assert_eq!(cfg.password_env_var(), "FRONT_DOOR_PASSWORD");
        assert!(cfg.address().ssl);
    }
}
