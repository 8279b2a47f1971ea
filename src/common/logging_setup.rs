use crate::config_loader::MasterConfig;
use env_logger::Builder;
use log::LevelFilter;

/// Picks the log level: `debug` flag first, then the config, then `info`.
pub fn resolve_level(config: Option<&MasterConfig>, debug: bool) -> LevelFilter {
    let log_level_str = if debug {
        "debug".to_string()
    } else {
        config
            .and_then(|c| c.app_settings.log_level.clone())
            .unwrap_or_else(|| "info".to_string())
    };

    match log_level_str.to_lowercase().as_str() {
        "error" => LevelFilter::Error,
        "warn" => LevelFilter::Warn,
        "info" => LevelFilter::Info,
        "debug" => LevelFilter::Debug,
        "trace" => LevelFilter::Trace,
        s => {
            eprintln!("Unrecognized log level '{}', defaulting to info.", s);
            LevelFilter::Info
        }
    }
}

pub fn initialize_logging(config: Option<&MasterConfig>, debug: bool) {
    let mut builder = Builder::new();
    builder.filter_level(resolve_level(config, debug));

    builder.try_init().unwrap_or_else(|e| {
        eprintln!("Failed to initialize logger: {}. Logging might not work as expected.", e);
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config_loader::parse_config;

    #[test]
    fn debug_flag_wins_over_config() {
        let config = parse_config("application:\n  log_level: warn\ncameras:\n  - name: a\n    host: h\n").unwrap();
        assert_eq!(resolve_level(Some(&config), true), LevelFilter::Debug);
        assert_eq!(resolve_level(Some(&config), false), LevelFilter::Warn);
        assert_eq!(resolve_level(None, false), LevelFilter::Info);
    }

    #[test]
    fn unknown_level_falls_back_to_info() {
        let config = parse_config("application:\n  log_level: chatty\ncameras:\n  - name: a\n    host: h\n").unwrap();
        assert_eq!(resolve_level(Some(&config), false), LevelFilter::Info);
    }
}
