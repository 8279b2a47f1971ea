use clap::builder::BoolishValueParser;
use clap::{Arg, ArgAction, Command};
use log::debug;
use sercomm::config_loader::DEFAULT_CONFIG_PATH;

fn cameras_arg() -> Arg {
    Arg::new("cameras")
        .long("cameras")
        .value_name("CAM_NAMES")
        .help("Comma-separated list of camera names (default: all)")
        .action(ArgAction::Set)
}

fn action_arg() -> Arg {
    Arg::new("action")
        .long("action")
        .value_name("ACTION")
        .default_value("show")
        .value_parser(["show", "enable", "disable"])
        .help("Action to perform: 'show', 'enable' or 'disable'")
        .action(ArgAction::Set)
}

fn text_arg(name: &'static str, help: &'static str) -> Arg {
    Arg::new(name).long(name).help(help).action(ArgAction::Set)
}

fn number_arg(name: &'static str, help: &'static str) -> Arg {
    text_arg(name, help).value_parser(clap::value_parser!(u32))
}

fn switch_arg(name: &'static str, help: &'static str) -> Arg {
    text_arg(name, help).value_parser(BoolishValueParser::new())
}

pub fn build_cli() -> Command {
    debug!("⚙️ Building CLI interface...");
    Command::new("sercomm")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Reads and writes configuration groups on Sercomm IP cameras.")
        .subcommand_required(true)
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("FILE")
                .default_value(DEFAULT_CONFIG_PATH)
                .help("Sets a custom configuration file")
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("debug")
                .short('d')
                .long("debug")
                .help("Enable debug logging")
                .action(ArgAction::SetTrue),
        )
        .subcommand(Command::new("groups").about("Lists configuration group names").arg(cameras_arg()))
        .subcommand(
            Command::new("get-group")
                .about("Prints every parameter of a configuration group")
                .arg(cameras_arg())
                .arg(text_arg("group", "Group name, e.g. EVENT").required(true)),
        )
        .subcommand(
            Command::new("set-group")
                .about("Writes parameters into a configuration group")
                .arg(cameras_arg())
                .arg(text_arg("group", "Group name, e.g. EVENT").required(true))
                .arg(
                    Arg::new("field")
                        .long("field")
                        .value_name("KEY=VALUE")
                        .help("Parameter to write; repeat for several")
                        .required(true)
                        .action(ArgAction::Append),
                ),
        )
        .subcommand(
            Command::new("webhook")
                .about("Shows, enables or disables the HTTP notification webhook")
                .arg(cameras_arg())
                .arg(action_arg())
                .arg(text_arg("url", "Webhook URL (required for enable)"))
                .arg(text_arg("method", "GET or POST").default_value("GET"))
                .arg(text_arg("user", "Webhook username").default_value(""))
                .arg(text_arg("pass", "Webhook password").default_value("")),
        )
        .subcommand(
            Command::new("http-upload")
                .about("Shows, enables or disables HTTP event upload")
                .arg(cameras_arg())
                .arg(action_arg())
                .arg(text_arg("url", "Upload URL (required for enable)"))
                .arg(text_arg("user", "Upload username").default_value(""))
                .arg(text_arg("pass", "Upload password").default_value("")),
        )
        .subcommand(
            Command::new("event-interval")
                .about("Shows or sets the event trigger interval")
                .arg(cameras_arg())
                .arg(switch_arg("enabled", "Enable event triggering"))
                .arg(number_arg("interval", "Interval in seconds").requires("enabled")),
        )
        .subcommand(
            Command::new("destinations")
                .about("Shows or changes where events from a trigger are sent")
                .arg(cameras_arg())
                .arg(text_arg("trigger", "One of in1, in2, mt, pir, httpc, audio").required(true))
                .arg(switch_arg("email", "Send email"))
                .arg(switch_arg("ftp", "Upload over FTP"))
                .arg(switch_arg("webhook", "Call the webhook"))
                .arg(switch_arg("http-upload", "Upload over HTTP")),
        )
        .subcommand(
            Command::new("event-duration")
                .about("Shows or sets quality and pre/post seconds of event recordings")
                .arg(cameras_arg())
                .arg(number_arg("quality", "Recording quality"))
                .arg(number_arg("before", "Seconds recorded before the event"))
                .arg(number_arg("after", "Seconds recorded after the event")),
        )
        .subcommand(
            Command::new("snapshot")
                .about("Saves a still image from each camera")
                .arg(cameras_arg())
                .arg(
                    Arg::new("output")
                        .short('o')
                        .long("output")
                        .value_name("DIR")
                        .help("Output directory for images")
                        .action(ArgAction::Set),
                ),
        )
        .subcommand(Command::new("urls").about("Prints snapshot, MJPEG and media URLs").arg(cameras_arg()))
        .subcommand(Command::new("status").about("Prints system status and version info").arg(cameras_arg()))
        .subcommand(
            Command::new("pan-tilt")
                .about("Moves the camera head")
                .arg(cameras_arg())
                .arg(text_arg("direction", "One of U, D, L, R, UL, UR, DL, DR").required(true))
                .arg(number_arg("step", "Step size").default_value("10")),
        )
        .subcommand(
            Command::new("inject-telnetd")
                .about("Starts the firmware's telnet daemon (root login with a factory password)")
                .arg(cameras_arg())
                .arg(
                    Arg::new("confirm")
                        .long("confirm")
                        .help("Acknowledge that this opens a root shell on the camera")
                        .action(ArgAction::SetTrue),
                ),
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_definition_is_consistent() {
        build_cli().debug_assert();
    }

    #[test]
    fn destinations_accept_on_off_switches() {
        let matches = build_cli()
            .try_get_matches_from(["sercomm", "destinations", "--trigger", "mt", "--webhook", "on", "--email", "no"])
            .unwrap();
        let (_, sub) = matches.subcommand().unwrap();
        assert_eq!(sub.get_one::<bool>("webhook"), Some(&true));
        assert_eq!(sub.get_one::<bool>("email"), Some(&false));
        assert_eq!(sub.get_one::<bool>("ftp"), None);
    }

    #[test]
    fn interval_requires_enabled() {
        assert!(build_cli()
            .try_get_matches_from(["sercomm", "event-interval", "--interval", "30"])
            .is_err());
    }
}
