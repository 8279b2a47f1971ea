//! Fixed CGI paths and closed vocabularies understood by Sercomm firmware.

use crate::errors::SercommError;
use std::fmt;
use std::str::FromStr;

// Image/video streams
pub const PATH_IMAGE_SNAPSHOT: &str = "/img/snapshot.cgi";
pub const PATH_IMAGE_MJPEG: &str = "/img/video.mjpeg";
pub const PATH_IMAGE_MEDIA: &str = "/img/media.sav";

// Pan/tilt control
pub const PATH_PAN_TILT: &str = "/pt/ptctrl.cgi";

// Configuration groups
pub const PATH_GET_GROUP: &str = "/adm/get_group.cgi";
pub const PATH_SET_GROUP: &str = "/adm/set_group.cgi";

// System info
pub const PATH_INFO_STATUS: &str = "/util/query.cgi?extension=yes";
pub const PATH_INFO_VERSIONS: &str = "/adm/sysinfo.cgi";

/// Enables a telnet daemon on the device. Anyone on the network can then
/// log in with [`USER_TELNETD`] / [`PASS_TELNETD`].
pub const PATH_TELNETD: &str = "/adm/file.cgi?todo=inject_telnetd";
pub const USER_TELNETD: &str = "root";
pub const PASS_TELNETD: &str = "Aq0+0009";

/// Configuration groups read and written by the semantic accessors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Group {
    HttpNotify,
    HttpEvent,
    Event,
}

impl Group {
    pub fn as_str(&self) -> &'static str {
        match self {
            Group::HttpNotify => "HTTP_NOTIFY",
            Group::HttpEvent => "HTTP_EVENT",
            Group::Event => "EVENT",
        }
    }
}

impl AsRef<str> for Group {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Hardware or software event source. Used as the `event_<trigger>` key
/// suffix inside the `EVENT` group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventTrigger {
    Input1,
    Input2,
    Motion,
    Pir,
    HttpCgi,
    Audio,
}

impl EventTrigger {
    pub const ALL: [EventTrigger; 6] = [
        EventTrigger::Input1,
        EventTrigger::Input2,
        EventTrigger::Motion,
        EventTrigger::Pir,
        EventTrigger::HttpCgi,
        EventTrigger::Audio,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EventTrigger::Input1 => "in1",
            EventTrigger::Input2 => "in2",
            EventTrigger::Motion => "mt",
            EventTrigger::Pir => "pir",
            EventTrigger::HttpCgi => "httpc",
            EventTrigger::Audio => "audio",
        }
    }

    /// Parameter name of this trigger's destination list in the `EVENT` group.
    pub fn event_key(&self) -> String {
        format!("event_{}", self.as_str())
    }
}

impl FromStr for EventTrigger {
    type Err = SercommError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EventTrigger::ALL
            .iter()
            .copied()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| SercommError::InvalidTrigger(s.to_string()))
    }
}

impl fmt::Display for EventTrigger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PanTiltDirection {
    Up,
    Down,
    Left,
    Right,
    UpLeft,
    UpRight,
    DownLeft,
    DownRight,
}

impl PanTiltDirection {
    pub const ALL: [PanTiltDirection; 8] = [
        PanTiltDirection::Up,
        PanTiltDirection::Down,
        PanTiltDirection::Left,
        PanTiltDirection::Right,
        PanTiltDirection::UpLeft,
        PanTiltDirection::UpRight,
        PanTiltDirection::DownLeft,
        PanTiltDirection::DownRight,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PanTiltDirection::Up => "U",
            PanTiltDirection::Down => "D",
            PanTiltDirection::Left => "L",
            PanTiltDirection::Right => "R",
            PanTiltDirection::UpLeft => "UL",
            PanTiltDirection::UpRight => "UR",
            PanTiltDirection::DownLeft => "DL",
            PanTiltDirection::DownRight => "DR",
        }
    }
}

impl FromStr for PanTiltDirection {
    type Err = SercommError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.to_ascii_uppercase();
        PanTiltDirection::ALL
            .iter()
            .copied()
            .find(|d| d.as_str() == upper)
            .ok_or_else(|| SercommError::InvalidPanTiltDirection(s.to_string()))
    }
}

impl fmt::Display for PanTiltDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
