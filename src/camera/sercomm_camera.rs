use crate::camera::endpoints::{self, EventTrigger, Group, PanTiltDirection};
use crate::camera::group_codec::{self, GroupParams};
use crate::camera::settings::{
    DestinationUpdate, EventDestinations, EventDuration, EventInterval, GroupFields, HttpUploadConfig,
    HttpUploadSettings, WebhookConfig, WebhookSettings,
};
use crate::camera::transport::{CgiResponse, Credentials, HttpTransport, Transport};
use crate::errors::Result;
use log::{debug, info, warn};
use std::time::Duration;

const HTTPS_PORT: u16 = 443;

/// Where a camera lives. Port 443 always implies TLS.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CameraAddress {
    pub host: String,
    pub port: u16,
    pub ssl: bool,
}

impl CameraAddress {
    pub fn new(host: impl Into<String>, port: u16, ssl: bool) -> Self {
        CameraAddress {
            host: host.into(),
            port,
            ssl: ssl || port == HTTPS_PORT,
        }
    }

    pub fn scheme(&self) -> &'static str {
        if self.ssl { "https" } else { "http" }
    }

    pub fn format_uri(&self, relative_path: &str) -> String {
        format!("{}://{}:{}{}", self.scheme(), self.host, self.port, relative_path)
    }
}

/// Client for one Sercomm camera.
///
/// Owns its authenticated session. Every operation performs its requests
/// synchronously and returns once the responses are fully read; any non-2xx
/// status is an error.
pub struct SercommCamera<T: Transport = HttpTransport> {
    address: CameraAddress,
    transport: T,
}

impl SercommCamera<HttpTransport> {
    pub fn new(address: CameraAddress, credentials: Credentials, timeout: Duration) -> Result<Self> {
        debug!("Creating Sercomm client for {} as '{}'", address.format_uri(""), credentials.username);
        let transport = HttpTransport::new(credentials, timeout)?;
        Ok(SercommCamera::with_transport(address, transport))
    }
}

impl<T: Transport> SercommCamera<T> {
    pub fn with_transport(address: CameraAddress, transport: T) -> Self {
        SercommCamera { address, transport }
    }

    pub fn address(&self) -> &CameraAddress {
        &self.address
    }

    fn request(&self, path: &str, query: &[(String, String)]) -> Result<CgiResponse> {
        let url = self.address.format_uri(path);
        self.transport.get(&url, query)?.error_for_status()
    }

    /// Names of every configuration group, in the order the device lists them.
    pub fn list_groups(&self) -> Result<Vec<String>> {
        let response = self.request(endpoints::PATH_GET_GROUP, &[])?;
        Ok(group_codec::parse_group_list(&response.text()))
    }

    pub fn get_group(&self, group: impl AsRef<str>) -> Result<GroupParams> {
        let group = group.as_ref();
        let query = [("group".to_string(), group.to_string())];
        let response = self.request(endpoints::PATH_GET_GROUP, &query)?;
        group_codec::parse_group(&response.text())
    }

    /// Writes `fields` into `group` in a single request.
    pub fn set_group<K, V>(&self, group: impl AsRef<str>, fields: &[(K, V)]) -> Result<CgiResponse>
    where
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let query = group_codec::encode_set_group_query(group.as_ref(), fields)?;
        self.request(endpoints::PATH_SET_GROUP, &query)
    }

    fn write_group(&self, group: Group, fields: GroupFields) -> Result<()> {
        debug!("Writing {} field(s) to group {}", fields.len(), group);
        self.set_group(group, &fields)?;
        Ok(())
    }

    pub fn get_webhook(&self) -> Result<WebhookConfig> {
        Ok(WebhookConfig::from_params(&self.get_group(Group::HttpNotify)?))
    }

    pub fn enable_webhook(&self, settings: &WebhookSettings) -> Result<()> {
        self.write_group(Group::HttpNotify, settings.enable_fields())
    }

    pub fn disable_webhook(&self) -> Result<()> {
        self.write_group(Group::HttpNotify, WebhookSettings::disable_fields())
    }

    pub fn get_http_upload(&self) -> Result<HttpUploadConfig> {
        Ok(HttpUploadConfig::from_params(&self.get_group(Group::HttpEvent)?))
    }

    pub fn enable_http_upload(&self, settings: &HttpUploadSettings) -> Result<()> {
        self.write_group(Group::HttpEvent, settings.enable_fields())
    }

    pub fn disable_http_upload(&self) -> Result<()> {
        self.write_group(Group::HttpEvent, HttpUploadSettings::disable_fields())
    }

    pub fn get_event_interval(&self) -> Result<EventInterval> {
        EventInterval::from_params(&self.get_group(Group::Event)?)
    }

    pub fn set_event_interval(&self, enabled: bool, interval_secs: u32) -> Result<()> {
        self.write_group(Group::Event, EventInterval::fields(enabled, interval_secs))
    }

    /// Destinations enabled for `trigger`. An unset trigger reads as all disabled.
    pub fn get_event_destinations(&self, trigger: EventTrigger) -> Result<EventDestinations> {
        let params = self.get_group(Group::Event)?;
        let key = trigger.event_key();
        EventDestinations::decode(&key, params.get(&key).map(String::as_str))
    }

    /// Reads the current destinations for `trigger`, applies `update` and
    /// writes the result back. Returns what was written.
    pub fn set_event_destinations(
        &self,
        trigger: EventTrigger,
        update: &DestinationUpdate,
    ) -> Result<EventDestinations> {
        let current = self.get_event_destinations(trigger)?;
        let updated = update.apply(current);
        let key = trigger.event_key();
        debug!("Updating {}: {:?} -> {:?}", key, current, updated);
        self.set_group(Group::Event, &[(key.as_str(), updated.encode())])?;
        Ok(updated)
    }

    pub fn get_event_duration(&self) -> Result<EventDuration> {
        EventDuration::from_params(&self.get_group(Group::Event)?)
    }

    pub fn set_event_duration(&self, duration: &EventDuration) -> Result<()> {
        self.write_group(Group::Event, duration.fields())
    }

    /// Fetches a still JPEG.
    pub fn snapshot(&self) -> Result<Vec<u8>> {
        Ok(self.request(endpoints::PATH_IMAGE_SNAPSHOT, &[])?.body)
    }

    pub fn system_status(&self) -> Result<GroupParams> {
        let response = self.request(endpoints::PATH_INFO_STATUS, &[])?;
        group_codec::parse_group(&response.text())
    }

    pub fn system_info(&self) -> Result<GroupParams> {
        let response = self.request(endpoints::PATH_INFO_VERSIONS, &[])?;
        group_codec::parse_group(&response.text())
    }

    /// Moves the head `step` units in `direction`.
    pub fn pan_tilt(&self, direction: PanTiltDirection, step: u32) -> Result<()> {
        let query = [("mv".to_string(), format!("{},{}", direction, step))];
        self.request(endpoints::PATH_PAN_TILT, &query)?;
        Ok(())
    }

    /// Starts the firmware's diagnostic telnet daemon.
    ///
    /// This opens a root shell protected only by the well-known credentials
    /// in [`endpoints::USER_TELNETD`] / [`endpoints::PASS_TELNETD`]. Do not
    /// call it on a camera reachable from an untrusted network.
    pub fn inject_telnetd(&self) -> Result<CgiResponse> {
        warn!(
            "Enabling telnetd on {} - login '{}' with the factory password is now possible.",
            self.address.host,
            endpoints::USER_TELNETD
        );
        let response = self.request(endpoints::PATH_TELNETD, &[])?;
        info!("telnetd injection accepted by {} ({}).", self.address.host, response.status);
        Ok(response)
    }

    pub fn image_url(&self) -> String {
        self.address.format_uri(endpoints::PATH_IMAGE_SNAPSHOT)
    }

    pub fn mjpeg_url(&self) -> String {
        self.address.format_uri(endpoints::PATH_IMAGE_MJPEG)
    }

    pub fn media_url(&self) -> String {
        self.address.format_uri(endpoints::PATH_IMAGE_MEDIA)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::transport::mock::MockTransport;
    use crate::errors::SercommError;
    use crate::camera::settings::HttpMethod;

    fn camera(responses: &[(u16, &str)]) -> (SercommCamera<MockTransport>, crate::camera::transport::mock::RequestLog) {
        let transport = MockTransport::new(responses);
        let log = transport.requests.clone();
        (SercommCamera::with_transport(CameraAddress::new("cam.local", 80, false), transport), log)
    }

    fn query_value<'a>(query: &'a [(String, String)], key: &str) -> Option<&'a str> {
        query.iter().find(|(k, _)| k == key).map(|(_, v)| v.as_str())
    }

    #[test]
    fn port_443_implies_https() {
        assert_eq!(CameraAddress::new("h", 443, false).format_uri("/x"), "https://h:443/x");
        assert_eq!(CameraAddress::new("h", 8443, true).scheme(), "https");
        assert_eq!(CameraAddress::new("h", 8080, false).format_uri("/x"), "http://h:8080/x");
    }

    #[test]
    fn stream_urls_issue_no_requests() {
        let (cam, log) = camera(&[]);
        assert_eq!(cam.image_url(), "http://cam.local:80/img/snapshot.cgi");
        assert_eq!(cam.mjpeg_url(), "http://cam.local:80/img/video.mjpeg");
        assert_eq!(cam.media_url(), "http://cam.local:80/img/media.sav");
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn list_groups_requests_without_group_param() {
        let (cam, log) = camera(&[(200, "[GROUP_A]\n[GROUP_B]\n")]);
        assert_eq!(cam.list_groups().unwrap(), vec!["GROUP_A", "GROUP_B"]);
        let log = log.borrow();
        assert_eq!(log[0].0, "http://cam.local:80/adm/get_group.cgi");
        assert!(log[0].1.is_empty());
    }

    #[test]
    fn get_group_sends_group_name() {
        let (cam, log) = camera(&[(200, "[EVENT]\nevent_trigger=1\nevent_interval=30\n")]);
        let params = cam.get_group("EVENT").unwrap();
        assert_eq!(params.get("event_trigger").map(String::as_str), Some("1"));
        assert_eq!(params.get("event_interval").map(String::as_str), Some("30"));
        assert_eq!(query_value(&log.borrow()[0].1, "group"), Some("EVENT"));
    }

    #[test]
    fn set_group_failure_is_surfaced() {
        let (cam, _) = camera(&[(500, "")]);
        let result = cam.set_group("EVENT", &[("event_trigger", "1")]);
        assert!(matches!(result, Err(SercommError::Status { .. })));
    }

    #[test]
    fn enable_webhook_encodes_post_as_one() {
        let (cam, log) = camera(&[(200, ""), (200, "")]);
        let settings = WebhookSettings::new("http://x/y").with_method(HttpMethod::Post);
        cam.enable_webhook(&settings).unwrap();
        cam.enable_webhook(&WebhookSettings::new("http://x/y")).unwrap();
        let log = log.borrow();
        assert_eq!(log.len(), 2);
        assert_eq!(log[0].0, "http://cam.local:80/adm/set_group.cgi");
        assert_eq!(query_value(&log[0].1, "group"), Some("HTTP_NOTIFY"));
        assert_eq!(query_value(&log[0].1, "http_method"), Some("1"));
        assert_eq!(query_value(&log[0].1, "http_url"), Some("http://x/y"));
        assert_eq!(query_value(&log[1].1, "http_method"), Some("0"));
    }

    #[test]
    fn disable_http_upload_reports_rejection() {
        let (cam, log) = camera(&[(401, "")]);
        assert!(matches!(cam.disable_http_upload(), Err(SercommError::Status { .. })));
        assert_eq!(query_value(&log.borrow()[0].1, "group"), Some("HTTP_EVENT"));
    }

    #[test]
    fn unset_trigger_reads_as_disabled() {
        for trigger in EventTrigger::ALL {
            let (cam, _) = camera(&[(200, "[EVENT]\nevent_trigger=1\n")]);
            assert_eq!(cam.get_event_destinations(trigger).unwrap(), EventDestinations::default());
        }
    }

    #[test]
    fn set_destinations_preserves_other_channels() {
        let (cam, log) = camera(&[(200, "[EVENT]\nevent_mt=1,0,0,0,0,1,0,0\n"), (200, "")]);
        let update = DestinationUpdate { webhook: Some(true), ..Default::default() };
        let written = cam.set_event_destinations(EventTrigger::Motion, &update).unwrap();
        assert_eq!(written, EventDestinations { email: true, ftp: false, webhook: true, http_upload: true });
        let log = log.borrow();
        assert_eq!(log.len(), 2);
        assert_eq!(query_value(&log[1].1, "event_mt"), Some("1,0,0,0,1,1,0,0"));
    }

    #[test]
    fn set_destinations_failure_is_surfaced() {
        let (cam, _) = camera(&[(200, "event_in1=0,0,0,0,0,0,0,0\n"), (503, "")]);
        let update = DestinationUpdate { email: Some(true), ..Default::default() };
        assert!(matches!(
            cam.set_event_destinations(EventTrigger::Input1, &update),
            Err(SercommError::Status { .. })
        ));
    }

    #[test]
    fn event_duration_writes_event_attach() {
        let (cam, log) = camera(&[(200, "")]);
        cam.set_event_duration(&EventDuration { quality: 5, before: 2, after: 3 }).unwrap();
        let log = log.borrow();
        assert_eq!(query_value(&log[0].1, "group"), Some("EVENT"));
        assert_eq!(query_value(&log[0].1, "event_attach"), Some("avi,5,2,3"));
    }

    #[test]
    fn event_interval_round_trip() {
        let (cam, log) = camera(&[(200, ""), (200, "[EVENT]\nevent_trigger=0\nevent_interval=15\n")]);
        cam.set_event_interval(true, 45).unwrap();
        assert_eq!(query_value(&log.borrow()[0].1, "event_trigger"), Some("1"));
        assert_eq!(query_value(&log.borrow()[0].1, "event_interval"), Some("45"));
        let interval = cam.get_event_interval().unwrap();
        assert_eq!(interval, EventInterval { enabled: false, interval_secs: Some(15) });
    }

    #[test]
    fn pan_tilt_sends_direction_and_step() {
        let (cam, log) = camera(&[(200, "")]);
        cam.pan_tilt(PanTiltDirection::DownLeft, 10).unwrap();
        let log = log.borrow();
        assert_eq!(log[0].0, "http://cam.local:80/pt/ptctrl.cgi");
        assert_eq!(query_value(&log[0].1, "mv"), Some("DL,10"));
    }

    #[test]
    fn inject_telnetd_hits_diagnostic_path() {
        let (cam, log) = camera(&[(200, "ok")]);
        let response = cam.inject_telnetd().unwrap();
        assert_eq!(response.text(), "ok");
        assert_eq!(log.borrow()[0].0, "http://cam.local:80/adm/file.cgi?todo=inject_telnetd");
    }

    #[test]
    fn system_info_parses_key_values() {
        let (cam, log) = camera(&[(200, "fw_ver=1.0.32\nmodel=RC8221\n")]);
        let info = cam.system_info().unwrap();
        assert_eq!(info.get("model").map(String::as_str), Some("RC8221"));
        assert_eq!(log.borrow()[0].0, "http://cam.local:80/adm/sysinfo.cgi");
    }
}
