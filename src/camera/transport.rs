use crate::errors::{Result, SercommError};
use log::debug;
use reqwest::blocking::Client;
use reqwest::{StatusCode, Url};
use std::time::Duration;

pub const DEFAULT_USERNAME: &str = "administrator";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Basic auth credentials, fixed for the lifetime of a session.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Credentials {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl Default for Credentials {
    fn default() -> Self {
        Credentials::new(DEFAULT_USERNAME, "")
    }
}

// Keep the password out of logs.
impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"***")
            .finish()
    }
}

/// A fully received CGI response.
#[derive(Debug, Clone)]
pub struct CgiResponse {
    pub url: String,
    pub status: StatusCode,
    pub body: Vec<u8>,
}

impl CgiResponse {
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    /// Turns a non-2xx status into [`SercommError::Status`].
    pub fn error_for_status(self) -> Result<Self> {
        if self.status.is_success() {
            Ok(self)
        } else {
            Err(SercommError::Status {
                url: self.url,
                status: self.status,
            })
        }
    }
}

/// Authenticated HTTP session used by a camera client. Each call is one
/// blocking GET round trip.
pub trait Transport {
    fn get(&self, url: &str, query: &[(String, String)]) -> Result<CgiResponse>;
}

/// Blocking `reqwest` session with Basic auth applied to every request.
pub struct HttpTransport {
    client: Client,
    credentials: Credentials,
}

impl HttpTransport {
    pub fn new(credentials: Credentials, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(HttpTransport { client, credentials })
    }
}

/// `url` without its query string. Writes carry passwords as query
/// parameters, so only this form may reach errors and logs.
fn url_without_query(url: &Url) -> String {
    let mut stripped = url.clone();
    stripped.set_query(None);
    stripped.to_string()
}

impl Transport for HttpTransport {
    fn get(&self, url: &str, query: &[(String, String)]) -> Result<CgiResponse> {
        let keys: Vec<&str> = query.iter().map(|(k, _)| k.as_str()).collect();
        debug!("GET {} with {:?}", url, keys);
        let mut request = self
            .client
            .get(url)
            .basic_auth(&self.credentials.username, Some(&self.credentials.password));
        if !query.is_empty() {
            request = request.query(query);
        }
        let response = request.send().map_err(reqwest::Error::without_url)?;
        let status = response.status();
        let final_url = url_without_query(response.url());
        let body = response.bytes().map_err(reqwest::Error::without_url)?.to_vec();
        debug!("{} -> {} ({} bytes)", final_url, status, body.len());
        Ok(CgiResponse {
            url: final_url,
            status,
            body,
        })
    }
}

#[cfg(test)]
pub(crate) mod mock {
    use super::*;
    use std::cell::RefCell;
    use std::collections::VecDeque;
    use std::rc::Rc;

    pub(crate) type RequestLog = Rc<RefCell<Vec<(String, Vec<(String, String)>)>>>;

    /// Replays canned responses in order and records every request.
    pub(crate) struct MockTransport {
        pub(crate) requests: RequestLog,
        responses: RefCell<VecDeque<(StatusCode, String)>>,
    }

    impl MockTransport {
        pub(crate) fn new(responses: &[(u16, &str)]) -> Self {
            MockTransport {
                requests: RequestLog::default(),
                responses: RefCell::new(
                    responses
                        .iter()
                        .map(|(status, body)| {
                            (StatusCode::from_u16(*status).unwrap(), body.to_string())
                        })
                        .collect(),
                ),
            }
        }
    }

    impl Transport for MockTransport {
        fn get(&self, url: &str, query: &[(String, String)]) -> Result<CgiResponse> {
            self.requests.borrow_mut().push((url.to_string(), query.to_vec()));
            let (status, body) = self
                .responses
                .borrow_mut()
                .pop_front()
                .unwrap_or((StatusCode::OK, String::new()));
            Ok(CgiResponse {
                url: url.to_string(),
                status,
                body: body.into_bytes(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_credentials_use_administrator() {
        let creds = Credentials::default();
        assert_eq!(creds.username, "administrator");
        assert_eq!(creds.password, "");
    }

    #[test]
    fn debug_output_hides_password() {
        let rendered = format!("{:?}", Credentials::new("admin", "hunter2"));
        assert!(rendered.contains("admin"));
        assert!(!rendered.contains("hunter2"));
    }

    #[test]
    fn logged_url_drops_query_parameters() {
        let url = Url::parse("http://cam:80/adm/set_group.cgi?group=HTTP_NOTIFY&http_password=hunter2").unwrap();
        assert_eq!(url_without_query(&url), "http://cam/adm/set_group.cgi");
    }

    #[test]
    fn non_success_status_becomes_error() {
        let response = CgiResponse {
            url: "http://cam/adm/set_group.cgi".to_string(),
            status: StatusCode::UNAUTHORIZED,
            body: Vec::new(),
        };
        match response.error_for_status() {
            Err(SercommError::Status { status, .. }) => assert_eq!(status, StatusCode::UNAUTHORIZED),
            other => panic!("expected Status error, got {:?}", other),
        }
    }
}
