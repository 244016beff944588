//! Push notification transport.
//!
//! A [`Message`] is turned into a single HTTP POST against
//! `<server>/<topic>`. The body is sent as raw text and every optional field
//! travels as a header that is omitted when empty.

use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, AUTHORIZATION};
use reqwest::Url;
use std::time::Duration;
use thiserror::Error;

use crate::config::{Config, DEFAULT_PRIORITY, DEFAULT_SERVER};

/// Upper bound for one notification request, connect included.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

const TITLE: HeaderName = HeaderName::from_static("title");
const PRIORITY: HeaderName = HeaderName::from_static("priority");
const TAGS: HeaderName = HeaderName::from_static("tags");

/// Why a notification was not delivered.
#[derive(Error, Debug)]
pub enum NotifyError {
    #[error("topic is required. Run 'tn config --topic <name>' or set TN_TOPIC")]
    MissingTopic,

    #[error("could not build request: {0}")]
    InvalidRequest(String),

    #[error("sending notification: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("server returned {status}: {body}")]
    Status { status: u16, body: String },
}

/// A single notification.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Message {
    /// Hostname or base URL. Empty means the public default server.
    pub server: String,
    pub topic: String,
    pub title: String,
    pub body: String,
    /// `min`, `low`, `default`, `high` or `max`. Empty and `default` are not sent.
    pub priority: String,
    /// Comma-separated tags, sent in the given order.
    pub tags: String,
    /// Bearer token. Empty means no `Authorization` header.
    pub token: String,
}

impl Message {
    /// Start a message addressed with the server, topic, priority and token
    /// from `config`.
    pub fn from_config(config: &Config) -> Self {
        Self {
            server: config.server.clone(),
            topic: config.topic.clone(),
            priority: config.priority.clone(),
            token: config.token.clone(),
            ..Default::default()
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    pub fn with_tags(mut self, tags: impl Into<String>) -> Self {
        self.tags = tags.into();
        self
    }

    /// The URL this message is posted to.
    ///
    /// An empty server becomes the default one, and a server without an
    /// explicit scheme is reached over `https://`.
    pub fn endpoint(&self) -> String {
        let server = if self.server.is_empty() {
            DEFAULT_SERVER
        } else {
            self.server.as_str()
        };

        let base = if server.starts_with("http://") || server.starts_with("https://") {
            server.to_string()
        } else {
            format!("https://{server}")
        };

        format!("{}/{}", base.trim_end_matches('/'), self.topic)
    }

    /// Headers carrying the optional fields.
    fn headers(&self) -> Result<HeaderMap, NotifyError> {
        let mut headers = HeaderMap::new();

        if !self.title.is_empty() {
            headers.insert(TITLE, header_value("title", &self.title)?);
        }
        if !self.priority.is_empty() && self.priority != DEFAULT_PRIORITY {
            headers.insert(PRIORITY, header_value("priority", &self.priority)?);
        }
        if !self.tags.is_empty() {
            headers.insert(TAGS, header_value("tags", &self.tags)?);
        }
        if !self.token.is_empty() {
            let mut auth = header_value("token", &format!("Bearer {}", self.token))?;
            auth.set_sensitive(true);
            headers.insert(AUTHORIZATION, auth);
        }

        Ok(headers)
    }
}

// Raw UTF-8 is allowed so emoji titles go through unencoded.
fn header_value(field: &str, value: &str) -> Result<HeaderValue, NotifyError> {
    HeaderValue::from_bytes(value.as_bytes())
        .map_err(|e| NotifyError::InvalidRequest(format!("invalid {field} value: {e}")))
}

/// Publish `msg` with exactly one request.
///
/// Succeeds only on a 2xx response. Nothing is retried; the caller decides
/// what to do with a failure. A request still unanswered after
/// [`REQUEST_TIMEOUT`] fails with [`NotifyError::Transport`].
pub fn send(msg: &Message) -> Result<(), NotifyError> {
    send_with_timeout(msg, REQUEST_TIMEOUT)
}

fn send_with_timeout(msg: &Message, timeout: Duration) -> Result<(), NotifyError> {
    if msg.topic.is_empty() {
        return Err(NotifyError::MissingTopic);
    }

    let endpoint = msg.endpoint();
    let url = Url::parse(&endpoint)
        .map_err(|e| NotifyError::InvalidRequest(format!("invalid URL {endpoint:?}: {e}")))?;
    let headers = msg.headers()?;

    let client = Client::builder().timeout(timeout).build()?;

    log::debug!("POST {} ({} header(s))", url, headers.len());
    let response = client
        .post(url)
        .headers(headers)
        .body(msg.body.clone())
        .send()?;

    let status = response.status();
    log::debug!("server responded {}", status);
    if !status.is_success() {
        let body = response.text().unwrap_or_default();
        return Err(NotifyError::Status {
            status: status.as_u16(),
            body,
        });
    }

    Ok(())
}
