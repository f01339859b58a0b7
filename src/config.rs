//! Connector configuration: endpoint, credentials and error verbosity.

use std::time::Duration;

use connector_core::error::{ConnectorError, Result};
use serde::Deserialize;

/// Host used when none is configured.
pub const DEFAULT_HOST: &str = "http://localhost:7474";
/// The "begin and commit a transaction in one request" resource.
pub const DEFAULT_PATH: &str = "/db/data/transaction/commit";

/// Username/password pair sent as HTTP basic auth.
///
/// `Debug` never prints the password.
#[derive(Clone, PartialEq, Eq, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl Default for Credentials {
    fn default() -> Self {
        Self::new("neo4j", "neo4j")
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"***")
            .finish()
    }
}

impl<U: Into<String>, P: Into<String>> From<(U, P)> for Credentials {
    fn from((username, password): (U, P)) -> Self {
        Self::new(username, password)
    }
}

/// Static configuration of a [`Connector`](crate::Connector).
///
/// ```rust
/// # use neo4j_connector::ConnectorConfig;
/// let config = ConnectorConfig::default()
///     .with_host("http://mydomain:7474")
///     .with_credentials(("username", "password"))
///     .with_verbose_errors(true);
/// assert_eq!(config.endpoint(), "http://mydomain:7474/db/data/transaction/commit");
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ConnectorConfig {
    pub host: String,
    pub path: String,
    pub credentials: Credentials,
    /// Log every server-reported `(code, message)` pair at error level.
    pub verbose_errors: bool,
    /// Per-request timeout handed to the HTTP client.
    pub timeout: Option<Duration>,
}

impl Default for ConnectorConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            path: DEFAULT_PATH.to_string(),
            credentials: Credentials::default(),
            verbose_errors: false,
            timeout: None,
        }
    }
}

impl ConnectorConfig {
    pub fn new(host: impl Into<String>, credentials: impl Into<Credentials>) -> Self {
        Self::default().with_host(host).with_credentials(credentials)
    }

    /// Build a configuration from `NEO4J_*` environment variables.
    ///
    /// | variable | field |
    /// |---|---|
    /// | `NEO4J_HOST` | `host` |
    /// | `NEO4J_PATH` | `path` |
    /// | `NEO4J_USERNAME` | `credentials.username` |
    /// | `NEO4J_PASSWORD` | `credentials.password` |
    /// | `NEO4J_VERBOSE_ERRORS` | `verbose_errors` (`true`/`false`/`1`/`0`) |
    /// | `NEO4J_TIMEOUT_SECS` | `timeout` |
    ///
    /// Unset variables keep their defaults.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with a custom variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();
        if let Some(host) = lookup("NEO4J_HOST") {
            config.host = host;
        }
        if let Some(path) = lookup("NEO4J_PATH") {
            config.path = path;
        }
        if let Some(username) = lookup("NEO4J_USERNAME") {
            config.credentials.username = username;
        }
        if let Some(password) = lookup("NEO4J_PASSWORD") {
            config.credentials.password = password;
        }
        if let Some(raw) = lookup("NEO4J_VERBOSE_ERRORS") {
            config.verbose_errors = parse_bool(&raw).ok_or_else(|| {
                ConnectorError::invalid_configuration(format!("NEO4J_VERBOSE_ERRORS: not a boolean: '{raw}'"))
            })?;
        }
        if let Some(raw) = lookup("NEO4J_TIMEOUT_SECS") {
            let secs: u64 = raw.trim().parse().map_err(|_| {
                ConnectorError::invalid_configuration(format!("NEO4J_TIMEOUT_SECS: not a number: '{raw}'"))
            })?;
            config.timeout = Some(Duration::from_secs(secs));
        }
        Ok(config)
    }

    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = path.into();
        self
    }

    pub fn with_credentials(mut self, credentials: impl Into<Credentials>) -> Self {
        self.credentials = credentials.into();
        self
    }

    pub fn with_verbose_errors(mut self, verbose: bool) -> Self {
        self.verbose_errors = verbose;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Full URL requests are posted to: host followed by path.
    pub fn endpoint(&self) -> String {
        let host = self.host.trim_end_matches('/');
        if self.path.starts_with('/') {
            format!("{host}{}", self.path)
        } else {
            format!("{host}/{}", self.path)
        }
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
