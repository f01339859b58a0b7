//! Error types for the connector.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, ConnectorError>;

/// Unified error type for all connector operations.
///
/// A server that rejects one or more statements still answers with HTTP 200,
/// so the interesting failure is [`Server`](ConnectorError::Server): it carries
/// every `(code, message)` pair the server reported for the batch.
///
/// ```rust
/// # use connector_core::{ConnectorError, ServerError};
/// let err = ConnectorError::Server {
///     errors: vec![ServerError::new("Neo.ClientError.Statement.SyntaxError", "Invalid input")],
/// };
/// match err {
///     ConnectorError::Server { errors } => {
///         for e in &errors {
///             eprintln!("{}: {}", e.code, e.message);
///         }
///     }
///     other => panic!("unexpected: {other}"),
/// }
/// ```
#[derive(Error, Debug)]
pub enum ConnectorError {
    /// A caller-supplied setting is unusable, e.g. a batch size of zero.
    ///
    /// Always raised before any request is sent.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// The server answered with one or more entries in its `errors` list.
    ///
    /// No rows are returned for any statement of the failed batch.
    #[error("server reported {} error(s): {}", .errors.len(), summarize(.errors))]
    Server { errors: Vec<ServerError> },

    /// Failure raised by the HTTP layer: connection refused, timeout,
    /// non-2xx status or a body that is not JSON.
    #[error("transport error: {0}")]
    Transport(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// The server's JSON does not have the expected transactional shape.
    #[error("malformed response: {0}")]
    MalformedResponse(String),

    /// A general row mapping error with a freeform message.
    #[error("mapping error: {0}")]
    Mapping(String),

    /// A required column was not found in a [`Row`](crate::row::Row).
    #[error("missing field '{field}' on {struct_name}")]
    MissingField { field: String, struct_name: String },

    /// A JSON value did not match the expected Rust type.
    #[error("type mismatch: expected {expected}, got {got} ({context})")]
    TypeMismatch {
        expected: String,
        got: String,
        context: String,
    },

    /// Wraps an inner error with additional context (struct name, field).
    #[error("{context}: {source}")]
    Context {
        context: String,
        source: Box<ConnectorError>,
    },

    /// Parameter (de)serialization failed.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

fn summarize(errors: &[ServerError]) -> String {
    errors
        .iter()
        .map(|e| e.code.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

impl ConnectorError {
    /// Wrap any transport-level failure.
    pub fn transport(err: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        ConnectorError::Transport(err.into())
    }

    /// Create an [`InvalidConfiguration`](ConnectorError::InvalidConfiguration) error.
    pub fn invalid_configuration(msg: impl Into<String>) -> Self {
        ConnectorError::InvalidConfiguration(msg.into())
    }

    /// Create a [`MalformedResponse`](ConnectorError::MalformedResponse) error.
    pub fn malformed(msg: impl Into<String>) -> Self {
        ConnectorError::MalformedResponse(msg.into())
    }

    /// Create a [`TypeMismatch`](ConnectorError::TypeMismatch) error.
    pub fn type_mismatch(expected: &str, got: &str, context: &str) -> Self {
        ConnectorError::TypeMismatch {
            expected: expected.to_owned(),
            got: got.to_owned(),
            context: context.to_owned(),
        }
    }

    /// Create a [`MissingField`](ConnectorError::MissingField) error.
    pub fn missing_field(field: &str, struct_name: &str) -> Self {
        ConnectorError::MissingField {
            field: field.to_owned(),
            struct_name: struct_name.to_owned(),
        }
    }

    /// Wrap this error with additional context, producing a [`Context`](ConnectorError::Context) variant.
    ///
    /// ```rust
    /// # use connector_core::ConnectorError;
    /// let err = ConnectorError::type_mismatch("Integer", "String", "i64");
    /// let wrapped = err.with_context("UserRow::age");
    /// assert!(wrapped.to_string().contains("UserRow::age"));
    /// ```
    pub fn with_context(self, ctx: impl Into<String>) -> Self {
        ConnectorError::Context {
            context: ctx.into(),
            source: Box::new(self),
        }
    }

    /// The server-reported errors, if this is a [`Server`](ConnectorError::Server) failure.
    pub fn server_errors(&self) -> Option<&[ServerError]> {
        match self {
            ConnectorError::Server { errors } => Some(errors),
            _ => None,
        }
    }
}

/// One `(code, message)` pair from the `errors` list of a response.
///
/// `code` follows the `Neo.<Classification>.<Category>.<Title>` status code
/// taxonomy. For Cypher syntax errors `message` carries an extra line with a
/// `^` under the offending character.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerError {
    pub code: String,
    pub message: String,
}

impl ServerError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }

    /// `ClientError`, `ClientNotification`, `TransientError` or `DatabaseError`.
    pub fn classification(&self) -> Option<&str> {
        self.code_part(1)
    }

    /// e.g. `Statement` in `Neo.ClientError.Statement.SyntaxError`.
    pub fn category(&self) -> Option<&str> {
        self.code_part(2)
    }

    /// e.g. `SyntaxError` in `Neo.ClientError.Statement.SyntaxError`.
    pub fn title(&self) -> Option<&str> {
        self.code_part(3)
    }

    /// Whether the server flagged this as a transient error worth retrying.
    pub fn is_transient(&self) -> bool {
        self.classification() == Some("TransientError")
    }

    fn code_part(&self, idx: usize) -> Option<&str> {
        let mut parts = self.code.split('.');
        if parts.next() != Some("Neo") {
            return None;
        }
        parts.nth(idx - 1).filter(|p| !p.is_empty())
    }

    /// Zero-based column of the `^` pointer line, if the message has one.
    ///
    /// The column is relative to the line above the pointer, which echoes the
    /// offending part of the statement.
    pub fn caret_column(&self) -> Option<usize> {
        self.message
            .lines()
            .skip(1)
            .find(|line| line.trim() == "^")
            .and_then(|line| line.find('^'))
    }
}

impl std::fmt::Display for ServerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.code, self.message)
    }
}
