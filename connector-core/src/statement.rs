//! The wire-ready statement record.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::Result;
use crate::traits::ToParameters;

/// Named statement parameters, serialized verbatim.
pub type Parameters = Map<String, Value>;

/// A Cypher statement plus its named parameters.
///
/// Serializes to `{"statement": "..."}` when there are no parameters and to
/// `{"statement": "...", "parameters": {...}}` otherwise. The server caches
/// plans differently for an absent and an empty `parameters` field, so an
/// empty map is never put on the wire.
///
/// The Cypher text is passed through untouched; nothing is validated.
///
/// ```rust
/// # use connector_core::Statement;
/// let s = Statement::new("MATCH (n:node {uuid: $uuid}) RETURN n").param("uuid", "123abc");
/// assert_eq!(
///     serde_json::to_value(&s).unwrap(),
///     serde_json::json!({
///         "statement": "MATCH (n:node {uuid: $uuid}) RETURN n",
///         "parameters": {"uuid": "123abc"}
///     })
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Statement {
    statement: String,
    #[serde(skip_serializing_if = "Map::is_empty")]
    parameters: Parameters,
}

impl Statement {
    /// Create a statement without parameters.
    pub fn new(cypher: impl Into<String>) -> Self {
        Self {
            statement: cypher.into(),
            parameters: Parameters::new(),
        }
    }

    /// Create a statement from Cypher and an optional parameter map.
    ///
    /// `None` and an empty map both produce a record with only the
    /// `statement` field.
    pub fn with_parameters(cypher: impl Into<String>, parameters: Option<Parameters>) -> Self {
        Self {
            statement: cypher.into(),
            parameters: parameters.unwrap_or_default(),
        }
    }

    /// Bind a named parameter.
    pub fn param(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.parameters.insert(key.into(), value.into());
        self
    }

    /// Bind every field of a [`ToParameters`] source as a named parameter.
    ///
    /// Fails only if a field value cannot be serialized to JSON.
    pub fn params_from(mut self, source: impl ToParameters) -> Result<Self> {
        self.parameters.extend(source.to_parameters()?);
        Ok(self)
    }

    /// The Cypher text.
    pub fn cypher(&self) -> &str {
        &self.statement
    }

    /// The parameters, or `None` if none are bound.
    pub fn parameters(&self) -> Option<&Parameters> {
        if self.parameters.is_empty() {
            None
        } else {
            Some(&self.parameters)
        }
    }
}

impl From<&str> for Statement {
    fn from(cypher: &str) -> Self {
        Statement::new(cypher)
    }
}

impl From<String> for Statement {
    fn from(cypher: String) -> Self {
        Statement::new(cypher)
    }
}

/// Request body for the transactional endpoint: `{"statements": [...]}`.
#[derive(Debug, Serialize)]
pub struct TransactionRequest<'a> {
    pub statements: &'a [Statement],
}

impl<'a> TransactionRequest<'a> {
    pub fn new(statements: &'a [Statement]) -> Self {
        Self { statements }
    }

    /// Render the request body as a JSON value.
    pub fn to_value(&self) -> Result<Value> {
        Ok(serde_json::to_value(self)?)
    }
}
