//! Core traits for mapping between result rows and Rust structs.

use serde_json::Value;

use crate::error::ConnectorError;
use crate::row::Row;
use crate::statement::Parameters;

/// Maps a [`Row`] into a Rust struct by column name.
///
/// Automatically implemented by `#[derive(FromRow)]`. Each struct field
/// maps to a column name in the row.
///
/// # Field attributes
///
/// - **`Option<T>`** fields tolerate missing columns (become `None`).
/// - **`#[row(rename = "...")]`** reads a column whose name differs from the field.
/// - **`#[row(flatten)]`** delegates to the inner type's `FromRow` impl,
///   passing the same row. Useful for composing result structs.
///
/// # Example
///
/// ```rust,ignore
/// #[derive(FromRow)]
/// struct NodeCount {
///     #[row(rename = "node_count")]
///     count: i64,
///     label: Option<String>,
/// }
/// ```
pub trait FromRow: Sized {
    /// Deserialize a [`Row`] into `Self`.
    fn from_row(row: &Row) -> Result<Self, ConnectorError>;
}

impl FromRow for Row {
    fn from_row(row: &Row) -> Result<Self, ConnectorError> {
        Ok(row.clone())
    }
}

/// Converts a single JSON value from a result row into a Rust type.
///
/// This is the core conversion primitive. Implementations exist for
/// primitives, collections, temporal and spatial types. See the
/// [`value`](crate::value) module.
pub trait FromValue: Sized {
    /// Convert a [`serde_json::Value`] into `Self`.
    fn from_value(value: Value) -> Result<Self, ConnectorError>;
}

/// Converts a struct into named statement parameters.
///
/// Automatically implemented by `#[derive(ToParameters)]`. Use with
/// `Statement::params_from` to bind all struct fields in a single call.
///
/// # Example
///
/// ```rust,ignore
/// #[derive(ToParameters)]
/// struct CreateUser {
///     name: String,
///     age: i64,
/// }
///
/// let statement = Statement::new("CREATE (u:User {name: $name, age: $age})")
///     .params_from(CreateUser { name: "Alice".into(), age: 30 })?;
/// ```
pub trait ToParameters {
    /// Convert `self` into a map of parameter name → value.
    fn to_parameters(self) -> Result<Parameters, ConnectorError>;
}

impl ToParameters for Parameters {
    fn to_parameters(self) -> Result<Parameters, ConnectorError> {
        Ok(self)
    }
}

impl<K: Into<String>, V: Into<Value>> ToParameters for Vec<(K, V)> {
    fn to_parameters(self) -> Result<Parameters, ConnectorError> {
        Ok(self.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}
