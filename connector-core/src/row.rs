//! Row-oriented view of a statement result.
//!
//! Derive-macro generated code reads columns only through [`get_value`], so
//! the row representation stays private to this module.

use std::ops::Index;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{ConnectorError, Result};
use crate::traits::FromValue;

/// One result row: column name → value, in column order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Row {
    values: Map<String, Value>,
}

impl Row {
    pub(crate) fn from_map(values: Map<String, Value>) -> Self {
        Self { values }
    }

    /// Value of a column, `None` if the row has no such column.
    pub fn get(&self, column: &str) -> Option<&Value> {
        self.values.get(column)
    }

    /// Convert the value of a column into `T`.
    ///
    /// ```rust
    /// # use connector_core::Row;
    /// # let row: Row = serde_json::from_value(serde_json::json!({"node_count": 3})).unwrap();
    /// let count: i64 = row.get_as("node_count").unwrap();
    /// assert_eq!(count, 3);
    /// ```
    pub fn get_as<T: FromValue>(&self, column: &str) -> Result<T> {
        let value = self
            .values
            .get(column)
            .cloned()
            .ok_or_else(|| ConnectorError::missing_field(column, "Row"))?;
        T::from_value(value).map_err(|e| e.with_context(format!("column '{column}'")))
    }

    /// Column names in result order.
    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn into_map(self) -> Map<String, Value> {
        self.values
    }
}

impl Index<&str> for Row {
    type Output = Value;

    /// Missing columns index to `Value::Null`, like `serde_json::Value`.
    fn index(&self, column: &str) -> &Value {
        static NULL: Value = Value::Null;
        self.values.get(column).unwrap_or(&NULL)
    }
}

impl From<Row> for Map<String, Value> {
    fn from(row: Row) -> Self {
        row.values
    }
}

/// Read a value from a [`Row`] by column name.
///
/// Returns `None` if the column does not exist in the row.
pub fn get_value(row: &Row, key: &str) -> Option<Value> {
    row.get(key).cloned()
}

/// Check whether a column exists in the row.
pub fn has_key(row: &Row, key: &str) -> bool {
    row.get(key).is_some()
}
