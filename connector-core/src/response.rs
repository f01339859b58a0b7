//! Wire model of the transactional endpoint's response, and reshaping of its
//! columnar results into [`Row`]s.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{ConnectorError, Result, ServerError};
use crate::row::Row;

/// Full response body of one transactional request.
///
/// The server answers HTTP 200 even when statements failed; failure is
/// signalled by a non-empty `errors` list. Members this type does not name
/// (`notifications`, `commit`, `transaction`, ...) are kept in `extra`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TransactionResponse {
    #[serde(default)]
    pub results: Vec<RawResult>,
    #[serde(default)]
    pub errors: Vec<ServerError>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Per-statement result in columnar form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawResult {
    #[serde(default)]
    pub columns: Vec<String>,
    #[serde(default)]
    pub data: Vec<RawRow>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// One data row: values aligned positionally with [`RawResult::columns`],
/// plus the optional per-value metadata the server attaches.
///
/// `row` is absent when the request asked only for other result data
/// contents (such as `graph`); those land in `extra`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawRow {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub row: Option<Vec<Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<Vec<Value>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl TransactionResponse {
    /// Decode a response body.
    ///
    /// A body that is valid JSON but not shaped like a transactional response
    /// is reported as [`MalformedResponse`](ConnectorError::MalformedResponse).
    pub fn from_value(body: Value) -> Result<Self> {
        serde_json::from_value(body).map_err(|e| ConnectorError::malformed(e.to_string()))
    }

    /// Fail with [`ConnectorError::Server`] if the server reported any errors.
    ///
    /// Returns the response untouched otherwise. A batch with errors is
    /// treated as failed as a whole: results of statements that did succeed
    /// are dropped along with it.
    pub fn check_errors(self) -> Result<Self> {
        if self.errors.is_empty() {
            Ok(self)
        } else {
            Err(ConnectorError::Server {
                errors: self.errors,
            })
        }
    }

    /// Reshape every result into rows, one `Vec<Row>` per statement.
    ///
    /// Does not look at `errors`; call [`check_errors`](Self::check_errors) first.
    pub fn into_rows(self) -> Result<Vec<Vec<Row>>> {
        self.results
            .into_iter()
            .enumerate()
            .map(|(idx, result)| {
                result
                    .into_rows()
                    .map_err(|e| e.with_context(format!("result #{idx}")))
            })
            .collect()
    }
}

impl RawResult {
    /// Zip the column names with each data row.
    ///
    /// ```rust
    /// # use connector_core::response::RawResult;
    /// # use serde_json::json;
    /// let raw: RawResult = serde_json::from_value(json!({
    ///     "columns": ["n"],
    ///     "data": [{"row": ["x"]}, {"row": ["y"]}]
    /// })).unwrap();
    /// let rows = raw.into_rows().unwrap();
    /// assert_eq!(rows[0]["n"], "x");
    /// assert_eq!(rows[1]["n"], "y");
    /// ```
    pub fn into_rows(self) -> Result<Vec<Row>> {
        let RawResult { columns, data, .. } = self;
        check_unique(&columns)?;

        data.into_iter()
            .enumerate()
            .map(|(idx, datum)| {
                let Some(row) = datum.row else {
                    return Err(ConnectorError::malformed(format!("row {idx} has no `row` values")));
                };
                if row.len() != columns.len() {
                    return Err(ConnectorError::malformed(format!(
                        "row {idx} has {} value(s) for {} column(s)",
                        row.len(),
                        columns.len()
                    )));
                }
                let values: Map<String, Value> = columns.iter().cloned().zip(row).collect();
                Ok(Row::from_map(values))
            })
            .collect()
    }
}

// Duplicate names would collapse into one key and break `len(row) == len(columns)`.
fn check_unique(columns: &[String]) -> Result<()> {
    for (i, name) in columns.iter().enumerate() {
        if columns[..i].contains(name) {
            return Err(ConnectorError::malformed(format!(
                "duplicate column name '{name}'"
            )));
        }
    }
    Ok(())
}
