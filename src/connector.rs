//! The caller-facing connector: `run`, `run_multiple` and `post`.

use std::time::Instant;

use connector_core::batch;
use connector_core::error::{ConnectorError, Result, ServerError};
use connector_core::response::TransactionResponse;
use connector_core::row::Row;
use connector_core::statement::{Parameters, Statement, TransactionRequest};
use connector_core::traits::FromRow;
use log::{debug, error, warn};

use crate::config::ConnectorConfig;
use crate::runs::BatchRuns;
use crate::transport::{HttpTransport, Transport};

/// Executes Cypher statements against the transactional HTTP endpoint.
///
/// Every call is one or more independent "begin and commit" requests; the
/// connector holds no connection or other per-call state and needs no
/// closing. It can be shared read-only between threads.
///
/// # Examples
///
/// ```rust,no_run
/// # use neo4j_connector::{Connector, ConnectorConfig, Statement};
/// # fn example() -> Result<(), neo4j_connector::ConnectorError> {
/// let connector = Connector::new(ConnectorConfig::new("http://localhost:7474", ("neo4j", "secret")))?;
///
/// // single row result
/// let rows = connector.run("MATCH () RETURN COUNT(*) AS node_count", None)?;
/// let node_count: i64 = rows[0].get_as("node_count")?;
///
/// // many statements, at most 10 000 per request
/// let statements: Vec<Statement> = (0..1_000_000)
///     .map(|uuid| Statement::new("MATCH (n:node {uuid: $uuid}) RETURN n").param("uuid", uuid))
///     .collect();
/// for rows in connector.run_multiple(&statements, Some(10_000))? {
///     for row in rows {
///         println!("{}", row["n"]);
///     }
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Connector<T = HttpTransport> {
    config: ConnectorConfig,
    endpoint: String,
    transport: T,
}

impl Connector<HttpTransport> {
    /// Create a connector talking HTTP to `config.endpoint()`.
    pub fn new(config: ConnectorConfig) -> Result<Self> {
        let transport = HttpTransport::new(&config)?;
        Ok(Self::with_transport(config, transport))
    }
}

impl<T: Transport> Connector<T> {
    /// Create a connector with a custom [`Transport`].
    pub fn with_transport(config: ConnectorConfig, transport: T) -> Self {
        let endpoint = config.endpoint();
        Self {
            config,
            endpoint,
            transport,
        }
    }

    pub fn config(&self) -> &ConnectorConfig {
        &self.config
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// The full URL every request is posted to.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Run one statement in its own transaction and return its rows.
    ///
    /// `parameters` of `None` or an empty map are left off the wire.
    pub fn run(&self, cypher: &str, parameters: Option<Parameters>) -> Result<Vec<Row>> {
        self.run_statement(Statement::with_parameters(cypher, parameters))
    }

    /// Same as [`run`](Self::run) for a prebuilt [`Statement`].
    pub fn run_statement(&self, statement: Statement) -> Result<Vec<Row>> {
        let response = self.post(std::slice::from_ref(&statement))?;
        let mut per_statement = response.into_rows()?;
        if per_statement.len() != 1 {
            return Err(ConnectorError::malformed(format!(
                "expected 1 result for 1 statement, got {}",
                per_statement.len()
            )));
        }
        Ok(per_statement.remove(0))
    }

    /// Run many statements, `batch_size` per request (all in one request
    /// when `None`), and return their rows in statement order.
    ///
    /// Batches are sent one after another. A failing batch stops the run;
    /// batches committed before it stay committed.
    pub fn run_multiple(&self, statements: &[Statement], batch_size: Option<usize>) -> Result<Vec<Vec<Row>>> {
        let mut out = Vec::with_capacity(statements.len());
        for batch in self.run_batches(statements, batch_size)? {
            out.extend(batch?);
        }
        Ok(out)
    }

    /// Lazy form of [`run_multiple`](Self::run_multiple): each call to
    /// `next()` sends one batch and yields its per-statement rows.
    ///
    /// A zero `batch_size` fails here, before any request is sent.
    pub fn run_batches<'a>(&'a self, statements: &'a [Statement], batch_size: Option<usize>) -> Result<BatchRuns<'a, T>> {
        let batches = batch::batches(statements, batch_size)?;
        Ok(BatchRuns::new(self, batches))
    }

    /// Send `statements` in a single request and return the decoded response.
    ///
    /// Unlike [`run`](Self::run) the result is not reshaped: per-row `meta`,
    /// non-`row` data contents and top-level members such as `notifications`
    /// are all still available. Fails with
    /// [`ConnectorError::Server`] when the response lists any errors.
    pub fn post(&self, statements: &[Statement]) -> Result<TransactionResponse> {
        let start = Instant::now();
        debug!(
            "[CONNECTOR_QUERY] POST {} statement(s) to {}",
            statements.len(),
            self.endpoint
        );

        let body = TransactionRequest::new(statements).to_value()?;
        let raw = self.transport.post(&self.endpoint, &self.config.credentials, &body)?;
        let response = TransactionResponse::from_value(raw)?;

        debug!(
            "[CONNECTOR_QUERY] Done: results={} errors={} total_ms={}",
            response.results.len(),
            response.errors.len(),
            start.elapsed().as_millis()
        );

        if !response.errors.is_empty() {
            self.report(&response.errors);
        }
        response.check_errors()
    }

    fn report(&self, errors: &[ServerError]) {
        warn!("[CONNECTOR_QUERY] Server reported {} error(s)", errors.len());
        for e in errors {
            if self.config.verbose_errors {
                error!("{}\n{}", e.code, e.message);
            } else {
                debug!("[CONNECTOR_QUERY] {}: {}", e.code, e.message);
            }
        }
    }

    /// Run a statement and map every row to `R`.
    pub fn fetch_all<R: FromRow>(&self, statement: Statement) -> Result<Vec<R>> {
        self.run_statement(statement)?.iter().map(R::from_row).collect()
    }

    /// Run a statement and map its first row to `R`.
    ///
    /// Returns [`ConnectorError::MissingField`] if the result is empty.
    pub fn fetch_one<R: FromRow>(&self, statement: Statement) -> Result<R> {
        self.fetch_optional(statement)?
            .ok_or_else(|| ConnectorError::missing_field("row", "fetch_one"))
    }

    /// Run a statement and map its first row to `R`, if there is one.
    pub fn fetch_optional<R: FromRow>(&self, statement: Statement) -> Result<Option<R>> {
        match self.run_statement(statement)?.first() {
            Some(row) => Ok(Some(R::from_row(row)?)),
            None => Ok(None),
        }
    }
}
