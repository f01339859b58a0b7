//! Batch-at-a-time execution of a statement list.

use connector_core::batch::Batches;
use connector_core::error::{ConnectorError, Result};
use connector_core::row::Row;
use connector_core::statement::Statement;
use log::debug;

use crate::connector::Connector;
use crate::transport::Transport;

/// Iterator over the per-statement rows of each batch.
///
/// Created by [`Connector::run_batches`]. Each call to `next()` sends
/// exactly one request for the next batch and blocks until it is answered;
/// nothing is buffered for batches that have not been sent yet.
///
/// # Example
///
/// ```rust,no_run
/// # use neo4j_connector::{Connector, ConnectorConfig, Statement};
/// # fn example(connector: &Connector, statements: &[Statement]) -> Result<(), neo4j_connector::ConnectorError> {
/// for batch in connector.run_batches(statements, Some(500))? {
///     let per_statement = batch?;
///     println!("{} statement(s) committed", per_statement.len());
/// }
/// # Ok(())
/// # }
/// ```
pub struct BatchRuns<'a, T> {
    connector: &'a Connector<T>,
    batches: Batches<'a, Statement>,
    index: usize,
}

impl<'a, T: Transport> BatchRuns<'a, T> {
    pub(crate) fn new(connector: &'a Connector<T>, batches: Batches<'a, Statement>) -> Self {
        Self {
            connector,
            batches,
            index: 0,
        }
    }

    /// Number of batches not yet sent.
    pub fn remaining(&self) -> usize {
        self.batches.len()
    }

    fn execute(&self, batch: &[Statement]) -> Result<Vec<Vec<Row>>> {
        debug!(
            "[CONNECTOR_BATCH] Sending batch #{} ({} statement(s))",
            self.index,
            batch.len()
        );
        let rows = self.connector.post(batch)?.into_rows()?;
        if rows.len() != batch.len() {
            return Err(ConnectorError::malformed(format!(
                "batch #{} has {} statement(s) but {} result(s)",
                self.index,
                batch.len(),
                rows.len()
            )));
        }
        Ok(rows)
    }
}

impl<T: Transport> Iterator for BatchRuns<'_, T> {
    type Item = Result<Vec<Vec<Row>>>;

    fn next(&mut self) -> Option<Self::Item> {
        let batch = self.batches.next()?;
        let out = self.execute(batch);
        self.index += 1;
        Some(out)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.batches.size_hint()
    }
}
