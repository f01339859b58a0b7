#![doc = r#"
Batch-friendly connector for the Neo4j transactional HTTP endpoint.

Statements are posted to the "begin and commit a transaction in one
request" resource (`/db/data/transaction/commit`). The server's columnar
`columns` + `data` answer is reshaped into one [`Row`] (column name →
value) per data row, and a response that lists errors, which the server
sends with HTTP 200, is turned into a [`ConnectorError::Server`] carrying
every `(code, message)` pair.

# Quick start

```rust,no_run
use neo4j_connector::prelude::*;

# fn example() -> Result<(), ConnectorError> {
// default connector: http://localhost:7474, neo4j/neo4j
let connector = Connector::new(ConnectorConfig::default())?;

// retrieve all nodes' properties
let all_nodes: Vec<serde_json::Value> = connector
    .run("MATCH (n) RETURN n", None)?
    .into_iter()
    .map(|row| row["n"].clone())
    .collect();

// parametrized statement
let rows = connector.run_statement(
    Statement::new("MATCH (n:node {uuid: $uuid}) RETURN n").param("uuid", "123abc"),
)?;
# Ok(())
# }
```

## Many statements per request

```rust,no_run
use neo4j_connector::prelude::*;

# fn example(connector: &Connector) -> Result<(), ConnectorError> {
let statements: Vec<Statement> = ["en", "nl"]
    .iter()
    .map(|lang| Statement::new("MATCH (language {name: $name})-->(word:word) RETURN word").param("name", *lang))
    .collect();

// one request for everything...
let all = connector.run_multiple(&statements, None)?;
// ...or at most one statement per request; same result shape
let batched = connector.run_multiple(&statements, Some(1))?;
assert_eq!(all.len(), batched.len());

for (statement, rows) in statements.iter().zip(&all) {
    for row in rows {
        println!("{}: {}", statement.parameters().unwrap()["name"], row["word"]);
    }
}
# Ok(())
# }
```

## Typed rows

```rust,no_run
use neo4j_connector::prelude::*;

#[derive(FromRow)]
struct WordRow {
    lemma: String,
    frequency: Option<i64>,
}

# fn example(connector: &Connector) -> Result<(), ConnectorError> {
let lang = "en";
let words: Vec<WordRow> = connector.fetch_all(statement! {
    MATCH (l:language {name: $lang})-->(w:word)
    RETURN w.lemma AS lemma, w.frequency AS frequency
})?;
# Ok(())
# }
```

# Error handling

```rust,no_run
use neo4j_connector::prelude::*;

# fn example(connector: &Connector) {
match connector.run("MATCH (n RETURN n", None) {
    Ok(rows) => println!("{} row(s)", rows.len()),
    Err(ConnectorError::Server { errors }) => {
        for e in &errors {
            eprintln!("{}\n{}", e.code, e.message);
        }
    }
    Err(other) => eprintln!("{other}"),
}
# }
```

With `verbose_errors` enabled the connector also logs each pair at
`error` level through the [`log`] facade before returning.
"#]

pub mod config;
pub mod connector;
pub mod prelude;
pub mod runs;
pub mod transport;

extern crate self as neo4j_connector;

pub use connector_core as core;
// Path the derive and statement macros expand to.
#[doc(hidden)]
pub use connector_core as __core;
pub use connector_macros::{cypher, statement, FromRow, ToParameters};

pub use connector_core::{
    ConnectorError, FromValue, Parameters, RawResult, RawRow, Result, Row, ServerError, Statement,
    TransactionResponse,
};
pub use config::{ConnectorConfig, Credentials};
pub use connector::Connector;
pub use runs::BatchRuns;
pub use transport::{HttpTransport, Transport};
