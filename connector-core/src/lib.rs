//! Transport-free building blocks for the Neo4j transactional HTTP connector:
//! statement records, batch partitioning, the response wire model with its
//! row reshaping, the error type and typed value conversions.
//!
//! This crate is not meant to be used directly, use the
//! `neo4j_connector` facade crate instead, which re-exports everything you need.

pub mod traits;
pub mod error;

pub mod batch;
pub mod response;
pub mod row;
pub mod statement;
pub mod value;

pub use error::{ConnectorError, Result, ServerError};
pub use response::{RawResult, RawRow, TransactionResponse};
pub use row::Row;
pub use statement::{Parameters, Statement, TransactionRequest};
pub use traits::{FromRow, FromValue, ToParameters};
pub use value::{Point2D, Point3D};

// Used by `#[derive(ToParameters)]` expansions.
#[doc(hidden)]
pub use serde_json;
