//! Convenience re-exports for common connector usage.
//!
//! ```rust
//! use neo4j_connector::prelude::*;
//! ```
//!
//! This imports the derive macros (`FromRow`, `ToParameters`), both
//! function-like macros (`cypher!`, `statement!`), the core traits
//! (`FromRowTrait`, `FromValue`, `ToParametersTrait`), the connector and its
//! configuration, the statement and row types, and the error type.

pub use crate::{cypher, statement, FromRow, ToParameters};
pub use connector_core::traits::{FromRow as FromRowTrait, FromValue, ToParameters as ToParametersTrait};
pub use connector_core::{ConnectorError, Parameters, Point2D, Point3D, Row, ServerError, Statement};
pub use crate::config::{ConnectorConfig, Credentials};
pub use crate::connector::Connector;
