//! Procedural macros for the Neo4j HTTP connector.
//!
//! This crate is not meant to be used directly, use the `neo4j_connector`
//! facade crate which re-exports all macros.

extern crate proc_macro;

use proc_macro::TokenStream;

mod attrs;
mod cypher;
mod from_row;
mod normalize;
mod statement;
mod to_parameters;

/// Derive [`FromRow`](connector_core::traits::FromRow) for a struct.
///
/// Maps a result [`Row`](connector_core::row::Row) to a Rust struct. Each
/// field is read from the row by its name (the Cypher alias).
///
/// # Attributes
///
/// **Field-level:**
/// - `#[neo4j(rename = "...")]`: read a differently named column.
/// - `#[neo4j(flatten)]`: instead of reading a single column, delegates to
///   the inner type's `FromRow::from_row()` with the same row. Useful
///   for composing result structs that share columns.
/// - `#[neo4j(skip)]`: never read; filled with `Default::default()`.
///
/// # Field type behaviour
///
/// - **`Option<T>`**: missing column or `null` becomes `None`.
/// - **`T: FromValue`**: any type with a value conversion (primitives,
///   collections, chrono types, points, `serde_json::Value`).
///
/// # Example
///
/// ```rust,ignore
/// use neo4j_connector::prelude::*;
///
/// #[derive(FromRow)]
/// struct Metadata {
///     created: String,
/// }
///
/// #[derive(FromRow)]
/// struct UserRow {
///     #[neo4j(rename = "u.name")]
///     name: String,
///     score: Option<f64>,
///     #[neo4j(flatten)]
///     meta: Metadata,
/// }
/// ```
#[proc_macro_derive(FromRow, attributes(neo4j))]
pub fn from_row(input: TokenStream) -> TokenStream {
    from_row::expand(input)
}

/// Derive [`ToParameters`](connector_core::traits::ToParameters) for a struct.
///
/// Serializes each field with `serde_json` into a named statement parameter.
/// Use with `Statement::params_from` for bulk parameter binding.
///
/// # Attributes
///
/// **Field-level:**
/// - `#[neo4j(skip)]`: exclude the field from the parameter map.
/// - `#[neo4j(rename = "...")]`: override the parameter name (default: field name).
///
/// # Example
///
/// ```rust,ignore
/// use neo4j_connector::prelude::*;
///
/// #[derive(ToParameters)]
/// struct CreateUser {
///     #[neo4j(skip)]
///     internal_id: u64,
///     name: String,
///     #[neo4j(rename = "user_age")]
///     age: i64,
/// }
/// ```
#[proc_macro_derive(ToParameters, attributes(neo4j))]
pub fn to_parameters(input: TokenStream) -> TokenStream {
    to_parameters::expand(input)
}

/// Converts a Cypher token block into a `&'static str` with normalized whitespace.
///
/// The output is intentionally literal, no rewriting or validation. You can
/// paste the resulting string directly into Neo4j Browser.
///
/// # Example
///
/// ```rust,ignore
/// let q: &str = cypher! {
///     MATCH (u:User)-[:FOLLOWS]->(f:User)
///     WHERE u.name = "Alice"
///     RETURN f.name, f.id
/// };
/// ```
#[proc_macro]
pub fn cypher(input: TokenStream) -> TokenStream {
    cypher::expand(input)
}

/// Builds a [`Statement`](connector_core::statement::Statement) from a Cypher
/// block with auto-bound parameters.
///
/// Any `$ident` in the Cypher text becomes a named parameter. The Rust
/// variable `ident` must be in scope and implement `Into<serde_json::Value>`.
/// Duplicate parameters are bound only once.
///
/// # Example
///
/// ```rust,ignore
/// let name = "Alice";
/// let age: i64 = 30;
/// let statement = statement! {
///     MATCH (u:User {name: $name})
///     WHERE u.age > $age
///     RETURN u
/// };
/// // Expands to:
/// //   Statement::new("MATCH (u:User {name:$name}) WHERE u.age > $age RETURN u")
/// //       .param("name", name)
/// //       .param("age", age)
/// ```
#[proc_macro]
pub fn statement(input: TokenStream) -> TokenStream {
    statement::expand(input)
}
