// Only facade paths: the derives must expand without a direct
// dependency on the core crate, and the crate's one-argument `Result`
// alias in scope must not leak into the generated signatures.
use neo4j_connector::prelude::*;
use neo4j_connector::{ConnectorError, Result, Row};
use serde_json::json;

fn row(value: serde_json::Value) -> Row {
    serde_json::from_value(value).unwrap()
}

#[test]
fn test_cypher_macro() {
    let query = cypher! {
        MATCH (u:User) RETURN u
    };
    // quote! might strip some spaces
    assert!(query.contains("MATCH") && query.contains("(u:User)") && query.contains("RETURN u"));
}

// --- FromRow ---

#[derive(Debug, FromRow)]
struct UserResult {
    name: String,
    age: i64,
    nickname: Option<String>,
}

fn map_user(value: serde_json::Value) -> Result<UserResult> {
    UserResult::from_row(&row(value))
}

#[test]
fn test_from_row_basic() {
    let user = UserResult::from_row(&row(json!({"name": "Alice", "age": 30}))).unwrap();
    assert_eq!(user.name, "Alice");
    assert_eq!(user.age, 30);
    assert_eq!(user.nickname, None);

    let user = UserResult::from_row(&row(json!({"name": "Bob", "age": 41, "nickname": "bobby"}))).unwrap();
    assert_eq!(user.nickname.as_deref(), Some("bobby"));
}

#[test]
fn test_from_row_missing_field() {
    let err = map_user(json!({"name": "Alice"})).unwrap_err();
    match &err {
        ConnectorError::MissingField { field, struct_name } => {
            assert_eq!(field, "age");
            assert_eq!(struct_name, "UserResult");
        }
        other => panic!("expected MissingField, got: {other}"),
    }
}

#[test]
fn test_from_row_type_mismatch_has_context() {
    let err = UserResult::from_row(&row(json!({"name": "Alice", "age": "thirty"}))).unwrap_err();
    let msg = err.to_string();
    assert!(msg.starts_with("UserResult::age"), "got: {msg}");
    assert!(msg.contains("expected Integer, got String"), "got: {msg}");
}

#[derive(FromRow)]
struct Renamed {
    #[neo4j(rename = "node_count")]
    count: u64,
    #[neo4j(skip)]
    cached: Vec<String>,
}

#[test]
fn test_from_row_rename_and_skip() {
    let r = Renamed::from_row(&row(json!({"node_count": 12, "cached": "ignored"}))).unwrap();
    assert_eq!(r.count, 12);
    assert!(r.cached.is_empty());
}

// --- Flatten ---

#[derive(FromRow)]
struct InnerResult {
    name: String,
}

#[derive(FromRow)]
struct OuterResult {
    age: i64,
    #[neo4j(flatten)]
    inner: InnerResult,
}

#[test]
fn test_flatten_from_row() {
    let outer = OuterResult::from_row(&row(json!({"name": "Alice", "age": 30}))).unwrap();
    assert_eq!(outer.age, 30);
    assert_eq!(outer.inner.name, "Alice");
}

// --- ToParameters ---

#[derive(ToParameters)]
struct CreateUser {
    #[neo4j(skip)]
    #[allow(dead_code)]
    internal_id: i64,
    name: String,
    age: i64,
    tags: Vec<String>,
}

#[test]
fn test_to_parameters_basic() {
    let params = CreateUser {
        internal_id: 999,
        name: "Alice".into(),
        age: 30,
        tags: vec!["a".into(), "b".into()],
    };
    let map = params.to_parameters().unwrap();
    assert!(!map.contains_key("internal_id"));
    assert_eq!(map["name"], "Alice");
    assert_eq!(map["age"], 30);
    assert_eq!(map["tags"], json!(["a", "b"]));
    let keys: Vec<&str> = map.keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["name", "age", "tags"]);
}

#[derive(ToParameters)]
struct UpdateUser {
    #[neo4j(rename = "user_name")]
    name: String,
    email: Option<String>,
}

#[test]
fn test_to_parameters_rename() {
    let map = UpdateUser { name: "Bob".into(), email: None }.to_parameters().unwrap();
    assert!(!map.contains_key("name"));
    assert_eq!(map["user_name"], "Bob");
    assert!(map["email"].is_null());
}

// --- statement! ---

#[test]
fn test_statement_macro_binds_params_once() {
    let name = "Alice";
    let age: i64 = 30;
    let s = statement! {
        MATCH (u:User {name: $name}) WHERE u.name = $name AND u.age > $age RETURN u
    };
    let params = s.parameters().unwrap();
    assert_eq!(params.len(), 2);
    assert_eq!(params["name"], "Alice");
    assert_eq!(params["age"], 30);
    assert!(s.cypher().contains("$name"));
    assert!(!s.cypher().contains("$ name"));
}

#[test]
fn test_statement_macro_without_params() {
    let s = statement! { MATCH () RETURN COUNT(*) AS node_count };
    assert!(s.parameters().is_none());
    assert!(s.cypher().starts_with("MATCH"));
}
