use connector_core::statement::{Parameters, Statement, TransactionRequest};
use connector_core::ToParameters;
use serde_json::{json, Value};

fn wire(statement: &Statement) -> serde_json::Map<String, Value> {
    match serde_json::to_value(statement).unwrap() {
        Value::Object(map) => map,
        other => panic!("expected object, got: {other}"),
    }
}

#[test]
fn test_cypher_no_params() {
    let statement = Statement::new("cypher");
    let record = wire(&statement);

    assert_eq!(record.len(), 1);
    assert_eq!(record["statement"], "cypher");
    assert!(statement.parameters().is_none());
}

#[test]
fn test_cypher_with_none_params() {
    let record = wire(&Statement::with_parameters("cypher", None));
    assert_eq!(record.len(), 1);
    assert_eq!(record["statement"], "cypher");
}

#[test]
fn test_cypher_with_empty_params_omits_field() {
    let record = wire(&Statement::with_parameters("cypher", Some(Parameters::new())));
    assert_eq!(record.len(), 1);
    assert!(!record.contains_key("parameters"));
}

#[test]
fn test_cypher_with_params() {
    let mut params = Parameters::new();
    params.insert("key".into(), json!("value"));
    params.insert("nested".into(), json!({"list": [1, 2.5, null], "flag": true}));

    let statement = Statement::with_parameters("cypher", Some(params.clone()));
    let record = wire(&statement);

    assert_eq!(record.len(), 2);
    assert_eq!(record["statement"], "cypher");
    assert_eq!(record["parameters"], Value::Object(params.clone()));
    assert_eq!(statement.parameters(), Some(&params));
}

#[test]
fn test_empty_cypher_is_accepted() {
    let record = wire(&Statement::new(""));
    assert_eq!(record["statement"], "");
}

#[test]
fn test_param_builder() {
    let statement = Statement::new("MATCH (n:node {uuid: $uuid}) RETURN n")
        .param("uuid", "123abc")
        .param("limit", 10);

    assert_eq!(statement.cypher(), "MATCH (n:node {uuid: $uuid}) RETURN n");
    assert_eq!(
        serde_json::to_value(&statement).unwrap(),
        json!({
            "statement": "MATCH (n:node {uuid: $uuid}) RETURN n",
            "parameters": {"uuid": "123abc", "limit": 10}
        })
    );
}

#[test]
fn test_params_from_pairs() {
    let statement = Statement::new("RETURN $a, $b")
        .params_from(vec![("a", json!(1)), ("b", json!("two"))])
        .unwrap();
    let params = statement.parameters().unwrap();
    assert_eq!(params["a"], 1);
    assert_eq!(params["b"], "two");
}

#[test]
fn test_parameter_map_keeps_insertion_order() {
    let params = vec![("z", 1), ("a", 2), ("m", 3)].to_parameters().unwrap();
    let keys: Vec<&str> = params.keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["z", "a", "m"]);
}

#[test]
fn test_transaction_request_body() {
    let statements = vec![Statement::new("cypher-1"), Statement::new("cypher-2").param("k", "v")];
    let body = TransactionRequest::new(&statements).to_value().unwrap();
    assert_eq!(
        body,
        json!({
            "statements": [
                {"statement": "cypher-1"},
                {"statement": "cypher-2", "parameters": {"k": "v"}}
            ]
        })
    );
}
