use neo4j_connector::{cypher, statement};

#[test]
fn test_statement_with_params() {
    let name = "Alice";
    let age: i64 = 30;
    let s = statement! {
        MATCH (u:User {name: $name, age: $age}) RETURN u
    };
    let params = s.parameters().unwrap();
    assert_eq!(params["name"], "Alice");
    assert_eq!(params["age"], 30);
}

#[test]
fn test_statement_no_params() {
    let s = statement! {
        MATCH (u:User) RETURN u
    };
    assert!(s.parameters().is_none());
    assert_eq!(
        serde_json::to_value(&s).unwrap(),
        serde_json::json!({"statement": s.cypher()})
    );
}

#[test]
fn test_statement_dedup_params() {
    let name = "Alice";
    // $name appears twice but should only generate one .param() call
    let s = statement! {
        MATCH (u:User {name: $name}) WHERE u.name = $name RETURN u
    };
    assert_eq!(s.parameters().unwrap().len(), 1);
}

#[test]
fn test_cypher_literal_matches_statement_text() {
    let text: &str = cypher! { MATCH (u:User) RETURN u.name AS name };
    let s = statement! { MATCH (u:User) RETURN u.name AS name };
    assert_eq!(text, s.cypher());
    assert!(text.contains("u.name"));
}
