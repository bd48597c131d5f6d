use sql_shorthand::prelude::*;
use sql_shorthand::statement::{
    delete_statement, insert_statement, is_sql_statement, select_statement, update_statement,
};

fn bob() -> ParamMap {
    ParamMap::from([
        ("id", SqlValue::Int(1)),
        ("name", SqlValue::Text("Bob".into())),
    ])
}

#[test]
fn select_with_and_without_where() {
    assert_eq!(select_statement("users", ""), "SELECT * FROM users");
    assert_eq!(
        select_statement("users", "id = :id"),
        "SELECT * FROM users WHERE id = :id"
    );
}

#[test]
fn insert_fields_follow_map_order() {
    let sql = insert_statement("users", &bob(), "", &[], SynthesisPolicy::FailFast).unwrap();
    assert_eq!(sql, "INSERT INTO users (id,name) VALUES (:id,:name)");
}

#[test]
fn insert_exclude_drops_field_but_not_binding() {
    let sql = insert_statement("users", &bob(), "", &["id"], SynthesisPolicy::FailFast).unwrap();
    assert_eq!(sql, "INSERT INTO users (name) VALUES (:name)");
    // The full map still goes to the binder; excluded keys resolve in WHERE text
    let sql = insert_statement(
        "users",
        &bob(),
        "id = :id",
        &["id"],
        SynthesisPolicy::FailFast,
    )
    .unwrap();
    assert_eq!(sql, "INSERT INTO users (name) VALUES (:name) WHERE id = :id");
}

#[test]
fn update_assignments_and_where() {
    let params = ParamMap::from([("name", SqlValue::Text("Bob".into()))]);
    let sql = update_statement("users", &params, "id = :id", &[], SynthesisPolicy::FailFast).unwrap();
    assert_eq!(sql, "UPDATE users SET name = :name WHERE id = :id");

    let sql = update_statement("users", &bob(), "id = :id", &["id"], SynthesisPolicy::FailFast)
        .unwrap();
    assert_eq!(sql, "UPDATE users SET name = :name WHERE id = :id");
}

#[test]
fn delete_ignores_params_in_the_text() {
    let sql = delete_statement("users", &bob(), "id = :id", SynthesisPolicy::FailFast).unwrap();
    assert_eq!(sql, "DELETE FROM users WHERE id = :id");
    let sql = delete_statement("users", &bob(), "", SynthesisPolicy::FailFast).unwrap();
    assert_eq!(sql, "DELETE FROM users");
}

#[test]
fn fail_fast_rejects_empty_maps() {
    let empty = ParamMap::new();
    for result in [
        insert_statement("users", &empty, "", &[], SynthesisPolicy::FailFast),
        update_statement("users", &empty, "", &[], SynthesisPolicy::FailFast),
        delete_statement("users", &empty, "id = :id", SynthesisPolicy::FailFast),
    ] {
        assert!(matches!(
            result,
            Err(HelperError::MissingParameters { .. })
        ));
    }
}

#[test]
fn permissive_produces_malformed_sql_instead() {
    let empty = ParamMap::new();
    let sql = insert_statement("users", &empty, "", &[], SynthesisPolicy::Permissive).unwrap();
    assert_eq!(sql, "INSERT INTO users () VALUES ()");
    let sql = delete_statement("users", &empty, "id = :id", SynthesisPolicy::Permissive).unwrap();
    assert_eq!(sql, "DELETE FROM users WHERE id = :id");
}

#[test]
fn one_token_requests_take_the_shorthand_path() {
    assert!(!is_sql_statement("users"));
    assert!(is_sql_statement("SELECT * FROM users"));
    assert!(is_sql_statement("DELETE FROM users WHERE id = 1"));
}
