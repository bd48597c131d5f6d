#![cfg(feature = "sqlite")]

use std::sync::Arc;

use sql_shorthand::prelude::*;

#[tokio::test]
async fn same_descriptor_shares_one_instance() -> Result<(), HelperError> {
    let dir = tempfile::tempdir().expect("temp dir");
    let descriptor = format!("sqlite://{}", dir.path().join("app.db").display());

    let registry = HelperRegistry::new();
    assert!(registry.is_empty().await);

    let first = registry.get(&descriptor).await?;
    let second = registry.get(&descriptor).await?;
    assert!(Arc::ptr_eq(&first, &second));
    assert_eq!(registry.len().await, 1);

    // State set through one handle is visible through the other
    {
        let mut db = first.lock().await;
        db.execute_batch("CREATE TABLE t (id INTEGER PRIMARY KEY);")
            .await?;
        let affected = db
            .perform(
                "INSERT INTO t (id) VALUES (:id)",
                &ParamMap::from([("id", SqlValue::Int(5))]),
                &TypeOverrides::new(),
            )
            .await;
        assert_eq!(affected, 1);
    }
    {
        let mut db = second.lock().await;
        let mut cursor = db
            .select("t", &ParamMap::new(), &TypeOverrides::new(), "")
            .await?;
        assert_eq!(cursor.rows(), 1);
        let row = cursor.fetch(None).expect("row");
        assert_eq!(row.get("id"), Some(&SqlValue::Int(5)));
    }

    Ok(())
}

#[tokio::test]
async fn distinct_descriptors_get_distinct_instances() -> Result<(), HelperError> {
    let dir = tempfile::tempdir().expect("temp dir");
    let a = format!("sqlite://{}", dir.path().join("a.db").display());
    let b = format!("sqlite://{}", dir.path().join("b.db").display());

    let registry = HelperRegistry::new();
    let first = registry.get(&a).await?;
    let second = registry.get(&b).await?;
    assert!(!Arc::ptr_eq(&first, &second));
    assert_eq!(registry.len().await, 2);

    Ok(())
}

#[tokio::test]
async fn failed_connects_cache_nothing() {
    let registry = HelperRegistry::new();
    let result = registry.get("oracle://nowhere/db").await;
    assert!(matches!(result, Err(HelperError::ConfigError(_))));
    assert!(registry.is_empty().await);
}
