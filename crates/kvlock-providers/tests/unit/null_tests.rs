//! Tests for the null store gateway

use std::time::Duration;

use kvlock_providers::StoreGateway;
use kvlock_providers::store::NullStoreGateway;

#[tokio::test]
async fn test_null_store_never_writes() {
    let store = NullStoreGateway::new();

    assert!(!store.set_if_absent("k", "a").await.unwrap());
    assert!(
        !store
            .set_if_absent_with_ttl("k", "a", Duration::from_secs(1))
            .await
            .unwrap()
    );
    assert_eq!(store.get_and_set("k", "a").await.unwrap(), None);
    assert_eq!(store.get("k").await.unwrap(), None);
}

#[tokio::test]
async fn test_null_store_never_deletes() {
    let store = NullStoreGateway::new();

    assert!(!store.compare_and_delete("k", "a").await.unwrap());
    assert!(!store.delete("k").await.unwrap());
}

#[test]
fn test_provider_name() {
    assert_eq!(NullStoreGateway::new().provider_name(), "null");
}
