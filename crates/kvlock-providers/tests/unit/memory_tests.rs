//! Tests for the in-memory store gateway

use std::sync::Arc;
use std::time::Duration;

use kvlock_providers::StoreGateway;
use kvlock_providers::store::InMemoryStoreGateway;

const SHORT_TTL: Duration = Duration::from_millis(50);

#[tokio::test]
async fn test_set_if_absent_only_writes_once() {
    let store = InMemoryStoreGateway::new();

    assert!(store.set_if_absent("k", "a").await.unwrap());
    assert!(!store.set_if_absent("k", "b").await.unwrap());
    assert_eq!(store.get("k").await.unwrap(), Some("a".to_string()));
    assert_eq!(store.ttl("k"), None);
}

#[tokio::test]
async fn test_set_if_absent_with_ttl_applies_ttl() {
    let store = InMemoryStoreGateway::new();

    assert!(
        store
            .set_if_absent_with_ttl("k", "a", Duration::from_secs(5))
            .await
            .unwrap()
    );
    let ttl = store.ttl("k").expect("key should carry a ttl");
    assert!(ttl <= Duration::from_secs(5));
    assert!(ttl > Duration::from_secs(4));
}

#[tokio::test]
async fn test_set_if_absent_with_ttl_keeps_existing_expiry() {
    let store = InMemoryStoreGateway::new();

    store
        .set_if_absent_with_ttl("k", "a", Duration::from_secs(1))
        .await
        .unwrap();
    let written = store
        .set_if_absent_with_ttl("k", "b", Duration::from_secs(60))
        .await
        .unwrap();

    assert!(!written);
    assert!(store.ttl("k").unwrap() <= Duration::from_secs(1));
    assert_eq!(store.get("k").await.unwrap(), Some("a".to_string()));
}

#[tokio::test]
async fn test_set_if_absent_with_ttl_repairs_missing_expiry() {
    let store = InMemoryStoreGateway::new();

    store.set_if_absent("k", "a").await.unwrap();
    assert_eq!(store.ttl("k"), None);

    let written = store
        .set_if_absent_with_ttl("k", "b", Duration::from_secs(3))
        .await
        .unwrap();

    assert!(!written);
    assert!(store.ttl("k").is_some());
    assert_eq!(store.get("k").await.unwrap(), Some("a".to_string()));
}

#[tokio::test]
async fn test_expired_entry_reads_as_absent() {
    let store = InMemoryStoreGateway::new();

    store
        .set_if_absent_with_ttl("k", "a", SHORT_TTL)
        .await
        .unwrap();
    tokio::time::sleep(SHORT_TTL * 2).await;

    assert_eq!(store.get("k").await.unwrap(), None);
    assert!(store.is_empty());
    assert!(
        store
            .set_if_absent_with_ttl("k", "b", SHORT_TTL)
            .await
            .unwrap()
    );
}

#[tokio::test]
async fn test_get_and_set_returns_previous() {
    let store = InMemoryStoreGateway::new();

    assert_eq!(store.get_and_set("k", "a").await.unwrap(), None);
    assert_eq!(
        store.get_and_set("k", "b").await.unwrap(),
        Some("a".to_string())
    );
    assert_eq!(store.get("k").await.unwrap(), Some("b".to_string()));
}

#[tokio::test]
async fn test_get_and_set_clears_ttl() {
    let store = InMemoryStoreGateway::new();

    store
        .set_if_absent_with_ttl("k", "a", Duration::from_secs(5))
        .await
        .unwrap();
    store.get_and_set("k", "b").await.unwrap();

    assert_eq!(store.ttl("k"), None);
}

#[tokio::test]
async fn test_compare_and_delete_requires_match() {
    let store = InMemoryStoreGateway::new();
    store.set_if_absent("k", "mine").await.unwrap();

    assert!(!store.compare_and_delete("k", "theirs").await.unwrap());
    assert_eq!(store.get("k").await.unwrap(), Some("mine".to_string()));

    assert!(store.compare_and_delete("k", "mine").await.unwrap());
    assert_eq!(store.get("k").await.unwrap(), None);
    assert!(!store.compare_and_delete("k", "mine").await.unwrap());
}

#[tokio::test]
async fn test_delete_reports_existence() {
    let store = InMemoryStoreGateway::new();

    assert!(!store.delete("k").await.unwrap());
    store.set_if_absent("k", "a").await.unwrap();
    assert!(store.delete("k").await.unwrap());
    assert_eq!(store.len(), 0);
}

#[tokio::test]
async fn test_concurrent_set_if_absent_has_single_winner() {
    let store = Arc::new(InMemoryStoreGateway::new());

    let handles: Vec<_> = (0..32)
        .map(|i| {
            let store = Arc::clone(&store);
            tokio::spawn(async move {
                store
                    .set_if_absent_with_ttl("k", &format!("v{i}"), Duration::from_secs(5))
                    .await
                    .unwrap()
            })
        })
        .collect();

    let mut winners = 0;
    for handle in handles {
        if handle.await.unwrap() {
            winners += 1;
        }
    }
    assert_eq!(winners, 1);
}

#[test]
fn test_provider_name() {
    assert_eq!(InMemoryStoreGateway::new().provider_name(), "memory");
}
