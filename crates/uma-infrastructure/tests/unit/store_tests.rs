//! Tests for the in-memory stores

use std::sync::Arc;

use uma_domain::ports::{CredentialRepository, LockoutWrite, RoleRepository};
use uma_domain::{CredentialRecord, Error, LockoutState, Role};
use uma_infrastructure::{InMemoryCredentialStore, InMemoryRoleStore};

const EMAIL: &str = "clerk@example.com";

async fn seeded() -> InMemoryCredentialStore {
    let store = InMemoryCredentialStore::new();
    store
        .insert(CredentialRecord::new(EMAIL, "$argon2id$stub"))
        .await
        .unwrap();
    store
}

#[tokio::test]
async fn test_insert_and_find() {
    let store = seeded().await;

    let found = store.find_by_email(EMAIL).await.unwrap().unwrap();
    assert_eq!(found.email, EMAIL);
    assert_eq!(found.version, 0);
    assert!(store.find_by_email("other@example.com").await.unwrap().is_none());
    assert_eq!(store.len(), 1);
}

#[tokio::test]
async fn test_duplicate_insert_rejected() {
    let store = seeded().await;
    let result = store.insert(CredentialRecord::new(EMAIL, "other")).await;

    assert!(matches!(result, Err(Error::AlreadyExists { .. })));
    let kept = store.find_by_email(EMAIL).await.unwrap().unwrap();
    assert_eq!(kept.password_hash, "$argon2id$stub");
}

#[tokio::test]
async fn test_compare_and_set_applies_and_bumps_version() {
    let store = seeded().await;
    let next = LockoutState::open().after_failure(3);

    let LockoutWrite::Applied(stored) = store.compare_and_set_lockout(EMAIL, 0, next).await.unwrap()
    else {
        panic!("expected applied write");
    };
    assert_eq!(stored.lockout.failed_attempts, 1);
    assert_eq!(stored.version, 1);
}

#[tokio::test]
async fn test_compare_and_set_reports_stale_version() {
    let store = seeded().await;
    let next = LockoutState::open().after_failure(3);
    store.compare_and_set_lockout(EMAIL, 0, next).await.unwrap();

    let LockoutWrite::Stale(latest) = store.compare_and_set_lockout(EMAIL, 0, next).await.unwrap()
    else {
        panic!("expected stale write");
    };
    assert_eq!(latest.version, 1);
    assert_eq!(latest.lockout.failed_attempts, 1);
}

#[tokio::test]
async fn test_compare_and_set_unknown_record() {
    let store = InMemoryCredentialStore::new();
    let result = store
        .compare_and_set_lockout(EMAIL, 0, LockoutState::open())
        .await;
    assert!(matches!(result, Err(Error::NotFound { .. })));
}

#[tokio::test]
async fn test_password_hash_swap_is_version_checked() {
    let store = seeded().await;

    assert!(
        store
            .compare_and_set_password_hash(EMAIL, 0, "$argon2id$fresh".to_string())
            .await
            .unwrap()
    );
    assert!(
        !store
            .compare_and_set_password_hash(EMAIL, 0, "$argon2id$late".to_string())
            .await
            .unwrap()
    );

    let stored = store.find_by_email(EMAIL).await.unwrap().unwrap();
    assert_eq!(stored.password_hash, "$argon2id$fresh");
    assert_eq!(stored.version, 1);
    assert_eq!(stored.lockout, LockoutState::open());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 8)]
async fn test_concurrent_increments_are_not_lost() {
    let store = Arc::new(seeded().await);

    let tasks: Vec<_> = (0..100)
        .map(|_| {
            let store = store.clone();
            tokio::spawn(async move {
                loop {
                    let current = store.find_by_email(EMAIL).await.unwrap().unwrap();
                    let next = current.lockout.after_failure(3);
                    if let LockoutWrite::Applied(_) = store
                        .compare_and_set_lockout(EMAIL, current.version, next)
                        .await
                        .unwrap()
                    {
                        break;
                    }
                }
            })
        })
        .collect();
    for result in futures::future::join_all(tasks).await {
        result.unwrap();
    }

    let stored = store.find_by_email(EMAIL).await.unwrap().unwrap();
    assert_eq!(stored.lockout.failed_attempts, 100);
    assert!(stored.lockout.locked);
    assert_eq!(stored.version, 100);
}

#[tokio::test]
async fn test_roles_keep_assignment_order_without_duplicates() {
    let store = InMemoryRoleStore::new();
    store.assign(EMAIL, Role::StoreManager).await.unwrap();
    store.assign(EMAIL, Role::Admin).await.unwrap();
    store.assign(EMAIL, Role::StoreManager).await.unwrap();

    assert_eq!(
        store.roles_for(EMAIL).await.unwrap(),
        vec![Role::StoreManager, Role::Admin]
    );
    assert!(store.roles_for("nobody@example.com").await.unwrap().is_empty());
}
