//! Tests for the authenticator

use uma_domain::ports::TokenCodec;
use uma_domain::{AuthFailure, Error, LockoutState, Role};

use crate::test_utils::{Fixture, NOW, PlainCodec, TTL, record};

const EMAIL: &str = "pharmacist@example.com";
const PASSWORD: &str = "Secret123";

fn failure(result: uma_domain::Result<uma_domain::IssuedToken>) -> AuthFailure {
    match result {
        Err(Error::Auth(kind)) => kind,
        other => panic!("expected auth failure, got {other:?}"),
    }
}

#[tokio::test]
async fn test_successful_login_issues_token_with_first_role() {
    let fixture = Fixture::new(
        vec![record(EMAIL, PASSWORD)],
        &[(EMAIL, Role::Pharmacist), (EMAIL, Role::Admin)],
    );

    let issued = fixture
        .authenticator
        .authenticate(EMAIL, PASSWORD)
        .await
        .unwrap();

    assert_eq!(issued.claims().sub, EMAIL);
    assert_eq!(issued.claims().role, Role::Pharmacist);
    assert_eq!(issued.claims().iat, NOW);
    assert_eq!(issued.claims().exp, NOW + TTL);
    let identity = PlainCodec.validate(issued.serialize(), NOW).unwrap();
    assert_eq!(identity.subject, EMAIL);
}

#[tokio::test]
async fn test_unknown_identity() {
    let fixture = Fixture::new(vec![], &[]);
    let kind = failure(fixture.authenticator.authenticate(EMAIL, PASSWORD).await);
    assert_eq!(kind, AuthFailure::UnknownIdentity);
    assert!(kind.is_invalid_credentials());
    assert_eq!(fixture.credentials.writes(), 0);
}

#[tokio::test]
async fn test_bad_password_counts_failure_once() {
    let fixture = Fixture::new(vec![record(EMAIL, PASSWORD)], &[(EMAIL, Role::Admin)]);

    let kind = failure(fixture.authenticator.authenticate(EMAIL, "wrong").await);

    assert_eq!(kind, AuthFailure::BadCredentials);
    assert_eq!(fixture.credentials.get(EMAIL).lockout.failed_attempts, 1);
    assert_eq!(fixture.credentials.writes(), 1);
}

#[tokio::test]
async fn test_success_resets_counter_with_single_write() {
    let mut stored = record(EMAIL, PASSWORD);
    stored.lockout = LockoutState {
        failed_attempts: 2,
        locked: false,
    };
    let fixture = Fixture::new(vec![stored], &[(EMAIL, Role::Admin)]);

    fixture
        .authenticator
        .authenticate(EMAIL, PASSWORD)
        .await
        .unwrap();

    assert_eq!(fixture.credentials.get(EMAIL).lockout, LockoutState::open());
    assert_eq!(fixture.credentials.writes(), 1);
}

#[tokio::test]
async fn test_locked_account_rejects_correct_password() {
    let fixture = Fixture::new(vec![record(EMAIL, PASSWORD)], &[(EMAIL, Role::Admin)]);

    for _ in 0..3 {
        let kind = failure(fixture.authenticator.authenticate(EMAIL, "wrong").await);
        assert_eq!(kind, AuthFailure::BadCredentials);
    }
    assert_eq!(
        fixture.credentials.get(EMAIL).lockout,
        LockoutState {
            failed_attempts: 3,
            locked: true
        }
    );

    let kind = failure(fixture.authenticator.authenticate(EMAIL, PASSWORD).await);
    assert_eq!(kind, AuthFailure::AccountLocked);
    assert_eq!(fixture.credentials.writes(), 3);
}

#[tokio::test]
async fn test_locked_account_skips_verification_and_writes() {
    let mut stored = record(EMAIL, PASSWORD);
    stored.lockout = LockoutState {
        failed_attempts: 3,
        locked: true,
    };
    let fixture = Fixture::new(vec![stored], &[(EMAIL, Role::Admin)]);

    let kind = failure(fixture.authenticator.authenticate(EMAIL, "wrong").await);

    assert_eq!(kind, AuthFailure::AccountLocked);
    assert_eq!(fixture.credentials.get(EMAIL).lockout.failed_attempts, 3);
    assert_eq!(fixture.credentials.writes(), 0);
}

#[tokio::test]
async fn test_no_role_assigned() {
    let fixture = Fixture::new(vec![record(EMAIL, PASSWORD)], &[]);
    let kind = failure(fixture.authenticator.authenticate(EMAIL, PASSWORD).await);
    assert_eq!(kind, AuthFailure::NoRoleAssigned);
}

#[tokio::test]
async fn test_malformed_stored_hash_is_bad_credentials() {
    let mut stored = record(EMAIL, PASSWORD);
    stored.password_hash = "not-a-hash".to_string();
    let fixture = Fixture::new(vec![stored], &[(EMAIL, Role::Admin)]);

    let kind = failure(fixture.authenticator.authenticate(EMAIL, PASSWORD).await);

    assert_eq!(kind, AuthFailure::BadCredentials);
}

#[tokio::test]
async fn test_unlock_restores_login() {
    let fixture = Fixture::new(vec![record(EMAIL, PASSWORD)], &[(EMAIL, Role::Admin)]);
    for _ in 0..3 {
        let _ = fixture.authenticator.authenticate(EMAIL, "wrong").await;
    }

    fixture.lockout.unlock(EMAIL).await.unwrap();

    assert!(fixture.authenticator.authenticate(EMAIL, PASSWORD).await.is_ok());
}

#[tokio::test]
async fn test_legacy_hash_is_upgraded_after_login() {
    let mut stored = record(EMAIL, PASSWORD);
    stored.password_hash = format!("legacy:{PASSWORD}");
    let fixture = Fixture::new(vec![stored], &[(EMAIL, Role::Pharmacist)]);

    fixture
        .authenticator
        .authenticate(EMAIL, PASSWORD)
        .await
        .unwrap();

    let upgraded = fixture.credentials.get(EMAIL);
    assert_eq!(upgraded.password_hash, format!("plain:{PASSWORD}"));
    assert_eq!(upgraded.lockout, LockoutState::open());
    assert_eq!(fixture.credentials.writes(), 1);
    assert_eq!(fixture.credentials.rehashes(), 1);

    fixture
        .authenticator
        .authenticate(EMAIL, PASSWORD)
        .await
        .unwrap();
    assert_eq!(fixture.credentials.rehashes(), 1);
}

#[tokio::test]
async fn test_legacy_hash_kept_on_bad_password() {
    let mut stored = record(EMAIL, PASSWORD);
    stored.password_hash = format!("legacy:{PASSWORD}");
    let fixture = Fixture::new(vec![stored], &[(EMAIL, Role::Pharmacist)]);

    let kind = failure(fixture.authenticator.authenticate(EMAIL, "wrong").await);

    assert_eq!(kind, AuthFailure::BadCredentials);
    assert_eq!(
        fixture.credentials.get(EMAIL).password_hash,
        format!("legacy:{PASSWORD}")
    );
    assert_eq!(fixture.credentials.rehashes(), 0);
}
