//! Unit tests for lockout state transitions

use uma_domain::constants::MAX_FAILED_ATTEMPTS;
use uma_domain::{AuthFailure, LockoutState};

#[test]
fn test_three_failures_lock_a_fresh_record() {
    let state = LockoutState::open()
        .after_failure(MAX_FAILED_ATTEMPTS)
        .after_failure(MAX_FAILED_ATTEMPTS);
    assert_eq!(state.failed_attempts, 2);
    assert!(!state.locked);

    let state = state.after_failure(MAX_FAILED_ATTEMPTS);
    assert_eq!(
        state,
        LockoutState {
            failed_attempts: 3,
            locked: true
        }
    );
}

#[test]
fn test_locked_stays_locked_and_keeps_counting() {
    let locked = LockoutState {
        failed_attempts: 3,
        locked: true,
    };
    let next = locked.after_failure(MAX_FAILED_ATTEMPTS);
    assert!(next.locked);
    assert_eq!(next.failed_attempts, 4);
}

#[test]
fn test_success_resets_counter() {
    let state = LockoutState {
        failed_attempts: 2,
        locked: false,
    };
    assert_eq!(state.after_success(), Ok(LockoutState::open()));
}

#[test]
fn test_success_refused_when_locked() {
    let locked = LockoutState {
        failed_attempts: 3,
        locked: true,
    };
    assert_eq!(locked.after_success(), Err(AuthFailure::AccountLocked));
}

#[test]
fn test_locked_iff_counter_reaches_limit() {
    let mut state = LockoutState::open();
    for attempt in 1..=10 {
        state = state.after_failure(5);
        assert_eq!(state.locked, attempt >= 5, "attempt {attempt}");
    }
}

#[test]
fn test_counter_saturates() {
    let state = LockoutState {
        failed_attempts: u32::MAX,
        locked: true,
    };
    assert_eq!(state.after_failure(3).failed_attempts, u32::MAX);
}

#[test]
fn test_remaining_attempts() {
    assert_eq!(LockoutState::open().remaining_attempts(3), 3);
    let state = LockoutState::open().after_failure(3);
    assert_eq!(state.remaining_attempts(3), 2);
    let locked = state.after_failure(3).after_failure(3);
    assert_eq!(locked.remaining_attempts(3), 0);
}
