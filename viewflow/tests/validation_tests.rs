// Copyright 2026 viewflow contributors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use viewflow::{validate, FormError};

#[test]
fn test_empty_name_fails_regardless_of_password() {
    for password in ["", "weak", "StrongPass1!"] {
        let outcome = validate("", password);
        assert_eq!(outcome.score, 0);
        assert_eq!(outcome.error, Some(FormError::InvalidName));
    }
}

#[test]
fn test_empty_password_fails_for_any_name() {
    let outcome = validate("alice", "");
    assert_eq!(outcome.score, 0);
    assert_eq!(outcome.error, Some(FormError::InvalidPassword));
}

#[test]
fn test_empty_name_wins_over_empty_password() {
    // First match wins: the name rule is checked before the password rule.
    let outcome = validate("", "");
    assert_eq!(outcome.error, Some(FormError::InvalidName));
}

#[test]
fn test_strong_password_scores_four_with_no_error() {
    let outcome = validate("alice", "StrongPass1!");
    assert_eq!(outcome.score, 4);
    assert_eq!(outcome.error, None);
    assert!(outcome.is_valid());
}

#[test]
fn test_tier_one_password_scores_one() {
    let outcome = validate("alice", "weak");
    assert_eq!(outcome.score, 1);
    assert_eq!(outcome.error, Some(FormError::InvalidPassword));
}

#[test]
fn test_tier_two_password_scores_two() {
    let outcome = validate("alice", "lowercase1");
    assert_eq!(outcome.score, 2);
    assert_eq!(outcome.error, Some(FormError::InvalidPassword));
}

#[test]
fn test_tier_three_password_scores_three() {
    let outcome = validate("alice", "Lower123");
    assert_eq!(outcome.score, 3);
    assert_eq!(outcome.error, Some(FormError::InvalidPassword));
}

#[test]
fn test_unrankable_password_scores_zero_without_error() {
    // Too short to rank, but not empty: no error is raised.
    let outcome = validate("alice", "abc");
    assert_eq!(outcome.score, 0);
    assert_eq!(outcome.error, None);
    assert!(!outcome.is_valid());
}
