// Copyright 2026 viewflow contributors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! The form validation rule.

use crate::strength::password_strength;
use viewflow_core::FormError;

/// Score of the strongest possible password.
pub const STRONG_SCORE: u8 = 4;

/// Outcome of validating a (username, password) pair.
///
/// Constructed fresh per validation call; immutable. The error, when present,
/// names the first field that failed; it is a value, never an `Err`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationOutcome {
    /// Form score in `0..=4`; [`STRONG_SCORE`] means the form is acceptable.
    pub score: u8,
    /// The failing rule, if any.
    pub error: Option<FormError>,
}

impl ValidationOutcome {
    /// Returns `true` when the form can be submitted.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.score == STRONG_SCORE && self.error.is_none()
    }
}

/// Validates a (username, password) pair; first matching rule wins.
///
/// 1. Empty `name` → `(0, InvalidName)`, regardless of the password.
/// 2. Empty `password` → `(0, InvalidPassword)`.
/// 3. Otherwise the password is classified by
///    [`password_strength`](crate::password_strength): a strong password
///    scores 4 with no error; tiers 1-3 become the score paired with
///    `InvalidPassword`; an unrankable password scores 0 with no error.
///
/// Pure and deterministic; no side effects.
///
/// # Example
///
/// ```
/// use viewflow::{validate, FormError};
///
/// assert_eq!(validate("", "anything").error, Some(FormError::InvalidName));
/// assert!(validate("alice", "StrongPass1!").is_valid());
/// ```
#[must_use]
pub fn validate(name: &str, password: &str) -> ValidationOutcome {
    if name.is_empty() {
        return ValidationOutcome {
            score: 0,
            error: Some(FormError::InvalidName),
        };
    }
    if password.is_empty() {
        return ValidationOutcome {
            score: 0,
            error: Some(FormError::InvalidPassword),
        };
    }

    let strength = password_strength(password);
    if strength.strong {
        return ValidationOutcome {
            score: STRONG_SCORE,
            error: None,
        };
    }
    match strength.tier {
        tier @ 1..=3 => ValidationOutcome {
            score: tier,
            error: Some(FormError::InvalidPassword),
        },
        _ => ValidationOutcome {
            score: 0,
            error: None,
        },
    }
}
