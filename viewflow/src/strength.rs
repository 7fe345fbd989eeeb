// Copyright 2026 viewflow contributors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Password strength classification.
//!
//! A character-class census over the password: lowercase, uppercase, digits
//! and symbols each count as one class. The tier ranks how many classes are
//! mixed in; `strong` additionally requires useful length.

/// Result of classifying a password.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Strength {
    /// Rank in `0..=3`: tier 0 is unrankable (too short or empty), tiers 1-3
    /// count the distinct character classes present, capped at 3.
    pub tier: u8,
    /// `true` when the password mixes all four classes at length 8 or more.
    pub strong: bool,
}

const MIN_RANKABLE_LEN: usize = 4;
const MIN_STRONG_LEN: usize = 8;

/// Classifies `password` into a [`Strength`].
///
/// Deterministic and pure. Character classes are counted over Unicode
/// alphabetic/numeric categories; anything else (punctuation, spaces, emoji)
/// counts as the symbol class.
///
/// # Example
///
/// ```
/// use viewflow::password_strength;
///
/// assert!(password_strength("StrongPass1!").strong);
/// assert_eq!(password_strength("weak").tier, 1);
/// assert_eq!(password_strength("abc").tier, 0);
/// ```
#[must_use]
pub fn password_strength(password: &str) -> Strength {
    let mut lower = false;
    let mut upper = false;
    let mut digit = false;
    let mut symbol = false;

    for c in password.chars() {
        if c.is_lowercase() {
            lower = true;
        } else if c.is_uppercase() {
            upper = true;
        } else if c.is_numeric() {
            digit = true;
        } else {
            symbol = true;
        }
    }

    let classes = u8::from(lower) + u8::from(upper) + u8::from(digit) + u8::from(symbol);
    let length = password.chars().count();

    let tier = if length < MIN_RANKABLE_LEN {
        0
    } else {
        classes.min(3)
    };
    let strong = length >= MIN_STRONG_LEN && classes == 4;

    Strength { tier, strong }
}
