// Copyright 2026 viewflow contributors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Error types for viewflow.
//!
//! Form validation failures are carried as *values* inside a
//! `ValidationOutcome` and never interrupt a pipeline. [`CellError`] is the
//! only operational error surface: it reports attempts to use an
//! [`ObservableCell`](crate::ObservableCell) after it has been closed.

/// Validation failure for a form field.
///
/// Mirrors the two ways a (username, password) pair can be rejected. These are
/// signaled through validation results, never returned as `Err` from pipeline
/// methods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    /// The username field is empty.
    #[error("invalid name: username must not be empty")]
    InvalidName,

    /// The password field is empty or not strong enough.
    #[error("invalid password: password is empty or too weak")]
    InvalidPassword,
}

/// Errors specific to observable-cell operations.
///
/// These can only occur once a cell has been torn down; a live cell's
/// operations are infallible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum CellError {
    /// The cell has been closed and no longer accepts writes or subscribers.
    #[error("observable cell is closed")]
    Closed,
}
