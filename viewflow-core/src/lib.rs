// Copyright 2026 viewflow contributors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Core building blocks for viewflow view-models.
//!
//! This crate provides the two lifecycle primitives every pipeline hangs off:
//!
//! - [`ObservableCell`]: a last-value-replaying observable cell, the
//!   single-writer / many-reader state slot a UI layer subscribes to.
//! - [`DisposeBag`]: a registry of cancellable subscriptions that are torn
//!   down together, exactly once, when the owning scope ends.

pub mod dispose_bag;
pub mod error;
pub mod observable_cell;

pub use self::dispose_bag::{Disposable, DisposeBag};
pub use self::error::{CellError, FormError};
pub use self::observable_cell::ObservableCell;
