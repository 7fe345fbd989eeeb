// Copyright 2026 viewflow contributors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! An async form view-model built on reactive stream pipelines.
//!
//! [`FormViewModel`] owns an observable text cell and a disposal registry, and
//! wires five independent pipelines into them:
//!
//! - **debounce**: text-change events settle for a quiescence window before
//!   the latest text lands in the cell;
//! - **zip**: two finite sequences paired positionally into a report buffer;
//! - **repeat-until**: a bounded polling loop expressed as a repeated stream;
//! - **combine-latest** over the form fields, producing a
//!   [`ValidationOutcome`] per keystroke on either field;
//! - **combine-latest** over two periodic tick sources, as a demonstration.
//!
//! All cell writes happen on the pipeline's spawned delivery task; callers
//! only ever read. Teardown is a single idempotent [`FormViewModel::dispose`].
//!
//! # Example
//!
//! ```
//! use viewflow::{FormViewModel, TextChange};
//! use futures::StreamExt;
//! use std::time::Duration;
//! use tokio::sync::mpsc;
//! use tokio_stream::wrappers::UnboundedReceiverStream;
//!
//! # #[tokio::main]
//! # async fn main() {
//! let vm = FormViewModel::new();
//! let mut text = vm.text().subscribe().unwrap();
//!
//! let (tx, rx) = mpsc::unbounded_channel();
//! vm.watch_text_changes(
//!     UnboundedReceiverStream::new(rx),
//!     Duration::from_millis(20),
//! );
//!
//! tx.send(TextChange::new("hel")).unwrap();
//! tx.send(TextChange::new("hello")).unwrap();
//!
//! // Only the settled text is delivered.
//! assert_eq!(text.next().await.as_deref(), Some("hello"));
//!
//! vm.dispose();
//! # }
//! ```

pub mod strength;
pub mod text_change;
pub mod validation;
pub mod view_model;

pub use self::strength::{password_strength, Strength};
pub use self::text_change::TextChange;
pub use self::validation::{validate, ValidationOutcome};
pub use self::view_model::{FormViewModel, REPEAT_LIMIT};

pub use viewflow_core::{CellError, Disposable, DisposeBag, FormError, ObservableCell};
