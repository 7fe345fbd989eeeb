// Copyright 2026 viewflow contributors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Last-value-replaying observable cell.
//!
//! An [`ObservableCell`] is the Rust analogue of a UI framework's observable
//! state holder: it keeps the most recent value and broadcasts every update to
//! all active subscribers.
//!
//! ## Characteristics
//!
//! - **Replaying**: A late subscriber immediately receives the current value
//!   (if one was ever set), then all subsequent updates.
//! - **Unbounded**: Uses unbounded channels internally (no backpressure).
//! - **Thread-safe**: Cheap to clone; all clones share the same state.
//! - **Explicit teardown**: `close()` ends all subscriber streams; further
//!   writes and subscriptions fail with [`CellError::Closed`].
//!
//! ## Example
//!
//! ```
//! use viewflow_core::ObservableCell;
//! use futures::StreamExt;
//!
//! # #[tokio::main]
//! # async fn main() {
//! let cell = ObservableCell::<String>::new();
//! cell.set("first".to_owned()).unwrap();
//!
//! // Late subscriber still sees the current value.
//! let mut updates = cell.subscribe().unwrap();
//! assert_eq!(updates.next().await.as_deref(), Some("first"));
//!
//! cell.set("second".to_owned()).unwrap();
//! assert_eq!(updates.next().await.as_deref(), Some("second"));
//!
//! cell.close();
//! assert_eq!(updates.next().await, None); // Cell closed
//! # }
//! ```

use crate::error::CellError;
use async_channel::Sender;
use futures::stream::Stream;
use parking_lot::Mutex;
use std::pin::Pin;
use std::sync::Arc;

type CellBoxStream<T> = Pin<Box<dyn Stream<Item = T> + Send + 'static>>;

struct CellState<T> {
    closed: bool,
    latest: Option<T>,
    senders: Vec<Sender<T>>,
}

/// An observable state slot holding the latest value and notifying subscribers.
///
/// `ObservableCell` is the delivery sink of every viewflow pipeline: pipelines
/// write into it from their delivery task, a UI layer reads from it through
/// [`subscribe`](ObservableCell::subscribe).
///
/// See the [module documentation](crate::observable_cell) for examples.
pub struct ObservableCell<T: Clone + Send + 'static> {
    state: Arc<Mutex<CellState<T>>>,
}

impl<T: Clone + Send + 'static> ObservableCell<T> {
    /// Creates an empty, open cell with no subscribers.
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(CellState {
                closed: false,
                latest: None,
                senders: Vec::new(),
            })),
        }
    }

    /// Subscribe to this cell and receive a stream of values.
    ///
    /// If a value has ever been set, the stream yields it immediately, then
    /// every subsequent update. The stream ends when the cell is closed.
    ///
    /// # Errors
    ///
    /// Returns [`CellError::Closed`] if the cell has been closed.
    pub fn subscribe(&self) -> Result<CellBoxStream<T>, CellError> {
        let mut state = self.state.lock();
        if state.closed {
            return Err(CellError::Closed);
        }

        let (tx, rx) = async_channel::unbounded();
        if let Some(latest) = &state.latest {
            // Unbounded channel with no receiver polled yet; cannot fail.
            let _ = tx.try_send(latest.clone());
        }
        state.senders.push(tx);
        Ok(Box::pin(rx))
    }

    /// Store a new value and notify all active subscribers.
    ///
    /// # Errors
    ///
    /// Returns [`CellError::Closed`] if the cell has been closed.
    pub fn set(&self, value: T) -> Result<(), CellError> {
        let mut state = self.state.lock();
        if state.closed {
            return Err(CellError::Closed);
        }

        state.latest = Some(value.clone());

        let mut next_senders = Vec::with_capacity(state.senders.len());
        for tx in state.senders.drain(..) {
            if tx.try_send(value.clone()).is_ok() {
                next_senders.push(tx);
            }
        }
        state.senders = next_senders;

        Ok(())
    }

    /// Returns a clone of the current value, or `None` if nothing was set yet.
    ///
    /// Reads remain valid after `close()`; the last value stays observable.
    #[must_use]
    pub fn get(&self) -> Option<T> {
        self.state.lock().latest.clone()
    }

    /// Closes the cell, ending all subscriber streams.
    ///
    /// After closing, `set()` and `subscribe()` fail with
    /// [`CellError::Closed`]. Closing is idempotent.
    pub fn close(&self) {
        let mut state = self.state.lock();
        state.closed = true;
        state.senders.clear();
    }

    /// Returns `true` if the cell has been closed.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.state.lock().closed
    }

    /// Returns the number of currently active subscribers.
    ///
    /// The count is updated lazily: dropped subscribers are pruned on the
    /// next `set()` call rather than immediately.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.state.lock().senders.len()
    }
}

impl<T: Clone + Send + 'static> Default for ObservableCell<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone + Send + 'static> Clone for ObservableCell<T> {
    fn clone(&self) -> Self {
        Self {
            state: self.state.clone(),
        }
    }
}
