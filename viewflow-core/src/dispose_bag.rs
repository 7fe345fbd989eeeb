// Copyright 2026 viewflow contributors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Subscription handles with cooperative cancellation, and the bag that
//! collects them.
//!
//! A [`Disposable`] pairs a spawned pipeline task with a
//! [`CancellationToken`]; a [`DisposeBag`] aggregates disposables so the
//! owning scope can release every subscription with a single, idempotent
//! [`dispose_all`](DisposeBag::dispose_all) call at teardown.

use parking_lot::Mutex;
use std::future::Future;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

/// A cancellable subscription handle.
///
/// The spawned task receives a [`CancellationToken`] that it must monitor
/// (typically by `select!`-ing its work against `token.cancelled()`). Dropping
/// an undisposed `Disposable` cancels it, so a subscription can never outlive
/// its handle.
///
/// # Example
///
/// ```
/// use viewflow_core::Disposable;
///
/// # #[tokio::main]
/// # async fn main() {
/// let sub = Disposable::spawn(|token| async move {
///     token.cancelled().await;
///     // Clean up and exit.
/// });
///
/// assert!(!sub.is_disposed());
/// sub.dispose();
/// assert!(sub.is_disposed());
/// # }
/// ```
#[derive(Debug)]
pub struct Disposable {
    token: CancellationToken,
    handle: Option<JoinHandle<()>>,
}

impl Disposable {
    /// Spawn a pipeline task with cancellation support.
    ///
    /// The closure receives the token that [`dispose`](Disposable::dispose)
    /// (or [`DisposeBag::dispose_all`]) will trigger; the task should exit at
    /// its next cancellation checkpoint.
    pub fn spawn<F, Fut>(f: F) -> Self
    where
        F: FnOnce(CancellationToken) -> Fut,
        Fut: Future<Output = ()> + Send + 'static,
    {
        let token = CancellationToken::new();
        let handle = tokio::spawn(f(token.clone()));
        Self {
            token,
            handle: Some(handle),
        }
    }

    /// Wrap an externally managed token, with no task attached.
    #[must_use]
    pub fn from_token(token: CancellationToken) -> Self {
        Self {
            token,
            handle: None,
        }
    }

    /// Signal cancellation.
    ///
    /// This does not wait for the task to finish; an in-flight emission may or
    /// may not complete. Idempotent.
    pub fn dispose(&self) {
        self.token.cancel();
    }

    /// Returns `true` once cancellation has been requested.
    #[must_use]
    pub fn is_disposed(&self) -> bool {
        self.token.is_cancelled()
    }

    /// Wait for the underlying task to exit after cancellation.
    ///
    /// Returns immediately if no task is attached or it already finished.
    pub async fn join(&mut self) {
        if let Some(handle) = self.handle.take() {
            let _ = handle.await;
        }
    }
}

impl Drop for Disposable {
    fn drop(&mut self) {
        self.token.cancel();
    }
}

/// A registry of subscriptions released together at teardown.
///
/// The analogue of Rx's composite disposable: pipelines add themselves as they
/// start; the owning scope calls [`dispose_all`](DisposeBag::dispose_all) once
/// when it ends. Disposal is idempotent, and a disposable added *after*
/// disposal is cancelled on the spot, so nothing can leak past teardown.
#[derive(Debug, Default)]
pub struct DisposeBag {
    inner: Mutex<BagState>,
}

#[derive(Debug, Default)]
struct BagState {
    disposed: bool,
    entries: Vec<Disposable>,
}

impl DisposeBag {
    /// Creates an empty, undisposed bag.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a subscription.
    ///
    /// If the bag was already disposed, the subscription is disposed
    /// immediately instead of being retained.
    pub fn add(&self, disposable: Disposable) {
        let mut state = self.inner.lock();
        if state.disposed {
            disposable.dispose();
            return;
        }
        state.entries.push(disposable);
    }

    /// Cancel every registered subscription.
    ///
    /// The first call cancels all entries and drops them; subsequent calls are
    /// no-ops. No delivery to any sink happens after the entries' tasks have
    /// observed cancellation.
    pub fn dispose_all(&self) {
        let entries = {
            let mut state = self.inner.lock();
            if state.disposed {
                return;
            }
            state.disposed = true;
            std::mem::take(&mut state.entries)
        };

        for entry in &entries {
            entry.dispose();
        }
    }

    /// Returns `true` once [`dispose_all`](DisposeBag::dispose_all) has run.
    #[must_use]
    pub fn is_disposed(&self) -> bool {
        self.inner.lock().disposed
    }

    /// Number of currently registered subscriptions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.lock().entries.len()
    }

    /// Returns `true` if no subscriptions are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.lock().entries.is_empty()
    }
}
