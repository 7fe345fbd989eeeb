// Copyright 2026 viewflow contributors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Trailing debounce over a quiescence window.

use futures::Stream;
use pin_project::pin_project;
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};
use std::time::Duration;
use tokio::time::Sleep;

/// Extension trait providing the `debounce` operator for streams.
pub trait DebounceExt: Stream + Sized {
    /// Debounces the stream by the specified duration.
    ///
    /// This implements **trailing debounce** semantics (Rx standard):
    /// - When a value arrives, start/restart the quiescence timer
    /// - If no new value arrives before the timer expires, emit the latest value
    /// - If a new value arrives first, discard the pending value and restart
    /// - When the source ends, flush any pending value immediately
    ///
    /// # Arguments
    ///
    /// * `window` - The duration of required inactivity before emitting
    ///
    /// # Example
    ///
    /// ```
    /// use viewflow_stream::DebounceExt;
    /// use futures::channel::mpsc;
    /// use futures::StreamExt;
    /// use std::time::Duration;
    ///
    /// # #[tokio::main]
    /// # async fn main() {
    /// let (tx, rx) = mpsc::unbounded();
    ///
    /// let mut debounced = Box::pin(rx.debounce(Duration::from_millis(50)));
    ///
    /// // Two values in one burst: the first is superseded.
    /// tx.unbounded_send("a").unwrap();
    /// tx.unbounded_send("ab").unwrap();
    /// drop(tx);
    ///
    /// assert_eq!(debounced.next().await, Some("ab"));
    /// assert_eq!(debounced.next().await, None);
    /// # }
    /// ```
    fn debounce(self, window: Duration) -> Debounce<Self> {
        Debounce {
            stream: self,
            window,
            pending: None,
            sleep: None,
            source_ended: false,
        }
    }
}

impl<S: Stream + Sized> DebounceExt for S {}

/// Stream returned by [`DebounceExt::debounce`].
#[pin_project]
pub struct Debounce<S: Stream> {
    #[pin]
    stream: S,
    window: Duration,
    pending: Option<S::Item>,
    #[pin]
    sleep: Option<Sleep>,
    source_ended: bool,
}

impl<S: Stream> Stream for Debounce<S> {
    type Item = S::Item;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let mut this = self.project();

        loop {
            // Once the source is done, flush the pending value and finish.
            if *this.source_ended {
                if let Some(item) = this.pending.take() {
                    return Poll::Ready(Some(item));
                }
                return Poll::Ready(None);
            }

            // A pending value waits on its quiescence timer.
            if this.pending.is_some() {
                if let Some(sleep) = this.sleep.as_mut().as_pin_mut() {
                    if sleep.poll(cx).is_ready() {
                        this.sleep.set(None);
                        return Poll::Ready(this.pending.take());
                    }
                }
            }

            match this.stream.as_mut().poll_next(cx) {
                Poll::Ready(Some(item)) => {
                    // New arrival supersedes the pending value and restarts
                    // the timer.
                    this.sleep.set(Some(tokio::time::sleep(*this.window)));
                    *this.pending = Some(item);
                }
                Poll::Ready(None) => {
                    *this.source_ended = true;
                }
                Poll::Pending => return Poll::Pending,
            }
        }
    }
}
