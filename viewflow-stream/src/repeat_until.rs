// Copyright 2026 viewflow contributors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Bounded repetition of a constant value.

use futures::Stream;
use std::pin::Pin;
use std::task::{Context, Poll};

/// Re-emits a clone of `value` until `predicate` returns `true`.
///
/// The predicate is evaluated before each emission, so downstream has
/// processed emission *n* before the predicate gates emission *n + 1*. This
/// lets the predicate observe state mutated by the subscriber, the classic
/// bounded polling loop expressed as a stream:
///
/// ```
/// use viewflow_stream::repeat_until;
/// use futures::StreamExt;
/// use std::sync::Arc;
/// use std::sync::atomic::{AtomicU32, Ordering};
///
/// # #[tokio::main]
/// # async fn main() {
/// let counter = Arc::new(AtomicU32::new(0));
///
/// let pred = {
///     let counter = counter.clone();
///     move || counter.load(Ordering::SeqCst) == 3
/// };
/// let mut emissions = 0;
/// let mut stream = repeat_until(1, pred);
/// while let Some(value) = stream.next().await {
///     assert_eq!(value, 1);
///     emissions += 1;
///     counter.fetch_add(1, Ordering::SeqCst);
/// }
///
/// assert_eq!(emissions, 3);
/// # }
/// ```
pub fn repeat_until<T, P>(value: T, predicate: P) -> RepeatUntil<T, P>
where
    T: Clone + Unpin,
    P: FnMut() -> bool + Unpin,
{
    RepeatUntil {
        value,
        predicate,
        done: false,
    }
}

/// Stream returned by [`repeat_until`].
pub struct RepeatUntil<T, P> {
    value: T,
    predicate: P,
    done: bool,
}

impl<T, P> Stream for RepeatUntil<T, P>
where
    T: Clone + Unpin,
    P: FnMut() -> bool + Unpin,
{
    type Item = T;

    fn poll_next(self: Pin<&mut Self>, _cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let this = self.get_mut();

        if this.done {
            return Poll::Ready(None);
        }
        if (this.predicate)() {
            this.done = true;
            return Poll::Ready(None);
        }
        Poll::Ready(Some(this.value.clone()))
    }
}
