// Copyright 2026 viewflow contributors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Combine-latest over two heterogeneous streams.

use futures::Stream;
use pin_project::pin_project;
use std::pin::Pin;
use std::task::{Context, Poll};

/// Extension trait providing the `combine_latest` operator.
pub trait CombineLatestExt: Stream + Sized {
    /// Combines this stream with another, re-emitting on every update.
    ///
    /// Each source's most recent value is cached. Nothing is emitted until
    /// both sources have emitted at least once; from then on, every emission
    /// from either side produces `f(&latest_a, &latest_b)`, including the
    /// emission that completes the first pair.
    ///
    /// The combined stream ends when both sources have ended, or as soon as
    /// one source ends without ever emitting (no pair can ever form). A source
    /// that ends *after* emitting keeps contributing its last value.
    ///
    /// # Example
    ///
    /// ```
    /// use viewflow_stream::CombineLatestExt;
    /// use futures::channel::mpsc;
    /// use futures::StreamExt;
    ///
    /// # #[tokio::main]
    /// # async fn main() {
    /// let (tx_a, rx_a) = mpsc::unbounded();
    /// let (tx_b, rx_b) = mpsc::unbounded();
    ///
    /// let mut pairs = rx_a.combine_latest(rx_b, |a: &i32, b: &&str| (*a, *b));
    ///
    /// tx_a.unbounded_send(1).unwrap();
    /// tx_b.unbounded_send("x").unwrap();
    /// assert_eq!(pairs.next().await, Some((1, "x")));
    ///
    /// tx_a.unbounded_send(2).unwrap();
    /// assert_eq!(pairs.next().await, Some((2, "x")));
    ///
    /// drop(tx_a);
    /// drop(tx_b);
    /// assert_eq!(pairs.next().await, None);
    /// # }
    /// ```
    fn combine_latest<S2, F, O>(self, other: S2, f: F) -> CombineLatest<Self, S2, F>
    where
        S2: Stream,
        F: FnMut(&Self::Item, &S2::Item) -> O,
    {
        CombineLatest {
            first: self,
            second: other,
            combine: f,
            latest_first: None,
            latest_second: None,
            first_done: false,
            second_done: false,
        }
    }
}

impl<S: Stream + Sized> CombineLatestExt for S {}

/// Stream returned by [`CombineLatestExt::combine_latest`].
#[pin_project]
pub struct CombineLatest<S1: Stream, S2: Stream, F> {
    #[pin]
    first: S1,
    #[pin]
    second: S2,
    combine: F,
    latest_first: Option<S1::Item>,
    latest_second: Option<S2::Item>,
    first_done: bool,
    second_done: bool,
}

impl<S1, S2, F, O> Stream for CombineLatest<S1, S2, F>
where
    S1: Stream,
    S2: Stream,
    F: FnMut(&S1::Item, &S2::Item) -> O,
{
    type Item = O;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let mut this = self.project();

        loop {
            let mut progressed = false;

            if !*this.first_done {
                match this.first.as_mut().poll_next(cx) {
                    Poll::Ready(Some(value)) => {
                        *this.latest_first = Some(value);
                        progressed = true;
                        if let (Some(a), Some(b)) = (&*this.latest_first, &*this.latest_second) {
                            return Poll::Ready(Some((this.combine)(a, b)));
                        }
                    }
                    Poll::Ready(None) => {
                        *this.first_done = true;
                        progressed = true;
                        // A source that never emitted can never form a pair.
                        if this.latest_first.is_none() {
                            return Poll::Ready(None);
                        }
                    }
                    Poll::Pending => {}
                }
            }

            if !*this.second_done {
                match this.second.as_mut().poll_next(cx) {
                    Poll::Ready(Some(value)) => {
                        *this.latest_second = Some(value);
                        progressed = true;
                        if let (Some(a), Some(b)) = (&*this.latest_first, &*this.latest_second) {
                            return Poll::Ready(Some((this.combine)(a, b)));
                        }
                    }
                    Poll::Ready(None) => {
                        *this.second_done = true;
                        progressed = true;
                        if this.latest_second.is_none() {
                            return Poll::Ready(None);
                        }
                    }
                    Poll::Pending => {}
                }
            }

            if *this.first_done && *this.second_done {
                return Poll::Ready(None);
            }

            if !progressed {
                return Poll::Pending;
            }
        }
    }
}
