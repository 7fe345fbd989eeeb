// Copyright 2026 viewflow contributors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! The form view-model and its stream pipelines.

use crate::text_change::TextChange;
use crate::validation::{validate, ValidationOutcome};
use futures::stream::{self, Stream, StreamExt};
use std::fmt::Write as _;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::{interval, sleep};
use tokio_stream::wrappers::IntervalStream;
use tracing::debug;
use viewflow_core::{Disposable, DisposeBag, ObservableCell};
use viewflow_stream::{repeat_until, CombineLatestExt, DebounceExt};

/// Terminal counter value for the repeat-until pipeline.
pub const REPEAT_LIMIT: u32 = 10;

/// An async view-model wiring reactive pipelines into observable text state.
///
/// Every pipeline started on this view-model registers itself in the internal
/// [`DisposeBag`]; [`dispose`](FormViewModel::dispose) cancels them all and
/// closes the text cell, after which no further delivery happens. The cell is
/// written exclusively from the pipelines' spawned delivery tasks; callers
/// observe it through [`text`](FormViewModel::text).
///
/// See the [crate documentation](crate) for a usage example.
#[derive(Default)]
pub struct FormViewModel {
    text: ObservableCell<String>,
    bag: DisposeBag,
}

impl FormViewModel {
    /// Creates a view-model with an empty text cell and no active pipelines.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The observable text state, for external read-only subscription.
    #[must_use]
    pub fn text(&self) -> &ObservableCell<String> {
        &self.text
    }

    /// Debounce pipeline: settle text-change bursts into the text cell.
    ///
    /// Bursts are suppressed; only the last event of a burst is delivered,
    /// once `quiescence` has elapsed with no further change. The original
    /// field uses a three-second window; tests pass shorter ones.
    pub fn watch_text_changes<S>(&self, changes: S, quiescence: Duration)
    where
        S: Stream<Item = TextChange> + Send + 'static,
    {
        let cell = self.text.clone();
        self.bag.add(Disposable::spawn(move |token| async move {
            let mut debounced = Box::pin(changes.debounce(quiescence));
            loop {
                tokio::select! {
                    () = token.cancelled() => break,
                    next = debounced.next() => {
                        let Some(event) = next else { break };
                        debug!(text = event.text(), "debounced text change");
                        if cell.set(event.into_text()).is_err() {
                            break;
                        }
                    }
                }
            }
        }));
    }

    /// Zip pipeline: pair two finite sequences into a report buffer.
    ///
    /// Zips `[1, 2, 3, 4, 5]` against `["item1", "item2", "item3"]` into three
    /// pairs (the unmatched integers are dropped), appending one formatted line
    /// per pair. The full buffer is published to the text cell once the
    /// shorter sequence is exhausted.
    pub fn zip_numbers_with_items(&self) {
        let numbers = stream::iter([1, 2, 3, 4, 5]);
        let items = stream::iter(["item1", "item2", "item3"]);

        let cell = self.text.clone();
        self.bag.add(Disposable::spawn(move |token| async move {
            let mut pairs = numbers.zip(items);
            let mut buffer = String::new();
            loop {
                tokio::select! {
                    () = token.cancelled() => break,
                    next = pairs.next() => {
                        match next {
                            Some((number, item)) => {
                                debug!("{number}  {item}");
                                // Infallible for String.
                                let _ = writeln!(buffer, "{number}  {item} ");
                            }
                            None => {
                                let _ = cell.set(buffer);
                                break;
                            }
                        }
                    }
                }
            }
        }));
    }

    /// Repeat-until pipeline: a bounded polling loop as a repeated stream.
    ///
    /// Re-emits the constant `1` until the shared counter reaches
    /// [`REPEAT_LIMIT`]; each delivery logs and increments the counter, so the
    /// stream ends after exactly `REPEAT_LIMIT` emissions. The counter is
    /// returned for observation.
    pub fn repeat_until_limit(&self) -> Arc<AtomicU32> {
        let counter = Arc::new(AtomicU32::new(0));
        let observed = counter.clone();

        self.bag.add(Disposable::spawn(move |token| async move {
            let predicate = {
                let counter = counter.clone();
                move || counter.load(Ordering::SeqCst) == REPEAT_LIMIT
            };
            let mut repeats = Box::pin(repeat_until(1u32, predicate));
            loop {
                tokio::select! {
                    () = token.cancelled() => break,
                    next = repeats.next() => {
                        let Some(_value) = next else { break };
                        debug!(count = counter.load(Ordering::SeqCst), "repeat emission");
                        counter.fetch_add(1, Ordering::SeqCst);
                    }
                }
            }
        }));

        observed
    }

    /// Combine-latest form validation over the two field streams.
    ///
    /// Every keystroke on either field re-validates the pair of latest field
    /// values. The returned stream is caller-owned: it is not registered in
    /// the dispose bag and ends when both sources end.
    pub fn form_validation<N, P>(
        &self,
        names: N,
        passwords: P,
    ) -> impl Stream<Item = ValidationOutcome>
    where
        N: Stream<Item = String>,
        P: Stream<Item = String>,
    {
        names.combine_latest(passwords, |name: &String, password: &String| {
            let outcome = validate(name, password);
            debug!(?outcome, "form validation");
            outcome
        })
    }

    /// Combine-latest tick demo over two periodic sources.
    ///
    /// Merges two interval tick streams into `(fast, slow)` tick-count pairs,
    /// logging each pair; re-emits whenever either source ticks. The method
    /// waits `demo_window` before returning so a bounded number of ticks can
    /// be observed. Demonstration only: the window carries no behavioral
    /// contract. The pipeline keeps running until disposal.
    pub async fn combine_latest_intervals(
        &self,
        fast_period: Duration,
        slow_period: Duration,
        demo_window: Duration,
    ) {
        let fast_ticks =
            IntervalStream::new(interval(fast_period)).enumerate().map(|(i, _)| i as u64);
        let slow_ticks =
            IntervalStream::new(interval(slow_period)).enumerate().map(|(i, _)| i as u64);

        self.bag.add(Disposable::spawn(move |token| async move {
            let mut pairs =
                Box::pin(fast_ticks.combine_latest(slow_ticks, |fast: &u64, slow: &u64| {
                    (*fast, *slow)
                }));
            loop {
                tokio::select! {
                    () = token.cancelled() => break,
                    next = pairs.next() => {
                        let Some((fast, slow)) = next else { break };
                        debug!(fast, slow, "combined tick");
                    }
                }
            }
        }));

        sleep(demo_window).await;
    }

    /// Tears the view-model down: cancels every pipeline and closes the cell.
    ///
    /// Idempotent. After the first call no further delivery reaches the text
    /// cell; an emission already in flight may or may not have landed.
    pub fn dispose(&self) {
        self.bag.dispose_all();
        self.text.close();
    }

    /// Returns `true` once [`dispose`](FormViewModel::dispose) has run.
    #[must_use]
    pub fn is_disposed(&self) -> bool {
        self.bag.is_disposed()
    }
}
