// Copyright 2026 viewflow contributors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use futures::stream::StreamExt;
use futures::Stream;
use std::fmt::Debug;
use std::time::Duration;
use tokio::time::sleep;

/// Asserts that the stream stays silent for `timeout_ms` milliseconds.
pub async fn assert_no_element_emitted<S, T>(stream: &mut S, timeout_ms: u64)
where
    S: Stream<Item = T> + Unpin,
{
    tokio::select! {
        _item = stream.next() => {
            panic!("Unexpected element emitted, expected no output.");
        }
        _ = sleep(Duration::from_millis(timeout_ms)) => {
        }
    }
}

/// Awaits the next element and asserts it equals `expected`.
pub async fn expect_next<S, T>(stream: &mut S, expected: T)
where
    S: Stream<Item = T> + Unpin,
    T: PartialEq + Debug,
{
    let item = stream.next().await.expect("expected next item");
    assert_eq!(item, expected);
}
