// Copyright 2026 viewflow contributors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use viewflow_core::{Disposable, DisposeBag};

#[tokio::test]
async fn test_dispose_cancels_spawned_task() {
    // Arrange
    let stopped = Arc::new(AtomicBool::new(false));
    let stopped_clone = stopped.clone();
    let mut sub = Disposable::spawn(|token| async move {
        token.cancelled().await;
        stopped_clone.store(true, Ordering::SeqCst);
    });

    // Act
    sub.dispose();
    sub.join().await;

    // Assert
    assert!(sub.is_disposed());
    assert!(stopped.load(Ordering::SeqCst));
}

#[tokio::test]
async fn test_drop_cancels_subscription() {
    // Arrange
    let stopped = Arc::new(AtomicBool::new(false));
    let stopped_clone = stopped.clone();
    let (done_tx, done_rx) = tokio::sync::oneshot::channel();
    let sub = Disposable::spawn(|token| async move {
        token.cancelled().await;
        stopped_clone.store(true, Ordering::SeqCst);
        let _ = done_tx.send(());
    });

    // Act
    drop(sub);

    // Assert
    done_rx.await.unwrap();
    assert!(stopped.load(Ordering::SeqCst));
}

#[tokio::test]
async fn test_dispose_all_cancels_every_entry() {
    // Arrange
    let bag = DisposeBag::new();
    let (first_tx, first_rx) = tokio::sync::oneshot::channel();
    let (second_tx, second_rx) = tokio::sync::oneshot::channel();
    bag.add(Disposable::spawn(|token| async move {
        token.cancelled().await;
        let _ = first_tx.send(());
    }));
    bag.add(Disposable::spawn(|token| async move {
        token.cancelled().await;
        let _ = second_tx.send(());
    }));
    assert_eq!(bag.len(), 2);

    // Act
    bag.dispose_all();

    // Assert
    first_rx.await.unwrap();
    second_rx.await.unwrap();
    assert!(bag.is_disposed());
    assert!(bag.is_empty());
}

#[tokio::test]
async fn test_dispose_all_twice_is_noop() {
    // Arrange
    let bag = DisposeBag::new();
    bag.add(Disposable::spawn(|token| async move {
        token.cancelled().await;
    }));

    // Act
    bag.dispose_all();
    bag.dispose_all();

    // Assert
    assert!(bag.is_disposed());
}

#[tokio::test]
async fn test_add_after_dispose_cancels_immediately() {
    // Arrange
    let bag = DisposeBag::new();
    bag.dispose_all();

    // Act
    let (done_tx, done_rx) = tokio::sync::oneshot::channel();
    bag.add(Disposable::spawn(|token| async move {
        token.cancelled().await;
        let _ = done_tx.send(());
    }));

    // Assert: the late subscription is disposed on the spot, not retained.
    done_rx.await.unwrap();
    assert!(bag.is_empty());
}
