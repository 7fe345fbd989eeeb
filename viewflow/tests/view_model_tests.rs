// Copyright 2026 viewflow contributors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use futures::StreamExt;
use std::sync::atomic::Ordering;
use std::time::Duration;
use tokio::time::{sleep, timeout};
use viewflow::{FormError, FormViewModel, TextChange};
use viewflow_test_utils::{assert_no_element_emitted, test_channel};

#[tokio::test]
async fn test_debounce_pipeline_delivers_last_text_of_burst() -> anyhow::Result<()> {
    // Arrange
    let vm = FormViewModel::new();
    let mut text = vm.text().subscribe().unwrap();
    let (tx, changes) = test_channel::<TextChange>();
    vm.watch_text_changes(changes, Duration::from_millis(50));

    // Act: a burst of edits inside the quiescence window.
    tx.send(TextChange::new("h"))?;
    tx.send(TextChange::new("he"))?;
    tx.send(TextChange::new("hello"))?;

    // Assert: exactly one state update, bearing the last text.
    assert_eq!(text.next().await.as_deref(), Some("hello"));
    assert_no_element_emitted(&mut text, 100).await;

    vm.dispose();
    Ok(())
}

#[tokio::test]
async fn test_debounce_pipeline_delivers_each_settled_text() -> anyhow::Result<()> {
    // Arrange
    let vm = FormViewModel::new();
    let mut text = vm.text().subscribe().unwrap();
    let (tx, changes) = test_channel::<TextChange>();
    vm.watch_text_changes(changes, Duration::from_millis(20));

    // Act / Assert
    tx.send(TextChange::new("first"))?;
    assert_eq!(text.next().await.as_deref(), Some("first"));

    sleep(Duration::from_millis(40)).await;
    tx.send(TextChange::new("second"))?;
    assert_eq!(text.next().await.as_deref(), Some("second"));

    vm.dispose();
    Ok(())
}

#[tokio::test]
async fn test_zip_pipeline_publishes_three_paired_lines() {
    // Arrange
    let vm = FormViewModel::new();
    let mut text = vm.text().subscribe().unwrap();

    // Act
    vm.zip_numbers_with_items();

    // Assert: three pairs, the two unmatched integers ignored, one update.
    let report = text.next().await.unwrap();
    assert_eq!(report, "1  item1 \n2  item2 \n3  item3 \n");
    assert_eq!(report.lines().count(), 3);

    vm.dispose();
}

#[tokio::test]
async fn test_repeat_until_pipeline_stops_at_limit() {
    // Arrange
    let vm = FormViewModel::new();

    // Act
    let counter = vm.repeat_until_limit();

    // Assert: terminal counter value is exactly ten.
    timeout(Duration::from_secs(1), async {
        while counter.load(Ordering::SeqCst) != 10 {
            sleep(Duration::from_millis(5)).await;
        }
    })
    .await
    .expect("repeat-until pipeline did not terminate");

    // The pipeline is done; the counter never moves past the limit.
    sleep(Duration::from_millis(50)).await;
    assert_eq!(counter.load(Ordering::SeqCst), 10);

    vm.dispose();
}

#[tokio::test]
async fn test_form_validation_revalidates_on_either_field() -> anyhow::Result<()> {
    // Arrange
    let vm = FormViewModel::new();
    let (name_tx, names) = test_channel::<String>();
    let (password_tx, passwords) = test_channel::<String>();
    let mut outcomes = Box::pin(vm.form_validation(names, passwords));

    // Act / Assert: nothing until both fields have a value.
    name_tx.send("alice".to_owned())?;
    assert_no_element_emitted(&mut outcomes, 50).await;

    password_tx.send(String::new())?;
    let outcome = outcomes.next().await.unwrap();
    assert_eq!(outcome.error, Some(FormError::InvalidPassword));

    // A keystroke on the password field alone re-validates the pair.
    password_tx.send("StrongPass1!".to_owned())?;
    let outcome = outcomes.next().await.unwrap();
    assert!(outcome.is_valid());

    // Clearing the name invalidates again, using the latest password.
    name_tx.send(String::new())?;
    let outcome = outcomes.next().await.unwrap();
    assert_eq!(outcome.error, Some(FormError::InvalidName));

    vm.dispose();
    Ok(())
}

#[tokio::test]
async fn test_combine_latest_demo_returns_after_window() {
    // Arrange
    let vm = FormViewModel::new();

    // Act: the demo window bounds the wait, not the tick counts.
    timeout(
        Duration::from_secs(1),
        vm.combine_latest_intervals(
            Duration::from_millis(10),
            Duration::from_millis(5),
            Duration::from_millis(50),
        ),
    )
    .await
    .expect("demo pause did not end with its window");

    // Assert: the tick pipeline is still registered until disposal.
    assert!(!vm.is_disposed());
    vm.dispose();
    assert!(vm.is_disposed());
}

#[tokio::test]
async fn test_dispose_twice_is_noop() {
    // Arrange
    let vm = FormViewModel::new();
    vm.zip_numbers_with_items();

    // Act
    vm.dispose();
    vm.dispose();

    // Assert
    assert!(vm.is_disposed());
}

#[tokio::test]
async fn test_no_delivery_after_dispose() -> anyhow::Result<()> {
    // Arrange
    let vm = FormViewModel::new();
    let mut text = vm.text().subscribe().unwrap();
    let (tx, changes) = test_channel::<TextChange>();
    vm.watch_text_changes(changes, Duration::from_millis(10));

    tx.send(TextChange::new("before"))?;
    assert_eq!(text.next().await.as_deref(), Some("before"));

    // Act
    vm.dispose();
    // The pipeline may already have dropped its receiver; either way the
    // event can no longer reach the cell.
    let _ = tx.send(TextChange::new("after"));

    // Assert: the cell is closed; the subscriber stream ends instead of
    // receiving the post-disposal event.
    assert_eq!(text.next().await, None);
    assert!(vm.text().is_closed());

    Ok(())
}
