// Copyright 2026 viewflow contributors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use tokio::sync::mpsc;
use tokio_stream::wrappers::UnboundedReceiverStream;

/// Creates an unbounded sender/stream pair for driving operators in tests.
pub fn test_channel<T>() -> (TestChannel<T>, UnboundedReceiverStream<T>) {
    let (sender, receiver) = mpsc::unbounded_channel();
    (TestChannel { sender }, UnboundedReceiverStream::new(receiver))
}

/// Sender half of a [`test_channel`].
pub struct TestChannel<T> {
    sender: mpsc::UnboundedSender<T>,
}

impl<T> TestChannel<T> {
    /// Send a value through the channel.
    ///
    /// # Errors
    ///
    /// Returns an error if the receiver has been dropped.
    pub fn send(&self, value: T) -> Result<(), mpsc::error::SendError<T>> {
        self.sender.send(value)
    }

    /// Close the sender side, ending the stream.
    pub fn close(self) {
        drop(self.sender);
    }
}
