// Copyright 2026 viewflow contributors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

/// A text-change event from a UI text field.
///
/// Carries the full field content after the edit, not a delta.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextChange {
    text: String,
}

impl TextChange {
    /// Creates an event carrying the field's current content.
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// The field content at the time of the event.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Consumes the event, returning the field content.
    #[must_use]
    pub fn into_text(self) -> String {
        self.text
    }
}
