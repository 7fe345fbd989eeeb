// Copyright 2026 viewflow contributors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Test utilities for the viewflow crates.
//!
//! Provides imperative test plumbing: a sender/stream pair for feeding
//! operators, plus timing-tolerant assertion helpers. For testing only, not
//! production code.

pub mod helpers;
pub mod test_channel;

pub use self::helpers::{assert_no_element_emitted, expect_next};
pub use self::test_channel::{test_channel, TestChannel};
